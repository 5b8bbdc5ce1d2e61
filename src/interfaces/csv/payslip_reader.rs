use crate::domain::payslip::{Payslip, SuperRate};
use crate::domain::ports::PayslipReader;
use crate::error::ReadError;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raw input row, before domain validation.
#[derive(Debug, Deserialize)]
struct PayslipRecord {
    name: String,
    #[serde(with = "rust_decimal::serde::str")]
    annual_salary: Decimal,
    super_rate: String,
    payment_period: String,
}

impl PayslipRecord {
    fn into_payslip(self) -> Result<Payslip, String> {
        if self.name.is_empty() {
            return Err("employee name is empty".to_string());
        }
        if self.annual_salary < Decimal::ZERO {
            return Err(format!("annual salary {} is negative", self.annual_salary));
        }
        let super_rate = self.super_rate.parse::<SuperRate>().map_err(|e| e.to_string())?;
        Ok(Payslip::new(
            self.name,
            self.annual_salary,
            super_rate,
            self.payment_period,
        ))
    }
}

/// Reads payslip records from a CSV source.
///
/// Expects a `name,annual_salary,super_rate,payment_period` header. Fields are
/// trimmed and every row must have exactly four columns.
pub struct PayslipCsvReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PayslipCsvReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes and validates each row.
    ///
    /// Errors carry a human-readable description including the line number.
    pub fn payslips(self) -> impl Iterator<Item = Result<Payslip, String>> {
        self.reader
            .into_deserialize::<PayslipRecord>()
            .enumerate()
            .map(|(index, result)| {
                let record = result.map_err(|e| e.to_string())?;
                record.into_payslip().map_err(|message| format!("line {}: {message}", index + 2))
            })
    }
}

/// Reads a whole CSV file from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvPayslipReader;

impl CsvPayslipReader {
    pub fn new() -> Self {
        Self
    }
}

impl PayslipReader for CsvPayslipReader {
    fn read(&self, filename: &str) -> Result<Vec<Payslip>, ReadError> {
        let path = Path::new(filename);
        if !path.is_file() {
            return Err(ReadError::NotFound {
                path: filename.to_string(),
            });
        }
        let file = File::open(path).map_err(|_| ReadError::NotFound {
            path: filename.to_string(),
        })?;

        PayslipCsvReader::new(file)
            .payslips()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|message| ReadError::Parse {
                path: filename.to_string(),
                message,
            })
    }
}
