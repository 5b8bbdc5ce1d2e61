use crate::domain::payslip::Payslip;
use crate::domain::ports::PayslipWriter;
use crate::error::WriteError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct PayslipRow<'a> {
    name: &'a str,
    pay_period: &'a str,
    gross_income: Decimal,
    income_tax: Decimal,
    net_income: Decimal,
    super_amount: Decimal,
}

impl<'a> TryFrom<&'a Payslip> for PayslipRow<'a> {
    type Error = WriteError;

    fn try_from(payslip: &'a Payslip) -> Result<Self, Self::Error> {
        let figures = payslip.figures().ok_or_else(|| WriteError::Uncalculated {
            name: payslip.name.clone(),
        })?;
        Ok(Self {
            name: &payslip.name,
            pay_period: &payslip.payment_period,
            gross_income: figures.gross_income,
            income_tax: figures.income_tax,
            net_income: figures.net_income,
            super_amount: figures.super_amount,
        })
    }
}

/// Fails on the first uncalculated payslip.
fn payslip_rows(payslips: &[Payslip]) -> Result<Vec<PayslipRow<'_>>, WriteError> {
    payslips.iter().map(PayslipRow::try_from).collect()
}

/// Writes calculated payslips as CSV to any `Write` sink.
pub struct PayslipCsvWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PayslipCsvWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes the header and one row per payslip, then flushes.
    ///
    /// Every payslip is checked before anything is written, so an
    /// uncalculated record never leaves a partial report behind.
    pub fn write_payslips(&mut self, payslips: &[Payslip]) -> Result<(), WriteError> {
        let rows = payslip_rows(payslips)?;
        self.write_rows(rows)
    }

    fn write_rows(&mut self, rows: Vec<PayslipRow<'_>>) -> Result<(), WriteError> {
        if rows.is_empty() {
            self.writer.write_record([
                "name",
                "pay_period",
                "gross_income",
                "income_tax",
                "net_income",
                "super_amount",
            ])?;
        }
        for row in rows {
            self.writer.serialize(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes reports into a directory on disk.
#[derive(Debug, Clone)]
pub struct CsvPayslipWriter {
    output_dir: PathBuf,
}

impl CsvPayslipWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl Default for CsvPayslipWriter {
    fn default() -> Self {
        Self::new(".")
    }
}

impl PayslipWriter for CsvPayslipWriter {
    fn write(&self, payslips: &[Payslip], filename: &str) -> Result<(), WriteError> {
        let rows = payslip_rows(payslips)?;
        let file = File::create(self.output_dir.join(filename))?;
        PayslipCsvWriter::new(file).write_rows(rows)
    }
}
