#![allow(dead_code)]

use monthly_payslip::domain::payslip::Payslip;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 4] = ["name", "annual_salary", "super_rate", "payment_period"];

pub fn payslip(name: &str, salary: Decimal, rate: &str) -> Payslip {
    Payslip::new(
        name,
        salary,
        rate.parse().expect("valid super rate"),
        "01 March - 31 March",
    )
}

/// Writes an input CSV with `rows` employees on increasing salaries.
pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(HEADER)?;
    for i in 1..=rows {
        wtr.write_record([
            format!("Employee {i}").as_str(),
            (i * 10_000).to_string().as_str(),
            "9%",
            "01 March - 31 March",
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
