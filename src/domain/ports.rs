use super::payslip::Payslip;
use crate::error::{ReadError, WriteError};

/// Source of uncalculated payslip records.
pub trait PayslipReader {
    fn read(&self, filename: &str) -> Result<Vec<Payslip>, ReadError>;
}

/// Sink for calculated payslip records.
pub trait PayslipWriter {
    fn write(&self, payslips: &[Payslip], filename: &str) -> Result<(), WriteError>;
}

impl<T: PayslipReader + ?Sized> PayslipReader for &T {
    fn read(&self, filename: &str) -> Result<Vec<Payslip>, ReadError> {
        (**self).read(filename)
    }
}

impl<T: PayslipWriter + ?Sized> PayslipWriter for &T {
    fn write(&self, payslips: &[Payslip], filename: &str) -> Result<(), WriteError> {
        (**self).write(payslips, filename)
    }
}

pub type PayslipReaderBox = Box<dyn PayslipReader>;
pub type PayslipWriterBox = Box<dyn PayslipWriter>;

impl PayslipReader for PayslipReaderBox {
    fn read(&self, filename: &str) -> Result<Vec<Payslip>, ReadError> {
        (**self).read(filename)
    }
}

impl PayslipWriter for PayslipWriterBox {
    fn write(&self, payslips: &[Payslip], filename: &str) -> Result<(), WriteError> {
        (**self).write(payslips, filename)
    }
}
