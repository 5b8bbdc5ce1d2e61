//! CSV adapters for the payslip ports.

pub mod payslip_reader;
pub mod payslip_writer;
