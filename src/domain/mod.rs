//! Domain layer: the payslip entity, the tax engine and the ports through
//! which records enter and leave a run.

pub mod payslip;
pub mod ports;
pub mod tax;
