//! Application layer orchestrating a payslip run.
//!
//! [`app::PayslipApp`] ties the ports to the calculation and turns every
//! possible run result into one of the fixed report messages.

pub mod app;
