use crate::domain::payslip::Payslip;
use crate::domain::ports::{PayslipReader, PayslipWriter};
use crate::error::{ReadError, WriteError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

/// What a named in-memory input resolves to.
#[derive(Debug, Clone)]
enum Input {
    Payslips(Vec<Payslip>),
    Unparsable(String),
}

/// An in-memory payslip source keyed by filename.
///
/// Unknown names behave like missing files. Every call is recorded so a run
/// can be inspected afterwards.
#[derive(Debug, Default)]
pub struct InMemoryPayslipReader {
    inputs: HashMap<String, Input>,
    calls: RefCell<Vec<String>>,
}

impl InMemoryPayslipReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, filename: impl Into<String>, payslips: Vec<Payslip>) -> Self {
        self.inputs.insert(filename.into(), Input::Payslips(payslips));
        self
    }

    /// Registers a file whose contents fail to parse.
    pub fn with_unparsable(mut self, filename: impl Into<String>, message: impl Into<String>) -> Self {
        self.inputs
            .insert(filename.into(), Input::Unparsable(message.into()));
        self
    }

    /// Filenames passed to `read`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl PayslipReader for InMemoryPayslipReader {
    fn read(&self, filename: &str) -> Result<Vec<Payslip>, ReadError> {
        self.calls.borrow_mut().push(filename.to_string());
        match self.inputs.get(filename) {
            Some(Input::Payslips(payslips)) => Ok(payslips.clone()),
            Some(Input::Unparsable(message)) => Err(ReadError::Parse {
                path: filename.to_string(),
                message: message.clone(),
            }),
            None => Err(ReadError::NotFound {
                path: filename.to_string(),
            }),
        }
    }
}

/// One captured `write` call.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenReport {
    pub filename: String,
    pub payslips: Vec<Payslip>,
}

/// An in-memory payslip sink that keeps every report it receives.
#[derive(Debug, Default)]
pub struct InMemoryPayslipWriter {
    reports: RefCell<Vec<WrittenReport>>,
    failure: Option<io::ErrorKind>,
}

impl InMemoryPayslipWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A writer whose every call fails with the given IO error kind.
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            reports: RefCell::default(),
            failure: Some(kind),
        }
    }

    pub fn reports(&self) -> Vec<WrittenReport> {
        self.reports.borrow().clone()
    }
}

impl PayslipWriter for InMemoryPayslipWriter {
    fn write(&self, payslips: &[Payslip], filename: &str) -> Result<(), WriteError> {
        if let Some(kind) = self.failure {
            return Err(WriteError::Io(io::Error::from(kind)));
        }
        if let Some(payslip) = payslips.iter().find(|p| !p.is_calculated()) {
            return Err(WriteError::Uncalculated {
                name: payslip.name.clone(),
            });
        }
        self.reports.borrow_mut().push(WrittenReport {
            filename: filename.to_string(),
            payslips: payslips.to_vec(),
        });
        Ok(())
    }
}
