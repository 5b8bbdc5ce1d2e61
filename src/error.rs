use rust_decimal::Decimal;
use thiserror::Error;

/// Literal usage text reported for any malformed invocation.
pub const USAGE: &str = "Usage: java -jar MontlypaySlip.jar <CSV_INPUT_FILE>";

/// The outcome of a failed run.
///
/// Each variant renders as the exact message reported to the user, so this
/// enum is the one place where a failure condition is mapped to its text.
#[derive(Error, Debug)]
pub enum PayslipError {
    #[error("{}", USAGE)]
    Usage,
    #[error("File {path} not found")]
    InputNotFound { path: String },
    #[error("Could not parse file {path}")]
    InputParse {
        path: String,
        #[source]
        source: ReadError,
    },
    #[error("Could not write output file {path}")]
    OutputWrite {
        path: String,
        #[source]
        source: WriteError,
    },
}

impl PayslipError {
    /// Classifies a reader failure against the filename the user supplied.
    pub fn from_read(source: ReadError, path: &str) -> Self {
        match source {
            ReadError::NotFound { .. } => Self::InputNotFound {
                path: path.to_string(),
            },
            source @ ReadError::Parse { .. } => Self::InputParse {
                path: path.to_string(),
                source,
            },
        }
    }

    pub fn from_write(source: WriteError, path: &str) -> Self {
        Self::OutputWrite {
            path: path.to_string(),
            source,
        }
    }
}

/// Failures signalled by a [`PayslipReader`](crate::domain::ports::PayslipReader).
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("input file {path} not found")]
    NotFound { path: String },
    #[error("malformed input in {path}: {message}")]
    Parse { path: String, message: String },
}

/// Failures signalled by a [`PayslipWriter`](crate::domain::ports::PayslipWriter).
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("payslip for {name} has not been calculated")]
    Uncalculated { name: String },
}

/// Reasons a bracket table is rejected by [`TaxSchedule::new`](crate::domain::tax::TaxSchedule::new).
#[derive(Error, Debug, PartialEq)]
pub enum ScheduleError {
    #[error("tax schedule has no brackets")]
    Empty,
    #[error("first bracket must start at 0, found {0}")]
    NonZeroStart(Decimal),
    #[error("first bracket base tax must be 0, found {0}")]
    NonZeroBase(Decimal),
    #[error("bracket {index} is empty or inverted")]
    EmptyRange { index: usize },
    #[error("bracket {index} ends at {end} but the next starts at {next_start}")]
    Gap {
        index: usize,
        end: Decimal,
        next_start: Decimal,
    },
    #[error("only the last bracket may be unbounded (bracket {index})")]
    UnboundedBeforeLast { index: usize },
    #[error("last bracket must be unbounded")]
    BoundedLast,
    #[error("bracket {index} rate {rate} is outside [0, 1]")]
    RateOutOfRange { index: usize, rate: Decimal },
    #[error("bracket {index} base tax {found} does not continue from {expected}")]
    Discontinuous {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },
}

/// Reasons a superannuation rate is rejected.
#[derive(Error, Debug, PartialEq)]
pub enum SuperRateError {
    #[error("invalid super rate '{0}'")]
    Invalid(String),
    #[error("super rate {0} is outside 0-100%")]
    OutOfRange(Decimal),
}

pub type Result<T> = std::result::Result<T, PayslipError>;
