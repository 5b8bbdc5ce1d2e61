use crate::domain::ports::{PayslipReader, PayslipWriter};
use crate::domain::tax::TaxSchedule;
use crate::error::{PayslipError, Result};
use std::error::Error;
use tracing::{debug, info, warn};

/// Name of the report written by every successful run.
pub const OUTPUT_CSV_FILENAME: &str = "payslip-output.csv";

/// Runs one batch: validate arguments, read, calculate, write, report.
///
/// The reader and writer are injected so the same orchestration drives the
/// CSV files in production and in-memory doubles in tests.
pub struct PayslipApp<R, W> {
    reader: R,
    writer: W,
    schedule: TaxSchedule,
}

impl<R: PayslipReader, W: PayslipWriter> PayslipApp<R, W> {
    /// Creates an app using the default tax schedule.
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_schedule(reader, writer, TaxSchedule::default())
    }

    pub fn with_schedule(reader: R, writer: W, schedule: TaxSchedule) -> Self {
        Self {
            reader,
            writer,
            schedule,
        }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Executes a run and renders its outcome as the user-facing message.
    ///
    /// Never fails: every error is logged and translated into its fixed text.
    pub fn execute<I, S>(&self, args: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        render_outcome(self.run(args))
    }

    /// Executes a run, returning the name of the file written.
    pub fn run<I, S>(&self, args: I) -> Result<&'static str>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let filename = single_argument(args)?;

        let mut payslips = self
            .reader
            .read(&filename)
            .map_err(|e| PayslipError::from_read(e, &filename))?;
        info!(input = %filename, count = payslips.len(), "read payslips");

        for payslip in payslips.iter_mut() {
            payslip.calculate(&self.schedule);
            debug!(name = %payslip.name, figures = ?payslip.figures(), "calculated payslip");
        }

        self.writer
            .write(&payslips, OUTPUT_CSV_FILENAME)
            .map_err(|e| PayslipError::from_write(e, OUTPUT_CSV_FILENAME))?;
        info!(output = OUTPUT_CSV_FILENAME, count = payslips.len(), "wrote payslips");

        Ok(OUTPUT_CSV_FILENAME)
    }
}

/// Turns the result of [`PayslipApp::run`] into the message reported to the user.
///
/// Failures are logged with their underlying cause before being rendered.
pub fn render_outcome(result: Result<&str>) -> String {
    match result {
        Ok(output) => format!("{output} file generated"),
        Err(err) => {
            match err.source() {
                Some(source) => warn!(error = %err, cause = %source, "payslip run failed"),
                None => warn!(error = %err, "payslip run failed"),
            }
            err.to_string()
        }
    }
}

/// Accepts exactly one non-blank argument.
fn single_argument<I, S>(args: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(arg), None) if !arg.as_ref().trim().is_empty() => Ok(arg.as_ref().to_string()),
        _ => Err(PayslipError::Usage),
    }
}
