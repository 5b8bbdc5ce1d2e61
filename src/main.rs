use clap::Parser;
use miette::{IntoDiagnostic, Result};
use monthly_payslip::application::app::{PayslipApp, render_outcome};
use monthly_payslip::config::resolve_schedule;
use monthly_payslip::interfaces::csv::payslip_reader::CsvPayslipReader;
use monthly_payslip::interfaces::csv::payslip_writer::CsvPayslipWriter;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payslip CSV file (exactly one)
    #[arg(allow_hyphen_values = true)]
    inputs: Vec<String>,

    /// JSON tax bracket table replacing the built-in schedule
    #[arg(long, env = "PAYSLIP_TAX_SCHEDULE")]
    tax_schedule: Option<PathBuf>,

    /// Directory the report is written into
    #[arg(long, env = "PAYSLIP_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let schedule = resolve_schedule(cli.tax_schedule.as_deref()).into_diagnostic()?;

    let app = PayslipApp::with_schedule(
        CsvPayslipReader::new(),
        CsvPayslipWriter::new(cli.output_dir),
        schedule,
    );

    let result = app.run(&cli.inputs);
    let code = if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };
    println!("{}", render_outcome(result));

    Ok(code)
}
