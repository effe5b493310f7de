//! Extract command - export every charging line item of one invoice.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::debug;

use evinx_core::{Pipeline, XlsxExporter};

use super::output::{self, Destination, OutputFormat, Reporter};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Invoice PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: invoice_data.xlsx for xlsx, stdout otherwise)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "xlsx")]
    format: OutputFormat,

    /// Do not print the extracted table
    #[arg(long)]
    no_preview: bool,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = output::load_config(config_path)?;
    let data = output::read_input(&args.input)?;

    let destination = Destination::resolve(args.output, args.format, &config.export.default_output);
    let reporter = Reporter::for_destination(&destination);
    let exporter = XlsxExporter::records(&config.export);
    let pipeline = Pipeline::new(config)?;

    let pb = output::spinner("Processing invoice...");
    let result = pipeline.extract(&data);
    pb.finish_and_clear();
    let result = result?;

    if result.is_empty() {
        reporter.warn("No matching invoice data found.");
        return Ok(());
    }

    let table = result.to_table();
    reporter.success(&format!("Extracted {} entries.", result.records.len()));
    if !args.no_preview {
        reporter.preview(&table);
    }

    let artifact = output::encode(&table, args.format, &exporter)?;
    output::write_artifact(&destination, &artifact, &reporter)?;

    debug!("Total processing time: {:?}", start.elapsed());
    Ok(())
}
