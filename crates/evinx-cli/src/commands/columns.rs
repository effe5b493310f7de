//! Columns command - export only the columns the user asks for.

use std::path::PathBuf;

use clap::Args;

use evinx_core::{ColumnRequest, ColumnSelection, Pipeline, XlsxExporter};

use super::output::{self, Destination, OutputFormat, Reporter};

/// Arguments for the columns command.
#[derive(Args)]
pub struct ColumnsArgs {
    /// Invoice PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Column to include (repeatable, in output order)
    #[arg(short = 'C', long = "column")]
    columns: Vec<String>,

    /// File with one column name per line
    #[arg(long)]
    column_list: Option<PathBuf>,

    /// Output file (default: filtered_invoice_data.xlsx for xlsx, stdout otherwise)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "xlsx")]
    format: OutputFormat,

    /// Do not print the extracted table
    #[arg(long)]
    no_preview: bool,
}

pub fn run(args: ColumnsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = output::load_config(config_path)?;

    // Inputs are checked before the document is touched
    let entries = output::collect_entries(&args.columns, args.column_list.as_deref())?;
    let request = ColumnRequest::new(entries)?;
    let data = output::read_input(&args.input)?;

    let destination = Destination::resolve(args.output, args.format, &config.export.filtered_output);
    let reporter = Reporter::for_destination(&destination);
    let exporter = XlsxExporter::filtered(&config.export);
    let pipeline = Pipeline::new(config)?;

    let pb = output::spinner("Extracting and filtering data...");
    let selection = pipeline.select_columns(&data, &request);
    pb.finish_and_clear();

    let (records, projection) = match selection? {
        ColumnSelection::Empty => {
            reporter.warn("No invoice data found in the uploaded PDF.");
            return Ok(());
        }
        ColumnSelection::Selected { records, projection } => (records, projection),
    };

    if projection.matched_any() {
        reporter.success(&format!(
            "Extracted {} rows with {} selected columns.",
            records,
            projection.table.columns().len()
        ));
        if !args.no_preview {
            reporter.preview(&projection.table);
        }
        let artifact = output::encode(&projection.table, args.format, &exporter)?;
        output::write_artifact(&destination, &artifact, &reporter)?;
    } else {
        reporter.warn("None of the entered column names matched the extracted data columns.");
    }

    if !projection.missing.is_empty() {
        reporter.info(&format!(
            "The following columns were not found in the invoice data: {}",
            projection.missing.join(", ")
        ));
    }

    Ok(())
}
