//! Keywords command - list every invoice line containing one of the keywords.

use std::path::PathBuf;

use clap::Args;

use evinx_core::{KeywordRequest, Pipeline, XlsxExporter};

use super::output::{self, Destination, OutputFormat, Reporter};

/// Arguments for the keywords command.
#[derive(Args)]
pub struct KeywordsArgs {
    /// Invoice PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Keyword to search for, case-insensitive (repeatable)
    #[arg(short, long = "keyword")]
    keywords: Vec<String>,

    /// File with one keyword per line
    #[arg(long)]
    keyword_list: Option<PathBuf>,

    /// Output file (default: keyword_matches.xlsx for xlsx, stdout otherwise)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "xlsx")]
    format: OutputFormat,

    /// Do not print the matches
    #[arg(long)]
    no_preview: bool,
}

pub fn run(args: KeywordsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = output::load_config(config_path)?;

    let entries = output::collect_entries(&args.keywords, args.keyword_list.as_deref())?;
    let request = KeywordRequest::new(entries)?;
    let data = output::read_input(&args.input)?;

    let destination = Destination::resolve(args.output, args.format, &config.export.keyword_output);
    let reporter = Reporter::for_destination(&destination);
    let exporter = XlsxExporter::keywords(&config.export);
    let pipeline = Pipeline::new(config)?;

    let pb = output::spinner("Scanning invoice text...");
    let scan = pipeline.scan_keywords(&data, &request);
    pb.finish_and_clear();
    let scan = scan?;

    if scan.is_empty() {
        reporter.warn("No lines matched the entered keywords.");
    } else {
        let table = scan.to_table();
        reporter.success(&format!("Found {} matching lines.", scan.matches.len()));
        if !args.no_preview {
            reporter.preview(&table);
        }
        let artifact = output::encode(&table, args.format, &exporter)?;
        output::write_artifact(&destination, &artifact, &reporter)?;
    }

    if !scan.missing.is_empty() {
        reporter.info(&format!(
            "The following keywords were not found: {}",
            scan.missing.join(", ")
        ));
    }

    Ok(())
}
