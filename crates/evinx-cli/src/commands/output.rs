//! Helpers shared by the extraction commands: config loading, input files,
//! artifact encoding and terminal output.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use evinx_core::export::TableExporter;
use evinx_core::models::config::EvinxConfig;
use evinx_core::request::split_entries;
use evinx_core::{Cell, Table, XlsxExporter};

use super::config::default_config_path;

/// Artifact format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Excel workbook
    Xlsx,
    /// CSV output
    Csv,
    /// JSON array of rows
    Json,
}

/// Where the artifact goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    File(PathBuf),
    Stdout,
}

impl Destination {
    /// Explicit path if given. Otherwise xlsx goes to `default_name`, text formats to stdout.
    pub fn resolve(output: Option<PathBuf>, format: OutputFormat, default_name: &str) -> Self {
        match (output, format) {
            (Some(path), _) => Destination::File(path),
            (None, OutputFormat::Xlsx) => Destination::File(PathBuf::from(default_name)),
            (None, _) => Destination::Stdout,
        }
    }
}

/// Load the configuration: explicit path, then the user config file, then defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<EvinxConfig> {
    if let Some(path) = config_path {
        return Ok(EvinxConfig::from_file(Path::new(path))?);
    }

    let user_config = default_config_path();
    if user_config.exists() {
        debug!("Using configuration from {}", user_config.display());
        return Ok(EvinxConfig::from_file(&user_config)?);
    }

    Ok(EvinxConfig::default())
}

/// Read the invoice file.
pub fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if extension != "pdf" {
        anyhow::bail!("Unsupported file format: {} (expected a PDF)", path.display());
    }

    Ok(fs::read(path)?)
}

/// Entries given on the command line plus those in an optional list file (one per line).
pub fn collect_entries(values: &[String], list_file: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let mut entries: Vec<String> = values.iter().flat_map(|v| split_entries(v)).collect();
    if let Some(path) = list_file {
        let content = fs::read_to_string(path)?;
        entries.extend(split_entries(&content));
    }
    Ok(entries)
}

/// Spinner shown while a document is processed.
pub fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Encode a table in the requested format.
pub fn encode(table: &Table, format: OutputFormat, exporter: &XlsxExporter) -> anyhow::Result<Vec<u8>> {
    match format {
        OutputFormat::Xlsx => Ok(exporter.export(table)?),
        OutputFormat::Csv => format_csv(table),
        OutputFormat::Json => {
            let mut data = serde_json::to_vec_pretty(&table.to_json_rows())?;
            data.push(b'\n');
            Ok(data)
        }
    }
}

fn format_csv(table: &Table) -> anyhow::Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(table.columns())?;
    for row in table.rows() {
        wtr.write_record(row.iter().map(raw_value))?;
    }

    Ok(wtr.into_inner()?)
}

/// Cell value without display rounding.
fn raw_value(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => text.clone(),
        Cell::Number(n) => n.to_string(),
    }
}

/// Status lines for the user. Go to stderr when stdout carries the artifact.
pub struct Reporter {
    to_stderr: bool,
}

impl Reporter {
    pub fn for_destination(destination: &Destination) -> Self {
        Self {
            to_stderr: *destination == Destination::Stdout,
        }
    }

    fn emit(&self, line: String) {
        if self.to_stderr {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    pub fn success(&self, message: &str) {
        self.emit(format!("{} {}", style("✓").green(), message));
    }

    pub fn warn(&self, message: &str) {
        self.emit(format!("{} {}", style("⚠").yellow(), message));
    }

    pub fn info(&self, message: &str) {
        self.emit(format!("{} {}", style("ℹ").blue(), message));
    }

    /// Print the table unless stdout carries the artifact.
    pub fn preview(&self, table: &Table) {
        if !self.to_stderr {
            println!("{}", render_table(table));
        }
    }
}

/// Plain-text table with aligned columns; numbers right-aligned with two decimals.
pub fn render_table(table: &Table) -> String {
    let cells: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect();

    let widths: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header: Vec<String> = table
        .columns()
        .iter()
        .zip(&widths)
        .map(|(name, &w)| pad(name, w, false))
        .collect();
    out.push_str(&style(header.join("  ").trim_end().to_string()).bold().to_string());
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&rule.join("  "));

    for (row, rendered) in table.rows().iter().zip(&cells) {
        out.push('\n');
        let line: Vec<String> = row
            .iter()
            .zip(rendered)
            .zip(&widths)
            .map(|((cell, text), &w)| pad(text, w, cell.as_number().is_some()))
            .collect();
        out.push_str(line.join("  ").trim_end());
    }

    out
}

fn pad(text: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    if right {
        format!("{}{}", fill, text)
    } else {
        format!("{}{}", text, fill)
    }
}

/// Write the artifact and report where it went.
pub fn write_artifact(destination: &Destination, data: &[u8], reporter: &Reporter) -> anyhow::Result<()> {
    match destination {
        Destination::File(path) => {
            fs::write(path, data)?;
            reporter.success(&format!("Output written to {}", path.display()));
        }
        Destination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
