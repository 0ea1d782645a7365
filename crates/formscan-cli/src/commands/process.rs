//! Process command - extract fields from a single OCR text file.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use formscan_core::{ExtractionResult, FixedFormParser, FormParser, FormRecord, ProcessResponse};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input text file produced by an OCR engine ("-" for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Include the raw and cleaned text in JSON output
    #[arg(long)]
    with_cleaned: bool,

    /// List fields that could not be extracted
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;
    let parser = FixedFormParser::from_config(&config)?;

    let text = read_input(&args.input)?;
    info!("Processing {} ({} bytes)", args.input.display(), text.len());

    let result = parser.parse(&text);

    let output = if args.with_cleaned && matches!(args.format, OutputFormat::Json) {
        let response = ProcessResponse {
            input: text,
            cleaned: result.cleaned_text.clone(),
            results: result.record.clone(),
        };
        serde_json::to_string_pretty(&response)?
    } else {
        format_record(&result.record, args.format)?
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_warnings {
        print_warnings(&result);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn read_input(input: &PathBuf) -> anyhow::Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    Ok(fs::read_to_string(input)?)
}

fn print_warnings(result: &ExtractionResult) {
    if result.warnings.is_empty() {
        eprintln!("{} All fields extracted", style("ℹ").blue());
        return;
    }

    eprintln!("{}", style("Extraction warnings:").yellow());
    for warning in &result.warnings {
        eprintln!("  - {}", warning);
    }
}

pub fn format_record(record: &FormRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &FormRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(record.fields().map(|(field, _)| field.key()))?;
    wtr.write_record(record.fields().map(|(_, value)| value))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &FormRecord) -> String {
    let mut output = String::new();

    for (field, value) in record.fields() {
        let value = if value.is_empty() { "-" } else { value };
        output.push_str(&format!("{:<14} {}\n", format!("{}:", field.display_name()), value));
    }

    output
}
