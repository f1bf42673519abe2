//! roster2csv - Reconstruct roster tables from OCR annotation dumps
//!
//! A command line tool that reads the text annotations an OCR engine
//! produced for roster screenshots (JSON, one file per screenshot) and
//! writes the reconstructed player records as CSV or JSON.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use muster_core::high_level::extract_records_json;
use muster_core::layout::params::{
    DEFAULT_PIXEL_MARGIN, DEFAULT_ROW_MARGIN, DEFAULT_SUBROW_MARGIN,
};
use muster_core::{ExtractParams, FieldStrategy, Record};

/// Output type for the extracted records.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// One name,rank,power row per record (default)
    #[default]
    Csv,
    /// JSON array of record objects
    Json,
}

/// Field-splitting strategy within a row.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum SplitStrategy {
    /// Cluster each row into stacked lines by vertical gaps (default)
    #[default]
    Subrows,
    /// Bisect each row at the horizontal midpoint
    Horizontal,
}

impl From<SplitStrategy> for FieldStrategy {
    fn from(strategy: SplitStrategy) -> Self {
        match strategy {
            SplitStrategy::Subrows => FieldStrategy::VerticalSubrows,
            SplitStrategy::Horizontal => FieldStrategy::HorizontalSplit,
        }
    }
}

/// A command line tool for reconstructing roster tables from OCR text
/// annotations and outputting them as CSV or JSON.
#[derive(Parser, Debug)]
#[command(name = "roster2csv")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more paths to annotation JSON files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    // === Extraction options ===
    /// Column-header label that anchors each roster row
    #[arg(short = 'a', long, default_value = "POWER")]
    anchor: String,

    /// Horizontal alignment tolerance in pixels
    #[arg(long = "pixel-margin", default_value_t = DEFAULT_PIXEL_MARGIN)]
    pixel_margin: f64,

    /// Gap in pixels subtracted when deriving a row end from the next row start
    #[arg(long = "row-margin", default_value_t = DEFAULT_ROW_MARGIN)]
    row_margin: f64,

    /// Vertical-center gap in pixels that starts a new line within a row
    #[arg(long = "subrow-margin", default_value_t = DEFAULT_SUBROW_MARGIN)]
    subrow_margin: f64,

    /// Field-splitting strategy
    #[arg(short = 's', long, value_enum, default_value = "subrows")]
    strategy: SplitStrategy,

    // === Output options ===
    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Type of output to generate
    #[arg(short = 't', long = "output-type", value_enum, default_value = "csv")]
    output_type: OutputType,
}

fn build_params(args: &Args) -> ExtractParams {
    ExtractParams {
        anchor_text: args.anchor.clone(),
        pixel_margin: args.pixel_margin,
        row_margin: args.row_margin,
        subrow_margin: args.subrow_margin,
        field_strategy: args.strategy.into(),
    }
}

fn write_csv<W: Write>(records: &[Record], writer: &mut W) -> csv::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    for record in records {
        csv_writer.write_record([&record.name, &record.rank, &record.power])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Process a single annotation file.
fn process_file<W: Write>(
    path: &PathBuf,
    writer: &mut W,
    params: &ExtractParams,
    output_type: OutputType,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read_to_string(path)?;
    let records = extract_records_json(&data, params)?;

    match output_type {
        OutputType::Csv => write_csv(&records, writer)?,
        OutputType::Json => {
            serde_json::to_writer_pretty(&mut *writer, &records)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    let params = build_params(&args);

    // Open output file or use stdout
    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = fs::File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    for path in &args.files {
        if !path.exists() {
            eprintln!("Error: File not found: {}", path.display());
            std::process::exit(1);
        }

        if let Err(e) = process_file(path, &mut output, &params, args.output_type) {
            eprintln!("Error processing {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    output.flush()?;

    Ok(())
}
