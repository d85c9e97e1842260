use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use csvdoc_config::Config;
use csvdoc_engine::{FileType, io, transform};
use std::path::PathBuf;
use std::process;

/// Generate HTML documents from CSV/TSV tabular markup.
#[derive(Parser)]
#[command(name = "csvd", version, about)]
struct Cli {
    /// Input CSV/TSV document
    input: PathBuf,

    /// Output HTML file
    output: PathBuf,

    /// Input file type; falls back to the config file, then to csv
    #[arg(short = 't', long = "type", value_enum)]
    file_type: Option<InputType>,

    /// Show detailed progress information
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputType {
    Csv,
    Tsv,
}

impl From<InputType> for FileType {
    fn from(value: InputType) -> Self {
        match value {
            InputType::Csv => FileType::Csv,
            InputType::Tsv => FileType::Tsv,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let file_type = match cli.file_type {
        Some(file_type) => file_type.into(),
        None => configured_file_type()?,
    };

    log_step(&cli, "Reading input file...", &cli.input.display().to_string());
    let input = io::read_input(&cli.input)
        .with_context(|| format!("failed to read '{}'", cli.input.display()))?;

    log_step(
        &cli,
        &format!("Converting {} to HTML...", file_type.to_string().to_uppercase()),
        &format!("processing {} lines", input.lines().count()),
    );
    let html = transform(&input, file_type)
        .with_context(|| format!("failed to convert '{}'", cli.input.display()))?;

    log_step(&cli, "Writing output file...", &cli.output.display().to_string());
    io::write_output(&cli.output, &html)
        .with_context(|| format!("failed to write '{}'", cli.output.display()))?;

    let size_kb = html.len() as f64 / 1024.0;
    log_step(
        &cli,
        "Conversion complete:",
        &format!("{} -> {} ({size_kb:.2} KB)", cli.input.display(), cli.output.display()),
    );
    Ok(())
}

/// Input type from the config file when the flag is absent; csv when
/// there is no config at all.
fn configured_file_type() -> Result<FileType> {
    let config = Config::load().context("failed to load config file")?;
    match config.and_then(|c| c.default_type) {
        None => Ok(FileType::Csv),
        Some(value) => match value.parse::<FileType>() {
            Ok(file_type) => Ok(file_type),
            Err(_) => bail!(
                "invalid default_type '{}' in {} (expected csv or tsv)",
                value,
                Config::config_path().display()
            ),
        },
    }
}

fn log_step(cli: &Cli, step: &str, detail: &str) {
    if cli.verbose {
        eprintln!("{step} {detail}");
    } else {
        eprintln!("{step}");
    }
}
