//! unresume CLI - résumé field extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

use unresume::{
    render, JsonFormat, KeywordRegistry, ResumeExtractor, ResumeRecord, SectionConfidence,
    SourcedRecord, Unresume,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "unresume")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract candidate fields from plain-text résumés", long_about = None)]
struct Cli {
    /// Keyword registry JSON file replacing the built-in tables
    #[arg(long, global = true, value_name = "FILE", env = "UNRESUME_KEYWORDS")]
    keywords: Option<PathBuf>,

    /// Normalize input text (ligatures, bullets) before extraction
    #[arg(long, global = true)]
    clean: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract one record from a résumé text file
    Row {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: RowFormat,
    },

    /// Extract records from many files and directories
    Batch {
        /// Input files or directories (directories are searched for .txt files)
        #[arg(value_name = "PATH", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "csv")]
        format: BatchFormat,

        /// Process files one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Show detected sections and their confidence
    Sections {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective keyword registry as JSON
    Keywords {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum RowFormat {
    /// JSON object
    Json,
    /// Key: value lines
    Text,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum BatchFormat {
    /// One row per file with a leading File column
    Csv,
    /// Array of objects with a leading File field
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let keywords = cli.keywords.as_deref();

    let result = match cli.command {
        Some(Commands::Row {
            input,
            output,
            compact,
            format,
        }) => cmd_row(
            &input,
            output.as_deref(),
            compact,
            format,
            keywords,
            cli.clean,
        ),
        Some(Commands::Batch {
            inputs,
            output,
            format,
            sequential,
        }) => cmd_batch(
            &inputs,
            output.as_deref(),
            format,
            sequential,
            keywords,
            cli.clean,
        ),
        Some(Commands::Sections { input, json }) => cmd_sections(&input, json, keywords, cli.clean),
        Some(Commands::Keywords { output }) => cmd_keywords(output.as_deref(), keywords),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: unresume <COMMAND> [OPTIONS]".yellow());
            println!("       unresume --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_extractor(
    keywords: Option<&Path>,
    clean: bool,
    sequential: bool,
) -> CliResult<ResumeExtractor> {
    let mut builder = Unresume::new().with_input_cleanup(clean);
    if let Some(path) = keywords {
        builder = builder.with_keywords_file(path)?;
    }
    if sequential {
        builder = builder.sequential();
    }
    Ok(builder.build()?)
}

fn write_output(output: Option<&Path>, content: &str) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content.trim_end());
    }
    Ok(())
}

/// Input files for a batch run.
#[derive(Debug, Default)]
struct BatchInputs {
    files: Vec<PathBuf>,
    /// Directory entries that could not be walked.
    unreadable: usize,
}

/// Expand the given paths into a sorted list of input files.
///
/// Files are taken as given; directories are searched recursively for
/// `.txt` files.
fn collect_inputs(paths: &[PathBuf]) -> CliResult<BatchInputs> {
    let mut inputs = BatchInputs::default();

    for path in paths {
        if path.is_file() {
            inputs.files.push(path.clone());
        } else if path.is_dir() {
            inputs.unreadable += walk_txt_files(path, &mut inputs.files);
        } else {
            return Err(format!("Path not found: {}", path.display()).into());
        }
    }

    Ok(inputs)
}

/// Push every `.txt` file under `dir` onto `files`, returning the number of
/// entries that failed to walk.
fn walk_txt_files(dir: &Path, files: &mut Vec<PathBuf>) -> usize {
    let mut errors = 0;

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping {}: {}", dir.display(), e);
                errors += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let is_txt = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        if is_txt {
            files.push(entry.into_path());
        }
    }

    errors
}

fn cmd_row(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    format: RowFormat,
    keywords: Option<&Path>,
    clean: bool,
) -> CliResult<()> {
    let extractor = build_extractor(keywords, clean, true)?;
    let text = fs::read_to_string(input)?;
    let record = extractor.extract_row(&text);

    let content = match format {
        RowFormat::Json => {
            let json_format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            render::record_to_json(&record, json_format)?
        }
        RowFormat::Text => render::to_text(&record),
    };

    write_output(output, &content)
}

fn cmd_batch(
    inputs: &[PathBuf],
    output: Option<&Path>,
    format: BatchFormat,
    sequential: bool,
    keywords: Option<&Path>,
    clean: bool,
) -> CliResult<()> {
    let extractor = build_extractor(keywords, clean, sequential)?;
    let BatchInputs { files, unreadable } = collect_inputs(inputs)?;
    if files.is_empty() {
        return Err("No .txt files found".into());
    }

    // One step per file read, plus the extraction pass
    let pb = ProgressBar::new(files.len() as u64 + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reading files...");
    let mut sources = Vec::with_capacity(files.len());
    let mut texts = Vec::with_capacity(files.len());
    for path in &files {
        match fs::read_to_string(path) {
            Ok(text) => {
                sources.push(path.display().to_string());
                texts.push(text);
            }
            Err(e) => log::warn!("Skipping {}: {}", path.display(), e),
        }
        pb.inc(1);
    }

    pb.set_message("Extracting fields...");
    let records = extractor.extract_rows(&texts);
    pb.inc(1);
    pb.finish_with_message("Done!");

    let rows: Vec<SourcedRecord<'_>> = sources
        .iter()
        .zip(&records)
        .map(|(source, record)| SourcedRecord::new(source, record))
        .collect();

    let content = match format {
        BatchFormat::Csv => render::to_csv_with_source(&rows)?,
        BatchFormat::Json => render::to_json(&rows, JsonFormat::Pretty)?,
    };
    write_output(output, &content)?;

    eprintln!("{}", batch_summary(&records, files.len() - records.len() + unreadable));

    Ok(())
}

fn batch_summary(records: &[ResumeRecord], skipped: usize) -> String {
    let certified = records.iter().filter(|r| r.has_certifications()).count();
    let mut summary = format!(
        "{} {} résumés extracted, {} with certifications",
        "Done!".green().bold(),
        records.len(),
        certified
    );
    if skipped > 0 {
        summary.push_str(&format!(", {} skipped", skipped));
    }
    summary
}

fn cmd_sections(
    input: &Path,
    json: bool,
    keywords: Option<&Path>,
    clean: bool,
) -> CliResult<()> {
    let extractor = build_extractor(keywords, clean, true)?;
    let text = fs::read_to_string(input)?;
    let text = extractor.prepare(&text);
    let sections = extractor.split_sections(&text);
    let confidence = SectionConfidence::from_sections(&sections);

    if json {
        let value = serde_json::json!({
            "sections": sections,
            "confidence": confidence,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    for (kind, slice) in sections.iter() {
        println!("{}", kind.as_str().to_uppercase().cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        if slice.is_empty() {
            println!("{}", "(not found)".dimmed());
        } else {
            println!("{}", slice);
        }
        println!();
    }

    println!("{}", "Confidence".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {:.2}", "Experience".bold(), confidence.experience);
    println!("{}: {:.2}", "Projects".bold(), confidence.projects);
    println!("{}: {:.2}", "Awards".bold(), confidence.awards);
    println!("{}: {:.2}", "Publications".bold(), confidence.publications);

    Ok(())
}

fn cmd_keywords(output: Option<&Path>, keywords: Option<&Path>) -> CliResult<()> {
    let registry = match keywords {
        Some(path) => KeywordRegistry::from_path(path)?,
        None => KeywordRegistry::default(),
    };
    let json = registry.to_json(JsonFormat::Pretty)?;
    write_output(output, &json)
}

fn cmd_version() {
    println!("{} {}", "unresume".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Rule-based résumé field extraction tool");
    println!();
    println!("License: MIT");
}
