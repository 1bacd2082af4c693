//! fieldtab CLI - XML record export to paste-ready HTML tables
//!
//! A command-line tool for converting flat XML record exports into HTML
//! tables and placing them on the system clipboard.

use clap::{Parser, Subcommand};
use colored::*;
use fieldtab::render::{JsonFormat, RenderOptions};
use fieldtab::GROUP_SIZE;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// XML record export to paste-ready HTML tables
#[derive(Parser)]
#[command(
    name = "fieldtab",
    version,
    about = "Convert XML record exports to HTML tables",
    long_about = "fieldtab - Convert flat XML record exports to paste-ready HTML tables.\n\n\
                  Reads row/field XML, groups fields eight per table, and renders\n\
                  header/value tables for pasting into a word processor."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a record to HTML tables
    Html {
        /// Input file path (.xml)
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fields per table
        #[arg(long, default_value_t = GROUP_SIZE)]
        group_size: usize,

        /// Allow cell content to wrap
        #[arg(long)]
        wrap: bool,

        /// Also place the result on the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Render a record and place it on the clipboard
    Copy {
        /// Input file path (.xml)
        input: PathBuf,

        /// Fields per table
        #[arg(long, default_value_t = GROUP_SIZE)]
        group_size: usize,
    },

    /// Print a plain-text preview of the grouped tables
    Text {
        /// Input file path (.xml)
        input: PathBuf,

        /// Fields per table
        #[arg(long, default_value_t = GROUP_SIZE)]
        group_size: usize,
    },

    /// Convert a record to JSON
    Json {
        /// Input file path (.xml)
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// Show record information
    Info {
        /// Input file path (.xml)
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Html {
            input,
            output,
            group_size,
            wrap,
            copy,
        } => {
            let pb = create_spinner("Parsing record...");

            let record = fieldtab::parse_file(&input)?;
            pb.set_message("Rendering tables...");

            let options = RenderOptions::new()
                .with_group_size(group_size)
                .with_wrapping(wrap);
            let html = fieldtab::render::to_html(&record, &options)?;

            pb.finish_and_clear();

            if copy {
                let preview = fieldtab::render::to_text(&record, &options)?;
                fieldtab::clipboard::copy_html(&html, Some(&preview))?;
                // Status goes to stderr: stdout may be carrying the HTML
                eprintln!("{} Tables copied to clipboard", "✓".green().bold());
            }

            write_output(output.as_ref(), &html)?;

            if output.is_some() {
                println!(
                    "{} Rendered HTML tables: {}",
                    "✓".green().bold(),
                    output.unwrap().display()
                );
            }
        }

        Commands::Copy { input, group_size } => {
            let pb = create_spinner("Parsing record...");

            let record = fieldtab::parse_file(&input)?;
            pb.set_message("Rendering tables...");

            let options = RenderOptions::new().with_group_size(group_size);
            let html = fieldtab::render::to_html(&record, &options)?;
            let preview = fieldtab::render::to_text(&record, &options)?;

            pb.set_message("Copying to clipboard...");
            fieldtab::clipboard::copy_html(&html, Some(&preview))?;

            pb.finish_and_clear();
            println!(
                "{} Tables copied to clipboard ({} fields, {} groups)",
                "✓".green().bold(),
                record.len(),
                record.group_by(group_size).len()
            );
        }

        Commands::Text { input, group_size } => {
            let record = fieldtab::parse_file(&input)?;
            let options = RenderOptions::new().with_group_size(group_size);
            let text = fieldtab::render::to_text(&record, &options)?;
            write_output(None, &text)?;
        }

        Commands::Json {
            input,
            output,
            compact,
        } => {
            let record = fieldtab::parse_file(&input)?;

            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let json = fieldtab::render::to_json(&record, format)?;

            write_output(output.as_ref(), &json)?;

            if output.is_some() {
                println!(
                    "{} Converted to JSON: {}",
                    "✓".green().bold(),
                    output.unwrap().display()
                );
            }
        }

        Commands::Info { input } => {
            let record = fieldtab::parse_file(&input)?;
            let groups = record.groups();

            println!("{}", "Record Information".cyan().bold());
            println!("{}", "─".repeat(40));
            println!(
                "{}: {}",
                "File".bold(),
                input.file_name().unwrap_or_default().to_string_lossy()
            );
            println!("{}: {}", "Fields".bold(), record.len());
            println!("{}: {}", "Groups".bold(), groups.len());
            println!(
                "{}: {}",
                "Reference field".bold(),
                if record.has_reference() { "yes" } else { "no" }
            );

            if !record.is_empty() {
                println!("\n{}", "Headers".cyan().bold());
                println!("{}", "─".repeat(40));
                for (i, field) in record.fields.iter().enumerate() {
                    let header = field.header_text();
                    let name = if header.is_empty() { "(unnamed)" } else { header };
                    if field.is_reference() {
                        println!("{:>3}. {}", i + 1, name.yellow());
                    } else {
                        println!("{:>3}. {}", i + 1, name);
                    }
                }
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_version() {
    println!("{} {}", "fieldtab".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Convert flat XML record exports to paste-ready HTML tables");
    println!();
    println!("Input format: row > field[name] XML");
    println!("Repository: https://github.com/fieldtab/fieldtab");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}
