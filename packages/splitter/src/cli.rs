//! Command-line interface for the chapter splitter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{RestartPolicy, SplitOptions};
use crate::docx::WordDocument;
use crate::error::{Result, SplitterError};
use crate::splitter::split_word;

/// Chapter splitter - Split numbered Word documents into one file per chapter.
#[derive(Parser)]
#[command(name = "chapter-splitter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a .docx file at its "第N章" / "第N部分" headings.
    Split {
        /// Word document to split
        input: PathBuf,

        /// Output directory (default: the input's directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not write chapters.yaml
        #[arg(long)]
        no_manifest: bool,

        /// Restart deeper list levels when a shallower level advances
        #[arg(long)]
        restart_levels: bool,
    },

    /// Print every paragraph with its resolved list numbering.
    Numbers {
        /// Word document to read
        input: PathBuf,

        /// Restart deeper list levels when a shallower level advances
        #[arg(long)]
        restart_levels: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            input,
            output,
            no_manifest,
            restart_levels,
        } => split_command(&input, output, !no_manifest, restart_policy(restart_levels)),
        Commands::Numbers {
            input,
            restart_levels,
        } => numbers_command(&input, restart_policy(restart_levels)),
    }
}

fn restart_policy(restart_levels: bool) -> RestartPolicy {
    if restart_levels {
        RestartPolicy::OnShallowerAdvance
    } else {
        RestartPolicy::Never
    }
}

/// Execute the split command.
fn split_command(
    input: &Path,
    output: Option<PathBuf>,
    write_manifest: bool,
    restart: RestartPolicy,
) -> Result<()> {
    if !input.is_file() {
        return Err(SplitterError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Input file does not exist: {}", input.display()),
        )));
    }

    let mut options = SplitOptions::default()
        .with_manifest(write_manifest)
        .with_restart(restart);
    if let Some(output_dir) = output {
        if output_dir.exists() && !output_dir.is_dir() {
            return Err(SplitterError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Output path is not a directory: {}", output_dir.display()),
            )));
        }
        options = options.with_output_dir(output_dir);
    }

    println!(
        "{} {}",
        style("Splitting").bold(),
        style(input.display()).cyan()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Detecting chapters...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let chapters = match split_word(input, &options) {
        Ok(chapters) => chapters,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    for record in &chapters.chapters {
        let file_name = record
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("  {:<10} {}", style(&record.key).green(), file_name);
    }

    println!();
    println!(
        "{} {} files to {}",
        style("Saved").green().bold(),
        chapters.chapters.len(),
        options.resolve_output_dir(input).display()
    );

    Ok(())
}

/// Execute the numbers command.
fn numbers_command(input: &Path, restart: RestartPolicy) -> Result<()> {
    let document = WordDocument::open(input)?;

    for text in document.numbered_texts(restart)? {
        println!("{text}");
    }

    Ok(())
}
