//! CLI tool for padzip.

mod commands;
mod exit_codes;
mod output;
mod progress;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use std::path::PathBuf;

use exit_codes::ExitCode;

/// Zero-pad numeric file name prefixes inside ZIP archives
#[derive(Parser)]
#[command(name = "padzip")]
#[command(author, version, about = "Zero-pad numeric file name prefixes inside ZIP archives", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "human", global = true)]
    format: OutputFormat,

    /// Suppress progress output
    #[arg(long, short = 'q', global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename entries and write a new archive (alias: r)
    #[command(alias = "r")]
    Rename {
        /// Archive file to read
        archive: PathBuf,

        /// Output archive (default: in the current directory, see --keep-name)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Minimum number of digits in the numeric prefix (1-10)
        #[arg(short = 'w', long, default_value = "3")]
        width: u8,

        /// Only rename files ending with this suffix, e.g. ".jpg"
        #[arg(short = 'e', long)]
        extension: Option<String>,

        /// Name the output like the input archive instead of renamed_images_pad<W>.zip
        #[arg(long)]
        keep_name: bool,

        /// Write the full list of outcomes as JSON to this file
        #[arg(short = 'm', long)]
        manifest: Option<PathBuf>,

        /// Number of outcome rows to print
        #[arg(long, default_value = "100")]
        preview: usize,

        /// Report what would change without writing an archive
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Deflate level (0-9)
        #[arg(short = 'l', long)]
        level: Option<u32>,

        /// Store entries without compression
        #[arg(long, conflicts_with = "level")]
        store: bool,
    },

    /// List archive contents (alias: l)
    #[command(alias = "l")]
    List {
        /// Archive file to list
        archive: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

fn main() {
    // Set up Ctrl+C handler
    ctrlc::set_handler(move || {
        eprintln!("\nInterrupted");
        std::process::exit(exit_codes::USER_INTERRUPT);
    })
    .ok();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Rename {
            archive,
            output,
            width,
            extension,
            keep_name,
            manifest,
            preview,
            dry_run,
            level,
            store,
        } => commands::rename(&commands::RenameConfig {
            archive_path: &archive,
            output_path: output.as_deref(),
            width,
            extension: extension.as_deref(),
            keep_name,
            manifest_path: manifest.as_deref(),
            preview,
            dry_run,
            level,
            store,
            format: cli.format,
            quiet: cli.quiet,
        }),

        Commands::List { archive } => commands::list(&archive, cli.format),

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut std::io::stdout());
            ExitCode::Success
        }
    };

    std::process::exit(exit_code.code());
}
