//! Command implementations for the CLI tool.

use std::path::{Path, PathBuf};

use padzip::archive::{ArchiveSource, NullSink, SinkOptions, ZipSource};
use padzip::{EntryOutcome, Error, RenameOptions, Renamer, rename_archive_with};

use crate::OutputFormat;
use crate::exit_codes::{ExitCode, error_to_exit_code};
use crate::output::{RunSummary, create_formatter, manifest};
use crate::progress::CliProgress;

/// Configuration for the rename command.
pub struct RenameConfig<'a> {
    pub archive_path: &'a Path,
    pub output_path: Option<&'a Path>,
    pub width: u8,
    pub extension: Option<&'a str>,
    pub keep_name: bool,
    pub manifest_path: Option<&'a Path>,
    pub preview: usize,
    pub dry_run: bool,
    pub level: Option<u32>,
    pub store: bool,
    pub format: OutputFormat,
    pub quiet: bool,
}

/// What a finished run hands back to the command
struct RunOutput {
    outcomes: Vec<EntryOutcome>,
    total_files: usize,
    renamed_count: usize,
    archive: Option<Vec<u8>>,
}

/// Rename command implementation
pub fn rename(config: &RenameConfig<'_>) -> ExitCode {
    let formatter = create_formatter(config.format);

    let (options, sink_options) = match build_options(config) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            return error_to_exit_code(&e);
        }
    };

    let output_path = resolve_output_path(config);
    if !config.dry_run && is_same_file(config.archive_path, &output_path) {
        eprintln!(
            "Error: refusing to overwrite input archive {}",
            config.archive_path.display()
        );
        return ExitCode::BadArgs;
    }

    let input = match std::fs::read(config.archive_path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error reading {}: {}", config.archive_path.display(), e);
            return ExitCode::IoError;
        }
    };

    let mut progress = CliProgress::new(config.quiet || config.format == OutputFormat::Json);
    progress.set_message("Renaming...");

    let result = if config.dry_run {
        ZipSource::from_bytes(&input)
            .and_then(|source| {
                Renamer::new(source)
                    .with_options(options.clone())
                    .apply(NullSink, &mut progress)
            })
            .map(|report| {
                let (outcomes, stats) = report.into_parts();
                RunOutput {
                    outcomes,
                    total_files: stats.total_files,
                    renamed_count: stats.renamed_count,
                    archive: None,
                }
            })
    } else {
        rename_archive_with(&input, &options, sink_options, &mut progress).map(|report| {
            let (outcomes, stats) = report.into_parts();
            RunOutput {
                outcomes,
                total_files: stats.total_files,
                renamed_count: stats.renamed_count,
                archive: Some(stats.output_archive),
            }
        })
    };

    let run = match result {
        Ok(run) => {
            progress.finish();
            run
        }
        Err(e) => {
            progress.abandon();
            eprintln!("Error: {}", e);
            return error_to_exit_code(&e);
        }
    };

    let written = match &run.archive {
        Some(bytes) => {
            if let Err(e) = std::fs::write(&output_path, bytes) {
                eprintln!("Error writing {}: {}", output_path.display(), e);
                return ExitCode::IoError;
            }
            Some((output_path.as_path(), bytes.len() as u64))
        }
        None => None,
    };

    let summary = RunSummary {
        archive: config.archive_path,
        outcomes: &run.outcomes,
        total_files: run.total_files,
        renamed_count: run.renamed_count,
        width: options.padding().get(),
        output: written,
        preview: config.preview,
        elapsed: progress.state().elapsed(),
    };

    if let Some(path) = config.manifest_path {
        let document = match serde_json::to_vec_pretty(&manifest(&summary)) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Error encoding manifest: {}", e);
                return ExitCode::FatalError;
            }
        };
        if let Err(e) = std::fs::write(path, document) {
            eprintln!("Error writing manifest {}: {}", path.display(), e);
            return ExitCode::IoError;
        }
    }

    print!("{}", formatter.format_rename(&summary));
    ExitCode::Success
}

/// List command implementation
pub fn list(archive_path: &Path, format: OutputFormat) -> ExitCode {
    let formatter = create_formatter(format);

    let input = match std::fs::read(archive_path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error reading {}: {}", archive_path.display(), e);
            return ExitCode::IoError;
        }
    };

    match ZipSource::from_bytes(&input) {
        Ok(source) => {
            print!("{}", formatter.format_list(source.entries()));
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            error_to_exit_code(&e)
        }
    }
}

fn build_options(config: &RenameConfig<'_>) -> Result<(RenameOptions, SinkOptions), Error> {
    let mut options = RenameOptions::new().width(config.width)?;
    if let Some(extension) = config.extension {
        options = options.extension(extension);
    }

    let sink_options = if config.store {
        SinkOptions::stored()
    } else if let Some(level) = config.level {
        SinkOptions::new().level(level)?
    } else {
        SinkOptions::default()
    };

    Ok((options, sink_options))
}

/// Output file name used when no explicit output path is given.
///
/// `renamed_images_pad<W>.zip`, or the input's own file name with `keep_name`.
pub fn suggested_output_name(archive_path: &Path, width: u8, keep_name: bool) -> String {
    if keep_name {
        if let Some(name) = archive_path.file_name() {
            return name.to_string_lossy().into_owned();
        }
    }
    format!("renamed_images_pad{}.zip", width)
}

fn resolve_output_path(config: &RenameConfig<'_>) -> PathBuf {
    match config.output_path {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(suggested_output_name(
            config.archive_path,
            config.width,
            config.keep_name,
        )),
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
