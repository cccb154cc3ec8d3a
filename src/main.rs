use ossnotices::config::{self, ConfigFile};
use ossnotices::prelude::*;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = Args::parse_args();
    let verbose = args.verbose;

    if let Err(e) = run(args) {
        eprintln!("{}", format!("Error: {}", e).red());

        // Display error chain
        if verbose {
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("Caused by: {}", err);
                source = err.source();
            }
        }

        process::exit(ExitCode::Failure.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let quiet = args.quiet;

    // Reject conflicting verbosity flags before doing any work
    args.validate()?;

    // Merge the optional config file; explicit CLI flags win
    let config_file = config::discover_config(Path::new("."))?.unwrap_or_default();
    let format = resolve_format(&args, &config_file);
    let use_cache = resolve_use_cache(&args, &config_file);

    let generator_config =
        GeneratorConfig::new(args.verbose, args.quiet, use_cache, config_file.cache_file);

    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format.default_output_name()));

    // Create adapters (Dependency Injection)
    let engine = Purl2NoticesCli::new(generator_config);
    let progress_reporter = ConsoleProgressReporter::new(quiet);

    // Create use case with injected dependencies
    let use_case = GenerateNoticesUseCase::new(engine, progress_reporter);

    // Execute use case
    let request = NoticeRequest::new(args.input_path, args.recursive, format);
    let notices = use_case.execute(request)?;

    // Write output
    let writer = FileSystemWriter::new(output_path.clone());
    writer.write(&notices)?;

    if !quiet {
        eprintln!(
            "{} Legal notices generated successfully: {}",
            "✓".green(),
            output_path.display()
        );
    }

    Ok(())
}

/// Effective output format: explicit flag, then config file, then text
fn resolve_format(args: &Args, config_file: &ConfigFile) -> OutputFormat {
    args.format
        .or_else(|| config_file.output_format())
        .unwrap_or_default()
}

/// Effective cache switch: explicit flags, then config file, then enabled
fn resolve_use_cache(args: &Args, config_file: &ConfigFile) -> bool {
    if args.cache_flags_explicit() {
        args.use_cache()
    } else {
        config_file.cache.unwrap_or(true)
    }
}
