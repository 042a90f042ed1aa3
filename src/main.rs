use std::{fs, path::PathBuf, process::ExitCode, time::Instant};

use basec::{
    analyze, ast::unparse::unparse, display_error, lexer::lexer::tokenize, parser::parser::parse,
    render_snippet,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Checks a Base program for name and type errors.
#[derive(Parser, Debug)]
#[command(name = "basec", version)]
struct Args {
    /// Source file to check
    file: PathBuf,

    /// Write the program, annotated with resolved symbols, to this file
    #[arg(short, long, value_name = "OUT")]
    output: Option<PathBuf>,

    /// Show the offending source line under each diagnostic
    #[arg(long)]
    context: bool,
}

fn main() -> ExitCode {
    // BASEC_LOG takes the usual filter syntax, e.g. `basec=debug`
    if let Ok(filter) = EnvFilter::try_from_env("BASEC_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }

    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> ExitCode {
    let start = Instant::now();

    let source = match fs::read_to_string(&args.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("basec: cannot read {}: {}", args.file.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let tokens = match tokenize(source.clone()) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, &args.file);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(elapsed = ?start.elapsed(), tokens = tokens.len(), "tokenized");

    let parse_start = Instant::now();
    let program = match parse(tokens) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source, &args.file);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(elapsed = ?parse_start.elapsed(), decls = program.decls.len(), "parsed");

    let analysis_start = Instant::now();
    let analysis = match analyze(&program) {
        Ok(analysis) => analysis,
        Err(error) => {
            eprintln!("basec: internal error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        elapsed = ?analysis_start.elapsed(),
        diagnostics = analysis.diagnostics.len(),
        "analyzed"
    );

    for diagnostic in &analysis.diagnostics {
        if args.context {
            eprint!(
                "{}",
                render_snippet(
                    &diagnostic.kind.to_string(),
                    diagnostic.position,
                    &source,
                    &args.file
                )
            );
        } else {
            eprintln!("{}", diagnostic);
        }
    }

    if let Some(output) = &args.output {
        let rendered = unparse(&program, Some(&analysis.resolution));
        if let Err(error) = fs::write(output, rendered) {
            eprintln!("basec: cannot write {}: {}", output.display(), error);
            return ExitCode::FAILURE;
        }
    }

    tracing::info!(elapsed = ?start.elapsed(), "total");

    if analysis.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
