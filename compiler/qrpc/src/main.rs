//! QRParse CLI
//!
//! Classifies raw-token dumps and prints positioned tokens or their
//! structure.

use std::io::IsTerminal;

use qrp_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use qrp_diagnostic::{Diagnostic, ErrorCode};
use qrp_lexer::Taxonomy;
use qrpc::render::{render_explanation, render_forest, render_taxonomy, render_token_lines};
use qrpc::{init_tracing, process_files, DriverConfig, DriverError, FileOutput};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let env_config = DriverConfig::from_env();

    match command.as_str() {
        "classify" => {
            let mut config = env_config.with_structure(false);
            let files = parse_files(&args[2..], &mut config, false);
            if files.is_empty() {
                eprintln!("Usage: qrp classify [--sequential] <dump>...");
                std::process::exit(1);
            }
            exit_with(run(&files, config));
        }
        "structure" => {
            let mut config = env_config.with_structure(true);
            let files = parse_files(&args[2..], &mut config, true);
            if files.is_empty() {
                eprintln!("Usage: qrp structure [--significant] [--recover] [--sequential] <dump>...");
                std::process::exit(1);
            }
            exit_with(run(&files, config));
        }
        "taxonomy" => match Taxonomy::standard() {
            Ok(taxonomy) => print!("{}", render_taxonomy(taxonomy)),
            Err(err) => {
                let mut emitter = stderr_emitter();
                emitter.emit(&DriverError::from(err).to_diagnostic());
                emitter.flush();
                std::process::exit(1);
            }
        },
        "explain" | "--explain" => {
            let Some(code) = args.get(2) else {
                eprintln!("Usage: qrp explain <ERROR_CODE>");
                eprintln!("Example: qrp explain E1002");
                std::process::exit(1);
            };
            let Ok(code) = code.parse::<ErrorCode>() else {
                eprintln!("Unknown error code: {code}");
                std::process::exit(1);
            };
            print!("{}", render_explanation(code));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("qrp {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Split flags from file arguments. Structure flags are only accepted when
/// `structuring` is set; unknown flags are an error.
fn parse_files(args: &[String], config: &mut DriverConfig, structuring: bool) -> Vec<String> {
    let mut files = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--sequential" => config.parallel = false,
            "--significant" if structuring => config.keep_trivia = false,
            "--recover" if structuring => config.recover = true,
            flag if flag.starts_with('-') => {
                eprintln!("error: unknown option '{flag}'");
                std::process::exit(1);
            }
            file => files.push(file.to_owned()),
        }
    }
    files
}

fn stderr_emitter() -> TerminalEmitter<std::io::Stderr> {
    TerminalEmitter::stderr(ColorMode::Auto, std::io::stderr().is_terminal())
}

/// Process every file, print results and diagnostics. Returns the number of
/// files that failed. With `--recover`, structuring errors are warnings and
/// do not fail the file.
fn run(files: &[String], config: DriverConfig) -> usize {
    let mut emitter = stderr_emitter();
    let taxonomy = match Taxonomy::standard() {
        Ok(taxonomy) => taxonomy,
        Err(err) => {
            emitter.emit(&DriverError::from(err).to_diagnostic());
            emitter.flush();
            return files.len();
        }
    };

    let mut failed = 0;
    for result in process_files(files, taxonomy, config) {
        match result {
            Ok(output) => {
                print_output(&output);
                let diagnostics = output.diagnostics(config.recover);
                if diagnostics.iter().any(Diagnostic::is_error) {
                    failed += 1;
                }
                emitter.emit_all(&diagnostics);
            }
            Err(err) => {
                failed += 1;
                emitter.emit(&err.to_diagnostic());
            }
        }
    }
    emitter.emit_summary(failed, files.len());
    emitter.flush();
    failed
}

fn print_output(output: &FileOutput) {
    println!("{} ({} tokens):", output.name, output.tokens.len());
    match &output.structure {
        Some(structured) => print!("{}", render_forest(&structured.forest)),
        None => print!("{}", render_token_lines(&output.tokens)),
    }
}

fn exit_with(failed: usize) {
    if failed > 0 {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("QRParse token classifier");
    println!();
    println!("Usage: qrp <command> [options]");
    println!();
    println!("Commands:");
    println!("  classify <dump>...   Classify raw-token dumps and print positioned tokens");
    println!("  structure <dump>...  Classify and group into lines, collections and blocks");
    println!("  taxonomy             List every taxonomy path and its token kind");
    println!("  explain <code>       Explain an error code (e.g., E1002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --sequential         Process files one at a time");
    println!("  --significant        (structure) Drop whitespace and comments");
    println!("  --recover            (structure) Keep going past delimiter errors");
    println!();
    println!("Dumps hold one token per line: <type path><TAB><escaped text>.");
    println!("Environment: QRP_STRUCTURE, QRP_RECOVER, QRP_KEEP_TRIVIA, QRP_PARALLEL, QRP_LOG");
}
