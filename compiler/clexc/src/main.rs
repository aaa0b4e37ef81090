//! clex CLI
//!
//! Scans a C-subset source file and writes its token table.

use std::path::Path;
use std::process::ExitCode;

use clexc::commands::{check_file, lex_file};
use clexc::{init_tracing, LexOptions};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let options = match LexOptions::parse(&args[2..]) {
                Ok(options) => options,
                Err(e) => {
                    eprintln!("error: {e}");
                    eprintln!("Usage: clex lex [<file>] [-o <output>] [--quiet]");
                    return ExitCode::FAILURE;
                }
            };
            match lex_file(&options, &mut std::io::stdout().lock()) {
                Ok(_) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        "check" => {
            if args.len() != 3 {
                eprintln!("Usage: clex check <file>");
                return ExitCode::FAILURE;
            }
            let result = check_file(
                Path::new(&args[2]),
                &mut std::io::stdout().lock(),
                &mut std::io::stderr().lock(),
            );
            match result {
                Ok(summary) if summary.illegal == 0 => ExitCode::SUCCESS,
                Ok(summary) => {
                    eprintln!("{} illegal character(s) found", summary.illegal);
                    ExitCode::FAILURE
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        "--version" | "-V" | "version" => {
            println!("clex {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!("Run 'clex help' for usage information");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("clex - lexical analyzer for a small C subset");
    println!("Version {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: clex <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex [<file>] [-o <output>] [--quiet]");
    println!("                 Scan <file> (default: code.txt) and write the token");
    println!("                 table to <output> (default: result.txt)");
    println!("  check <file>   Report illegal characters; fails if any are found");
    println!("  help           Show this message");
    println!("  version        Show the version");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=clex_lexer=trace) for debug logging.");
}
