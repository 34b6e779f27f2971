//! mlang command-line driver.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use mlang_diagnostic::emitter::ColorMode;
use mlang_parse::{ConstantRule, ParseOptions};
use mlangc::commands::{check_file, lex_file, CheckOptions, LexOptions};

fn main() -> ExitCode {
    mlangc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "lex" => {
            let mut options = LexOptions {
                is_tty: io::stderr().is_terminal(),
                ..LexOptions::default()
            };
            let mut file_path = None;
            for arg in args.iter().skip(2) {
                if arg == "--tables" {
                    options.show_tables = true;
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    return usage_error(LEX_USAGE);
                }
            }
            let Some(path) = file_path else {
                return usage_error(LEX_USAGE);
            };
            lex_file(path, options, &mut io::stdout().lock(), &mut io::stderr())
        }
        "check" => {
            let mut options = CheckOptions {
                is_tty: io::stderr().is_terminal(),
                ..CheckOptions::default()
            };
            let mut file_path = None;
            for arg in args.iter().skip(2) {
                if arg == "--signed-constants-only" {
                    options.parse =
                        ParseOptions::default().with_constant_rule(ConstantRule::SignedOnly);
                } else if let Some(value) = arg.strip_prefix("--color=") {
                    let Some(color) = ColorMode::from_flag(value) else {
                        eprintln!("error: invalid --color value '{value}'");
                        eprintln!("Valid values: auto, always, never");
                        return ExitCode::FAILURE;
                    };
                    options.color = color;
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    return usage_error(CHECK_USAGE);
                }
            }
            let Some(path) = file_path else {
                return usage_error(CHECK_USAGE);
            };
            check_file(path, options, &mut io::stdout().lock(), &mut io::stderr())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        "version" | "--version" | "-V" => {
            println!("mlang {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: cannot write output: {e}");
            ExitCode::FAILURE
        }
    }
}

const LEX_USAGE: &str = "Usage: mlang lex <file> [--tables]";
const CHECK_USAGE: &str =
    "Usage: mlang check <file> [--signed-constants-only] [--color=auto|always|never]";

fn usage_error(usage: &str) -> ExitCode {
    eprintln!("{usage}");
    ExitCode::FAILURE
}

fn print_usage() {
    println!("mlang front end");
    println!();
    println!("Usage: mlang <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize and print one (code,payload); pair per token");
    println!("  check <file>         Check that a program is well formed");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --tables                  Also print the identifier and string tables");
    println!();
    println!("Check options:");
    println!("  --signed-constants-only   Accept only signed numbers as constants");
    println!("  --color=<when>            Color diagnostics: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  MLANG_LOG                 Tracing filter, e.g. mlang_parse=trace");
    println!();
    println!("Examples:");
    println!("  mlang lex main.mlang");
    println!("  mlang lex main.mlang --tables");
    println!("  mlang check main.mlang");
    println!("  MLANG_LOG=debug mlang check main.mlang");
}
