//! `dxv` - DXIL assembly viewer CLI.

use dxilv::commands::{highlight_command, stats_command, tokens_command};
use dxilv::CliError;

fn main() {
    dxilv::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let rest = &args[2..];
    let result = match args[1].as_str() {
        "tokens" => tokens_command(rest),
        "highlight" => highlight_command(rest),
        "stats" => stats_command(rest),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(CliError::UnknownCommand(other.to_string())),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        if e.wants_usage() {
            eprintln!();
            print_usage();
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("DXIL assembly viewer");
    eprintln!();
    eprintln!("Usage: dxv <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  tokens <file> [--start=N] [--end=N]   Dump classified token ranges");
    eprintln!("  highlight <file> [--color[=WHEN]]     Print the file with terminal colors");
    eprintln!("  stats <file>...                       Count ranges per category");
    eprintln!("  help                                  Show this message");
    eprintln!();
    eprintln!("Use '-' as <file> to read standard input.");
    eprintln!("WHEN is one of auto, always, never; --no-color is --color=never.");
    eprintln!("Set RUST_LOG=debug for diagnostic output on stderr.");
}
