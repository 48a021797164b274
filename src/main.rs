use ansi_term::Colour::{Red, Yellow};
use std::process;
use reaindex::{
    cli::{Args, Command},
    error::{ErrorSeverity, IndexError},
    logging,
};

fn main() {
    let args = Args::parse_args();
    let use_colors = !args.no_colors;

    logging::init_logging(args.verbose, args.quiet, use_colors);

    let command = Command::from_args(args);
    let exit_code = run_command(command, use_colors);

    process::exit(exit_code);
}

/// Run the command and map failures to an exit code
fn run_command(command: Command, use_colors: bool) -> i32 {
    match command.execute() {
        Ok(()) => 0,
        Err(err) => {
            report_error(&err, use_colors);

            match err.severity() {
                ErrorSeverity::Warning => 0,
                ErrorSeverity::Error => 1,
                ErrorSeverity::Critical => 2,
            }
        }
    }
}

fn report_error(err: &IndexError, use_colors: bool) {
    let label = match err.severity() {
        ErrorSeverity::Warning => "Warning",
        ErrorSeverity::Error => "Error",
        ErrorSeverity::Critical => "Critical Error",
    };

    if use_colors {
        let painted = match err.severity() {
            ErrorSeverity::Warning => Yellow.bold().paint(label),
            _ => Red.bold().paint(label),
        };
        eprintln!("{}: {}", painted, err.user_message());
    } else {
        eprintln!("{}: {}", label, err.user_message());
    }

    if let Some(suggestion) = err.suggestion() {
        eprintln!("Suggestion: {}", suggestion);
    }

    if let Some(backtrace) = err.backtrace() {
        eprintln!("\nBacktrace:\n{}", backtrace);
    }
}
