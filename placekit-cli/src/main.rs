//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use placekit_cli::CliError;

#[expect(clippy::print_stderr, reason = "errors are reported on stderr")]
fn main() {
    match placekit_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("placekit: {err}");
            std::process::exit(1);
        }
    }
}
