//! Rendering of command results for people and for scripts.

mod formatter;
mod human;
mod json;

pub use formatter::OutputFormatter;

use crate::cli::Cli;
use human::HumanFormatter;
use json::JsonFormatter;

/// Picks the formatter selected by the global `--json`, `--verbose` and
/// `--quiet` flags.
pub fn create_formatter(cli: &Cli) -> Box<dyn OutputFormatter> {
    if cli.json {
        return Box::new(JsonFormatter);
    }
    Box::new(HumanFormatter::new(cli.verbose, cli.quiet))
}
