//! List command implementation

use crate::cli::ListArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use zipcheck_core::ValidationConfig;
use zipcheck_core::list_entries;

pub fn execute(args: &ListArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let bytes = std::fs::read(&args.archive)
        .with_context(|| format!("Failed to read archive '{}'", args.archive.display()))?;

    // Default routing decides which entries are reported as checked
    let config = ValidationConfig::default();
    let entries = add_archive_context(list_entries(&bytes, &config), &args.archive)?;

    if args.long {
        formatter.format_listing_long(&entries, args.human_readable)?;
    } else {
        formatter.format_listing_short(&entries)?;
    }

    Ok(())
}
