//! Validate command implementation

use crate::cli::ValidateArgs;
use crate::error::convert_validation_error;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use tracing::debug;
use zipcheck_core::CheckPolicy;
use zipcheck_core::ValidationConfig;
use zipcheck_core::validate_archive;

pub fn execute(args: &ValidateArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = build_config(args);
    debug!(archive = %args.archive.display(), ?config, "validating archive");

    let bytes = std::fs::read(&args.archive)
        .with_context(|| format!("Failed to read archive '{}'", args.archive.display()))?;

    match validate_archive(&bytes, &config) {
        Ok(report) => formatter.format_validation_report(&report),
        Err(err) => {
            let err = convert_validation_error(err, &args.archive);
            formatter.format_validation_failure(&err)?;
            Err(err)
        }
    }
}

fn build_config(args: &ValidateArgs) -> ValidationConfig {
    let mut config = ValidationConfig::default();

    if let Some(max) = args.max_entry_size {
        config.max_entry_size = max;
    }

    config.pdf.marker.clone_from(&args.pdf_marker);
    if args.strict_pdf {
        config.pdf.policy = CheckPolicy::Hard;
    }

    for table in [&mut config.csv, &mut config.xlsx] {
        table.header.clone_from(&args.header);
        table.data_rows = args.rows;
    }

    config.json.dispatch = args.include_json;
    config
}
