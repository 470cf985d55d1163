//! Import command - rebuild the store from an export file.

use std::path::Path;

use tracing::error;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::format::Format;
use crate::core::import;
use crate::error::Result;

/// Import `file`, replacing the current store.
pub fn execute(file: &Path, format: Format, config: &Config) -> Result<()> {
    let formatter = config.formatter();

    let report = match config.backend().and_then(|backend| import::import(file, backend.as_ref())) {
        Ok(report) => report,
        Err(e) if format == Format::Plain => return Err(e),
        Err(e) => {
            error!(error = %e, "import failed");
            println!("{}", formatter.render_import_error(&e.to_string(), format));
            return Ok(());
        }
    };

    if format == Format::Plain {
        for warning in &report.warnings {
            output::warn(&warning.to_string());
        }
        output::success(&format!(
            "imported {} secrets from {}",
            report.imported(),
            file.display()
        ));
    } else {
        println!(
            "{}",
            formatter.render_import(report.imported(), &report.warnings, format)
        );
    }
    Ok(())
}
