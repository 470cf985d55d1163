//! Get command - look up codes by fuzzy query.

use tracing::error;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::format::Format;
use crate::core::store::SecretStore;
use crate::core::{lookup, otp};
use crate::error::Result;

/// Print current and next codes for every record matching `query`.
pub fn execute(query: &str, format: Format, config: &Config) -> Result<()> {
    let formatter = config.formatter();

    let loaded = config
        .backend()
        .and_then(|backend| SecretStore::load_cached(backend.as_ref(), config.cache()));
    let store = match loaded {
        Ok(store) => store,
        Err(e) if format == Format::Plain => return Err(e),
        Err(e) => {
            error!(error = %e, "cannot load secrets");
            println!("{}", formatter.render_error(&e.to_string(), format));
            return Ok(());
        }
    };

    let now = otp::now();
    let result = lookup::lookup(&store, query, now);
    println!("{}", formatter.render(&result.entries, format));

    if format == Format::Plain {
        for failure in &result.failures {
            output::warn(&failure.to_string());
        }
        if let Some(first) = result.entries.first() {
            let remaining = otp::seconds_remaining(now, first.record.period());
            output::hint(&format!("current code valid for {}s", remaining));
        }
    }
    Ok(())
}
