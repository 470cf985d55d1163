//! Provisioning URI parsing.
//!
//! Turns `otpauth://totp/ISSUER:ACCOUNT?secret=...&issuer=...` lines, as
//! written by Ente Auth's plain-text export, into [`SecretRecord`]s.
//!
//! Every failure is a [`ParseWarning`] for that line only; a batch keeps
//! going past bad lines.

use percent_encoding::percent_decode_str;
use tracing::{debug, warn};
use url::Url;

use crate::core::constants::{CODE_DISPLAY_TAG, MAX_DIGITS, OTPAUTH_SCHEME};
use crate::core::domain::{Algorithm, SecretRecord};
use crate::core::otp;
use crate::error::ParseWarning;

/// Records and warnings produced from one export file.
#[derive(Debug, Default)]
pub struct Batch {
    /// Parsed records, in line order.
    pub records: Vec<SecretRecord>,
    /// One warning per rejected line, in line order.
    pub warnings: Vec<ParseWarning>,
}

/// Parse every non-blank line of an export.
pub fn parse_batch(text: &str) -> Batch {
    let mut batch = Batch::default();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match parse(line) {
            Ok(record) => batch.records.push(record),
            Err(warning) => {
                warn!(line = %warning.line, reason = %warning.reason, "skipping line");
                batch.warnings.push(warning);
            }
        }
    }

    debug!(
        records = batch.records.len(),
        warnings = batch.warnings.len(),
        "parsed export"
    );
    batch
}

/// Parse a single provisioning URI.
///
/// # Errors
///
/// Returns a `ParseWarning` carrying the original line when the URI is
/// malformed, not an `otpauth://totp` URI, has no usable secret, or uses
/// unsupported parameters.
pub fn parse(line: &str) -> Result<SecretRecord, ParseWarning> {
    let original = line.trim();
    let fail = |reason: String| ParseWarning::new(original, reason);

    let cleaned = strip_code_display(original);
    let url = Url::parse(cleaned).map_err(|e| fail(format!("invalid URI: {}", e)))?;

    if url.scheme() != OTPAUTH_SCHEME {
        return Err(fail(format!("unsupported scheme '{}'", url.scheme())));
    }
    match url.host_str() {
        Some(kind) if kind.eq_ignore_ascii_case("totp") => {}
        Some(kind) => return Err(fail(format!("unsupported OTP type '{}'", kind))),
        None => return Err(fail("missing OTP type".to_string())),
    }

    let (path_label, account) = split_label(url.path());

    let mut secret = None;
    let mut issuer = None;
    let mut algorithm = Algorithm::default();
    let mut digits = None;
    let mut period = None;

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "secret" => secret = Some(value.into_owned()),
            "issuer" => issuer = Some(value.trim().to_string()),
            "algorithm" => algorithm = value.parse().map_err(fail)?,
            "digits" => {
                let d = value
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| fail(format!("invalid digits '{}'", value)))?;
                if d == 0 || d > MAX_DIGITS {
                    return Err(fail(format!("digits must be 1-{}, got {}", MAX_DIGITS, d)));
                }
                digits = Some(d);
            }
            "period" => {
                let p = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| fail(format!("invalid period '{}'", value)))?;
                if p == 0 {
                    return Err(fail("period must be positive".to_string()));
                }
                period = Some(p);
            }
            _ => {}
        }
    }

    let secret = otp::normalize_secret(secret.as_deref().unwrap_or_default());
    if secret.is_empty() {
        return Err(fail("missing secret".to_string()));
    }
    otp::decode_secret(&secret).map_err(|_| fail("secret is not valid base32".to_string()))?;

    let label = issuer
        .filter(|i| !i.is_empty())
        .or(path_label)
        .unwrap_or_else(|| account.clone());
    if label.is_empty() {
        return Err(fail("missing label".to_string()));
    }

    let mut record = SecretRecord::new(label, account, secret).with_algorithm(algorithm);
    if let Some(d) = digits {
        record = record.with_digits(d);
    }
    if let Some(p) = period {
        record = record.with_period(p);
    }
    Ok(record)
}

/// Drop the trailing `codeDisplay` annotation and its separator.
fn strip_code_display(line: &str) -> &str {
    match line.find(CODE_DISPLAY_TAG) {
        Some(idx) => {
            let head = &line[..idx];
            head.strip_suffix(|c: char| c == '&' || c == '?')
                .unwrap_or(head)
        }
        None => line,
    }
}

/// Split the URI path into an optional path label and the account.
///
/// `ISSUER:ACCOUNT` yields `(Some(ISSUER), ACCOUNT)`; a path without a
/// colon is a bare label with an empty account.
fn split_label(path: &str) -> (Option<String>, String) {
    let raw = path.strip_prefix('/').unwrap_or(path);
    let decoded = percent_decode_str(raw).decode_utf8_lossy();

    match decoded.split_once(':') {
        Some((issuer, account)) => {
            let issuer = issuer.trim();
            let issuer = (!issuer.is_empty()).then(|| issuer.to_string());
            (issuer, account.trim().to_string())
        }
        None => {
            let label = decoded.trim();
            ((!label.is_empty()).then(|| label.to_string()), String::new())
        }
    }
}
