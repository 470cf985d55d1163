//! Time-based one-time passwords (RFC 6238 over RFC 4226).
//!
//! Everything here is a pure function of its inputs. The caller supplies
//! the reference time, so the current and next code are two independent
//! evaluations.

use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use zeroize::Zeroizing;

use crate::core::constants::MAX_DIGITS;
use crate::core::domain::{Algorithm, SecretRecord};
use crate::core::types::UnixSeconds;
use crate::error::OtpError;

/// Current and upcoming code for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePair {
    pub current: String,
    pub next: String,
}

impl CodePair {
    /// Codes for the window containing `now` and the one after it.
    ///
    /// # Errors
    ///
    /// Returns `OtpError` if the record's secret or parameters are invalid.
    pub fn at(record: &SecretRecord, now: UnixSeconds) -> Result<Self, OtpError> {
        let current = record_code(record, now)?;
        let next = record_code(record, now.saturating_add(record.period()))?;
        Ok(Self { current, next })
    }
}

/// Current Unix time in seconds.
pub fn now() -> UnixSeconds {
    u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0)
}

/// Code for a stored record at `at`.
pub fn record_code(record: &SecretRecord, at: UnixSeconds) -> Result<String, OtpError> {
    code(
        record.secret(),
        record.algorithm(),
        record.digits(),
        record.period(),
        at,
    )
    .map_err(|e| match e {
        OtpError::InvalidSecret { reason, .. } => OtpError::InvalidSecret {
            label: record.to_string(),
            reason,
        },
        OtpError::InvalidParameters { reason, .. } => OtpError::InvalidParameters {
            label: record.to_string(),
            reason,
        },
    })
}

/// Generate a TOTP code.
///
/// The counter is `at / period`; the code is the HOTP value of that
/// counter reduced to `digits` decimal digits, zero-padded.
///
/// # Errors
///
/// Returns `OtpError::InvalidSecret` when `secret` is not base32 and
/// `OtpError::InvalidParameters` for a zero period or unsupported digit
/// count.
pub fn code(
    secret: &str,
    algorithm: Algorithm,
    digits: u32,
    period: u64,
    at: UnixSeconds,
) -> Result<String, OtpError> {
    if period == 0 {
        return Err(invalid_parameters("period must be positive"));
    }
    if digits == 0 || digits > MAX_DIGITS {
        return Err(invalid_parameters("unsupported digit count"));
    }

    let key = decode_secret(secret)?;
    Ok(hotp(&key, at / period, digits, algorithm))
}

/// HOTP value for raw key bytes and a counter.
pub fn hotp(key: &[u8], counter: u64, digits: u32, algorithm: Algorithm) -> String {
    let mac = Zeroizing::new(hmac_digest(key, &counter.to_be_bytes(), algorithm));
    truncate(&mac, digits)
}

fn hmac_digest(key: &[u8], message: &[u8], algorithm: Algorithm) -> Vec<u8> {
    // HMAC accepts keys of any length, so new_from_slice cannot fail here.
    macro_rules! digest {
        ($hash:ty) => {
            match Hmac::<$hash>::new_from_slice(key) {
                Ok(mut mac) => {
                    mac.update(message);
                    mac.finalize().into_bytes().to_vec()
                }
                Err(_) => Vec::new(),
            }
        };
    }

    match algorithm {
        Algorithm::Sha1 => digest!(Sha1),
        Algorithm::Sha256 => digest!(Sha256),
        Algorithm::Sha512 => digest!(Sha512),
    }
}

/// Dynamic truncation (RFC 4226 section 5.3).
fn truncate(mac: &[u8], digits: u32) -> String {
    let width = digits as usize;
    let Some(last) = mac.last() else {
        return "0".repeat(width);
    };
    let offset = (last & 0x0f) as usize;

    let binary = (u32::from(mac[offset]) & 0x7f) << 24
        | u32::from(mac[offset + 1]) << 16
        | u32::from(mac[offset + 2]) << 8
        | u32::from(mac[offset + 3]);

    let modulus = 10u64.pow(digits);
    let value = u64::from(binary) % modulus;
    format!("{:0width$}", value, width = width)
}

/// Seconds until the window containing `at` ends.
pub fn seconds_remaining(at: UnixSeconds, period: u64) -> u64 {
    if period == 0 {
        return 0;
    }
    period - at % period
}

/// Canonical text form of a base32 secret: upper case, no whitespace,
/// no padding.
pub fn normalize_secret(secret: &str) -> String {
    secret
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect::<String>()
        .trim_end_matches('=')
        .to_ascii_uppercase()
}

/// Decode a base32 secret into key bytes, zeroized on drop.
///
/// # Errors
///
/// Returns `OtpError::InvalidSecret` for empty or non-base32 input.
pub fn decode_secret(secret: &str) -> Result<Zeroizing<Vec<u8>>, OtpError> {
    let normalized = normalize_secret(secret);
    if normalized.is_empty() {
        return Err(invalid_secret("secret is empty"));
    }

    base32::decode(base32::Alphabet::Rfc4648 { padding: false }, &normalized)
        .filter(|bytes| !bytes.is_empty())
        .map(Zeroizing::new)
        .ok_or_else(|| invalid_secret("not valid base32"))
}

fn invalid_secret(reason: &str) -> OtpError {
    OtpError::InvalidSecret {
        label: String::new(),
        reason: reason.to_string(),
    }
}

fn invalid_parameters(reason: &str) -> OtpError {
    OtpError::InvalidParameters {
        label: String::new(),
        reason: reason.to_string(),
    }
}
