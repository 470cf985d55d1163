//! Test fixtures and constants.

/// One valid entry and one line that is not a URI.
pub const SAMPLE_EXPORT: &str = "otpauth://totp/Acme:alice?secret=JBSWY3DPEHPK3PXP&issuer=Acme\nnot-a-uri\n";

/// Several services, two accounts under one of them.
pub const MULTI_EXPORT: &str = r#"otpauth://totp/Acme:alice?secret=JBSWY3DPEHPK3PXP&issuer=Acme
otpauth://totp/Acme:bob?secret=GEZDGNBVGY3TQOJQ&issuer=Acme
otpauth://totp/GitHub:carol%40example.com?secret=KRSXG5CTMVRXEZLU&issuer=GitHub&algorithm=SHA256&digits=8
otpauth://totp/Proton:dave?secret=MFRGGZDFMZTWQ2LK&issuer=Proton&period=60
"#;

/// An export line as Ente writes it, with the display metadata suffix.
pub const ENTE_EXPORT: &str = "otpauth://totp/Bank:erin?secret=JBSWY3DPEHPK3PXP&issuer=Bank&algorithm=sha1&digits=6&period=30&codeDisplay=%7B%22pinned%22%3Afalse%7D\n";

/// A serialized store as the secrets cache would carry it.
pub const CACHED_STORE: &str = r#"{"Cached": [["frank", "JBSWY3DPEHPK3PXP"]]}"#;

/// A bare-label entry (no colon in the path) ahead of a colon-form entry.
pub const BARE_LABEL_EXPORT: &str = "otpauth://totp/Acme?secret=JBSWY3DPEHPK3PXP\notpauth://totp/Acme:alice?secret=GEZDGNBVGY3TQOJQ&issuer=Acme\n";
