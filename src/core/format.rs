//! Result rendering.
//!
//! Every outcome, including no matches and fatal errors, renders to a
//! complete envelope so a launcher reading stdout can always parse it.

use std::fmt::Write as _;

use serde::Serialize;

use crate::core::constants::LAUNCHER_ICON;
use crate::core::domain::SecretRecord;
use crate::core::lookup::Entry;
use crate::error::ParseWarning;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// Machine-readable JSON items
    #[default]
    Json,
    /// Alfred script-filter items
    #[value(alias = "alfred")]
    Launcher,
    /// Human-readable text
    Plain,
}

#[derive(Serialize)]
struct Envelope<T> {
    items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CodeItem {
    label: String,
    current_code: String,
    next_code: String,
    subtitle: String,
}

#[derive(Serialize)]
struct LauncherItem {
    title: String,
    subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    arg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<Icon>,
}

#[derive(Serialize)]
struct Icon {
    path: &'static str,
}

/// Renders lookup and import results.
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    pub title_with_account: bool,
    pub subtitle_with_account: bool,
}

impl Formatter {
    pub fn new(title_with_account: bool, subtitle_with_account: bool) -> Self {
        Self {
            title_with_account,
            subtitle_with_account,
        }
    }

    /// Title for a record: the label, optionally followed by the account.
    pub fn title(&self, record: &SecretRecord) -> String {
        if self.title_with_account && !record.account().is_empty() {
            format!("{} - {}", record.label(), record.account())
        } else {
            record.label().to_string()
        }
    }

    /// Subtitle with both codes, optionally followed by the account.
    pub fn subtitle(&self, entry: &Entry<'_>) -> String {
        let mut subtitle = format!(
            "Current TOTP: {} | Next TOTP: {}",
            entry.codes.current, entry.codes.next
        );
        if self.subtitle_with_account && !entry.record.account().is_empty() {
            let _ = write!(subtitle, " - {}", entry.record.account());
        }
        subtitle
    }

    /// Render lookup entries. No entries renders an empty item list.
    pub fn render(&self, entries: &[Entry<'_>], format: Format) -> String {
        match format {
            Format::Json => {
                let items: Vec<CodeItem> = entries
                    .iter()
                    .map(|e| CodeItem {
                        label: self.title(e.record),
                        current_code: e.codes.current.clone(),
                        next_code: e.codes.next.clone(),
                        subtitle: self.subtitle(e),
                    })
                    .collect();
                to_json(&Envelope { items, error: None })
            }
            Format::Launcher => {
                let items: Vec<LauncherItem> = entries
                    .iter()
                    .map(|e| LauncherItem {
                        title: self.title(e.record),
                        subtitle: self.subtitle(e),
                        arg: Some(e.codes.current.clone()),
                        icon: Some(Icon {
                            path: LAUNCHER_ICON,
                        }),
                    })
                    .collect();
                to_json(&Envelope { items, error: None })
            }
            Format::Plain => {
                if entries.is_empty() {
                    return "no matching services found".to_string();
                }
                let width = entries
                    .iter()
                    .map(|e| self.title(e.record).chars().count())
                    .max()
                    .unwrap_or(0);
                entries
                    .iter()
                    .map(|e| {
                        format!(
                            "{:<width$}  {}  (next {})",
                            self.title(e.record),
                            e.codes.current,
                            e.codes.next,
                            width = width
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
    }

    /// Render a fatal error as an empty result carrying the message.
    pub fn render_error(&self, message: &str, format: Format) -> String {
        match format {
            Format::Json | Format::Launcher => to_json(&Envelope::<CodeItem> {
                items: Vec::new(),
                error: Some(message.to_string()),
            }),
            Format::Plain => format!("error: {}", message),
        }
    }

    /// Render the outcome of a successful import.
    pub fn render_import(
        &self,
        imported: usize,
        warnings: &[ParseWarning],
        format: Format,
    ) -> String {
        let mut summary = format!("Database created with {} entries.", imported);
        if !warnings.is_empty() {
            let _ = write!(summary, " Skipped {} unparsable lines.", warnings.len());
        }

        match format {
            Format::Json | Format::Launcher => to_json(&Envelope {
                items: vec![message_item("Import Successful", &summary)],
                error: None,
            }),
            Format::Plain => {
                let mut text = summary;
                for warning in warnings {
                    let _ = write!(text, "\nskipped: {}", warning);
                }
                text
            }
        }
    }

    /// Render a failed import.
    pub fn render_import_error(&self, message: &str, format: Format) -> String {
        match format {
            Format::Json | Format::Launcher => to_json(&Envelope {
                items: vec![message_item("Import Failed", message)],
                error: Some(message.to_string()),
            }),
            Format::Plain => format!("error: {}", message),
        }
    }
}

fn message_item(title: &str, subtitle: &str) -> LauncherItem {
    LauncherItem {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        arg: None,
        icon: None,
    }
}

fn to_json<T: Serialize>(envelope: &Envelope<T>) -> String {
    // Envelopes only hold strings, which always serialize.
    serde_json::to_string_pretty(envelope).unwrap_or_else(|_| r#"{"items": []}"#.to_string())
}
