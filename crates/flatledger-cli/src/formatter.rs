//! Output formatting for response payloads.

use clap::ValueEnum;

/// Output format for payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON
    Pretty,
    /// Single-line JSON
    Compact,
    /// Payload bytes as stored
    Raw,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Compact => write!(f, "compact"),
            OutputFormat::Raw => write!(f, "raw"),
        }
    }
}

/// Render a payload. Payloads that are not JSON are printed as text.
pub fn format_payload(payload: &[u8], format: OutputFormat) -> String {
    if payload.is_empty() {
        return String::new();
    }

    let raw = || String::from_utf8_lossy(payload).into_owned();
    if format == OutputFormat::Raw {
        return raw();
    }

    match serde_json::from_slice::<serde_json::Value>(payload) {
        Ok(value) if format == OutputFormat::Pretty => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw())
        }
        Ok(value) => value.to_string(),
        Err(_) => raw(),
    }
}
