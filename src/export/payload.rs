//! Export payload formatting.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ExportError;
use crate::wallet::WalletRecord;

use super::Separator;

const FILE_STEM: &str = "tezos_wallets";

/// File-system safe, second-precision UTC timestamp.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// Output file kind, chosen by the separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Json,
}

impl ExportFormat {
    pub fn for_separator(separator: Separator) -> Self {
        if separator.is_json() {
            ExportFormat::Json
        } else {
            ExportFormat::Text
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain;charset=utf-8",
            ExportFormat::Json => "application/json;charset=utf-8",
        }
    }
}

/// A formatted file, ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub content: String,
    pub file_name: String,
    pub mime_type: &'static str,
}

/// JSON export entry. The mnemonic is not exported.
#[derive(Serialize)]
struct JsonEntry<'a> {
    wallet: &'a str,
    key: &'a str,
}

/// Formats `records` for `separator`, naming the file after `timestamp`.
pub fn format_records(
    records: &[WalletRecord],
    separator: Separator,
    timestamp: DateTime<Utc>,
) -> Result<ExportPayload, ExportError> {
    let format = ExportFormat::for_separator(separator);

    let content = match separator.delimiter() {
        None => {
            let entries: Vec<JsonEntry<'_>> = records
                .iter()
                .map(|r| JsonEntry {
                    wallet: &r.address,
                    key: &r.private_key,
                })
                .collect();
            serde_json::to_string_pretty(&entries)?
        }
        Some(delimiter) => records
            .iter()
            .map(|r| format!("{}{}{}", r.address, delimiter, r.private_key))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    Ok(ExportPayload {
        content,
        file_name: file_name(timestamp, format),
        mime_type: format.mime_type(),
    })
}

/// Returns `tezos_wallets_<YYYY-MM-DDTHH-MM-SS>.<ext>`.
pub fn file_name(timestamp: DateTime<Utc>, format: ExportFormat) -> String {
    format!(
        "{}_{}.{}",
        FILE_STEM,
        timestamp.format(TIMESTAMP_FORMAT),
        format.extension()
    )
}
