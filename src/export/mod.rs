//! Export of generated wallets.
//!
//! Records are formatted as delimited text or JSON, stamped with a
//! file name, and handed to a [`FileSaver`].

mod payload;
mod saver;
mod separator;

use chrono::{DateTime, Utc};

use crate::error::ExportError;
use crate::wallet::WalletRecord;

pub use payload::{file_name, format_records, ExportFormat, ExportPayload};
pub use saver::{DirectorySaver, FileSaver};
pub use separator::Separator;

/// Formats `records` and saves them through `saver`.
///
/// Returns the name of the saved file.
pub fn export<S: FileSaver + ?Sized>(
    records: &[WalletRecord],
    separator: Separator,
    saver: &mut S,
    timestamp: DateTime<Utc>,
) -> Result<String, ExportError> {
    let payload = format_records(records, separator, timestamp)?;
    saver.save_file(&payload)?;
    Ok(payload.file_name)
}
