//! Range-scan listing of stored flats.
//!
//! Each scanned value is embedded in the output as-is. It is validated as
//! JSON first, so one malformed value fails the listing with a
//! [`Error::Decode`] naming its key instead of producing a broken array.
//!
//! Scans are dropped on every return path, which releases the ledger's
//! iteration handle.

use serde::Serialize;
use serde_json::value::RawValue;
use tracing::debug;

use super::Contract;
use crate::error::Error;
use crate::ledger::{KeyValue, Ledger};
use crate::record::Flat;

/// One element of a listing: `{"Key": ..., "Record": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct ListEntry {
    /// Key the record is stored under.
    #[serde(rename = "Key")]
    pub key: String,

    /// Stored JSON, embedded verbatim.
    #[serde(rename = "Record")]
    pub record: Box<RawValue>,
}

impl ListEntry {
    fn from_key_value(kv: KeyValue) -> Result<Self, Error> {
        let KeyValue { key, value } = kv;
        let text = match String::from_utf8(value) {
            Ok(text) => text,
            Err(e) => {
                return Err(Error::Decode {
                    key,
                    message: e.to_string(),
                })
            }
        };
        match RawValue::from_string(text) {
            Ok(record) => Ok(Self { key, record }),
            Err(e) => Err(Error::Decode {
                key,
                message: e.to_string(),
            }),
        }
    }

    /// Decode the embedded record.
    pub fn flat(&self) -> Result<Flat, Error> {
        Flat::from_bytes(&self.key, self.record.get().as_bytes())
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, Serialize)]
pub struct ListPage {
    /// Entries on this page, in ledger order.
    #[serde(rename = "Records")]
    pub records: Vec<ListEntry>,

    /// Key to resume from, or None when the scan is exhausted.
    #[serde(rename = "Bookmark")]
    pub bookmark: Option<String>,
}

impl ListPage {
    /// Encode the page as JSON.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}

impl<L: Ledger> Contract<'_, L> {
    /// Every entry within the configured scan bounds, in ledger order.
    pub fn list_all(&self) -> Result<Vec<ListEntry>, Error> {
        let bounds = &self.config().scan;
        let scan = self
            .ledger()
            .range_scan(&bounds.start, &bounds.end)
            .map_err(Error::Scan)?;

        let mut entries = Vec::new();
        for item in scan {
            let kv = item.map_err(Error::Scan)?;
            entries.push(ListEntry::from_key_value(kv)?);
        }

        debug!(
            start = %bounds.start,
            end = %bounds.end,
            count = entries.len(),
            "listed flats"
        );
        Ok(entries)
    }

    /// [`list_all`](Self::list_all) encoded as a JSON array.
    pub fn list_all_json(&self) -> Result<Vec<u8>, Error> {
        let entries = self.list_all()?;
        serde_json::to_vec(&entries).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// At most `page_size` entries starting at `bookmark`.
    ///
    /// Without a bookmark (or with one before the configured start) the page
    /// starts at the configured start key. `page_size` is capped at the
    /// configured maximum; zero is rejected.
    pub fn list_page(&self, page_size: usize, bookmark: Option<&str>) -> Result<ListPage, Error> {
        if page_size == 0 {
            return Err(Error::InvalidPageSize(page_size));
        }
        let page_size = page_size.min(self.config().max_page_size);

        let bounds = &self.config().scan;
        let start = match bookmark {
            Some(key) if key > bounds.start.as_str() => key,
            _ => bounds.start.as_str(),
        };
        let scan = self
            .ledger()
            .range_scan(start, &bounds.end)
            .map_err(Error::Scan)?;

        let mut records = Vec::with_capacity(page_size);
        let mut next = None;
        for item in scan {
            let kv = item.map_err(Error::Scan)?;
            if records.len() == page_size {
                next = Some(kv.key);
                break;
            }
            records.push(ListEntry::from_key_value(kv)?);
        }

        debug!(start, count = records.len(), more = next.is_some(), "listed flat page");
        Ok(ListPage {
            records,
            bookmark: next,
        })
    }
}
