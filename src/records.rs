//! Birthday records supplied by the caller as a JSON array file.
//!
//! This crate never writes records back; the file is owned by whatever
//! produced it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

/// One person's birthday entry.
#[derive(Debug, Clone, Deserialize)]
pub struct BirthdayRecord {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub birthday: NaiveDate,
}

impl BirthdayRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Loads all records from a JSON file, ordered by id.
pub fn load(path: &Path) -> Result<Vec<BirthdayRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read records file: {}", path.display()))?;
    let records = parse(&raw)
        .with_context(|| format!("failed to parse records file: {}", path.display()))?;
    info!(path = %path.display(), count = records.len(), "records loaded");
    Ok(records)
}

/// Parses a JSON array of records and sorts it by id.
pub fn parse(raw: &str) -> Result<Vec<BirthdayRecord>> {
    let mut records: Vec<BirthdayRecord> = serde_json::from_str(raw)?;
    records.sort_by_key(|r| r.id);
    Ok(records)
}

/// Finds the record with the given id, if any.
pub fn find(records: &[BirthdayRecord], id: u64) -> Option<&BirthdayRecord> {
    records.iter().find(|r| r.id == id)
}
