use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::Deserialize;

use super::model::{clean_token, FundingCategory, FundingDataset, FundingRecord, FundingRound};
use crate::error::DataError;

// ---------------------------------------------------------------------------
// Raw row shape
// ---------------------------------------------------------------------------

/// One row as it appears in the source file. Everything is optional text:
/// the source is dirty and all typing happens in [`normalize_row`].
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Date")]
    date: Option<String>,
    #[serde(rename = "Startup Name")]
    startup_name: Option<String>,
    #[serde(rename = "Industry Vertical")]
    industry_vertical: Option<String>,
    #[serde(rename = "SubVertical")]
    sub_vertical: Option<String>,
    #[serde(rename = "City")]
    city: Option<String>,
    #[serde(rename = "Investors")]
    investors: Option<String>,
    #[serde(rename = "Investment Type")]
    investment_type: Option<String>,
    #[serde(rename = "Amount in USD")]
    amount_usd: Option<String>,
    #[serde(rename = "Funding_Category")]
    funding_category: Option<String>,
    #[serde(rename = "Funding_Round")]
    funding_round: Option<String>,
    #[serde(rename = "Power_Score_x")]
    power_score: Option<String>,
    #[serde(rename = "Influence_Index")]
    influence_index: Option<String>,
    #[serde(rename = "Final_Rank")]
    final_rank: Option<String>,
}

// ---------------------------------------------------------------------------
// Field-level parsers
// ---------------------------------------------------------------------------

/// Day-first formats the source uses, plus ISO so our own CSV export can be
/// re-ingested. Tried in order; first hit wins.
const DATE_FORMATS: [&str; 5] = ["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%d/%m/%y", "%Y-%m-%d"];

/// Day-first date parse. `None` means the row gets dropped.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
}

/// Coerce the amount field. Unparsable, missing, negative, or non-finite
/// values all floor to zero; a row is never dropped for its amount.
fn parse_amount(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|v| v.max(0.0))
        .unwrap_or(0.0)
}

/// Numeric score column: missing or unparsable values become 0.
fn parse_score(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Trim, then fall back to `default` if nothing is left. Trimming happens
/// before the missing check so whitespace-only cells count as missing.
fn trim_or(raw: Option<&str>, default: &str) -> String {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

/// Word-wise title case: first letter of each alphabetic run uppercased,
/// the rest lowercased ("private equity" → "Private Equity").
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Apply the full normalization rule set to one raw row.
/// Returns `None` only when the date cannot be parsed.
fn normalize_row(raw: &RawRow) -> Option<FundingRecord> {
    let date = parse_date(raw.date.as_deref().unwrap_or(""))?;
    let (year, month, month_name, year_month) = FundingRecord::derive_date_fields(date);

    let investors = match raw.investors.as_deref().map(clean_token) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => "Undisclosed".to_string(),
    };

    let city = {
        let c = trim_or(raw.city.as_deref(), "Unknown");
        c.trim_end_matches(',').trim_end().to_string()
    };

    Some(FundingRecord {
        date,
        year,
        month,
        month_name,
        year_month,
        amount_usd: parse_amount(raw.amount_usd.as_deref()),
        startup: trim_or(raw.startup_name.as_deref(), "Unknown"),
        industry: trim_or(raw.industry_vertical.as_deref(), "Unknown"),
        sub_vertical: trim_or(raw.sub_vertical.as_deref(), "N/A"),
        city,
        investors,
        investment_type: title_case(&trim_or(raw.investment_type.as_deref(), "Unknown")),
        funding_category: FundingCategory::parse(raw.funding_category.as_deref().unwrap_or("")),
        funding_round: match raw.funding_round.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => FundingRound::parse(s),
            _ => FundingRound::Other,
        },
        power_score: parse_score(raw.power_score.as_deref()),
        influence_index: parse_score(raw.influence_index.as_deref()),
        final_rank: parse_score(raw.final_rank.as_deref()),
    })
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and normalize the source file into the canonical table.
///
/// Fails with [`DataError::DataSource`] only when the file cannot be opened
/// or is not decodable as CSV at all. Rows whose date fails to parse are
/// silently dropped (a count is kept and logged); bad amounts floor to zero.
pub fn load_csv(path: &Path) -> Result<FundingDataset, DataError> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| DataError::data_source(path, e))?;

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in reader.deserialize::<RawRow>() {
        let raw = row.map_err(|e| DataError::data_source(path, e))?;
        match normalize_row(&raw) {
            Some(rec) => records.push(rec),
            None => {
                dropped += 1;
                debug!("dropping row with unparsable date: {:?}", raw.date);
            }
        }
    }

    if dropped > 0 {
        warn!(
            "{}: dropped {dropped} row(s) with unparsable dates",
            path.display()
        );
    }
    info!("loaded {} records from {}", records.len(), path.display());

    Ok(FundingDataset::from_records(records, dropped))
}

// ---------------------------------------------------------------------------
// Memoized loading
// ---------------------------------------------------------------------------

/// Explicit load-once cache, keyed by path + modification time.
///
/// The canonical table is immutable, so a cache hit hands out the same
/// `Arc`; sessions can share it without locking. `load` reloads when the
/// file's mtime changes, and `invalidate` drops everything.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: Mutex<HashMap<PathBuf, (SystemTime, Arc<FundingDataset>)>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Memoized [`load_csv`]: returns the cached table when the file is
    /// unchanged, otherwise reloads and replaces the entry.
    pub fn load(&self, path: &Path) -> Result<Arc<FundingDataset>, DataError> {
        let modified = std::fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| DataError::data_source(path, e.into()))?;

        let mut entries = self.entries.lock().expect("dataset cache poisoned");
        if let Some((cached_mtime, dataset)) = entries.get(path) {
            if *cached_mtime == modified {
                debug!("cache hit for {}", path.display());
                return Ok(Arc::clone(dataset));
            }
        }

        let dataset = Arc::new(load_csv(path)?);
        entries.insert(path.to_path_buf(), (modified, Arc::clone(&dataset)));
        Ok(dataset)
    }

    /// Drop all cached tables; the next `load` re-reads from disk.
    pub fn invalidate(&self) {
        self.entries
            .lock()
            .expect("dataset cache poisoned")
            .clear();
    }
}
