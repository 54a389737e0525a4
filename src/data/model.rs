use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, NaiveDate};

// ---------------------------------------------------------------------------
// Categorical fields
// ---------------------------------------------------------------------------

/// Deal-size bucket attached to each record by the upstream scoring step.
///
/// Closed set; anything the source spells differently folds into `Unknown`
/// at construction so typos never reach the filter layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FundingCategory {
    Small,
    Medium,
    Large,
    VeryLarge,
    Unknown,
}

impl FundingCategory {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "Small" => FundingCategory::Small,
            "Medium" => FundingCategory::Medium,
            "Large" => FundingCategory::Large,
            "Very Large" => FundingCategory::VeryLarge,
            _ => FundingCategory::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FundingCategory::Small => "Small",
            FundingCategory::Medium => "Medium",
            FundingCategory::Large => "Large",
            FundingCategory::VeryLarge => "Very Large",
            FundingCategory::Unknown => "Unknown",
        }
    }

    /// Display order for category charts: small → very large, unknown last.
    pub const ORDERED: [FundingCategory; 5] = [
        FundingCategory::Small,
        FundingCategory::Medium,
        FundingCategory::Large,
        FundingCategory::VeryLarge,
        FundingCategory::Unknown,
    ];
}

impl fmt::Display for FundingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Investment-stage label. Tagged set with an explicit fallback: a missing
/// or unrecognized stage becomes `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FundingRound {
    Seed,
    Angel,
    SeriesA,
    SeriesB,
    SeriesC,
    PrivateEquity,
    Debt,
    Other,
}

impl FundingRound {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "Seed" => FundingRound::Seed,
            "Angel" => FundingRound::Angel,
            "Series A" => FundingRound::SeriesA,
            "Series B" => FundingRound::SeriesB,
            "Series C" => FundingRound::SeriesC,
            "Private Equity" => FundingRound::PrivateEquity,
            "Debt" => FundingRound::Debt,
            _ => FundingRound::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FundingRound::Seed => "Seed",
            FundingRound::Angel => "Angel",
            FundingRound::SeriesA => "Series A",
            FundingRound::SeriesB => "Series B",
            FundingRound::SeriesC => "Series C",
            FundingRound::PrivateEquity => "Private Equity",
            FundingRound::Debt => "Debt",
            FundingRound::Other => "Other",
        }
    }
}

impl fmt::Display for FundingRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FundingRecord – one row of the canonical table
// ---------------------------------------------------------------------------

/// Month abbreviations in calendar order, indexable by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One normalized funding event. Every field is already cleaned: the date
/// is valid, the amount is finite and non-negative, and no string field is
/// empty (missing values were replaced with their documented defaults).
#[derive(Debug, Clone, PartialEq)]
pub struct FundingRecord {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    /// `"Jan"` … `"Dec"`, derived from `month`.
    pub month_name: &'static str,
    /// `date` truncated to the first day of its month; monthly bucket key.
    pub year_month: NaiveDate,

    pub amount_usd: f64,

    pub startup: String,
    pub industry: String,
    pub sub_vertical: String,
    pub city: String,
    /// Raw comma-joined investor list (trimmed, outer quotes stripped).
    /// Use [`FundingRecord::investor_names`] for the individual names.
    pub investors: String,
    pub investment_type: String,

    pub funding_category: FundingCategory,
    pub funding_round: FundingRound,

    // Precomputed investor-quality metrics, carried through unmodified.
    pub power_score: f64,
    pub influence_index: f64,
    pub final_rank: f64,
}

impl FundingRecord {
    /// Build the derived date columns from a parsed date.
    pub(crate) fn derive_date_fields(date: NaiveDate) -> (i32, u32, &'static str, NaiveDate) {
        let year = date.year();
        let month = date.month();
        let name = MONTH_NAMES[(month - 1) as usize];
        // month is always 1..=12 here
        let bucket = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        (year, month, name, bucket)
    }

    /// Individual investor names: the raw field split on commas, each token
    /// trimmed and stripped of outer quotes. Empty tokens are skipped.
    pub fn investor_names(&self) -> impl Iterator<Item = &str> {
        self.investors
            .split(',')
            .map(clean_token)
            .filter(|t| !t.is_empty())
    }
}

/// Trim a delimited token and strip one layer of surrounding double quotes.
pub(crate) fn clean_token(raw: &str) -> &str {
    raw.trim().trim_matches('"').trim()
}

// ---------------------------------------------------------------------------
// FundingDataset – the canonical table
// ---------------------------------------------------------------------------

/// The fully normalized record set, immutable after construction, plus the
/// sorted unique-value lists the filter sidebar is populated from.
#[derive(Debug, Clone)]
pub struct FundingDataset {
    records: Vec<FundingRecord>,
    years: Vec<i32>,
    industries: Vec<String>,
    cities: Vec<String>,
    rounds: BTreeSet<FundingRound>,
    /// Rows excluded during load because their date failed to parse.
    dropped_rows: usize,
}

impl FundingDataset {
    /// Build the unique-value indices from normalized records.
    pub fn from_records(records: Vec<FundingRecord>, dropped_rows: usize) -> Self {
        let mut years: BTreeSet<i32> = BTreeSet::new();
        let mut industries: BTreeSet<&str> = BTreeSet::new();
        let mut cities: BTreeSet<&str> = BTreeSet::new();
        let mut rounds: BTreeSet<FundingRound> = BTreeSet::new();

        for rec in &records {
            years.insert(rec.year);
            industries.insert(&rec.industry);
            cities.insert(&rec.city);
            rounds.insert(rec.funding_round);
        }

        let industries: Vec<String> = industries.into_iter().map(str::to_owned).collect();
        let cities: Vec<String> = cities.into_iter().map(str::to_owned).collect();
        FundingDataset {
            records,
            years: years.into_iter().collect(),
            industries,
            cities,
            rounds,
            dropped_rows,
        }
    }

    pub fn records(&self) -> &[FundingRecord] {
        &self.records
    }

    /// Distinct years present, ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Distinct industries, lexicographic.
    pub fn industries(&self) -> &[String] {
        &self.industries
    }

    /// Distinct cities, lexicographic.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Distinct funding rounds present in the data.
    pub fn rounds(&self) -> &BTreeSet<FundingRound> {
        &self.rounds
    }

    /// How many source rows were dropped for unparsable dates.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_folds_unknown_labels() {
        assert_eq!(
            FundingCategory::parse("Very Large"),
            FundingCategory::VeryLarge
        );
        assert_eq!(FundingCategory::parse(" Medium "), FundingCategory::Medium);
        assert_eq!(FundingCategory::parse("Gigantic"), FundingCategory::Unknown);
        assert_eq!(FundingCategory::parse(""), FundingCategory::Unknown);
    }

    #[test]
    fn round_parse_falls_back_to_other() {
        assert_eq!(FundingRound::parse("Series A"), FundingRound::SeriesA);
        assert_eq!(FundingRound::parse("Pre-Series A"), FundingRound::Other);
        assert_eq!(FundingRound::parse(""), FundingRound::Other);
    }

    #[test]
    fn derived_date_fields() {
        let date = NaiveDate::from_ymd_opt(2023, 2, 17).unwrap();
        let (year, month, name, bucket) = FundingRecord::derive_date_fields(date);
        assert_eq!(year, 2023);
        assert_eq!(month, 2);
        assert_eq!(name, "Feb");
        assert_eq!(bucket, NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
    }

    #[test]
    fn clean_token_strips_quotes_and_whitespace() {
        assert_eq!(clean_token("  \"Sequoia Capital\"  "), "Sequoia Capital");
        assert_eq!(clean_token(" Accel "), "Accel");
        assert_eq!(clean_token("\"\""), "");
    }
}
