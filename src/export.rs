//! CSV download support: serialize any record table back to the source
//! column layout so the loader can re-ingest the export.

use serde::Serialize;

use crate::data::model::FundingRecord;
use crate::error::DataError;

/// One export row, using the source file's header names. Derived columns
/// (year, month, bucket) are left out; the loader re-derives them.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Date")]
    date: String, // ISO, which the loader accepts
    #[serde(rename = "Startup Name")]
    startup_name: &'a str,
    #[serde(rename = "Industry Vertical")]
    industry_vertical: &'a str,
    #[serde(rename = "SubVertical")]
    sub_vertical: &'a str,
    #[serde(rename = "City")]
    city: &'a str,
    #[serde(rename = "Investors")]
    investors: &'a str,
    #[serde(rename = "Investment Type")]
    investment_type: &'a str,
    #[serde(rename = "Amount in USD")]
    amount_usd: f64,
    #[serde(rename = "Funding_Category")]
    funding_category: &'a str,
    #[serde(rename = "Funding_Round")]
    funding_round: &'a str,
    #[serde(rename = "Power_Score_x")]
    power_score: f64,
    #[serde(rename = "Influence_Index")]
    influence_index: f64,
    #[serde(rename = "Final_Rank")]
    final_rank: f64,
}

impl<'a> From<&'a FundingRecord> for ExportRow<'a> {
    fn from(rec: &'a FundingRecord) -> Self {
        ExportRow {
            date: rec.date.to_string(),
            startup_name: &rec.startup,
            industry_vertical: &rec.industry,
            sub_vertical: &rec.sub_vertical,
            city: &rec.city,
            investors: &rec.investors,
            investment_type: &rec.investment_type,
            amount_usd: rec.amount_usd,
            funding_category: rec.funding_category.as_str(),
            funding_round: rec.funding_round.as_str(),
            power_score: rec.power_score,
            influence_index: rec.influence_index,
            final_rank: rec.final_rank,
        }
    }
}

/// Serialize a record table to a CSV byte stream for download.
pub fn export_csv(records: &[FundingRecord]) -> Result<Vec<u8>, DataError> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        for rec in records {
            writer.serialize(ExportRow::from(rec))?;
        }
        writer.flush().map_err(csv::Error::from)?;
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{FundingCategory, FundingRound};
    use chrono::NaiveDate;

    fn record() -> FundingRecord {
        let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        let (year, month, month_name, year_month) = FundingRecord::derive_date_fields(date);
        FundingRecord {
            date,
            year,
            month,
            month_name,
            year_month,
            amount_usd: 500_000.0,
            startup: "Acme".into(),
            industry: "FinTech".into(),
            sub_vertical: "Payments".into(),
            city: "Bangalore".into(),
            investors: "Sequoia Capital, Accel".into(),
            investment_type: "Private Equity".into(),
            funding_category: FundingCategory::Large,
            funding_round: FundingRound::SeriesA,
            power_score: 0.91,
            influence_index: 0.4,
            final_rank: 3.0,
        }
    }

    #[test]
    fn writes_source_headers_and_iso_dates() {
        let bytes = export_csv(&[record()]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Date,Startup Name,Industry Vertical,SubVertical,City,Investors,\
             Investment Type,Amount in USD,Funding_Category,Funding_Round,\
             Power_Score_x,Influence_Index,Final_Rank"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("2023-01-15,Acme,FinTech"));
        assert!(row.contains("\"Sequoia Capital, Accel\""));
        assert!(row.contains("Series A"));
    }

    #[test]
    fn empty_table_exports_cleanly() {
        let bytes = export_csv(&[]).unwrap();
        assert!(bytes.is_empty());
    }
}
