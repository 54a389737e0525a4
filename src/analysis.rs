//! Aggregation library: pure, stateless queries over a (filtered) record
//! table. Presentation code calls one or more of these per chart and never
//! gets anything mutated in place.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::Hash;

use chrono::NaiveDate;

use crate::data::model::{clean_token, FundingRecord, MONTH_NAMES};

// ---------------------------------------------------------------------------
// Generic group-bys
// ---------------------------------------------------------------------------

/// Sum `value` per group, sorted descending by sum. Ties keep first-seen
/// group order (the sort is stable and groups are accumulated in row order).
pub fn sum_by_group<K, KF, VF>(records: &[FundingRecord], key: KF, value: VF) -> Vec<(K, f64)>
where
    K: Eq + Hash + Clone,
    KF: Fn(&FundingRecord) -> K,
    VF: Fn(&FundingRecord) -> f64,
{
    let mut order: Vec<(K, f64)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for rec in records {
        let k = key(rec);
        match index.get(&k) {
            Some(&i) => order[i].1 += value(rec),
            None => {
                index.insert(k.clone(), order.len());
                order.push((k, value(rec)));
            }
        }
    }

    order.sort_by(|a, b| b.1.total_cmp(&a.1));
    order
}

/// Row count per group, sorted descending; ties keep first-seen order.
pub fn count_by_group<K, KF>(records: &[FundingRecord], key: KF) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    KF: Fn(&FundingRecord) -> K,
{
    let mut order: Vec<(K, usize)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for rec in records {
        let k = key(rec);
        match index.get(&k) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(k.clone(), order.len());
                order.push((k, 1));
            }
        }
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
}

/// The `n` records with the largest `value`; ties keep original row order.
/// `n` past the end just returns every row.
pub fn top_n<VF>(records: &[FundingRecord], n: usize, value: VF) -> Vec<&FundingRecord>
where
    VF: Fn(&FundingRecord) -> f64,
{
    let mut by_value: Vec<&FundingRecord> = records.iter().collect();
    // stable sort: equal values stay in source order
    by_value.sort_by(|a, b| value(*b).total_cmp(&value(*a)));
    by_value.truncate(n.min(records.len()));
    by_value
}

// ---------------------------------------------------------------------------
// Time rollups
// ---------------------------------------------------------------------------

/// One row of the year-on-year table.
#[derive(Debug, Clone, PartialEq)]
pub struct YearRollup {
    pub year: i32,
    pub total: f64,
    pub deals: usize,
    pub avg_deal: f64,
    /// Distinct startups funded that year.
    pub startups: usize,
}

/// Per-year totals, deal counts, mean deal size, and distinct-startup
/// counts; one row per year present, ascending.
pub fn yearly_rollup(records: &[FundingRecord]) -> Vec<YearRollup> {
    struct Acc<'a> {
        total: f64,
        deals: usize,
        startups: BTreeSet<&'a str>,
    }

    let mut years: BTreeMap<i32, Acc> = BTreeMap::new();
    for rec in records {
        let acc = years.entry(rec.year).or_insert(Acc {
            total: 0.0,
            deals: 0,
            startups: BTreeSet::new(),
        });
        acc.total += rec.amount_usd;
        acc.deals += 1;
        acc.startups.insert(&rec.startup);
    }

    years
        .into_iter()
        .map(|(year, acc)| YearRollup {
            year,
            total: acc.total,
            deals: acc.deals,
            avg_deal: acc.total / acc.deals as f64,
            startups: acc.startups.len(),
        })
        .collect()
}

/// One monthly bucket of the cumulative-growth series.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBucket {
    /// First day of the month.
    pub month: NaiveDate,
    pub total: f64,
    /// Running sum up to and including this bucket. Non-decreasing, since
    /// amounts are non-negative.
    pub cumulative: f64,
}

/// Sum per year-month bucket in chronological order, with a running
/// cumulative sum.
pub fn monthly_rollup(records: &[FundingRecord]) -> Vec<MonthBucket> {
    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for rec in records {
        *buckets.entry(rec.year_month).or_insert(0.0) += rec.amount_usd;
    }

    let mut running = 0.0;
    buckets
        .into_iter()
        .map(|(month, total)| {
            running += total;
            MonthBucket {
                month,
                total,
                cumulative: running,
            }
        })
        .collect()
}

/// Total funding per calendar month name, Jan…Dec order, only months
/// present in the data (the seasonal-pattern chart).
pub fn monthly_pattern(records: &[FundingRecord]) -> Vec<(&'static str, f64)> {
    let mut totals = [None::<f64>; 12];
    for rec in records {
        let slot = &mut totals[(rec.month - 1) as usize];
        *slot = Some(slot.unwrap_or(0.0) + rec.amount_usd);
    }

    totals
        .iter()
        .enumerate()
        .filter_map(|(i, total)| total.map(|t| (MONTH_NAMES[i], t)))
        .collect()
}

// ---------------------------------------------------------------------------
// Pivot
// ---------------------------------------------------------------------------

/// A dense 2-D aggregation: `rows × cols`, missing combinations are 0.
#[derive(Debug, Clone)]
pub struct Pivot<R, C> {
    pub rows: Vec<R>,
    pub cols: Vec<C>,
    values: Vec<f64>, // row-major, rows.len() * cols.len()
}

impl<R: Ord, C: Ord> Pivot<R, C> {
    /// Aggregated value for a row/col pair; 0 for combinations (or keys)
    /// not present.
    pub fn get(&self, row: &R, col: &C) -> f64 {
        match (
            self.rows.binary_search(row),
            self.cols.binary_search(col),
        ) {
            (Ok(r), Ok(c)) => self.values[r * self.cols.len() + c],
            _ => 0.0,
        }
    }

    pub fn value_at(&self, row_idx: usize, col_idx: usize) -> f64 {
        self.values[row_idx * self.cols.len() + col_idx]
    }
}

/// Sum `value` into a row×col table. Row and column keys come out sorted
/// ascending; combinations with no rows are filled with 0.
pub fn pivot_sum<R, C, RF, CF, VF>(
    records: &[FundingRecord],
    row_key: RF,
    col_key: CF,
    value: VF,
) -> Pivot<R, C>
where
    R: Ord + Clone,
    C: Ord + Clone,
    RF: Fn(&FundingRecord) -> R,
    CF: Fn(&FundingRecord) -> C,
    VF: Fn(&FundingRecord) -> f64,
{
    let mut cells: BTreeMap<(R, C), f64> = BTreeMap::new();
    let mut rows: BTreeSet<R> = BTreeSet::new();
    let mut cols: BTreeSet<C> = BTreeSet::new();

    for rec in records {
        let r = row_key(rec);
        let c = col_key(rec);
        rows.insert(r.clone());
        cols.insert(c.clone());
        *cells.entry((r, c)).or_insert(0.0) += value(rec);
    }

    let rows: Vec<R> = rows.into_iter().collect();
    let cols: Vec<C> = cols.into_iter().collect();
    let mut values = vec![0.0; rows.len() * cols.len()];
    for (ri, r) in rows.iter().enumerate() {
        for (ci, c) in cols.iter().enumerate() {
            if let Some(v) = cells.get(&(r.clone(), c.clone())) {
                values[ri * cols.len() + ci] = *v;
            }
        }
    }

    Pivot { rows, cols, values }
}

/// Month × year funding heatmap: rows are month numbers (1..=12, so they
/// sort in calendar order; label them via [`MONTH_NAMES`]), columns are
/// years ascending.
pub fn monthly_heatmap(records: &[FundingRecord]) -> Pivot<u32, i32> {
    pivot_sum(records, |r| r.month, |r| r.year, |r| r.amount_usd)
}

// ---------------------------------------------------------------------------
// Multi-valued fields and distributions
// ---------------------------------------------------------------------------

/// Expand a delimiter-joined column into (row index, token) pairs. Tokens
/// are trimmed and stripped of outer quotes; empty tokens are skipped.
pub fn explode_delimited<'a, F>(
    records: &'a [FundingRecord],
    field: F,
    delimiter: char,
) -> Vec<(usize, String)>
where
    F: Fn(&'a FundingRecord) -> &'a str,
{
    let mut out = Vec::new();
    for (row, rec) in records.iter().enumerate() {
        for token in field(rec).split(delimiter) {
            let token = clean_token(token);
            if !token.is_empty() {
                out.push((row, token.to_string()));
            }
        }
    }
    out
}

/// Sorted distinct investor names across the table (the investor search
/// list), from the exploded comma-joined field.
pub fn unique_investors(records: &[FundingRecord]) -> Vec<String> {
    let names: BTreeSet<String> = explode_delimited(records, |r| r.investors.as_str(), ',')
        .into_iter()
        .map(|(_, name)| name)
        .collect();
    names.into_iter().collect()
}

/// log₁₀ of each strictly positive amount, for the deal-size distribution
/// histogram. Zero-amount deals are excluded, not clamped.
pub fn log10_amounts(records: &[FundingRecord]) -> Vec<f64> {
    records
        .iter()
        .map(|r| r.amount_usd)
        .filter(|&a| a > 0.0)
        .map(f64::log10)
        .collect()
}

/// Case-insensitive substring filter over an option list (the sidebar
/// search boxes). An empty query keeps everything.
pub fn search<'a>(names: &'a [String], query: &str) -> Vec<&'a str> {
    let query = query.to_lowercase();
    names
        .iter()
        .map(String::as_str)
        .filter(|n| n.to_lowercase().contains(&query))
        .collect()
}

// ---------------------------------------------------------------------------
// KPI summary
// ---------------------------------------------------------------------------

/// The headline numbers of the overall-analysis page.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    /// (earliest, latest) record date; `None` for an empty table.
    pub period: Option<(NaiveDate, NaiveDate)>,
    pub total_funding: f64,
    pub records: usize,
    pub startups: usize,
    pub industries: usize,
    pub cities: usize,
}

pub fn summarize(records: &[FundingRecord]) -> DatasetSummary {
    let mut startups: BTreeSet<&str> = BTreeSet::new();
    let mut industries: BTreeSet<&str> = BTreeSet::new();
    let mut cities: BTreeSet<&str> = BTreeSet::new();
    let mut total = 0.0;
    let mut period: Option<(NaiveDate, NaiveDate)> = None;

    for rec in records {
        total += rec.amount_usd;
        startups.insert(&rec.startup);
        industries.insert(&rec.industry);
        cities.insert(&rec.city);
        period = Some(match period {
            None => (rec.date, rec.date),
            Some((start, end)) => (start.min(rec.date), end.max(rec.date)),
        });
    }

    DatasetSummary {
        period,
        total_funding: total,
        records: records.len(),
        startups: startups.len(),
        industries: industries.len(),
        cities: cities.len(),
    }
}

/// Per-industry total / deal count / mean deal size, descending by total,
/// top `n` (the industry bubble chart).
#[derive(Debug, Clone, PartialEq)]
pub struct IndustryStats {
    pub industry: String,
    pub total: f64,
    pub deals: usize,
    pub avg_deal: f64,
}

pub fn industry_stats(records: &[FundingRecord], n: usize) -> Vec<IndustryStats> {
    let totals = sum_by_group(records, |r| r.industry.clone(), |r| r.amount_usd);
    let counts: HashMap<&str, usize> = {
        let mut m = HashMap::new();
        for rec in records {
            *m.entry(rec.industry.as_str()).or_insert(0) += 1;
        }
        m
    };

    totals
        .into_iter()
        .take(n)
        .map(|(industry, total)| {
            let deals = counts[industry.as_str()];
            IndustryStats {
                avg_deal: total / deals as f64,
                industry,
                total,
                deals,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Investor and startup views
// ---------------------------------------------------------------------------

/// Per-investor quality metrics, grouped by the cleaned raw investor
/// string, `"Undisclosed"` excluded; descending by mean power score.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestorStats {
    pub investors: String,
    pub avg_power_score: f64,
    pub avg_influence: f64,
    pub total_invested: f64,
    pub deals: usize,
}

pub fn investor_rollup(records: &[FundingRecord]) -> Vec<InvestorStats> {
    struct Acc {
        power: f64,
        influence: f64,
        total: f64,
        deals: usize,
    }

    let mut groups: Vec<(String, Acc)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for rec in records {
        let key = clean_token(&rec.investors);
        if key == "Undisclosed" {
            continue;
        }
        let i = match index.get(key) {
            Some(&i) => i,
            None => {
                index.insert(key.to_string(), groups.len());
                groups.push((
                    key.to_string(),
                    Acc {
                        power: 0.0,
                        influence: 0.0,
                        total: 0.0,
                        deals: 0,
                    },
                ));
                groups.len() - 1
            }
        };
        let acc = &mut groups[i].1;
        acc.power += rec.power_score;
        acc.influence += rec.influence_index;
        acc.total += rec.amount_usd;
        acc.deals += 1;
    }

    let mut stats: Vec<InvestorStats> = groups
        .into_iter()
        .map(|(investors, acc)| InvestorStats {
            investors,
            avg_power_score: acc.power / acc.deals as f64,
            avg_influence: acc.influence / acc.deals as f64,
            total_invested: acc.total,
            deals: acc.deals,
        })
        .collect();
    stats.sort_by(|a, b| b.avg_power_score.total_cmp(&a.avg_power_score));
    stats
}

/// Everything the startup page shows for one company.
#[derive(Debug, Clone, PartialEq)]
pub struct StartupProfile {
    /// This startup's records, most recent first.
    pub rounds: Vec<FundingRecord>,
    pub total_raised: f64,
    pub largest_round: f64,
    /// Distinct named investors across all rounds (undisclosed excluded).
    pub investors: Vec<String>,
}

/// Exact-match lookup by startup name. `None` when nothing matches.
pub fn startup_profile(records: &[FundingRecord], name: &str) -> Option<StartupProfile> {
    let mut rounds: Vec<FundingRecord> = records
        .iter()
        .filter(|r| r.startup == name)
        .cloned()
        .collect();
    if rounds.is_empty() {
        return None;
    }
    rounds.sort_by(|a, b| b.date.cmp(&a.date));

    let total_raised = rounds.iter().map(|r| r.amount_usd).sum();
    let largest_round = rounds.iter().map(|r| r.amount_usd).fold(0.0, f64::max);

    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut investors = Vec::new();
    for rec in &rounds {
        for inv in rec.investor_names() {
            if inv.eq_ignore_ascii_case("undisclosed") {
                continue;
            }
            if seen.insert(inv.to_string()) {
                investors.push(inv.to_string());
            }
        }
    }

    Some(StartupProfile {
        rounds,
        total_raised,
        largest_round,
        investors,
    })
}

/// Everything the investor page shows for one investor.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestorProfile {
    /// All deals whose investor list mentions the name, in table order.
    pub deals: Vec<FundingRecord>,
    pub total_deployed: f64,
    pub largest_deal: f64,
    /// Distinct portfolio companies.
    pub portfolio: usize,
    pub industries: usize,
    pub avg_power_score: f64,
    pub avg_influence: f64,
    pub avg_final_rank: f64,
}

/// Case-insensitive substring match against the raw investors field, so
/// co-investment rows count toward the profile. `None` when nothing
/// matches.
pub fn investor_profile(records: &[FundingRecord], name: &str) -> Option<InvestorProfile> {
    let needle = name.to_lowercase();
    let deals: Vec<FundingRecord> = records
        .iter()
        .filter(|r| r.investors.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    if deals.is_empty() {
        return None;
    }

    let n = deals.len() as f64;
    let total_deployed = deals.iter().map(|r| r.amount_usd).sum();
    let largest_deal = deals.iter().map(|r| r.amount_usd).fold(0.0, f64::max);
    let portfolio = deals
        .iter()
        .map(|r| r.startup.as_str())
        .collect::<BTreeSet<_>>()
        .len();
    let industries = deals
        .iter()
        .map(|r| r.industry.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    Some(InvestorProfile {
        avg_power_score: deals.iter().map(|r| r.power_score).sum::<f64>() / n,
        avg_influence: deals.iter().map(|r| r.influence_index).sum::<f64>() / n,
        avg_final_rank: deals.iter().map(|r| r.final_rank).sum::<f64>() / n,
        deals,
        total_deployed,
        largest_deal,
        portfolio,
        industries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{FundingCategory, FundingRound};

    fn record(date: (i32, u32, u32), startup: &str, amount: f64) -> FundingRecord {
        let date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        let (year, month, month_name, year_month) = FundingRecord::derive_date_fields(date);
        FundingRecord {
            date,
            year,
            month,
            month_name,
            year_month,
            amount_usd: amount,
            startup: startup.into(),
            industry: "FinTech".into(),
            sub_vertical: "N/A".into(),
            city: "Pune".into(),
            investors: "Accel".into(),
            investment_type: "Seed Funding".into(),
            funding_category: FundingCategory::Small,
            funding_round: FundingRound::Seed,
            power_score: 0.5,
            influence_index: 0.25,
            final_rank: 10.0,
        }
    }

    /// The three-record scenario: blank amount floors to 0 and group sums
    /// still cover every row.
    #[test]
    fn sum_by_group_with_floored_amount() {
        let records = vec![
            record((2023, 1, 15), "Acme", 500_000.0),
            record((2023, 1, 20), "Beta", 0.0),
            record((2023, 2, 1), "Acme", 2_000_000.0),
        ];
        let sums = sum_by_group(&records, |r| r.startup.clone(), |r| r.amount_usd);
        assert_eq!(
            sums,
            vec![("Acme".to_string(), 2_500_000.0), ("Beta".to_string(), 0.0)]
        );
    }

    #[test]
    fn group_sums_conserve_the_total() {
        let records = vec![
            record((2023, 1, 15), "Acme", 500_000.0),
            record((2023, 1, 20), "Beta", 125.5),
            record((2023, 2, 1), "Acme", 2_000_000.0),
            record((2024, 3, 9), "Gamma", 0.0),
        ];
        let table_total: f64 = records.iter().map(|r| r.amount_usd).sum();
        let group_total: f64 = sum_by_group(&records, |r| r.startup.clone(), |r| r.amount_usd)
            .iter()
            .map(|(_, v)| v)
            .sum();
        assert_eq!(group_total, table_total);
    }

    #[test]
    fn count_by_group_sorts_descending() {
        let records = vec![
            record((2023, 1, 1), "Acme", 1.0),
            record((2023, 1, 2), "Beta", 1.0),
            record((2023, 1, 3), "Acme", 1.0),
        ];
        let counts = count_by_group(&records, |r| r.startup.clone());
        assert_eq!(
            counts,
            vec![("Acme".to_string(), 2), ("Beta".to_string(), 1)]
        );
    }

    #[test]
    fn top_n_breaks_ties_by_row_order() {
        let records = vec![
            record((2023, 1, 1), "A", 100.0),
            record((2023, 1, 2), "B", 300.0),
            record((2023, 1, 3), "C", 100.0),
        ];
        let top = top_n(&records, 2, |r| r.amount_usd);
        assert_eq!(top[0].startup, "B");
        assert_eq!(top[1].startup, "A"); // ties with C, A came first

        // n past the end returns everything
        assert_eq!(top_n(&records, 10, |r| r.amount_usd).len(), 3);
    }

    #[test]
    fn yearly_rollup_counts_distinct_startups() {
        let records = vec![
            record((2022, 3, 1), "Acme", 100.0),
            record((2022, 7, 1), "Acme", 300.0),
            record((2023, 1, 1), "Beta", 50.0),
        ];
        let rollup = yearly_rollup(&records);
        assert_eq!(rollup.len(), 2);
        assert_eq!(rollup[0].year, 2022);
        assert_eq!(rollup[0].total, 400.0);
        assert_eq!(rollup[0].deals, 2);
        assert_eq!(rollup[0].avg_deal, 200.0);
        assert_eq!(rollup[0].startups, 1);
        assert_eq!(rollup[1].startups, 1);
    }

    #[test]
    fn monthly_rollup_cumulative_is_monotone() {
        let records = vec![
            record((2023, 3, 10), "A", 50.0),
            record((2023, 1, 15), "B", 500.0),
            record((2023, 1, 20), "C", 0.0),
            record((2023, 2, 1), "D", 200.0),
        ];
        let rollup = monthly_rollup(&records);
        assert_eq!(rollup.len(), 3);
        assert_eq!(rollup[0].month, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(rollup[0].total, 500.0);
        assert_eq!(rollup.last().unwrap().cumulative, 750.0);
        for pair in rollup.windows(2) {
            assert!(pair[1].cumulative >= pair[0].cumulative);
            assert!(pair[1].month > pair[0].month);
        }
    }

    #[test]
    fn monthly_pattern_is_in_calendar_order() {
        let records = vec![
            record((2022, 12, 1), "A", 10.0),
            record((2023, 1, 1), "B", 20.0),
            record((2022, 12, 25), "C", 5.0),
        ];
        let pattern = monthly_pattern(&records);
        assert_eq!(pattern, vec![("Jan", 20.0), ("Dec", 15.0)]);
    }

    #[test]
    fn pivot_fills_missing_cells_with_zero() {
        let records = vec![
            record((2022, 1, 10), "A", 100.0),
            record((2023, 2, 10), "B", 200.0),
            record((2023, 1, 5), "C", 50.0),
        ];
        let heatmap = monthly_heatmap(&records);
        assert_eq!(heatmap.rows, vec![1, 2]);
        assert_eq!(heatmap.cols, vec![2022, 2023]);
        assert_eq!(heatmap.get(&1, &2022), 100.0);
        assert_eq!(heatmap.get(&1, &2023), 50.0);
        assert_eq!(heatmap.get(&2, &2022), 0.0); // missing combination
        assert_eq!(heatmap.get(&2, &2023), 200.0);
        assert_eq!(heatmap.get(&7, &2023), 0.0); // absent key
    }

    #[test]
    fn explode_trims_and_strips_quotes() {
        let mut rec = record((2023, 1, 1), "Acme", 1.0);
        rec.investors = r#" Sequoia Capital , "Accel" ,, Blume"#.to_string();
        let records = vec![rec];
        let pairs = explode_delimited(&records, |r| r.investors.as_str(), ',');
        assert_eq!(
            pairs,
            vec![
                (0, "Sequoia Capital".to_string()),
                (0, "Accel".to_string()),
                (0, "Blume".to_string()),
            ]
        );
    }

    #[test]
    fn log_scale_excludes_zero_amounts() {
        let records = vec![
            record((2023, 1, 1), "A", 1000.0),
            record((2023, 1, 2), "B", 0.0),
            record((2023, 1, 3), "C", 10.0),
        ];
        assert_eq!(log10_amounts(&records), vec![3.0, 1.0]);
    }

    #[test]
    fn summarize_reports_period_and_distinct_counts() {
        let records = vec![
            record((2022, 5, 1), "Acme", 100.0),
            record((2023, 2, 10), "Beta", 200.0),
        ];
        let summary = summarize(&records);
        assert_eq!(
            summary.period,
            Some((
                NaiveDate::from_ymd_opt(2022, 5, 1).unwrap(),
                NaiveDate::from_ymd_opt(2023, 2, 10).unwrap()
            ))
        );
        assert_eq!(summary.total_funding, 300.0);
        assert_eq!(summary.startups, 2);
        assert_eq!(summary.industries, 1);

        assert_eq!(summarize(&[]).period, None);
    }

    #[test]
    fn investor_rollup_excludes_undisclosed() {
        let mut a = record((2023, 1, 1), "Acme", 100.0);
        a.investors = "Accel".into();
        a.power_score = 0.8;
        let mut b = record((2023, 2, 1), "Beta", 50.0);
        b.investors = "Undisclosed".into();
        let mut c = record((2023, 3, 1), "Gamma", 300.0);
        c.investors = "Accel".into();
        c.power_score = 0.6;

        let stats = investor_rollup(&[a, b, c]);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].investors, "Accel");
        assert_eq!(stats[0].deals, 2);
        assert_eq!(stats[0].total_invested, 400.0);
        assert!((stats[0].avg_power_score - 0.7).abs() < 1e-12);
    }

    #[test]
    fn startup_profile_sorts_rounds_latest_first() {
        let records = vec![
            record((2022, 1, 1), "Acme", 100.0),
            record((2023, 6, 1), "Acme", 900.0),
            record((2023, 1, 1), "Beta", 50.0),
        ];
        let profile = startup_profile(&records, "Acme").unwrap();
        assert_eq!(profile.rounds.len(), 2);
        assert_eq!(profile.rounds[0].year, 2023);
        assert_eq!(profile.total_raised, 1000.0);
        assert_eq!(profile.largest_round, 900.0);
        assert_eq!(profile.investors, vec!["Accel".to_string()]);

        assert!(startup_profile(&records, "Nope").is_none());
    }

    #[test]
    fn investor_profile_matches_case_insensitively() {
        let mut a = record((2023, 1, 1), "Acme", 100.0);
        a.investors = "Sequoia Capital, Accel".into();
        let mut b = record((2023, 2, 1), "Beta", 200.0);
        b.investors = "ACCEL Partners".into();

        let profile = investor_profile(&[a, b], "accel").unwrap();
        assert_eq!(profile.deals.len(), 2);
        assert_eq!(profile.total_deployed, 300.0);
        assert_eq!(profile.largest_deal, 200.0);
        assert_eq!(profile.portfolio, 2);
    }

    #[test]
    fn search_is_a_case_insensitive_contains() {
        let names = vec![
            "Sequoia Capital".to_string(),
            "Accel".to_string(),
            "Blume Ventures".to_string(),
        ];
        assert_eq!(search(&names, "cap"), vec!["Sequoia Capital"]);
        assert_eq!(search(&names, ""), vec!["Sequoia Capital", "Accel", "Blume Ventures"]);
        assert!(search(&names, "zzz").is_empty());
    }
}
