//! Cost aggregation for the budget view

use serde::Serialize;
use std::collections::BTreeMap;

use super::grouping::MonthKey;
use crate::data_fetcher::models::EventRecord;

/// One budget table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetLine {
    pub name: String,
    pub date: Option<String>,
    pub place: Option<String>,
    pub payment_deadline: Option<String>,
    pub payee: Option<String>,
    pub cost: f64,
}

/// Cost subtotal of one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthCost {
    pub key: MonthKey,
    pub year: Option<String>,
    pub month_name: Option<String>,
    pub total: f64,
    pub lines: Vec<BudgetLine>,
}

/// Per-month subtotals and the grand total of a set of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub months: Vec<MonthCost>,
    pub total: f64,
}

/// Parses a free-text cost cell such as `"1 234,50 kr"`.
///
/// All whitespace and the first `kr` are removed and the first comma becomes a
/// decimal point. The longest leading number is then used, so `"150:-"`
/// gives 150. Empty or non-numeric text gives 0.
pub fn parse_cost(value: &str) -> f64 {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized = compact.replacen("kr", "", 1).replacen(',', ".", 1);

    leading_number(&normalized)
        .and_then(|number| number.parse::<f64>().ok())
        .filter(|cost| cost.is_finite())
        .unwrap_or(0.0)
}

/// Longest prefix of `text` that forms a decimal number with optional sign,
/// fraction and exponent.
fn leading_number(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    Some(&text[..end])
}

/// Sums the cost of every record, per `(year, month_number)` bucket and overall.
///
/// Months are ordered like [`group_by_month`](super::grouping::group_by_month);
/// rows keep their input order within a month.
pub fn aggregate_cost(records: &[EventRecord]) -> BudgetSummary {
    let mut months: BTreeMap<MonthKey, MonthCost> = BTreeMap::new();
    let mut total = 0.0;

    for record in records {
        let cost = record.cost.as_deref().map(parse_cost).unwrap_or(0.0);
        let key = MonthKey::for_record(record);

        let month = months.entry(key.clone()).or_insert_with(|| MonthCost {
            key,
            year: record.year.clone(),
            month_name: record.month_name.clone(),
            total: 0.0,
            lines: Vec::new(),
        });
        month.total += cost;
        month.lines.push(BudgetLine {
            name: record.display_name().to_string(),
            date: record.date_from.clone(),
            place: record.place.clone(),
            payment_deadline: record.payment_deadline.clone(),
            payee: record.payee.clone(),
            cost,
        });

        total += cost;
    }

    BudgetSummary {
        months: months.into_values().collect(),
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_parse_cost_examples() {
        assert_eq!(parse_cost("150 kr"), 150.0);
        assert_eq!(parse_cost("1 234,50 kr"), 1234.5);
        assert_eq!(parse_cost(""), 0.0);
        assert_eq!(parse_cost("abc"), 0.0);
    }

    #[test]
    fn test_parse_cost_variants() {
        assert_eq!(parse_cost("1\u{a0}200 kr"), 1200.0);
        assert_eq!(parse_cost("kr 300"), 300.0);
        assert_eq!(parse_cost("150:-"), 150.0);
        assert_eq!(parse_cost("99.5"), 99.5);
        assert_eq!(parse_cost(",5"), 0.5);
        assert_eq!(parse_cost("-"), 0.0);
        assert_eq!(parse_cost("Gratis"), 0.0);
    }

    #[test]
    fn test_aggregate_cost_totals() {
        let records = vec![
            TestDataBuilder::event("A", "2024-2025", "2024-09-01").with_cost("150 kr").build(),
            TestDataBuilder::event("B", "2024-2025", "2024-09-20").with_cost("1 234,50 kr").build(),
            TestDataBuilder::event("C", "2024-2025", "2024-10-05").with_cost("").build(),
            TestDataBuilder::event("D", "2024-2025", "2024-10-06").with_cost("abc").build(),
        ];
        let summary = aggregate_cost(&records);
        assert_eq!(summary.total, 150.0 + 1234.5);
        assert_eq!(summary.months.len(), 2);
        assert_eq!(summary.months[0].key.sort_key().as_deref(), Some("2024-09"));
        assert_eq!(summary.months[0].total, 1384.5);
        assert_eq!(summary.months[0].lines.len(), 2);
        assert_eq!(summary.months[1].total, 0.0);
        assert_eq!(summary.months[1].lines[1].name, "D");
    }

    #[test]
    fn test_aggregate_cost_unknown_month() {
        let records = vec![
            TestDataBuilder::event("Utan månad", "2024-2025", "2024-09-01")
                .without_month()
                .with_cost("200 kr")
                .build(),
        ];
        let summary = aggregate_cost(&records);
        assert_eq!(summary.months[0].key, MonthKey::Unknown);
        assert_eq!(summary.total, 200.0);
    }

    #[test]
    fn test_aggregate_cost_empty() {
        let summary = aggregate_cost(&[]);
        assert!(summary.months.is_empty());
        assert_eq!(summary.total, 0.0);
    }
}
