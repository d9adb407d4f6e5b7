// 📊 Giving Report
// Per-donor totals, counts and averages rendered as a fixed-width table

use crate::ledger::{Donor, DonorLedger};
use std::fmt;

pub const REPORT_HEADER: &str = "Donor Name          | Total Given | Num Gifts | Average Gift";
pub const SEPARATOR_WIDTH: usize = 60;

const NAME_WIDTH: usize = 20;
const MONEY_WIDTH: usize = 12;
const COUNT_GAP: usize = 10;

/// One donor's summary line
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub total: f64,
    pub count: usize,
    pub average: f64,
}

impl ReportRow {
    fn from_donor(donor: &Donor) -> Self {
        ReportRow {
            name: donor.name.clone(),
            total: donor.total(),
            count: donor.gift_count(),
            average: donor.average(),
        }
    }

    /// Fixed-width line: name, " $" total, gap, count, " $" average
    pub fn render(&self) -> String {
        format!(
            "{:<name_w$} ${:>money_w$}{:gap$}{} ${:>money_w$}",
            self.name,
            format!("{:.2}", self.total),
            "",
            self.count,
            format!("{:.2}", self.average),
            name_w = NAME_WIDTH,
            money_w = MONEY_WIDTH,
            gap = COUNT_GAP,
        )
    }
}

/// Rows in ledger order, one per donor
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn row(&self, name: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.name == name)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", REPORT_HEADER)?;
        writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        for row in &self.rows {
            writeln!(f, "{}", row.render())?;
        }
        Ok(())
    }
}

pub fn build_report(ledger: &DonorLedger) -> Report {
    Report {
        rows: ledger.donors().map(ReportRow::from_donor).collect(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ledger() -> DonorLedger {
        let mut ledger = DonorLedger::new();
        ledger.record_donation("Bob", 1.0).unwrap();
        ledger.record_donation("Bob", 2.0).unwrap();
        ledger.record_donation("Jon", 1.5).unwrap();
        ledger.record_donation("Jon", 100.0).unwrap();
        ledger.record_donation("Sally", 1000.0).unwrap();
        ledger
    }

    #[test]
    fn test_row_per_donor_in_order() {
        let report = build_report(&sample_ledger());
        let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Jon", "Sally"]);
    }

    #[test]
    fn test_row_aggregates() {
        let report = build_report(&sample_ledger());
        let jon = report.row("Jon").unwrap();

        assert_eq!(format!("{:.2}", jon.total), "101.50");
        assert_eq!(jon.count, 2);
        assert_eq!(format!("{:.2}", jon.average), "50.75");
    }

    #[test]
    fn test_row_layout() {
        let row = ReportRow {
            name: "Jon".to_string(),
            total: 101.5,
            count: 2,
            average: 50.75,
        };
        let expected = format!(
            "Jon{} ${}101.50{}2 ${}50.75",
            " ".repeat(17),
            " ".repeat(6),
            " ".repeat(10),
            " ".repeat(7),
        );
        assert_eq!(row.render(), expected);
    }

    #[test]
    fn test_long_name_not_truncated() {
        let row = ReportRow {
            name: "Bartholomew Fitzgerald III".to_string(),
            total: 5.0,
            count: 1,
            average: 5.0,
        };
        assert!(row.render().starts_with("Bartholomew Fitzgerald III $"));
    }

    #[test]
    fn test_rendered_table_header() {
        let text = build_report(&sample_ledger()).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], REPORT_HEADER);
        assert_eq!(lines[1], "-".repeat(SEPARATOR_WIDTH));
        assert_eq!(lines.len(), 2 + 3);
        assert!(lines[4].starts_with("Sally"));
        assert!(lines[4].contains("1000.00"));
    }

    #[test]
    fn test_empty_ledger_renders_header_only() {
        let text = build_report(&DonorLedger::new()).to_string();
        assert_eq!(text.lines().count(), 2);
    }
}
