//! Assess command - compute both regimes for one input record and
//! recommend the cheaper one

use crate::cmd::read_input;
use crate::tax::{assess, Assessment, BreakdownEntry, Regime, TaxResult};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct AssessCommand {
    /// JSON file containing the tax return input (or "-" for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Output the full assessment as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// Output the slab-wise breakdown as CSV instead of formatted tables
    #[arg(long)]
    csv: bool,
}

impl AssessCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = read_input(&self.input)?;
        let assessment = assess(&input);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&assessment)?);
            Ok(())
        } else if self.csv {
            write_breakdown_csv(&assessment, io::stdout())
        } else {
            print_assessment(&input.taxpayer, &assessment);
            Ok(())
        }
    }
}

fn print_assessment(taxpayer: &crate::input::TaxpayerProfile, assessment: &Assessment) {
    println!();
    println!(
        "TAX ASSESSMENT (FY 2024-25) - {}, {}",
        taxpayer.residency, taxpayer.age
    );
    println!();

    println!("INCOME");
    println!(
        "  Salary: {} | House Property: {} | Gross: {}",
        format_inr(assessment.salary_total),
        format_inr(assessment.net_house_property),
        format_inr(assessment.gross_income)
    );
    println!(
        "  Taxable (Old): {} | Taxable (New): {}",
        format_inr(assessment.taxable_old),
        format_inr(assessment.taxable_new)
    );
    println!();

    print_breakdown(Regime::Old, &assessment.old);
    print_breakdown(Regime::New, &assessment.new);

    if assessment.capital_gains_tax > Decimal::ZERO {
        println!(
            "CAPITAL GAINS TAX (flat, both regimes): {}",
            format_inr(assessment.capital_gains_tax)
        );
        println!();
    }

    println!(
        "FINAL TAX  Old: {} | New: {}",
        format_inr(assessment.final_tax_old),
        format_inr(assessment.final_tax_new)
    );
    println!(
        "{} is cheaper. You save {}",
        assessment.cheaper_regime,
        format_inr(assessment.savings)
    );
    println!();
}

fn print_breakdown(regime: Regime, result: &TaxResult) {
    println!("{} - slab-wise tax", regime.display().to_uppercase());
    if result.breakdown.is_empty() {
        println!("  No tax due");
        println!();
        return;
    }

    let rows: Vec<BreakdownRow> = result.breakdown.iter().map(BreakdownRow::from).collect();
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
    println!("  Total: {}", format_inr(result.total_tax));
    println!();
}

/// Row for the slab-wise breakdown table
#[derive(Debug, Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Component")]
    component: String,

    #[tabled(rename = "Rate")]
    rate: String,

    #[tabled(rename = "Tax")]
    tax: String,
}

impl From<&BreakdownEntry> for BreakdownRow {
    fn from(entry: &BreakdownEntry) -> Self {
        match entry {
            BreakdownEntry::Slab {
                from,
                to,
                rate_pct,
                tax,
            } => BreakdownRow {
                component: format!("{} - {}", format_inr_whole(*from), format_inr_whole(*to)),
                rate: format!("{:.0}%", rate_pct),
                tax: format_inr(*tax),
            },
            BreakdownEntry::Rebate { amount } => BreakdownRow {
                component: "87A Rebate".to_string(),
                rate: "-".to_string(),
                tax: format!("-{}", format_inr(*amount)),
            },
        }
    }
}

/// CSV record for the breakdown output
#[derive(Debug, Serialize)]
struct BreakdownCsvRecord {
    regime: String,
    component: String,
    range_from: String,
    range_to: String,
    rate_pct: String,
    tax: String,
}

fn write_breakdown_csv<W: io::Write>(assessment: &Assessment, writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (regime, result) in [
        (Regime::Old, &assessment.old),
        (Regime::New, &assessment.new),
    ] {
        for entry in &result.breakdown {
            let record = match entry {
                BreakdownEntry::Slab {
                    from,
                    to,
                    rate_pct,
                    tax,
                } => BreakdownCsvRecord {
                    regime: regime.display().to_string(),
                    component: "Slab".to_string(),
                    range_from: from.to_string(),
                    range_to: to.to_string(),
                    rate_pct: format!("{:.0}", rate_pct),
                    tax: tax.round_dp(2).to_string(),
                },
                BreakdownEntry::Rebate { amount } => BreakdownCsvRecord {
                    regime: regime.display().to_string(),
                    component: "87A Rebate".to_string(),
                    range_from: String::new(),
                    range_to: String::new(),
                    rate_pct: String::new(),
                    tax: (-amount).round_dp(2).to_string(),
                },
            };
            wtr.serialize(record)?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Format an amount as rupees with paise and Indian digit grouping
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let text = format!("{:.2}", rounded.abs());
    let (whole, paise) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    format!("{}₹{}.{}", sign, group_indian(whole), paise)
}

/// Format a whole-rupee amount with Indian digit grouping
pub fn format_inr_whole(amount: Decimal) -> String {
    let rounded = amount.round_dp(0);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    format!("{}₹{}", sign, group_indian(&rounded.abs().to_string()))
}

/// Indian grouping: last three digits, then pairs (12,34,567)
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut parts: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        parts.push(&head[end - 2..end]);
        end -= 2;
    }
    parts.push(&head[..end]);
    parts.reverse();
    format!("{},{}", parts.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn indian_grouping() {
        assert_eq!(format_inr(dec!(0)), "₹0.00");
        assert_eq!(format_inr(dec!(999)), "₹999.00");
        assert_eq!(format_inr(dec!(1_000)), "₹1,000.00");
        assert_eq!(format_inr(dec!(100_000)), "₹1,00,000.00");
        assert_eq!(format_inr(dec!(1_234_567.5)), "₹12,34,567.50");
        assert_eq!(format_inr(dec!(-51_000)), "-₹51,000.00");
    }

    #[test]
    fn whole_rupee_grouping() {
        assert_eq!(format_inr_whole(dec!(250_001)), "₹2,50,001");
        assert_eq!(format_inr_whole(dec!(500)), "₹500");
    }

    #[test]
    fn rebate_row_shows_negative_tax() {
        let entry = BreakdownEntry::Rebate {
            amount: dec!(12_500),
        };
        let row = BreakdownRow::from(&entry);
        assert_eq!(row.component, "87A Rebate");
        assert_eq!(row.tax, "-₹12,500.00");
    }

    #[test]
    fn slab_row_formatting() {
        let entry = BreakdownEntry::Slab {
            from: dec!(250_001),
            to: dec!(500_000),
            rate_pct: dec!(5),
            tax: dec!(12_500),
        };
        let row = BreakdownRow::from(&entry);
        assert_eq!(row.component, "₹2,50,001 - ₹5,00,000");
        assert_eq!(row.rate, "5%");
        assert_eq!(row.tax, "₹12,500.00");
    }
}
