//! Slab-wise tax computation shared by both regimes.
//!
//! Both calculators run the same walk over a statically defined slab table;
//! only the table selection and the Sec 87A rebate parameters differ.

use crate::tax::india::{
    AgeCategory, Rebate, ResidencyStatus, SlabTable, NEW_REGIME_REBATE, OLD_REGIME_REBATE,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// One line of the slab-wise breakdown, in computation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BreakdownEntry {
    /// Tax charged within one slab, over the inclusive income range
    Slab {
        from: Decimal,
        to: Decimal,
        rate_pct: Decimal,
        tax: Decimal,
    },
    /// Sec 87A rebate subtracted after the slab walk
    Rebate { amount: Decimal },
}

/// Tax for one regime before the capital-gains addition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxResult {
    pub total_tax: Decimal,
    pub breakdown: Vec<BreakdownEntry>,
}

/// Old-regime tax: age/residency-dependent table, rebate up to 12,500
/// for residents with taxable income up to 5,00,000
pub fn compute_old_tax(
    income: Decimal,
    age: AgeCategory,
    residency: ResidencyStatus,
) -> TaxResult {
    let table = SlabTable::old_regime(age, residency);
    let mut result = walk_slabs(income, table);
    apply_rebate(&mut result, income, residency, &OLD_REGIME_REBATE);
    result
}

/// New-regime tax: one table for all ages, rebate up to 25,000
/// for residents with taxable income up to 7,00,000
pub fn compute_new_tax(income: Decimal, residency: ResidencyStatus) -> TaxResult {
    let mut result = walk_slabs(income, SlabTable::new_regime());
    apply_rebate(&mut result, income, residency, &NEW_REGIME_REBATE);
    result
}

/// Walk the slab sequence from the base exemption upwards, taxing the part
/// of `income` that falls in each slab at that slab's marginal rate
fn walk_slabs(income: Decimal, table: &SlabTable) -> TaxResult {
    let mut total_tax = Decimal::ZERO;
    let mut breakdown = Vec::new();
    let mut limit = table.base_exemption;

    for slab in table.slabs {
        if income <= limit {
            break;
        }
        let remaining = income - limit;
        let taxable = match slab.width {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        let tax = taxable * slab.rate;
        total_tax += tax;

        log::debug!(
            "slab above {}: taxable={} at {} -> {}",
            limit,
            taxable,
            slab.rate,
            tax
        );

        breakdown.push(BreakdownEntry::Slab {
            from: limit + Decimal::ONE,
            to: slab.width.map_or(income, |width| limit + width),
            rate_pct: slab.rate * dec!(100),
            tax,
        });

        limit += slab.width.unwrap_or(remaining);
    }

    TaxResult {
        total_tax,
        breakdown,
    }
}

/// Apply the Sec 87A rebate when the taxpayer is a resident, taxable income
/// is within the ceiling, and there is slab tax to rebate
fn apply_rebate(
    result: &mut TaxResult,
    income: Decimal,
    residency: ResidencyStatus,
    rebate: &Rebate,
) {
    if !residency.is_resident() || income > rebate.income_ceiling {
        return;
    }
    if result.total_tax <= Decimal::ZERO {
        return;
    }
    let amount = rebate.cap.min(result.total_tax);
    result.total_tax -= amount;
    result.breakdown.push(BreakdownEntry::Rebate { amount });
    log::debug!("87A rebate: {} (income {})", amount, income);
}
