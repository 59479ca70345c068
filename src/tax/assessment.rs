//! Full assessment: both regimes, the capital-gains addition, and the
//! comparison that recommends the cheaper regime.

use crate::input::TaxReturnInput;
use crate::tax::income::{aggregate, new_regime_taxable, old_regime_taxable};
use crate::tax::india::{Regime, LTCG_RATE, STCG_RATE};
use crate::tax::regime::{compute_new_tax, compute_old_tax, TaxResult};
use rust_decimal::Decimal;
use serde::Serialize;

/// Everything the presentation layer needs to display one assessment
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub gross_income: Decimal,
    pub salary_total: Decimal,
    pub net_house_property: Decimal,
    pub taxable_old: Decimal,
    pub taxable_new: Decimal,
    pub old: TaxResult,
    pub new: TaxResult,
    /// Flat-rate tax on capital gains, identical under both regimes
    pub capital_gains_tax: Decimal,
    pub final_tax_old: Decimal,
    pub final_tax_new: Decimal,
    pub cheaper_regime: Regime,
    pub savings: Decimal,
}

/// Compute tax under both regimes and pick the cheaper one.
/// Pure function of its input; nothing is persisted.
pub fn assess(input: &TaxReturnInput) -> Assessment {
    let profile = input.taxpayer;
    let gross = aggregate(&input.income);

    let taxable_old = old_regime_taxable(gross.gross_income, &input.income);
    let taxable_new = new_regime_taxable(gross.gross_income);

    let old = compute_old_tax(taxable_old, profile.age, profile.residency);
    let new = compute_new_tax(taxable_new, profile.residency);

    let capital_gains_tax = capital_gains_tax(input.income.stcg, gross.ltcg_taxable);
    let final_tax_old = old.total_tax + capital_gains_tax;
    let final_tax_new = new.total_tax + capital_gains_tax;

    let (cheaper_regime, savings) = compare(final_tax_old, final_tax_new);

    log::debug!(
        "assessment: old={}, new={}, cheaper={}, savings={}",
        final_tax_old,
        final_tax_new,
        cheaper_regime,
        savings
    );

    Assessment {
        gross_income: gross.gross_income,
        salary_total: gross.salary_total,
        net_house_property: gross.net_house_property,
        taxable_old,
        taxable_new,
        old,
        new,
        capital_gains_tax,
        final_tax_old,
        final_tax_new,
        cheaper_regime,
        savings,
    }
}

/// Flat-rate capital gains tax: 15% on STCG (Sec 111A) and 10% on LTCG
/// above the exemption (Sec 112A), added after the slab and rebate steps
pub fn capital_gains_tax(stcg: Decimal, ltcg_taxable: Decimal) -> Decimal {
    STCG_RATE * stcg + LTCG_RATE * ltcg_taxable
}

/// Pick the cheaper regime. The old regime wins only when strictly less;
/// a tie resolves to the new regime (the statutory default).
pub fn compare(final_tax_old: Decimal, final_tax_new: Decimal) -> (Regime, Decimal) {
    if final_tax_old < final_tax_new {
        (Regime::Old, final_tax_new - final_tax_old)
    } else {
        (Regime::New, final_tax_old - final_tax_new)
    }
}
