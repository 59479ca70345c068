//! Income aggregation across heads and regime-specific taxable income.

use crate::input::IncomeInputs;
use crate::tax::india::{
    CAP_80C, HOUSE_PROPERTY_DEDUCTION_RATE, LTCG_EXEMPTION, STANDARD_DEDUCTION_NEW,
    STANDARD_DEDUCTION_OLD,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Aggregated income before regime-specific deductions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrossIncome {
    /// Annual salary: monthly salary x 12 plus bonus
    pub salary_total: Decimal,
    /// Net income from house property after the 30% statutory deduction
    /// and loan interest. May be negative; a loss under this head offsets
    /// the other heads without a floor.
    pub net_house_property: Decimal,
    /// Salary + house property + business + other income.
    /// Capital gains are excluded; they are taxed separately at flat rates.
    pub gross_income: Decimal,
    /// Long-term capital gains above the Sec 112A flat exemption
    pub ltcg_taxable: Decimal,
}

/// Combine the income heads into gross income
pub fn aggregate(income: &IncomeInputs) -> GrossIncome {
    let salary_total = income.salary_monthly * dec!(12) + income.bonus;

    // Net annual value cannot go below zero, but the house property result
    // itself can: loan interest may exceed the rental income.
    let nav = (income.rent_received - income.municipal_taxes).max(Decimal::ZERO);
    let net_house_property = nav - HOUSE_PROPERTY_DEDUCTION_RATE * nav - income.loan_interest;

    let ltcg_taxable = (income.ltcg - LTCG_EXEMPTION).max(Decimal::ZERO);

    let gross_income =
        salary_total + net_house_property + income.business_income + income.other_income;

    log::debug!(
        "aggregate: salary={}, house={}, gross={}, ltcg_taxable={}",
        salary_total,
        net_house_property,
        gross_income,
        ltcg_taxable
    );

    GrossIncome {
        salary_total,
        net_house_property,
        gross_income,
        ltcg_taxable,
    }
}

/// Old-regime deductions: capped 80C, 80D, 80TTA and the standard deduction
pub fn old_regime_deductions(income: &IncomeInputs) -> Decimal {
    income.deduction_80c.min(CAP_80C)
        + income.deduction_80d
        + income.deduction_80tta
        + STANDARD_DEDUCTION_OLD
}

/// Taxable income under the old regime
pub fn old_regime_taxable(gross_income: Decimal, income: &IncomeInputs) -> Decimal {
    (gross_income - old_regime_deductions(income)).max(Decimal::ZERO)
}

/// Taxable income under the new regime: flat standard deduction only
pub fn new_regime_taxable(gross_income: Decimal) -> Decimal {
    (gross_income - STANDARD_DEDUCTION_NEW).max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn salaried(monthly: Decimal) -> IncomeInputs {
        IncomeInputs {
            salary_monthly: monthly,
            ..Default::default()
        }
    }

    #[test]
    fn salary_total_is_annualised_plus_bonus() {
        let income = IncomeInputs {
            salary_monthly: dec!(80_000),
            bonus: dec!(40_000),
            ..Default::default()
        };
        let gross = aggregate(&income);
        assert_eq!(gross.salary_total, dec!(1_000_000));
    }

    #[test]
    fn house_property_standard_deduction() {
        let income = IncomeInputs {
            rent_received: dec!(300_000),
            municipal_taxes: dec!(20_000),
            ..Default::default()
        };
        let gross = aggregate(&income);
        // NAV 280,000 less 30% = 196,000
        assert_eq!(gross.net_house_property, dec!(196_000));
        assert_eq!(gross.gross_income, dec!(196_000));
    }

    #[test]
    fn nav_floored_at_zero() {
        let income = IncomeInputs {
            rent_received: dec!(10_000),
            municipal_taxes: dec!(25_000),
            ..Default::default()
        };
        let gross = aggregate(&income);
        assert_eq!(gross.net_house_property, Decimal::ZERO);
    }

    #[test]
    fn house_property_loss_reduces_gross_income() {
        let income = IncomeInputs {
            salary_monthly: dec!(50_000),
            loan_interest: dec!(180_000),
            ..Default::default()
        };
        let gross = aggregate(&income);
        assert_eq!(gross.net_house_property, dec!(-180_000));
        assert_eq!(gross.gross_income, dec!(420_000));
    }

    #[test]
    fn ltcg_flat_exemption() {
        let below = IncomeInputs {
            ltcg: dec!(90_000),
            ..Default::default()
        };
        assert_eq!(aggregate(&below).ltcg_taxable, Decimal::ZERO);

        let above = IncomeInputs {
            ltcg: dec!(250_000),
            ..Default::default()
        };
        assert_eq!(aggregate(&above).ltcg_taxable, dec!(150_000));
    }

    #[test]
    fn capital_gains_excluded_from_gross_income() {
        let income = IncomeInputs {
            salary_monthly: dec!(50_000),
            stcg: dec!(100_000),
            ltcg: dec!(200_000),
            ..Default::default()
        };
        let gross = aggregate(&income);
        assert_eq!(gross.gross_income, dec!(600_000));
    }

    #[test]
    fn old_regime_caps_80c() {
        let income = IncomeInputs {
            deduction_80c: dec!(200_000),
            deduction_80d: dec!(25_000),
            deduction_80tta: dec!(10_000),
            ..Default::default()
        };
        // 150,000 capped 80C + 25,000 + 10,000 + 50,000 standard
        assert_eq!(old_regime_deductions(&income), dec!(235_000));
    }

    #[test]
    fn taxable_income_floored_at_zero() {
        let income = salaried(dec!(3_000));
        let gross = aggregate(&income);
        assert_eq!(gross.gross_income, dec!(36_000));
        assert_eq!(
            old_regime_taxable(gross.gross_income, &income),
            Decimal::ZERO
        );
        assert_eq!(new_regime_taxable(gross.gross_income), Decimal::ZERO);
    }

    #[test]
    fn example_scenario_taxable_incomes() {
        let income = salaried(dec!(80_000));
        let gross = aggregate(&income);
        assert_eq!(gross.salary_total, dec!(960_000));
        assert_eq!(
            old_regime_taxable(gross.gross_income, &income),
            dec!(910_000)
        );
        assert_eq!(new_regime_taxable(gross.gross_income), dec!(885_000));
    }
}
