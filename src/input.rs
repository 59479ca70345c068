//! Validated input record supplied by the presentation boundary.
//!
//! The core calculators assume every monetary field is non-negative; that
//! invariant is enforced here, before any computation runs.

use crate::tax::{AgeCategory, ResidencyStatus};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use taxin_derive::InputSchema;

/// Documentation for one input field, emitted by the `InputSchema` derive
pub struct InputField {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: &'static str, value: Decimal },
}

/// Complete input for one assessment: who the taxpayer is, plus income and
/// deduction amounts for the year
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TaxReturnInput {
    #[serde(default)]
    pub taxpayer: TaxpayerProfile,
    #[serde(default)]
    pub income: IncomeInputs,
}

/// Demographic attributes that drive slab selection and rebate eligibility
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema)]
pub struct TaxpayerProfile {
    #[serde(default)]
    pub residency: ResidencyStatus,
    #[serde(default)]
    pub age: AgeCategory,
}

/// Annual income and deduction amounts in rupees.
/// Every field defaults to zero and must be non-negative.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, InputSchema)]
#[serde(default, deny_unknown_fields)]
pub struct IncomeInputs {
    /// Monthly salary (basic + DA)
    pub salary_monthly: Decimal,
    /// Annual bonus
    pub bonus: Decimal,
    /// Annual rent received from house property
    pub rent_received: Decimal,
    /// Municipal taxes paid on house property
    pub municipal_taxes: Decimal,
    /// Home loan interest paid
    pub loan_interest: Decimal,
    /// Net business or professional income
    pub business_income: Decimal,
    /// Short-term capital gains (Sec 111A)
    pub stcg: Decimal,
    /// Long-term capital gains (Sec 112A)
    pub ltcg: Decimal,
    /// Other income: FD and savings interest, dividends
    pub other_income: Decimal,
    /// Section 80C investments
    pub deduction_80c: Decimal,
    /// Section 80D medical insurance premiums
    pub deduction_80d: Decimal,
    /// Section 80TTA/TTB savings interest deduction
    pub deduction_80tta: Decimal,
}

impl IncomeInputs {
    /// Reject negative entries. The calculators never re-check.
    pub fn validate(&self) -> Result<(), InputError> {
        for (name, value) in self.amounts() {
            if value < Decimal::ZERO {
                return Err(InputError::NegativeAmount { field: name, value });
            }
        }
        Ok(())
    }

    fn amounts(&self) -> [(&'static str, Decimal); 12] {
        [
            ("salary_monthly", self.salary_monthly),
            ("bonus", self.bonus),
            ("rent_received", self.rent_received),
            ("municipal_taxes", self.municipal_taxes),
            ("loan_interest", self.loan_interest),
            ("business_income", self.business_income),
            ("stcg", self.stcg),
            ("ltcg", self.ltcg),
            ("other_income", self.other_income),
            ("deduction_80c", self.deduction_80c),
            ("deduction_80d", self.deduction_80d),
            ("deduction_80tta", self.deduction_80tta),
        ]
    }
}
