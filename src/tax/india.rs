use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Residency status under the Income Tax Act
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum ResidencyStatus {
    #[default]
    Resident,
    NonResident,
    /// Resident but Not Ordinarily Resident
    #[serde(rename = "RNOR")]
    Rnor,
}

impl ResidencyStatus {
    /// Rebates and senior slab tables apply to residents only
    pub fn is_resident(&self) -> bool {
        matches!(self, ResidencyStatus::Resident)
    }

    pub fn display(&self) -> &'static str {
        match self {
            ResidencyStatus::Resident => "Resident",
            ResidencyStatus::NonResident => "Non-Resident",
            ResidencyStatus::Rnor => "RNOR",
        }
    }
}

impl std::fmt::Display for ResidencyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Age category for old-regime slab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum AgeCategory {
    #[default]
    Below60,
    /// Senior citizen (60-80)
    Senior,
    /// Super senior citizen (80+)
    SuperSenior,
}

impl AgeCategory {
    pub fn display(&self) -> &'static str {
        match self {
            AgeCategory::Below60 => "Below 60",
            AgeCategory::Senior => "Senior (60-80)",
            AgeCategory::SuperSenior => "Super Senior (80+)",
        }
    }
}

impl std::fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// The two mutually exclusive computation schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    Old,
    New,
}

impl Regime {
    pub fn display(&self) -> &'static str {
        match self {
            Regime::Old => "Old Regime",
            Regime::New => "New Regime",
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// One slab: bracket width above the running limit and its marginal rate.
/// `width == None` marks the final unbounded slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slab {
    pub width: Option<Decimal>,
    pub rate: Decimal,
}

/// Ordered slab sequence starting above the base exemption.
/// Slabs are contiguous and rates are non-decreasing; the unbounded slab is last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlabTable {
    pub base_exemption: Decimal,
    pub slabs: &'static [Slab],
}

static OLD_BELOW_60: SlabTable = SlabTable {
    base_exemption: dec!(250_000),
    slabs: &[
        Slab {
            width: Some(dec!(250_000)),
            rate: dec!(0.05),
        },
        Slab {
            width: Some(dec!(500_000)),
            rate: dec!(0.20),
        },
        Slab {
            width: None,
            rate: dec!(0.30),
        },
    ],
};

static OLD_SENIOR: SlabTable = SlabTable {
    base_exemption: dec!(300_000),
    slabs: &[
        Slab {
            width: Some(dec!(200_000)),
            rate: dec!(0.05),
        },
        Slab {
            width: Some(dec!(500_000)),
            rate: dec!(0.20),
        },
        Slab {
            width: None,
            rate: dec!(0.30),
        },
    ],
};

static OLD_SUPER_SENIOR: SlabTable = SlabTable {
    base_exemption: dec!(500_000),
    slabs: &[
        Slab {
            width: Some(dec!(500_000)),
            rate: dec!(0.20),
        },
        Slab {
            width: None,
            rate: dec!(0.30),
        },
    ],
};

static NEW_REGIME: SlabTable = SlabTable {
    base_exemption: dec!(300_000),
    slabs: &[
        Slab {
            width: Some(dec!(300_000)),
            rate: dec!(0.05),
        },
        Slab {
            width: Some(dec!(400_000)),
            rate: dec!(0.10),
        },
        Slab {
            width: Some(dec!(300_000)),
            rate: dec!(0.15),
        },
        Slab {
            width: Some(dec!(300_000)),
            rate: dec!(0.20),
        },
        Slab {
            width: None,
            rate: dec!(0.30),
        },
    ],
};

impl SlabTable {
    /// Old-regime table for the taxpayer. Higher exemptions for seniors apply
    /// to resident individuals only; non-residents and RNOR use the Below-60
    /// table regardless of age.
    pub fn old_regime(age: AgeCategory, residency: ResidencyStatus) -> &'static SlabTable {
        if !residency.is_resident() {
            return &OLD_BELOW_60;
        }
        match age {
            AgeCategory::Below60 => &OLD_BELOW_60,
            AgeCategory::Senior => &OLD_SENIOR,
            AgeCategory::SuperSenior => &OLD_SUPER_SENIOR,
        }
    }

    /// New-regime table, identical for all ages
    pub fn new_regime() -> &'static SlabTable {
        &NEW_REGIME
    }
}

/// Section 87A rebate parameters for one regime
#[derive(Debug, Clone, Copy)]
pub struct Rebate {
    /// Taxable income ceiling for eligibility
    pub income_ceiling: Decimal,
    /// Maximum rebate amount
    pub cap: Decimal,
}

pub const OLD_REGIME_REBATE: Rebate = Rebate {
    income_ceiling: dec!(500_000),
    cap: dec!(12_500),
};

pub const NEW_REGIME_REBATE: Rebate = Rebate {
    income_ceiling: dec!(700_000),
    cap: dec!(25_000),
};

/// Standard deduction against salary, old regime
pub const STANDARD_DEDUCTION_OLD: Decimal = dec!(50_000);

/// Standard deduction against salary, new regime
pub const STANDARD_DEDUCTION_NEW: Decimal = dec!(75_000);

/// Section 80C investment cap (old regime only)
pub const CAP_80C: Decimal = dec!(150_000);

/// Flat exemption on long-term capital gains (Sec 112A)
pub const LTCG_EXEMPTION: Decimal = dec!(100_000);

/// Flat rate on short-term capital gains (Sec 111A)
pub const STCG_RATE: Decimal = dec!(0.15);

/// Flat rate on taxable long-term capital gains (Sec 112A)
pub const LTCG_RATE: Decimal = dec!(0.10);

/// Statutory deduction on net annual value of house property
pub const HOUSE_PROPERTY_DEDUCTION_RATE: Decimal = dec!(0.30);
