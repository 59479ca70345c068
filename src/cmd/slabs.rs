//! Slabs command - display the statutory slab tables the calculators use

use crate::cmd::assess::{format_inr, format_inr_whole};
use crate::tax::india::{
    AgeCategory, Rebate, ResidencyStatus, SlabTable, NEW_REGIME_REBATE, OLD_REGIME_REBATE,
};
use crate::tax::Regime;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct SlabsCommand {
    /// Regime to display
    #[arg(short, long, value_enum, default_value_t = RegimeArg::Both)]
    regime: RegimeArg,

    /// Age category (affects the old regime only)
    #[arg(short, long, value_enum, default_value_t = AgeArg::Below60)]
    age: AgeArg,

    /// Residency status (senior tables apply to residents only)
    #[arg(long, value_enum, default_value_t = ResidencyArg::Resident)]
    residency: ResidencyArg,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum RegimeArg {
    Old,
    New,
    #[default]
    Both,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum AgeArg {
    #[default]
    Below60,
    Senior,
    SuperSenior,
}

impl From<AgeArg> for AgeCategory {
    fn from(arg: AgeArg) -> Self {
        match arg {
            AgeArg::Below60 => AgeCategory::Below60,
            AgeArg::Senior => AgeCategory::Senior,
            AgeArg::SuperSenior => AgeCategory::SuperSenior,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ResidencyArg {
    #[default]
    Resident,
    NonResident,
    Rnor,
}

impl From<ResidencyArg> for ResidencyStatus {
    fn from(arg: ResidencyArg) -> Self {
        match arg {
            ResidencyArg::Resident => ResidencyStatus::Resident,
            ResidencyArg::NonResident => ResidencyStatus::NonResident,
            ResidencyArg::Rnor => ResidencyStatus::Rnor,
        }
    }
}

impl SlabsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let age: AgeCategory = self.age.into();
        let residency: ResidencyStatus = self.residency.into();

        if matches!(self.regime, RegimeArg::Old | RegimeArg::Both) {
            let table = SlabTable::old_regime(age, residency);
            print_table(Regime::Old, &format!("{}, {}", residency, age), table);
            print_rebate(&OLD_REGIME_REBATE);
        }
        if matches!(self.regime, RegimeArg::New | RegimeArg::Both) {
            print_table(Regime::New, "all ages", SlabTable::new_regime());
            print_rebate(&NEW_REGIME_REBATE);
        }
        Ok(())
    }
}

/// Row for the slab table output
#[derive(Debug, Tabled)]
struct SlabRow {
    #[tabled(rename = "Income Range")]
    range: String,

    #[tabled(rename = "Rate")]
    rate: String,
}

fn print_table(regime: Regime, applies_to: &str, table: &SlabTable) {
    println!();
    println!("{} slabs ({})", regime, applies_to);

    let mut rows = vec![SlabRow {
        range: format!("Up to {}", format_inr_whole(table.base_exemption)),
        rate: "Nil".to_string(),
    }];

    let mut limit = table.base_exemption;
    for slab in table.slabs {
        let range = match slab.width {
            Some(width) => {
                let row = format!(
                    "{} - {}",
                    format_inr_whole(limit + Decimal::ONE),
                    format_inr_whole(limit + width)
                );
                limit += width;
                row
            }
            None => format!("Above {}", format_inr_whole(limit)),
        };
        rows.push(SlabRow {
            range,
            rate: format!("{:.0}%", slab.rate * dec!(100)),
        });
    }

    let rendered = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", rendered);
}

fn print_rebate(rebate: &Rebate) {
    println!(
        "Sec 87A rebate: up to {} when taxable income <= {} (residents only)",
        format_inr(rebate.cap),
        format_inr_whole(rebate.income_ceiling)
    );
}
