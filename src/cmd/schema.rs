//! Schema command - print the expected input format

use crate::input::{IncomeInputs, TaxReturnInput, TaxpayerProfile};
use crate::tax::india::{AgeCategory, ResidencyStatus};
use clap::Args;
use rust_decimal_macros::dec;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the input record
    JsonSchema,
    /// Per-field descriptions
    Fields,
    /// A filled example input record
    Example,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::Fields => self.print_fields(),
            SchemaFormat::Example => self.print_example(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(TaxReturnInput);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_fields(&self) -> anyhow::Result<()> {
        println!("Input Record Format (JSON)");
        println!("==========================");
        println!();
        println!("taxpayer.residency   Resident | NonResident | RNOR");
        println!("taxpayer.age         Below60 | Senior | SuperSenior");
        println!();
        println!("income fields (rupees, non-negative, default 0):");
        for field in IncomeInputs::input_fields() {
            println!("  {:18} {}", field.name, field.description);
        }
        Ok(())
    }

    fn print_example(&self) -> anyhow::Result<()> {
        let example = TaxReturnInput {
            taxpayer: TaxpayerProfile {
                residency: ResidencyStatus::Resident,
                age: AgeCategory::Below60,
            },
            income: IncomeInputs {
                salary_monthly: dec!(80_000),
                bonus: dec!(50_000),
                rent_received: dec!(240_000),
                municipal_taxes: dec!(10_000),
                loan_interest: dec!(150_000),
                stcg: dec!(20_000),
                ltcg: dec!(150_000),
                other_income: dec!(30_000),
                deduction_80c: dec!(150_000),
                deduction_80d: dec!(25_000),
                deduction_80tta: dec!(10_000),
                ..Default::default()
            },
        };
        println!("{}", serde_json::to_string_pretty(&example)?);
        Ok(())
    }
}
