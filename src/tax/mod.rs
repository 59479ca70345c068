pub mod assessment;
pub mod income;
pub mod india;
pub mod regime;

pub use assessment::{assess, compare, Assessment};
pub use india::{AgeCategory, Regime, ResidencyStatus, SlabTable};
pub use regime::{compute_new_tax, compute_old_tax, BreakdownEntry, TaxResult};
