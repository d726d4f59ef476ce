//! Additive price model. Every surcharge is independent of the others.

use super::configuration::CarConfiguration;

pub const BASE_PRICE: i64 = 500_000;
pub const BUDGET_MULTIPLIER: i64 = 1_000;
pub const SMART_TECH_SURCHARGE: i64 = 20_000;
pub const RIM_SIZE_SURCHARGE: i64 = 10_000;
pub const AIRBAG_SURCHARGE: i64 = 5_000;
pub const TOW_HITCH_SURCHARGE: i64 = 15_000;
pub const ROOF_RACK_SURCHARGE: i64 = 10_000;

/// Total price of a design built from `config`.
///
/// The budget slider value contributes `budget × 1000`; an unset budget (0)
/// contributes nothing, even though the stored design shows a default label.
pub fn total_price(config: &CarConfiguration) -> i64 {
    let budget = i64::try_from(config.budget).unwrap_or(i64::MAX);
    let features = i64::try_from(config.smart_tech.len()).unwrap_or(i64::MAX);

    [
        BASE_PRICE,
        budget.saturating_mul(BUDGET_MULTIPLIER),
        features.saturating_mul(SMART_TECH_SURCHARGE),
        i64::from(config.rim_size).saturating_mul(RIM_SIZE_SURCHARGE),
        i64::from(config.airbags).saturating_mul(AIRBAG_SURCHARGE),
        if config.tow_hitch { TOW_HITCH_SURCHARGE } else { 0 },
        if config.roof_rack { ROOF_RACK_SURCHARGE } else { 0 },
    ]
    .into_iter()
    .fold(0i64, i64::saturating_add)
}
