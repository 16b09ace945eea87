//! Physical constants of the warm-water formula (HeizKV).

use rust_decimal::Decimal;

/// Specific heat factor in kWh/m³/K.
pub const SPECIFIC_HEAT_KWH_PER_M3_K: Decimal = Decimal::from_parts(25, 0, 0, false, 1);

/// Assumed hot-water temperature in °C.
pub const TEMP_HIGH_C: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Assumed cold-water inlet temperature in °C.
pub const TEMP_LOW_C: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Boiler efficiency divisor.
pub const BOILER_EFFICIENCY: Decimal = Decimal::from_parts(115, 0, 0, false, 2);
