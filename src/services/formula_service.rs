//! Pure helpers the champion pages call while rendering.

use crate::error::FormulaError;

const BASE_ATTACK_SPEED: f64 = 0.625;
const PRECISION: f64 = 1000.0;
const TRUNCATED_LEN: usize = 5;

pub fn add(a: usize, b: usize) -> usize {
    a + b
}

/// `0.625 / (floor((1 - x) * 1000) / 1000)`, computed from the single
/// precision value the provider ships and narrowed back to single precision.
fn attack_speed(input: f64) -> Result<f32, FormulaError> {
    let x = input as f32 as f64;
    let denominator = ((1.0 - x) * PRECISION).floor();
    if denominator == 0.0 {
        return Err(FormulaError::ZeroDenominator(input));
    }
    let value = BASE_ATTACK_SPEED / (denominator / PRECISION);
    if !value.is_finite() {
        return Err(FormulaError::NonFinite(input));
    }
    Ok(value as f32)
}

/// Level-one attack speed from the provider's attack speed offset, cut to
/// five characters (`0.6287...` shows as `0.628`, never rounded up).
pub fn attack_speed_at_level_zero(offset: f64) -> Result<String, FormulaError> {
    let formatted = attack_speed(offset)?.to_string();
    Ok(formatted.chars().take(TRUNCATED_LEN).collect())
}

/// Same formula applied to the per-level growth figure, at full precision.
pub fn attack_speed_growth_per_level(per_level: f64) -> Result<String, FormulaError> {
    Ok(attack_speed(per_level)?.to_string())
}

/// URL path segment for a display name: `Twisted Fate` -> `Twisted_Fate`.
pub fn space_to_underscore(text: &str) -> String {
    text.replace(' ', "_")
}

/// Inverse of [`space_to_underscore`].
pub fn underscore_to_space(text: &str) -> String {
    text.replace('_', " ")
}
