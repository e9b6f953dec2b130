// src/client/price_range.rs

use crate::validation::primitives::PRICE_CEILING;

/// Price slider helper: clamps both handles to `[0, PRICE_CEILING]` and
/// swaps them when dragged past each other.
///
/// The price schema never does this; it rejects reversed bounds.
pub fn order_price_range(min: f64, max: f64) -> (f64, f64) {
    let clamp = |value: f64| {
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, PRICE_CEILING)
        }
    };

    let (min, max) = (clamp(min), clamp(max));
    if min > max { (max, min) } else { (min, max) }
}
