use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

/// Headroom added above the data maximum by the smart axis, as a fraction of
/// the maximum's magnitude.
pub const SMART_AXIS_HEADROOM_RATIO: f64 = 0.10;

/// Below this magnitude the decimal conversion loses the value entirely.
const DECIMAL_MIN_MAGNITUDE: f64 = 1e-15;

/// Adds 10% headroom to `value` and rounds the result up to a whole unit.
///
/// The unit is `1` for magnitudes of at least one and the leading decimal
/// place below that (`0.33 -> 0.4`). Arithmetic runs in decimal so that
/// `30 -> 33`, `4 -> 5` and `50 -> 55` hold exactly; binary floats would turn
/// `50 * 1.1` into `55.00000000000001` and round it up to `56`.
///
/// Non-finite input is returned unchanged.
#[must_use]
pub fn nice_round_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    if value != 0.0 && value.abs() < DECIMAL_MIN_MAGNITUDE {
        return nice_round_up_float(value);
    }
    nice_round_up_decimal(value).unwrap_or_else(|| nice_round_up_float(value))
}

fn nice_round_up_decimal(value: f64) -> Option<f64> {
    let value = Decimal::from_f64(value)?;
    let ratio = Decimal::new(1, 1);
    let padded = value.checked_add(value.abs().checked_mul(ratio)?)?;
    if padded.is_zero() {
        return Some(0.0);
    }

    let magnitude = padded.abs();
    let rounded = if magnitude >= Decimal::ONE {
        padded.ceil()
    } else {
        let unit = Decimal::new(1, leading_decimal_place(magnitude.to_f64()?)?);
        padded.checked_div(unit)?.ceil().checked_mul(unit)?
    };
    rounded.to_f64()
}

/// Number of decimal places of the leading significant digit of `magnitude`
/// (which must lie in `(0, 1)`): `0.45 -> 1`, `0.033 -> 2`.
fn leading_decimal_place(magnitude: f64) -> Option<u32> {
    let exponent = magnitude.log10().floor();
    if !exponent.is_finite() || exponent >= 0.0 {
        return None;
    }
    let places = -exponent;
    // Decimal carries at most 28 fractional digits.
    if places > 28.0 {
        return None;
    }
    Some(places as u32)
}

fn nice_round_up_float(value: f64) -> f64 {
    let padded = value + value.abs() * SMART_AXIS_HEADROOM_RATIO;
    if padded.abs() >= 1.0 || padded == 0.0 {
        return padded.ceil();
    }
    let unit = 10_f64.powf(padded.abs().log10().floor());
    (padded / unit).ceil() * unit
}

/// Picks a round tick step (`1`, `2`, `5` or `10` times a power of ten) so that
/// roughly `count_hint` ticks cover `span`.
///
/// The base step is the power of ten just below `span / count_hint`; it is
/// then widened while the resulting tick density stays too high.
#[must_use]
pub fn tick_increment(span: f64, count_hint: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 || count_hint == 0 {
        return 0.0;
    }

    let count = count_hint as f64;
    let mut step = 10_f64.powf((span / count).log10().floor());
    let density = count / span * step;
    if density <= 0.15 {
        step *= 10.0;
    } else if density <= 0.35 {
        step *= 5.0;
    } else if density <= 0.75 {
        step *= 2.0;
    }
    step
}

/// Decimal places needed to print multiples of `step` without float noise.
#[must_use]
pub fn step_precision(step: f64) -> u32 {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        return 0;
    }
    let places = -(step.log10().floor());
    places.clamp(0.0, 17.0) as u32
}

/// Rounds `value` to `places` decimals.
#[must_use]
pub fn round_to_places(value: f64, places: u32) -> f64 {
    if places == 0 {
        return value.round();
    }
    let factor = 10_f64.powi(places as i32);
    (value * factor).round() / factor
}
