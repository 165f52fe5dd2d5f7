use crate::core::nice::{round_to_places, step_precision, tick_increment};
use crate::core::types::ResolvedDomain;

/// Count hint used by generic ticks when the config does not set one.
pub const DEFAULT_TICK_COUNT_HINT: usize = 10;

/// Upper bound on generated ticks, for both nice steps and explicit counts.
pub const MAX_GENERATED_TICKS: usize = 10_000;

/// Generic ticks: every multiple of a round step that falls inside the domain.
///
/// `[0, 30]` with the default hint steps by 5 and yields
/// `0, 5, 10, 15, 20, 25, 30`.
#[must_use]
pub fn nice_ticks(domain: ResolvedDomain, count_hint: usize) -> Vec<f64> {
    if domain.is_point() {
        return vec![domain.min];
    }

    let step = tick_increment(domain.span(), count_hint);
    if step == 0.0 {
        return Vec::new();
    }

    let first = (domain.min / step).ceil();
    let last = (domain.max / step).floor();
    let count = last - first;
    if !count.is_finite() || count < 0.0 || count > MAX_GENERATED_TICKS as f64 {
        return Vec::new();
    }

    let places = step_precision(step);
    (0..=count as usize)
        .map(|offset| (first + offset as f64) * step)
        .map(|value| normalize_zero(round_to_places(value, places)))
        .collect()
}

/// Exactly `tick_count` ticks evenly spaced from domain min to domain max.
///
/// `tick_count == 1` yields the domain min alone. Counts above
/// [`MAX_GENERATED_TICKS`] yield no ticks, like an oversized nice-step span.
#[must_use]
pub fn evenly_spaced_ticks(domain: ResolvedDomain, tick_count: usize) -> Vec<f64> {
    if tick_count == 0 || tick_count > MAX_GENERATED_TICKS {
        return Vec::new();
    }
    if tick_count == 1 || domain.is_point() {
        return vec![domain.min];
    }

    let span = domain.span();
    let denominator = (tick_count - 1) as f64;
    let mut ticks = Vec::with_capacity(tick_count);
    for index in 0..tick_count {
        let ratio = (index as f64) / denominator;
        ticks.push(normalize_zero(domain.min + span * ratio));
    }
    // Pin the last tick to the bound so the top label reads exactly `max`.
    if let Some(last) = ticks.last_mut() {
        *last = domain.max;
    }
    ticks
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_ticks_cover_zero_to_thirty_in_fives() {
        let ticks = nice_ticks(ResolvedDomain::new(0.0, 30.0), DEFAULT_TICK_COUNT_HINT);
        assert_eq!(ticks, vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0]);
    }

    #[test]
    fn nice_ticks_keep_fractional_steps_clean() {
        let ticks = nice_ticks(ResolvedDomain::new(0.0, 1.0), DEFAULT_TICK_COUNT_HINT);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[3], 0.3);
        assert_eq!(ticks[7], 0.7);
    }

    #[test]
    fn nice_ticks_never_emit_negative_zero() {
        let ticks = nice_ticks(ResolvedDomain::new(-0.4, 1.0), DEFAULT_TICK_COUNT_HINT);
        assert!(ticks.iter().all(|tick| !(tick.is_sign_negative() && *tick == 0.0)));
    }

    #[test]
    fn evenly_spaced_ticks_hit_both_bounds() {
        let ticks = evenly_spaced_ticks(ResolvedDomain::new(0.0, 30.0), 4);
        assert_eq!(ticks, vec![0.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn evenly_spaced_ticks_handle_tiny_counts() {
        let domain = ResolvedDomain::new(2.0, 8.0);
        assert!(evenly_spaced_ticks(domain, 0).is_empty());
        assert_eq!(evenly_spaced_ticks(domain, 1), vec![2.0]);
    }

    #[test]
    fn evenly_spaced_ticks_reject_oversized_counts() {
        let domain = ResolvedDomain::new(0.0, 30.0);
        assert_eq!(evenly_spaced_ticks(domain, MAX_GENERATED_TICKS).len(), MAX_GENERATED_TICKS);
        assert!(evenly_spaced_ticks(domain, MAX_GENERATED_TICKS + 1).is_empty());
        assert!(evenly_spaced_ticks(domain, usize::MAX).is_empty());
    }
}
