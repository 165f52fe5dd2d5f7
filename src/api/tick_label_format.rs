use std::sync::Arc;

/// Tick label override: `(value, index, all_tick_values) -> label`.
pub type TickLabelFormatterFn = Arc<dyn Fn(f64, usize, &[f64]) -> String + Send + Sync + 'static>;

/// Canonical stringification used when no formatter is configured.
///
/// Integral values print without a fractional part (`33.0 -> "33"`) and
/// fractions print in their shortest round-trip form (`0.3 -> "0.3"`).
#[must_use]
pub fn default_tick_label(value: f64) -> String {
    if value == 0.0 {
        // Keeps `-0` out of labels.
        return "0".to_owned();
    }
    value.to_string()
}

/// Formats every tick value, passing the full value list to the formatter.
#[must_use]
pub fn format_tick_labels(values: &[f64], formatter: Option<&TickLabelFormatterFn>) -> Vec<String> {
    match formatter {
        Some(formatter) => values
            .iter()
            .enumerate()
            .map(|(index, value)| formatter(*value, index, values))
            .collect(),
        None => values.iter().copied().map(default_tick_label).collect(),
    }
}
