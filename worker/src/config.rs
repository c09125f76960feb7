use step_counter::{CounterError, StyleThresholds};

pub const POSITIVE_THRESHOLD_VAR: &str = "POSITIVE_THRESHOLD";
pub const NEGATIVE_THRESHOLD_VAR: &str = "NEGATIVE_THRESHOLD";

/// Builds thresholds from the raw worker vars. Unset vars fall back to the defaults.
pub fn thresholds_from_vars(
    positive: Option<&str>,
    negative: Option<&str>,
) -> Result<StyleThresholds, CounterError> {
    let defaults = StyleThresholds::default();
    let positive = read_var(POSITIVE_THRESHOLD_VAR, positive, defaults.positive())?;
    let negative = read_var(NEGATIVE_THRESHOLD_VAR, negative, defaults.negative())?;

    StyleThresholds::new(positive, negative)
}

pub fn thresholds_from_env(env: &worker::Env) -> Result<StyleThresholds, CounterError> {
    let var = |name: &str| env.var(name).ok().map(|var| var.to_string());
    let positive = var(POSITIVE_THRESHOLD_VAR);
    let negative = var(NEGATIVE_THRESHOLD_VAR);

    thresholds_from_vars(positive.as_deref(), negative.as_deref())
}

fn read_var(name: &str, raw: Option<&str>, default: i32) -> Result<i32, CounterError> {
    match raw {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<i32>().map_err(|err| {
            CounterError::Config(format!("{name}: [{raw}] is not an integer: {err}"))
        }),
    }
}
