use std::{env, fs, num::NonZeroUsize, str::FromStr, time::Duration};

use machine_learning::ShapeSampling;
use serde::Deserialize;

use crate::error::{ConfigErr, Result};

const DEFAULT_SIDE: usize = 20;
const DEFAULT_TICK_MS: u64 = 500;
const DEFAULT_REPORT_EVERY: usize = 50;

/// Largest accepted grid side, the perceptron holds `side * side` weights.
pub const MAX_SIDE: usize = 1024;

/// Overrides for the ranges shape parameters are sampled from, as `[lower, upper)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SamplingConfig {
    pub position: (f32, f32),
    pub size: (f32, f32),
}

impl From<SamplingConfig> for ShapeSampling {
    fn from(value: SamplingConfig) -> Self {
        Self {
            position: value.position,
            size: value.size,
        }
    }
}

/// Settings of the headless presenter.
///
/// Built from the defaults, then an optional JSON file, then the environment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PresenterConfig {
    /// Side of the generated images.
    pub side: usize,
    /// Milliseconds between training steps.
    pub tick_ms: u64,
    /// Stop after this many ticks, run until interrupted if `None`.
    pub steps: Option<NonZeroUsize>,
    /// Seed for the random source, seeded by the OS if `None`.
    pub seed: Option<u64>,
    /// Completed steps between accuracy reports.
    pub report_every: usize,
    /// Ranges for the shape parameters, scaled from `side` if `None`.
    pub sampling: Option<SamplingConfig>,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            side: DEFAULT_SIDE,
            tick_ms: DEFAULT_TICK_MS,
            steps: None,
            seed: None,
            report_every: DEFAULT_REPORT_EVERY,
            sampling: None,
        }
    }
}

impl PresenterConfig {
    /// Loads and validates the configuration.
    ///
    /// # Arguments
    /// * `path` - An optional JSON file, missing fields keep their defaults.
    ///
    /// # Errors
    /// `ConfigErr` if the file can't be read or parsed, an env var can't be parsed or the
    /// resulting values are invalid.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut cfg = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        cfg.apply_env(|key| env::var(key).ok())?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigErr::Io {
            path: path.to_string(),
            source,
        })?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Overrides fields with the `SIDE`, `TICK_MS`, `STEPS`, `SEED` and `REPORT_EVERY`
    /// variables found through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(side) = parse_var(&lookup, "SIDE")? {
            self.side = side;
        }
        if let Some(tick_ms) = parse_var(&lookup, "TICK_MS")? {
            self.tick_ms = tick_ms;
        }
        if let Some(steps) = parse_var(&lookup, "STEPS")? {
            self.steps = Some(steps);
        }
        if let Some(seed) = parse_var(&lookup, "SEED")? {
            self.seed = Some(seed);
        }
        if let Some(report_every) = parse_var(&lookup, "REPORT_EVERY")? {
            self.report_every = report_every;
        }

        Ok(())
    }

    /// Checks that the configuration describes a runnable session.
    pub fn validate(&self) -> Result<()> {
        if self.side == 0 {
            return Err(invalid("side", "must be greater than zero"));
        }
        if self.side > MAX_SIDE {
            return Err(invalid("side", format!("must be at most {MAX_SIDE}")));
        }
        if self.tick_ms == 0 {
            return Err(invalid("tick_ms", "must be greater than zero"));
        }
        if self.report_every == 0 {
            return Err(invalid("report_every", "must be greater than zero"));
        }

        let ShapeSampling { position, size } = self.sampling();
        check_range("sampling.position", position, self.side)?;
        check_range("sampling.size", size, self.side)?;
        Ok(())
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn sampling(&self) -> ShapeSampling {
        self.sampling
            .map(ShapeSampling::from)
            .unwrap_or_else(|| ShapeSampling::for_side(self.side))
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };

    let parsed = value.trim().parse::<T>();
    match parsed {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) => Err(ConfigErr::InvalidVar { key, value }),
    }
}

fn check_range(field: &'static str, (lower, upper): (f32, f32), side: usize) -> Result<()> {
    if !(lower.is_finite() && upper.is_finite()) {
        return Err(invalid(field, "bounds must be finite"));
    }
    if lower < 0. {
        return Err(invalid(field, "lower bound must not be negative"));
    }
    if lower >= upper {
        return Err(invalid(field, format!("[{lower}, {upper}) is empty")));
    }
    if upper > side as f32 {
        return Err(invalid(field, format!("[{lower}, {upper}) exceeds a side of {side}")));
    }

    Ok(())
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigErr {
    ConfigErr::InvalidField {
        field,
        reason: reason.into(),
    }
}
