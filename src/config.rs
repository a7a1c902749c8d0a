//! Flat rates used by the planner, with optional environment overrides.

use crate::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const ENV_INITIAL_TRAVEL_COST: &str = "HERITAGE_PLANNER_INITIAL_TRAVEL_COST";
pub const ENV_LEISURE_COST: &str = "HERITAGE_PLANNER_LEISURE_COST";
pub const ENV_MEALS_PER_DAY: &str = "HERITAGE_PLANNER_MEALS_PER_DAY";
pub const ENV_MISC_PER_DAY: &str = "HERITAGE_PLANNER_MISC_PER_DAY";
pub const ENV_SAME_STATE_KM: &str = "HERITAGE_PLANNER_SAME_STATE_KM";
pub const ENV_INTERSTATE_KM: &str = "HERITAGE_PLANNER_INTERSTATE_KM";
pub const ENV_KM_PER_SITE: &str = "HERITAGE_PLANNER_KM_PER_SITE";

/// Constants the planner charges and estimates with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannerRates {
    /// Cost of the outbound travel day when no site occupies day one
    pub initial_travel_day_cost: f64,
    /// Cost of a leisure day
    pub leisure_day_cost: f64,
    pub meals_per_day: f64,
    pub miscellaneous_per_day: f64,
    /// Base distance when origin and destination are the same state
    pub same_state_base_km: u64,
    /// Base distance for interstate trips
    pub interstate_base_km: u64,
    /// Extra distance per selected site
    pub km_per_site: u64,
}

impl Default for PlannerRates {
    fn default() -> Self {
        Self {
            initial_travel_day_cost: 800.0,
            leisure_day_cost: 300.0,
            meals_per_day: 500.0,
            miscellaneous_per_day: 300.0,
            same_state_base_km: 100,
            interstate_base_km: 800,
            km_per_site: 80,
        }
    }
}

impl PlannerRates {
    /// Defaults overridden by any `HERITAGE_PLANNER_*` variables in the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable name
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut rates = Self::default();

        if let Some(value) = lookup(ENV_INITIAL_TRAVEL_COST) {
            rates.initial_travel_day_cost = parse_cost(ENV_INITIAL_TRAVEL_COST, &value)?;
        }
        if let Some(value) = lookup(ENV_LEISURE_COST) {
            rates.leisure_day_cost = parse_cost(ENV_LEISURE_COST, &value)?;
        }
        if let Some(value) = lookup(ENV_MEALS_PER_DAY) {
            rates.meals_per_day = parse_cost(ENV_MEALS_PER_DAY, &value)?;
        }
        if let Some(value) = lookup(ENV_MISC_PER_DAY) {
            rates.miscellaneous_per_day = parse_cost(ENV_MISC_PER_DAY, &value)?;
        }
        if let Some(value) = lookup(ENV_SAME_STATE_KM) {
            rates.same_state_base_km = parse_km(ENV_SAME_STATE_KM, &value)?;
        }
        if let Some(value) = lookup(ENV_INTERSTATE_KM) {
            rates.interstate_base_km = parse_km(ENV_INTERSTATE_KM, &value)?;
        }
        if let Some(value) = lookup(ENV_KM_PER_SITE) {
            rates.km_per_site = parse_km(ENV_KM_PER_SITE, &value)?;
        }

        debug!(?rates, "resolved planner rates");
        Ok(rates)
    }
}

fn parse_cost(key: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| PlannerError::Config(format!("{} must be a number: {}", key, e)))?;
    if !value.is_finite() || value < 0.0 {
        return Err(PlannerError::Config(format!(
            "{} must be a non-negative number, got {}",
            key, raw
        )));
    }
    Ok(value)
}

fn parse_km(key: &str, raw: &str) -> Result<u64> {
    raw.trim().parse().map_err(|e| {
        PlannerError::Config(format!("{} must be a whole number of kilometers: {}", key, e))
    })
}
