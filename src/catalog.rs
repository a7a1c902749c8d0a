//! Static trip data: states with their sites and monthly temperatures, months
//! with crowd levels, and the transport and accommodation options on offer.
//!
//! A [`TripSelection`] names its choices; [`Catalog::resolve`] turns it into a
//! [`TripRequest`] the planner can run.

use crate::error::{PlannerError, Result};
use crate::schemas::{PlannerDocument, Validator};
use crate::types::trip::ensure_rate;
use crate::types::{Accommodation, Month, Site, Transport, TripRequest};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

/// A state and the heritage sites it offers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StateEntry {
    pub name: String,
    #[serde(default)]
    pub sites: Vec<Site>,
    /// Average temperature in °C keyed by month name
    #[serde(default)]
    pub temperatures: BTreeMap<String, f64>,
}

impl StateEntry {
    pub fn site(&self, name: &str) -> Option<&Site> {
        self.sites.iter().find(|site| site.name.eq_ignore_ascii_case(name))
    }

    pub fn temperature_in(&self, month: &str) -> Option<f64> {
        self.temperatures
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(month))
            .map(|(_, celsius)| *celsius)
    }
}

/// Everything a traveler can pick from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub states: Vec<StateEntry>,
    #[serde(default)]
    pub months: Vec<Month>,
    #[serde(default)]
    pub transports: Vec<Transport>,
    #[serde(default)]
    pub accommodations: Vec<Accommodation>,
}

crate::schemas::impl_planner_document!(Catalog, "catalog");

/// A trip described by catalog names rather than full records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSelection {
    /// Free text; does not need to be a catalog state
    #[serde(default)]
    pub source_state: String,
    pub destination_state: String,
    /// Site names in selection order
    #[serde(default)]
    pub sites: Vec<String>,
    pub month: String,
    pub total_days: i64,
    pub transport: String,
    pub accommodation: String,
}

impl Catalog {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let catalog: Catalog = Validator::SerdeFirst.parse_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading catalog");
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&text)?;
        info!(
            path = %path.display(),
            states = catalog.states.len(),
            sites = catalog.site_count(),
            "loaded {}",
            Catalog::NAME
        );
        Ok(catalog)
    }

    pub fn site_count(&self) -> usize {
        self.states.iter().map(|state| state.sites.len()).sum()
    }

    /// Check every site and rate with the planner's rules
    pub fn validate(&self) -> Result<()> {
        for state in &self.states {
            for site in &state.sites {
                site.validate()?;
            }
        }
        for transport in &self.transports {
            ensure_rate(
                &format!("transport `{}` costPerKilometer", transport.name),
                transport.cost_per_kilometer,
            )?;
        }
        for accommodation in &self.accommodations {
            ensure_rate(
                &format!("accommodation `{}` costPerNight", accommodation.tier_name),
                accommodation.cost_per_night,
            )?;
        }
        Ok(())
    }

    pub fn state(&self, name: &str) -> Result<&StateEntry> {
        self.states
            .iter()
            .find(|state| state.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| PlannerError::not_found("state", name))
    }

    pub fn month(&self, name: &str) -> Result<&Month> {
        self.months
            .iter()
            .find(|month| month.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| PlannerError::not_found("month", name))
    }

    pub fn transport(&self, name: &str) -> Result<&Transport> {
        self.transports
            .iter()
            .find(|transport| transport.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| PlannerError::not_found("transport", name))
    }

    pub fn accommodation(&self, tier_name: &str) -> Result<&Accommodation> {
        self.accommodations
            .iter()
            .find(|tier| tier.tier_name.eq_ignore_ascii_case(tier_name))
            .ok_or_else(|| PlannerError::not_found("accommodation", tier_name))
    }

    /// Build a full trip request from catalog names
    pub fn resolve(&self, selection: &TripSelection) -> Result<TripRequest> {
        let destination = self.state(&selection.destination_state)?;
        let month = self.month(&selection.month)?;

        let mut seen = HashSet::new();
        let mut sites = Vec::with_capacity(selection.sites.len());
        for name in &selection.sites {
            let site = destination.site(name).ok_or_else(|| {
                PlannerError::not_found("site", format!("{} in {}", name, destination.name))
            })?;
            if seen.insert(site.name.as_str()) {
                sites.push(site.clone());
            }
        }

        let request = TripRequest {
            source_state: selection.source_state.clone(),
            destination_state: destination.name.clone(),
            selected_sites: sites,
            month: month.clone(),
            total_days: selection.total_days,
            transport: self.transport(&selection.transport)?.clone(),
            accommodation: self.accommodation(&selection.accommodation)?.clone(),
            average_temperature_c: destination.temperature_in(&month.name),
        };
        request.validate()?;
        Ok(request)
    }
}
