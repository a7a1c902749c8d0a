use crate::error::{PlannerError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Coarse seasonal crowd level of a month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

/// Month of travel and its crowd level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Month {
    /// Month name as shown to travelers (e.g., "October")
    pub name: String,
    /// Expected crowd level at heritage sites during the month
    pub crowd_level: CrowdLevel,
}

impl Month {
    pub fn new(name: impl Into<String>, crowd_level: CrowdLevel) -> Self {
        Self {
            name: name.into(),
            crowd_level,
        }
    }
}

/// Intercity transport mode and its per-kilometer rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transport {
    /// Mode name; "Flight" and "Train" get booking advice
    pub name: String,
    /// Cost per kilometer in the trip currency
    pub cost_per_kilometer: f64,
}

impl Transport {
    pub fn new(name: impl Into<String>, cost_per_kilometer: f64) -> Result<Self> {
        ensure_rate("transport costPerKilometer", cost_per_kilometer)?;
        Ok(Self {
            name: name.into(),
            cost_per_kilometer,
        })
    }
}

/// Accommodation tier and its nightly rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    /// Tier label (e.g., "Budget", "Heritage Hotel")
    pub tier_name: String,
    /// Cost per night in the trip currency
    pub cost_per_night: f64,
}

impl Accommodation {
    pub fn new(tier_name: impl Into<String>, cost_per_night: f64) -> Result<Self> {
        ensure_rate("accommodation costPerNight", cost_per_night)?;
        Ok(Self {
            tier_name: tier_name.into(),
            cost_per_night,
        })
    }
}

/// A selectable heritage or cultural point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    /// Display name of the site
    pub name: String,
    /// Locality the site is in
    pub city: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Days a full visit ideally takes; must be at least 1
    pub duration_days: i64,
    /// Estimated daily spend at the site (entry fees, guides, local transport)
    pub avg_cost_per_day: f64,
}

impl Site {
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        description: impl Into<String>,
        duration_days: i64,
        avg_cost_per_day: f64,
    ) -> Result<Self> {
        let site = Self {
            name: name.into(),
            city: city.into(),
            description: description.into(),
            duration_days,
            avg_cost_per_day,
        };
        site.validate()?;
        Ok(site)
    }

    pub fn validate(&self) -> Result<()> {
        if self.duration_days < 1 {
            return Err(PlannerError::invalid(format!(
                "site `{}` durationDays must be at least 1, got {}",
                self.name, self.duration_days
            )));
        }
        ensure_rate(
            &format!("site `{}` avgCostPerDay", self.name),
            self.avg_cost_per_day,
        )
    }
}

/// Everything the planner needs to lay out a trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    /// Origin state; may be empty when unknown
    #[serde(default)]
    pub source_state: String,
    /// Destination state
    pub destination_state: String,
    /// Sites in the order the traveler picked them
    #[serde(default)]
    pub selected_sites: Vec<Site>,
    /// Month of travel
    pub month: Month,
    /// Days available for the trip; must be at least 1
    pub total_days: i64,
    /// Intercity transport mode
    pub transport: Transport,
    /// Accommodation tier
    pub accommodation: Accommodation,
    /// Average temperature at the destination in the travel month, in °C
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_temperature_c: Option<f64>,
}

impl TripRequest {
    /// Create a request with no origin and no selected sites
    pub fn new(
        destination_state: impl Into<String>,
        month: Month,
        total_days: i64,
        transport: Transport,
        accommodation: Accommodation,
    ) -> Result<Self> {
        let request = Self {
            source_state: String::new(),
            destination_state: destination_state.into(),
            selected_sites: Vec::new(),
            month,
            total_days,
            transport,
            accommodation,
            average_temperature_c: None,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn with_source_state(mut self, source_state: impl Into<String>) -> Self {
        self.source_state = source_state.into();
        self
    }

    pub fn with_site(mut self, site: Site) -> Self {
        self.selected_sites.push(site);
        self
    }

    pub fn with_sites(mut self, sites: impl IntoIterator<Item = Site>) -> Self {
        self.selected_sites.extend(sites);
        self
    }

    pub fn with_average_temperature(mut self, celsius: f64) -> Self {
        self.average_temperature_c = Some(celsius);
        self
    }

    /// Whether origin and destination are the same state
    pub fn is_same_state(&self) -> bool {
        self.source_state == self.destination_state
    }

    /// Check every precondition of the planner
    pub fn validate(&self) -> Result<()> {
        self.validated_days().map(|_| ())
    }

    /// Validate the request and return the trip length as a day counter
    pub(crate) fn validated_days(&self) -> Result<u32> {
        if self.total_days < 1 {
            return Err(PlannerError::invalid(format!(
                "totalDays must be at least 1, got {}",
                self.total_days
            )));
        }
        let days = u32::try_from(self.total_days).map_err(|_| {
            PlannerError::invalid(format!(
                "totalDays {} exceeds the supported maximum of {}",
                self.total_days,
                u32::MAX
            ))
        })?;

        ensure_rate("transport costPerKilometer", self.transport.cost_per_kilometer)?;
        ensure_rate("accommodation costPerNight", self.accommodation.cost_per_night)?;

        for site in &self.selected_sites {
            site.validate()?;
        }

        Ok(days)
    }
}

crate::schemas::impl_planner_document!(TripRequest, "request");

pub(crate) fn ensure_rate(label: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PlannerError::invalid(format!(
            "{} must be a non-negative number, got {}",
            label, value
        )))
    }
}
