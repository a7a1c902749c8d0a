use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a day of the trip is spent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum DayKind {
    /// A day visiting one of the selected sites
    Site,
    /// The outbound trip, only ever on day one
    InitialTravel,
    /// Unstructured local exploration
    Leisure,
}

/// One day of the computed schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    /// 1-based day counter within the trip
    pub day_index: u32,
    pub kind: DayKind,
    /// Short summary of the day
    pub activity_label: String,
    /// Site description, present only on site days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Estimated spend for the day
    pub cost_for_day: f64,
}

impl ScheduleDay {
    pub fn is_site_day(&self) -> bool {
        self.kind == DayKind::Site
    }
}

/// Five-way split of the estimated trip cost
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Nightly rate times trip length
    pub accommodation: f64,
    /// Daily cost of every scheduled site day
    pub sites: f64,
    /// Distance estimate times per-kilometer rate, rounded
    pub transport: f64,
    /// Flat per-day meal allowance
    pub meals: f64,
    /// Flat per-day contingency
    pub miscellaneous: f64,
}

impl CostBreakdown {
    /// Sum of all five components, always added in the same order
    pub fn total(&self) -> f64 {
        self.accommodation + self.sites + self.transport + self.meals + self.miscellaneous
    }
}

/// Output of the planner: schedule, costs and advice for one trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResult {
    /// Equal to `breakdown.total()`
    pub total_cost: f64,
    pub breakdown: CostBreakdown,
    /// Number of days in the schedule
    pub total_duration: u32,
    /// Day-by-day plan, indices 1..=totalDuration in order
    pub schedule: Vec<ScheduleDay>,
    /// Rough intercity distance used for the transport estimate
    pub estimated_distance_km: u64,
    /// Travel advice in display order
    pub recommendations: Vec<String>,
    /// Echoed from the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_temperature_c: Option<f64>,
}

impl ItineraryResult {
    /// Number of days spent at selected sites
    pub fn site_day_count(&self) -> usize {
        self.schedule.iter().filter(|day| day.is_site_day()).count()
    }

    /// Sum of the per-day costs shown on the schedule
    pub fn schedule_cost(&self) -> f64 {
        self.schedule.iter().map(|day| day.cost_for_day).sum()
    }

    /// Generate a human-readable plain-text summary of the itinerary
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();

        lines.push("=== Itinerary ===".to_string());
        lines.push(format!("Duration: {} days", self.total_duration));
        lines.push(format!("Estimated distance: {} km", self.estimated_distance_km));
        if let Some(celsius) = self.average_temperature_c {
            lines.push(format!("Average temperature: {}°C", celsius));
        }
        lines.push(format!("Total cost: {:.2}", self.total_cost));

        lines.push(String::new());
        lines.push("--- Cost Breakdown ---".to_string());
        lines.push(format!("Accommodation: {:.2}", self.breakdown.accommodation));
        lines.push(format!("Sites: {:.2}", self.breakdown.sites));
        lines.push(format!("Transport: {:.2}", self.breakdown.transport));
        lines.push(format!("Meals: {:.2}", self.breakdown.meals));
        lines.push(format!("Miscellaneous: {:.2}", self.breakdown.miscellaneous));

        lines.push(String::new());
        lines.push("--- Schedule ---".to_string());
        for day in &self.schedule {
            lines.push(format!(
                "Day {}: {} ({:.2})",
                day.day_index, day.activity_label, day.cost_for_day
            ));
            if let Some(description) = day.description.as_deref().filter(|d| !d.is_empty()) {
                lines.push(format!("   {}", description));
            }
        }

        if !self.recommendations.is_empty() {
            lines.push(String::new());
            lines.push("--- Recommendations ---".to_string());
            for recommendation in &self.recommendations {
                lines.push(format!("- {}", recommendation));
            }
        }

        lines.join("\n")
    }
}

crate::schemas::impl_planner_document!(ItineraryResult, "itinerary");
