//! The itinerary calculator.
//!
//! Turns a [`TripRequest`] into an [`ItineraryResult`] in a single pass:
//! sites claim days in selection order, the leftover days become the
//! outbound travel day (day one only) or leisure days, and the cost
//! breakdown and advice are derived from the same inputs. The planner is
//! pure: no I/O, no clock, no randomness.

mod allocation;
mod costs;
mod recommendations;
mod schedule;

use crate::config::PlannerRates;
use crate::error::Result;
use crate::types::{ItineraryResult, TripRequest};

/// Itinerary calculator parameterised by its flat rates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Planner {
    rates: PlannerRates,
}

impl Planner {
    /// Create a planner with the default rates
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rates(mut self, rates: PlannerRates) -> Self {
        self.rates = rates;
        self
    }

    pub fn rates(&self) -> &PlannerRates {
        &self.rates
    }

    /// Compute the schedule, cost breakdown and recommendations for a trip.
    ///
    /// Fails with [`PlannerError::InvalidInput`](crate::PlannerError::InvalidInput)
    /// before doing any work when the request breaks a precondition.
    pub fn plan(&self, request: &TripRequest) -> Result<ItineraryResult> {
        let total_days = request.validated_days()?;

        let assigned = allocation::allocate_site_days(&request.selected_sites, total_days);
        let schedule = schedule::build_schedule(request, total_days, &assigned, &self.rates);
        let distance_km = costs::estimate_distance_km(request, &self.rates);
        let breakdown =
            costs::compute_breakdown(request, total_days, &assigned, distance_km, &self.rates);

        Ok(ItineraryResult {
            total_cost: breakdown.total(),
            breakdown,
            total_duration: total_days,
            schedule,
            estimated_distance_km: distance_km,
            recommendations: recommendations::recommendations_for(request),
            average_temperature_c: request.average_temperature_c,
        })
    }
}

/// Compute an itinerary with the default rates
pub fn compute_itinerary(request: &TripRequest) -> Result<ItineraryResult> {
    Planner::new().plan(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Accommodation, CrowdLevel, DayKind, Month, Site, Transport};
    use crate::PlannerError;

    fn request(total_days: i64) -> TripRequest {
        TripRequest {
            source_state: "Delhi".to_string(),
            destination_state: "Uttar Pradesh".to_string(),
            selected_sites: vec![Site {
                name: "Taj Mahal".to_string(),
                city: "Agra".to_string(),
                description: "Marble mausoleum".to_string(),
                duration_days: 2,
                avg_cost_per_day: 500.0,
            }],
            month: Month::new("February", CrowdLevel::High),
            total_days,
            transport: Transport {
                name: "Train".to_string(),
                cost_per_kilometer: 1.5,
            },
            accommodation: Accommodation {
                tier_name: "Mid-range".to_string(),
                cost_per_night: 2000.0,
            },
            average_temperature_c: Some(24.0),
        }
    }

    #[test]
    fn test_plan_assembles_result() {
        let result = compute_itinerary(&request(3)).unwrap();
        assert_eq!(result.total_duration, 3);
        assert_eq!(result.schedule.len(), 3);
        assert_eq!(result.site_day_count(), 2);
        assert_eq!(result.schedule[2].kind, DayKind::Leisure);
        assert_eq!(result.estimated_distance_km, 880);
        assert_eq!(result.breakdown.transport, 1320.0);
        assert_eq!(result.breakdown.sites, 1000.0);
        assert_eq!(result.total_cost, result.breakdown.total());
        assert_eq!(result.average_temperature_c, Some(24.0));
        assert_eq!(result.recommendations.len(), 4);
    }

    #[test]
    fn test_plan_rejects_zero_days() {
        let err = compute_itinerary(&request(0)).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput(_)));
    }

    #[test]
    fn test_custom_rates() {
        let rates = PlannerRates {
            meals_per_day: 0.0,
            miscellaneous_per_day: 0.0,
            km_per_site: 0,
            ..PlannerRates::default()
        };
        let result = Planner::new().with_rates(rates).plan(&request(3)).unwrap();
        assert_eq!(result.breakdown.meals, 0.0);
        assert_eq!(result.estimated_distance_km, 800);
        assert_eq!(Planner::new().with_rates(rates).rates().km_per_site, 0);
    }
}
