use crate::config::PlannerRates;
use crate::types::{CostBreakdown, Site, TripRequest};

/// Distance proxy: a base for same-state or interstate trips plus a fixed
/// amount for every requested site, scheduled or not.
pub(crate) fn estimate_distance_km(request: &TripRequest, rates: &PlannerRates) -> u64 {
    let base = if request.is_same_state() {
        rates.same_state_base_km
    } else {
        rates.interstate_base_km
    };
    let sites = request.selected_sites.len() as u64;
    base.saturating_add(rates.km_per_site.saturating_mul(sites))
}

pub(crate) fn compute_breakdown(
    request: &TripRequest,
    total_days: u32,
    assigned: &[&Site],
    distance_km: u64,
    rates: &PlannerRates,
) -> CostBreakdown {
    let days = f64::from(total_days);

    CostBreakdown {
        accommodation: days * request.accommodation.cost_per_night,
        sites: assigned
            .iter()
            .fold(0.0, |total, site| total + site.avg_cost_per_day),
        // Inputs are non-negative, so round() is half-up here.
        transport: (distance_km as f64 * request.transport.cost_per_kilometer).round(),
        meals: days * rates.meals_per_day,
        miscellaneous: days * rates.miscellaneous_per_day,
    }
}
