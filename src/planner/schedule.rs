use crate::config::PlannerRates;
use crate::types::{DayKind, ScheduleDay, Site, TripRequest};

pub(crate) const LEISURE_LABEL: &str = "Leisure/local exploration";

/// Lay out every day of the trip, site days first.
pub(crate) fn build_schedule(
    request: &TripRequest,
    total_days: u32,
    assigned: &[&Site],
    rates: &PlannerRates,
) -> Vec<ScheduleDay> {
    let mut site_days = assigned.iter();

    (1..=total_days)
        .map(|day_index| match site_days.next() {
            Some(site) => ScheduleDay {
                day_index,
                kind: DayKind::Site,
                activity_label: format!("Visit {} at {}", site.name, site.city),
                description: Some(site.description.clone()),
                cost_for_day: site.avg_cost_per_day,
            },
            None if day_index == 1 => ScheduleDay {
                day_index,
                kind: DayKind::InitialTravel,
                activity_label: format!(
                    "Travel from {} to {}",
                    request.source_state, request.destination_state
                ),
                description: None,
                cost_for_day: rates.initial_travel_day_cost,
            },
            None => ScheduleDay {
                day_index,
                kind: DayKind::Leisure,
                activity_label: LEISURE_LABEL.to_string(),
                description: None,
                cost_for_day: rates.leisure_day_cost,
            },
        })
        .collect()
}
