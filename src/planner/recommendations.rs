use crate::types::{CrowdLevel, TripRequest};

pub(crate) const PEAK_SEASON: &str =
    "Book accommodations and tickets in advance as this is peak season";
pub(crate) const OFF_SEASON: &str = "Good time to visit with fewer crowds and discounts available";
pub(crate) const FLIGHT_ADVICE: &str =
    "Book flights at least 2-3 weeks in advance for better prices";
pub(crate) const TRAIN_ADVICE: &str = "Book train tickets early for better availability";
pub(crate) const INSURANCE_ADVICE: &str = "Carry travel insurance for unexpected emergencies";

pub(crate) fn recommendations_for(request: &TripRequest) -> Vec<String> {
    let mut advice = Vec::new();

    match request.month.crowd_level {
        CrowdLevel::High => advice.push(PEAK_SEASON.to_string()),
        CrowdLevel::Low => advice.push(OFF_SEASON.to_string()),
        CrowdLevel::Medium => {}
    }

    match request.transport.name.as_str() {
        "Flight" => advice.push(FLIGHT_ADVICE.to_string()),
        "Train" => advice.push(TRAIN_ADVICE.to_string()),
        _ => {}
    }

    advice.push(INSURANCE_ADVICE.to_string());

    if let Some(celsius) = request.average_temperature_c {
        advice.push(format!(
            "Average temperature in {} in {}: {}°C",
            request.destination_state, request.month.name, celsius
        ));
    }

    advice
}
