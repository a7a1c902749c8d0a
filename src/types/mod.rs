pub mod itinerary;
pub mod trip;

pub use itinerary::{CostBreakdown, DayKind, ItineraryResult, ScheduleDay};
pub use trip::{Accommodation, CrowdLevel, Month, Site, Transport, TripRequest};
