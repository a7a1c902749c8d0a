//! heritage-planner: a deterministic itinerary calculator for heritage travel
//!
//! Given a [`TripRequest`] (origin, destination, selected sites, trip length,
//! transport mode, accommodation tier and month), the planner lays out a
//! day-by-day schedule, a five-way cost breakdown and a list of travel
//! recommendations. The calculation is pure and synchronous.
//!
//! # Quick Start
//!
//! ```rust
//! use heritage_planner::{
//!     compute_itinerary, Accommodation, CrowdLevel, Month, Site, Transport, TripRequest,
//! };
//!
//! # fn main() -> heritage_planner::Result<()> {
//! let request = TripRequest::new(
//!     "Uttar Pradesh",
//!     Month::new("November", CrowdLevel::High),
//!     3,
//!     Transport::new("Train", 1.5)?,
//!     Accommodation::new("Mid-range", 2500.0)?,
//! )?
//! .with_source_state("Delhi")
//! .with_site(Site::new("Taj Mahal", "Agra", "Marble mausoleum", 2, 500.0)?);
//!
//! let itinerary = compute_itinerary(&request)?;
//! assert_eq!(itinerary.schedule.len(), 3);
//! assert_eq!(itinerary.total_cost, itinerary.breakdown.total());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod planner;
pub mod schemas;
pub mod types;

pub use catalog::{Catalog, StateEntry, TripSelection};
pub use config::PlannerRates;
pub use error::{PlannerError, Result};
pub use planner::{compute_itinerary, Planner};
pub use schemas::{parse_trip_request, PlannerDocument, SchemaHandle, Validator};
pub use types::{
    Accommodation, CostBreakdown, CrowdLevel, DayKind, ItineraryResult, Month, ScheduleDay, Site,
    Transport, TripRequest,
};

#[cfg(feature = "cli")]
pub mod cli;
