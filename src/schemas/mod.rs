//! JSON documents: schemas, and validation of incoming payloads.

pub mod schema;
mod validation;
pub mod validator;

pub(crate) use schema::impl_planner_document;
pub use schema::{PlannerDocument, SchemaHandle};
pub use validator::Validator;

use crate::error::Result;
use crate::types::TripRequest;

/// Parse a trip request document; the planner still checks its preconditions.
pub fn parse_trip_request(text: &str, validator: Validator) -> Result<TripRequest> {
    validator.parse_str(text)
}
