pub mod location;
pub mod scanner;
pub mod store;
pub mod submit;
pub mod types;

pub use submit::{SubmitOutcome, Submitter};
pub use types::{FieldSnapshot, TelemetryRecord};
