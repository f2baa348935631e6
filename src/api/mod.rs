pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiClient, Backend};
pub use error::ApiError;
pub use types::{Appointment, AppointmentPayload, RecordId, Status, StatusPatch, User};
