pub mod booking;
pub mod config;
pub mod relay;

pub use booking::{BookingController, BookingSnapshot, Field, SubmissionStatus, SubmitPhase};
pub use relay::{BookingRelay, FormcarryRelay};
