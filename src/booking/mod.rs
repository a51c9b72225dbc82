mod controller;
mod schedule;
mod validation;


pub use controller::{
    BookingController, BookingFields, BookingSnapshot, ControllerError, ControllerResult, Field,
    SCHEDULED_MESSAGE, SUBMIT_FAILED_MESSAGE, SubmissionStatus, SubmitPhase, UnknownField,
};
pub use schedule::{INPUT_FORMAT, format_call_time, minimum_call_time, minimum_call_time_bound};
pub use validation::{ValidationError, validate};
