use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use super::schedule;
use super::validation::validate;
use crate::relay::{BookingRelay, BookingRequest, RelayError};

pub const SCHEDULED_MESSAGE: &str =
    "Your call has been scheduled successfully! You will receive a confirmation email shortly.";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to schedule your call. Please try again.";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Field {
    Name,
    Email,
    Mobile,
    Time,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Mobile, Field::Time];

    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Mobile => "mobile",
            Field::Time => "time",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognized booking field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "mobile" => Ok(Field::Mobile),
            "time" => Ok(Field::Time),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BookingFields {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub time: String,
}

impl BookingFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Mobile => &self.mobile,
            Field::Time => &self.time,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Mobile => self.mobile = value,
            Field::Time => self.time = value,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum SubmissionStatus {
    #[default]
    None,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::None => None,
            SubmissionStatus::Success(message) | SubmissionStatus::Error(message) => Some(message),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Read-only view for a presentation layer.
#[derive(Clone, Debug)]
pub struct BookingSnapshot {
    pub fields: BookingFields,
    pub phase: SubmitPhase,
    pub status: SubmissionStatus,
    pub submit_count: u32,
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("booking state lock poisoned while {0}")]
    StatePoisoned(&'static str),
    #[error("a submission is already in progress")]
    AlreadySubmitting,
    #[error("failed to compute minimum call time: {0}")]
    Clock(#[from] jiff::Error),
}

pub type ControllerResult<T> = Result<T, ControllerError>;

#[derive(Debug, Error)]
enum SubmitFailure {
    #[error("invalid call time: {0}")]
    Time(#[from] jiff::Error),
    #[error(transparent)]
    Relay(#[from] RelayError),
}

#[derive(Default)]
struct BookingState {
    fields: BookingFields,
    phase: SubmitPhase,
    status: SubmissionStatus,
    submit_count: u32,
}

#[derive(Clone, Default)]
pub struct BookingController {
    state: Arc<RwLock<BookingState>>,
}

impl BookingController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) -> ControllerResult<()> {
        let mut state = write_lock(&self.state, "writing field value")?;
        state.fields.set(field, value.into());
        Ok(())
    }

    pub fn snapshot(&self) -> ControllerResult<BookingSnapshot> {
        let state = read_lock(&self.state, "creating booking snapshot")?;
        Ok(BookingSnapshot {
            fields: state.fields.clone(),
            phase: state.phase,
            status: state.status.clone(),
            submit_count: state.submit_count,
        })
    }

    pub fn reset(&self) -> ControllerResult<()> {
        let mut state = write_lock(&self.state, "resetting booking form")?;
        state.fields = BookingFields::default();
        state.status = SubmissionStatus::None;
        state.phase = SubmitPhase::Idle;
        Ok(())
    }

    /// Lower bound for the time field: one calendar day out, to the minute.
    pub fn minimum_time(&self) -> ControllerResult<String> {
        Ok(schedule::minimum_call_time_bound()?)
    }

    /// Runs one submit attempt end to end. Validation failures and delivery
    /// failures settle as an `Error` status; the returned status is the one
    /// the presentation layer should render. `AlreadySubmitting` is the only
    /// way an attempt is refused outright, and it leaves the in-flight
    /// attempt's state untouched.
    pub async fn submit<R>(&self, relay: &R) -> ControllerResult<SubmissionStatus>
    where
        R: BookingRelay + ?Sized,
    {
        let fields = {
            let mut state = write_lock(&self.state, "preparing submission")?;
            if state.phase == SubmitPhase::Submitting {
                return Err(ControllerError::AlreadySubmitting);
            }
            state.status = SubmissionStatus::None;
            if let Err(error) = validate(&state.fields) {
                let status = SubmissionStatus::Error(error.message().to_string());
                state.status = status.clone();
                return Ok(status);
            }
            state.phase = SubmitPhase::Submitting;
            state.submit_count = state.submit_count.saturating_add(1);
            state.fields.clone()
        };

        let outcome = deliver(relay, &fields).await;

        let mut state = write_lock(&self.state, "settling submission")?;
        state.phase = SubmitPhase::Idle;
        let status = match outcome {
            Ok(()) => {
                state.fields = BookingFields::default();
                SubmissionStatus::Success(SCHEDULED_MESSAGE.to_string())
            }
            Err(failure) => {
                log::warn!("booking submission failed: {failure}");
                SubmissionStatus::Error(SUBMIT_FAILED_MESSAGE.to_string())
            }
        };
        state.status = status.clone();
        Ok(status)
    }
}

async fn deliver<R>(relay: &R, fields: &BookingFields) -> Result<(), SubmitFailure>
where
    R: BookingRelay + ?Sized,
{
    let time = schedule::format_call_time(&fields.time)?;
    let request = BookingRequest::new(
        fields.name.as_str(),
        fields.email.as_str(),
        fields.mobile.as_str(),
        time,
    );
    relay.deliver(&request).await?;
    Ok(())
}

fn read_lock<'a>(
    lock: &'a RwLock<BookingState>,
    context: &'static str,
) -> ControllerResult<RwLockReadGuard<'a, BookingState>> {
    lock.read().map_err(|_| ControllerError::StatePoisoned(context))
}

fn write_lock<'a>(
    lock: &'a RwLock<BookingState>,
    context: &'static str,
) -> ControllerResult<RwLockWriteGuard<'a, BookingState>> {
    lock.write().map_err(|_| ControllerError::StatePoisoned(context))
}
