use std::future::Future;
use std::pin::Pin;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use thiserror::Error;

use crate::config::RelayConfig;

/// Wire body of a booking submission.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub time: String,
    pub message: String,
}

impl BookingRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        mobile: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let time = time.into();
        let message = format!("Call booking request from {name}. Please call at {time}");
        Self {
            name,
            email: email.into(),
            mobile: mobile.into(),
            time,
            message,
        }
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("relay rejected the booking with status {0}")]
    Rejected(StatusCode),
}

pub type BoxedRelayFuture<'a> = Pin<Box<dyn Future<Output = Result<(), RelayError>> + Send + 'a>>;

pub trait BookingRelay: Send + Sync {
    fn deliver<'a>(&'a self, request: &'a BookingRequest) -> BoxedRelayFuture<'a>;
}

/// Delivers bookings to a formcarry-style relay endpoint. One POST per
/// booking, no retries; timeouts are whatever the transport defaults to.
pub struct FormcarryRelay {
    client: reqwest::Client,
    config: RelayConfig,
}

impl FormcarryRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

impl Default for FormcarryRelay {
    fn default() -> Self {
        Self::new(RelayConfig::default())
    }
}

impl BookingRelay for FormcarryRelay {
    fn deliver<'a>(&'a self, request: &'a BookingRequest) -> BoxedRelayFuture<'a> {
        Box::pin(async move {
            let response = self
                .client
                .post(&self.config.endpoint)
                .header(CONTENT_TYPE, "application/json")
                .header(ACCEPT, "application/json")
                .json(request)
                .send()
                .await?;
            if !response.status().is_success() {
                return Err(RelayError::Rejected(response.status()));
            }
            Ok(())
        })
    }
}
