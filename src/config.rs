use serde::{Deserialize, Serialize};

pub const FORMCARRY_ENDPOINT: &str = "https://formcarry.com/s/cfdBlteB3bU";
pub const SUPPORT_CONTACT: &str = "lokeshjaglan01@gmail.com";

/// Relay settings. Defaults match the production endpoint; embedders may
/// deserialize overrides from their own configuration.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RelayConfig {
    pub endpoint: String,
    pub support_contact: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: FORMCARRY_ENDPOINT.into(),
            support_contact: SUPPORT_CONTACT.into(),
        }
    }
}
