//! Typed identifiers for messaging accounts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Error, Result};

/// Length of the hyphenated `8-4-4-4-12` UUID form.
const HYPHENATED_LEN: usize = 36;

/// Account identifier on the messaging service.
///
/// Only the hyphenated UUID form is accepted; braced, URN and simple forms
/// are rejected even though `uuid` itself would parse them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceId(Uuid);

impl ServiceId {
    /// Parses a raw contact identifier.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.len() != HYPHENATED_LEN {
            return Err(Error::InvalidServiceId(raw.to_string()));
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| Error::InvalidServiceId(raw.to_string()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ServiceId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ServiceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ServiceId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ServiceId> for String {
    fn from(id: ServiceId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
