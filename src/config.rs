use serde::Deserialize;

use crate::error::Error;

/// Body field carrying the OData key predicate of the entity to operate on.
pub const KEY_PREDICATE: &str = "keyPredicate";

/// Prefix the Olingo4 producer expects on headers that override endpoint properties.
pub const OLINGO4_PROPERTY_PREFIX: &str = "olingo4.";

/// Which body field is lifted into which header.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RouterConfig {
    pub field: String,
    pub header_prefix: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            field: KEY_PREDICATE.to_owned(),
            header_prefix: OLINGO4_PROPERTY_PREFIX.to_owned(),
        }
    }
}

impl RouterConfig {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn header_name(&self) -> String {
        format!("{}{}", self.header_prefix, self.field)
    }
}
