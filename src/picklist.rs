//!
//! Salesforce picklists modelled as closed enumerations.
//!

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Allowed values of the `Contact.MailingGeocodeAccuracy` picklist.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MailingGeocodeAccuracy {
    Address,
    Block,
    City,
    County,
    ExtendedZip,
    NearAddress,
    Neighborhood,
    State,
    Street,
    Unknown,
    Zip,
}

static VALUES: [MailingGeocodeAccuracy; 11] = [
    MailingGeocodeAccuracy::Address,
    MailingGeocodeAccuracy::Block,
    MailingGeocodeAccuracy::City,
    MailingGeocodeAccuracy::County,
    MailingGeocodeAccuracy::ExtendedZip,
    MailingGeocodeAccuracy::NearAddress,
    MailingGeocodeAccuracy::Neighborhood,
    MailingGeocodeAccuracy::State,
    MailingGeocodeAccuracy::Street,
    MailingGeocodeAccuracy::Unknown,
    MailingGeocodeAccuracy::Zip,
];

impl MailingGeocodeAccuracy {
    /// All variants in picklist order.
    pub fn values() -> &'static [MailingGeocodeAccuracy] {
        &VALUES
    }

    /// Picklist value as stored in Salesforce.
    pub fn label(&self) -> &'static str {
        match self {
            MailingGeocodeAccuracy::Address => "Address",
            MailingGeocodeAccuracy::Block => "Block",
            MailingGeocodeAccuracy::City => "City",
            MailingGeocodeAccuracy::County => "County",
            MailingGeocodeAccuracy::ExtendedZip => "ExtendedZip",
            MailingGeocodeAccuracy::NearAddress => "NearAddress",
            MailingGeocodeAccuracy::Neighborhood => "Neighborhood",
            MailingGeocodeAccuracy::State => "State",
            MailingGeocodeAccuracy::Street => "Street",
            MailingGeocodeAccuracy::Unknown => "Unknown",
            MailingGeocodeAccuracy::Zip => "Zip",
        }
    }

    /// Look a variant up by its exact, case sensitive label.
    ///
    /// # Errors
    /// Raise Error::UnknownEnumValue if the label is not part of the picklist.
    pub fn value_of(label: &str) -> Result<Self, Error> {
        Self::values()
            .iter()
            .find(|v| v.label() == label)
            .copied()
            .ok_or_else(|| Error::UnknownEnumValue(label.to_owned()))
    }
}

impl fmt::Display for MailingGeocodeAccuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MailingGeocodeAccuracy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MailingGeocodeAccuracy::value_of(s)
    }
}
