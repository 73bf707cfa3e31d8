//! Entries returned by the geographic directory.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CountryEntry {
    pub country_name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StateEntry {
    pub state_name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CityEntry {
    pub city_name: String,
}

/// Body of the directory's credential endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub(crate) struct AccessTokenResponse {
    pub auth_token: String,
}
