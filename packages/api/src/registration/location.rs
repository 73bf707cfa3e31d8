//! # Country → state → city selection
//!
//! Three pieces, kept apart so the selects never show stale options:
//!
//! - [`LocationSelection`] is what the user picked. Picking a country clears
//!   the state and city; picking a state clears the city.
//! - [`LocationCatalog`] is everything fetched so far: countries, states per
//!   country, cities per state. [`LocationCatalog::options_for`] derives the
//!   options that are valid for a selection. A late response for a country the
//!   user already moved away from is cached under that country and simply not
//!   shown.
//! - [`LocationCascade`] combines them with the directory credential and says
//!   which [`LocationFetch`] (if any) a change requires. Running the fetch is
//!   the caller's business; the result goes back in through
//!   [`LocationCascade::apply`].
//!
//! A fetch whose prerequisite is missing (no credential yet, empty parent
//! selection) is simply not planned.

use std::collections::HashMap;

use crate::directory::Directory;
use crate::error::ApiError;

/// Shown above the selects while the directory cannot be reached.
pub const LOCATIONS_UNAVAILABLE: &str =
    "Could not load locations. Country, state and city cannot be selected right now.";

/// The user's current picks. Empty strings mean "nothing selected".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationSelection {
    pub country: String,
    pub state: String,
    pub city: String,
}

impl LocationSelection {
    pub fn select_country(&mut self, country: &str) {
        self.country = country.to_string();
        self.state.clear();
        self.city.clear();
    }

    pub fn select_state(&mut self, state: &str) {
        self.state = state.to_string();
        self.city.clear();
    }

    pub fn select_city(&mut self, city: &str) {
        self.city = city.to_string();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Directory lists fetched so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationCatalog {
    countries: Option<Vec<String>>,
    states: HashMap<String, Vec<String>>,
    cities: HashMap<String, Vec<String>>,
}

/// Options valid for one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationOptions<'a> {
    pub countries: &'a [String],
    pub states: &'a [String],
    pub cities: &'a [String],
}

fn listed<'a>(map: &'a HashMap<String, Vec<String>>, key: &str) -> &'a [String] {
    if key.is_empty() {
        return &[];
    }
    map.get(key).map(Vec::as_slice).unwrap_or(&[])
}

impl LocationCatalog {
    pub fn options_for(&self, selection: &LocationSelection) -> LocationOptions<'_> {
        LocationOptions {
            countries: self.countries.as_deref().unwrap_or(&[]),
            states: listed(&self.states, &selection.country),
            cities: listed(&self.cities, &selection.state),
        }
    }

    pub fn has_countries(&self) -> bool {
        self.countries.is_some()
    }

    pub fn has_states(&self, country: &str) -> bool {
        self.states.contains_key(country)
    }

    pub fn has_cities(&self, state: &str) -> bool {
        self.cities.contains_key(state)
    }

    fn insert(&mut self, data: LocationData) {
        match data {
            LocationData::Credential(_) => {}
            LocationData::Countries(names) => self.countries = Some(names),
            LocationData::States { country, names } => {
                self.states.insert(country, names);
            }
            LocationData::Cities { state, names } => {
                self.cities.insert(state, names);
            }
        }
    }
}

/// A directory request the cascade needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationFetch {
    Credential,
    Countries { credential: String },
    States { credential: String, country: String },
    Cities { credential: String, state: String },
}

/// The answer to a [`LocationFetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationData {
    Credential(String),
    Countries(Vec<String>),
    States { country: String, names: Vec<String> },
    Cities { state: String, names: Vec<String> },
}

impl LocationFetch {
    pub async fn run<D: Directory>(self, directory: &D) -> Result<LocationData, ApiError> {
        match self {
            LocationFetch::Credential => directory.access_token().await.map(LocationData::Credential),
            LocationFetch::Countries { credential } => {
                directory.countries(&credential).await.map(LocationData::Countries)
            }
            LocationFetch::States { credential, country } => {
                let names = directory.states(&credential, &country).await?;
                Ok(LocationData::States { country, names })
            }
            LocationFetch::Cities { credential, state } => {
                let names = directory.cities(&credential, &state).await?;
                Ok(LocationData::Cities { state, names })
            }
        }
    }
}

/// Selection plus catalog plus the directory credential.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationCascade {
    credential: Option<String>,
    catalog: LocationCatalog,
    selection: LocationSelection,
    notice: Option<&'static str>,
}

impl LocationCascade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &LocationSelection {
        &self.selection
    }

    pub fn options(&self) -> LocationOptions<'_> {
        self.catalog.options_for(&self.selection)
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Set while the last directory request failed.
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Record a failed fetch. Options already fetched stay in place.
    pub fn fail(&mut self, fetch: &LocationFetch, err: &ApiError) {
        match fetch {
            LocationFetch::Credential => tracing::error!(
                "Directory credential unavailable (check [directory] in roomly.toml): {}",
                err
            ),
            _ => tracing::error!("Error fetching locations: {}", err),
        }
        self.notice = Some(LOCATIONS_UNAVAILABLE);
    }

    /// First request on mount.
    pub fn start(&self) -> Option<LocationFetch> {
        match self.credential {
            None => Some(LocationFetch::Credential),
            Some(_) => self.countries_fetch(),
        }
    }

    pub fn select_country(&mut self, country: &str) -> Option<LocationFetch> {
        self.selection.select_country(country);
        self.states_fetch()
    }

    pub fn select_state(&mut self, state: &str) -> Option<LocationFetch> {
        self.selection.select_state(state);
        self.cities_fetch()
    }

    pub fn select_city(&mut self, city: &str) {
        self.selection.select_city(city);
    }

    /// Forget the picks; fetched lists and the credential are kept.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Record a fetch result. Returns the follow-up fetch, if one is now possible.
    pub fn apply(&mut self, data: LocationData) -> Option<LocationFetch> {
        self.notice = None;
        match data {
            LocationData::Credential(credential) => {
                self.credential = Some(credential);
                self.countries_fetch()
                    .or_else(|| self.states_fetch())
                    .or_else(|| self.cities_fetch())
            }
            data => {
                self.catalog.insert(data);
                None
            }
        }
    }

    fn countries_fetch(&self) -> Option<LocationFetch> {
        let credential = self.credential.clone()?;
        (!self.catalog.has_countries()).then_some(LocationFetch::Countries { credential })
    }

    fn states_fetch(&self) -> Option<LocationFetch> {
        let credential = self.credential.clone()?;
        let country = &self.selection.country;
        if country.is_empty() || self.catalog.has_states(country) {
            return None;
        }
        Some(LocationFetch::States {
            credential,
            country: country.clone(),
        })
    }

    fn cities_fetch(&self) -> Option<LocationFetch> {
        let credential = self.credential.clone()?;
        let state = &self.selection.state;
        if state.is_empty() || self.catalog.has_cities(state) {
            return None;
        }
        Some(LocationFetch::Cities {
            credential,
            state: state.clone(),
        })
    }

    /// Run `fetch` and every follow-up it unlocks, applying each result.
    ///
    /// A directory failure goes through [`fail`](Self::fail) and stops the chain.
    pub async fn drive<D: Directory>(&mut self, directory: &D, fetch: Option<LocationFetch>) {
        let mut next = fetch;
        while let Some(fetch) = next.take() {
            match fetch.clone().run(directory).await {
                Ok(data) => next = self.apply(data),
                Err(e) => self.fail(&fetch, &e),
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Directory with a fixed two-country world that records every call.
    #[derive(Default)]
    pub(crate) struct FakeDirectory {
        pub calls: RefCell<Vec<String>>,
        pub fail_states: bool,
        pub fail_token: bool,
    }

    impl FakeDirectory {
        fn log(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    impl Directory for FakeDirectory {
        async fn access_token(&self) -> Result<String, ApiError> {
            self.log("token".to_string());
            if self.fail_token {
                return Err(ApiError::Server {
                    status: 401,
                    message: Some("Invalid api-token".to_string()),
                });
            }
            Ok("cred".to_string())
        }

        async fn countries(&self, credential: &str) -> Result<Vec<String>, ApiError> {
            self.log(format!("countries {credential}"));
            Ok(names(&["France", "United States"]))
        }

        async fn states(&self, _credential: &str, country: &str) -> Result<Vec<String>, ApiError> {
            self.log(format!("states {country}"));
            if self.fail_states {
                return Err(ApiError::Transport("offline".to_string()));
            }
            Ok(match country {
                "France" => names(&["Bretagne", "Occitanie"]),
                _ => names(&["Texas", "Utah"]),
            })
        }

        async fn cities(&self, _credential: &str, state: &str) -> Result<Vec<String>, ApiError> {
            self.log(format!("cities {state}"));
            Ok(match state {
                "Texas" => names(&["Austin", "Dallas"]),
                _ => names(&["Somewhere"]),
            })
        }
    }

    async fn mounted(directory: &FakeDirectory) -> LocationCascade {
        let mut cascade = LocationCascade::new();
        let fetch = cascade.start();
        cascade.drive(directory, fetch).await;
        cascade
    }

    #[tokio::test]
    async fn test_mount_acquires_credential_then_countries() {
        let directory = FakeDirectory::default();
        let cascade = mounted(&directory).await;
        assert_eq!(directory.calls(), vec!["token", "countries cred"]);
        assert!(cascade.has_credential());
        assert_eq!(cascade.options().countries, names(&["France", "United States"]));
        assert!(cascade.options().states.is_empty());
        assert_eq!(cascade.start(), None);
        assert_eq!(cascade.notice(), None);
    }

    #[tokio::test]
    async fn test_country_change_resets_and_fetches_states() {
        let directory = FakeDirectory::default();
        let mut cascade = mounted(&directory).await;

        let fetch = cascade.select_country("United States");
        assert_eq!(
            fetch,
            Some(LocationFetch::States {
                credential: "cred".to_string(),
                country: "United States".to_string(),
            })
        );
        cascade.drive(&directory, fetch).await;
        let fetch = cascade.select_state("Texas");
        cascade.drive(&directory, fetch).await;
        cascade.select_city("Austin");
        assert_eq!(cascade.options().cities, names(&["Austin", "Dallas"]));

        // Changing the country drops the dependent picks and their options
        let fetch = cascade.select_country("France");
        assert_eq!(cascade.selection().state, "");
        assert_eq!(cascade.selection().city, "");
        assert!(cascade.options().states.is_empty());
        assert!(cascade.options().cities.is_empty());
        cascade.drive(&directory, fetch).await;
        assert_eq!(cascade.options().states, names(&["Bretagne", "Occitanie"]));

        // Cached lists are not fetched again
        assert_eq!(cascade.select_country("United States"), None);
        assert_eq!(cascade.options().states, names(&["Texas", "Utah"]));
    }

    #[tokio::test]
    async fn test_city_change_keeps_country_and_state() {
        let directory = FakeDirectory::default();
        let mut cascade = mounted(&directory).await;
        let fetch = cascade.select_country("United States");
        cascade.drive(&directory, fetch).await;
        let fetch = cascade.select_state("Utah");
        cascade.drive(&directory, fetch).await;

        cascade.select_city("Somewhere");
        assert_eq!(
            cascade.selection(),
            &LocationSelection {
                country: "United States".to_string(),
                state: "Utah".to_string(),
                city: "Somewhere".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_prerequisites_skip_fetches() {
        let mut cascade = LocationCascade::new();
        // No credential yet
        assert_eq!(cascade.select_country("France"), None);
        assert_eq!(cascade.select_state("Bretagne"), None);

        let mut cascade = LocationCascade::new();
        cascade.apply(LocationData::Credential("cred".to_string()));
        cascade.apply(LocationData::Countries(names(&["France"])));
        // Empty parent selection
        assert_eq!(cascade.select_country(""), None);
        assert_eq!(cascade.select_state(""), None);
    }

    #[test]
    fn test_credential_arriving_late_fetches_for_current_pick() {
        let mut cascade = LocationCascade::new();
        cascade.apply(LocationData::Countries(names(&["France"])));
        assert_eq!(cascade.select_country("France"), None);

        let next = cascade.apply(LocationData::Credential("cred".to_string()));
        assert_eq!(
            next,
            Some(LocationFetch::States {
                credential: "cred".to_string(),
                country: "France".to_string(),
            })
        );
    }

    #[test]
    fn test_stale_states_are_not_shown() {
        let mut cascade = LocationCascade::new();
        cascade.apply(LocationData::Credential("cred".to_string()));
        cascade.select_country("France");
        cascade.select_country("United States");

        // Response for France lands after the user moved on
        cascade.apply(LocationData::States {
            country: "France".to_string(),
            names: names(&["Bretagne"]),
        });
        assert!(cascade.options().states.is_empty());
    }

    #[tokio::test]
    async fn test_directory_failure_keeps_form_usable() {
        let directory = FakeDirectory {
            fail_states: true,
            ..Default::default()
        };
        let mut cascade = mounted(&directory).await;
        let fetch = cascade.select_country("France");
        cascade.drive(&directory, fetch).await;

        assert_eq!(cascade.selection().country, "France");
        assert!(cascade.options().states.is_empty());
        assert_eq!(cascade.options().countries.len(), 2);
        assert_eq!(cascade.notice(), Some(LOCATIONS_UNAVAILABLE));
    }

    #[tokio::test]
    async fn test_missing_credential_is_reported() {
        let directory = FakeDirectory {
            fail_token: true,
            ..Default::default()
        };
        let mut cascade = mounted(&directory).await;
        assert_eq!(directory.calls(), vec!["token"]);
        assert!(!cascade.has_credential());
        assert!(cascade.options().countries.is_empty());
        assert_eq!(cascade.notice(), Some(LOCATIONS_UNAVAILABLE));

        // A later answer clears the notice
        cascade.apply(LocationData::Credential("cred".to_string()));
        assert_eq!(cascade.notice(), None);
    }
}
