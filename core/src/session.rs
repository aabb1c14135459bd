//! Session state: the last lookup result and the active selection.
//!
//! RULE: only `replace_results`, `set_selection` and `fail` mutate the
//! session. A failed lookup always leaves an empty result list, no
//! selection and one display message.

use crate::{
    client::{ProfileFetcher, ProfileTransport},
    command::SessionCommand,
    error::ProfileError,
    profile::CustomerProfileRecord,
    types::CustomerId,
    view::ProfileView,
};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct ProfileSession {
    customers: Vec<CustomerProfileRecord>,
    selected: Option<usize>,
    error: Option<String>,
}

impl ProfileSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customers(&self) -> &[CustomerProfileRecord] {
        &self.customers
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The record currently on display.
    pub fn active(&self) -> Option<&CustomerProfileRecord> {
        self.customers.get(self.selected?)
    }

    pub fn active_view(&self) -> Option<ProfileView> {
        self.active().map(ProfileView::build)
    }

    /// Run one lookup and fold its outcome into the session.
    pub fn search<T: ProfileTransport>(&mut self, fetcher: &ProfileFetcher<T>, raw: &str) {
        self.error = None;
        match fetcher.fetch_profiles(raw) {
            Ok(records) => self.replace_results(records),
            Err(e) => self.fail(&e),
        }
    }

    /// Swap in a new result list wholesale; the first record becomes active.
    pub fn replace_results(&mut self, records: Vec<CustomerProfileRecord>) {
        warn_on_duplicate_ids(&records);
        self.selected = if records.is_empty() { None } else { Some(0) };
        self.customers = records;
        self.error = None;
    }

    /// Make the first record with `customer_id` active. Unknown ids leave
    /// the selection untouched and return `false`.
    pub fn set_selection(&mut self, customer_id: &str) -> bool {
        match self
            .customers
            .iter()
            .position(|c| c.customer_id == customer_id)
        {
            Some(index) => {
                log::debug!("selected customer {customer_id}");
                self.selected = Some(index);
                true
            }
            None => {
                log::warn!("select ignored, {customer_id} is not in the current results");
                false
            }
        }
    }

    /// Discard results and selection, keep only the message.
    pub fn fail(&mut self, error: &ProfileError) {
        log::warn!("lookup failed: {error}");
        self.customers.clear();
        self.selected = None;
        self.error = Some(error.to_string());
    }

    /// Apply one command. `Quit` is the caller's business and is a no-op here.
    pub fn apply<T: ProfileTransport>(
        &mut self,
        command: &SessionCommand,
        fetcher: &ProfileFetcher<T>,
    ) {
        match command {
            SessionCommand::Search { customer_ids } => self.search(fetcher, customer_ids),
            SessionCommand::Select { customer_id } => {
                self.set_selection(customer_id);
            }
            SessionCommand::GetState | SessionCommand::Quit => {}
        }
    }

    /// Everything a UI host needs to draw the page.
    pub fn state(&self) -> SessionState {
        let selected_id = self.active().map(|c| c.customer_id.clone());
        let customers = self
            .customers
            .iter()
            .enumerate()
            .map(|(i, c)| CustomerPill {
                customer_id: c.customer_id.clone(),
                label: c.display_name().to_string(),
                selected: Some(i) == self.selected,
            })
            .collect();
        let empty_state = (self.customers.is_empty() && self.error.is_none()).then(|| EmptyState {
            title: "No Customer Selected".to_string(),
            message: "Search for a customer ID to view their 360° profile".to_string(),
        });

        SessionState {
            customers,
            selected_customer_id: selected_id,
            error: self.error.clone(),
            profile: self.active_view(),
            empty_state,
        }
    }
}

fn warn_on_duplicate_ids(records: &[CustomerProfileRecord]) {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.customer_id.as_str()) {
            log::warn!("duplicate customer_id in result set: {}", record.customer_id);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerPill {
    pub customer_id: CustomerId,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    pub customers: Vec<CustomerPill>,
    pub selected_customer_id: Option<CustomerId>,
    pub error: Option<String>,
    pub profile: Option<ProfileView>,
    pub empty_state: Option<EmptyState>,
}
