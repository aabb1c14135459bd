//! Session state: results, selection and error transitions.

use c360_core::{
    client::{ProfileFetcher, ProfileTransport},
    command::SessionCommand,
    error::{ProfileError, ProfileResult},
    profile::{CustomerQuery, ProfileResponse},
    session::ProfileSession,
};
use std::cell::Cell;

// ── Helpers ────────────────────────────────────────────────────────

/// Serves the fixture on the first call and an empty result afterwards.
struct FixtureThenEmpty {
    calls: Cell<usize>,
}

impl ProfileTransport for FixtureThenEmpty {
    fn post_customers(&self, _query: &CustomerQuery) -> ProfileResult<ProfileResponse> {
        let n = self.calls.get();
        self.calls.set(n + 1);
        if n == 0 {
            Ok(serde_json::from_str(include_str!("fixtures/customer_profiles.json"))?)
        } else {
            Ok(ProfileResponse {
                success: true,
                data: Vec::new(),
                message: None,
            })
        }
    }
}

struct Failing;

impl ProfileTransport for Failing {
    fn post_customers(&self, _query: &CustomerQuery) -> ProfileResult<ProfileResponse> {
        Err(ProfileError::transport(Some(500), None))
    }
}

fn fetcher() -> ProfileFetcher<FixtureThenEmpty> {
    ProfileFetcher::new(FixtureThenEmpty {
        calls: Cell::new(0),
    })
}

fn searched_session() -> (ProfileSession, ProfileFetcher<FixtureThenEmpty>) {
    let fetcher = fetcher();
    let mut session = ProfileSession::new();
    session.search(&fetcher, "CUST0000001, CUST0000002");
    (session, fetcher)
}

// ── Tests ──────────────────────────────────────────────────────────

/// A fresh session shows the empty state and nothing else.
#[test]
fn new_session_is_empty() {
    let state = ProfileSession::new().state();
    assert!(state.customers.is_empty());
    assert!(state.selected_customer_id.is_none());
    assert!(state.error.is_none());
    assert!(state.profile.is_none());
    let empty = state.empty_state.expect("empty state expected");
    assert_eq!(empty.title, "No Customer Selected");
    assert_eq!(empty.message, "Search for a customer ID to view their 360° profile");
}

/// A successful search selects the first record and lists every result.
#[test]
fn search_selects_first_result() {
    let (session, _) = searched_session();
    let state = session.state();

    assert_eq!(state.selected_customer_id.as_deref(), Some("CUST0000001"));
    let labels: Vec<&str> = state.customers.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Budi Santoso", "Siti Rahmawati"]);
    assert!(state.customers[0].selected);
    assert!(!state.customers[1].selected);
    assert!(state.empty_state.is_none());
    assert_eq!(
        state.profile.map(|p| p.customer_id).as_deref(),
        Some("CUST0000001")
    );
}

#[test]
fn selection_switches_active_profile() {
    let (mut session, _) = searched_session();

    assert!(session.set_selection("CUST0000002"));
    assert_eq!(
        session.active().map(|c| c.customer_id.as_str()),
        Some("CUST0000002")
    );
    let view = session.active_view().unwrap();
    assert_eq!(view.header.full_name, "Siti Rahmawati");
}

/// Unknown ids leave the current selection in place.
#[test]
fn unknown_selection_is_ignored() {
    let (mut session, _) = searched_session();
    session.set_selection("CUST0000002");

    assert!(!session.set_selection("CUST0000099"));
    assert_eq!(
        session.active().map(|c| c.customer_id.as_str()),
        Some("CUST0000002")
    );
}

/// A failed search after a good one clears results and selection.
#[test]
fn not_found_clears_previous_results() {
    let (mut session, fetcher) = searched_session();
    session.set_selection("CUST0000002");

    session.search(&fetcher, "CUST0000042");

    let state = session.state();
    assert!(state.customers.is_empty());
    assert!(state.selected_customer_id.is_none());
    assert!(state.profile.is_none());
    assert_eq!(state.error.as_deref(), Some("No customers found"));
    assert!(state.empty_state.is_none(), "error replaces the empty state");
}

/// Validation failures skip the transport and also clear results.
#[test]
fn validation_error_never_calls_transport() {
    let (mut session, fetcher) = searched_session();

    session.search(&fetcher, " , ");

    assert_eq!(fetcher.transport().calls.get(), 1, "only the first search hit the service");
    assert_eq!(session.error(), Some("Please enter at least one customer ID"));
    assert!(session.customers().is_empty());
}

#[test]
fn transport_error_message_reaches_state() {
    let fetcher = ProfileFetcher::new(Failing);
    let mut session = ProfileSession::new();

    session.search(&fetcher, "CUST0000001");

    assert_eq!(session.error(), Some("Failed to fetch customer data"));
    assert!(session.active().is_none());
}

/// A later success wipes the previous error.
#[test]
fn success_after_failure_clears_error() {
    let mut session = ProfileSession::new();
    session.search(&ProfileFetcher::new(Failing), "CUST0000001");
    assert!(session.error().is_some());

    session.search(&fetcher(), "CUST0000001");
    assert!(session.error().is_none());
    assert_eq!(session.customers().len(), 2);
}

/// Commands decode from their line form and drive the same transitions.
#[test]
fn commands_drive_the_session() {
    let fetcher = fetcher();
    let mut session = ProfileSession::new();

    let search: SessionCommand =
        serde_json::from_str(r#"{"cmd":"search","customer_ids":"CUST0000001,CUST0000002"}"#)
            .unwrap();
    let select: SessionCommand =
        serde_json::from_str(r#"{"cmd":"select","customer_id":"CUST0000002"}"#).unwrap();
    let get_state: SessionCommand = serde_json::from_str(r#"{"cmd":"get_state"}"#).unwrap();

    session.apply(&search, &fetcher);
    session.apply(&select, &fetcher);
    session.apply(&get_state, &fetcher);

    assert_eq!(
        session.state().selected_customer_id.as_deref(),
        Some("CUST0000002")
    );
    assert_eq!(fetcher.transport().calls.get(), 1, "select and get_state stay local");
}

/// The snapshot serializes for UI hosts.
#[test]
fn state_serializes_to_json() {
    let (session, _) = searched_session();
    let json = serde_json::to_value(session.state()).unwrap();

    assert_eq!(json["selected_customer_id"], "CUST0000001");
    assert_eq!(json["customers"][1]["label"], "Siti Rahmawati");
    assert_eq!(json["profile"]["tabs"][1]["title"], "Accounts (3)");
    assert!(json["empty_state"].is_null());
}
