//! End-to-end review table workflows: selection, dialog, dispatch, outcome.

use crate::entity::fixtures::entities;
use crate::testing::RecordingGateway;
use crate::{
    CheckboxState, DispatchBlocked, EntityId, EntityKind, ModerationError, RequestStatus,
    ReviewTableState, Selection, TableView,
};

fn id(raw: &str) -> EntityId {
    EntityId::from(raw)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn partial_selection_of_three_rows() {
    let rows = entities(&["1", "2", "3"]);
    let mut state = ReviewTableState::new(EntityKind::Vendor);

    state.toggle_one(&id("1"));
    state.toggle_one(&id("2"));

    assert!(state.is_partially_selected(&rows));
    assert!(!state.is_all_selected(&rows));
}

#[tokio::test]
async fn approve_all_fires_once_and_clears_selection() {
    let rows = entities(&["1", "2", "3"]);
    let gateway = RecordingGateway::new();
    let mut state = ReviewTableState::new(EntityKind::Vendor);

    state.toggle_all(&rows);
    let request = state.begin_approve(&rows).unwrap();
    let outcome = request.execute(&gateway).await;
    state.complete(request.ticket, outcome);

    let calls = gateway.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].ids, vec![id("1"), id("2"), id("3")]);
    assert_eq!(calls[0].reason, None);
    assert!(state.selection().is_empty());
}

#[tokio::test]
async fn reject_single_row_with_reason() {
    let rows = entities(&["1", "2", "3"]);
    let gateway = RecordingGateway::new();
    let mut state = ReviewTableState::new(EntityKind::Company);

    state.toggle_one(&id("3"));
    state.open_rejection().unwrap();
    state.update_rejection_draft("duplicate listing");
    assert!(state.can_confirm_rejection());

    let request = state.begin_reject(&rows).unwrap();
    let outcome = request.execute(&gateway).await;
    state.complete(request.ticket, outcome);

    let calls = gateway.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].kind, EntityKind::Company);
    assert_eq!(calls[0].ids, vec![id("3")]);
    assert_eq!(calls[0].reason.as_deref(), Some("duplicate listing"));
    assert!(!state.rejection().is_open());
    assert_eq!(state.rejection().draft(), "");
    assert!(state.selection().is_empty());
}

#[test]
fn empty_collection_renders_inert_select_all() {
    let mut state = ReviewTableState::new(EntityKind::Vendor);
    let rows = entities(&[]);

    state.toggle_all(&rows);
    let view = TableView::build(EntityKind::Vendor, &rows, &state);

    assert!(view.select_all_inert);
    assert_eq!(view.header, CheckboxState::Unchecked);
    assert_eq!(view.selected_label, "0 vendors");
    assert!(state.selection().is_empty());
}

#[tokio::test]
async fn whitespace_reason_never_dispatches() {
    let rows = entities(&["1"]);
    let gateway = RecordingGateway::new();
    let mut state = ReviewTableState::new(EntityKind::Vendor);

    state.toggle_one(&id("1"));
    state.open_rejection().unwrap();
    state.update_rejection_draft("     ");

    assert!(!state.can_confirm_rejection());
    assert_eq!(state.begin_reject(&rows), Err(DispatchBlocked::EmptyReason));
    assert!(gateway.calls().is_empty());
    assert!(state.rejection().is_open());
    assert_eq!(state.status(), &RequestStatus::Idle);
}

// =============================================================================
// Failure and retry
// =============================================================================

#[tokio::test]
async fn failed_approve_can_be_retried_over_same_rows() {
    let rows = entities(&["1", "2", "3"]);
    let gateway = RecordingGateway::new();
    gateway.fail_next(ModerationError::network("connection reset"));
    let mut state = ReviewTableState::new(EntityKind::Vendor);

    state.toggle_one(&id("2"));
    state.toggle_one(&id("3"));

    let first = state.begin_approve(&rows).unwrap();
    let outcome = first.execute(&gateway).await;
    state.complete(first.ticket, outcome);

    assert!(state.status().error().is_some_and(ModerationError::is_retryable));
    assert_eq!(state.selection().len(), 2);

    let retry = state.retry(&rows).unwrap();
    let outcome = retry.execute(&gateway).await;
    state.complete(retry.ticket, outcome);

    let calls = gateway.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].ids, calls[1].ids);
    assert!(state.selection().is_empty());
    assert!(matches!(state.status(), RequestStatus::Succeeded { count: 2, .. }));
}

#[tokio::test]
async fn failed_reject_keeps_reason_for_retry() {
    let rows = entities(&["1"]);
    let gateway = RecordingGateway::new();
    gateway.fail_next(ModerationError::from_status(503, "maintenance"));
    let mut state = ReviewTableState::new(EntityKind::Company);

    state.toggle_all(&rows);
    state.open_rejection().unwrap();
    state.update_rejection_draft("unverifiable address");

    let request = state.begin_reject(&rows).unwrap();
    let outcome = request.execute(&gateway).await;
    state.complete(request.ticket, outcome);
    assert!(state.rejection().is_open());

    let retry = state.retry(&rows).unwrap();
    let outcome = retry.execute(&gateway).await;
    state.complete(retry.ticket, outcome);

    let calls = gateway.calls();
    assert_eq!(calls[1].reason.as_deref(), Some("unverifiable address"));
    assert!(!state.rejection().is_open());
}

#[tokio::test]
async fn retry_after_deselect_sends_remaining_rows() {
    let rows = entities(&["1", "2", "3"]);
    let gateway = RecordingGateway::new();
    gateway.fail_next(ModerationError::network("connection reset"));
    let mut state = ReviewTableState::new(EntityKind::Vendor);

    state.toggle_one(&id("1"));
    state.toggle_one(&id("3"));
    let first = state.begin_approve(&rows).unwrap();
    let outcome = first.execute(&gateway).await;
    state.complete(first.ticket, outcome);

    state.toggle_one(&id("1"));
    let retry = state.retry(&rows).unwrap();
    let outcome = retry.execute(&gateway).await;
    state.complete(retry.ticket, outcome);

    let calls = gateway.calls();
    assert_eq!(calls[0].ids, vec![id("1"), id("3")]);
    assert_eq!(calls[1].ids, vec![id("3")]);
    assert!(matches!(state.status(), RequestStatus::Succeeded { count: 1, .. }));
}

#[test]
fn state_survives_json_round_trip_mid_request() {
    let rows = entities(&["1", "2"]);
    let mut state = ReviewTableState::new(EntityKind::Vendor);
    state.toggle_all(&rows);
    state.open_rejection().unwrap();
    state.update_rejection_draft("expired licence");
    let request = state.begin_reject(&rows).unwrap();

    let json = serde_json::to_string(&state).unwrap();
    let mut restored: ReviewTableState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, state);
    assert!(restored.complete(request.ticket, Ok(())));
}

// =============================================================================
// Properties
// =============================================================================

const ROUNDS: usize = 200;

fn random_ids(rng: &mut fastrand::Rng) -> Vec<EntityId> {
    let len = rng.usize(0..12);
    (0..len).map(|n| id(&format!("e{n}"))).collect()
}

fn random_subset(rng: &mut fastrand::Rng, ids: &[EntityId]) -> Selection {
    let mut selection = Selection::new();
    for item in ids {
        if rng.bool() {
            selection.toggle_one(item);
        }
    }
    selection
}

#[test]
fn toggle_all_twice_restores_all_or_none() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..ROUNDS {
        let collection = random_ids(&mut rng);

        let mut none = Selection::new();
        none.toggle_all(&collection);
        none.toggle_all(&collection);
        assert!(none.is_empty());

        let mut all = Selection::new();
        all.toggle_all(&collection);
        let snapshot = all.clone();
        all.toggle_all(&collection);
        all.toggle_all(&collection);
        assert_eq!(all, snapshot);
    }
}

#[test]
fn toggle_all_always_converges_to_all_or_none() {
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..ROUNDS {
        let collection = random_ids(&mut rng);
        let mut selection = random_subset(&mut rng, &collection);
        let was_all = selection.is_all_selected(&collection);

        selection.toggle_all(&collection);
        if was_all {
            assert!(selection.is_empty());
        } else {
            assert_eq!(selection.len(), collection.len());
        }
    }
}

#[test]
fn toggle_one_is_an_involution() {
    let mut rng = fastrand::Rng::with_seed(13);
    for _ in 0..ROUNDS {
        let collection = random_ids(&mut rng);
        let mut selection = random_subset(&mut rng, &collection);
        let before = selection.clone();
        let target = id(&format!("e{}", rng.usize(0..16)));

        selection.toggle_one(&target);
        selection.toggle_one(&target);
        assert_eq!(selection, before);
    }
}

#[test]
fn all_selected_iff_every_id_selected() {
    let mut rng = fastrand::Rng::with_seed(17);
    for _ in 0..ROUNDS {
        let collection = random_ids(&mut rng);
        let selection = random_subset(&mut rng, &collection);

        let expected = !collection.is_empty()
            && selection.len() == collection.len()
            && collection.iter().all(|item| selection.contains(item));
        assert_eq!(selection.is_all_selected(&collection), expected);
    }
}

#[test]
fn blank_reasons_are_never_confirmable() {
    let mut rng = fastrand::Rng::with_seed(19);
    let blanks = [' ', '\t', '\n', '\r', '\u{a0}', '\u{2003}'];
    for _ in 0..ROUNDS {
        let len = rng.usize(0..10);
        let reason: String = (0..len)
            .map(|_| blanks[rng.usize(0..blanks.len())])
            .collect();

        let mut state = ReviewTableState::new(EntityKind::Vendor);
        state.toggle_one(&id("1"));
        state.open_rejection().unwrap();
        state.update_rejection_draft(reason.clone());
        assert!(!state.can_confirm_rejection(), "{reason:?} was confirmable");
    }
}
