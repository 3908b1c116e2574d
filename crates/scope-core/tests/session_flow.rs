//! End-to-end session flows over the demo organization.

use pretty_assertions::assert_eq;
use scope_core::{SaveFilterRequest, ScopeError};
use scope_filter::{FilterChip, FilterError, UserId};
use scope_picker::SelectionState;
use scope_test_utils::{scenario_session, setup_test_session};
use std::time::Duration;

#[test]
fn sidebar_is_pruned_per_user() {
    let mut session = setup_test_session();
    assert_eq!(session.sidebar().len(), 25);
    assert_eq!(session.sidebar_expanded().len(), 4);

    session.users_mut().set_current(&UserId::from("3"));
    let ids: Vec<String> = session
        .sidebar()
        .iter()
        .map(|entry| entry.id().to_string())
        .collect();
    assert_eq!(ids, vec!["test-scenarios", "parent-child", "usm"]);

    session.users_mut().set_current(&UserId::from("4"));
    let sidebar = session.sidebar();
    assert_eq!(sidebar.len(), 10);
    assert!(sidebar.contains("automations"));
    assert!(!sidebar.contains("support"));
}

#[test]
fn picker_hides_personal_areas() {
    let session = setup_test_session();
    let picker = session.open_picker();

    assert_eq!(picker.entries().len(), 22);
    assert_eq!(picker.entries()[0].name(), "Entire organization");
    for hidden in ["personal", "favorites", "folder-1", "folder-2"] {
        assert!(!picker.is_listed(hidden), "{hidden} should be excluded");
    }
    assert!(picker.descendants_of("scenarios").is_empty());
}

#[test]
fn public_filter_scoped_through_picker() {
    let mut session = setup_test_session();
    let mut picker = session.open_picker();
    picker.toggle("demo");
    picker.toggle("documents");
    assert_eq!(picker.state("demo"), SelectionState::Selected);
    assert_eq!(picker.state("all-examples"), SelectionState::Partial);
    assert_eq!(picker.label(), "7 spaces");

    session.chips_mut().add(FilterChip::new("Responsible", "👤"));
    let saved = session
        .save_filter(SaveFilterRequest::public("Demo boards", picker.into_scope()))
        .unwrap();

    assert!(saved.highlight);
    assert_eq!(saved.chips.len(), 1);
    assert!(session.chips().is_empty());

    assert_eq!(session.filters_for("documents").public.len(), 1);
    assert_eq!(session.filters_for("funnel").public.len(), 1);
    assert!(session.filters_for("all-examples").public.is_empty());
    assert!(session.filters_for("legal").public.is_empty());
}

#[test]
fn commenter_may_not_publish() {
    let mut session = setup_test_session();
    session.users_mut().set_current(&UserId::from("5"));

    let mut picker = session.open_picker();
    picker.toggle("root");
    let result = session.save_filter(SaveFilterRequest::public("Everything", picker.into_scope()));
    assert!(matches!(
        result,
        Err(ScopeError::Filter(FilterError::PublicFilterForbidden { .. }))
    ));

    let private = session.save_filter(SaveFilterRequest::private("Mine")).unwrap();
    assert_eq!(session.filters_for("usm").personal, vec![private]);
}

#[test]
fn only_the_author_sees_private_filters() {
    let mut session = scenario_session();
    session.save_filter(SaveFilterRequest::private("Mine")).unwrap();

    session.users_mut().set_current(&UserId::from("2"));
    assert!(session.filters_for("eng").is_empty());
}

#[test]
fn public_filter_delete_is_author_only() {
    let mut session = scenario_session();
    let saved = session
        .save_filter(SaveFilterRequest::public("Eng", ["eng"].into_iter().collect()))
        .unwrap();

    session.users_mut().set_current(&UserId::from("2"));
    assert!(matches!(
        session.delete_filter(saved.id),
        Err(ScopeError::Filter(FilterError::NotPermitted { .. }))
    ));
    assert!(session.rename_filter(saved.id, "Taken").is_err());

    session.users_mut().set_current(&UserId::from("1"));
    session.rename_filter(saved.id, "Engineering").unwrap();
    let deleted = session.delete_filter(saved.id).unwrap();
    assert_eq!(deleted.name, "Engineering");
    assert!(matches!(
        session.delete_filter(saved.id),
        Err(ScopeError::Filter(FilterError::NotFound(_)))
    ));
}

#[tokio::test(start_paused = true)]
async fn highlight_clears_after_delay() {
    let mut session = scenario_session();
    let saved = session.save_filter(SaveFilterRequest::private("Mine")).unwrap();

    tokio::time::sleep(Duration::from_millis(2000)).await;
    assert!(session.library().get(saved.id).unwrap().highlight);

    tokio::time::sleep(Duration::from_millis(600)).await;
    tokio::task::yield_now().await;
    assert!(!session.library().get(saved.id).unwrap().highlight);
}

#[tokio::test(start_paused = true)]
async fn highlight_reset_after_delete_is_harmless() {
    let mut session = scenario_session();
    let saved = session.save_filter(SaveFilterRequest::private("Mine")).unwrap();
    session.delete_filter(saved.id).unwrap();

    tokio::time::sleep(Duration::from_millis(3000)).await;
    tokio::task::yield_now().await;
    assert!(session.library().is_empty());
}
