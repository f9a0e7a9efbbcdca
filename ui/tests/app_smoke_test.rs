//! End-to-end smoke tests: run the full app against a mock backend and
//! check the pages render their data.

mod common;

use crate::common::{DEFAULT_NETWORK_WAIT_MS, TestCtx, yield_wait_for_network};
use kittest::Queryable;

#[tokio::test]
async fn test_books_page_shows_fetched_rows() {
    let mut ctx = TestCtx::new_app_with_data().await;
    let harness = ctx.harness_mut();

    // First frames issue the auto-fetch.
    for _ in 0..10 {
        harness.step();
    }
    yield_wait_for_network(DEFAULT_NETWORK_WAIT_MS).await;
    for _ in 0..10 {
        harness.step();
    }

    assert!(
        harness.query_by_label_contains("Dune").is_some(),
        "book title should appear in the table"
    );
    assert!(
        harness.query_by_label_contains("Frank Herbert").is_some(),
        "author id column should show the author name"
    );
}

#[tokio::test]
async fn test_empty_books_page_shows_placeholder() {
    let mut ctx = TestCtx::new_app().await;
    let harness = ctx.harness_mut();

    for _ in 0..10 {
        harness.step();
    }
    yield_wait_for_network(DEFAULT_NETWORK_WAIT_MS).await;
    for _ in 0..10 {
        harness.step();
    }

    assert!(
        harness.query_by_label_contains("No books found.").is_some(),
        "empty list should show the placeholder"
    );
}

#[tokio::test]
async fn test_navigation_switches_pages() {
    let mut ctx = TestCtx::new_app_with_data().await;
    let harness = ctx.harness_mut();

    for _ in 0..10 {
        harness.step();
    }
    yield_wait_for_network(DEFAULT_NETWORK_WAIT_MS).await;
    for _ in 0..5 {
        harness.step();
    }

    harness.get_by_label("Authors").click();
    for _ in 0..10 {
        harness.step();
    }
    yield_wait_for_network(DEFAULT_NETWORK_WAIT_MS).await;
    for _ in 0..10 {
        harness.step();
    }

    assert!(
        harness
            .query_by_label_contains("Ursula K. Le Guin")
            .is_some(),
        "authors table should render after navigation"
    );

    harness.get_by_label("Raw Query").click();
    for _ in 0..5 {
        harness.step();
    }
    assert!(
        harness.query_by_label_contains("Execute").is_some(),
        "raw query page should show the Execute button"
    );
}

#[tokio::test]
async fn test_borrows_page_renders_history() {
    let mut ctx = TestCtx::new_app_with_data().await;
    let harness = ctx.harness_mut();

    for _ in 0..10 {
        harness.step();
    }
    yield_wait_for_network(DEFAULT_NETWORK_WAIT_MS).await;
    for _ in 0..5 {
        harness.step();
    }

    harness.get_by_label("Borrows").click();
    for _ in 0..10 {
        harness.step();
    }
    yield_wait_for_network(DEFAULT_NETWORK_WAIT_MS).await;
    for _ in 0..10 {
        harness.step();
    }

    assert!(
        harness
            .query_by_label_contains("2026-02-01T09:00:00Z")
            .is_some(),
        "borrow history should show the borrowed_at value"
    );
}
