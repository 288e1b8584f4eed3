//! Badge polling tests against a stubbed API

mod support;

use std::time::Duration;

use inventory_console_client::services::poll;

#[tokio::test]
async fn test_pending_discrepancy_badge_follows_the_api() {
    let base = support::serve(vec![
        (200, r#"{"count":3}"#),
        (200, r#"{"count":5}"#),
    ]);
    let api = support::test_api(&base, "poll-pending");

    let poller = poll::pending_discrepancies(api, Duration::from_millis(20));
    tokio::time::sleep(Duration::from_millis(150)).await;

    // the badge tracks the newest successful fetch; later failed polls
    // (the stub has stopped) keep the previous value
    assert_eq!(poller.latest(), 5);
}

#[tokio::test]
async fn test_unread_badge_counts_only_unread_notifications() {
    let body = r#"[
        {"_id":"n1","type":"discrepancy","message":"Inward issue recorded","status":"unread"},
        {"_id":"n2","type":"inward","message":"Inward recorded","status":"read"},
        {"_id":"n3","type":"rejection","message":"Rejection recorded","status":"unread"}
    ]"#;
    let base = support::serve(vec![(200, body)]);
    let api = support::test_api(&base, "poll-unread");

    let poller = poll::unread_notifications(api, Duration::from_millis(20));
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(poller.latest(), 2);
}
