use std::sync::Arc;
use std::time::Duration;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use crate::MockClock;
use crate::NotificationMessage;
use crate::NotificationRegistry;
use crate::NotificationType;

fn info(text: &str) -> NotificationMessage {
    NotificationMessage::new(NotificationType::Info, text)
}

/// # Case 1: recorders see placement attempts
///
/// Every attempt is captured, including those the parent suppressed, so
/// the recorded count is independent of how many entries went live.
#[test]
fn test_records_every_attempt() {
    let now = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let mut clock = MockClock::new();
    clock.expect_now().return_const::<SystemTime>(now);
    let registry = NotificationRegistry::with_clock(Arc::new(clock));

    let recorder = registry.create_recorder();
    recorder.place(info("live"));
    recorder.place(NotificationMessage::new(NotificationType::None, "suppressed"));
    recorder.place(
        NotificationMessage::builder(NotificationType::Info, "pre-expired")
            .expiration(now - Duration::from_secs(1))
            .build(),
    );

    let recorded = recorder.recorded();
    assert_eq!(recorded.len(), 3);
    assert_eq!(recorded[0].message(), "live");
    assert_eq!(recorded[1].message(), "suppressed");
    assert_eq!(recorded[2].message(), "pre-expired");

    // Only the first attempt produced a live entry.
    assert_eq!(registry.len().expect("registry is live"), 1);
}

/// # Case 2: forwarding mirrors the parent result
#[test]
fn test_forwarding_returns_parent_placement() {
    let registry = NotificationRegistry::new();
    let recorder = registry.create_recorder();

    let placement = recorder.place(info("live")).expect("valid placement");
    assert!(placement.is_live());

    assert!(recorder
        .place(NotificationMessage::new(NotificationType::None, "suppressed"))
        .is_none());
}

/// # Case 3: reset clears the history, not the parent
#[test]
fn test_reset_leaves_parent_untouched() {
    let registry = NotificationRegistry::new();
    let recorder = registry.create_recorder();

    recorder.place(info("a"));
    recorder.place(info("b"));
    assert_eq!(recorder.recorded().len(), 2);

    recorder.reset();
    assert!(recorder.recorded().is_empty());
    assert_eq!(registry.len().expect("registry is live"), 2);
}

/// # Case 4: attempts into a disposed parent are still recorded
#[test]
fn test_records_after_parent_dispose() {
    let registry = NotificationRegistry::new();
    let recorder = registry.create_recorder();

    registry.dispose();

    assert!(recorder.place(info("late")).is_none());
    assert_eq!(recorder.recorded().len(), 1);
}

/// # Case 5: recorded snapshot is detached
#[test]
fn test_recorded_is_a_snapshot() {
    let registry = NotificationRegistry::new();
    let recorder = registry.create_recorder();

    recorder.place(info("a"));
    let snapshot = recorder.recorded();

    recorder.place(info("b"));
    assert_eq!(snapshot.len(), 1);
    assert_eq!(recorder.recorded().len(), 2);
}
