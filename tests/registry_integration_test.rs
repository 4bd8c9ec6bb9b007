use std::time::Duration;
use std::time::SystemTime;

use n_registry::NotificationMessage;
use n_registry::NotificationRegistry;
use n_registry::NotificationType;
use n_registry::UriFilter;
use tokio::time::sleep;

/// End-to-end flow from the crate surface: place an expirable warning,
/// watch it through the change signal, and observe its timer-driven
/// retirement.
#[tokio::test(start_paused = true)]
async fn test_expirable_warning_lifecycle() {
    let registry = NotificationRegistry::new();
    let mut listener = registry.subscribe();

    registry.place(
        NotificationMessage::builder(NotificationType::Warning, "low battery")
            .key("power")
            .expiration(SystemTime::now() + Duration::from_secs(5))
            .build(),
    );

    assert!(listener.changed().await);
    let visible = registry
        .notifications_by_key("power")
        .expect("registry is live");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].message(), "low battery");
    assert_eq!(visible[0].notification_type(), NotificationType::Warning);

    sleep(Duration::from_secs(6)).await;

    assert!(registry
        .notifications_by_key("power")
        .expect("registry is live")
        .is_empty());
    assert_eq!(listener.generation(), 2);
}

/// A scope and a recorder layered over the same parent: the recorder sees
/// all attempts, the scope's close removes only its own entries.
#[tokio::test]
async fn test_scope_and_recorder_composition() {
    let registry = NotificationRegistry::new();

    registry.place(
        NotificationMessage::builder(NotificationType::Success, "import finished")
            .key("import")
            .build(),
    );

    let recorder = registry.create_recorder();
    let scope = registry.create_scope();

    scope.place(NotificationMessage::new(NotificationType::Info, "step 1"));
    scope.place(NotificationMessage::new(NotificationType::Info, "step 2"));
    recorder.place(NotificationMessage::new(NotificationType::None, "attempt only"));
    recorder.place(NotificationMessage::new(NotificationType::Error, "step failed"));

    assert_eq!(registry.len().expect("registry is live"), 4);
    assert_eq!(recorder.recorded().len(), 2);

    scope.close();

    let remaining: Vec<String> = registry
        .notifications()
        .expect("registry is live")
        .iter()
        .map(|n| n.message().to_string())
        .collect();
    assert_eq!(remaining, vec!["step failed", "import finished"]);
    // The recorder history is independent of live state.
    assert_eq!(recorder.recorded().len(), 2);
}

/// Concurrent producers on a multi-threaded runtime: every placement lands
/// exactly once and disposal wins cleanly over concurrent mutation.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_placements() {
    let registry = NotificationRegistry::new();

    let mut handles = Vec::new();
    for producer in 0..4 {
        let registry = registry.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..25 {
                registry.place(
                    NotificationMessage::builder(
                        NotificationType::Info,
                        format!("p{producer}-{i}"),
                    )
                    .key("load")
                    .build(),
                );
            }
        }));
    }
    for handle in handles {
        handle.await.expect("producer task panicked");
    }

    let visible = registry
        .notifications_by_key("load")
        .expect("registry is live");
    assert_eq!(visible.len(), 100);

    registry.dispose();
    assert!(registry.place(NotificationMessage::new(NotificationType::Info, "late")).is_none());
    assert!(registry.notifications().is_err());
}

/// Routing a dismiss through the view while a uri-filtered query narrows
/// what the consumer sees.
#[tokio::test]
async fn test_view_dismiss_with_uri_filtering() {
    let registry = NotificationRegistry::new();

    registry.place(
        NotificationMessage::builder(NotificationType::Info, "visible on settings")
            .key("sync")
            .uri_filter(UriFilter::prefix("/settings").expect("valid path"))
            .build(),
    );
    registry.place(
        NotificationMessage::builder(NotificationType::Info, "dashboard only")
            .key("sync")
            .uri_filter(UriFilter::exact("/dashboard").expect("valid path"))
            .build(),
    );

    let on_settings = registry
        .notifications_for("sync", "/settings/network")
        .expect("registry is live");
    assert_eq!(on_settings.len(), 1);

    assert!(on_settings[0].dismiss());
    assert!(registry
        .notifications_for("sync", "/settings/network")
        .expect("registry is live")
        .is_empty());
    assert_eq!(registry.len().expect("registry is live"), 1);
}
