//! Tests for toast_host

use super::*;
use crate::scheduler::ManualClock;
use proptest::prelude::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn test_host() -> (ToastHost<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let host = ToastHost::with_clock(clock.clone(), ToastConfig::default());
    (host, clock)
}

/// Move the clock to `at` (since creation) and run due tasks
fn run_until(host: &mut ToastHost<ManualClock>, clock: &ManualClock, at: u64) {
    clock.set(ms(at));
    host.tick();
}

#[test]
fn test_container_created_lazily() {
    let (mut host, _clock) = test_host();
    assert_eq!(host.container(), None);

    host.notify_default("hello");

    let container = host.container().expect("container");
    assert!(host.tree().has_class(container, CONTAINER_CLASS));
    assert_eq!(host.tree().parent(container), Some(host.tree().body()));
}

#[test]
fn test_container_reused_across_calls() {
    let (mut host, _clock) = test_host();
    for i in 0..5 {
        host.notify_default(&format!("toast {}", i));
    }

    assert_eq!(host.tree().query_class(CONTAINER_CLASS).len(), 1);
    assert_eq!(host.toasts().len(), 5);
}

#[test]
fn test_toast_structure() {
    let (mut host, _clock) = test_host();
    let toast = host.notify("Item added", Severity::Success, ms(3000));
    let tree = host.tree();

    assert_eq!(
        tree.classes(toast),
        &["toast".to_string(), "toast-success".to_string()]
    );

    let children = tree.children(toast);
    assert_eq!(children.len(), 3);
    assert_eq!(tree.tag(children[0]), Some("i"));
    assert!(tree.has_class(children[0], "fa-check-circle"));
    assert_eq!(tree.text(children[1]), Some("Item added"));
    assert_eq!(tree.tag(children[2]), Some("button"));
    assert_eq!(host.close_control(toast), Some(children[2]));
    assert_eq!(host.message_of(toast), Some("Item added"));
    assert_eq!(host.severity_of(toast), Some(Severity::Success));
}

#[test]
fn test_toasts_append_in_call_order() {
    let (mut host, _clock) = test_host();
    let first = host.notify_default("first");
    let second = host.notify_default("second");
    let third = host.notify_default("third");

    assert_eq!(host.toasts(), vec![first, second, third]);
}

#[test]
fn test_each_severity_gets_marker_and_icon() {
    let (mut host, _clock) = test_host();
    for severity in Severity::ALL {
        let toast = host.notify("msg", severity, ms(3000));
        let icon = host.tree().children(toast)[0];
        assert!(host.tree().has_class(toast, severity.marker_class()));
        assert!(host.tree().has_class(icon, severity.icon_class()));
    }
}

#[test]
fn test_unknown_severity_falls_back_to_info() {
    let (mut host, _clock) = test_host();
    let toast = host.notify_str("hmm", "critical", None);
    let icon = host.tree().children(toast)[0];

    assert!(host.tree().has_class(toast, "toast-info"));
    assert!(!host.tree().has_class(toast, "toast-critical"));
    assert!(host.tree().has_class(icon, "fa-info-circle"));
}

#[test]
fn test_item_added_lifecycle() {
    let (mut host, clock) = test_host();
    let toast = host.notify_str("Item added", "success", None);
    assert!(!host.is_visible(toast));

    run_until(&mut host, &clock, 9);
    assert!(!host.is_visible(toast));

    run_until(&mut host, &clock, 10);
    assert!(host.is_visible(toast));

    run_until(&mut host, &clock, 2999);
    assert!(host.is_visible(toast));

    run_until(&mut host, &clock, 3000);
    assert!(!host.is_visible(toast));
    assert!(host.tree().is_connected(toast));

    run_until(&mut host, &clock, 3299);
    assert!(host.tree().is_connected(toast));

    run_until(&mut host, &clock, 3300);
    assert!(!host.tree().contains(toast));
    assert!(host.toasts().is_empty());
    assert_eq!(host.pending_tasks(), 0);
}

#[test]
fn test_late_tick_applies_everything_in_order() {
    let (mut host, clock) = test_host();
    let toast = host.notify("late", Severity::Info, ms(1000));

    // One tick long after everything is due still runs show, hide, remove
    clock.advance(ms(10_000));
    assert!(host.tick());
    assert!(!host.tree().contains(toast));
    assert_eq!(host.pending_tasks(), 0);
}

#[test]
fn test_manual_close_then_timers_are_noops() {
    let (mut host, clock) = test_host();
    let toast = host.notify_str("Bad input", "warning", Some(1000));
    let close = host.close_control(toast).unwrap();

    assert!(host.activate_close(close));
    assert!(!host.tree().contains(toast));
    assert!(host.toasts().is_empty());

    run_until(&mut host, &clock, 10);
    run_until(&mut host, &clock, 1000);
    run_until(&mut host, &clock, 1300);
    assert!(host.toasts().is_empty());
    assert_eq!(host.pending_tasks(), 0);
}

#[test]
fn test_close_during_exit_transition() {
    let (mut host, clock) = test_host();
    let toast = host.notify("closing", Severity::Error, ms(500));

    run_until(&mut host, &clock, 600);
    assert!(!host.is_visible(toast));
    assert!(host.dismiss(toast));
    assert!(!host.tick());

    run_until(&mut host, &clock, 800);
    assert!(!host.tree().contains(toast));
}

#[test]
fn test_activating_close_icon_dismisses() {
    let (mut host, _clock) = test_host();
    let toast = host.notify_default("with icon");
    let close = host.close_control(toast).unwrap();
    let close_icon = host.tree().children(close)[0];

    assert!(host.activate_close(close_icon));
    assert!(!host.tree().contains(toast));
}

#[test]
fn test_activate_close_ignores_non_close_elements() {
    let (mut host, _clock) = test_host();
    let toast = host.notify_default("keep me");
    let icon = host.tree().children(toast)[0];

    assert!(!host.activate_close(icon));
    assert!(!host.activate_close(toast));
    assert!(host.tree().contains(toast));
}

#[test]
fn test_dismiss_twice_is_safe() {
    let (mut host, _clock) = test_host();
    let toast = host.notify_default("once");

    assert!(host.dismiss(toast));
    assert!(!host.dismiss(toast));
}

#[test]
fn test_dismiss_refuses_container() {
    let (mut host, _clock) = test_host();
    host.notify_default("x");
    let container = host.container().unwrap();

    assert!(!host.dismiss(container));
    assert_eq!(host.container(), Some(container));
}

#[test]
fn test_dismiss_one_keeps_others() {
    let (mut host, clock) = test_host();
    let a = host.notify("a", Severity::Info, ms(1000));
    let b = host.notify("b", Severity::Info, ms(1000));
    let c = host.notify("c", Severity::Info, ms(1000));

    host.dismiss(b);
    assert_eq!(host.toasts(), vec![a, c]);

    run_until(&mut host, &clock, 1300);
    assert!(host.toasts().is_empty());
}

#[test]
fn test_zero_duration_still_removed() {
    let (mut host, clock) = test_host();
    let toast = host.notify("blink", Severity::Info, Duration::ZERO);

    run_until(&mut host, &clock, 0);
    assert!(!host.is_visible(toast));
    run_until(&mut host, &clock, 300);
    assert!(!host.tree().contains(toast));
}

#[test]
fn test_configured_delays_are_used() {
    let clock = ManualClock::new();
    let config = ToastConfig {
        enter_delay_ms: 50,
        exit_delay_ms: 100,
        duration_ms: 400,
        ..ToastConfig::default()
    };
    let mut host = ToastHost::with_clock(clock.clone(), config);
    let toast = host.show(&Notification::info("configured"));

    run_until(&mut host, &clock, 49);
    assert!(!host.is_visible(toast));
    run_until(&mut host, &clock, 50);
    assert!(host.is_visible(toast));
    run_until(&mut host, &clock, 400);
    assert!(!host.is_visible(toast));
    run_until(&mut host, &clock, 499);
    assert!(host.tree().contains(toast));
    run_until(&mut host, &clock, 500);
    assert!(!host.tree().contains(toast));
}

#[test]
fn test_next_deadline_tracks_schedule() {
    let (mut host, clock) = test_host();
    assert_eq!(host.next_deadline(), None);

    let start = clock.now();
    host.notify("d", Severity::Info, ms(1000));
    assert_eq!(host.next_deadline(), Some(start + ms(10)));

    run_until(&mut host, &clock, 10);
    assert_eq!(host.next_deadline(), Some(start + ms(1000)));

    run_until(&mut host, &clock, 1000);
    assert_eq!(host.next_deadline(), Some(start + ms(1300)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Whatever the durations and dismissals, the container stays unique,
    /// and once every deadline has passed no toast and no task remains.
    #[test]
    fn prop_all_toasts_eventually_removed(
        durations in prop::collection::vec(0u64..5000, 1..10),
        dismiss_mask in prop::collection::vec(any::<bool>(), 10)
    ) {
        let (mut host, clock) = test_host();
        let toasts: Vec<NodeId> = durations
            .iter()
            .map(|d| host.notify("p", Severity::Info, ms(*d)))
            .collect();

        for (toast, dismiss) in toasts.iter().zip(&dismiss_mask) {
            if *dismiss {
                prop_assert!(host.dismiss(*toast));
            }
        }

        for step in (0..=5400).step_by(100) {
            run_until(&mut host, &clock, step);
            prop_assert_eq!(host.tree().query_class(CONTAINER_CLASS).len(), 1);
        }

        prop_assert!(host.toasts().is_empty());
        prop_assert_eq!(host.pending_tasks(), 0);
    }
}
