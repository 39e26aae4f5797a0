use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::*;

fn server_error(code: i64) -> ErrorBody {
    ErrorBody {
        code,
        description: format!("error {code}"),
        status: 202,
    }
}

#[test]
fn dispatch_with_no_handlers_is_a_noop() {
    let hooks = Hooks::new();
    hooks.dispatch(&server_error(401));
    assert_eq!(hooks.handler_count(401), 0);
}

#[test]
fn dispatch_invokes_matching_handler_once_with_payload() {
    let hooks = Hooks::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    hooks.on(401, move |error| {
        sink.lock().unwrap().push(error.clone());
    });

    hooks.dispatch(&server_error(401));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], server_error(401));
}

#[test]
fn dispatch_skips_handlers_for_other_codes() {
    let hooks = Hooks::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    hooks.on(500, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    hooks.dispatch(&server_error(401));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn handlers_for_one_code_run_in_registration_order() {
    let hooks = Hooks::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    let first = Arc::clone(&order);
    hooks.on(401, move |_| first.lock().unwrap().push("first"));
    let second = Arc::clone(&order);
    hooks.on(401, move |_| second.lock().unwrap().push("second"));

    hooks.dispatch(&server_error(401));
    assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
}

#[test]
fn handler_count_tracks_registrations_per_code() {
    let hooks = Hooks::new();
    hooks.on(401, |_| {});
    hooks.on(401, |_| {});
    hooks.on(500, |_| {});

    assert_eq!(hooks.handler_count(401), 2);
    assert_eq!(hooks.handler_count(500), 1);
    assert_eq!(hooks.handler_count(404), 0);
}

#[test]
fn repeated_dispatch_invokes_handlers_once_per_call() {
    let hooks = Hooks::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    hooks.on(500, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    hooks.dispatch(&server_error(500));
    hooks.dispatch(&server_error(500));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn debug_renders_code_counts() {
    let hooks = Hooks::new();
    hooks.on(401, |_| {});
    let rendered = format!("{hooks:?}");
    assert!(rendered.contains("401"));
}
