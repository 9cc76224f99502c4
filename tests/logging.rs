//! Tracing initialization

use theme_admin::logging::init_tracing;

#[test]
fn test_init_tracing_only_once() {
    init_tracing("theme_admin=debug,app_state=debug").unwrap();

    let err = init_tracing("info").unwrap_err();
    assert!(err.to_string().contains("failed to install tracing subscriber"));

    tracing::info!("still logging after the failed second init");
}
