use smint_logger::{LevelFilter, Logger, LoggerError};

// A global subscriber can only be installed once per process, so the happy
// path and the double-init failure share one test binary.
#[test]
fn console_init_then_second_init_fails() {
    let logger = Logger::builder()
        .name("integration-logger")
        .console(true)
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");

    let err = Logger::builder()
        .name("integration-logger-second")
        .level(LevelFilter::INFO)
        .init()
        .expect_err("second init should fail");

    assert!(
        matches!(err, LoggerError::Subscriber { .. }),
        "expected subscriber error for second init"
    );
}
