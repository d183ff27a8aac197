use log::LevelFilter;
use seabattle::{init_logging, parse_level, LOG_ENV};

#[test]
fn test_parse_level() {
    assert_eq!(parse_level(None), LevelFilter::Info);
    assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
    assert_eq!(parse_level(Some(" WARN ")), LevelFilter::Warn);
    assert_eq!(parse_level(Some("off")), LevelFilter::Off);
    assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
}

#[test]
fn test_init_twice_is_harmless() {
    assert_eq!(LOG_ENV, "SEABATTLE_LOG");
    init_logging();
    init_logging();
    log::info!("logger ready");
}
