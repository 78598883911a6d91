use super::*;
use yare::parameterized;

#[parameterized(
    quiet = { 0, LevelFilter::WARN },
    verbose = { 1, LevelFilter::INFO },
    very_verbose = { 2, LevelFilter::DEBUG },
    trace = { 3, LevelFilter::TRACE },
    saturates = { 9, LevelFilter::TRACE },
)]
fn verbosity_levels(verbosity: u8, expected: LevelFilter) {
    assert_eq!(level_for_verbosity(verbosity), expected);
}

#[parameterized(
    env_overrides_quiet_flag = { Some("debug"), 0, Some(LevelFilter::DEBUG) },
    env_overrides_verbose_flag = { Some("error"), 3, Some(LevelFilter::ERROR) },
    target_directive = { Some("blrun=trace"), 0, Some(LevelFilter::TRACE) },
    unset_uses_flag = { None, 2, Some(LevelFilter::DEBUG) },
    blank_uses_flag = { Some("  "), 1, Some(LevelFilter::INFO) },
    invalid_uses_flag = { Some("blrun=loud"), 0, Some(LevelFilter::WARN) },
)]
fn filter_precedence(directive: Option<&str>, verbosity: u8, expected: Option<LevelFilter>) {
    assert_eq!(filter_from(directive, verbosity).max_level_hint(), expected);
}

#[test]
fn init_twice_does_not_panic() {
    init(0);
    init(2);
}
