//! Property tests for redblack-logging

use proptest::prelude::*;
use redblack_logging::{LogEntry, LogFormat, LogLevel, LoggingConfig};

fn strategy_level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(vec![
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ])
}

proptest! {
    /// Test that should_log agrees with the level ordering
    #[test]
    fn prop_should_log_matches_ordering(threshold in strategy_level(), level in strategy_level()) {
        prop_assert_eq!(threshold.should_log(level), level <= threshold);
    }

    /// Test that a component override wins over the global level
    #[test]
    fn prop_component_override_wins(
        global in strategy_level(),
        component in strategy_level(),
        level in strategy_level()
    ) {
        let config = LoggingConfig::new()
            .with_level(global)
            .with_component_level("tree", component);
        prop_assert_eq!(config.should_log(level, Some("tree")), component.should_log(level));
        prop_assert_eq!(config.should_log(level, Some("cli")), global.should_log(level));
    }

    /// Test that every rendered line is a single line and JSON lines parse
    #[test]
    fn prop_render_is_one_line(message in "[a-zA-Z0-9 ]{0,40}", level in strategy_level()) {
        let entry = LogEntry::with_component(level, "tree", message.clone());
        for format in [LogFormat::Plain, LogFormat::Compact, LogFormat::Json] {
            let line = entry.render(format, true);
            prop_assert!(!line.contains('\n'));
        }
        let json: serde_json::Value = serde_json::from_str(&entry.render(LogFormat::Json, true)).unwrap();
        prop_assert_eq!(json["message"].as_str(), Some(message.as_str()));
    }

    /// Test that levels round trip through their string form
    #[test]
    fn prop_level_display_parses(level in strategy_level()) {
        prop_assert_eq!(level.to_string().parse::<LogLevel>(), Ok(level));
    }
}
