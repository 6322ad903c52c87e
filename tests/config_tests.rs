use std::collections::HashMap;

use feedback_digest::core::config::{AppConfig, DEFAULT_OPENAI_MODEL, MAX_LOOKBACK_DAYS};
use feedback_digest::errors::DigestError;

fn base_vars() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("SLACK_BOT_TOKEN", "xoxb-test"),
        ("PRODUCTBOARD_API_TOKEN", "pb-test"),
        ("OPENAI_API_KEY", "sk-test"),
        ("PRODUCT_TEAM_CHANNEL", "C0PRODUCT"),
    ])
}

fn load(vars: &HashMap<&'static str, &'static str>) -> Result<AppConfig, DigestError> {
    AppConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_string()))
}

#[test]
fn test_defaults_apply_when_optional_vars_unset() {
    let config = load(&base_vars()).unwrap();
    assert_eq!(config.slack_bot_token, "xoxb-test");
    assert_eq!(config.product_team_channel, "C0PRODUCT");
    assert_eq!(config.lookback_days, 14);
    assert_eq!(config.page_limit, 100);
    assert_eq!(config.max_chunk_len, 2900);
    assert_eq!(config.openai_org_id, None);
    assert_eq!(config.model_name(), DEFAULT_OPENAI_MODEL);
}

#[test]
fn test_optional_overrides_are_read() {
    let mut vars = base_vars();
    vars.insert("OPENAI_MODEL", "gpt-4.1");
    vars.insert("OPENAI_ORG_ID", "org-1");
    vars.insert("FEEDBACK_LOOKBACK_DAYS", "30");
    vars.insert("PRODUCTBOARD_PAGE_LIMIT", "50");
    vars.insert("SLACK_MAX_CHUNK_LEN", "1000");

    let config = load(&vars).unwrap();
    assert_eq!(config.model_name(), "gpt-4.1");
    assert_eq!(config.openai_org_id.as_deref(), Some("org-1"));
    assert_eq!(config.lookback_days, 30);
    assert_eq!(config.page_limit, 50);
    assert_eq!(config.max_chunk_len, 1000);
}

#[test]
fn test_each_required_var_is_enforced() {
    for key in [
        "SLACK_BOT_TOKEN",
        "PRODUCTBOARD_API_TOKEN",
        "OPENAI_API_KEY",
        "PRODUCT_TEAM_CHANNEL",
    ] {
        let mut vars = base_vars();
        vars.remove(key);
        match load(&vars) {
            Err(DigestError::ConfigError(msg)) => assert!(msg.contains(key), "{msg}"),
            other => panic!("expected config error for {key}, got {other:?}"),
        }
    }
}

#[test]
fn test_lookback_upper_bound_is_inclusive() {
    let mut vars = base_vars();
    vars.insert("FEEDBACK_LOOKBACK_DAYS", "3650");
    assert_eq!(load(&vars).unwrap().lookback_days, MAX_LOOKBACK_DAYS);
}

#[test]
fn test_blank_value_counts_as_missing() {
    let mut vars = base_vars();
    vars.insert("OPENAI_API_KEY", "   ");
    assert!(matches!(load(&vars), Err(DigestError::ConfigError(_))));
}

#[test]
fn test_invalid_numbers_are_rejected() {
    for (key, value) in [
        ("FEEDBACK_LOOKBACK_DAYS", "two weeks"),
        ("FEEDBACK_LOOKBACK_DAYS", "0"),
        ("FEEDBACK_LOOKBACK_DAYS", "3651"),
        ("FEEDBACK_LOOKBACK_DAYS", "200000000"),
        ("PRODUCTBOARD_PAGE_LIMIT", "-5"),
        ("PRODUCTBOARD_PAGE_LIMIT", "0"),
        ("SLACK_MAX_CHUNK_LEN", "0"),
        ("SLACK_MAX_CHUNK_LEN", "3001"),
    ] {
        let mut vars = base_vars();
        vars.insert(key, value);
        match load(&vars) {
            Err(DigestError::ConfigError(msg)) => assert!(msg.contains(key), "{msg}"),
            other => panic!("expected config error for {key}={value}, got {other:?}"),
        }
    }
}
