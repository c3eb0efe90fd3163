use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::json;

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`env_guard`] so env-mutating tests do not race.
unsafe fn clear_clamp_env() {
    unsafe {
        std::env::remove_var(SCALE_POLICY_ENV);
    }
}

#[test]
fn from_env_defaults_to_reposition() {
    let _guard = env_guard();
    unsafe { clear_clamp_env() };

    let cfg = ClampConfig::from_env().unwrap();
    assert_eq!(cfg.scale_policy, ClampPolicy::Reposition);
}

#[test]
fn from_env_reads_resist_growth() {
    let _guard = env_guard();
    unsafe {
        clear_clamp_env();
        std::env::set_var(SCALE_POLICY_ENV, "resist_growth");
    }

    let cfg = ClampConfig::from_env().unwrap();
    assert_eq!(cfg.scale_policy, ClampPolicy::ResistGrowth);

    unsafe { clear_clamp_env() };
}

#[test]
fn from_env_rejects_unknown_policy() {
    let _guard = env_guard();
    unsafe {
        clear_clamp_env();
        std::env::set_var(SCALE_POLICY_ENV, "shrink_to_fit");
    }

    let err = ClampConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::UnknownPolicy("shrink_to_fit".into()));

    unsafe { clear_clamp_env() };
}

#[test]
fn parse_policy_accepts_case_and_dashes() {
    assert_eq!(parse_policy("Resist-Growth"), Ok(ClampPolicy::ResistGrowth));
    assert_eq!(parse_policy("  REPOSITION "), Ok(ClampPolicy::Reposition));
    assert_eq!(parse_policy(""), Ok(ClampPolicy::Reposition));
}

#[test]
fn from_str_matches_parse_policy() {
    assert_eq!("resist_growth".parse::<ClampPolicy>(), Ok(ClampPolicy::ResistGrowth));
    assert!("bogus".parse::<ClampPolicy>().is_err());
}

#[test]
fn unknown_policy_message() {
    let err = parse_policy("nope").unwrap_err();
    assert_eq!(err.to_string(), "unknown clamp policy 'nope' (expected 'reposition' or 'resist_growth')");
}

#[test]
fn config_deserializes_snake_case() {
    let cfg: ClampConfig = serde_json::from_value(json!({ "scale_policy": "resist_growth" })).unwrap();
    assert_eq!(cfg.scale_policy, ClampPolicy::ResistGrowth);
}

#[test]
fn config_missing_fields_use_default() {
    let cfg: ClampConfig = serde_json::from_value(json!({})).unwrap();
    assert_eq!(cfg, ClampConfig::default());
}

#[test]
fn config_serializes_policy_name() {
    let cfg = ClampConfig { scale_policy: ClampPolicy::ResistGrowth };
    assert_eq!(serde_json::to_value(cfg).unwrap(), json!({ "scale_policy": "resist_growth" }));
}
