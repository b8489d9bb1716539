use std::path::PathBuf;

use portfolio_arcade::config::*;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "portfolio_arcade_{}_{}.json",
        name,
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_file_gives_defaults() {
    let path = std::env::temp_dir().join("portfolio_arcade_definitely_missing.json");
    let _ = std::fs::remove_file(&path);
    let s = Settings::load(&path).unwrap();
    assert_eq!(s, Settings::default());
}

#[test]
fn defaults_match_web_timings() {
    let s = Settings::default();
    assert_eq!(s.shooter.spawn_interval_ms, 1000);
    assert_eq!(s.shooter.physics_interval_ms, 50);
    assert_eq!(s.shooter.bullet_speed, 10.0);
    assert!(!s.shooter.fire_after_win);
    assert_eq!(s.tetris.gravity_interval_ms, 1000);
    assert_eq!(s.seed, None);
}

#[test]
fn file_values_override_defaults() {
    let path = scratch_file(
        "override",
        r#"{ "seed": 9, "shooter": { "max_targets": 12 }, "tetris": { "gravity_interval_ms": 500 } }"#,
    );
    let s = Settings::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(s.seed, Some(9));
    assert_eq!(s.shooter.max_targets, 12);
    assert_eq!(s.shooter.physics_interval_ms, 50);
    assert_eq!(s.tetris.gravity_interval_ms, 500);
}

#[test]
fn malformed_file_reports_its_path() {
    let path = scratch_file("malformed", "{ shooter: ");
    let err = Settings::load(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();

    match err {
        SettingsError::Parse { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn invalid_values_rejected() {
    for json in [
        r#"{ "shooter": { "spawn_interval_ms": 0 } }"#,
        r#"{ "shooter": { "bullet_speed": -1.0 } }"#,
        r#"{ "shooter": { "max_targets": 0 } }"#,
        r#"{ "tetris": { "gravity_interval_ms": 0 } }"#,
    ] {
        assert!(
            matches!(Settings::from_json(json), Err(SettingsError::Invalid(_))),
            "{json} should be rejected"
        );
    }
}
