//! Config Validation Tests
//!
//! File loading, typo detection and range validation for
//! `transport_config.toml`, plus hot reload through the service state.

use std::io::Write;

use organ_route::api::ServiceState;
use organ_route::config::validation::{known_config_keys, suggest_correction, validate_unknown_keys};
use organ_route::config::{ConfigError, OverrideMargin, TransportConfig};
use organ_route::TransportMode;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn load_from_file_applies_overrides_and_defaults() {
    let file = write_config(
        r#"
[ground]
speed_kmh = 90.0

[selection]
cost_aware = true
priority_order = ["dedicated_air", "commercial_air", "ground"]

[selection.long_haul]
distance_threshold_km = 760.0

[selection.long_haul.margin]
kind = "relative"
fraction = 0.1
"#,
    );

    let config = TransportConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.ground.speed_kmh, 90.0);
    assert!(config.selection.cost_aware);
    assert_eq!(config.intrinsic_priority(TransportMode::DedicatedAir), 1);
    assert_eq!(config.intrinsic_priority(TransportMode::Ground), 3);
    assert_eq!(config.selection.long_haul.distance_threshold_km, 760.0);
    assert_eq!(config.selection.long_haul.margin, OverrideMargin::Relative { fraction: 0.1 });
    // Untouched sections keep their defaults
    assert_eq!(config.risk, TransportConfig::default().risk);
    assert_eq!(config.server, TransportConfig::default().server);
}

#[test]
fn partial_air_section_validates_instead_of_failing_to_parse() {
    let file = write_config("[commercial_air]\ncruise_speed_kmh = 850.0\n");
    let config = TransportConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.commercial_air.cruise_speed_kmh, 850.0);
    assert_eq!(config.commercial_air.ground_handling_hours, 1.0);

    std::fs::write(file.path(), "[dedicated_air]\ncruise_speed_kmh = -1.0\n").unwrap();
    match TransportConfig::load_from_file(file.path()).unwrap_err() {
        ConfigError::Validation(errors) => {
            assert!(errors.iter().any(|e| e.contains("dedicated_air.cruise_speed_kmh")), "{errors:?}");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TransportConfig::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(..)));
}

#[test]
fn malformed_toml_is_parse_error_with_path() {
    let file = write_config("[ground\nspeed_kmh = ");
    let err = TransportConfig::load_from_file(file.path()).unwrap_err();
    match err {
        ConfigError::Parse(path, _) => assert_eq!(path, file.path()),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn out_of_range_values_are_collected() {
    let file = write_config(
        r#"
[ground]
speed_kmh = 0.0

[risk]
high_margin_hours = 3.0
moderate_margin_hours = 2.0
"#,
    );
    match TransportConfig::load_from_file(file.path()).unwrap_err() {
        ConfigError::Validation(errors) => {
            assert!(errors.iter().any(|e| e.contains("ground.speed_kmh")), "{errors:?}");
            assert!(errors.iter().any(|e| e.contains("moderate_margin_hours")), "{errors:?}");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn duplicate_priority_entry_is_rejected() {
    let err = TransportConfig::from_toml_str(
        r#"
[selection]
priority_order = ["ground", "ground", "dedicated_air"]
"#,
    )
    .unwrap_err();
    match err {
        ConfigError::Validation(errors) => {
            assert!(errors.iter().any(|e| e.contains("priority_order")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn serialized_defaults_round_trip_through_file() {
    let toml = TransportConfig::default().to_toml().unwrap();
    let file = write_config(&toml);
    assert_eq!(TransportConfig::load_from_file(file.path()).unwrap(), TransportConfig::default());
    assert!(validate_unknown_keys(&toml).is_empty());
}

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_dedicated_section_suggests_fix() {
    let warnings = validate_unknown_keys(
        r#"
[dedicated_air]
cruise_sped_kmh = 650.0
"#,
    );
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field, "dedicated_air.cruise_sped_kmh");
    assert_eq!(warnings[0].suggestion.as_deref(), Some("dedicated_air.cruise_speed_kmh"));
}

#[test]
fn typo_does_not_block_loading() {
    let config = TransportConfig::from_toml_str(
        r#"
[ground]
speed_kmh = 70.0
sped_kmh = 90.0
"#,
    )
    .unwrap();
    assert_eq!(config.ground.speed_kmh, 70.0);
}

#[test]
fn nested_synthesis_keys_are_known() {
    let known = known_config_keys();
    for key in [
        "synthesis.commercial.window_start_hour",
        "synthesis.dedicated.max_chance",
        "synthesis.costs.dedicated_per_km",
        "server.default_ground_leg_hours",
    ] {
        assert!(known.contains(key), "{key} should be a known key");
    }
    assert_eq!(
        suggest_correction("synthesis.dedicated.max_chanse", &known).as_deref(),
        Some("synthesis.dedicated.max_chance")
    );
}

// ============================================================================
// Hot Reload
// ============================================================================

#[test]
fn reload_swaps_in_new_config() {
    let file = write_config("[ground]\nspeed_kmh = 80.0\n");
    let state = ServiceState::new(
        TransportConfig::load_from_file(file.path()).unwrap(),
        Some(file.path().to_path_buf()),
    );
    let before = state.current();

    std::fs::write(file.path(), "[ground]\nspeed_kmh = 95.0\n").unwrap();

    let fresh = state.reload().unwrap().unwrap();
    assert_eq!(fresh.ground.speed_kmh, 95.0);
    assert_eq!(state.current().ground.speed_kmh, 95.0);
    // Snapshots taken before the reload are unaffected
    assert_eq!(before.ground.speed_kmh, 80.0);
}

#[test]
fn failed_reload_keeps_active_config() {
    let file = write_config("[ground]\nspeed_kmh = 85.0\n");
    let state = ServiceState::new(
        TransportConfig::load_from_file(file.path()).unwrap(),
        Some(file.path().to_path_buf()),
    );

    std::fs::write(file.path(), "[ground]\nspeed_kmh = -5.0\n").unwrap();
    assert!(matches!(state.reload(), Err(ConfigError::Validation(_))));
    assert_eq!(state.current().ground.speed_kmh, 85.0);
}

#[test]
fn reload_without_path_is_noop() {
    let state = ServiceState::new(TransportConfig::default(), None);
    assert!(state.reload().unwrap().is_none());
    assert!(state.config_path().is_none());
}
