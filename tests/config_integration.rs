//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use lockstep::config::SimConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("LOCKSTEP_SIMULATION__STEPS", "99");
    let config = SimConfig::load().unwrap();
    assert_eq!(config.simulation.steps, 99);
    std::env::remove_var("LOCKSTEP_SIMULATION__STEPS");
}

#[test]
#[serial]
fn test_nested_env_override() {
    std::env::set_var("LOCKSTEP_SCENE__SPHERE_COUNT", "3");
    std::env::set_var("LOCKSTEP_SCENE__GRAVITY", "-9.81");
    let config = SimConfig::load().unwrap();
    assert_eq!(config.scene.sphere_count, 3);
    assert_eq!(config.scene.gravity, -9.81);
    std::env::remove_var("LOCKSTEP_SCENE__SPHERE_COUNT");
    std::env::remove_var("LOCKSTEP_SCENE__GRAVITY");
}

#[test]
#[serial]
fn test_defaults_without_env() {
    std::env::remove_var("LOCKSTEP_SIMULATION__STEPS");
    let config = SimConfig::load().unwrap();
    assert_eq!(config.simulation.steps, 240);
    assert_eq!(config.simulation.substeps, 1);
    assert_eq!(config.scene.sphere_count, 8);
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    std::env::remove_var("LOCKSTEP_SIMULATION__STEPS");
    let from_files = SimConfig::load().unwrap();
    let builtin = SimConfig::default();
    assert_eq!(from_files.simulation.steps, builtin.simulation.steps);
    assert_eq!(from_files.scene.gravity, builtin.scene.gravity);
    assert_eq!(
        from_files.scene.floor_half_extents,
        builtin.scene.floor_half_extents
    );
}
