// Cube count range handling and config overrides.

use cubes_core::*;

#[test]
fn cube_count_defaults_and_clamps() {
    assert_eq!(CubeCount::default().get(), 50);
    assert_eq!(CubeCount::clamped(3).get(), 10);
    assert_eq!(CubeCount::clamped(5_000).get(), 200);
    assert_eq!(CubeCount::clamped(-1).get(), 10);
    assert_eq!(CubeCount::clamped(123).get(), 123);
}

#[test]
fn cube_count_step_stays_in_range() {
    assert_eq!(CubeCount::MAX.step(10), CubeCount::MAX);
    assert_eq!(CubeCount::MIN.step(-1), CubeCount::MIN);
    assert_eq!(CubeCount::default().step(-10).get(), 40);
}

#[test]
fn try_from_rejects_out_of_range() {
    assert!(CubeCount::try_from(10).is_ok());
    assert!(CubeCount::try_from(200).is_ok());
    assert_eq!(
        CubeCount::try_from(9),
        Err(ConfigError::CountOutOfRange(9))
    );
    assert!(CubeCount::try_from(201).is_err());
}

#[test]
fn overrides_parse_count_and_seed() {
    let config = SceneConfig::default()
        .with_override("count", "120")
        .and_then(|c| c.with_override("seed", " 99 "))
        .expect("valid overrides");
    assert_eq!(config.cube_count.get(), 120);
    assert_eq!(config.seed, Some(99));
}

#[test]
fn overrides_reject_garbage() {
    assert!(SceneConfig::default().with_override("count", "many").is_err());
    assert!(SceneConfig::default().with_override("count", "5").is_err());
    assert!(SceneConfig::default().with_override("seed", "-").is_err());
    assert!(SceneConfig::default().with_override("colour", "red").is_err());
}
