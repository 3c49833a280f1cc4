// Settings files drive the whole run.

use std::fs;

use showersim::{Cascade, Partition, Settings, ShowerError, ShowerTable, Species};

fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("showersim-{}-{}.json", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_run_from_settings_file() {
    let path = write_temp(
        "run",
        r#"{
            "n_points": 60,
            "depth_total": 6000.0,
            "seed": 5,
            "partition": "random",
            "primary": {"species": "photon", "depth": 0.0, "energy": 5e9}
        }"#,
    );

    let settings = Settings::from_json_file(&path).unwrap();
    fs::remove_file(&path).ok();
    assert_eq!(settings.partition, Partition::Random);
    assert_eq!(settings.primary.species, Species::Photon);

    let (grid, stats) = Cascade::run(&settings).unwrap();
    assert_eq!(grid.n_points(), 60);
    assert!(stats.species_count(Species::Electron) > 0);

    let table = ShowerTable::new(&grid);
    assert_eq!(table.to_string().lines().count(), 60);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Settings::from_json_file("/nonexistent/showersim/settings.json").unwrap_err();
    assert!(matches!(err, ShowerError::Io(_)));
}

#[test]
fn test_invalid_settings_rejected() {
    let path = write_temp("invalid", r#"{"n_points": 0}"#);
    let err = Settings::from_json_file(&path).unwrap_err();
    fs::remove_file(&path).ok();
    assert!(matches!(err, ShowerError::InvalidSettings(_)));
}

#[test]
fn test_generation_limit_from_settings() {
    let settings = Settings {
        n_points: 10,
        depth_total: 1000.0,
        seed: Some(1),
        max_generation: Some(1),
        ..Settings::default()
    };
    let err = Cascade::run(&settings).unwrap_err();
    assert!(matches!(err, ShowerError::GenerationLimit { generation: 2, limit: 1 }));
}
