//! Integration tests for loading render configurations from disk.

use oereb_extract::classification::{classify, GeometryCategory};
use oereb_extract::{Error, Flavour, RenderConfig, RenderMode};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_fixture_config() {
    let config = RenderConfig::from_file("tests/fixtures/config.json").expect("Failed to load config");
    assert_eq!(config.default_language(), "de");
    assert!(config.supports_language("rm"));
    assert!(!config.supports_language("en"));
    assert_eq!(config.crs(), "EPSG:2056");
}

#[test]
fn test_surface_alias_and_custom_types() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "default_language": "fr",
            "languages": ["fr", "de"],
            "srid": 21781,
            "geometry_types": {
                "point": {"types": ["Point"]},
                "line": {"types": ["LineString"]},
                "surface": {"types": ["Polygon", "CurvePolygon"]}
            }
        }"#,
    )
    .expect("Failed to write config");

    let config = RenderConfig::from_file(&path).expect("Failed to load config");
    assert_eq!(config.crs(), "EPSG:21781");
    assert_eq!(
        classify("CurvePolygon", config.geometry_categories()).unwrap(),
        GeometryCategory::Surface
    );
    assert!(classify("MultiPoint", config.geometry_categories()).is_err());

    // The configured default language drives the mode.
    let mode = RenderMode::new(&config, Flavour::Full);
    assert_eq!(mode.language, "fr");
    assert_eq!(mode.default_language, "fr");
}

#[test]
fn test_invalid_default_language() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "default_language": "en",
            "languages": ["de", "fr"],
            "srid": 2056,
            "geometry_types": {
                "point": {"types": ["Point"]},
                "line": {"types": ["LineString"]},
                "polygon": {"types": ["Polygon"]}
            }
        }"#,
    )
    .expect("Failed to write config");

    match RenderConfig::from_file(&path) {
        Err(Error::Config(msg)) => assert!(msg.contains("en")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_malformed_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    fs::write(&path, "{\"default_language\": ").expect("Failed to write config");
    assert!(matches!(RenderConfig::from_file(&path), Err(Error::Json(_))));
}

#[test]
fn test_missing_config_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = RenderConfig::from_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_language_codes_are_case_insensitive() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "default_language": "DE",
            "languages": ["DE", "FR"],
            "srid": 2056,
            "geometry_types": {
                "point": {"types": ["Point"]},
                "line": {"types": ["LineString"]},
                "polygon": {"types": ["Polygon"]}
            }
        }"#,
    )
    .expect("Failed to write config");

    let config = RenderConfig::from_file(&path).expect("Failed to load config");
    assert_eq!(config.default_language(), "de");

    let mode = RenderMode::from_params(&config, "full", None, false, false)
        .expect("Default language should be accepted");
    assert_eq!(mode.language, "de");
    assert!(RenderMode::from_params(&config, "full", Some("Fr"), false, false).is_ok());
}
