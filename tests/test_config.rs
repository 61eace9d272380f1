//! Integration tests: parameter files and presets
//!
//! Author: Moroya Sakamoto

mod common;

use common::*;
use voxel_flame::prelude::*;

#[test]
fn preset_file_round_trip() {
    for preset in Preset::ALL {
        let path = temp_path(&format!("{}.json", preset.name()));
        save_params(&preset.params(), &path).unwrap();
        let loaded = load_params(&path).unwrap();
        assert_eq!(loaded, preset.params(), "{}", preset);
        std::fs::remove_file(&path).ok();
    }
}

#[test]
fn loaded_file_is_validated() {
    let path = temp_path("bad_blend.json");
    std::fs::write(&path, r#"{ "blend": -1.0, "resolution": 20 }"#).unwrap();
    let result = load_params(&path);
    assert!(matches!(result, Err(ConfigError::NonPositiveBlend(_))));
    std::fs::remove_file(&path).ok();
}

#[test]
fn loaded_file_drives_evaluation() {
    let path = temp_path("small.json");
    std::fs::write(&path, r#"{ "resolution": 12, "noise_strength": 0.0 }"#).unwrap();
    let params = load_params(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let voxelizer = Voxelizer::new();
    let instances = voxelizer.evaluate(&params, 5.0).unwrap();
    assert!(!instances.is_empty());
    assert!(instances.len() <= grid_capacity(12));
}

#[test]
fn presets_have_distinct_labels() {
    let mut labels: Vec<&str> = Preset::ALL.iter().map(|p| p.label()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), 8);
}

#[test]
fn preset_lookup_by_label() {
    for preset in Preset::ALL {
        assert_eq!(preset.label().parse::<Preset>().unwrap(), preset);
        assert_eq!(preset.name().parse::<Preset>().unwrap(), preset);
    }
}

#[test]
fn every_preset_renders_something() {
    let voxelizer = Voxelizer::new();
    for preset in Preset::ALL {
        let params = preset.params();
        let count = voxelizer.evaluate(&params, 0.0).unwrap().len();
        assert!(count > 0, "{} produced an empty frame", preset);
        assert!(params.emissive_intensity > 0.0);
    }
}
