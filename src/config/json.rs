//! JSON persistence for parameter sets
//!
//! # Deep Fried Optimizations
//! - **Streaming I/O**: Uses `serde_json::to_writer`/`from_reader` with `BufWriter`/`BufReader`.
//!
//! Author: Moroya Sakamoto

use super::{ConfigError, ParameterSet};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

/// Save a parameter set as pretty-printed JSON
pub fn save_params(params: &ParameterSet, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, params)
        .map_err(|e| ConfigError::Serialization(e.to_string()))?;
    writer.flush()?;

    info!(path = %path.display(), "saved parameters");
    Ok(())
}

/// Load and validate a parameter set from JSON
///
/// Fields missing from the file take their Standard preset values.
pub fn load_params(path: impl AsRef<Path>) -> Result<ParameterSet, ConfigError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let params: ParameterSet =
        serde_json::from_reader(reader).map_err(|e| ConfigError::Serialization(e.to_string()))?;

    if let Err(e) = params.validate() {
        warn!(path = %path.display(), error = %e, "rejected parameter file");
        return Err(e);
    }

    info!(path = %path.display(), resolution = params.resolution, "loaded parameters");
    Ok(params)
}

/// Serialize a parameter set to a JSON string
pub fn params_to_json_string(params: &ParameterSet) -> Result<String, ConfigError> {
    serde_json::to_string_pretty(params).map_err(|e| ConfigError::Serialization(e.to_string()))
}

/// Parse and validate a parameter set from a JSON string
pub fn params_from_json_str(json: &str) -> Result<ParameterSet, ConfigError> {
    let params: ParameterSet =
        serde_json::from_str(json).map_err(|e| ConfigError::Serialization(e.to_string()))?;
    params.validate()?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("voxel_flame_json_{}_{}", std::process::id(), name));
        path
    }

    #[test]
    fn test_save_load_file() {
        let params = Preset::Plasma.params();
        let path = temp_path("plasma.json");

        save_params(&params, &path).unwrap();
        let loaded = load_params(&path).unwrap();

        assert_eq!(loaded, params);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params = params_from_json_str(r#"{ "resolution": 24, "threshold": -0.3 }"#).unwrap();
        assert_eq!(params.resolution, 24);
        assert_eq!(params.threshold, -0.3);
        assert_eq!(params.sphere_radius, ParameterSet::default().sphere_radius);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = params_from_json_str(r#"{ "blend": 0.0 }"#);
        assert!(matches!(result, Err(ConfigError::NonPositiveBlend(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = params_from_json_str("{ resolution: ");
        assert!(matches!(result, Err(ConfigError::Serialization(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_params(temp_path("does_not_exist.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_string_round_trip() {
        let params = Preset::Sun.params();
        let json = params_to_json_string(&params).unwrap();
        assert!(json.contains("\"heat_depth_influence\""));
        assert_eq!(params_from_json_str(&json).unwrap(), params);
    }
}
