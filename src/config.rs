// src/config.rs

//! Configuration for the `simd-conv` walkthrough binary.
//!
//! The walkthrough loads a handful of scalar values into SIMD vectors and a
//! flat 16-float buffer into a matrix. Every input can be overridden from a
//! JSON file; missing fields fall back to the defaults below, which
//! reproduce the classic "0..15" conversion example.

use anyhow::Context;
use log::{debug, info};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::float4x4::MatrixLayout;
use crate::vec_float::{Float2, Float3, Float4};

/// Default configuration, built on first use.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);

/// Inputs for one run of the walkthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // Apply default values for the entire struct if a field is missing.
pub struct Config {
    /// Value broadcast by the splat loaders.
    pub splat: f32,
    /// Tuple loaded with the 4-float loaders.
    pub vector: Float4,
    /// Tuple loaded with the 3-float loader (w is zero-filled).
    pub triple: Float3,
    /// Tuple loaded with the 2-float loader (z and w are zero-filled).
    pub pair: Float2,
    /// Flat matrix buffer.
    pub matrix: [f32; 16],
    /// How `matrix` is laid out in memory.
    pub layout: MatrixLayout,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            splat: 46.0,
            vector: Float4::new(0.0, 1.0, 2.0, 3.0),
            triple: Float3::new(0.0, 1.0, 2.0),
            pair: Float2::new(0.0, 1.0),
            matrix: core::array::from_fn(|i| i as f32),
            layout: MatrixLayout::ColumnMajor,
        }
    }
}

impl Config {
    /// Parses a JSON document. Fields it leaves out keep their defaults.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: Config =
            serde_json::from_str(json).context("Failed to parse configuration JSON")?;
        debug!("Parsed configuration: {:?}", config);
        Ok(config)
    }

    /// Reads and parses the JSON file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        let config = Self::from_json_str(&text)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Loads `path` when given, otherwise clones [`CONFIG`].
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                info!("No configuration file given, using defaults.");
                Ok(CONFIG.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn defaults_match_the_reference_buffer() {
        let config = Config::default();
        assert_eq!(config.matrix[9], 9.0);
        assert_eq!(config.layout, MatrixLayout::ColumnMajor);
        assert_eq!(*CONFIG, config);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = Config::from_json_str(r#"{ "splat": 2.5, "layout": "row_major" }"#).unwrap();
        assert_eq!(config.splat, 2.5);
        assert_eq!(config.layout, MatrixLayout::RowMajor);
        assert_eq!(config.pair, Float2::new(0.0, 1.0));
    }

    #[test]
    fn json_round_trip() {
        let mut config = Config::default();
        config.vector = Float4::new(-1.0, 0.5, 8.0, 1e6);
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(Config::from_json_str(&text).unwrap(), config);
    }

    #[test]
    fn wrong_matrix_length_is_an_error() {
        let err = Config::from_json_str(r#"{ "matrix": [1.0, 2.0] }"#).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse configuration JSON"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Config::load(Path::new("/nonexistent/simd-conv.json")).unwrap_err();
        assert!(format!("{}", err).contains("/nonexistent/simd-conv.json"));
    }

    #[test]
    fn no_path_falls_back_to_defaults() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }
}
