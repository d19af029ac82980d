// In src/main.rs

//! Walkthrough of the scalar <-> SIMD conversions.
//!
//! Loads the configured values with every loader, builds the configured
//! matrix and transposes it, logging each result. Pass a JSON config path as
//! the only argument to override the defaults.

use std::path::PathBuf;

use anyhow::Context; // For context on Results
use log::{debug, info};

use simd_conv::config::Config;
use simd_conv::{Float2, Float3, Float4, Float4x4, MatrixLayout, SimdFloat4};

fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting simd-conv walkthrough...");

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load_or_default(config_path.as_deref())
        .context("Failed to load walkthrough configuration")?;

    load_vectors(&config);
    store_vectors(&config);
    load_matrix(&config);

    info!("Walkthrough finished.");
    Ok(())
}

/// Loads the configured scalars with each loader.
fn load_vectors(config: &Config) {
    let splat = SimdFloat4::splat(config.splat);
    info!("splat({}) = {:?}", config.splat, splat);

    let v = config.vector;
    let immediate = SimdFloat4::new(v.x, v.y, v.z, v.w);
    info!("new({}, {}, {}, {}) = {:?}", v.x, v.y, v.z, v.w, immediate);

    // Stack locals carry no 16-byte alignment guarantee, hence the _u loaders.
    let f1 = config.splat;
    // SAFETY: each pointer comes from a live value of at least the loaded width.
    let (from_f1, from_f4, from_f3, from_f2) = unsafe {
        (
            SimdFloat4::load1_ptr_u(&f1),
            SimdFloat4::load_ptr_u(config.vector.as_ptr()),
            SimdFloat4::load3_ptr_u(config.triple.as_ptr()),
            SimdFloat4::load2_ptr_u(config.pair.as_ptr()),
        )
    };
    info!("load1_ptr_u(&{}) = {:?}", f1, from_f1);
    info!("load_ptr_u({:?}) = {:?}", config.vector, from_f4);
    info!("load3_ptr_u({:?}) = {:?}", config.triple, from_f3);
    info!("load2_ptr_u({:?}) = {:?}", config.pair, from_f2);
}

/// Stores the loaded vectors back into scalar tuples.
fn store_vectors(config: &Config) {
    let v = SimdFloat4::from(config.vector);
    let f4 = Float4::from(v);
    let f3 = Float3::from(v);
    let f2 = Float2::from(v);
    debug!("stored {:?} as {:?} / {:?} / {:?}", v, f4, f3, f2);
    info!("store round trip intact: {}", f4 == config.vector);
}

/// Builds the configured matrix and its transpose.
fn load_matrix(config: &Config) {
    let matrix = Float4x4::from_array(&config.matrix, config.layout);
    for (i, col) in matrix.cols.iter().enumerate() {
        info!("{:?} matrix column {} = {:?}", config.layout, i, col);
    }

    // A row-major buffer read through column loads needs one transpose.
    let transposed = matrix.transpose();
    for (i, col) in transposed.cols.iter().enumerate() {
        info!("transposed column {} = {:?}", i, col);
    }

    if config.layout == MatrixLayout::ColumnMajor {
        debug!("element (col 2, row 1) = {}", matrix.get(2, 1));
    }
}
