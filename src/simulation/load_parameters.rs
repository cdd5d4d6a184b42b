// src/simulation/load_parameters.rs

use std::fs::File;
use std::path::Path;

use serde_yaml::from_reader;
use tracing::info;

use crate::config::SimulationConfig;
use crate::simulation::error::SimulationError;

/// 設定ファイルの読み込みと検証
pub fn load_simulation_config<P: AsRef<Path>>(path: P) -> Result<SimulationConfig, SimulationError> {
    let file = File::open(path)?;
    let config: SimulationConfig = from_reader(file)?;
    config.validate()?;
    Ok(config)
}

/// 設定ファイルがあれば読み込み、なければ固定定数を使う
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<SimulationConfig, SimulationError> {
    let path = path.as_ref();
    if path.exists() {
        info!(path = %path.display(), "設定ファイルを読み込みます");
        load_simulation_config(path)
    } else {
        info!(path = %path.display(), "設定ファイルがないため既定値を使用します");
        let config = SimulationConfig::default();
        config.validate()?;
        Ok(config)
    }
}
