// src/simulation/error.rs

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("設定が不正です: {0}")]
    Config(#[from] ConfigError),
    #[error("ファイル入出力に失敗しました: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML の解析に失敗しました: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
