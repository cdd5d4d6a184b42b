// src/config/parameters.rs

use serde::Deserialize;

/// シミュレーション全体のパラメータ
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationParameters {
    pub dt: f64,                     // 時間刻み (s)
    pub total_time: f64,             // 総シミュレーション時間 (s)
    pub interception_threshold: f64, // 迎撃判定距離 (m)
    pub distance_epsilon: f64,       // ゼロ除算防止用の距離オフセット (m)
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            dt: 0.1,
            total_time: 120.0,
            interception_threshold: 5.0,
            distance_epsilon: 1e-6,
        }
    }
}

/// 追跡体（チェイサー）のパラメータ
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChaserParameters {
    pub max_speed: f64,    // 最大速度 (m/s)
    pub pursuit_gain: f64, // 目標方向への加速度の大きさ (m/s²)
}

impl Default for ChaserParameters {
    fn default() -> Self {
        Self {
            max_speed: 400.0,
            pursuit_gain: 8.0,
        }
    }
}

/// 目標（ターゲット）のパラメータ
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TargetParameters {
    pub acceleration_bias: [f64; 3], // 毎ステップ速度に加算されるバイアス (m/s)
}

impl Default for TargetParameters {
    fn default() -> Self {
        Self {
            acceleration_bias: [0.0, 0.02, 0.01],
        }
    }
}

/// 出力先のパラメータ
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputParameters {
    pub path: String,
}

impl Default for OutputParameters {
    fn default() -> Self {
        Self {
            path: "data/raw/chase_dataset_raw.csv".to_string(),
        }
    }
}
