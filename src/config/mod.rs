// src/config/mod.rs

pub mod parameters;
pub mod scenario;

use serde::Deserialize;
use thiserror::Error;

pub use parameters::{ChaserParameters, OutputParameters, SimulationParameters, TargetParameters};
pub use scenario::Scenario;

/// 1回の実行で許容する最大ステップ数
pub const MAX_STEPS: usize = 10_000_000;

/// 設定値の検証エラー
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("時間刻み dt は正の有限値である必要があります: {0}")]
    InvalidTimeStep(f64),
    #[error("総シミュレーション時間は非負の有限値である必要があります: {0}")]
    InvalidTotalTime(f64),
    #[error("迎撃判定距離は非負の有限値である必要があります: {0}")]
    InvalidInterceptionThreshold(f64),
    #[error("距離オフセットは正の有限値である必要があります: {0}")]
    InvalidDistanceEpsilon(f64),
    #[error("最大速度は正の有限値である必要があります: {0}")]
    InvalidMaxSpeed(f64),
    #[error("追跡加速度は有限値である必要があります: {0}")]
    InvalidPursuitGain(f64),
    #[error("ステップ数 total_time / dt = {0} が上限 {max} を超えています", max = MAX_STEPS)]
    TooManySteps(f64),
    #[error("{0} に有限でない成分が含まれています")]
    NonFiniteVector(&'static str),
}

/// 生成器の設定一式
///
/// `Default` は固定定数（dt = 0.1 s, 120 s, 迎撃距離 5 m など）と一致する。
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SimulationConfig {
    pub simulation: SimulationParameters,
    pub chaser: ChaserParameters,
    pub target: TargetParameters,
    pub scenario: Scenario,
    pub output: OutputParameters,
}

impl SimulationConfig {
    /// 実行する最大ステップ数（`total_time / dt` の切り捨て）
    pub fn num_steps(&self) -> usize {
        (self.simulation.total_time / self.simulation.dt).floor() as usize
    }

    /// 設定値の検証
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sim = &self.simulation;
        if !(sim.dt.is_finite() && sim.dt > 0.0) {
            return Err(ConfigError::InvalidTimeStep(sim.dt));
        }
        if !(sim.total_time.is_finite() && sim.total_time >= 0.0) {
            return Err(ConfigError::InvalidTotalTime(sim.total_time));
        }
        let steps = sim.total_time / sim.dt;
        if !(steps.is_finite() && steps <= MAX_STEPS as f64) {
            return Err(ConfigError::TooManySteps(steps));
        }
        if !(sim.interception_threshold.is_finite() && sim.interception_threshold >= 0.0) {
            return Err(ConfigError::InvalidInterceptionThreshold(
                sim.interception_threshold,
            ));
        }
        if !(sim.distance_epsilon.is_finite() && sim.distance_epsilon > 0.0) {
            return Err(ConfigError::InvalidDistanceEpsilon(sim.distance_epsilon));
        }
        if !(self.chaser.max_speed.is_finite() && self.chaser.max_speed > 0.0) {
            return Err(ConfigError::InvalidMaxSpeed(self.chaser.max_speed));
        }
        if !self.chaser.pursuit_gain.is_finite() {
            return Err(ConfigError::InvalidPursuitGain(self.chaser.pursuit_gain));
        }

        let vectors: [(&'static str, &[f64; 3]); 5] = [
            ("target.acceleration_bias", &self.target.acceleration_bias),
            ("scenario.target.initial_position", &self.scenario.target.initial_position),
            ("scenario.target.initial_velocity", &self.scenario.target.initial_velocity),
            ("scenario.chaser.initial_position", &self.scenario.chaser.initial_position),
            ("scenario.chaser.initial_velocity", &self.scenario.chaser.initial_velocity),
        ];
        for (name, v) in vectors {
            if v.iter().any(|c| !c.is_finite()) {
                return Err(ConfigError::NonFiniteVector(name));
            }
        }

        Ok(())
    }
}
