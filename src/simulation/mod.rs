// src/simulation/mod.rs

pub mod csv;
pub mod dataset;
pub mod error;
pub mod framework;
pub mod load_parameters;

use crate::math::Vector3;
use crate::models::KinematicState;

/// シミュレーションの全体状態を表す構造体
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub target: KinematicState,
    pub chaser: KinematicState,
}

/// ターゲットとチェイサーの相対幾何
#[derive(Debug, Clone, PartialEq)]
pub struct RelativeGeometry {
    pub relative_position: Vector3, // ターゲット - チェイサー (m)
    pub relative_velocity: Vector3, // ターゲット - チェイサー (m/s)
    pub distance_between: f64,      // |relative_position| + epsilon (m)
}

/// 1ステップ分の記録（そのステップの更新前の状態）
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    pub time_seconds: f64,
    pub target: KinematicState,
    pub chaser: KinematicState,
    pub geometry: RelativeGeometry,
}
