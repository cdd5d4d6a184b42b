// src/models/kinematics.rs

use crate::math::{add, scale, Vector3};

/// 運動状態（ターゲット・チェイサー共通）
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicState {
    pub position: Vector3, // [x, y, z] 座標 (m)
    pub velocity: Vector3, // [vx, vy, vz] 速度 (m/s)
}

/// 位置を更新する純粋関数（陽的オイラー法）
///
/// # 引数
/// - `current_position`: 現在の位置ベクトル [x, y, z]
/// - `velocity`: 速度ベクトル [vx, vy, vz]
/// - `dt`: 時間ステップ（秒）
///
/// # 戻り値
/// - 更新後の位置ベクトル [x, y, z]
pub fn update_position(current_position: &Vector3, velocity: &Vector3, dt: f64) -> Vector3 {
    add(current_position, &scale(velocity, dt))
}
