// src/models/target.rs

use crate::math::{add, Vector3};
use crate::models::kinematics::{update_position, KinematicState};

/// ターゲットの状態を1ステップ更新する純粋関数
///
/// 速度にバイアスを加算してから位置を積分するため、軌道は曲線になる。
pub fn update_target(target: &KinematicState, acceleration_bias: &Vector3, dt: f64) -> KinematicState {
    let velocity = add(&target.velocity, acceleration_bias);
    let position = update_position(&target.position, &velocity, dt);

    KinematicState { position, velocity }
}
