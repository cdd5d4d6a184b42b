// src/models/chaser.rs

use crate::math::{add, norm, normalize_with_epsilon, scale, Vector3};
use crate::models::kinematics::{update_position, KinematicState};

/// 目標方向への追跡加速度（教師方策）
///
/// # 引数
/// - `relative_position`: ターゲット位置 - チェイサー位置
/// - `pursuit_gain`: 加速度の大きさ (m/s²)
/// - `epsilon`: ゼロ除算防止用の距離オフセット
///
/// # 戻り値
/// - 加速度ベクトル [ax, ay, az]
pub fn pursuit_acceleration(relative_position: &Vector3, pursuit_gain: f64, epsilon: f64) -> Vector3 {
    let (direction, _) = normalize_with_epsilon(relative_position, epsilon);
    scale(&direction, pursuit_gain)
}

/// 速度の大きさを `max_speed` 以下に制限する
///
/// 制限を超えた場合は同じ向きのまま大きさを `max_speed` にそろえる。
pub fn clamp_speed(velocity: &Vector3, max_speed: f64) -> Vector3 {
    let speed = norm(velocity);
    if speed > max_speed {
        scale(velocity, max_speed / speed)
    } else {
        *velocity
    }
}

/// チェイサーの状態を1ステップ更新する純粋関数
///
/// 加速度 → 速度制限 → 位置積分の順に適用する。
pub fn update_chaser(
    chaser: &KinematicState,
    relative_position: &Vector3,
    pursuit_gain: f64,
    max_speed: f64,
    epsilon: f64,
    dt: f64,
) -> KinematicState {
    let acceleration = pursuit_acceleration(relative_position, pursuit_gain, epsilon);
    let velocity = add(&chaser.velocity, &scale(&acceleration, dt));
    let velocity = clamp_speed(&velocity, max_speed);
    let position = update_position(&chaser.position, &velocity, dt);

    KinematicState { position, velocity }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pursuit_acceleration_points_at_target() {
        let acceleration = pursuit_acceleration(&[100.0, 0.0, 0.0], 8.0, 1e-6);

        // 大きさはほぼ 8.0 で、epsilon の分だけわずかに小さい
        assert!((acceleration[0] - 8.0).abs() < 1e-6);
        assert!(acceleration[0] < 8.0);
        assert_eq!(acceleration[1], 0.0);
        assert_eq!(acceleration[2], 0.0);
    }

    #[test]
    fn test_clamp_speed_below_limit_is_untouched() {
        let velocity = [150.0, 120.0, 10.0];
        assert_eq!(clamp_speed(&velocity, 400.0), velocity);
    }

    #[test]
    fn test_clamp_speed_rescales_preserving_direction() {
        let velocity = [300.0, 400.0, 0.0]; // |v| = 500
        let clamped = clamp_speed(&velocity, 400.0);

        assert!((norm(&clamped) - 400.0).abs() < 1e-9);
        assert!((clamped[0] - 240.0).abs() < 1e-9);
        assert!((clamped[1] - 320.0).abs() < 1e-9);
        assert_eq!(clamped[2], 0.0);
    }

    #[test]
    fn test_update_chaser_single_step() {
        let chaser = KinematicState {
            position: [0.0, 0.0, 0.0],
            velocity: [0.0, 0.0, 0.0],
        };

        let updated = update_chaser(&chaser, &[100.0, 0.0, 0.0], 8.0, 400.0, 1e-6, 0.1);

        // v = 8.0 * 0.1 = 0.8, x = 0.8 * 0.1 = 0.08
        assert!((updated.velocity[0] - 0.8).abs() < 1e-6);
        assert!((updated.position[0] - 0.08).abs() < 1e-6);
        assert_eq!(updated.velocity[1], 0.0);
        assert_eq!(updated.position[2], 0.0);
    }

    #[test]
    fn test_update_chaser_respects_max_speed() {
        let chaser = KinematicState {
            position: [0.0, 0.0, 0.0],
            velocity: [399.9, 0.0, 0.0],
        };

        let updated = update_chaser(&chaser, &[1000.0, 0.0, 0.0], 8.0, 400.0, 1e-6, 0.1);

        assert!((norm(&updated.velocity) - 400.0).abs() < 1e-9);
        assert!((updated.position[0] - 40.0).abs() < 1e-9);
    }
}
