// src/simulation/framework.rs

use tracing::{debug, info};

use crate::config::{Scenario, SimulationConfig, MAX_STEPS};
use crate::math::{norm, sub};
use crate::models::chaser::update_chaser;
use crate::models::target::update_target;
use crate::models::KinematicState;
use crate::simulation::{RelativeGeometry, SimulationState, StepRecord};

/// シミュレーションの実行結果
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    pub records: Vec<StepRecord>,
    pub intercepted_at: Option<usize>, // 迎撃が成立したステップ番号
}

/// シミュレーションステートの初期化
pub fn initialize_simulation_state(scenario: &Scenario) -> SimulationState {
    SimulationState {
        target: KinematicState {
            position: scenario.target.initial_position,
            velocity: scenario.target.initial_velocity,
        },
        chaser: KinematicState {
            position: scenario.chaser.initial_position,
            velocity: scenario.chaser.initial_velocity,
        },
    }
}

/// 相対位置・相対速度・距離の計算
pub fn relative_geometry(state: &SimulationState, epsilon: f64) -> RelativeGeometry {
    let relative_position = sub(&state.target.position, &state.chaser.position);
    let distance_between = norm(&relative_position) + epsilon;
    let relative_velocity = sub(&state.target.velocity, &state.chaser.velocity);

    RelativeGeometry {
        relative_position,
        relative_velocity,
        distance_between,
    }
}

/// 更新前の状態のスナップショットを作成する
pub fn snapshot(time_seconds: f64, state: &SimulationState, geometry: RelativeGeometry) -> StepRecord {
    StepRecord {
        time_seconds,
        target: state.target.clone(),
        chaser: state.chaser.clone(),
        geometry,
    }
}

/// シミュレーションステップの実行
///
/// `geometry` は更新前の状態から計算したものを渡す。
pub fn execute_simulation_step(
    state: &SimulationState,
    geometry: &RelativeGeometry,
    config: &SimulationConfig,
) -> SimulationState {
    let dt = config.simulation.dt;

    let chaser = update_chaser(
        &state.chaser,
        &geometry.relative_position,
        config.chaser.pursuit_gain,
        config.chaser.max_speed,
        config.simulation.distance_epsilon,
        dt,
    );
    let target = update_target(&state.target, &config.target.acceleration_bias, dt);

    SimulationState { target, chaser }
}

/// シミュレーションのメインループ
///
/// 各ステップで「記録 → 更新 → 迎撃判定」の順に処理する。迎撃判定は更新前の
/// 距離で行い、成立したステップの記録を最後としてループを抜ける。
pub fn run_simulation(config: &SimulationConfig) -> SimulationOutcome {
    let num_steps = config.num_steps();
    let dt = config.simulation.dt;
    let epsilon = config.simulation.distance_epsilon;

    let mut state = initialize_simulation_state(&config.scenario);
    let mut records = Vec::with_capacity(num_steps.min(MAX_STEPS));
    let mut intercepted_at = None;

    for step in 0..num_steps {
        let time_seconds = step as f64 * dt;
        let geometry = relative_geometry(&state, epsilon);
        let distance_between = geometry.distance_between;

        records.push(snapshot(time_seconds, &state, geometry.clone()));

        state = execute_simulation_step(&state, &geometry, config);

        if distance_between <= config.simulation.interception_threshold {
            info!(step, distance = distance_between, "迎撃成功: ステップ {}", step);
            intercepted_at = Some(step);
            break;
        }
    }

    debug!(
        steps = records.len(),
        intercepted = intercepted_at.is_some(),
        "シミュレーション終了"
    );

    SimulationOutcome {
        records,
        intercepted_at,
    }
}
