// src/simulation/dataset.rs

use crate::math::Vector3;
use crate::simulation::StepRecord;

/// 出力テーブルの列（固定順）
pub const COLUMNS: [&str; 23] = [
    "time_seconds",
    "target_position_x",
    "target_position_y",
    "target_position_z",
    "target_velocity_x",
    "target_velocity_y",
    "target_velocity_z",
    "chaser_position_x",
    "chaser_position_y",
    "chaser_position_z",
    "chaser_velocity_x",
    "chaser_velocity_y",
    "chaser_velocity_z",
    "relative_position_x",
    "relative_position_y",
    "relative_position_z",
    "relative_velocity_x",
    "relative_velocity_y",
    "relative_velocity_z",
    "distance_between",
    "next_chaser_position_x",
    "next_chaser_position_y",
    "next_chaser_position_z",
];

/// 特徴量（ステップ記録）と教師ラベル（次ステップのチェイサー位置）の組
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRow {
    pub record: StepRecord,
    pub next_chaser_position: Vector3,
}

impl DatasetRow {
    /// `COLUMNS` と同じ順序で値を並べる
    pub fn values(&self) -> [f64; 23] {
        let r = &self.record;
        let g = &r.geometry;
        [
            r.time_seconds,
            r.target.position[0],
            r.target.position[1],
            r.target.position[2],
            r.target.velocity[0],
            r.target.velocity[1],
            r.target.velocity[2],
            r.chaser.position[0],
            r.chaser.position[1],
            r.chaser.position[2],
            r.chaser.velocity[0],
            r.chaser.velocity[1],
            r.chaser.velocity[2],
            g.relative_position[0],
            g.relative_position[1],
            g.relative_position[2],
            g.relative_velocity[0],
            g.relative_velocity[1],
            g.relative_velocity[2],
            g.distance_between,
            self.next_chaser_position[0],
            self.next_chaser_position[1],
            self.next_chaser_position[2],
        ]
    }
}

/// 教師あり学習用のデータセット
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub rows: Vec<DatasetRow>,
}

impl Dataset {
    /// (行数, 列数)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), COLUMNS.len())
    }
}

/// ステップ記録からデータセットを構築する
///
/// 行 i のラベルは行 i+1 のチェイサー位置。後続のない最終行は捨てるため、
/// N 件の記録から N-1 行（記録が0件なら0行）のデータセットになる。
pub fn build_dataset(records: &[StepRecord]) -> Dataset {
    let rows = records
        .windows(2)
        .map(|pair| DatasetRow {
            record: pair[0].clone(),
            next_chaser_position: pair[1].chaser.position,
        })
        .collect();

    Dataset { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::simulation::framework::run_simulation;

    #[test]
    fn test_columns_order() {
        assert_eq!(COLUMNS.len(), 23);
        assert_eq!(COLUMNS[0], "time_seconds");
        assert_eq!(COLUMNS[19], "distance_between");
        assert_eq!(COLUMNS[20], "next_chaser_position_x");
        assert_eq!(COLUMNS[22], "next_chaser_position_z");
    }

    #[test]
    fn test_labels_are_next_chaser_position() {
        let outcome = run_simulation(&SimulationConfig::default());
        let dataset = build_dataset(&outcome.records);

        assert_eq!(dataset.rows.len(), outcome.records.len() - 1);
        for (i, row) in dataset.rows.iter().enumerate() {
            assert_eq!(row.next_chaser_position, outcome.records[i + 1].chaser.position);
            assert_eq!(row.record, outcome.records[i]);
        }
        for pair in dataset.rows.windows(2) {
            assert_eq!(pair[0].next_chaser_position, pair[1].record.chaser.position);
        }
    }

    #[test]
    fn test_last_record_is_dropped() {
        let mut config = SimulationConfig::default();
        config.simulation.total_time = 1.0;
        let outcome = run_simulation(&config);
        let dataset = build_dataset(&outcome.records);

        let last_time = outcome.records.last().unwrap().time_seconds;
        assert_eq!(dataset.shape(), (9, 23));
        assert!(dataset.rows.iter().all(|row| row.record.time_seconds < last_time));
    }

    #[test]
    fn test_short_record_sequences() {
        assert!(build_dataset(&[]).rows.is_empty());

        let mut config = SimulationConfig::default();
        config.scenario.chaser.initial_position = config.scenario.target.initial_position;
        let outcome = run_simulation(&config);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(build_dataset(&outcome.records).shape(), (0, 23));
    }

    #[test]
    fn test_default_run_row_count() {
        let config = SimulationConfig::default();
        let outcome = run_simulation(&config);
        let dataset = build_dataset(&outcome.records);

        match outcome.intercepted_at {
            Some(step) => assert_eq!(dataset.rows.len(), step),
            None => assert_eq!(dataset.rows.len(), config.num_steps() - 1),
        }
    }

    #[test]
    fn test_values_follow_column_order() {
        let outcome = run_simulation(&SimulationConfig::default());
        let dataset = build_dataset(&outcome.records);
        let row = &dataset.rows[0];
        let values = row.values();

        assert_eq!(values[0], 0.0);
        assert_eq!(&values[1..4], &[0.0, 0.0, 500.0]);
        assert_eq!(&values[7..10], &[-500.0, -3000.0, 0.0]);
        assert_eq!(values[19], row.record.geometry.distance_between);
        assert_eq!(&values[20..23], &row.next_chaser_position[..]);
    }
}
