// src/main.rs

use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use simulation::csv::write_dataset;
use simulation::dataset::build_dataset;
use simulation::framework::run_simulation;
use simulation::load_parameters::load_or_default;

mod config;
mod math;
mod models;
mod simulation;

const CONFIG_PATH: &str = "config/simulation.yaml";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .init();

    // 設定の読み込み（ファイルがなければ固定定数）
    let config = load_or_default(CONFIG_PATH)?;

    // シミュレーションの実行
    let outcome = run_simulation(&config);

    // 教師ラベルの付与と最終行の除去
    let dataset = build_dataset(&outcome.records);

    // CSV出力
    write_dataset(&config.output.path, &dataset)?;

    let (rows, columns) = dataset.shape();
    info!(
        rows,
        columns,
        intercepted_at = ?outcome.intercepted_at,
        path = %config.output.path,
        "データセットを生成しました"
    );

    Ok(())
}
