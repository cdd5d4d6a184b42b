// src/simulation/csv.rs

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::simulation::dataset::{Dataset, DatasetRow, COLUMNS};
use crate::simulation::error::SimulationError;

/// CSVヘッダーの書き込み
pub fn write_csv_header<W: Write>(writer: &mut W) -> Result<(), std::io::Error> {
    let mut header = COLUMNS.join(",");
    header.push('\n');
    writer.write_all(header.as_bytes())
}

/// CSV行の作成
///
/// 浮動小数点数は最短の往復可能表現（`0.0`, `-500.0` など）で出力する。
pub fn create_csv_row(row: &DatasetRow) -> String {
    let mut line = row
        .values()
        .iter()
        .map(|value| format!("{:?}", value))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

/// 任意の書き込み先へデータセット全体を出力する
pub fn write_dataset_to<W: Write>(writer: &mut W, dataset: &Dataset) -> Result<(), std::io::Error> {
    write_csv_header(writer)?;
    for row in &dataset.rows {
        writer.write_all(create_csv_row(row).as_bytes())?;
    }
    writer.flush()
}

/// データセットをCSVファイルに書き込む（親ディレクトリは必要に応じて作成）
pub fn write_dataset<P: AsRef<Path>>(path: P, dataset: &Dataset) -> Result<(), SimulationError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    write_dataset_to(&mut writer, dataset)?;
    Ok(())
}
