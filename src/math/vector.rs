// src/math/vector.rs

/// 3次元ベクトル [x, y, z]
pub type Vector3 = [f64; 3];

/// ベクトルの和 a + b
pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// ベクトルの差 a - b
pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// スカラー倍 v * k
pub fn scale(v: &Vector3, k: f64) -> Vector3 {
    [v[0] * k, v[1] * k, v[2] * k]
}

/// ユークリッドノルム
pub fn norm(v: &Vector3) -> f64 {
    (v[0].powi(2) + v[1].powi(2) + v[2].powi(2)).sqrt()
}

/// v / (|v| + epsilon) による単位ベクトル近似
///
/// # 引数
/// - `v`: 入力ベクトル
/// - `epsilon`: ゼロ除算防止用のオフセット
///
/// # 戻り値
/// - 正規化されたベクトルと、オフセット込みのノルム
pub fn normalize_with_epsilon(v: &Vector3, epsilon: f64) -> (Vector3, f64) {
    let magnitude = norm(v) + epsilon;
    ([v[0] / magnitude, v[1] / magnitude, v[2] / magnitude], magnitude)
}
