//! 地理空間座標（緯度・経度）に関する計算を扱うための型やロジック。
//!
//! 本モジュールでは、角度は度（°）、距離や半径はメートル（m）単位で扱います。
//! すべての関数は副作用を持たない純粋な計算であり、どのスレッドからでも呼び出せます。

/// 地理空間座標の計算で使用される各種の代表的な定数。
pub mod constants;

/// 緯度・経度で定義される `Coordinate` 型。
pub mod coordinate;

/// 2点間の距離と中心点。
pub mod distance;

/// 2点の中心経緯度。
pub mod center;

/// 中心点から一定距離離れた4点。
pub mod offset;

/// `[経度, 緯度]` の順に並べた座標（度）。
pub type LonLat = [f64; 2];
