use std::ops::RangeInclusive;

/// WGS-84 楕円体の長半径（赤道半径）。
///
/// [`distance_and_center`](crate::distance_and_center) の距離計算で使用する。
pub const WGS84_A: f64 = 6_378_137.0;

/// 地球の平均半径。
///
/// [`offset_points`](crate::offset_points) で使用する。
/// [`WGS84_A`] とは別の値であり、統一してはならない。
pub const EARTH_MEAN_RADIUS: f64 = 6_371_000.0;

/// 距離を小数点以下4桁に丸めるための倍率
pub const DISTANCE_PRECISION: f64 = 10_000.0;

/// 緯度の有効範囲（度）
///
/// ```
/// # use sokuchi::LATITUDE_RANGE;
/// assert!(LATITUDE_RANGE.contains(&-90.0));
/// assert!(!LATITUDE_RANGE.contains(&90.1));
/// ```
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// 経度の有効範囲（度）
///
/// ```
/// # use sokuchi::LONGITUDE_RANGE;
/// assert!(LONGITUDE_RANGE.contains(&180.0));
/// assert!(!LONGITUDE_RANGE.contains(&-180.5));
/// ```
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;
