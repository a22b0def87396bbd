#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    geometry::{
        constants::{DISTANCE_PRECISION, WGS84_A},
        coordinate::{Coordinate, check_pair},
    },
};

/// [`distance_and_center`] の結果。
///
/// 中心点（度）と2点間の距離（メートル、小数点以下4桁に丸め）を保持する。
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CenterResult {
    /// 中心点の経度
    pub lon: f64,
    /// 中心点の緯度
    pub lat: f64,
    /// 2点間の距離（メートル）
    pub distance: f64,
}

/// 2点間の距離を Haversine の公式で求め、小数点以下4桁に丸める。
///
/// 既存の利用側との互換のため、緯度・経度（度）に `to_degrees()` を適用した値を
/// 角度（ラジアン）として公式に与える。実際の大円距離とは一致しない。
pub(crate) fn great_circle_distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let rad_lat1 = a.as_latitude().to_degrees();
    let rad_lat2 = b.as_latitude().to_degrees();
    let d_lat = rad_lat1 - rad_lat2;
    let d_lon = a.as_longitude().to_degrees() - b.as_longitude().to_degrees();

    let h = (d_lat / 2.0).sin().powi(2)
        + rad_lat1.cos() * rad_lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // 丸め誤差で [0, 1] を外れると sqrt / asin が NaN になる
    let s = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    (s * WGS84_A * DISTANCE_PRECISION).round() / DISTANCE_PRECISION
}

/// 2点の緯度・経度から、距離と中心点を計算する。
///
/// 引数は緯度を先に取る（`lat1, lon1, lat2, lon2`）。
/// 中心点は測地線上の中点ではなく、緯度・経度それぞれの算術平均である。
/// 距離は度の値を `to_degrees()` してから公式に与える互換計算であり、
/// 北京〜上海で約 5,003,196 m となる。
///
/// # バリデーション
/// `lat1`, `lat2`, `lon1`, `lon2` の順に検証し、最初に見つかった範囲外の値について
/// [`Error::LatitudeOutOfRange`] または [`Error::LongitudeOutOfRange`] を返す。
///
/// ```
/// # use sokuchi::distance_and_center;
/// let result = distance_and_center(39.9042, 116.4074, 31.2304, 121.4737).unwrap();
/// assert!((result.lon - 118.94055).abs() < 1e-4);
/// assert!((result.lat - 35.5673).abs() < 1e-4);
/// assert!((result.distance - 5_003_196.1329).abs() < 1.0);
/// ```
pub fn distance_and_center(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
) -> Result<CenterResult, Error> {
    let (a, b) = check_pair(lat1, lon1, lat2, lon2)?;

    let distance = a.distance_to(&b);
    let center = a.center(&b);
    tracing::trace!(%a, %b, distance, "computed distance and center");

    Ok(CenterResult {
        lon: center.as_longitude(),
        lat: center.as_latitude(),
        distance,
    })
}
