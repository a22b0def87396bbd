use std::f64::consts::FRAC_PI_2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    geometry::{LonLat, constants::EARTH_MEAN_RADIUS, coordinate::Coordinate},
};

/// [`offset_points`] への入力。中心点（度）と中心からの距離（メートル）。
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OffsetRequest {
    pub lat: f64,
    pub lon: f64,
    pub distance: f64,
}

/// 中心点から `distance` メートル離れた4点を求める。
///
/// `i = 0..4` について角度 `i·π/2` を方位の公式に与えて計算する。
/// この角度は方位角（北から時計回り）とは限らないため、結果を東西南北として扱わないこと。
pub(crate) fn offset_from(center: &Coordinate, distance: f64) -> [LonLat; 4] {
    let d = distance / EARTH_MEAN_RADIUS;
    let lat = center.as_latitude().to_radians();
    let lon = center.as_longitude().to_radians();

    std::array::from_fn(|i| {
        let angle = i as f64 * FRAC_PI_2;
        let new_lat = (lat.sin() * d.cos() + lat.cos() * d.sin() * angle.cos()).asin();
        let new_lon = lon
            + (angle.sin() * d.sin() * lat.cos()).atan2(d.cos() - lat.sin() * new_lat.sin());
        [new_lon.to_degrees(), new_lat.to_degrees()]
    })
}

/// 中心点から `distance` メートル離れた4点の座標を `[経度, 緯度]` の配列で返す。
///
/// 地球半径には平均半径 [`EARTH_MEAN_RADIUS`] を使用する。
/// 結果は `i = 0, 1, 2, 3` の固定順で、範囲の検証や正規化は行わない。
///
/// # バリデーション
/// 緯度、経度の順に検証する。`distance` は検証しない（負の値では反対側の点になる）。
///
/// ```
/// # use sokuchi::{offset_points, OffsetRequest};
/// let points = offset_points(OffsetRequest {
///     lat: 33.4148429,
///     lon: 113.5930592,
///     distance: 1.0,
/// })
/// .unwrap();
///
/// assert_eq!(points.len(), 4);
/// assert!((points[1][0] - 113.5930699741221).abs() < 1e-9);
/// ```
pub fn offset_points(request: OffsetRequest) -> Result<[LonLat; 4], Error> {
    let OffsetRequest { lat, lon, distance } = request;
    let center = Coordinate::new(lat, lon)?;

    let points = center.offset_points(distance);
    tracing::trace!(%center, distance, ?points, "computed offset points");

    Ok(points)
}
