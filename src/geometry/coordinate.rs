use std::fmt;

#[cfg(test)]
use proptest::prelude::*;
#[cfg(any(test, feature = "random"))]
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    geometry::{
        LonLat,
        constants::{LATITUDE_RANGE, LONGITUDE_RANGE},
        distance, offset,
    },
};

/// 緯度・経度で表される地理座標。
///
/// 値はいずれも度単位で、生成時に範囲が検証される。
/// 範囲外の値を折り返して正規化することはしない。
///
/// ```
/// pub struct Coordinate {
///     latitude: f64,  // -90.0..=90.0
///     longitude: f64, // -180.0..=180.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CoordinateRepr"))]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

/// デシリアライズ時に [`Coordinate::new`] で検証するための中間表現
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct CoordinateRepr {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<CoordinateRepr> for Coordinate {
    type Error = Error;

    fn try_from(value: CoordinateRepr) -> Result<Self, Self::Error> {
        Coordinate::new(value.latitude, value.longitude)
    }
}

impl fmt::Display for Coordinate {
    /// 形式は `"{latitude},{longitude}"`。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// 緯度が有効範囲内かを検証する。`NaN` は常に範囲外となる。
pub(crate) fn check_latitude(latitude: f64) -> Result<f64, Error> {
    if !LATITUDE_RANGE.contains(&latitude) {
        tracing::debug!(latitude, "latitude out of range");
        return Err(Error::LatitudeOutOfRange { latitude });
    }
    Ok(latitude)
}

/// 経度が有効範囲内かを検証する。`NaN` は常に範囲外となる。
pub(crate) fn check_longitude(longitude: f64) -> Result<f64, Error> {
    if !LONGITUDE_RANGE.contains(&longitude) {
        tracing::debug!(longitude, "longitude out of range");
        return Err(Error::LongitudeOutOfRange { longitude });
    }
    Ok(longitude)
}

/// 2点分の座標をまとめて検証する。
///
/// 両方の緯度を検証してから経度を検証する（`lat1`, `lat2`, `lon1`, `lon2` の順）。
/// 緯度と経度が共に範囲外の場合は、常に緯度のエラーが返る。
pub(crate) fn check_pair(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
) -> Result<(Coordinate, Coordinate), Error> {
    let lat1 = check_latitude(lat1)?;
    let lat2 = check_latitude(lat2)?;
    let lon1 = check_longitude(lon1)?;
    let lon2 = check_longitude(lon2)?;

    Ok((
        Coordinate {
            latitude: lat1,
            longitude: lon1,
        },
        Coordinate {
            latitude: lat2,
            longitude: lon2,
        },
    ))
}

impl Coordinate {
    /// 緯度・経度から [`Coordinate`] を生成する。
    ///
    /// # パラメータ
    /// * `latitude` — 緯度（度）-90.0..=90.0
    /// * `longitude` — 経度（度）-180.0..=180.0
    ///
    /// # バリデーション
    /// 緯度を先に検証し、範囲外なら [`Error::LatitudeOutOfRange`] を返す。
    /// 次に経度を検証し、範囲外なら [`Error::LongitudeOutOfRange`] を返す。
    ///
    /// ```
    /// # use sokuchi::{Coordinate, Error};
    /// let c = Coordinate::new(35.681236, 139.767125).unwrap();
    /// assert_eq!(c.as_latitude(), 35.681236);
    ///
    /// // 緯度・経度の両方が範囲外でも、緯度のエラーが優先される
    /// let err = Coordinate::new(100.0, 200.0).unwrap_err();
    /// assert_eq!(err, Error::LatitudeOutOfRange { latitude: 100.0 });
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, Error> {
        let latitude = check_latitude(latitude)?;
        let longitude = check_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// 緯度（度）を返す。
    pub fn as_latitude(&self) -> f64 {
        self.latitude
    }

    /// 経度（度）を返す。
    pub fn as_longitude(&self) -> f64 {
        self.longitude
    }

    /// `[経度, 緯度]` の順の配列に変換する。
    pub fn to_lon_lat(&self) -> LonLat {
        [self.longitude, self.latitude]
    }

    /// もう一方の座標との距離（メートル）を返す。
    ///
    /// [`distance_and_center`](crate::distance_and_center) と同じ互換計算で、
    /// 緯度・経度に `to_degrees()` を適用してから Haversine の公式に与える。
    /// 半径には [`WGS84_A`](crate::WGS84_A) を使用し、小数点以下4桁に丸める。
    ///
    /// ```
    /// # use sokuchi::Coordinate;
    /// let beijing = Coordinate::new(39.9042, 116.4074).unwrap();
    /// let shanghai = Coordinate::new(31.2304, 121.4737).unwrap();
    /// assert!((beijing.distance_to(&shanghai) - 5_003_196.1329).abs() < 1.0);
    /// ```
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        distance::great_circle_distance(self, other)
    }

    /// もう一方の座標との中心点を返す。
    ///
    /// 測地線上の中点ではなく、緯度・経度それぞれの算術平均である。
    /// 範囲内の2値の平均は必ず範囲内となるため、失敗しない。
    pub fn center(&self, other: &Coordinate) -> Coordinate {
        Coordinate {
            latitude: (self.latitude + other.latitude) / 2.0,
            longitude: (self.longitude + other.longitude) / 2.0,
        }
    }

    /// この座標を中心に、`distance` メートル離れた4点を `[経度, 緯度]` で返す。
    ///
    /// 結果は範囲の検証・正規化を行わない。極付近では経度が ±180 を超えることがある。
    pub fn offset_points(&self, distance: f64) -> [LonLat; 4] {
        offset::offset_from(self, distance)
    }

    /// 外部の乱数生成器を使用してランダムな [`Coordinate`] を生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random_using<R: Rng>(rng: &mut R) -> Self {
        Self {
            latitude: rng.random_range(LATITUDE_RANGE),
            longitude: rng.random_range(LONGITUDE_RANGE),
        }
    }

    /// 有効範囲全体からランダムな [`Coordinate`] を生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self::random_using(&mut rng)
    }

    #[cfg(test)]
    pub fn arb() -> impl Strategy<Value = Self> {
        (LATITUDE_RANGE, LONGITUDE_RANGE)
            .prop_map(|(latitude, longitude)| Coordinate::new(latitude, longitude).unwrap())
    }

    /// 極付近を除いた範囲でランダムな [`Coordinate`] を生成する。
    #[cfg(test)]
    pub fn arb_mid_latitude() -> impl Strategy<Value = Self> {
        (-80.0..=80.0f64, -170.0..=170.0f64)
            .prop_map(|(latitude, longitude)| Coordinate::new(latitude, longitude).unwrap())
    }
}

impl TryFrom<LonLat> for Coordinate {
    type Error = Error;

    /// `[経度, 緯度]` の配列から生成する。検証順は緯度が先。
    fn try_from(value: LonLat) -> Result<Self, Self::Error> {
        Coordinate::new(value[1], value[0])
    }
}

impl From<Coordinate> for LonLat {
    fn from(value: Coordinate) -> Self {
        value.to_lon_lat()
    }
}
