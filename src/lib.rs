/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// 緯度・経度による距離、中心点、オフセット点の計算。
mod geometry;

/// ランダムな英数字列の生成。
#[cfg(any(test, feature = "random"))]
mod random;

/// タイムスタンプや日時の文字列への整形。
mod time_format;

pub use error::Error;
pub use geometry::{
    LonLat,
    center::center,
    constants::{DISTANCE_PRECISION, EARTH_MEAN_RADIUS, LATITUDE_RANGE, LONGITUDE_RANGE, WGS84_A},
    coordinate::Coordinate,
    distance::{CenterResult, distance_and_center},
    offset::{OffsetRequest, offset_points},
};

#[cfg(any(test, feature = "random"))]
pub use random::{CHARACTERS, random_string, random_string_using};

pub use time_format::{conversion_time, conversion_time_in, format_date, format_time, weekday_name};
