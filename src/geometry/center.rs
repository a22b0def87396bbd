use crate::{
    error::Error,
    geometry::{LonLat, coordinate::check_pair},
};

/// 2点の中心経緯度を `[経度, 緯度]` で返す。
///
/// 引数は経度を先に取る（`lon1, lat1, lon2, lat2`）。
/// [`distance_and_center`](crate::distance_and_center) とは引数の順序が異なる点に注意。
///
/// 三角関数は使わず、緯度・経度それぞれの算術平均を取る。
///
/// # バリデーション
/// 引数の順序に関係なく、`lat1`, `lat2`, `lon1`, `lon2` の順に検証する。
///
/// ```
/// # use sokuchi::{center, Error};
/// let [lon, lat] = center(116.4074, 39.9042, 121.4737, 31.2304).unwrap();
/// assert!((lon - 118.94055).abs() < 1e-4);
/// assert!((lat - 35.5673).abs() < 1e-4);
///
/// assert_eq!(
///     center(190.0, 100.0, 0.0, 0.0),
///     Err(Error::LatitudeOutOfRange { latitude: 100.0 })
/// );
/// ```
pub fn center(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> Result<LonLat, Error> {
    let (a, b) = check_pair(lat1, lon1, lat2, lon2)?;
    Ok(a.center(&b).to_lon_lat())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, distance_and_center};
    use proptest::prelude::*;

    #[test]
    fn beijing_shanghai_center() {
        let [lon, lat] = center(116.4074, 39.9042, 121.4737, 31.2304).unwrap();
        assert!((lon - 118.94055).abs() < 1e-4);
        assert!((lat - 35.5673).abs() < 1e-4);
    }

    #[test]
    fn invalid_longitude() {
        assert_eq!(
            center(190.0, 39.9042, 121.4737, 31.2304),
            Err(Error::LongitudeOutOfRange { longitude: 190.0 })
        );
    }

    #[test]
    fn invalid_latitude() {
        assert_eq!(
            center(116.4074, 100.0, 121.4737, 31.2304),
            Err(Error::LatitudeOutOfRange { latitude: 100.0 })
        );
    }

    ///経度が先の引数順でも、緯度が先に検証される
    #[test]
    fn latitude_is_validated_before_longitude() {
        assert_eq!(
            center(190.0, 39.9042, 121.4737, -100.0),
            Err(Error::LatitudeOutOfRange { latitude: -100.0 })
        );
    }

    #[test]
    fn dateline_is_not_wrapped() {
        //日付変更線をまたいでも単純平均のまま
        assert_eq!(center(179.0, 0.0, -179.0, 0.0).unwrap(), [0.0, 0.0]);
    }

    proptest! {
        ///距離計算と同じ中心点を返す
        #[test]
        fn matches_distance_and_center(a in Coordinate::arb(), b in Coordinate::arb()) {
            let [lon, lat] = center(
                a.as_longitude(), a.as_latitude(), b.as_longitude(), b.as_latitude(),
            ).unwrap();
            let result = distance_and_center(
                a.as_latitude(), a.as_longitude(), b.as_latitude(), b.as_longitude(),
            ).unwrap();
            prop_assert_eq!(lon, result.lon);
            prop_assert_eq!(lat, result.lat);
        }
    }
}
