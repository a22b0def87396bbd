use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

use crate::error::Error;

/// 曜日の表示名（日曜始まり）。
const WEEKDAYS: [&str; 7] = [
    "星期天", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六",
];

/// 秒単位のタイムスタンプを、ローカルタイムの `YYYY年M月D日H时M分` 形式に変換する。
///
/// 各値はゼロ埋めしない。
pub fn conversion_time(secs: i64) -> Result<String, Error> {
    conversion_time_in(secs, &Local)
}

/// 秒単位のタイムスタンプを、指定したタイムゾーンの `YYYY年M月D日H时M分` 形式に変換する。
///
/// 表現できないタイムスタンプの場合は [`Error::TimestampOutOfRange`] を返す。
///
/// ```
/// # use sokuchi::conversion_time_in;
/// use chrono::Utc;
/// assert_eq!(conversion_time_in(1633072800, &Utc).unwrap(), "2021年10月1日7时20分");
/// ```
pub fn conversion_time_in<Tz: TimeZone>(secs: i64, tz: &Tz) -> Result<String, Error> {
    let Some(utc) = DateTime::from_timestamp(secs, 0) else {
        tracing::debug!(secs, "timestamp out of range");
        return Err(Error::TimestampOutOfRange { secs });
    };
    let date = utc.with_timezone(tz);

    Ok(format!(
        "{}年{}月{}日{}时{}分",
        date.year(),
        date.month(),
        date.day(),
        date.hour(),
        date.minute()
    ))
}

/// `YYYY-MM-DD` 形式の日付文字列を返す。
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    format!("{}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// `HH:mm:ss` 形式の時刻文字列を返す。
pub fn format_time<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        date.hour(),
        date.minute(),
        date.second()
    )
}

/// 曜日の表示名（`星期一` など）を返す。
pub fn weekday_name<Tz: TimeZone>(date: &DateTime<Tz>) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_sunday() as usize]
}
