//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序不作天文推算，農曆日期一律取自官方逐年發佈的《公曆與農曆日期對照表》，見 [`table`]。

use chrono::Weekday;

use crate::date::Date;

pub mod fmt;
pub mod numeral;
pub mod table;

/// 曆表中的一日
///
/// # 用例
///
/// ```
/// use tabelo::Date;
/// use tabelo::chinese::DayRecord;
///
/// let record = DayRecord {
///     solar: Date::new(2023, 3, 26),
///     lunar: Date::new(2023, 2, 5),
///     leap_month: true,
///     weekday_index: 0,
///     weekday_raw: "星期日".into(),
///     solar_term: None,
/// };
/// assert_eq!(Some("閏二月初五".into()), record.lunar_name());
/// assert_eq!(chrono::Weekday::Sun, record.weekday());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayRecord {
    /// 公曆日期
    pub solar: Date,
    /// 農曆日期，年份為正月所在公元年；月份為 0 表示尚未得知
    pub lunar: Date,
    /// 所在月為閏月。年初月份待定之日一律記為平月，故曆表若以閏月開年（如 2034 年始於閏十一月），
    /// 其首個月名之前各日仍標作平月。
    pub leap_month: bool,
    /// 星期序號，星期日為 0
    pub weekday_index: u8,
    /// 曆表「星期」一欄原文
    pub weekday_raw: String,
    /// 當日交節的節氣名稱
    pub solar_term: Option<String>,
}

impl DayRecord {
    /// 取得星期。
    pub fn weekday(&self) -> Weekday {
        match self.weekday_index % 7 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// 取得農曆月日的文本形式，如「正月初一」「閏二月初五」。
    ///
    /// 月、日超出範圍則返回 `None`。
    pub fn lunar_name(&self) -> Option<String> {
        let Date { month, day, .. } = self.lunar;
        if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
            return None;
        }
        Some(fmt::month(month, self.leap_month) + &fmt::day(day))
    }

    /// 當日交節則返回 `true`
    pub fn is_solar_term(&self) -> bool {
        self.solar_term.as_deref().is_some_and(|s| !s.is_empty())
    }
}
