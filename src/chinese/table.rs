//! 公曆與農曆日期對照表的逐行解讀
//!
//! 曆表每年一檔，首三行為表頭，其後每行一日，以空白分隔各欄：
//!
//! ```text
//! 2023年1月21日     三十         星期六
//! 2023年1月22日     正月         星期日
//! 2023年1月23日     初二         星期一
//! ```
//!
//! 依次為公曆日期、農曆日期（月首日作月名）、星期，及可有可無的節氣。
//!
//! 年初數日所屬農曆月份須待其後首個月名出現方可得知，故逐行解讀時須攜帶 [`ScanState`]，未定月份之日暫存其中，見 [`ScanState::step`]。

use std::io::BufRead;

use chrono::NaiveDate;
use tracing::{trace, warn};

use super::DayRecord;
use super::numeral;
use crate::date::Date;
use crate::error::{Error, FormatError, Result};

/// 曆表格式設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFormat {
    /// 表頭行數
    header_lines: usize,
    /// 公曆日期月、日補零的最後一年（含）
    zero_padded_until: i32,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self {
            header_lines: 3,
            zero_padded_until: 2010,
        }
    }
}

impl TableFormat {
    /// 設定表頭行數
    pub fn with_header_lines(mut self, lines: usize) -> Self {
        self.header_lines = lines;
        self
    }

    /// 設定公曆日期補零的最後一年
    pub fn with_zero_padded_until(mut self, year: i32) -> Self {
        self.zero_padded_until = year;
        self
    }

    pub fn header_lines(&self) -> usize {
        self.header_lines
    }

    /// `file_year` 年曆表的公曆日期是否補零
    pub fn is_zero_padded(&self, file_year: i32) -> bool {
        file_year <= self.zero_padded_until
    }

    /// 依 `file_year` 年曆表的寫法解讀公曆日期。
    ///
    /// # 用例
    ///
    /// ```
    /// use tabelo::Date;
    /// use tabelo::chinese::table::TableFormat;
    ///
    /// let format = TableFormat::default();
    /// assert_eq!(Ok(Date::new(2010, 1, 5)), format.solar_date("2010年01月05日", 2010));
    /// assert_eq!(Ok(Date::new(2011, 1, 5)), format.solar_date("2011年1月5日", 2011));
    /// assert!(format.solar_date("2010年1月5日", 2010).is_err());
    /// ```
    pub fn solar_date(&self, text: &str, file_year: i32) -> Result<Date, FormatError> {
        let padded = self.is_zero_padded(file_year);
        let pattern = if padded {
            "%Y年%m月%d日"
        } else {
            "%Y年%-m月%-d日"
        };
        let date =
            NaiveDate::parse_from_str(text, pattern).map_err(|source| FormatError::SolarDate {
                text: text.to_owned(),
                source,
            })?;
        // chrono accepts single digits for %m and %d
        if padded && date.format(pattern).to_string() != text {
            return Err(FormatError::Padding {
                text: text.to_owned(),
            });
        }
        Ok(date.into())
    }
}

/// 一行曆表的各欄，農曆月份尚未與前後文結合
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub solar: Date,
    pub lunar: numeral::Numeral,
    pub weekday: u8,
    pub weekday_raw: String,
    pub solar_term: Option<String>,
}

/// 解讀一行曆表。空行返回 `Ok(None)`。
pub fn parse_line(
    line: &str,
    file_year: i32,
    format: &TableFormat,
) -> Result<Option<Line>, FormatError> {
    let mut fields = line.split_whitespace();
    let Some(solar) = fields.next() else {
        return Ok(None);
    };
    let solar = format.solar_date(solar, file_year)?;
    let lunar = fields
        .next()
        .map(numeral::decode)
        .ok_or(FormatError::MissingField { field: "lunar date" })?;
    let weekday_raw = fields
        .next()
        .ok_or(FormatError::MissingField { field: "weekday" })?;
    Ok(Some(Line {
        solar,
        lunar,
        weekday: numeral::weekday(weekday_raw),
        weekday_raw: weekday_raw.to_owned(),
        solar_term: fields.next().map(str::to_owned),
    }))
}

/// 逐行解讀時攜帶的農曆年、月，及未定月份的日子。
///
/// 每步消耗舊狀態並產生新狀態，見 [`step`](Self::step)。
#[derive(Debug, Clone, PartialEq)]
pub struct ScanState {
    lunar_year: i32,
    /// 0 表示尚未得知
    lunar_month: u32,
    leap: bool,
    pending: Vec<DayRecord>,
}

/// [`ScanState::step`] 的結果
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// 下一行使用的狀態
    pub state: ScanState,
    /// 本行產生的日子，空行為 `None`
    pub record: Option<DayRecord>,
    /// 本行之後月份已定、可入緩存的日子，按曆表順序
    pub resolved: Vec<DayRecord>,
}

impl ScanState {
    /// `file_year` 年曆表開頭的狀態：農曆年為前一年，月份未知。
    pub fn new(file_year: i32) -> Self {
        Self {
            lunar_year: file_year - 1,
            lunar_month: 0,
            leap: false,
            pending: Vec::new(),
        }
    }

    pub fn lunar_year(&self) -> i32 {
        self.lunar_year
    }

    /// 當前農曆月份，0 表示尚未得知
    pub fn lunar_month(&self) -> u32 {
        self.lunar_month
    }

    /// 未定月份的日子
    pub fn pending(&self) -> &[DayRecord] {
        &self.pending
    }

    /// 結束解讀，返回仍未定月份的日子。
    pub fn finish(self) -> Vec<DayRecord> {
        self.pending
    }

    /// 讀入一行。
    ///
    /// 遇月名時，暫存的日子屬於前一月（正月之前為十二月），隨即定下月份並出現在 `resolved` 中。
    ///
    /// # 用例
    ///
    /// ```
    /// use tabelo::Date;
    /// use tabelo::chinese::table::{ScanState, TableFormat};
    ///
    /// let format = TableFormat::default();
    /// let state = ScanState::new(2023);
    ///
    /// let step = state.step("2023年1月21日 三十 星期六", 2023, &format).unwrap();
    /// assert!(step.resolved.is_empty());
    /// assert_eq!(1, step.state.pending().len());
    ///
    /// let step = step.state.step("2023年1月22日 正月 星期日", 2023, &format).unwrap();
    /// let lunar: Vec<_> = step.resolved.iter().map(|r| r.lunar).collect();
    /// assert_eq!(vec![Date::new(2022, 12, 30), Date::new(2023, 1, 1)], lunar);
    /// ```
    pub fn step(
        self,
        line: &str,
        file_year: i32,
        format: &TableFormat,
    ) -> Result<Step, FormatError> {
        let Some(line) = parse_line(line, file_year, format)? else {
            return Ok(Step {
                state: self,
                record: None,
                resolved: Vec::new(),
            });
        };
        let Self {
            mut lunar_year,
            mut lunar_month,
            mut leap,
            mut pending,
        } = self;

        if line.lunar.new_year {
            lunar_year += 1;
        }
        let mut lunar_day = line.lunar.value;
        let mut resolved = Vec::new();
        if line.lunar.is_month {
            lunar_month = line.lunar.value;
            leap = line.lunar.leap;
            lunar_day = 1;
            if !pending.is_empty() {
                let previous = match lunar_month {
                    0 | 1 => 12,
                    m => m - 1,
                };
                trace!(
                    month = previous,
                    days = pending.len(),
                    "resolved month of pending days"
                );
                resolved = std::mem::take(&mut pending);
                for record in &mut resolved {
                    record.lunar.month = previous;
                }
            }
        }

        let record = DayRecord {
            solar: line.solar,
            lunar: Date::new(lunar_year, lunar_month, lunar_day),
            leap_month: leap,
            weekday_index: line.weekday,
            weekday_raw: line.weekday_raw,
            solar_term: line.solar_term,
        };
        if lunar_month == 0 {
            pending.push(record.clone());
        } else {
            resolved.push(record.clone());
        }

        Ok(Step {
            state: Self {
                lunar_year,
                lunar_month,
                leap,
                pending,
            },
            record: Some(record),
            resolved,
        })
    }
}

/// 讀完 `file_year` 年的整份曆表，按曆表順序返回所有月份已定的日子。
///
/// 表末仍未定月份的日子被捨棄。
pub fn scan<R: BufRead>(
    reader: R,
    file_year: i32,
    format: &TableFormat,
) -> Result<Vec<DayRecord>> {
    let io_error = |source: std::io::Error| Error::Io {
        year: file_year,
        source,
    };
    let mut lines = (1usize..).zip(reader.lines());

    for header_line in 1..=format.header_lines() {
        match lines.next() {
            Some((_, line)) => {
                line.map_err(io_error)?;
            }
            None => {
                return Err(Error::Format {
                    year: file_year,
                    line: header_line,
                    source: FormatError::TruncatedHeader,
                });
            }
        }
    }

    let mut state = ScanState::new(file_year);
    let mut records = Vec::new();
    for (line_num, line) in lines {
        let line = line.map_err(io_error)?;
        let step = state
            .step(&line, file_year, format)
            .map_err(|source| Error::Format {
                year: file_year,
                line: line_num,
                source,
            })?;
        records.extend(step.resolved);
        state = step.state;
    }

    let dropped = state.finish();
    if !dropped.is_empty() {
        warn!(
            year = file_year,
            days = dropped.len(),
            "table ends with days of unknown lunar month"
        );
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "2023(癸卯 - 肖兔)年公曆與農曆日期對照表\n\n公曆日期 農曆日期 星期 節氣\n";

    fn table(body: &str) -> String {
        HEADER.to_owned() + body
    }

    #[test]
    fn parse_fields() {
        let format = TableFormat::default();
        let line = parse_line("2023年2月4日   十四   星期六   立春", 2023, &format)
            .unwrap()
            .unwrap();
        assert_eq!(Date::new(2023, 2, 4), line.solar);
        assert_eq!(14, line.lunar.value);
        assert_eq!(6, line.weekday);
        assert_eq!("星期六", line.weekday_raw);
        assert_eq!(Some("立春".to_owned()), line.solar_term);
    }

    #[test]
    fn parse_blank_and_short_lines() {
        let format = TableFormat::default();
        assert_eq!(Ok(None), parse_line("   \r", 2023, &format));
        assert_eq!(Ok(None), parse_line("", 2023, &format));
        assert_eq!(
            Err(FormatError::MissingField { field: "weekday" }),
            parse_line("2023年2月4日 十四", 2023, &format)
        );
        assert_eq!(
            Err(FormatError::MissingField { field: "lunar date" }),
            parse_line("2023年2月4日", 2023, &format)
        );
    }

    #[test]
    fn solar_date_padding() {
        let format = TableFormat::default();
        for (ok, text, year) in [
            (true, "2010年12月31日", 2010),
            (true, "1901年02月01日", 1901),
            (false, "2010年1月05日", 2010),
            (true, "2011年1月5日", 2011),
            (true, "2011年12月25日", 2011),
            (false, "2011-01-05", 2011),
            (false, "2011年2月30日", 2011),
        ] {
            assert_eq!(ok, format.solar_date(text, year).is_ok(), "{text}");
        }
        let format = TableFormat::default().with_zero_padded_until(1900);
        assert!(format.solar_date("1901年2月1日", 1901).is_ok());
    }

    #[test]
    fn deferred_month() {
        let text = table(
            "2023年1月19日 廿八 星期四\n\
             2023年1月20日 廿九 星期五 大寒\n\
             2023年1月21日 三十 星期六\n\
             2023年1月22日 正月 星期日\n\
             2023年1月23日 初二 星期一\n",
        );
        let records = scan(text.as_bytes(), 2023, &TableFormat::default()).unwrap();
        let lunar: Vec<_> = records.iter().map(|r| r.lunar).collect();
        assert_eq!(
            vec![
                Date::new(2022, 12, 28),
                Date::new(2022, 12, 29),
                Date::new(2022, 12, 30),
                Date::new(2023, 1, 1),
                Date::new(2023, 1, 2),
            ],
            lunar
        );
        assert_eq!(Some("大寒"), records[1].solar_term.as_deref());
    }

    #[test]
    fn deferred_month_before_mid_year_month() {
        let text = table(
            "2024年1月9日 廿八 星期二\n\
             2024年1月10日 廿九 星期三\n\
             2024年1月11日 十二月 星期四\n",
        );
        let records = scan(text.as_bytes(), 2024, &TableFormat::default()).unwrap();
        assert_eq!(Date::new(2023, 11, 28), records[0].lunar);
        assert_eq!(Date::new(2023, 11, 29), records[1].lunar);
        assert_eq!(Date::new(2023, 12, 1), records[2].lunar);
    }

    #[test]
    fn leap_month_carries_over() {
        let state = ScanState::new(2023);
        let format = TableFormat::default();
        let step = state
            .step("2023年3月22日 閏二月 星期三", 2023, &format)
            .unwrap();
        let step = step
            .state
            .step("2023年3月23日 初二 星期四", 2023, &format)
            .unwrap();
        let record = step.record.unwrap();
        assert_eq!(Date::new(2022, 2, 2), record.lunar);
        assert!(record.leap_month);

        let step = step
            .state
            .step("2023年4月20日 三月 星期四", 2023, &format)
            .unwrap();
        assert!(!step.record.unwrap().leap_month);
    }

    #[test]
    fn trailing_pending_days_are_dropped() {
        let text = table(
            "2023年1月20日 廿九 星期五\n\
             2023年1月21日 三十 星期六\n",
        );
        let records = scan(text.as_bytes(), 2023, &TableFormat::default()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn blank_lines_keep_state() {
        let format = TableFormat::default();
        let step = ScanState::new(2023)
            .step("2023年1月21日 三十 星期六", 2023, &format)
            .unwrap();
        let step = step.state.step("", 2023, &format).unwrap();
        assert_eq!(None, step.record);
        assert_eq!(1, step.state.pending().len());
        assert_eq!(2022, step.state.lunar_year());
        assert_eq!(0, step.state.lunar_month());
    }

    #[test]
    fn format_errors_report_line() {
        let text = table(
            "2023年1月22日 正月 星期日\n\
             2023/1/23 初二 星期一\n",
        );
        match scan(text.as_bytes(), 2023, &TableFormat::default()) {
            Err(Error::Format {
                year: 2023,
                line: 5,
                source: FormatError::SolarDate { text, .. },
            }) => assert_eq!("2023/1/23", text),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn truncated_header() {
        let result = scan("only one line\n".as_bytes(), 2023, &TableFormat::default());
        assert!(matches!(
            result,
            Err(Error::Format {
                source: FormatError::TruncatedHeader,
                ..
            })
        ));
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let mut bytes = HEADER.as_bytes().to_vec();
        bytes.extend_from_slice(b"\xff\xfe\n");
        let result = scan(bytes.as_slice(), 2023, &TableFormat::default());
        assert!(matches!(result, Err(Error::Io { year: 2023, .. })));
    }
}
