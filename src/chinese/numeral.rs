//! 曆表中漢數字的解讀
//!
//! 曆表「農曆日期」一欄或為日名（如「初五」「廿三」），或於月首日為月名（如「正月」「閏二月」）。

/// 閏月前綴
pub const LEAP: char = '閏';
/// 月名後綴
pub const MONTH: char = '月';
/// 「正」：正月，見之則農曆年份加一
pub const FIRST_MONTH: char = '正';

/// 日名、月名所用漢數字與數值的對照。表外字符一律作 0。
///
/// 「初」「天」作 0，「廿」作 2，「十」作 10，其組合規則見 [`decode`]。
pub const NUMERALS: &[(char, u32)] = &[
    ('天', 0),
    ('初', 0),
    ('正', 1),
    ('一', 1),
    ('二', 2),
    ('廿', 2),
    ('三', 3),
    ('四', 4),
    ('五', 5),
    ('六', 6),
    ('七', 7),
    ('八', 8),
    ('九', 9),
    ('十', 10),
];

/// 「星期」一欄末字與星期序號（星期日為 0）的對照。
///
/// 與 [`NUMERALS`] 中相同字符的取值一致，但二者用途不同，故分列。
pub const WEEKDAYS: &[(char, u8)] = &[
    ('日', 0),
    ('天', 0),
    ('一', 1),
    ('二', 2),
    ('三', 3),
    ('四', 4),
    ('五', 5),
    ('六', 6),
];

/// 一欄農曆日期的解讀結果
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Numeral {
    /// 數值：`is_month` 時為月序號，否則為日序號；無法解讀時為 0
    pub value: u32,
    /// 帶「閏」前綴
    pub leap: bool,
    /// 帶「月」後綴，即該日為月首
    pub is_month: bool,
    /// 末字為「正」，即新農曆年開始
    pub new_year: bool,
}

/// 查單個漢數字的數值，表外字符返回 0。
///
/// # 用例
///
/// ```
/// use tabelo::chinese::numeral;
///
/// assert_eq!(2, numeral::digit('廿'));
/// assert_eq!(0, numeral::digit('冬'));
/// ```
pub fn digit(c: char) -> u32 {
    NUMERALS
        .iter()
        .find(|&&(k, _)| k == c)
        .map_or(0, |&(_, v)| v)
}

/// 解讀日名或月名。
///
/// 首字為十位、末字為個位：十位的「十」作 1，十位非零而個位為「十」時十位減一，故「十一」為 11、「二十」為 20、「三十」為 30。
///
/// # 用例
///
/// ```
/// use tabelo::chinese::numeral::decode;
///
/// assert_eq!(23, decode("廿三").value);
/// assert_eq!(30, decode("三十").value);
///
/// let first = decode("正月");
/// assert!(first.is_month && first.new_year);
/// assert_eq!(1, first.value);
///
/// let leap = decode("閏二月");
/// assert!(leap.leap && leap.is_month);
/// assert_eq!(2, leap.value);
/// ```
pub fn decode(text: &str) -> Numeral {
    let (leap, text) = match text.strip_prefix(LEAP) {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (is_month, text) = match text.strip_suffix(MONTH) {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let mut chars = text.chars();
    let Some(last) = chars.next_back() else {
        return Numeral {
            leap,
            is_month,
            ..Default::default()
        };
    };
    let units = digit(last);

    let mut tens = chars.next().map_or(0, digit);
    if tens == 10 {
        tens = 1;
    }
    if tens != 0 && units == 10 {
        tens -= 1;
    }

    Numeral {
        value: tens * 10 + units,
        leap,
        is_month,
        new_year: last == FIRST_MONTH,
    }
}

/// 依「星期」一欄末字取得星期序號（星期日為 0），無法解讀時為 0。
///
/// # 用例
///
/// ```
/// use tabelo::chinese::numeral::weekday;
///
/// assert_eq!(3, weekday("星期三"));
/// assert_eq!(0, weekday("星期日"));
/// ```
pub fn weekday(text: &str) -> u8 {
    text.chars()
        .next_back()
        .and_then(|c| WEEKDAYS.iter().find(|&&(k, _)| k == c))
        .map_or(0, |&(_, v)| v)
}
