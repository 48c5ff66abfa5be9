//! 以曆表書寫方式格式化農曆日期

/// 漢數字，第 `1..=9` 項分別為「一」到「九」。為便於格式化日期，第 0 項為「十」。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 取得月名（含「月」字），依曆表寫法，十一、十二月作「十一月」「十二月」。
///
/// # 用例
///
/// ```
/// use tabelo::chinese;
///
/// assert_eq!("十一月", chinese::fmt::month(11, false));
/// assert_eq!("閏正月", chinese::fmt::month(1, true));
/// ```
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn month(num: u32, leap: bool) -> String {
    let mut rt = String::new();
    if leap {
        rt += "閏";
    }
    rt += match num {
        1 => "正",
        2..=10 => NUM_CHINESE[(num % 10) as usize],
        11 => "十一",
        12 => "十二",
        _ => panic!("month {} not in 1..=12", num),
    };
    rt += "月";
    rt
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// # 用例
///
/// ```
/// use tabelo::chinese;
///
/// assert_eq!("初十", chinese::fmt::day(10));
/// assert_eq!("廿五", chinese::fmt::day(25));
/// assert_eq!("三十", chinese::fmt::day(30));
/// ```
///
/// # Panics
///
/// 若日序號不在 `1..=30` 間則 panic。
pub fn day(d: u32) -> String {
    match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => panic!("day {} not in 1..=30", d),
    }
    .to_owned()
        + NUM_CHINESE[(d % 10) as usize]
}

/// 星期序號（星期日為 0）轉為「星期」一欄文本。
///
/// ```
/// use tabelo::chinese;
///
/// assert_eq!("星期日", chinese::fmt::weekday(0));
/// assert_eq!("星期三", chinese::fmt::weekday(3));
/// ```
pub fn weekday(index: u8) -> &'static str {
    const NAMES: &[&str] = &[
        "星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六",
    ];
    NAMES[index as usize % 7]
}
