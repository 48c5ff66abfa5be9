//! Synthetic calendar tables shared by the integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{self, Cursor};

use chrono::{Datelike, NaiveDate};
use tabelo::chinese::fmt;
use tracing_subscriber::EnvFilter;

/// Writes a table one day at a time, starting from January 1 of `file_year`.
pub struct TableBuilder {
    file_year: i32,
    date: NaiveDate,
    terms: Vec<(u32, u32, &'static str)>,
    lines: Vec<String>,
}

impl TableBuilder {
    pub fn new(file_year: i32) -> Self {
        Self {
            file_year,
            date: NaiveDate::from_ymd_opt(file_year, 1, 1).unwrap(),
            terms: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Annotates the solar date `month`/`day` with a solar term.
    pub fn term(mut self, month: u32, day: u32, name: &'static str) -> Self {
        self.terms.push((month, day, name));
        self
    }

    /// Emits plain day lines numbered `from..=to`.
    pub fn days(mut self, from: u32, to: u32) -> Self {
        for d in from..=to {
            self.push(fmt::day(d));
        }
        self
    }

    /// Emits a month of `len` days, headed by its month name.
    pub fn month(mut self, month: u32, leap: bool, len: u32) -> Self {
        self.push(fmt::month(month, leap));
        self.days(2, len)
    }

    pub fn build(&self) -> String {
        let mut text = format!(
            "{}年公曆與農曆日期對照表\n\n公曆日期     農曆日期     星期     節氣\n",
            self.file_year
        );
        for line in &self.lines {
            text += line;
            text += "\n";
        }
        text
    }

    fn push(&mut self, lunar: String) {
        let (m, d) = (self.date.month(), self.date.day());
        let solar = if self.file_year <= 2010 {
            format!("{}年{:02}月{:02}日", self.date.year(), m, d)
        } else {
            format!("{}年{}月{}日", self.date.year(), m, d)
        };
        let weekday = fmt::weekday(self.date.weekday().num_days_from_sunday() as u8);
        let term = self
            .terms
            .iter()
            .find(|&&(tm, td, _)| (tm, td) == (m, d))
            .map_or("", |&(_, _, name)| name);
        self.lines
            .push(format!("{solar}     {lunar}     {weekday}     {term}").trim_end().to_owned());
        self.date = self.date.succ_opt().unwrap();
    }
}

/// 2023, with its leap second month. Ends on 2023-12-31, 冬月十九.
pub fn table_2023() -> String {
    TableBuilder::new(2023)
        .term(1, 5, "小寒")
        .term(1, 20, "大寒")
        .term(2, 4, "立春")
        .term(2, 19, "雨水")
        .term(12, 22, "冬至")
        .days(10, 30)
        .month(1, false, 29)
        .month(2, false, 30)
        .month(2, true, 29)
        .month(3, false, 29)
        .month(4, false, 30)
        .month(5, false, 30)
        .month(6, false, 29)
        .month(7, false, 30)
        .month(8, false, 30)
        .month(9, false, 29)
        .month(10, false, 30)
        .month(11, false, 19)
        .build()
}

/// The first weeks of 2024, up to 2024-03-09.
pub fn table_2024() -> String {
    TableBuilder::new(2024)
        .term(1, 6, "小寒")
        .term(1, 20, "大寒")
        .term(2, 4, "立春")
        .term(2, 19, "雨水")
        .days(20, 29)
        .month(12, false, 30)
        .month(1, false, 29)
        .build()
}

/// The first weeks of 2010, written with zero-padded dates.
pub fn table_2010() -> String {
    TableBuilder::new(2010)
        .term(2, 4, "立春")
        .days(17, 30)
        .month(12, false, 30)
        .month(1, false, 15)
        .build()
}

/// A closure source serving the given tables; other years are missing.
pub fn memory_source(
    tables: Vec<(i32, String)>,
) -> impl Fn(i32) -> io::Result<Cursor<String>> {
    let tables: HashMap<i32, String> = tables.into_iter().collect();
    move |year| {
        tables
            .get(&year)
            .map(|text| Cursor::new(text.clone()))
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no table for {year}")))
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
