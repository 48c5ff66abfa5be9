//! Solar/lunar conversion backed by per-year calendar tables.

use std::collections::{HashMap, HashSet};
use std::io::BufReader;

use tracing::debug;

use crate::cache::YearCache;
use crate::chinese::DayRecord;
use crate::chinese::table::{self, TableFormat};
use crate::date::Date;
use crate::error::{Error, Result};
use crate::source::FileSource;

/// Converts dates by looking them up in calendar tables.
///
/// Each file-year is read from the [`FileSource`] and scanned at most once
/// per converter; later lookups in either direction are served from memory.
/// A table that fails to scan is not cached and will be read again on the
/// next lookup.
///
/// Lookups take `&mut self` since they may fill the cache. Share a converter
/// between threads behind a lock, or use one per thread.
///
/// # Example
///
/// ```
/// use std::io::{self, Cursor};
/// use tabelo::{Converter, Date};
///
/// let table = "\
/// 2023(癸卯 - 肖兔)年公曆與農曆日期對照表
///
/// 公曆日期 農曆日期 星期 節氣
/// 2023年1月20日 廿九 星期五 大寒
/// 2023年1月21日 三十 星期六
/// 2023年1月22日 正月 星期日
/// 2023年1月23日 初二 星期一
/// ";
/// let mut converter = Converter::new(|_year: i32| Ok::<_, io::Error>(Cursor::new(table)));
///
/// let record = converter.date_to_lunar_date(Date::new(2023, 1, 20)).unwrap();
/// assert_eq!(Date::new(2022, 12, 29), record.lunar);
/// assert_eq!(Some("大寒"), record.solar_term.as_deref());
///
/// let record = converter.lunar_date_to_date(Date::new(2023, 1, 2)).unwrap();
/// assert_eq!(Date::new(2023, 1, 23), record.solar);
/// ```
#[derive(Debug)]
pub struct Converter<S> {
    source: S,
    format: TableFormat,
    years: HashMap<i32, YearCache>,
}

impl<S: FileSource> Converter<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            format: TableFormat::default(),
            years: HashMap::new(),
        }
    }

    /// Use `format` for tables scanned from now on.
    pub fn with_format(mut self, format: TableFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns `true` if the table of `year` has been scanned.
    pub fn is_loaded(&self, year: i32) -> bool {
        self.years.contains_key(&year)
    }

    /// Finds the day with Gregorian date `solar`, in the table of `solar.year`.
    ///
    /// A day whose lunar day could not be decoded counts as not found.
    pub fn date_to_lunar_date(&mut self, solar: Date) -> Result<DayRecord> {
        self.year(solar.year)?
            .by_solar(&solar)
            .filter(|r| r.lunar.is_valid())
            .cloned()
            .ok_or(Error::NotFound(solar))
    }

    /// Finds the day with lunar date `lunar`.
    ///
    /// The last months of a lunar year fall in the next Gregorian year, so
    /// the table of `lunar.year + 1` is tried when the table of `lunar.year`
    /// has no such day.
    pub fn lunar_date_to_date(&mut self, lunar: Date) -> Result<DayRecord> {
        for year in [lunar.year, lunar.year + 1] {
            let found = self.year(year)?.by_lunar(&lunar);
            if let Some(record) = found.filter(|r| r.lunar.is_valid()) {
                return Ok(record.clone());
            }
        }
        Err(Error::NotFound(lunar))
    }

    /// Lists the days of lunar year `lunar_year` on which a solar term begins,
    /// in table order.
    ///
    /// Only terms named in `names` are returned, unless it is empty.
    pub fn solar_terms(&mut self, lunar_year: i32, names: &[&str]) -> Result<Vec<DayRecord>> {
        let names: HashSet<&str> = names.iter().copied().collect();
        let mut terms = Vec::new();
        for year in [lunar_year, lunar_year + 1] {
            terms.extend(
                self.year(year)?
                    .records()
                    .iter()
                    .filter(|r| r.lunar.year == lunar_year && r.is_solar_term())
                    .filter(|r| {
                        names.is_empty()
                            || r.solar_term.as_deref().is_some_and(|t| names.contains(t))
                    })
                    .cloned(),
            );
        }
        Ok(terms)
    }

    fn year(&mut self, year: i32) -> Result<&YearCache> {
        if !self.years.contains_key(&year) {
            let cache = self.load(year)?;
            self.years.insert(year, cache);
        }
        Ok(&self.years[&year])
    }

    #[tracing::instrument(skip(self))]
    fn load(&self, year: i32) -> Result<YearCache> {
        let reader = self
            .source
            .open(year)
            .map_err(|source| Error::Io { year, source })?;
        let records = table::scan(BufReader::new(reader), year, &self.format)?;
        debug!(records = records.len(), "scanned calendar table");
        Ok(YearCache::new(records))
    }
}
