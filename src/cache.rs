//! Parsed records of one calendar table, indexed both ways.

use std::collections::HashMap;

use crate::chinese::DayRecord;
use crate::date::Date;

/// All day records of one file-year, looked up by solar or lunar date.
///
/// Only records with a resolved lunar month are ever stored. When two
/// records share a lunar date (a leap month repeats the day numbers of the
/// month before it), the lunar index keeps the later one.
#[derive(Debug, Clone, Default)]
pub struct YearCache {
    records: Vec<DayRecord>,
    by_solar: HashMap<Date, usize>,
    by_lunar: HashMap<Date, usize>,
}

impl YearCache {
    /// Builds the indexes over `records`, kept in table order.
    pub fn new(records: Vec<DayRecord>) -> Self {
        let mut by_solar = HashMap::with_capacity(records.len());
        let mut by_lunar = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            debug_assert_ne!(0, record.lunar.month);
            by_solar.insert(record.solar, i);
            by_lunar.insert(record.lunar, i);
        }
        Self {
            records,
            by_solar,
            by_lunar,
        }
    }

    pub fn by_solar(&self, date: &Date) -> Option<&DayRecord> {
        self.by_solar.get(date).map(|&i| &self.records[i])
    }

    pub fn by_lunar(&self, date: &Date) -> Option<&DayRecord> {
        self.by_lunar.get(date).map(|&i| &self.records[i])
    }

    /// Records in table order.
    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }
}
