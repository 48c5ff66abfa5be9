//! Utilities for converting between Gregorian dates and the Chinese
//! lunisolar calendar.
//!
//! Rather than computing lunar dates astronomically, this crate reads the
//! official per-year correspondence tables (one UTF-8 text file per Gregorian
//! year, e.g. `T2023c.txt`) and looks dates up in them. A lunar year spans two
//! such files, which is handled transparently.
//!
//! # Examples
//!
//! Reading tables from a directory:
//!
//! ```no_run
//! use tabelo::{Converter, Date, DirSource};
//!
//! let mut converter = Converter::new(DirSource::new("files"));
//!
//! let record = converter.date_to_lunar_date(Date::new(2023, 1, 22))?;
//! assert_eq!(Date::new(2023, 1, 1), record.lunar);
//! assert_eq!(Some("正月初一".into()), record.lunar_name());
//!
//! // 冬月 of 2023 ends in January 2024, found in `T2024c.txt`
//! let record = converter.lunar_date_to_date(Date::new(2023, 11, 20))?;
//! assert_eq!(Date::new(2024, 1, 1), record.solar);
//!
//! for term in converter.solar_terms(2023, &["立春", "冬至"])? {
//!     println!("{} {}", term.solar, term.solar_term.unwrap_or_default());
//! }
//! # Ok::<(), tabelo::Error>(())
//! ```
//!
//! Fetching or transcoding the tables (they are published in Big5) is left to
//! the caller; any [`FileSource`] will do.

pub mod cache;
pub mod chinese;
pub mod converter;
pub mod date;
pub mod error;
pub mod source;

pub use chinese::DayRecord;
pub use converter::Converter;
pub use date::Date;
pub use error::{Error, FormatError, Result};
pub use source::{DirSource, FileSource};
