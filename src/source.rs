//! Where calendar tables come from.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

/// Supplies the UTF-8 text of the calendar table for a file-year.
///
/// Implemented for [`DirSource`] and for closures, which is handy for
/// tables held in memory:
///
/// ```
/// use std::io::{self, Cursor};
/// use tabelo::FileSource;
///
/// let source = |_year: i32| Ok::<_, io::Error>(Cursor::new("..."));
/// assert!(source.open(2023).is_ok());
/// ```
pub trait FileSource {
    type Reader: Read;

    /// Opens the table of `year`. The reader is dropped once the table has
    /// been scanned.
    fn open(&self, year: i32) -> io::Result<Self::Reader>;
}

impl<F, R> FileSource for F
where
    F: Fn(i32) -> io::Result<R>,
    R: Read,
{
    type Reader = R;

    fn open(&self, year: i32) -> io::Result<R> {
        self(year)
    }
}

/// Reads tables from files named `<prefix><year><suffix>` in one directory.
///
/// Defaults to the names of the published tables, e.g. `T2023c.txt`.
/// Files must already be converted to UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirSource {
    dir: PathBuf,
    prefix: String,
    suffix: String,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            prefix: "T".into(),
            suffix: "c.txt".into(),
        }
    }

    /// Set the file name prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the file name suffix, extension included.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the table for `year`.
    ///
    /// ```
    /// use std::path::Path;
    /// use tabelo::DirSource;
    ///
    /// let source = DirSource::new("files");
    /// assert_eq!(Path::new("files/T2023c.txt"), source.path_for(2023));
    /// ```
    pub fn path_for(&self, year: i32) -> PathBuf {
        self.dir.join(format!("{}{}{}", self.prefix, year, self.suffix))
    }
}

impl FileSource for DirSource {
    type Reader = File;

    fn open(&self, year: i32) -> io::Result<File> {
        let path = self.path_for(year);
        debug!(path = %path.display(), "opening calendar table");
        File::open(path)
    }
}
