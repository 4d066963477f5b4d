//! The reader/writer seam between resource trees and the filesystem.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use crate::error::Error;

/// Round-trips one locale's resources through a concrete file format.
///
/// [`crate::types::ResourceTree`] implements this for the Android
/// `strings.xml` layout. The path helpers are provided so callers deal in
/// files while implementations deal in buffered streams.
///
/// ```rust,no_run
/// use android_i18n::traits::Parser;
/// use android_i18n::types::ResourceTree;
///
/// let tree = ResourceTree::read_from("app/src/main/res/values/strings.xml")?;
/// tree.write_to("backup/strings.xml")?;
/// Ok::<(), android_i18n::Error>(())
/// ```
pub trait Parser {
    /// Parses one resource file from a buffered reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Serializes the resources to a writer.
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Opens and parses the file at `path`.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Creates (or truncates) the file at `path` and serializes into it.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        self.to_writer(BufWriter::new(file))
    }

    /// Parses from an in-memory string; mainly useful for fixtures.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }
}
