use crate::split::document::{Category, Record};
use crate::split::error::SplitError;
use crate::split::types::SplitConfig;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes one category as delimited text: a header line, then one line per record
pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        CsvWriter { writer }
    }

    /// Write the category's header followed by all of its records.
    ///
    /// Values are positioned by header order; a record missing a header
    /// field leaves that column empty. Lines are LF-terminated.
    pub fn write_category(&mut self, category: &Category) -> io::Result<()> {
        self.write_header(&category.header)?;
        for record in &category.records {
            self.write_record(&category.header, record)?;
        }
        Ok(())
    }

    fn write_header(&mut self, header: &[String]) -> io::Result<()> {
        for (i, name) in header.iter().enumerate() {
            if i > 0 {
                self.writer.write_all(b",")?;
            }
            self.writer.write_all(quote_field(name).as_bytes())?;
        }
        self.writer.write_all(b"\n")
    }

    fn write_record(&mut self, header: &[String], record: &Record) -> io::Result<()> {
        for (i, name) in header.iter().enumerate() {
            if i > 0 {
                self.writer.write_all(b",")?;
            }
            if let Some(value) = record.get(name) {
                self.writer.write_all(quote_field(&value.to_string()).as_bytes())?;
            }
        }
        self.writer.write_all(b"\n")
    }

    /// Flush the underlying writer
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Quote a field for delimited output.
///
/// A field containing the delimiter, a double quote, or a line break is
/// wrapped in double quotes with inner quotes doubled; anything else is
/// passed through unchanged.
///
/// ```rust
/// use sluice::split::writer::quote_field;
///
/// assert_eq!(quote_field("plain"), "plain");
/// assert_eq!(quote_field("y,z"), "\"y,z\"");
/// assert_eq!(quote_field("say \"hi\""), "\"say \"\"hi\"\"\"");
/// ```
pub fn quote_field(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['"', ',', '\n', '\r']) {
        return Cow::Borrowed(raw);
    }

    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for ch in raw.chars() {
        if ch == '"' {
            quoted.push('"');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

/// Write one category to its destination file, truncating any existing
/// content. The file handle is scoped to this call and flushed before it
/// returns, so the next category never observes an open handle.
pub fn write_category_file(
    category: &Category,
    config: &SplitConfig,
) -> Result<PathBuf, SplitError> {
    let path = config.category_path(&category.name);
    write_to(category, &path).map_err(|source| SplitError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn write_to(category: &Category, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = CsvWriter::new(BufWriter::new(file));
    writer.write_category(category)?;
    writer.flush()
}
