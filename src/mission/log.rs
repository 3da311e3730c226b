//! HTML mission log.
//!
//! A log is one HTML page: a header written when the log is opened, one
//! paragraph per entry, and a trailer with a link back to the home page.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::Local;

use crate::error::Result;

pub struct MissionLog {
    writer: Box<dyn Write>,
}

impl MissionLog {
    /// Wraps an arbitrary writer. No header is written.
    pub fn new(writer: impl Write + 'static) -> Self {
        MissionLog {
            writer: Box::new(writer),
        }
    }

    /// A log that drops everything written to it.
    pub fn discard() -> Self {
        Self::new(io::sink())
    }

    /// Creates (or truncates) the file at `path` and writes the page header.
    pub fn create(path: &Path, title: &str) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut log = Self::new(BufWriter::new(File::create(path)?));
        log.header(title)?;
        Ok(log)
    }

    pub fn header(&mut self, title: &str) -> Result<()> {
        write!(
            self.writer,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
             <title>Mission log</title>\n</head>\n<body>"
        )?;
        write!(self.writer, "<p>===={}====</p>", title)?;
        write!(
            self.writer,
            "\n<p>Started {}</p>",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        Ok(())
    }

    pub fn entry(&mut self, text: &str) -> Result<()> {
        write!(self.writer, "\n<p>{}</p>", text)?;
        Ok(())
    }

    /// Appends the home link and closing tags, then flushes.
    pub fn finish(mut self, home_url: &str) -> Result<()> {
        write!(
            self.writer,
            "\n<a href=\"{}\">Back to home page</a>\n</body>\n</html>\n",
            home_url
        )?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
