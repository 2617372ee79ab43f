//! Token output destinations and formats.

use std::io::{self, Write};

use lexc_lex::{Token, TokenSink, TokenWriter};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::{DriverError, Result};

/// One token as written in JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    category: &'a str,
    lexeme: &'a str,
    line: u32,
}

/// Marks the start of a file's tokens when several files share one output.
#[derive(Debug, Serialize)]
struct FileRecord<'a> {
    file: &'a str,
}

/// Writes each token as a JSON object on its own line.
pub struct JsonWriter<W: Write> {
    out: W,
    error: Option<DriverError>,
}

impl<W: Write> JsonWriter<W> {
    /// Wraps a writer.
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    fn write_record<T: Serialize>(&mut self, record: &T) {
        if self.error.is_some() {
            return;
        }
        let result = serde_json::to_writer(&mut self.out, record)
            .map_err(DriverError::from)
            .and_then(|()| writeln!(self.out).map_err(DriverError::from));
        if let Err(err) = result {
            self.error = Some(err);
        }
    }

    /// Flushes the writer, or returns the first error encountered.
    pub fn finish(mut self) -> Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> TokenSink for JsonWriter<W> {
    fn accept(&mut self, token: Token) {
        self.write_record(&TokenRecord {
            category: token.category.label(),
            lexeme: &token.lexeme,
            line: token.line,
        });
    }
}

/// A token sink in the configured format.
pub enum TokenOutput<W: Write> {
    /// Plain text lines.
    Text(TokenWriter<W>),
    /// JSON lines.
    Json(JsonWriter<W>),
}

impl<W: Write> TokenOutput<W> {
    /// Creates a sink writing `format` to `out`.
    pub fn new(format: OutputFormat, out: W) -> Self {
        match format {
            OutputFormat::Text => TokenOutput::Text(TokenWriter::new(out)),
            OutputFormat::Json => TokenOutput::Json(JsonWriter::new(out)),
        }
    }

    /// Writes the header introducing the tokens of `file`.
    pub fn file_header(&mut self, file: &str) {
        match self {
            TokenOutput::Text(writer) => writer.write_line(&format!("== {} ==", file)),
            TokenOutput::Json(writer) => writer.write_record(&FileRecord { file }),
        }
    }

    /// Flushes the output, or returns the first error encountered.
    pub fn finish(self) -> Result<W> {
        match self {
            TokenOutput::Text(writer) => Ok(writer.finish()?),
            TokenOutput::Json(writer) => writer.finish(),
        }
    }
}

impl<W: Write> TokenSink for TokenOutput<W> {
    fn accept(&mut self, token: Token) {
        match self {
            TokenOutput::Text(writer) => writer.accept(token),
            TokenOutput::Json(writer) => writer.accept(token),
        }
    }
}

/// Opens `path` for writing, with `-` meaning stdout.
pub fn open_destination(path: &std::path::Path) -> io::Result<Box<dyn Write>> {
    if path.as_os_str() == "-" {
        Ok(Box::new(io::stdout().lock()))
    } else {
        let file = std::fs::File::create(path)?;
        Ok(Box::new(io::BufWriter::new(file)))
    }
}
