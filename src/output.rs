//! Delimiter-inserting output adapter.
//!
//! [`DelimitedWriter`] formats values into any [`io::Write`] sink,
//! optionally writing a delimiter after each one. Unlike a collection
//! joined up front, the adapter is generic **per call**: a single instance
//! can write an `i32`, then a `&str`, then anything else that implements
//! [`Display`], without being re-created.
//!
//! # Examples
//!
//! ```
//! use fncomp::output::DelimitedWriter;
//!
//! let mut out = DelimitedWriter::with_delimiter(Vec::new(), ", ");
//! out.write_all([0, 1, 1, 2, 3, 5, 8, 13]).unwrap();
//! out.write_all(["Hello", "World"]).unwrap();
//!
//! let written = String::from_utf8(out.into_inner()).unwrap();
//! assert_eq!(written, "0, 1, 1, 2, 3, 5, 8, 13, Hello, World, ");
//! ```

use std::fmt::Display;
use std::io::{self, Write};

/// Writes [`Display`] values to an [`io::Write`] sink, inserting a
/// delimiter after each value.
///
/// The adapter owns its sink; [`into_inner`](DelimitedWriter::into_inner)
/// gives it back. The delimiter, when present, is written after **every**
/// value, trailing one included, matching the behavior of a classic
/// delimiter-inserting output iterator.
///
/// A pipeline result is consumed as an ordinary value:
///
/// ```
/// use fncomp::compose;
/// use fncomp::compose::InvokeExt;
/// use fncomp::output::DelimitedWriter;
///
/// let mut out = DelimitedWriter::with_delimiter(Vec::new(), ", ");
/// let pipeline = compose!(f64::abs, f64::sin).into_fn();
///
/// for value in [1.0_f64, 2.0, 3.0] {
///     out.write(pipeline(value)).unwrap();
/// }
/// # let _ = out.into_inner();
/// ```
#[derive(Debug)]
pub struct DelimitedWriter<W> {
    sink: W,
    delimiter: Option<String>,
}

impl<W: Write> DelimitedWriter<W> {
    /// Creates an adapter that writes values back to back, with no
    /// delimiter.
    pub const fn new(sink: W) -> Self {
        Self {
            sink,
            delimiter: None,
        }
    }

    /// Creates an adapter that writes `delimiter` after each value.
    pub fn with_delimiter(sink: W, delimiter: impl Into<String>) -> Self {
        Self {
            sink,
            delimiter: Some(delimiter.into()),
        }
    }

    /// Formats `value` into the sink, followed by the delimiter if one was
    /// configured.
    ///
    /// Generic per call: consecutive calls may pass values of different
    /// types.
    ///
    /// # Errors
    ///
    /// Returns any error produced by the underlying sink.
    pub fn write<T: Display>(&mut self, value: T) -> io::Result<()> {
        write!(self.sink, "{value}")?;
        if let Some(delimiter) = &self.delimiter {
            self.sink.write_all(delimiter.as_bytes())?;
        }
        Ok(())
    }

    /// Writes every value produced by `values`, in order.
    ///
    /// # Errors
    ///
    /// Stops at, and returns, the first error produced by the underlying
    /// sink.
    pub fn write_all<I>(&mut self, values: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for value in values {
            self.write(value)?;
        }
        Ok(())
    }

    /// Flushes the underlying sink.
    ///
    /// # Errors
    ///
    /// Returns any error produced by the underlying sink.
    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    /// Returns a shared reference to the underlying sink.
    pub const fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Returns a mutable reference to the underlying sink.
    ///
    /// Writing to the sink directly bypasses delimiter insertion.
    pub const fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Consumes the adapter, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}
