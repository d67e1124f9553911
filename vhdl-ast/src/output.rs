use std::fmt::{self, Write};

use crate::options::EmitOptions;

/// The text sink that nodes are emitted into.
///
/// Every line-level node starts writing at the beginning of a line, indents itself
/// according to the level it was given and finishes with a newline. Inline nodes
/// (types and expressions) only write their own text.
pub struct Output<'a> {
    sink: &'a mut dyn Write,
    options: &'a EmitOptions,
}

impl<'a> Output<'a> {
    pub fn new(sink: &'a mut dyn Write, options: &'a EmitOptions) -> Self {
        Self { sink, options }
    }

    pub fn options(&self) -> &EmitOptions {
        self.options
    }

    pub fn indent(&mut self, level: usize) -> fmt::Result {
        let width = level * self.options.indent_width;
        write!(self.sink, "{:width$}", "", width = width)
    }

    pub fn newline(&mut self) -> fmt::Result {
        self.sink.write_char('\n')
    }

    /// Writes `text` as a complete line at `level`
    pub fn line(&mut self, level: usize, text: impl fmt::Display) -> fmt::Result {
        self.indent(level)?;
        write!(self.sink, "{text}")?;
        self.newline()
    }
}

impl Write for Output<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink.write_str(s)
    }
}

/// Adapter from an `io::Write` byte sink to the `fmt::Write` the emitter works on.
/// The first I/O error is kept so that it can be handed back to the caller instead
/// of the opaque `fmt::Error`.
pub(crate) struct IoSink<'a, W: std::io::Write + ?Sized> {
    inner: &'a mut W,
    pub(crate) error: Option<std::io::Error>,
}

impl<'a, W: std::io::Write + ?Sized> IoSink<'a, W> {
    pub(crate) fn new(inner: &'a mut W) -> Self {
        Self { inner, error: None }
    }

    pub(crate) fn into_io_error(self) -> std::io::Error {
        self.error
            .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "formatter error"))
    }
}

impl<W: std::io::Write + ?Sized> Write for IoSink<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

/// Implements `Display` by emitting the node at level 0 with the default options
macro_rules! display_via_emit {
    ($($ty:ty),* $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    let options = $crate::options::EmitOptions::default();
                    $crate::element::Element::emit(
                        self,
                        &mut $crate::output::Output::new(f, &options),
                        0,
                    )
                }
            }
        )*
    };
}
pub(crate) use display_via_emit;
