/*!
 * Pretty Printer
 * Writes values, pairs and ranges to any text sink
 *
 * Output shapes (default config):
 * - values: `a; b; c` followed by a newline
 * - pair:   `<a, b>` followed by a newline
 * - range:  `[a, b, c]` followed by a newline, or `range empty`
 * - map:    `[<k1, v1>, <k2, v2>]` followed by a newline
 */

use super::limits;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{self, Display, Write};

/// Delimiters used by [`Printer`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintConfig {
    /// Between top-level values
    pub delimiter: Cow<'static, str>,
    /// Opens a non-empty range
    pub open: Cow<'static, str>,
    /// Closes a non-empty range
    pub close: Cow<'static, str>,
    /// Between range elements
    pub separator: Cow<'static, str>,
    /// Written instead of an empty range
    pub empty: Cow<'static, str>,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            delimiter: Cow::Borrowed(limits::PRINT_DELIMITER),
            open: Cow::Borrowed(limits::PRINT_RANGE_OPEN),
            close: Cow::Borrowed(limits::PRINT_RANGE_CLOSE),
            separator: Cow::Borrowed(limits::PRINT_RANGE_SEPARATOR),
            empty: Cow::Borrowed(limits::PRINT_RANGE_EMPTY),
        }
    }
}

/// A key/value pair rendered as `<first, second>`
///
/// Usable anywhere a `Display` value is, so pairs mix freely with plain
/// values:
///
/// ```
/// use bubbles::core::prettyprint::Entry;
///
/// let mut out = String::new();
/// bubbles::pretty_print!(&mut out; "slot", Entry(3, "free")).unwrap();
/// assert_eq!(out, "slot; <3, free>\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<A, B>(pub A, pub B);

impl<A: Display, B: Display> Display for Entry<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.0, self.1)
    }
}

impl<A, B> From<(A, B)> for Entry<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self(first, second)
    }
}

/// Formats values into a `fmt::Write` sink
#[derive(Debug)]
pub struct Printer<W> {
    sink: W,
    config: PrintConfig,
}

impl<W: Write> Printer<W> {
    pub fn new(sink: W) -> Self {
        Self::with_config(sink, PrintConfig::default())
    }

    pub fn with_config(sink: W, config: PrintConfig) -> Self {
        Self { sink, config }
    }

    pub fn config(&self) -> &PrintConfig {
        &self.config
    }

    /// Write values joined by the delimiter, then a newline
    pub fn values(&mut self, values: &[&dyn Display]) -> fmt::Result {
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.sink.write_str(&self.config.delimiter)?;
            }
            write!(self.sink, "{}", value)?;
        }
        self.sink.write_char('\n')
    }

    /// Write `<first, second>`, then a newline
    pub fn pair<A: Display, B: Display>(&mut self, first: A, second: B) -> fmt::Result {
        writeln!(self.sink, "{}", Entry(first, second))
    }

    /// Write every key/value entry as a range of `<key, value>` pairs
    ///
    /// Accepts maps by reference or any iterator of 2-tuples.
    pub fn map<I, K, V>(&mut self, entries: I) -> fmt::Result
    where
        I: IntoIterator<Item = (K, V)>,
        K: Display,
        V: Display,
    {
        self.range(entries.into_iter().map(|(key, value)| Entry(key, value)))
    }

    /// Write every element of a range, bracketed, then a newline
    ///
    /// An empty range writes the configured empty marker and no newline.
    pub fn range<I>(&mut self, items: I) -> fmt::Result
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut iter = items.into_iter();
        let Some(first) = iter.next() else {
            return self.sink.write_str(&self.config.empty);
        };

        self.sink.write_str(&self.config.open)?;
        write!(self.sink, "{}", first)?;
        for item in iter {
            self.sink.write_str(&self.config.separator)?;
            write!(self.sink, "{}", item)?;
        }
        self.sink.write_str(&self.config.close)?;
        self.sink.write_char('\n')
    }

    /// Write a source location as `file:line module`
    pub fn trace(&mut self, file: &str, line: u32, module: &str) -> fmt::Result {
        writeln!(self.sink, "{}:{} {}", file, line, module)
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Render values with the default config into a `String`
pub fn format_values(values: &[&dyn Display]) -> String {
    let mut printer = Printer::new(String::new());
    // Writing into a String cannot fail
    let _ = printer.values(values);
    printer.into_inner()
}

/// Render a range with the default config into a `String`
pub fn format_range<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut printer = Printer::new(String::new());
    let _ = printer.range(items);
    printer.into_inner()
}

/// Render key/value entries with the default config into a `String`
pub fn format_map<I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    let mut printer = Printer::new(String::new());
    let _ = printer.map(entries);
    printer.into_inner()
}

/// Write any number of values to a `fmt::Write` sink, joined by `"; "`
///
/// ```
/// let mut out = String::new();
/// bubbles::pretty_print!(&mut out; 1, "two", true).unwrap();
/// assert_eq!(out, "1; two; true\n");
/// ```
#[macro_export]
macro_rules! pretty_print {
    ($sink:expr; $($value:expr),+ $(,)?) => {
        $crate::core::prettyprint::Printer::new($sink)
            .values(&[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Write the current file, line and module path to a `fmt::Write` sink
#[macro_export]
macro_rules! print_trace {
    ($sink:expr) => {
        $crate::core::prettyprint::Printer::new($sink).trace(
            ::std::file!(),
            ::std::line!(),
            ::std::module_path!(),
        )
    };
}
