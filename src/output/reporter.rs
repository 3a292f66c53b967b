use crate::fetcher::FetchResult;
use crate::{BenchError, FetchError};
use std::io::{self, Write};

/// Width of the right-aligned identifier column
const ID_WIDTH: usize = 25;

/// Width of the right-aligned length column
const LENGTH_WIDTH: usize = 10;

/// Formats the report line for one fetched resource
pub fn format_result_line(result: &FetchResult) -> String {
    format!(
        "{:>id$}\tdownloaded: {:>len$} characters long.",
        result.resource_id(),
        result.content_length(),
        id = ID_WIDTH,
        len = LENGTH_WIDTH
    )
}

/// Formats the marker line for a resource whose fetch failed
pub fn format_failure_line(error: &FetchError) -> String {
    format!("{:>id$}\tfailed: {}", error.url(), error, id = ID_WIDTH)
}

/// Writes formatted report lines to an output sink
pub struct Reporter<'a> {
    sink: &'a mut dyn Write,
    runs_started: usize,
}

impl<'a> Reporter<'a> {
    pub fn new(sink: &'a mut dyn Write) -> Self {
        Self {
            sink,
            runs_started: 0,
        }
    }

    /// Reports a fetch result; an absent result writes nothing
    pub fn report(&mut self, result: Option<&FetchResult>) -> io::Result<()> {
        let Some(result) = result else {
            return Ok(());
        };
        writeln!(self.sink, "{}", format_result_line(result))
    }

    /// Reports a failed position when failures are collected instead of fatal
    pub fn report_failure(&mut self, error: &FetchError) -> io::Result<()> {
        writeln!(self.sink, "{}", format_failure_line(error))
    }

    /// Writes the label that precedes a strategy run
    ///
    /// Runs after the first are separated from the previous one by an empty
    /// line.
    pub fn label(&mut self, label: &str) -> io::Result<()> {
        if self.runs_started > 0 {
            writeln!(self.sink)?;
        }
        self.runs_started += 1;
        writeln!(self.sink, "{}", label)
    }

    /// Writes the summary line of a completed run
    pub fn elapsed(&mut self, milliseconds: u128) -> io::Result<()> {
        writeln!(self.sink, "Total execution time: {}", milliseconds)
    }

    /// Writes the line that replaces the summary of an aborted run
    pub fn run_failed(&mut self, error: &BenchError) -> io::Result<()> {
        writeln!(self.sink, "Run failed: {}", error)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}
