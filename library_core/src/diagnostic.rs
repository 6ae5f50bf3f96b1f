//! User-facing notices. None of these are failures: the operation that
//! produces one still completes, it just has nothing (or less) to show for it.

use std::io::{self, Stdout, Write};

use log::{debug, warn};
use thiserror::Error;

/// A non-fatal notice emitted by a catalog operation. The display strings are
/// what gets shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Diagnostic {
    #[error("Could not attach category, category has no name")]
    CategoryHasNoName,
    #[error("Newspapers are not sorted by categories")]
    NewspapersHaveNoCategories,
    #[error("The library has no books with the given category")]
    NoBooksWithCategory,
}

/// Where catalog operations send their diagnostics.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics in the order they were reported.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Writes each diagnostic as one line of text, by default to standard output.
#[derive(Debug)]
pub struct ConsoleDiagnostics<W = Stdout> {
    out: W,
}

impl ConsoleDiagnostics<Stdout> {
    pub fn stdout() -> Self {
        ConsoleDiagnostics { out: io::stdout() }
    }
}

impl Default for ConsoleDiagnostics<Stdout> {
    fn default() -> Self {
        ConsoleDiagnostics::stdout()
    }
}

impl<W: Write> ConsoleDiagnostics<W> {
    pub fn new(out: W) -> Self {
        ConsoleDiagnostics { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DiagnosticSink for ConsoleDiagnostics<W> {
    fn report(&mut self, diagnostic: Diagnostic) {
        debug!("event=diagnostic module=diagnostic kind={diagnostic:?}");
        // a notice that cannot be shown must not interrupt the operation
        if let Err(err) = writeln!(self.out, "{diagnostic}") {
            warn!("event=diagnostic module=diagnostic status=write_failed error={err}");
        }
    }
}
