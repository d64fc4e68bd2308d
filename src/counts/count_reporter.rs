use crate::counts::WordTally;
use crate::error::Result;
use std::io::Write;

/// Which listing a report run emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    /// Every word, sorted ascending by word.
    Alphabetical,
    /// The N most frequent words, sorted descending by count.
    Top(usize),
}

/// Writes "<word> <count>" lines for a tally to any sink.
pub struct CountReporter {
    mode: ListingMode,
}

impl CountReporter {
    pub fn new(mode: ListingMode) -> Self {
        Self { mode }
    }

    pub fn write_listing<W: Write>(&self, tally: &WordTally, writer: &mut W) -> Result<()> {
        let entries = match self.mode {
            ListingMode::Alphabetical => tally.alphabetical(),
            ListingMode::Top(n) => tally.top(n),
        };

        for (word, count) in entries {
            writeln!(writer, "{} {}", word, count)?;
        }
        writer.flush()?;

        Ok(())
    }
}
