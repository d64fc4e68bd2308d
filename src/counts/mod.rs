pub mod count_reporter;
pub mod word_tally;

pub use count_reporter::{CountReporter, ListingMode};
pub use word_tally::WordTally;
