pub mod name_extractor;
pub mod summary_writer;

pub use name_extractor::{NameExtraction, NameExtractor, RankedRow};
pub use summary_writer::SummaryWriter;
