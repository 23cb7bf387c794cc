//! Document ingestion: parsing, chunking, and the ingest pipeline

mod chunker;
mod parser;
mod processor;

pub use chunker::TextChunker;
pub use parser::{FileParser, FileType};
pub use processor::{IngestOutcome, IngestPipeline};
