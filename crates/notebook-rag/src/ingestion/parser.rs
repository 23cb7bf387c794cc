//! File parsing: uploaded bytes to raw text

use crate::error::{Error, Result};

/// Supported file types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileType {
    /// PDF document
    Pdf,
    /// Plain text file
    Txt,
    /// Markdown file
    Markdown,
    /// Unknown file type
    Unknown,
}

impl FileType {
    /// Detect file type from extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "txt" | "text" => Self::Txt,
            "md" | "markdown" => Self::Markdown,
            _ => Self::Unknown,
        }
    }

    /// Check if this is a supported file type
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Extracts raw text from uploaded files
///
/// Unsupported formats are rejected here, before any text reaches the chunker
/// or the store.
pub struct FileParser;

impl FileParser {
    /// Parse a file based on its extension and return its raw text
    pub fn parse(filename: &str, data: &[u8]) -> Result<String> {
        let extension = filename.rsplit('.').next().unwrap_or("").to_lowercase();

        match FileType::from_extension(&extension) {
            FileType::Pdf => Self::parse_pdf(filename, data),
            FileType::Txt | FileType::Markdown => Ok(String::from_utf8_lossy(data).to_string()),
            FileType::Unknown => Err(Error::UnsupportedFileType(format!(
                "{} (use pdf, txt, or md)",
                extension
            ))),
        }
    }

    /// Extract text from a PDF
    fn parse_pdf(filename: &str, data: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(data)
            .map_err(|e| Error::file_parse(filename, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_file_types_case_insensitively() {
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
        assert_eq!(FileType::from_extension("txt"), FileType::Txt);
        assert_eq!(FileType::from_extension("md"), FileType::Markdown);
        assert_eq!(FileType::from_extension("markdown"), FileType::Markdown);
        assert_eq!(FileType::from_extension("docx"), FileType::Unknown);
        assert!(!FileType::Unknown.is_supported());
    }

    #[test]
    fn parses_plain_text_and_markdown() {
        let text = FileParser::parse("notes.txt", b"Dogs are loyal.").expect("parses");
        assert_eq!(text, "Dogs are loyal.");

        let md = FileParser::parse("notes.md", b"# Dogs\n\nDogs are loyal.").expect("parses");
        assert!(md.contains("Dogs are loyal."));
    }

    #[test]
    fn rejects_unsupported_extensions() {
        let err = FileParser::parse("slides.pptx", b"data").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFileType(_)));

        let err = FileParser::parse("no_extension", b"data").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFileType(_)));
    }

    #[test]
    fn invalid_utf8_text_is_replaced_not_rejected() {
        let text = FileParser::parse("notes.txt", &[0x44, 0x6f, 0x67, 0xFF]).expect("parses");
        assert!(text.starts_with("Dog"));
    }
}
