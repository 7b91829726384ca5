//! Document processing functionality
//!
//! This module provides functionality for processing uploaded CV documents,
//! including:
//! - Document format detection and text extraction
//! - Deterministic field extraction from raw text

/// Document format handling and text extraction.
///
/// This module provides functionality for:
/// - Detecting document formats based on a declared file extension
/// - Extracting text content from various document types
/// - Supporting multiple formats including:
///   - PDF (.pdf)
///   - Word documents (.docx, .doc)
///   - Plain text (.txt)
pub mod formats;

/// Deterministic field extraction from raw CV text.
pub mod fields;

pub use fields::extract_fields;
pub use formats::{
    detect_format, extract_text, get_format_handler, DocumentFormat, FormatError, FormatHandler,
};
