//! Input sources for processing

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use crate::error::Result;

/// Input source for processing
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => Ok(fs::read_to_string(&path)?),
            Input::Bytes(bytes) => Ok(String::from_utf8(bytes)?),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input() {
        let input = Input::from_text("Mario Rossi");
        assert_eq!(input.read_text().unwrap(), "Mario Rossi");
    }

    #[test]
    fn test_bytes_input() {
        let input = Input::from_bytes(b"Mario Rossi".to_vec());
        assert_eq!(input.read_text().unwrap(), "Mario Rossi");
    }

    #[test]
    fn test_invalid_utf8_bytes() {
        let input = Input::from_bytes(vec![0xff, 0xfe]);
        assert!(input.read_text().is_err());
    }

    #[test]
    fn test_reader_input() {
        let input = Input::from_reader(std::io::Cursor::new("from a reader"));
        assert_eq!(input.read_text().unwrap(), "from a reader");
    }

    #[test]
    fn test_missing_file_errors() {
        let input = Input::from_file("/nonexistent/resume.txt");
        assert!(input.read_text().is_err());
    }
}
