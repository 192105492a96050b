//! Constants and summary types shared by the generator and the write pipeline.

/// Number of characters in a default fixture (one mebibyte of ASCII).
pub const DEFAULT_LENGTH: usize = 1 << 20;

/// Default buffer size for file output.
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// Statistics about a completed fixture write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteSummary {
    /// Number of characters written.
    pub chars_written: u64,

    /// Number of encoded bytes written to the destination.
    pub bytes_written: u64,
}

impl WriteSummary {
    /// Creates a summary from the text that was written.
    pub(crate) fn for_text(text: &str) -> Self {
        Self {
            chars_written: text.chars().count() as u64,
            bytes_written: text.len() as u64,
        }
    }

    /// Returns `true` when every character was encoded as a single byte.
    pub fn is_ascii(&self) -> bool {
        self.chars_written == self.bytes_written
    }
}
