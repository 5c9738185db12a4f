//! Keystroke buffer for keyboard-emulating RFID readers.
//!
//! The reader "types" the badge number and usually finishes with Enter. A tag
//! is emitted as soon as [`TAG_LENGTH`] characters have accumulated; an Enter
//! that arrives with any other count throws the partial input away.

/// Badge numbers are exactly this many characters.
pub const TAG_LENGTH: usize = 10;

#[derive(Debug, Default, Clone)]
pub struct ScanBuffer {
    buf: String,
}

impl ScanBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one keystroke. Returns a complete tag when one is ready.
    pub fn push(&mut self, key: char) -> Option<String> {
        if key == '\n' || key == '\r' {
            if !self.buf.is_empty() {
                tracing::debug!(discarded = %self.buf, "Incomplete scan discarded");
                self.buf.clear();
            }
            return None;
        }
        if key.is_whitespace() {
            return None;
        }

        self.buf.push(key);
        if self.buf.chars().count() == TAG_LENGTH {
            return Some(std::mem::take(&mut self.buf));
        }
        None
    }

    /// Feed a run of keystrokes, collecting every tag completed along the way.
    pub fn push_str(&mut self, keys: &str) -> Vec<String> {
        keys.chars().filter_map(|key| self.push(key)).collect()
    }

    /// Characters buffered so far.
    pub fn pending(&self) -> &str {
        &self.buf
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}
