//! In-memory clipboard buffer for copy/cut/paste of collection items.

/// Single-slot buffer. Copy and cut overwrite it; paste reads it without
/// clearing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardBuffer<T> {
    contents: Vec<T>,
}

impl<T> ClipboardBuffer<T> {
    pub fn new() -> Self {
        Self {
            contents: Vec::new(),
        }
    }

    /// Replace the buffer contents.
    pub fn store(&mut self, items: Vec<T>) {
        self.contents = items;
    }

    pub fn contents(&self) -> &[T] {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn clear(&mut self) {
        self.contents.clear();
    }
}

impl<T> Default for ClipboardBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}
