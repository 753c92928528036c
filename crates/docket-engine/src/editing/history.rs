use crate::editing::Buffer;

/// Undo stack of full content snapshots, most recent last
#[derive(Debug, Clone, PartialEq)]
pub struct History<B> {
    snapshots: Vec<B>,
}

impl<B> Default for History<B> {
    fn default() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }
}

impl<B: Buffer> History<B> {
    pub fn push(&mut self, content: B) {
        self.snapshots.push(content);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Pop `count` snapshots and return the last one popped.
    ///
    /// Only rewinds when `0 < count < len()`: asking for exactly as many
    /// undos as there are snapshots is refused, and the stack is untouched.
    pub fn rewind(&mut self, count: usize) -> Option<B> {
        if count == 0 || count >= self.snapshots.len() {
            return None;
        }
        let keep = self.snapshots.len() - count;
        self.snapshots.drain(keep..).next()
    }
}
