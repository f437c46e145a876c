//! An explicit model of the browser history: an entry list and a cursor.
//! Filter changes replace the current entry (no history growth); detail
//! open/close push (back/forward steps through detail views).

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overwrite the current entry in place.
    pub fn replace(&mut self, url: impl Into<String>) {
        self.entries[self.cursor] = url.into();
    }

    /// Append a new entry, discarding any forward tail.
    pub fn push(&mut self, url: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(url.into());
        self.cursor += 1;
    }

    /// Step back; None when already at the oldest entry.
    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Step forward; None when already at the newest entry.
    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }
}
