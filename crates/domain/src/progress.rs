use std::fmt::{Display, Formatter};

/// Position within the image set. Renders 1-based as `"current/total"`, or
/// `"0/0"` for an empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    position: usize,
    total: usize,
}

impl Progress {
    pub fn empty() -> Self {
        Self {
            position: 0,
            total: 0,
        }
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.total == 0 {
            return write!(f, "0/0");
        }
        write!(f, "{}/{}", self.position + 1, self.total)
    }
}

/// Bounded index over the image set. Moves by at most one step per call and
/// never wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCursor {
    index: usize,
    len: usize,
}

impl ImageCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn is_at_first(self) -> bool {
        self.index == 0
    }

    pub fn is_at_last(self) -> bool {
        self.len == 0 || self.index == self.len - 1
    }

    /// Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        let before = self.index;
        if !self.is_at_last() {
            self.index += 1;
        }
        self.debug_check(before);
        self.index != before
    }

    /// Returns whether the cursor moved.
    pub fn retreat(&mut self) -> bool {
        let before = self.index;
        if !self.is_at_first() {
            self.index -= 1;
        }
        self.debug_check(before);
        self.index != before
    }

    pub fn progress(self) -> Progress {
        if self.len == 0 {
            return Progress::empty();
        }
        Progress {
            position: self.index,
            total: self.len,
        }
    }

    fn debug_check(self, before: usize) {
        debug_assert!(self.index.abs_diff(before) <= 1);
        debug_assert!((self.len == 0 && self.index == 0) || self.index < self.len);
    }
}
