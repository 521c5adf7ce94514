/// Cursor over the (filtered) post list. Holds no posts itself; callers pass
/// the current length, since the filter can shrink the list at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedSelection {
    pub selected_index: usize,
}

impl FeedSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = len - 1;
        }
    }

    /// Keep the cursor inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.select_first();
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }
}
