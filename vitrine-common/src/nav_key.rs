/// Keys the carousel reacts to while it has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// ArrowLeft, wraps to the last page
    Previous,
    /// ArrowRight, wraps to the first page
    Next,
    /// Home
    First,
    /// End
    Last,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value. Unhandled keys return None.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(NavKey::Previous),
            "ArrowRight" => Some(NavKey::Next),
            "Home" => Some(NavKey::First),
            "End" => Some(NavKey::Last),
            _ => None,
        }
    }

    /// Page this key leads to from `current`, or None when there are no pages.
    pub fn target_page(self, current: usize, total_pages: usize) -> Option<usize> {
        if total_pages == 0 {
            return None;
        }
        let last = total_pages - 1;
        let page = match self {
            NavKey::Previous if current == 0 => last,
            NavKey::Previous => (current - 1).min(last),
            NavKey::Next if current >= last => 0,
            NavKey::Next => current + 1,
            NavKey::First => 0,
            NavKey::Last => last,
        };
        Some(page)
    }
}
