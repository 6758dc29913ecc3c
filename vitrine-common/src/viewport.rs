/// Default viewport width (in CSS pixels) at or below which the layout is mobile.
pub const DEFAULT_BREAKPOINT_PX: u32 = 768;

const MOBILE_ITEMS_PER_PAGE: usize = 1;
const DESKTOP_ITEMS_PER_PAGE: usize = 3;

/// Viewport width threshold separating mobile from desktop layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint(u32);

impl Breakpoint {
    pub const fn new(px: u32) -> Self {
        Self(px)
    }

    pub fn px(self) -> u32 {
        self.0
    }

    /// Layout for a viewport of the given width. The breakpoint itself is mobile.
    pub fn layout_for(self, viewport_width: f64) -> LayoutMode {
        if viewport_width <= f64::from(self.0) {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self(DEFAULT_BREAKPOINT_PX)
    }
}

/// Responsive layout mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Mobile,
    Desktop,
}

impl LayoutMode {
    pub fn is_mobile(self) -> bool {
        self == LayoutMode::Mobile
    }

    /// How many carousel items fit on one page in this layout.
    pub fn items_per_page(self) -> usize {
        match self {
            LayoutMode::Mobile => MOBILE_ITEMS_PER_PAGE,
            LayoutMode::Desktop => DESKTOP_ITEMS_PER_PAGE,
        }
    }
}

/// Number of pages needed to show `item_count` items, `items_per_page` at a time.
pub fn page_count(item_count: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    item_count.div_ceil(items_per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_inclusive() {
        let bp = Breakpoint::default();
        assert_eq!(bp.layout_for(768.0), LayoutMode::Mobile);
        assert_eq!(bp.layout_for(768.5), LayoutMode::Desktop);
        assert_eq!(bp.layout_for(320.0), LayoutMode::Mobile);
        assert_eq!(bp.layout_for(1440.0), LayoutMode::Desktop);
    }

    #[test]
    fn test_custom_breakpoint() {
        let bp = Breakpoint::new(1024);
        assert_eq!(bp.px(), 1024);
        assert_eq!(bp.layout_for(900.0), LayoutMode::Mobile);
        assert_eq!(bp.layout_for(1025.0), LayoutMode::Desktop);
    }

    #[test]
    fn test_items_per_page() {
        for width in [0.0, 1.0, 375.0, 767.0, 768.0] {
            assert_eq!(Breakpoint::default().layout_for(width).items_per_page(), 1);
        }
        for width in [769.0, 1024.0, 1920.0] {
            assert_eq!(Breakpoint::default().layout_for(width).items_per_page(), 3);
        }
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(7, 3), 3);
        assert_eq!(page_count(6, 3), 2);
        assert_eq!(page_count(1, 3), 1);
        assert_eq!(page_count(7, 1), 7);
        assert_eq!(page_count(0, 3), 0);
    }

    #[test]
    fn test_page_count_zero_per_page() {
        assert_eq!(page_count(5, 0), 0);
    }
}
