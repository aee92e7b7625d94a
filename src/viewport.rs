use leptos::prelude::window;

/// Widths below this many CSS pixels switch to the carousel layout.
pub const NARROW_BREAKPOINT: f64 = 768.0;

const WIDE_PAGE_SIZES: &[usize] = &[8, 16, 32];
const NARROW_PAGE_SIZES: &[usize] = &[6, 12, 24];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        if width < NARROW_BREAKPOINT {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }

    pub fn is_narrow(&self) -> bool {
        *self == ViewportClass::Narrow
    }

    pub fn page_sizes(&self) -> &'static [usize] {
        match self {
            ViewportClass::Narrow => NARROW_PAGE_SIZES,
            ViewportClass::Wide => WIDE_PAGE_SIZES,
        }
    }

    /// The preferred size if this class offers it, otherwise its smallest option.
    pub fn effective_page_size(&self, preferred: usize) -> usize {
        let sizes = self.page_sizes();
        if sizes.contains(&preferred) {
            preferred
        } else {
            sizes[0]
        }
    }

    /// `per_page` sent with a search: enough to fill the largest page option.
    pub fn fetch_limit(&self) -> usize {
        self.page_sizes().iter().copied().max().unwrap_or_default()
    }
}

/// Current `innerWidth` of the browser window. Treated as wide when unavailable.
pub fn current_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(NARROW_BREAKPOINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert_eq!(ViewportClass::from_width(375.0), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(767.9), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(768.0), ViewportClass::Wide);
        assert_eq!(ViewportClass::from_width(1440.0), ViewportClass::Wide);
    }

    #[test]
    fn each_class_offers_only_its_own_sizes() {
        let narrow = ViewportClass::from_width(400.0);
        let wide = ViewportClass::from_width(1200.0);
        assert_eq!(narrow.page_sizes(), &[6, 12, 24]);
        assert_eq!(wide.page_sizes(), &[8, 16, 32]);
        assert!(narrow.page_sizes().iter().all(|size| !wide.page_sizes().contains(size)));
    }

    #[test]
    fn unavailable_preference_falls_back_to_smallest_option() {
        assert_eq!(ViewportClass::Wide.effective_page_size(16), 16);
        assert_eq!(ViewportClass::Wide.effective_page_size(12), 8);
        assert_eq!(ViewportClass::Narrow.effective_page_size(12), 12);
        assert_eq!(ViewportClass::Narrow.effective_page_size(8), 6);
    }

    #[test]
    fn fetch_limit_matches_largest_page() {
        assert_eq!(ViewportClass::Wide.fetch_limit(), 32);
        assert_eq!(ViewportClass::Narrow.fetch_limit(), 24);
    }
}
