//! Hide-on-scroll header tracking

/// Default offset (px) below which the header always stays visible
pub const DEFAULT_HIDE_AFTER: f64 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVisibility {
    Visible,
    Hidden,
}

/// Remembers the previous vertical offset between scroll events
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    last: f64,
    hide_after: f64,
}

impl ScrollTracker {
    pub fn new(initial: f64, hide_after: f64) -> Self {
        Self {
            last: initial,
            hide_after,
        }
    }

    /// Feed the current offset. Hidden only while moving down past the threshold.
    pub fn update(&mut self, current: f64) -> NavVisibility {
        let visibility = if current > self.last && current > self.hide_after {
            NavVisibility::Hidden
        } else {
            NavVisibility::Visible
        };
        self.last = current;
        visibility
    }

    #[cfg(test)]
    pub fn last(&self) -> f64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hides_when_scrolling_down_past_threshold() {
        let mut t = ScrollTracker::new(0.0, DEFAULT_HIDE_AFTER);
        assert_eq!(t.update(100.0), NavVisibility::Visible);
        assert_eq!(t.update(121.0), NavVisibility::Hidden);
        assert_eq!(t.update(400.0), NavVisibility::Hidden);
    }

    #[test]
    fn test_shows_when_scrolling_up() {
        let mut t = ScrollTracker::new(500.0, DEFAULT_HIDE_AFTER);
        assert_eq!(t.update(450.0), NavVisibility::Visible);
        assert_eq!(t.last(), 450.0);
    }

    #[test]
    fn test_equal_offset_is_visible() {
        let mut t = ScrollTracker::new(300.0, DEFAULT_HIDE_AFTER);
        assert_eq!(t.update(300.0), NavVisibility::Visible);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut t = ScrollTracker::new(0.0, DEFAULT_HIDE_AFTER);
        assert_eq!(t.update(120.0), NavVisibility::Visible);
    }
}
