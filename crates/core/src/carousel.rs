//! Slide index arithmetic for the carousel strips

/// Direction requested by a control or arrow key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideStep {
    Prev,
    Next,
}

impl SlideStep {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// One slider instance: current index into `len` slides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// `None` for an empty strip
    pub const fn new(len: usize) -> Option<Self> {
        if len == 0 {
            None
        } else {
            Some(Self { index: 0, len })
        }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false; an empty carousel cannot be constructed
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Jump to `index`, wrapping in both directions
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn set_slide(&mut self, index: isize) -> usize {
        self.index = index.rem_euclid(self.len as isize) as usize;
        self.index
    }

    #[allow(clippy::cast_possible_wrap)]
    pub fn next(&mut self) -> usize {
        self.set_slide(self.index as isize + 1)
    }

    #[allow(clippy::cast_possible_wrap)]
    pub fn prev(&mut self) -> usize {
        self.set_slide(self.index as isize - 1)
    }

    pub fn step(&mut self, step: SlideStep) -> usize {
        match step {
            SlideStep::Prev => self.prev(),
            SlideStep::Next => self.next(),
        }
    }

    /// Track offset in percent of one slide width
    pub const fn offset_percent(&self) -> usize {
        self.index * 100
    }

    /// CSS `transform` value for the track
    pub fn transform(&self) -> String {
        format!("translateX(-{}%)", self.offset_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_negative_wraps_to_last() {
        let mut c = Carousel::new(4).unwrap();
        assert_eq!(c.set_slide(-1), 3);
        assert_eq!(c.transform(), "translateX(-300%)");
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut c = Carousel::new(3).unwrap();
        c.set_slide(2);
        assert_eq!(c.next(), 0);
        assert_eq!(c.transform(), "translateX(-0%)");
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut c = Carousel::new(1).unwrap();
        assert_eq!(c.prev(), 0);
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn test_empty_strip_rejected() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(SlideStep::from_key("ArrowLeft"), Some(SlideStep::Prev));
        assert_eq!(SlideStep::from_key("ArrowRight"), Some(SlideStep::Next));
        assert_eq!(SlideStep::from_key("ArrowUp"), None);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = Carousel::new(3).unwrap();
        let b = Carousel::new(3).unwrap();
        a.next();
        assert_eq!(a.index(), 1);
        assert_eq!(b.index(), 0);
    }

    proptest! {
        #[test]
        fn prop_index_stays_in_range(
            len in 1usize..16,
            steps in proptest::collection::vec(any::<bool>(), 0..64),
            jump in -1000isize..1000,
        ) {
            let mut c = Carousel::new(len).unwrap();
            prop_assert!(c.set_slide(jump) < len);
            for forward in steps {
                let idx = c.step(if forward { SlideStep::Next } else { SlideStep::Prev });
                prop_assert!(idx < len);
                prop_assert_eq!(idx, c.index());
            }
        }

        #[test]
        fn prop_matches_double_modulo(len in 1usize..16, i in -1000isize..1000) {
            let mut c = Carousel::new(len).unwrap();
            let n = len as isize;
            let expected = ((i % n) + n) % n;
            prop_assert_eq!(c.set_slide(i) as isize, expected);
        }
    }
}
