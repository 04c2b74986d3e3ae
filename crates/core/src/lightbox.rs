//! Image overlay state

/// What the overlay currently shows
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LightboxState {
    open: bool,
    src: String,
    alt: String,
}

impl LightboxState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, src: &str, alt: &str) {
        self.open = true;
        self.src = src.to_string();
        self.alt = alt.to_string();
    }

    /// Close the overlay; returns whether it was open
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        self.src.clear();
        was_open
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    /// Escape closes, and only while open
    pub fn closes_on_key(&self, key: &str) -> bool {
        self.open && key == "Escape"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_close_clears_source() {
        let mut lb = LightboxState::new();
        lb.open("/img/hero.jpg", "Hero shot");
        assert!(lb.is_open());
        assert_eq!(lb.src(), "/img/hero.jpg");
        assert_eq!(lb.alt(), "Hero shot");

        assert!(lb.close());
        assert!(!lb.is_open());
        assert_eq!(lb.src(), "");
    }

    #[test]
    fn test_close_when_closed_reports_false() {
        let mut lb = LightboxState::new();
        assert!(!lb.close());
    }

    #[test]
    fn test_escape_only_while_open() {
        let mut lb = LightboxState::new();
        assert!(!lb.closes_on_key("Escape"));
        lb.open("a.png", "");
        assert!(lb.closes_on_key("Escape"));
        assert!(!lb.closes_on_key("Enter"));
    }
}
