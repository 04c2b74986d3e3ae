//! One-shot scroll reveal

/// Fraction of the element that must be visible
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Slack for intersection ratios reported a hair under the threshold
const RATIO_EPSILON: f64 = 1e-3;

/// Whether an intersection sample counts as "in view"
pub fn visible_enough(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio + RATIO_EPSILON >= threshold
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Feed one intersection sample. Returns true only on the transition to
    /// `Revealed`; once revealed, leaving the viewport changes nothing.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        match self {
            Self::Hidden if is_intersecting => {
                *self = Self::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == Self::Revealed
    }
}
