//! Star Rating State
//!
//! A committed rating plus a transient hover rating. Hover wins while it is
//! non-zero, so the stars preview a rating before it is clicked.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarKind {
    Filled,
    Empty,
}

impl StarKind {
    pub fn glyph(self) -> &'static str {
        match self {
            StarKind::Filled => "★",
            StarKind::Empty => "☆",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            StarKind::Filled => "filled",
            StarKind::Empty => "empty",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    max_stars: u32,
    rating: u32,
    hover: u32,
    initial: u32,
}

impl Default for StarRating {
    fn default() -> Self {
        Self::new(5, 0)
    }
}

impl StarRating {
    pub fn new(max_stars: u32, initial: u32) -> Self {
        let max_stars = max_stars.max(1);
        let initial = initial.min(max_stars);
        Self {
            max_stars,
            rating: initial,
            hover: 0,
            initial,
        }
    }

    pub fn max_stars(&self) -> u32 {
        self.max_stars
    }

    pub fn rating(&self) -> u32 {
        self.rating
    }

    /// Rating currently shown by the stars
    pub fn displayed(&self) -> u32 {
        if self.hover > 0 {
            self.hover
        } else {
            self.rating
        }
    }

    /// Commit the star at `index` (zero-based).
    pub fn click(&self, index: u32) -> Self {
        Self {
            rating: self.star_number(index),
            ..*self
        }
    }

    pub fn hover(&self, index: u32) -> Self {
        Self {
            hover: self.star_number(index),
            ..*self
        }
    }

    pub fn leave(&self) -> Self {
        Self { hover: 0, ..*self }
    }

    pub fn reset(&self) -> Self {
        Self {
            rating: self.initial,
            ..*self
        }
    }

    pub fn star_kind(&self, index: u32) -> StarKind {
        if index < self.displayed() {
            StarKind::Filled
        } else {
            StarKind::Empty
        }
    }

    pub fn can_reset(&self) -> bool {
        self.rating > 0
    }

    fn star_number(&self, index: u32) -> u32 {
        index.saturating_add(1).min(self.max_stars)
    }
}

/// Short verdict shown under the stars
pub fn feedback(rating: u32) -> &'static str {
    match rating {
        0 => "Click to rate!",
        1 | 2 => "Poor",
        3 => "Good",
        4 => "Very Good",
        _ => "Excellent!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(rating: &StarRating) -> Vec<StarKind> {
        (0..rating.max_stars()).map(|i| rating.star_kind(i)).collect()
    }

    #[test]
    fn test_click_commits_rating() {
        let rating = StarRating::default().click(2);
        assert_eq!(rating.rating(), 3);
        assert_eq!(
            kinds(&rating),
            vec![StarKind::Filled, StarKind::Filled, StarKind::Filled, StarKind::Empty, StarKind::Empty]
        );
    }

    #[test]
    fn test_hover_previews_then_leave_restores() {
        let rating = StarRating::default().click(1).hover(3);
        assert_eq!(rating.displayed(), 4);
        assert_eq!(rating.rating(), 2);
        assert_eq!(rating.star_kind(3), StarKind::Filled);

        let rating = rating.leave();
        assert_eq!(rating.displayed(), 2);
        assert_eq!(rating.star_kind(3), StarKind::Empty);
    }

    #[test]
    fn test_reset_goes_back_to_initial() {
        let rating = StarRating::new(5, 2).click(4).reset();
        assert_eq!(rating.rating(), 2);
        assert!(rating.can_reset());
        assert!(!StarRating::default().can_reset());
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        assert_eq!(StarRating::new(3, 9).rating(), 3);
        assert_eq!(StarRating::new(0, 0).max_stars(), 1);
        assert_eq!(StarRating::new(5, 0).click(40).rating(), 5);
    }

    #[test]
    fn test_feedback_messages() {
        assert_eq!(feedback(0), "Click to rate!");
        assert_eq!(feedback(1), "Poor");
        assert_eq!(feedback(2), "Poor");
        assert_eq!(feedback(3), "Good");
        assert_eq!(feedback(4), "Very Good");
        assert_eq!(feedback(5), "Excellent!");
        assert_eq!(StarKind::Filled.glyph(), "★");
    }
}
