//! Slide Set Module
//! Index state of the feature carousel and its hover regions.

/// Ordered slides with exactly one active index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideSet {
    len: usize,
    current: usize,
}

impl SlideSet {
    /// Returns `None` for an empty carousel.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, current: 0 })
    }

    pub fn count(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.len
    }

    /// Index autoplay moves to, wrapping after the last slide.
    pub fn next_index(&self) -> usize {
        (self.current + 1) % self.len
    }

    /// Set the active slide. Out-of-range indices are rejected.
    pub fn go_to(&mut self, index: usize) -> bool {
        if !self.contains(index) {
            return false;
        }
        self.current = index;
        true
    }

    /// Active flag per slide. Indicators share the same projection.
    pub fn projection(&self) -> Vec<bool> {
        (0..self.len).map(|i| i == self.current).collect()
    }
}

/// Hoverable feature description mapped to a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRegion {
    pub title: String,
    pub description: String,
    /// `None` when the markup index did not parse
    pub slide: Option<usize>,
}

impl FeatureRegion {
    pub fn new(title: &str, description: &str, raw_index: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            slide: raw_index.trim().parse().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_carousel() {
        assert!(SlideSet::new(0).is_none());
    }

    #[test]
    fn test_projection_has_one_active() {
        let mut slides = SlideSet::new(4).unwrap();
        for i in 0..4 {
            assert!(slides.go_to(i));
            let projection = slides.projection();
            assert_eq!(projection.iter().filter(|&&on| on).count(), 1);
            assert!(projection[i]);
        }
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut slides = SlideSet::new(3).unwrap();
        slides.go_to(1);
        assert!(!slides.go_to(3));
        assert_eq!(slides.current(), 1);
    }

    #[test]
    fn test_next_index_wraps() {
        let mut slides = SlideSet::new(3).unwrap();
        slides.go_to(2);
        assert_eq!(slides.next_index(), 0);
    }

    #[test]
    fn test_feature_region_index_parsing() {
        assert_eq!(FeatureRegion::new("a", "b", " 2 ").slide, Some(2));
        assert_eq!(FeatureRegion::new("a", "b", "two").slide, None);
        assert_eq!(FeatureRegion::new("a", "b", "-1").slide, None);
    }
}
