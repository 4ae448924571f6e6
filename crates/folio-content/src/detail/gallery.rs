//! Image gallery with wrap-around navigation.

use folio_core::Project;

/// One position dot under the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    /// Image index this dot jumps to.
    pub index: usize,
    /// Whether it is the image currently shown.
    pub active: bool,
}

/// Ordered, duplicate-free image list plus the current position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gallery {
    images: Vec<String>,
    index: usize,
}

impl Gallery {
    /// Build a gallery from arbitrary URLs, dropping blanks and repeats.
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut images: Vec<String> = Vec::new();
        for url in urls {
            let url = url.into();
            if url.trim().is_empty() || images.contains(&url) {
                continue;
            }
            images.push(url);
        }
        Self { images, index: 0 }
    }

    /// Gallery for a project: primary image first, then the extras.
    pub fn for_project(project: &Project) -> Self {
        Self::new(project.images())
    }

    /// Start at `index` when it is in range, otherwise at the first image.
    pub fn starting_at(mut self, index: usize) -> Self {
        if !self.go_to(index) {
            self.index = 0;
        }
        self
    }

    /// All images in order.
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether there are no images at all.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Index of the image currently shown.
    pub fn index(&self) -> usize {
        self.index
    }

    /// URL of the image currently shown.
    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// Prev/next controls and indicators only make sense past one image.
    pub fn has_navigation(&self) -> bool {
        self.images.len() > 1
    }

    /// Index `next()` would move to.
    pub fn next_index(&self) -> usize {
        match self.images.len() {
            0 => 0,
            n => (self.index + 1) % n,
        }
    }

    /// Index `previous()` would move to.
    pub fn previous_index(&self) -> usize {
        match self.images.len() {
            0 => 0,
            n => (self.index + n - 1) % n,
        }
    }

    /// Advance, wrapping from the last image to the first.
    pub fn next(&mut self) {
        self.index = self.next_index();
    }

    /// Step back, wrapping from the first image to the last.
    pub fn previous(&mut self) {
        self.index = self.previous_index();
    }

    /// Jump to `index`. Out-of-range requests are ignored and return `false`.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// One indicator per image.
    pub fn indicators(&self) -> Vec<Indicator> {
        (0..self.images.len())
            .map(|index| Indicator {
                index,
                active: index == self.index,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn three() -> Gallery {
        Gallery::new(["a", "b", "c"])
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut g = three().starting_at(2);
        g.next();
        assert_eq!(g.index(), 0);
        assert_eq!(g.current(), Some("a"));
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut g = three();
        g.previous();
        assert_eq!(g.index(), 2);
        assert_eq!(g.current(), Some("c"));
    }

    #[test]
    fn test_go_to_out_of_range_is_ignored() {
        let mut g = three();
        assert!(g.go_to(1));
        assert!(!g.go_to(3));
        assert_eq!(g.index(), 1);
    }

    #[test]
    fn test_starting_at_out_of_range_resets() {
        assert_eq!(three().starting_at(9).index(), 0);
    }

    #[test]
    fn test_single_image_has_no_navigation() {
        let mut g = Gallery::new(["only"]);
        assert!(!g.has_navigation());
        g.next();
        assert_eq!(g.index(), 0);
    }

    #[test]
    fn test_empty_gallery() {
        let mut g = Gallery::new(Vec::<String>::new());
        assert!(g.is_empty());
        assert!(g.current().is_none());
        g.next();
        g.previous();
        assert_eq!(g.index(), 0);
        assert!(g.indicators().is_empty());
    }

    #[test]
    fn test_indicators_mark_active() {
        let g = three().starting_at(1);
        let active: Vec<bool> = g.indicators().iter().map(|i| i.active).collect();
        assert_eq!(active, [false, true, false]);
    }

    #[test]
    fn test_for_project_dedupes() {
        let p = Project::new("1", "T", "C", "2024-01-01", "d")
            .with_image("a")
            .with_images(["a", "b"]);
        assert_eq!(Gallery::for_project(&p).images(), ["a", "b"]);
    }

    proptest! {
        #[test]
        fn test_dedup_bounds(primary in "[a-c]", extra in prop::collection::vec("[a-d]", 0..8)) {
            let p = Project::new("1", "T", "C", "2024-01-01", "d")
                .with_image(primary)
                .with_images(extra.clone());
            let g = Gallery::for_project(&p);
            prop_assert!(g.len() <= 1 + extra.len());
            let mut sorted = g.images().to_vec();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), g.len());
        }

        #[test]
        fn test_next_then_previous_is_identity(n in 1usize..10, start in 0usize..10) {
            let mut g = Gallery::new((0..n).map(|i| i.to_string())).starting_at(start);
            let before = g.index();
            g.next();
            g.previous();
            prop_assert_eq!(g.index(), before);
        }
    }
}
