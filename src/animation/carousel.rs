pub const AUTO_ADVANCE_MS: u32 = 4_000;

pub fn items_per_view(viewport_width: f64) -> usize {
    if viewport_width < 768.0 {
        1
    } else if viewport_width < 1024.0 {
        2
    } else {
        3
    }
}

/// Index arithmetic for a sliding strip of `len` cards showing
/// `per_view` at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    per_view: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize, per_view: usize) -> Self {
        Self {
            len,
            per_view: per_view.max(1),
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    pub fn max_index(&self) -> usize {
        self.len.saturating_sub(self.per_view)
    }

    pub fn next(self) -> Self {
        let index = if self.index >= self.max_index() { 0 } else { self.index + 1 };
        Self { index, ..self }
    }

    pub fn prev(self) -> Self {
        let index = if self.index == 0 { self.max_index() } else { self.index - 1 };
        Self { index, ..self }
    }

    pub fn go_to(self, index: usize) -> Self {
        Self {
            index: index.min(self.max_index()),
            ..self
        }
    }

    /// Keeps the current position when the viewport changes size.
    pub fn resize(self, per_view: usize) -> Self {
        let resized = Self {
            per_view: per_view.max(1),
            ..self
        };
        resized.go_to(self.index)
    }

    pub fn page_count(&self) -> usize {
        self.len.div_ceil(self.per_view)
    }

    /// Horizontal shift of the strip, in percent of the viewport.
    pub fn offset_percent(&self) -> f64 {
        self.index as f64 * (100.0 / self.per_view as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_pick_cards_per_view() {
        assert_eq!(items_per_view(375.0), 1);
        assert_eq!(items_per_view(768.0), 2);
        assert_eq!(items_per_view(1023.0), 2);
        assert_eq!(items_per_view(1440.0), 3);
    }

    #[test]
    fn next_and_prev_wrap_at_the_ends() {
        let carousel = Carousel::new(11, 3);
        assert_eq!(carousel.max_index(), 8);

        assert_eq!(carousel.prev().index(), 8);
        assert_eq!(carousel.go_to(8).next().index(), 0);
        assert_eq!(carousel.next().next().index(), 2);
    }

    #[test]
    fn auto_advance_visits_every_position_then_wraps() {
        let mut carousel = Carousel::new(7, 3);
        let mut seen = vec![carousel.index()];
        for _ in 0..carousel.max_index() + 1 {
            carousel = carousel.next();
            seen.push(carousel.index());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn resize_clamps_position() {
        let carousel = Carousel::new(11, 1).go_to(10);
        let wide = carousel.resize(3);
        assert_eq!(wide.index(), 8);
        assert_eq!(wide.page_count(), 4);
        assert_eq!(Carousel::new(11, 2).go_to(2).offset_percent(), 100.0);
    }

    #[test]
    fn fewer_items_than_slots_stays_put() {
        let carousel = Carousel::new(2, 3);
        assert_eq!(carousel.max_index(), 0);
        assert_eq!(carousel.next().index(), 0);
        assert_eq!(carousel.prev().index(), 0);
        assert_eq!(carousel.page_count(), 1);
    }
}
