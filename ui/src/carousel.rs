//! Circular index over a fixed, non-empty list of panels.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("a carousel needs at least one item")]
    Empty,

    #[error("index {index} is out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self { current: 0, len })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; construction rejects empty carousels.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = index;
        Ok(())
    }

    /// Horizontal track offset in percent of one panel.
    pub fn offset_percent(&self) -> i64 {
        -(self.current as i64) * 100
    }

    pub fn transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent())
    }
}
