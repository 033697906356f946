//! Slide index state for bounded carousels, plus the pacing bookkeeping for
//! the auto-advancing capability wheel.

/// A cursor into a fixed, externally supplied list of slides. Wraps modulo
/// the slide count in both directions; no out-of-range index is
/// representable. An empty list pins the cursor at 0 and ignores
/// navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance by one, wrapping to 0 after the last slide.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Step back by one, wrapping to the last slide from 0.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump directly; `n` is taken modulo the slide count.
    pub fn go_to(&mut self, n: usize) {
        if self.len > 0 {
            self.index = n % self.len;
        }
    }
}

/// Pacing state for the capability wheel's auto-advance.
///
/// The component owns the actual timer task; this tracks hover and an epoch
/// counter so a tick scheduled under an older regime can never advance the
/// wheel. Pausing voids the pending tick; resuming opens a new epoch, which
/// is what makes the post-hover interval a fresh full one (no double-speed
/// catch-up, and two live tickers can never both pass the epoch check).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelTimer {
    hovered: bool,
    epoch: u32,
}

impl WheelTimer {
    pub fn new() -> Self {
        Self {
            hovered: false,
            epoch: 0,
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Current epoch; a ticker captures this when it starts.
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// Pointer entered the control. Idempotent.
    pub fn pause(&mut self) {
        if !self.hovered {
            self.hovered = true;
            self.epoch = self.epoch.wrapping_add(1);
        }
    }

    /// Pointer left the control. Idempotent; the next tick runs a full
    /// interval away.
    pub fn resume(&mut self) {
        if self.hovered {
            self.hovered = false;
            self.epoch = self.epoch.wrapping_add(1);
        }
    }

    /// Should a tick scheduled under `epoch` advance the wheel now?
    pub fn should_advance(&self, epoch: u32) -> bool {
        !self.hovered && epoch == self.epoch
    }
}

impl Default for WheelTimer {
    fn default() -> Self {
        Self::new()
    }
}
