//! Pure selection and scrolling rules applied to encoder steps.

/// Move the menu cursor one item forward, wrapping past the end.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (selected + 1) % item_count
}

/// Move the menu cursor one item back, wrapping past the start.
pub fn select_prev(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (selected + item_count - 1) % item_count
}

/// Streaming source of integer samples.
///
/// Collaborator seam: the scope view consumes captures through this
/// without knowing where they come from.
pub trait SampleSource {
    /// The next sample, or `None` when the capture is exhausted.
    fn next_sample(&mut self) -> Option<i32>;
}

/// In-memory capture used by the scope firmware and by tests.
pub struct SliceSource<'a> {
    data: &'a [i32],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [i32]) -> Self {
        Self { data, pos: 0 }
    }
}

impl<'a> SampleSource for SliceSource<'a> {
    fn next_sample(&mut self) -> Option<i32> {
        let sample = self.data.get(self.pos).copied();
        if sample.is_some() {
            self.pos += 1;
        }
        sample
    }
}

/// Smallest and largest value in a capture, or `None` when it is empty.
pub fn sample_bounds(samples: &[i32]) -> Option<(i32, i32)> {
    let first = *samples.first()?;
    let mut bounds = (first, first);
    for &s in &samples[1..] {
        bounds.0 = bounds.0.min(s);
        bounds.1 = bounds.1.max(s);
    }
    Some(bounds)
}

/// Fixed-size view into a capture, scrolled one row at a time.
///
/// Scrolling clamps at both ends rather than wrapping, so a long twist of
/// the encoder parks the window at the first or last row.
pub struct ScrollWindow {
    start: usize,
    visible: usize,
    total: usize,
}

impl ScrollWindow {
    pub fn new(visible: usize, total: usize) -> Self {
        Self {
            start: 0,
            visible,
            total,
        }
    }

    /// First visible row.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Rows currently in view.
    pub fn range(&self) -> core::ops::Range<usize> {
        let end = (self.start + self.visible).min(self.total);
        self.start..end
    }

    /// Shift the window by one row per step delta.  Returns whether the
    /// window actually moved (callers re-render only on movement).
    pub fn scroll(&mut self, delta: i32) -> bool {
        if delta > 0 {
            if self.start < self.total.saturating_sub(self.visible) {
                self.start += 1;
                return true;
            }
        } else if delta < 0 && self.start > 0 {
            self.start -= 1;
            return true;
        }
        false
    }
}
