/// Accumulated mouse movement with consume-once reads.
///
/// The first position reported only establishes a baseline, so a cursor that
/// starts far from the origin does not produce a jump on the first frame.
#[derive(Debug, Default, Clone)]
pub struct MouseTracker {
    last: Option<(f64, f64)>,
    delta: (f64, f64),
}

impl MouseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds an absolute cursor position.
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        let (px, py) = self.last.unwrap_or((x, y));
        self.delta.0 += x - px;
        self.delta.1 += y - py;
        self.last = Some((x, y));
    }

    /// Feeds relative motion by advancing a virtual cursor.
    pub fn motion(&mut self, dx: f64, dy: f64) {
        let (x, y) = self.last.unwrap_or((0.0, 0.0));
        if self.last.is_none() {
            self.last = Some((x, y));
        }
        self.cursor_moved(x + dx, y + dy);
    }

    /// Returns the movement since the previous call and resets it.
    pub fn take_delta(&mut self) -> (f32, f32) {
        let (dx, dy) = std::mem::take(&mut self.delta);
        (dx as f32, dy as f32)
    }

    /// Forgets the last position. The next absolute position becomes a new
    /// baseline; pending movement is kept.
    pub fn reset_baseline(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_position_is_a_baseline() {
        let mut mouse = MouseTracker::new();
        mouse.cursor_moved(912.0, -4410.0);
        assert_eq!(mouse.take_delta(), (0.0, 0.0));
    }

    #[test]
    fn movement_accumulates_until_read() {
        let mut mouse = MouseTracker::new();
        mouse.cursor_moved(100.0, 100.0);
        mouse.cursor_moved(110.0, 95.0);
        mouse.cursor_moved(112.0, 90.0);
        assert_eq!(mouse.take_delta(), (12.0, -10.0));
    }

    #[test]
    fn delta_is_consumed_once() {
        let mut mouse = MouseTracker::new();
        mouse.cursor_moved(0.0, 0.0);
        mouse.cursor_moved(3.0, 4.0);
        assert_eq!(mouse.take_delta(), (3.0, 4.0));
        assert_eq!(mouse.take_delta(), (0.0, 0.0));
    }

    #[test]
    fn relative_motion_counts_from_the_first_event() {
        let mut mouse = MouseTracker::new();
        mouse.motion(5.0, -2.0);
        mouse.motion(1.0, 1.0);
        assert_eq!(mouse.take_delta(), (6.0, -1.0));
    }

    #[test]
    fn reset_baseline_swallows_the_jump() {
        let mut mouse = MouseTracker::new();
        mouse.cursor_moved(10.0, 10.0);
        mouse.cursor_moved(12.0, 10.0);
        mouse.reset_baseline();
        mouse.cursor_moved(700.0, 500.0);
        mouse.cursor_moved(701.0, 502.0);
        assert_eq!(mouse.take_delta(), (3.0, 2.0));
    }
}
