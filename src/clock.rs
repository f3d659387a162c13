// Longer gaps mean the frame loop was suspended.
pub const MAX_FRAME_DELTA: f64 = 0.05;

#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_timestamp_ms: Option<f64>,
    elapsed: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    pub now_ms: f64,
    pub elapsed: f64,
    pub delta: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, timestamp_ms: f64) -> FrameTime {
        let delta_ms = match self.last_timestamp_ms {
            Some(previous) => (timestamp_ms - previous).max(0.0),
            None => 0.0,
        };
        self.last_timestamp_ms = Some(timestamp_ms);

        let delta = (delta_ms / 1000.0).min(MAX_FRAME_DELTA);
        self.elapsed += delta;

        FrameTime {
            now_ms: timestamp_ms,
            elapsed: self.elapsed,
            delta,
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

/// One-shot deadline checked against the caller's clock rather than a host
/// timer. Clearing it takes effect immediately.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Deadline {
    at_ms: Option<f64>,
}

impl Deadline {
    pub fn arm(&mut self, now_ms: f64, after_ms: f64) {
        self.at_ms = Some(now_ms + after_ms.max(0.0));
    }

    pub fn clear(&mut self) {
        self.at_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.at_ms.is_some()
    }

    pub fn expire(&mut self, now_ms: f64) -> bool {
        match self.at_ms {
            Some(at_ms) if now_ms >= at_ms => {
                self.at_ms = None;
                true
            }
            _ => false,
        }
    }
}
