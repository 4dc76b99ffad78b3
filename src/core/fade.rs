/// Wall-clock opacity ramp for the star layer.
///
/// Progress is derived from elapsed milliseconds on each update rather than
/// from frame counts, so dropped frames only make the ramp coarser.
#[derive(Clone, Debug)]
pub struct FadeRamp {
    start_ms: f64,
    duration_ms: f64,
    progress: f64,
}

impl FadeRamp {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            start_ms: 0.0,
            duration_ms,
            progress: 0.0,
        }
    }

    /// Restart from zero with the ramp anchored at `now_ms`.
    pub fn restart(&mut self, now_ms: f64) {
        self.start_ms = now_ms;
        self.progress = 0.0;
    }

    /// Recompute progress for `now_ms` and return it. Progress never goes
    /// backwards, even when a frame timestamp predates the ramp start.
    pub fn update(&mut self, now_ms: f64) -> f64 {
        let elapsed = now_ms - self.start_ms;
        let target = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed / self.duration_ms).clamp(0.0, 1.0)
        };
        self.progress = self.progress.max(target);
        self.progress
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Multiplier applied to every star's alpha.
    #[inline]
    pub fn global_alpha(&self) -> f64 {
        self.progress().min(1.0)
    }
}
