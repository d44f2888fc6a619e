use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces presentation to a fixed frame interval.
///
/// The deadline is always re-armed from the moment `wait` returns, so an
/// overrunning frame is presented immediately and the lost time is not
/// carried into later frames.
pub struct FrameClock {
    frame_interval: Duration,
    deadline: Instant,
    last_frame: Instant,
    frametime_smoothed: f64,
}

impl FrameClock {
    /// `frames_per_second` must be positive and finite
    pub fn new(frames_per_second: f64) -> Self {
        let frame_interval = Duration::from_secs_f64(1. / frames_per_second);
        let now = Instant::now();
        Self {
            frame_interval,
            deadline: now + frame_interval,
            last_frame: now,
            frametime_smoothed: frame_interval.as_secs_f64(),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Time left until the next frame is due, zero once the deadline passed
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    /// Block until the frame deadline, then arm the next one.
    /// Returns the wall-clock time since the previous call.
    pub fn wait(&mut self) -> Duration {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            sleep(remaining);
        }
        self.mark(Instant::now())
    }

    fn mark(&mut self, now: Instant) -> Duration {
        let frametime = now.saturating_duration_since(self.last_frame);
        self.frametime_smoothed += (frametime.as_secs_f64() - self.frametime_smoothed) * 0.1;
        self.last_frame = now;
        self.deadline = now + self.frame_interval;
        frametime
    }

    /// Smoothed presentation rate
    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }
}
