use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

/// Measures the time between frames, in the milliseconds `update` expects,
/// and counts frames per second.
pub struct FrameClock {
    framelimit: u16,
    last_tick: Option<Instant>,
    last_second_frames: VecDeque<Instant>,
    last_display: Instant,
}

impl FrameClock {
    /// `framelimit` is the most frames per second `limit` allows. 0 means no limit.
    pub fn new(framelimit: u16) -> FrameClock {
        FrameClock {
            framelimit,
            last_tick: None,
            last_second_frames: VecDeque::with_capacity(128),
            last_display: Instant::now(),
        }
    }

    pub fn framelimit(&self) -> u16 {
        self.framelimit
    }

    // Records a frame. Returns milliseconds since the previous one, 0 for the first.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = self
            .last_tick
            .map_or(0.0, |last| (now - last).as_secs_f32() * 1000.0);
        self.last_tick = Some(now);

        let a_second_ago = now.checked_sub(Duration::from_secs(1));
        while let (Some(front), Some(cutoff)) = (self.last_second_frames.front(), a_second_ago) {
            if *front >= cutoff {
                break;
            }
            self.last_second_frames.pop_front();
        }
        self.last_second_frames.push_back(now);
        dt
    }

    /// Frames recorded during the last second.
    pub fn fps(&self) -> usize {
        self.last_second_frames.len()
    }

    /// Sleeps until a frame's worth of time has passed since the last tick.
    pub fn limit(&self) {
        if let Some(remaining) = self.remaining() {
            thread::sleep(remaining);
        }
    }

    fn remaining(&self) -> Option<Duration> {
        if self.framelimit == 0 {
            return None;
        }
        let frame = Duration::from_millis(1000 / self.framelimit as u64);
        let elapsed = self.last_tick?.elapsed();
        frame.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    pub fn tick_and_log(&mut self) -> f32 {
        let dt = self.tick();
        if self.last_display.elapsed() > Duration::from_secs(1) {
            info!("fps: {}", self.fps());
            self.last_display = Instant::now();
        }
        dt
    }
}
