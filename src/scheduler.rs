use std::time::Duration;

pub const LAUNCH_INTERVAL: Duration = Duration::from_millis(600);
pub const LAUNCHES_PER_VOLLEY: u32 = 15;
pub const COOLDOWN: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Firing { next_at: Duration },
    Cooldown { resume_at: Duration },
    // Switched on but the surface is hidden
    Suspended,
}

/// Auto-launch timer. Driven by an external monotonic clock so it never
/// builds a backlog while the host is not ticking it.
#[derive(Debug, Clone)]
pub struct Scheduler {
    phase: Phase,
    playing: bool,
    visible: bool,
    launched: u32,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            playing: false,
            visible: true,
            launched: 0,
        }
    }

    /// Whether the auto show is switched on, even if currently suspended.
    pub fn is_active(&self) -> bool {
        self.playing
    }

    pub fn is_suspended(&self) -> bool {
        self.phase == Phase::Suspended
    }

    pub fn in_cooldown(&self) -> bool {
        matches!(self.phase, Phase::Cooldown { .. })
    }

    /// Launches since the last start, stop or resume.
    pub fn launched(&self) -> u32 {
        self.launched
    }

    pub fn start(&mut self, now: Duration) {
        if self.playing {
            return;
        }
        self.playing = true;
        self.launched = 0;
        self.phase = if self.visible {
            Phase::Firing { next_at: now + LAUNCH_INTERVAL }
        } else {
            Phase::Suspended
        };
        log::debug!("auto show started");
    }

    pub fn stop(&mut self) {
        if !self.playing {
            return;
        }
        self.playing = false;
        self.launched = 0;
        self.phase = Phase::Idle;
        log::debug!("auto show stopped");
    }

    pub fn toggle(&mut self, now: Duration) {
        if self.playing {
            self.stop();
        } else {
            self.start(now);
        }
    }

    /// Track host visibility. Hiding cancels the timer (and any cooldown);
    /// showing again restarts it with a fresh launch count.
    pub fn set_visible(&mut self, visible: bool, now: Duration) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;

        if !self.playing {
            return;
        }

        if visible {
            self.launched = 0;
            self.phase = Phase::Firing { next_at: now + LAUNCH_INTERVAL };
            log::debug!("auto show resumed");
        } else {
            self.phase = Phase::Suspended;
            log::debug!("auto show suspended while hidden");
        }
    }

    /// Number of launches due at `now`.
    pub fn poll(&mut self, now: Duration) -> u32 {
        let mut due = 0;

        loop {
            match self.phase {
                Phase::Firing { next_at } if next_at <= now => {
                    due += 1;
                    self.launched += 1;
                    self.phase = if self.launched % LAUNCHES_PER_VOLLEY == 0 {
                        log::debug!("auto show pausing after {} launches", self.launched);
                        Phase::Cooldown { resume_at: next_at + COOLDOWN }
                    } else {
                        Phase::Firing { next_at: next_at + LAUNCH_INTERVAL }
                    };
                }
                // Only reachable while still playing: stop() and hiding both leave Cooldown
                Phase::Cooldown { resume_at } if resume_at <= now => {
                    self.phase = Phase::Firing { next_at: resume_at + LAUNCH_INTERVAL };
                }
                _ => break,
            }
        }

        due
    }
}
