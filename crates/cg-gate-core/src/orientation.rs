use std::cell::Cell;

/// Which unlock path the page takes, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationMode {
    /// Wait for the orientation video's `ended` signal.
    Video,
    /// No playable video on the page; unlock right after validation.
    NoVideo,
}

/// Second factor of the gate: the orientation video was watched.
#[derive(Debug)]
pub struct OrientationGate {
    mode: OrientationMode,
    completed: Cell<bool>,
}

impl OrientationGate {
    pub fn select(video_present: bool) -> Self {
        let mode = if video_present {
            OrientationMode::Video
        } else {
            OrientationMode::NoVideo
        };
        Self {
            mode,
            completed: Cell::new(false),
        }
    }

    pub fn mode(&self) -> OrientationMode {
        self.mode
    }

    /// Record the video's completion. Returns `false` for repeats, and for
    /// pages without a video, where there is nothing to complete.
    pub fn record_completion(&self) -> bool {
        if self.mode == OrientationMode::NoVideo || self.completed.get() {
            return false;
        }
        self.completed.set(true);
        true
    }

    pub fn is_satisfied(&self) -> bool {
        match self.mode {
            OrientationMode::NoVideo => true,
            OrientationMode::Video => self.completed.get(),
        }
    }
}
