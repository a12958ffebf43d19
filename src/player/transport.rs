use crate::ops::keyframe_ops::align_to_grid;
use crate::types::playback_state::PlaybackState;

/// Timing configuration for a playback session, fixed while the player
/// is open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimConfig {
    key_frame_count: usize,
    /// Seconds between consecutive key frames.
    key_frame_duration: f64,
}

impl AnimConfig {
    /// A negative duration is clamped to zero rather than rejected.
    pub fn new(key_frame_count: usize, key_frame_duration: f64) -> Self {
        AnimConfig {
            key_frame_count,
            key_frame_duration: key_frame_duration.max(0.0),
        }
    }

    pub fn key_frame_count(&self) -> usize {
        self.key_frame_count
    }

    pub fn key_frame_duration_ms(&self) -> f64 {
        self.key_frame_duration * 1000.0
    }

    /// Total animation length in milliseconds. The first key frame is
    /// only the initial pose and contributes no duration.
    pub fn total_time_ms(&self) -> f64 {
        self.key_frame_count.saturating_sub(1) as f64 * self.key_frame_duration_ms()
    }
}

/// Hooks the owning application supplies to follow a playback session.
#[derive(Default)]
pub struct AnimHooks {
    /// Fired once when a session opens, before any frame is processed.
    pub on_start: Option<Box<dyn FnMut()>>,
    /// Fired once when the session closes.
    pub on_stop: Option<Box<dyn FnMut()>>,
    /// Fired on every processed frame while the session is open, with
    /// the current animation time in milliseconds.
    pub on_frame: Option<Box<dyn FnMut(f64)>>,
}

/// Playback transport for key-frame animations.
///
/// The clock does not schedule itself. The host calls [`on_frame`] once
/// per display frame with a monotonic timestamp; the return value tells
/// the host whether to schedule the next frame, so closing the player
/// ends the frame chain instead of cancelling a pending callback.
///
/// [`on_frame`]: AnimTransport::on_frame
pub struct AnimTransport {
    config: AnimConfig,
    state: PlaybackState,
    /// Timestamp of the previously processed frame, only used to derive
    /// elapsed time.
    last_frame_ts: f64,
    hooks: AnimHooks,
}

impl AnimTransport {
    pub fn new(config: AnimConfig) -> Self {
        AnimTransport {
            config,
            state: PlaybackState::new(),
            last_frame_ts: 0.0,
            hooks: AnimHooks::default(),
        }
    }

    pub fn config(&self) -> AnimConfig {
        self.config
    }

    /// Swaps the timing configuration. Meant to be called before
    /// [`show`](AnimTransport::show), when the key frame set may have
    /// changed since the last session.
    pub fn set_config(&mut self, config: AnimConfig) {
        self.config = config;
    }

    pub fn hooks_mut(&mut self) -> &mut AnimHooks {
        &mut self.hooks
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn is_loop(&self) -> bool {
        self.state.is_loop
    }

    pub fn anim_time(&self) -> f64 {
        self.state.anim_time
    }

    /// Opens the player and resets playback to the beginning. Calling it
    /// while already open resets the session again.
    pub fn show(&mut self) {
        self.state = PlaybackState {
            is_open: true,
            is_playing: false,
            is_loop: false,
            anim_time: 0.0,
        };
        self.last_frame_ts = 0.0;
        log::debug!(
            "animation player opened: {} key frames, {:.0} ms total",
            self.config.key_frame_count,
            self.config.total_time_ms()
        );
        if let Some(on_start) = self.hooks.on_start.as_mut() {
            on_start();
        }
    }

    /// Closes the player and resets playback state. The frame chain ends
    /// with the next [`on_frame`](AnimTransport::on_frame) call.
    pub fn close(&mut self) {
        self.state = PlaybackState::new();
        log::debug!("animation player closed");
        if let Some(on_stop) = self.hooks.on_stop.as_mut() {
            on_stop();
        }
    }

    pub fn toggle_play_pause(&mut self) {
        self.state.is_playing = !self.state.is_playing;
    }

    /// Halts playback and rewinds to the beginning without closing the
    /// player.
    pub fn stop(&mut self) {
        self.state.is_playing = false;
        self.state.anim_time = 0.0;
    }

    pub fn toggle_loop(&mut self) {
        self.state.is_loop = !self.state.is_loop;
    }

    /// Advances to the next key frame, clamped to the end of the
    /// animation and floor-aligned to the key frame grid to absorb
    /// floating point drift from free play.
    pub fn step_to_next_key_frame(&mut self) {
        if self.is_next_disabled() {
            return;
        }
        let duration_ms = self.config.key_frame_duration_ms();
        let stepped = (self.state.anim_time + duration_ms).min(self.config.total_time_ms());
        self.state.anim_time = align_to_grid(stepped, duration_ms);
    }

    /// Steps back one key frame, clamped to zero and floor-aligned to
    /// the key frame grid.
    pub fn step_to_previous_key_frame(&mut self) {
        if self.is_previous_disabled() {
            return;
        }
        let duration_ms = self.config.key_frame_duration_ms();
        let stepped = (self.state.anim_time - duration_ms).max(0.0);
        self.state.anim_time = align_to_grid(stepped, duration_ms);
    }

    /// Processes one host frame. `now_ms` is the host's monotonic
    /// timestamp in milliseconds.
    ///
    /// Returns whether the host should schedule the next frame; once the
    /// player is closed this declines and the chain terminates.
    pub fn on_frame(&mut self, now_ms: f64) -> bool {
        if !self.state.is_open {
            return false;
        }

        let elapsed = now_ms - self.last_frame_ts;
        self.last_frame_ts = now_ms;

        if self.state.is_playing {
            let mut anim_time = self.state.anim_time + elapsed;
            // Past the end playback restarts from the beginning. The
            // loop flag does not gate this; it only drives the UI.
            if anim_time > self.config.total_time_ms() {
                anim_time = 0.0;
            }
            self.state.anim_time = anim_time;
        }

        if let Some(on_frame) = self.hooks.on_frame.as_mut() {
            on_frame(self.state.anim_time);
        }
        true
    }

    pub fn total_time_ms(&self) -> f64 {
        self.config.total_time_ms()
    }

    /// Playback progress rounded to whole percent, 0 for degenerate
    /// configurations with no duration.
    pub fn progress_percent(&self) -> u32 {
        let total = self.config.total_time_ms();
        if total <= 0.0 {
            return 0;
        }
        (100.0 * self.state.anim_time / total).round() as u32
    }

    /// Current position as zero-padded `"SSS:MMM"` seconds and
    /// milliseconds.
    pub fn formatted_time(&self) -> String {
        let total_ms = self.state.anim_time.max(0.0) as u64;
        format!("{:03}:{:03}", total_ms / 1000, total_ms % 1000)
    }

    pub fn is_previous_disabled(&self) -> bool {
        self.state.anim_time == 0.0
    }

    pub fn is_next_disabled(&self) -> bool {
        self.state.anim_time >= self.config.total_time_ms()
    }

    pub fn is_stop_disabled(&self) -> bool {
        self.state.anim_time == 0.0
    }
}
