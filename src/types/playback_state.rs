/// Transport-owned playback state. Mutated only through the animation
/// transport's control methods; the UI reads it to pick icons and
/// disabled states.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub is_open: bool,
    pub is_playing: bool,
    pub is_loop: bool,
    /// Current playback position in milliseconds.
    pub anim_time: f64,
}

impl PlaybackState {
    pub fn new() -> Self {
        PlaybackState {
            is_open: false,
            is_playing: false,
            is_loop: false,
            anim_time: 0.0,
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}
