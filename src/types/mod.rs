pub mod diagram;
pub mod element;
pub mod keyframe;
pub mod playback_state;
