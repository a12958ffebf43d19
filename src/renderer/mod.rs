pub mod pitch_renderer;
