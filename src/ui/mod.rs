pub mod anim_player;
pub mod app;
pub mod palette;
pub mod pitch_widget;
