pub mod keyframe_ops;
