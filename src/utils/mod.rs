pub mod follow_control;
pub mod time;
