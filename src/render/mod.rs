pub mod particles;
pub mod backdrop;
pub mod transition;
