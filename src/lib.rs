pub mod config;
pub mod content;
pub mod panel;
pub mod contact;
pub mod net;
pub mod render;
