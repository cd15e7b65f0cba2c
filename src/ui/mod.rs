pub mod messages;
pub mod panels;
pub mod screen;
