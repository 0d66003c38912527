pub mod agent;
pub mod coords;
pub mod render;
