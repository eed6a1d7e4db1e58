mod component;
mod config;
mod frame;
mod grid;
mod interaction;
mod layout;
mod particles;
mod registry;
mod render;
mod state;
mod style;
mod types;

pub use component::SkillsConstellation;
