// src/ui/mod.rs
pub mod minimap;

pub use minimap::render as render_minimap;
