pub mod coord;
pub mod vec2;
