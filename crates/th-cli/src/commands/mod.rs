pub mod play;
pub mod presets;
