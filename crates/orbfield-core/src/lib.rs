pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod particle;
pub mod render_loop;
pub mod surface;
pub mod theme;

pub use color::*;
pub use config::*;
pub use error::FieldError;
pub use field::AmbientParticleField;
pub use particle::*;
pub use render_loop::*;
pub use surface::*;
pub use theme::ThemeMode;
