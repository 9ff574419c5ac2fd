pub mod resize;

pub use resize::ResizeListener;
