pub mod font;
pub mod surface;

pub use font::{FontBook, Weight};
pub use surface::{Rect, Surface};
