pub mod hsv;
pub mod policy;

pub use hsv::{hsv_to_rgb, rgb_to_hex};
pub use policy::display_color;
