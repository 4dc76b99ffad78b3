pub mod pointer;
pub mod resize;

pub use pointer::wire_open_button;
pub use resize::wire_window_resize;
