mod hexdump;

pub use hexdump::{binary_line, hex_line, show_bytes};
