pub mod byte_view;
pub mod demo;
pub mod show;
pub mod utils;
pub mod value;

pub use byte_view::{AsByteView, ByteView, Endianness};
pub use value::{ParseValueError, ValueKind};
