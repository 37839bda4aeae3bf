use std::io::{Result, Write};

use crate::byte_view::AsByteView;
use crate::utils::show_bytes;

pub fn show_value<W: Write, T: AsByteView + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    show_bytes(out, &value.byte_view())
}

pub fn show_int32<W: Write>(out: &mut W, value: i32) -> Result<()> {
    show_value(out, &value)
}

pub fn show_uint<W: Write>(out: &mut W, value: u32) -> Result<()> {
    show_value(out, &value)
}

pub fn show_int<W: Write>(out: &mut W, value: isize) -> Result<()> {
    show_value(out, &value)
}

pub fn show_short<W: Write>(out: &mut W, value: i16) -> Result<()> {
    show_value(out, &value)
}

pub fn show_ushort<W: Write>(out: &mut W, value: u16) -> Result<()> {
    show_value(out, &value)
}

pub fn show_float32<W: Write>(out: &mut W, value: f32) -> Result<()> {
    show_value(out, &value)
}

/// Dumps the address of `value`, not its contents.
pub fn show_pointer<W: Write, T>(out: &mut W, value: &T) -> Result<()> {
    let ptr: *const T = value;
    show_value(out, &ptr)
}

/// Dumps the UTF-8 content bytes, one pair of tokens per byte.
pub fn show_str<W: Write>(out: &mut W, value: &str) -> Result<()> {
    show_value(out, value)
}
