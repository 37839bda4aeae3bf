use std::io::{Result, Write};

use tracing::debug;

use crate::show::{
    show_float32, show_int, show_int32, show_pointer, show_short, show_str, show_uint,
    show_ushort,
};

const SAMPLE_VALUE: i32 = 12345;
const SAMPLE_TEXT: &str = "abcdef";
const SAMPLE_SHORT: i16 = -12345;
const SAMPLE_WIDE: i32 = 53191;

/// Dumps one sample integer under several interpretations, then a short text.
pub fn show_bytes_demo<W: Write>(out: &mut W) -> Result<()> {
    let ival = SAMPLE_VALUE;
    let lval = ival as isize;
    let fval = ival as f32;

    debug!("Dumping {} as i32, isize, f32 and pointer", ival);

    show_int32(out, ival)?;
    show_int(out, lval)?;
    show_float32(out, fval)?;
    show_pointer(out, &lval)?;
    writeln!(out)?;

    debug!("Dumping text {:?}", SAMPLE_TEXT);
    show_str(out, SAMPLE_TEXT)?;

    Ok(())
}

/// A negative 16-bit value and its unsigned reinterpretation share the same bytes.
/// Widening then sign-extends the signed one and zero-extends the unsigned one.
pub fn twos_complement_demo<W: Write>(out: &mut W) -> Result<()> {
    let x = SAMPLE_SHORT;
    let mx = x as u16;
    let ix = x as i32;
    let ux = mx as u32;

    writeln!(out, "x={}", x)?;
    show_short(out, x)?;
    writeln!(out, "mx={}", mx)?;
    show_ushort(out, mx)?;
    writeln!(out, "ix={}", ix)?;
    show_int32(out, ix)?;
    writeln!(out, "ux={}", ux)?;
    show_uint(out, ux)?;

    Ok(())
}

/// Truncates a 32-bit value to 16 bits and sign-extends it back.
pub fn truncation_demo<W: Write>(out: &mut W) -> Result<()> {
    let x = SAMPLE_WIDE;
    let sx = x as i16;
    let y = sx as i32;

    debug!("Truncating {} to i16 gives {}", x, sx);

    writeln!(out, "x={}", x)?;
    show_int32(out, x)?;
    writeln!(out, "sx={}", sx)?;
    show_short(out, sx)?;
    writeln!(out, "y={}", y)?;
    show_int32(out, y)?;

    Ok(())
}
