use std::io::{Result, Write};

/// Two lowercase hex digits per byte, space-separated.
pub fn hex_line(data: &[u8]) -> String {
    data.iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Eight zero-padded binary digits per byte, space-separated.
pub fn binary_line(data: &[u8]) -> String {
    data.iter()
        .map(|byte| format!("{:08b}", byte))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prints `data` in storage order: a hex line, then a binary line
/// with the same bytes directly beneath.
pub fn show_bytes<W: Write>(out: &mut W, data: &[u8]) -> Result<()> {
    writeln!(out, "{}", hex_line(data))?;
    writeln!(out, "{}", binary_line(data))?;
    Ok(())
}
