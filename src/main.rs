use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, Level};

use showbytes::demo::{show_bytes_demo, truncation_demo, twos_complement_demo};
use showbytes::utils::show_bytes;
use showbytes::{Endianness, ValueKind};

#[derive(Debug, Parser)]
#[command(name = "showbytes")]
#[command(about = "Print the in-memory bytes of values in hex and binary")]
struct Cli {
    #[arg(short, long, help = "Enable debug logging on stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Dump 12345 as several types, then a short text
    Bytes,
    /// Dump -12345i16 next to its unsigned reinterpretation and their widenings
    TwosComplement,
    /// Truncate 53191i32 to 16 bits and sign-extend it back
    Truncation,
    /// Dump a literal parsed as the given kind
    Dump {
        #[arg(long, value_enum)]
        kind: ValueKind,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Print the host byte order
    Endian,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    debug!("Host byte order: {}", Endianness::native());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    run(cli, &mut out)?;

    out.flush().context("Failed to flush stdout")?;

    Ok(())
}

fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command.unwrap_or(Command::TwosComplement) {
        Command::Bytes => {
            info!("Running byte layout demo");
            show_bytes_demo(out).context("Failed to write byte layout demo")?;
        }
        Command::TwosComplement => {
            info!("Running two's complement demo");
            twos_complement_demo(out).context("Failed to write two's complement demo")?;
        }
        Command::Truncation => {
            info!("Running truncation demo");
            truncation_demo(out).context("Failed to write truncation demo")?;
        }
        Command::Dump { kind, value } => {
            let view = kind.parse(&value)?;
            debug!("Parsed {:?} as {} ({} bytes)", value, kind, view.len());
            show_bytes(out, &view).context("Failed to write dump")?;
        }
        Command::Endian => {
            writeln!(out, "{}", Endianness::native()).context("Failed to write byte order")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut buffer = vec![];
        run(cli, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    #[test]
    fn test_default_runs_twos_complement() {
        let output = run_args(&["showbytes"]).unwrap();
        assert!(output.starts_with("x=-12345\n"));
        assert_eq!(output, run_args(&["showbytes", "twos-complement"]).unwrap());
    }

    #[test]
    fn test_subcommands_select_routines() {
        let bytes = run_args(&["showbytes", "bytes"]).unwrap();
        assert!(bytes.ends_with(
            "61 62 63 64 65 66\n01100001 01100010 01100011 01100100 01100101 01100110\n"
        ));

        let truncation = run_args(&["showbytes", "truncation"]).unwrap();
        assert!(truncation.starts_with("x=53191\n"));

        let endian = run_args(&["showbytes", "endian"]).unwrap();
        assert_eq!(endian, format!("{}\n", Endianness::native()));
    }

    #[test]
    fn test_dump_negative_literal() {
        let output = run_args(&["showbytes", "dump", "--kind", "i16", "-12345"]).unwrap();
        let expected = run_args(&["showbytes", "dump", "--kind", "u16", "53191"]).unwrap();
        assert_eq!(output, expected);
        assert_eq!(output.lines().next().unwrap().split(' ').count(), 2);
    }

    #[test]
    fn test_dump_out_of_range_fails() {
        let err = run_args(&["showbytes", "dump", "--kind", "i16", "40000"]).unwrap_err();
        assert!(err.downcast_ref::<showbytes::ParseValueError>().is_some());
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(Cli::try_parse_from(["showbytes", "dump", "--kind", "i128", "1"]).is_err());
    }
}
