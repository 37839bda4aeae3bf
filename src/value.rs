use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use clap::ValueEnum;
use thiserror::Error;

use crate::byte_view::{AsByteView, ByteView};

#[derive(Error, Debug)]
pub enum ParseValueError {
    #[error("invalid {kind} literal {input:?}")]
    InvalidInteger {
        kind: ValueKind,
        input: String,
        source: ParseIntError,
    },
    #[error("invalid {kind} literal {input:?}")]
    InvalidFloat {
        kind: ValueKind,
        input: String,
        source: ParseFloatError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    Isize,
    Usize,
    F32,
    F64,
    Str,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::I8 => "i8",
            ValueKind::U8 => "u8",
            ValueKind::I16 => "i16",
            ValueKind::U16 => "u16",
            ValueKind::I32 => "i32",
            ValueKind::U32 => "u32",
            ValueKind::I64 => "i64",
            ValueKind::U64 => "u64",
            ValueKind::Isize => "isize",
            ValueKind::Usize => "usize",
            ValueKind::F32 => "f32",
            ValueKind::F64 => "f64",
            ValueKind::Str => "str",
        };
        f.write_str(name)
    }
}

fn owned_view<T: AsByteView>(value: T) -> ByteView<'static> {
    value.byte_view().into_owned()
}

impl ValueKind {
    /// Parses `input` as this kind and returns its storage bytes.
    pub fn parse<'a>(self, input: &'a str) -> Result<ByteView<'a>, ParseValueError> {
        let int_err = |source: ParseIntError| ParseValueError::InvalidInteger {
            kind: self,
            input: input.to_string(),
            source,
        };
        let float_err = |source: ParseFloatError| ParseValueError::InvalidFloat {
            kind: self,
            input: input.to_string(),
            source,
        };

        let view = match self {
            ValueKind::I8 => owned_view(input.parse::<i8>().map_err(int_err)?),
            ValueKind::U8 => owned_view(input.parse::<u8>().map_err(int_err)?),
            ValueKind::I16 => owned_view(input.parse::<i16>().map_err(int_err)?),
            ValueKind::U16 => owned_view(input.parse::<u16>().map_err(int_err)?),
            ValueKind::I32 => owned_view(input.parse::<i32>().map_err(int_err)?),
            ValueKind::U32 => owned_view(input.parse::<u32>().map_err(int_err)?),
            ValueKind::I64 => owned_view(input.parse::<i64>().map_err(int_err)?),
            ValueKind::U64 => owned_view(input.parse::<u64>().map_err(int_err)?),
            ValueKind::Isize => owned_view(input.parse::<isize>().map_err(int_err)?),
            ValueKind::Usize => owned_view(input.parse::<usize>().map_err(int_err)?),
            ValueKind::F32 => owned_view(input.parse::<f32>().map_err(float_err)?),
            ValueKind::F64 => owned_view(input.parse::<f64>().map_err(float_err)?),
            ValueKind::Str => input.byte_view(),
        };

        Ok(view)
    }
}
