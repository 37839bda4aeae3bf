use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

/// Storage bytes of a value, lowest address first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteView<'a> {
    bytes: Cow<'a, [u8]>,
}

impl<'a> ByteView<'a> {
    pub fn borrowed(bytes: &'a [u8]) -> Self {
        Self {
            bytes: Cow::Borrowed(bytes),
        }
    }

    pub fn owned(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Cow::Owned(bytes),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_owned(self) -> ByteView<'static> {
        ByteView {
            bytes: Cow::Owned(self.bytes.into_owned()),
        }
    }
}

impl Deref for ByteView<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

pub trait AsByteView {
    fn byte_view(&self) -> ByteView<'_>;
}

macro_rules! impl_native_view {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsByteView for $ty {
                fn byte_view(&self) -> ByteView<'_> {
                    ByteView::owned(self.to_ne_bytes().to_vec())
                }
            }
        )*
    };
}

impl_native_view!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize, f32, f64);

impl AsByteView for str {
    fn byte_view(&self) -> ByteView<'_> {
        ByteView::borrowed(self.as_bytes())
    }
}

impl AsByteView for String {
    fn byte_view(&self) -> ByteView<'_> {
        self.as_str().byte_view()
    }
}

impl AsByteView for [u8] {
    fn byte_view(&self) -> ByteView<'_> {
        ByteView::borrowed(self)
    }
}

// The address itself, not the pointee.
impl<T> AsByteView for *const T {
    fn byte_view(&self) -> ByteView<'_> {
        ByteView::owned((*self as usize).to_ne_bytes().to_vec())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    pub fn native() -> Self {
        if u16::from_ne_bytes([0x01, 0x00]) == 1 {
            Self::Little
        } else {
            Self::Big
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Little => write!(f, "little-endian"),
            Endianness::Big => write!(f, "big-endian"),
        }
    }
}
