//! Byte-to-text decoding that runs before tokenization.

use std::borrow::Cow;
use std::fmt;

use crate::{Error, Result};

/// Text encodings accepted by [`decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Ascii,
    Latin1,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
            Self::Ascii => "ASCII",
            Self::Latin1 => "ISO-8859-1",
        })
    }
}

/// Decode `data` as `encoding`.
///
/// Borrows when the bytes already are valid UTF-8 (`Utf8`, `Ascii`).
/// A byte-order mark is kept as a regular character.
///
/// Fails with [`Error::EmptyInput`] on an empty buffer and with
/// [`Error::DecodeFailure`] pointing at the first undecodable byte.
pub fn decode(data: &[u8], encoding: Encoding) -> Result<Cow<'_, str>> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }

    match encoding {
        Encoding::Utf8 => decode_utf8(data, encoding),
        Encoding::Ascii => match data.iter().position(|byte| !byte.is_ascii()) {
            Some(offset) => Err(Error::DecodeFailure { encoding, offset }),
            None => decode_utf8(data, encoding),
        },
        Encoding::Latin1 => Ok(Cow::Owned(data.iter().copied().map(char::from).collect())),
        Encoding::Utf16Le | Encoding::Utf16Be => decode_utf16(data, encoding).map(Cow::Owned),
    }
}

fn decode_utf8(data: &[u8], encoding: Encoding) -> Result<Cow<'_, str>> {
    std::str::from_utf8(data)
        .map(Cow::Borrowed)
        .map_err(|err| Error::DecodeFailure {
            encoding,
            offset: err.valid_up_to(),
        })
}

fn decode_utf16(data: &[u8], encoding: Encoding) -> Result<String> {
    let units = data.chunks_exact(2).map(|pair| {
        let pair = [pair[0], pair[1]];
        match encoding {
            Encoding::Utf16Be => u16::from_be_bytes(pair),
            _ => u16::from_le_bytes(pair),
        }
    });

    let mut text = String::with_capacity(data.len() / 2);
    let mut offset = 0;
    for unit in char::decode_utf16(units) {
        let Ok(unit) = unit else {
            return Err(Error::DecodeFailure { encoding, offset });
        };
        text.push(unit);
        offset += unit.len_utf16() * 2;
    }

    // A dangling odd byte cannot start a code unit.
    if data.len() % 2 != 0 {
        return Err(Error::DecodeFailure {
            encoding,
            offset: data.len() - 1,
        });
    }

    Ok(text)
}
