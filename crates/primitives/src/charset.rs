//! Byte ↔ character mapping for the preview section and text clipboard.

use serde::Deserialize;
use smallvec::SmallVec;

/// Placeholder shown for bytes without a printable mapping.
pub const UNPRINTABLE: char = '.';

/// Byte sequence produced by encoding a single character.
pub type EncodedChar = SmallVec<[u8; 4]>;

/// Character set used to decode preview cells and encode typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum Charset {
	#[serde(rename = "ascii")]
	Ascii,
	#[default]
	#[serde(rename = "iso-8859-1")]
	Iso8859_1,
	#[serde(rename = "utf-8")]
	Utf8,
}

impl Charset {
	/// Returns the character shown in the preview cell of `byte`.
	///
	/// Control characters and bytes outside the charset render as [`UNPRINTABLE`].
	/// UTF-8 previews one cell per byte, so only ASCII bytes decode.
	pub fn preview_char(self, byte: u8) -> char {
		let c = match self {
			Self::Ascii | Self::Utf8 if byte.is_ascii() => Some(char::from(byte)),
			Self::Iso8859_1 => Some(char::from(byte)),
			Self::Ascii | Self::Utf8 => None,
		};
		c.filter(|c| !c.is_control()).unwrap_or(UNPRINTABLE)
	}

	/// Decodes `bytes` into text for the plain-text clipboard flavor.
	pub fn decode(self, bytes: &[u8]) -> String {
		match self {
			Self::Ascii => bytes
				.iter()
				.map(|&b| if b.is_ascii() { char::from(b) } else { char::REPLACEMENT_CHARACTER })
				.collect(),
			Self::Iso8859_1 => bytes.iter().map(|&b| char::from(b)).collect(),
			Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
		}
	}

	/// Encodes a single character, or `None` if the charset cannot express it.
	pub fn encode_char(self, c: char) -> Option<EncodedChar> {
		match self {
			Self::Ascii => c.is_ascii().then(|| SmallVec::from_slice(&[c as u8])),
			Self::Iso8859_1 => u8::try_from(u32::from(c)).ok().map(|b| SmallVec::from_slice(&[b])),
			Self::Utf8 => {
				let mut buf = [0u8; 4];
				Some(SmallVec::from_slice(c.encode_utf8(&mut buf).as_bytes()))
			}
		}
	}

	/// Encodes text, replacing characters the charset cannot express with `?`.
	pub fn encode(self, text: &str) -> Vec<u8> {
		let mut out = Vec::with_capacity(text.len());
		for c in text.chars() {
			match self.encode_char(c) {
				Some(bytes) => out.extend_from_slice(&bytes),
				None => out.push(b'?'),
			}
		}
		out
	}
}
