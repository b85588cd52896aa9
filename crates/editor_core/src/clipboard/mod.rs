//! Clipboard payloads and the clipboard seam.
//!
//! A copy produces two flavors: the raw bytes under [`BINARY_MIME_TYPE`] for
//! lossless transfer between code areas, and plain text for everything else.
//! The text is either the bytes decoded through the charset, or the bytes
//! rendered as digit groups ("copy as code"). Paste prefers the binary
//! flavor and falls back to encoding the text.

use hexen_primitives::{CodeCharactersCase, CodeType};


/// Media type of the lossless binary flavor.
pub const BINARY_MIME_TYPE: &str = "application/x-hexen-binary";

/// Media type of the plain-text flavor.
pub const TEXT_MIME_TYPE: &str = "text/plain";

/// Contents offered to or read from the clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClipboardData {
	/// Raw bytes, present when the source was a code area.
	pub binary: Option<Vec<u8>>,
	/// Plain-text flavor.
	pub text: String,
}

impl ClipboardData {
	/// Creates contents carrying both flavors.
	pub fn new(binary: Vec<u8>, text: String) -> Self {
		Self {
			binary: Some(binary),
			text,
		}
	}

	/// Creates text-only contents, as another application would offer.
	pub fn text(text: impl Into<String>) -> Self {
		Self {
			binary: None,
			text: text.into(),
		}
	}

	/// Returns the media types offered, richest first.
	pub fn mime_types(&self) -> Vec<&'static str> {
		let mut types = Vec::with_capacity(2);
		if self.binary.is_some() {
			types.push(BINARY_MIME_TYPE);
		}
		types.push(TEXT_MIME_TYPE);
		types
	}

	pub fn is_empty(&self) -> bool {
		self.binary.as_ref().is_none_or(Vec::is_empty) && self.text.is_empty()
	}
}

/// Host clipboard.
///
/// Hosts bridge this to the system clipboard. A host that cannot reach a
/// clipboard returns `None` from [`Clipboard::contents`] and drops sets.
pub trait Clipboard {
	/// Returns the current contents, or `None` if nothing usable is offered.
	fn contents(&self) -> Option<ClipboardData>;

	/// Replaces the contents.
	fn set_contents(&mut self, data: ClipboardData);

	/// Returns true if a paste would find contents.
	fn has_contents(&self) -> bool {
		self.contents().is_some_and(|data| !data.is_empty())
	}
}

/// Process-local clipboard.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
	data: Option<ClipboardData>,
}

impl MemoryClipboard {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Clipboard for MemoryClipboard {
	fn contents(&self) -> Option<ClipboardData> {
		self.data.clone()
	}

	fn set_contents(&mut self, data: ClipboardData) {
		self.data = Some(data);
	}
}

/// Renders bytes as space-separated digit groups, one group per byte.
pub fn encode_code_text(bytes: &[u8], code_type: CodeType, case: CodeCharactersCase) -> String {
	let digits = code_type.max_digits_for_byte() as usize;
	let mut out = String::with_capacity(bytes.len() * (digits + 1));
	for (i, &byte) in bytes.iter().enumerate() {
		if i > 0 {
			out.push(' ');
		}
		code_type.encode_byte(byte, case, &mut out);
	}
	out
}

/// Parses digit groups back into bytes.
///
/// Groups are separated by whitespace; a run longer than one byte is split
/// into fixed-width groups. Returns `None` if any group holds an invalid
/// digit, is not a whole group, or exceeds a byte.
pub fn decode_code_text(text: &str, code_type: CodeType) -> Option<Vec<u8>> {
	let digits = code_type.max_digits_for_byte() as usize;
	let mut out = Vec::new();
	for token in text.split_whitespace() {
		let chars: Vec<char> = token.chars().collect();
		if chars.len() % digits != 0 {
			return None;
		}
		for group in chars.chunks(digits) {
			let mut value = 0u32;
			for &c in group {
				value = value * code_type.base() + u32::from(code_type.digit_value(c)?);
			}
			out.push(u8::try_from(value).ok()?);
		}
	}
	Some(out)
}
