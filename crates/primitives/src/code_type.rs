//! Numeric code types for the code matrix and the address column.

use serde::Deserialize;

#[cfg(test)]
mod tests;

/// Numeric base used to render bytes in the code matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeType {
	/// Base 2, eight digits per byte.
	Binary,
	/// Base 8, three digits per byte.
	Octal,
	/// Base 10, three digits per byte.
	Decimal,
	/// Base 16, two digits per byte.
	#[default]
	Hexadecimal,
}

/// Letter case used for digits above 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeCharactersCase {
	Lower,
	#[default]
	Upper,
}

impl CodeType {
	/// Returns the numeric base.
	pub const fn base(self) -> u32 {
		match self {
			Self::Binary => 2,
			Self::Octal => 8,
			Self::Decimal => 10,
			Self::Hexadecimal => 16,
		}
	}

	/// Returns the number of digits used to render a single byte.
	pub const fn max_digits_for_byte(self) -> u32 {
		match self {
			Self::Binary => 8,
			Self::Octal => 3,
			Self::Decimal => 3,
			Self::Hexadecimal => 2,
		}
	}

	/// Returns the value of `c` as a digit of this base, accepting either case.
	pub fn digit_value(self, c: char) -> Option<u8> {
		c.to_digit(self.base()).map(|d| d as u8)
	}

	/// Returns the digit character for `value`, which must be below the base.
	pub fn digit_char(self, value: u8, case: CodeCharactersCase) -> char {
		debug_assert!(u32::from(value) < self.base());
		let c = char::from_digit(u32::from(value), self.base()).unwrap_or('0');
		match case {
			CodeCharactersCase::Lower => c,
			CodeCharactersCase::Upper => c.to_ascii_uppercase(),
		}
	}

	/// Returns the digit of `byte` at `code_offset`, counted from the most significant digit.
	pub fn digit_at(self, byte: u8, code_offset: u32) -> u8 {
		let weight = self.digit_weight(code_offset);
		((u32::from(byte) / weight) % self.base()) as u8
	}

	/// Replaces the digit of `byte` at `code_offset`.
	///
	/// Decimal and octal representations can express values above 255; those
	/// saturate to `u8::MAX`.
	pub fn set_digit(self, byte: u8, code_offset: u32, digit: u8) -> u8 {
		debug_assert!(u32::from(digit) < self.base());
		let weight = self.digit_weight(code_offset);
		let current = u32::from(self.digit_at(byte, code_offset));
		let value = u32::from(byte) - current * weight + u32::from(digit) * weight;
		value.min(u32::from(u8::MAX)) as u8
	}

	/// Appends the fixed-width digits of `byte` to `out`.
	pub fn encode_byte(self, byte: u8, case: CodeCharactersCase, out: &mut String) {
		for offset in 0..self.max_digits_for_byte() {
			out.push(self.digit_char(self.digit_at(byte, offset), case));
		}
	}

	/// Returns the number of digits needed to print `value` in this base.
	///
	/// Zero still takes one digit.
	pub fn position_length(self, value: u64) -> u32 {
		let base = u64::from(self.base());
		let mut length = 1;
		let mut rest = value / base;
		while rest > 0 {
			length += 1;
			rest /= base;
		}
		length
	}

	/// Renders `value` zero-padded to `length` digits.
	pub fn encode_position(self, value: u64, length: u32, case: CodeCharactersCase) -> String {
		let base = u64::from(self.base());
		let mut digits = Vec::with_capacity(length as usize);
		let mut rest = value;
		for _ in 0..length.max(self.position_length(value)) {
			digits.push(self.digit_char((rest % base) as u8, case));
			rest /= base;
		}
		digits.iter().rev().collect()
	}

	fn digit_weight(self, code_offset: u32) -> u32 {
		debug_assert!(code_offset < self.max_digits_for_byte());
		let exponent = self.max_digits_for_byte() - 1 - code_offset;
		self.base().pow(exponent)
	}
}
