use super::*;

#[test]
fn digit_widths() {
	assert_eq!(CodeType::Binary.max_digits_for_byte(), 8);
	assert_eq!(CodeType::Octal.max_digits_for_byte(), 3);
	assert_eq!(CodeType::Decimal.max_digits_for_byte(), 3);
	assert_eq!(CodeType::Hexadecimal.max_digits_for_byte(), 2);
}

#[test]
fn encode_byte_pads_to_width() {
	let mut out = String::new();
	CodeType::Hexadecimal.encode_byte(0x0a, CodeCharactersCase::Upper, &mut out);
	assert_eq!(out, "0A");

	out.clear();
	CodeType::Hexadecimal.encode_byte(0xbe, CodeCharactersCase::Lower, &mut out);
	assert_eq!(out, "be");

	out.clear();
	CodeType::Binary.encode_byte(5, CodeCharactersCase::Upper, &mut out);
	assert_eq!(out, "00000101");

	out.clear();
	CodeType::Octal.encode_byte(255, CodeCharactersCase::Upper, &mut out);
	assert_eq!(out, "377");

	out.clear();
	CodeType::Decimal.encode_byte(7, CodeCharactersCase::Upper, &mut out);
	assert_eq!(out, "007");
}

#[test]
fn digit_value_accepts_both_cases() {
	assert_eq!(CodeType::Hexadecimal.digit_value('f'), Some(15));
	assert_eq!(CodeType::Hexadecimal.digit_value('F'), Some(15));
	assert_eq!(CodeType::Hexadecimal.digit_value('g'), None);
	assert_eq!(CodeType::Octal.digit_value('8'), None);
	assert_eq!(CodeType::Binary.digit_value('1'), Some(1));
	assert_eq!(CodeType::Binary.digit_value('2'), None);
}

#[test]
fn digit_at_reads_most_significant_first() {
	assert_eq!(CodeType::Hexadecimal.digit_at(0xa5, 0), 0xa);
	assert_eq!(CodeType::Hexadecimal.digit_at(0xa5, 1), 0x5);
	assert_eq!(CodeType::Decimal.digit_at(196, 0), 1);
	assert_eq!(CodeType::Decimal.digit_at(196, 1), 9);
	assert_eq!(CodeType::Decimal.digit_at(196, 2), 6);
	assert_eq!(CodeType::Binary.digit_at(0b1000_0001, 0), 1);
	assert_eq!(CodeType::Binary.digit_at(0b1000_0001, 6), 0);
}

#[test]
fn set_digit_replaces_single_digit() {
	assert_eq!(CodeType::Hexadecimal.set_digit(0x00, 0, 0xa), 0xa0);
	assert_eq!(CodeType::Hexadecimal.set_digit(0xa0, 1, 0x7), 0xa7);
	assert_eq!(CodeType::Binary.set_digit(0, 7, 1), 1);
	assert_eq!(CodeType::Octal.set_digit(0o17, 0, 2), 0o217);
}

#[test]
fn set_digit_saturates_out_of_range_values() {
	assert_eq!(CodeType::Decimal.set_digit(0, 0, 9), 255);
	assert_eq!(CodeType::Decimal.set_digit(200, 1, 9), 255);
	assert_eq!(CodeType::Decimal.set_digit(200, 1, 4), 240);
	assert_eq!(CodeType::Octal.set_digit(0, 0, 7), 255);
}

#[test]
fn position_length_counts_digits() {
	assert_eq!(CodeType::Hexadecimal.position_length(0), 1);
	assert_eq!(CodeType::Hexadecimal.position_length(0xff), 2);
	assert_eq!(CodeType::Hexadecimal.position_length(0x100), 3);
	assert_eq!(CodeType::Decimal.position_length(999), 3);
	assert_eq!(CodeType::Decimal.position_length(1000), 4);
	assert_eq!(CodeType::Octal.position_length(8), 2);
}

#[test]
fn encode_position_zero_pads() {
	assert_eq!(CodeType::Hexadecimal.encode_position(0x1f, 8, CodeCharactersCase::Upper), "0000001F");
	assert_eq!(CodeType::Decimal.encode_position(12345, 2, CodeCharactersCase::Upper), "12345");
}
