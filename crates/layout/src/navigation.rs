//! Caret movement computation.

use hexen_primitives::{CaretPosition, MovementDirection, Section, ViewMode};

use crate::structure::Structure;


/// Computes the caret position after moving in `direction`.
///
/// `rows_per_page` is the number of fully visible rows used for page
/// movement; zero is treated as one. The result is always clamped to the
/// structure's data size. Callers compare the result with `caret` and skip
/// all further work when they are equal.
pub fn compute_movement(
	structure: &Structure,
	caret: CaretPosition,
	direction: MovementDirection,
	rows_per_page: u64,
) -> CaretPosition {
	let config = structure.config();
	let code_type = config.code_type;
	let digits = code_type.max_digits_for_byte();
	let data_size = structure.data_size();
	let bytes_per_row = u64::from(structure.bytes_per_row());
	let caret = caret.clamp(data_size, code_type);
	let position = caret.data_position;
	let in_code = caret.section == Section::CodeMatrix;

	let moved = match direction {
		MovementDirection::Left => {
			if in_code && caret.code_offset > 0 {
				CaretPosition { code_offset: caret.code_offset - 1, ..caret }
			} else if position > 0 {
				caret.with_data_position(position - 1)
			} else {
				caret
			}
		}
		MovementDirection::Right => {
			if in_code && position < data_size && caret.code_offset + 1 < digits {
				CaretPosition { code_offset: caret.code_offset + 1, ..caret }
			} else if position < data_size {
				caret.with_data_position(position + 1)
			} else {
				caret
			}
		}
		MovementDirection::Up => vertical(caret, position.saturating_sub(bytes_per_row)),
		MovementDirection::Down => vertical(caret, position.saturating_add(bytes_per_row).min(data_size)),
		MovementDirection::PageUp => {
			let distance = bytes_per_row.saturating_mul(rows_per_page.max(1));
			vertical(caret, position.saturating_sub(distance))
		}
		MovementDirection::PageDown => {
			let distance = bytes_per_row.saturating_mul(rows_per_page.max(1));
			vertical(caret, position.saturating_add(distance).min(data_size))
		}
		MovementDirection::RowStart => caret.with_data_position(structure.row_start(position)),
		MovementDirection::RowEnd => {
			let row_start = structure.row_start(position);
			// The home row past a full last row holds no bytes.
			if row_start >= data_size {
				caret.with_data_position(data_size)
			} else {
				let row_end = (row_start + bytes_per_row - 1).min(data_size - 1);
				let code_offset = if in_code { digits - 1 } else { 0 };
				CaretPosition::new(row_end, code_offset, caret.section)
			}
		}
		MovementDirection::DocStart => caret.with_data_position(0),
		MovementDirection::DocEnd => caret.with_data_position(data_size),
		MovementDirection::SwitchSection => {
			if config.view_mode == ViewMode::Dual {
				caret.with_section(caret.section.other())
			} else {
				caret
			}
		}
	};

	moved.clamp(data_size, code_type)
}

/// Moves to another row, keeping the digit unless the target has none.
fn vertical(caret: CaretPosition, data_position: u64) -> CaretPosition {
	CaretPosition { data_position, ..caret }
}
