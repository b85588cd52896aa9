//! Invertible edit commands.
//!
//! An [`Operation`] is a primitive data change that, when executed, returns
//! its exact inverse. An [`EditCommand`] wraps one operation with the caret
//! and selection on either side of it and walks the lifecycle
//! created → executed ⇄ reverted. Undo and redo only ever execute operations;
//! the inverse is recomputed on every execution so no stale snapshot survives.

use std::mem;

use hexen_primitives::{DataError, EditableByteStore};
use tracing::{trace, warn};

use crate::undo::ViewSnapshot;

#[cfg(test)]
mod tests;

/// Primitive data change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
	/// Inserts `data` before `position`.
	Insert { position: u64, code_offset: u32, data: Vec<u8> },
	/// Removes `length` bytes starting at `position`.
	Remove { position: u64, code_offset: u32, length: u64 },
	/// Overwrites existing bytes starting at `position`.
	Modify { position: u64, data: Vec<u8> },
	/// Ordered sequence; executes atomically.
	Compound(Vec<Operation>),
}

impl Operation {
	pub fn insert(position: u64, data: Vec<u8>) -> Self {
		Self::Insert {
			position,
			code_offset: 0,
			data,
		}
	}

	pub fn remove(position: u64, length: u64) -> Self {
		Self::Remove {
			position,
			code_offset: 0,
			length,
		}
	}

	pub fn modify(position: u64, data: Vec<u8>) -> Self {
		Self::Modify { position, data }
	}

	/// Builds a compound, collapsing a single child into itself.
	pub fn compound(mut operations: Vec<Operation>) -> Self {
		match operations.len() {
			1 => operations.remove(0),
			_ => Self::Compound(operations),
		}
	}

	/// Returns true if executing has no effect on the data.
	pub fn is_noop(&self) -> bool {
		match self {
			Self::Insert { data, .. } | Self::Modify { data, .. } => data.is_empty(),
			Self::Remove { length, .. } => *length == 0,
			Self::Compound(operations) => operations.iter().all(Self::is_noop),
		}
	}

	/// Applies the operation and returns its inverse.
	///
	/// On error the store is left as it was: a failing compound rolls back the
	/// children it already applied.
	pub fn execute(&self, store: &mut dyn EditableByteStore) -> Result<Operation, DataError> {
		match self {
			Self::Insert {
				position,
				code_offset,
				data,
			} => {
				store.insert(*position, data)?;
				Ok(Self::Remove {
					position: *position,
					code_offset: *code_offset,
					length: data.len() as u64,
				})
			}
			Self::Remove {
				position,
				code_offset,
				length,
			} => {
				let removed = store.read_vec(*position, *length)?;
				store.remove(*position, *length)?;
				Ok(Self::Insert {
					position: *position,
					code_offset: *code_offset,
					data: removed,
				})
			}
			Self::Modify { position, data } => {
				let previous = store.read_vec(*position, data.len() as u64)?;
				store.replace(*position, data)?;
				Ok(Self::Modify {
					position: *position,
					data: previous,
				})
			}
			Self::Compound(operations) => {
				let mut inverses = Vec::with_capacity(operations.len());
				for operation in operations {
					match operation.execute(store) {
						Ok(inverse) => inverses.insert(0, inverse),
						Err(err) => {
							for inverse in &inverses {
								if let Err(rollback) = inverse.execute(store) {
									warn!(%rollback, "compound.rollback_failed");
								}
							}
							return Err(err);
						}
					}
				}
				Ok(Self::Compound(inverses))
			}
		}
	}
}

/// Semantic kind of a command, used for coalescing and captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
	/// Digit typed in the code matrix.
	EditCode,
	/// Character typed in the preview.
	EditChar,
	/// Single byte removed by delete or backspace.
	Delete,
	DeleteSelection,
	Paste,
	/// Selection removed after copying it.
	Cut,
}

impl CommandKind {
	/// Returns true if consecutive commands of this kind may fold into one undo entry.
	pub const fn is_appendable(self) -> bool {
		matches!(self, Self::EditCode | Self::EditChar)
	}

	/// Returns a short caption for undo menus.
	pub const fn caption(self) -> &'static str {
		match self {
			Self::EditCode => "Edit code",
			Self::EditChar => "Edit text",
			Self::Delete => "Delete",
			Self::DeleteSelection => "Delete selection",
			Self::Paste => "Paste",
			Self::Cut => "Cut",
		}
	}
}

/// Lifecycle phase of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandPhase {
	Created,
	Executed,
	Reverted,
}

/// An undoable edit: an operation plus the view state around it.
#[derive(Debug, Clone)]
pub struct EditCommand {
	kind: CommandKind,
	phase: CommandPhase,
	/// Applied on execute and redo.
	forward: Operation,
	/// Applied on undo; present only while executed.
	inverse: Option<Operation>,
	before: ViewSnapshot,
	after: ViewSnapshot,
}

impl EditCommand {
	pub fn new(kind: CommandKind, operation: Operation, before: ViewSnapshot, after: ViewSnapshot) -> Self {
		Self {
			kind,
			phase: CommandPhase::Created,
			forward: operation,
			inverse: None,
			before,
			after,
		}
	}

	pub fn kind(&self) -> CommandKind {
		self.kind
	}

	pub fn phase(&self) -> CommandPhase {
		self.phase
	}

	/// Returns the operation applied by execute and redo.
	pub fn operation(&self) -> &Operation {
		&self.forward
	}

	/// Returns the view state to restore on undo.
	pub fn before(&self) -> ViewSnapshot {
		self.before
	}

	/// Returns the view state to restore on redo.
	pub fn after(&self) -> ViewSnapshot {
		self.after
	}

	/// Applies the command for the first time.
	///
	/// # Panics
	///
	/// Panics unless the command is freshly created.
	pub fn execute(&mut self, store: &mut dyn EditableByteStore) -> Result<(), DataError> {
		self.expect_phase(CommandPhase::Created, "execute");
		self.apply_forward(store)
	}

	/// Reverts an executed command.
	///
	/// # Panics
	///
	/// Panics unless the command is executed.
	pub fn undo(&mut self, store: &mut dyn EditableByteStore) -> Result<(), DataError> {
		self.expect_phase(CommandPhase::Executed, "undo");
		let Some(inverse) = self.inverse.take() else {
			unreachable!("executed command without inverse");
		};
		match inverse.execute(store) {
			Ok(forward) => {
				self.forward = forward;
				self.phase = CommandPhase::Reverted;
				trace!(kind = ?self.kind, "command.undo");
				Ok(())
			}
			Err(err) => {
				self.inverse = Some(inverse);
				Err(err)
			}
		}
	}

	/// Re-applies a reverted command.
	///
	/// # Panics
	///
	/// Panics unless the command is reverted.
	pub fn redo(&mut self, store: &mut dyn EditableByteStore) -> Result<(), DataError> {
		self.expect_phase(CommandPhase::Reverted, "redo");
		self.apply_forward(store)
	}

	fn apply_forward(&mut self, store: &mut dyn EditableByteStore) -> Result<(), DataError> {
		let inverse = self.forward.execute(store)?;
		self.inverse = Some(inverse);
		self.phase = CommandPhase::Executed;
		trace!(kind = ?self.kind, "command.apply");
		Ok(())
	}

	fn expect_phase(&self, expected: CommandPhase, action: &str) {
		if self.phase != expected {
			panic!("cannot {action} a command in phase {:?}", self.phase);
		}
	}

	/// Folds an executed `next` command into this one.
	///
	/// Both commands must be executed and of the same appendable kind. The
	/// operations merge into a single primitive when they are contiguous and
	/// otherwise become a compound. On refusal `next` is handed back untouched.
	pub fn try_append(&mut self, next: EditCommand) -> Result<(), EditCommand> {
		if self.phase != CommandPhase::Executed
			|| next.phase != CommandPhase::Executed
			|| self.kind != next.kind
			|| !self.kind.is_appendable()
		{
			return Err(next);
		}
		let (Some(inverse), Some(next_inverse)) = (self.inverse.as_mut(), next.inverse) else {
			unreachable!("executed command without inverse");
		};

		append_operation(&mut self.forward, inverse, next.forward, next_inverse);
		self.after = next.after;
		Ok(())
	}
}

/// Appends an executed pair to another executed pair.
fn append_operation(forward: &mut Operation, inverse: &mut Operation, next: Operation, next_inverse: Operation) {
	let Err((next, next_inverse)) = merge_primitive(forward, inverse, next, next_inverse) else {
		return;
	};

	if let (Operation::Compound(forwards), Operation::Compound(inverses)) = (&mut *forward, &mut *inverse) {
		// The last forward child pairs with the first inverse child.
		let (next, next_inverse) = match (forwards.last_mut(), inverses.first_mut()) {
			(Some(last), Some(first)) => match merge_primitive(last, first, next, next_inverse) {
				Ok(()) => return,
				Err(pair) => pair,
			},
			_ => (next, next_inverse),
		};
		forwards.push(next);
		inverses.insert(0, next_inverse);
		return;
	}

	let previous = mem::replace(forward, Operation::Compound(Vec::new()));
	let previous_inverse = mem::replace(inverse, Operation::Compound(Vec::new()));
	*forward = Operation::Compound(vec![previous, next]);
	*inverse = Operation::Compound(vec![next_inverse, previous_inverse]);
}

/// Merges contiguous primitives in place, or hands the pair back.
fn merge_primitive(
	forward: &mut Operation,
	inverse: &mut Operation,
	next: Operation,
	next_inverse: Operation,
) -> Result<(), (Operation, Operation)> {
	match (forward, inverse, next, next_inverse) {
		// Insert followed by an insert inside or right after it.
		(
			Operation::Insert { position, data, .. },
			Operation::Remove { length, .. },
			Operation::Insert {
				position: at,
				data: inserted,
				..
			},
			_,
		) if at >= *position && at - *position <= data.len() as u64 => {
			let index = (at - *position) as usize;
			*length += inserted.len() as u64;
			data.splice(index..index, inserted);
			Ok(())
		}
		// Modification of bytes this insert created.
		(
			Operation::Insert { position, data, .. },
			Operation::Remove { .. },
			Operation::Modify {
				position: at,
				data: modified,
			},
			_,
		) if at >= *position && at - *position + modified.len() as u64 <= data.len() as u64 => {
			let index = (at - *position) as usize;
			data[index..index + modified.len()].copy_from_slice(&modified);
			Ok(())
		}
		// Modification overlapping or extending a previous modification.
		(
			Operation::Modify { position, data },
			Operation::Modify { data: previous, .. },
			Operation::Modify {
				position: at,
				data: modified,
			},
			Operation::Modify {
				data: modified_previous,
				..
			},
		) if at >= *position && at - *position <= data.len() as u64 => {
			let start = (at - *position) as usize;
			for (i, (&byte, &old)) in modified.iter().zip(&modified_previous).enumerate() {
				let index = start + i;
				if index < data.len() {
					data[index] = byte;
				} else {
					data.push(byte);
					previous.push(old);
				}
			}
			Ok(())
		}
		(_, _, next, next_inverse) => Err((next, next_inverse)),
	}
}
