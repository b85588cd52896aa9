//! Byte storage contract.
//!
//! The editor never owns a particular storage layout. It reads through
//! [`ByteStore`] and mutates through [`EditableByteStore`], which a store
//! exposes via [`ByteStore::as_editable`] only when it supports modification.
//! [`ByteBuffer`] is the in-memory implementation.

use thiserror::Error;

#[cfg(test)]
mod tests;

/// Errors raised by byte stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
	/// A position or range exceeded the data size.
	#[error("position {position} out of bounds for data of size {size}")]
	OutOfBounds {
		/// The offending position (or range end).
		position: u64,
		/// Data size at the time of access.
		size: u64,
	},
	/// The store does not support modification.
	#[error("data is not editable")]
	ReadOnly,
}

/// Result type for byte store operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Read access to an ordered sequence of bytes.
pub trait ByteStore {
	/// Returns the number of bytes.
	fn size(&self) -> u64;

	/// Returns the byte at `position`.
	fn byte(&self, position: u64) -> Result<u8>;

	/// Copies `out.len()` bytes starting at `position` into `out`.
	fn copy_range(&self, position: u64, out: &mut [u8]) -> Result<()> {
		check_range(position, out.len() as u64, self.size())?;
		for (i, slot) in out.iter_mut().enumerate() {
			*slot = self.byte(position + i as u64)?;
		}
		Ok(())
	}

	/// Returns the editable view of this store, if it supports modification.
	fn as_editable(&mut self) -> Option<&mut dyn EditableByteStore> {
		None
	}

	/// Returns true if the store holds no bytes.
	fn is_empty(&self) -> bool {
		self.size() == 0
	}

	/// Copies `length` bytes starting at `position` into a new vector.
	fn read_vec(&self, position: u64, length: u64) -> Result<Vec<u8>> {
		check_range(position, length, self.size())?;
		let mut out = vec![0; length as usize];
		self.copy_range(position, &mut out)?;
		Ok(out)
	}
}

/// Mutating extension of [`ByteStore`].
pub trait EditableByteStore: ByteStore {
	/// Inserts `bytes` before `position`; `position` may equal the size.
	fn insert(&mut self, position: u64, bytes: &[u8]) -> Result<()>;

	/// Removes `length` bytes starting at `position`.
	fn remove(&mut self, position: u64, length: u64) -> Result<()>;

	/// Overwrites existing bytes starting at `position`.
	fn replace(&mut self, position: u64, bytes: &[u8]) -> Result<()>;

	/// Overwrites a single existing byte.
	fn set_byte(&mut self, position: u64, value: u8) -> Result<()>;

	/// Zeroes `length` existing bytes starting at `position`.
	fn fill(&mut self, position: u64, length: u64) -> Result<()>;
}

/// Checks that `[position, position + length)` lies within `size`.
pub fn check_range(position: u64, length: u64, size: u64) -> Result<()> {
	match position.checked_add(length) {
		Some(end) if end <= size => Ok(()),
		Some(end) => Err(DataError::OutOfBounds { position: end, size }),
		None => Err(DataError::OutOfBounds { position, size }),
	}
}

impl<T: ByteStore + ?Sized> ByteStore for &mut T {
	fn size(&self) -> u64 {
		(**self).size()
	}

	fn byte(&self, position: u64) -> Result<u8> {
		(**self).byte(position)
	}

	fn copy_range(&self, position: u64, out: &mut [u8]) -> Result<()> {
		(**self).copy_range(position, out)
	}

	fn as_editable(&mut self) -> Option<&mut dyn EditableByteStore> {
		(**self).as_editable()
	}
}

impl<T: ByteStore + ?Sized> ByteStore for Box<T> {
	fn size(&self) -> u64 {
		(**self).size()
	}

	fn byte(&self, position: u64) -> Result<u8> {
		(**self).byte(position)
	}

	fn copy_range(&self, position: u64, out: &mut [u8]) -> Result<()> {
		(**self).copy_range(position, out)
	}

	fn as_editable(&mut self) -> Option<&mut dyn EditableByteStore> {
		(**self).as_editable()
	}
}

/// In-memory byte store backed by a `Vec<u8>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
	data: Vec<u8>,
	read_only: bool,
}

impl ByteBuffer {
	/// Creates an empty, editable buffer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a buffer that refuses modification.
	pub fn read_only(data: impl Into<Vec<u8>>) -> Self {
		Self {
			data: data.into(),
			read_only: true,
		}
	}

	/// Returns the contents as a slice.
	pub fn as_slice(&self) -> &[u8] {
		&self.data
	}

	/// Consumes the buffer, returning its contents.
	pub fn into_inner(self) -> Vec<u8> {
		self.data
	}

	fn index(&self, position: u64) -> Result<usize> {
		if position < self.size() {
			Ok(position as usize)
		} else {
			Err(DataError::OutOfBounds {
				position,
				size: self.size(),
			})
		}
	}
}

impl From<Vec<u8>> for ByteBuffer {
	fn from(data: Vec<u8>) -> Self {
		Self { data, read_only: false }
	}
}

impl From<&[u8]> for ByteBuffer {
	fn from(data: &[u8]) -> Self {
		Self::from(data.to_vec())
	}
}

impl ByteStore for ByteBuffer {
	fn size(&self) -> u64 {
		self.data.len() as u64
	}

	fn byte(&self, position: u64) -> Result<u8> {
		self.index(position).map(|i| self.data[i])
	}

	fn copy_range(&self, position: u64, out: &mut [u8]) -> Result<()> {
		check_range(position, out.len() as u64, self.size())?;
		let start = position as usize;
		out.copy_from_slice(&self.data[start..start + out.len()]);
		Ok(())
	}

	fn as_editable(&mut self) -> Option<&mut dyn EditableByteStore> {
		if self.read_only { None } else { Some(self) }
	}
}

impl EditableByteStore for ByteBuffer {
	fn insert(&mut self, position: u64, bytes: &[u8]) -> Result<()> {
		check_range(position, 0, self.size())?;
		let at = position as usize;
		self.data.splice(at..at, bytes.iter().copied());
		Ok(())
	}

	fn remove(&mut self, position: u64, length: u64) -> Result<()> {
		check_range(position, length, self.size())?;
		let start = position as usize;
		self.data.drain(start..start + length as usize);
		Ok(())
	}

	fn replace(&mut self, position: u64, bytes: &[u8]) -> Result<()> {
		check_range(position, bytes.len() as u64, self.size())?;
		let start = position as usize;
		self.data[start..start + bytes.len()].copy_from_slice(bytes);
		Ok(())
	}

	fn set_byte(&mut self, position: u64, value: u8) -> Result<()> {
		let i = self.index(position)?;
		self.data[i] = value;
		Ok(())
	}

	fn fill(&mut self, position: u64, length: u64) -> Result<()> {
		check_range(position, length, self.size())?;
		let start = position as usize;
		self.data[start..start + length as usize].fill(0);
		Ok(())
	}
}
