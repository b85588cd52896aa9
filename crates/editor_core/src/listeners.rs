//! Change listeners.
//!
//! Hosts subscribe to four kinds of notifications. A single facade operation
//! may touch several pieces of state; their notifications are batched into a
//! [`Changes`] set and delivered after the state is consistent, always in the
//! order data, caret, selection, scroll.

use hexen_primitives::{CaretPosition, ScrollPosition, SelectionRange};

bitflags::bitflags! {
	/// Pieces of state touched by an operation.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct Changes: u8 {
		const DATA = 1 << 0;
		const CARET = 1 << 1;
		const SELECTION = 1 << 2;
		const SCROLL = 1 << 3;
	}
}

/// Handle returned on registration, used to remove the listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type DataListener = Box<dyn FnMut()>;
type CaretListener = Box<dyn FnMut(&CaretPosition)>;
type SelectionListener = Box<dyn FnMut(&SelectionRange)>;
type ScrollListener = Box<dyn FnMut(&ScrollPosition)>;

/// Ordered listener registry.
///
/// Within each kind, listeners run in registration order.
#[derive(Default)]
pub struct Listeners {
	next_id: u64,
	data_changed: Vec<(ListenerId, DataListener)>,
	caret_moved: Vec<(ListenerId, CaretListener)>,
	selection_changed: Vec<(ListenerId, SelectionListener)>,
	scrolled: Vec<(ListenerId, ScrollListener)>,
}

impl std::fmt::Debug for Listeners {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Listeners")
			.field("data_changed", &self.data_changed.len())
			.field("caret_moved", &self.caret_moved.len())
			.field("selection_changed", &self.selection_changed.len())
			.field("scrolled", &self.scrolled.len())
			.finish()
	}
}

impl Listeners {
	pub fn new() -> Self {
		Self::default()
	}

	fn next_id(&mut self) -> ListenerId {
		let id = ListenerId(self.next_id);
		self.next_id += 1;
		id
	}

	pub fn on_data_changed(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
		let id = self.next_id();
		self.data_changed.push((id, Box::new(listener)));
		id
	}

	pub fn on_caret_moved(&mut self, listener: impl FnMut(&CaretPosition) + 'static) -> ListenerId {
		let id = self.next_id();
		self.caret_moved.push((id, Box::new(listener)));
		id
	}

	pub fn on_selection_changed(&mut self, listener: impl FnMut(&SelectionRange) + 'static) -> ListenerId {
		let id = self.next_id();
		self.selection_changed.push((id, Box::new(listener)));
		id
	}

	pub fn on_scrolled(&mut self, listener: impl FnMut(&ScrollPosition) + 'static) -> ListenerId {
		let id = self.next_id();
		self.scrolled.push((id, Box::new(listener)));
		id
	}

	/// Removes a listener of any kind. Returns false if `id` is not registered.
	pub fn remove(&mut self, id: ListenerId) -> bool {
		fn retain<L>(list: &mut Vec<(ListenerId, L)>, id: ListenerId) -> bool {
			let before = list.len();
			list.retain(|(listener_id, _)| *listener_id != id);
			list.len() != before
		}

		retain(&mut self.data_changed, id)
			|| retain(&mut self.caret_moved, id)
			|| retain(&mut self.selection_changed, id)
			|| retain(&mut self.scrolled, id)
	}

	/// Returns the number of registered listeners of all kinds.
	pub fn len(&self) -> usize {
		self.data_changed.len() + self.caret_moved.len() + self.selection_changed.len() + self.scrolled.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Delivers `changes` in the fixed kind order.
	pub fn notify(
		&mut self,
		changes: Changes,
		caret: &CaretPosition,
		selection: &SelectionRange,
		scroll: &ScrollPosition,
	) {
		if changes.contains(Changes::DATA) {
			for (_, listener) in &mut self.data_changed {
				listener();
			}
		}
		if changes.contains(Changes::CARET) {
			for (_, listener) in &mut self.caret_moved {
				listener(caret);
			}
		}
		if changes.contains(Changes::SELECTION) {
			for (_, listener) in &mut self.selection_changed {
				listener(selection);
			}
		}
		if changes.contains(Changes::SCROLL) {
			for (_, listener) in &mut self.scrolled {
				listener(scroll);
			}
		}
	}
}
