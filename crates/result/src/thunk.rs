// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Debug, Formatter},
	rc::Rc,
};

/// A shared, zero-argument producer of `T`.
///
/// The producer runs on every [`call`](Thunk::call); nothing is cached.
/// Cloning a thunk clones the handle, not the computation.
pub struct Thunk<T>(Rc<dyn Fn() -> T>);

impl<T> Thunk<T> {
	/// Wraps `producer`.
	pub fn new(producer: impl Fn() -> T + 'static) -> Self {
		Thunk(Rc::new(producer))
	}

	/// Runs the producer.
	pub fn call(&self) -> T {
		(self.0)()
	}

	/// Whether both handles share the same producer.
	pub fn ptr_eq(this: &Self, other: &Self) -> bool {
		Rc::ptr_eq(&this.0, &other.0)
	}
}

impl<T: 'static> Thunk<T> {
	/// A producer returning a clone of `value` on every call.
	pub fn value(value: T) -> Self
	where
		T: Clone,
	{
		Thunk::new(move || value.clone())
	}

	/// Composes `f` after this producer without running either.
	pub fn then<U: 'static>(&self, f: impl Fn(T) -> U + 'static) -> Thunk<U> {
		let inner = self.clone();
		Thunk::new(move || f(inner.call()))
	}
}

impl<T> Clone for Thunk<T> {
	fn clone(&self) -> Self {
		Thunk(Rc::clone(&self.0))
	}
}

impl<T> Debug for Thunk<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("<deferred>")
	}
}
