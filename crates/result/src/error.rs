// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	any::{Any, TypeId},
	error::Error as StdError,
	fmt::{self, Debug, Formatter},
	sync::Arc,
};

/// The error payload carried by a failed [`Result`](crate::Result).
///
/// A cheaply cloneable handle around any error. `Display` and `source()`
/// delegate to the carried error.
#[derive(Clone, thiserror::Error)]
#[error(transparent)]
pub struct Error(Arc<dyn Carried>);

/// Any error, remembering its concrete type.
trait Carried: StdError + Send + Sync + 'static {
	fn carried_type(&self) -> TypeId;

	fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static);
}

impl<E: StdError + Send + Sync + 'static> Carried for E {
	fn carried_type(&self) -> TypeId {
		TypeId::of::<E>()
	}

	fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
		self
	}
}

/// An error that carries nothing but a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct Message(pub String);

impl Error {
	/// Wraps `error`. An [`Error`] passed in is returned as is rather than
	/// being wrapped a second time.
	pub fn new<E>(error: E) -> Self
	where
		E: StdError + Send + Sync + 'static,
	{
		match (&error as &dyn Any).downcast_ref::<Error>() {
			Some(error) => error.clone(),
			None => Error(Arc::new(error)),
		}
	}

	/// An error carrying only `message`.
	pub fn msg(message: impl Into<String>) -> Self {
		Error(Arc::new(Message(message.into())))
	}

	/// The carried error, if it is an `E`.
	pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
		self.carried().as_error().downcast_ref::<E>()
	}

	/// Whether the carried error is an `E`.
	pub fn is<E: StdError + 'static>(&self) -> bool {
		self.carried().as_error().is::<E>()
	}

	/// Whether both handles carry the same allocation.
	pub fn ptr_eq(this: &Self, other: &Self) -> bool {
		Arc::ptr_eq(&this.0, &other.0)
	}

	/// Whether both handles carry errors of the same concrete type.
	pub fn same_type(this: &Self, other: &Self) -> bool {
		this.carried().carried_type() == other.carried().carried_type()
	}

	// The `Arc` is itself an error; deref so calls reach the carried one.
	fn carried(&self) -> &dyn Carried {
		&*self.0
	}
}

impl Debug for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Debug::fmt(self.carried().as_error(), f)
	}
}

impl From<Message> for Error {
	fn from(message: Message) -> Self {
		Error(Arc::new(message))
	}
}

impl From<String> for Error {
	fn from(message: String) -> Self {
		Error::msg(message)
	}
}

impl From<&str> for Error {
	fn from(message: &str) -> Self {
		Error::msg(message)
	}
}
