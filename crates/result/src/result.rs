// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	error::Error as StdError,
	fmt::{self, Debug, Formatter},
	ops::BitOr,
};

use tracing::trace;

use crate::{Error, Thunk};

/// Either a successful `T` or a failure carrying an [`Error`].
///
/// Both payloads are deferred: the producer of the active variant runs every
/// time [`value`](Result::value) or [`error`](Result::error) is read, and
/// never before. Combinators never mutate the receiver, they build a new
/// container.
///
/// Once a chain fails, every later `map`, `lazy_map`, `try_map` and
/// `flat_map` forwards the original error producer untouched without calling
/// its function. Only [`or`](Result::or) and `|` look past a failure.
pub enum Result<T> {
	/// Holds a producer of the success value.
	Success(Thunk<T>),
	/// Holds a producer of the error.
	Failure(Thunk<Error>),
}

impl<T: 'static> Result<T> {
	/// A success always producing `value`.
	pub fn new(value: T) -> Self
	where
		T: Clone,
	{
		Result::Success(Thunk::value(value))
	}

	/// A failure always producing `error`.
	pub fn failure<E>(error: E) -> Self
	where
		E: StdError + Send + Sync + 'static,
	{
		Result::Failure(Thunk::value(Error::new(error)))
	}

	/// A success whose value is produced by `producer` on every read.
	pub fn from_fn(producer: impl Fn() -> T + 'static) -> Self {
		Result::Success(Thunk::new(producer))
	}

	/// A failure whose error is produced by `producer` on every read.
	pub fn failure_from_fn(producer: impl Fn() -> Error + 'static) -> Self {
		Result::Failure(Thunk::new(producer))
	}

	/// Checks the tag only.
	pub fn is_success(&self) -> bool {
		matches!(self, Result::Success(_))
	}

	/// Checks the tag only.
	pub fn is_failure(&self) -> bool {
		matches!(self, Result::Failure(_))
	}

	/// Runs the success producer, or returns `None` for a failure.
	pub fn value(&self) -> Option<T> {
		match self {
			Result::Success(value) => Some(value.call()),
			Result::Failure(_) => None,
		}
	}

	/// Runs the failure producer, or returns `None` for a success.
	pub fn error(&self) -> Option<Error> {
		match self {
			Result::Success(_) => None,
			Result::Failure(error) => Some(error.call()),
		}
	}

	/// Applies `f` to the value right away and wraps the outcome as an
	/// already resolved success.
	///
	/// Same as `flat_map(|x| Result::new(f(x)))`.
	pub fn map<U>(&self, f: impl FnOnce(T) -> U) -> Result<U>
	where
		U: Clone + 'static,
	{
		self.flat_map(|value| Result::new(f(value)))
	}

	/// Like [`map`](Result::map), but nothing runs until the new
	/// container's value is read, and then `f` runs on every read.
	pub fn lazy_map<U: 'static>(&self, f: impl Fn(T) -> U + 'static) -> Result<U> {
		match self {
			Result::Success(value) => Result::Success(value.then(f)),
			Result::Failure(error) => {
				trace!("lazy_map short-circuited on failure");
				Result::Failure(error.clone())
			}
		}
	}

	/// Applies a fallible `f`; an `Err` becomes a failure carrying the error.
	pub fn try_map<U, E>(&self, f: impl FnOnce(T) -> std::result::Result<U, E>) -> Result<U>
	where
		U: Clone + 'static,
		E: StdError + Send + Sync + 'static,
	{
		self.flat_map(|value| match f(value) {
			Ok(value) => Result::new(value),
			Err(error) => {
				trace!(%error, "try_map captured error");
				Result::failure(error)
			}
		})
	}

	/// Runs the producer and hands the value to `f`, returning its result
	/// as is. `f` is never called on a failure.
	pub fn flat_map<U: 'static>(&self, f: impl FnOnce(T) -> Result<U>) -> Result<U> {
		match self {
			Result::Success(value) => f(value.call()),
			Result::Failure(error) => {
				trace!("flat_map short-circuited on failure");
				Result::Failure(error.clone())
			}
		}
	}

	/// The value, or `default` for a failure.
	pub fn with_default(&self, default: T) -> T {
		self.value().unwrap_or(default)
	}

	/// Returns `self` when it is a success and `other` otherwise. Neither
	/// side's producer runs.
	pub fn or(self, other: Result<T>) -> Result<T> {
		match self {
			Result::Success(_) => self,
			Result::Failure(_) => {
				trace!("or fell back to alternative");
				other
			}
		}
	}

	/// Like [`or`](Result::or), but the alternative is only built when
	/// `self` is a failure.
	pub fn or_else(self, f: impl FnOnce() -> Result<T>) -> Result<T> {
		match self {
			Result::Success(_) => self,
			Result::Failure(_) => {
				trace!("or_else fell back to alternative");
				f()
			}
		}
	}

	/// Variant aware equality.
	///
	/// Unlike `==`, two failures are only equal when they carry the same
	/// error: the same allocation, or errors of the same concrete type with
	/// the same message. Errors of different types never compare equal, even
	/// when their messages match.
	pub fn strict_eq(&self, other: &Self) -> bool
	where
		T: PartialEq,
	{
		match (self, other) {
			(Result::Success(lhs), Result::Success(rhs)) => lhs.call() == rhs.call(),
			(Result::Failure(lhs), Result::Failure(rhs)) => {
				let (lhs, rhs) = (lhs.call(), rhs.call());
				Error::ptr_eq(&lhs, &rhs) || (Error::same_type(&lhs, &rhs) && lhs.to_string() == rhs.to_string())
			}
			_ => false,
		}
	}

	/// Runs the active producer once and converts into a std result.
	pub fn into_result(self) -> std::result::Result<T, Error> {
		match self {
			Result::Success(value) => Ok(value.call()),
			Result::Failure(error) => Err(error.call()),
		}
	}
}

impl<T> Clone for Result<T> {
	fn clone(&self) -> Self {
		match self {
			Result::Success(value) => Result::Success(value.clone()),
			Result::Failure(error) => Result::Failure(error.clone()),
		}
	}
}

impl<T> Debug for Result<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Result::Success(value) => f.debug_tuple("Success").field(value).finish(),
			Result::Failure(error) => f.debug_tuple("Failure").field(error).finish(),
		}
	}
}

/// Compares the success values only: two failures are always equal,
/// whatever they carry. See [`Result::strict_eq`].
impl<T: PartialEq + 'static> PartialEq for Result<T> {
	fn eq(&self, other: &Self) -> bool {
		self.value() == other.value()
	}
}

/// `lhs | rhs` is [`lhs.or(rhs)`](Result::or).
impl<T: 'static> BitOr for Result<T> {
	type Output = Result<T>;

	fn bitor(self, rhs: Self) -> Self::Output {
		self.or(rhs)
	}
}

impl<T, E> From<std::result::Result<T, E>> for Result<T>
where
	T: Clone + 'static,
	E: StdError + Send + Sync + 'static,
{
	fn from(result: std::result::Result<T, E>) -> Self {
		match result {
			Ok(value) => Result::new(value),
			Err(error) => Result::failure(error),
		}
	}
}
