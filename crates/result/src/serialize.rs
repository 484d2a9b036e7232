// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Serde support, enabled by the `serde` feature.
//!
//! A result is written as an externally tagged map, forcing the active
//! producer once: `{"success": <value>}` or `{"failure": "<message>"}`. Only
//! the error's message survives; a deserialized failure carries a
//! [`Message`](crate::Message).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Repr<T> {
	Success(T),
	Failure(String),
}

impl<T: Serialize + 'static> Serialize for Result<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Result::Success(value) => Repr::Success(value.call()).serialize(serializer),
			Result::Failure(error) => Repr::<T>::Failure(error.call().to_string()).serialize(serializer),
		}
	}
}

impl<'de, T> Deserialize<'de> for Result<T>
where
	T: Deserialize<'de> + Clone + 'static,
{
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		Ok(match Repr::<T>::deserialize(deserializer)? {
			Repr::Success(value) => Result::new(value),
			Repr::Failure(message) => Result::failure(Error::msg(message)),
		})
	}
}
