// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! A success-or-failure container with deferred payloads.
//!
//! [`Result`] holds either a producer of a value or a producer of an
//! [`Error`]. Producers run when the payload is read, not when the container
//! is built, so a chain can be assembled up front and forced later.
//!
//! # Usage
//!
//! ```
//! use deferred_result::{Error, Result};
//!
//! fn double_if_positive(x: i64) -> Result<i64> {
//! 	if x > 0 { Result::new(x * 2) } else { Result::failure(Error::msg("negative input")) }
//! }
//!
//! let ok = Result::new(4).flat_map(double_if_positive).map(|x| x + 1);
//! assert_eq!(ok.value(), Some(9));
//!
//! let failed = Result::new(-1).flat_map(double_if_positive).map(|x| x + 1);
//! assert_eq!(failed.error().unwrap().to_string(), "negative input");
//!
//! // the first success wins
//! assert_eq!((failed | ok).with_default(0), 9);
//! ```
//!
//! # Features
//!
//! - `serde` (default): `Serialize` / `Deserialize` for [`Result`]

#![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use error::{Error, Message};
pub use result::Result;
pub use thunk::Thunk;

mod error;
mod result;
#[cfg(feature = "serde")]
mod serialize;
mod thunk;
