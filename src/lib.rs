// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # valscope
//!
//! The value-analysis and variable-identity model of a binary analysis engine, as a standalone
//! library. `valscope` describes *what values a register or variable can hold at a program point*:
//! constants, entry registers, stack frame offsets, ranges, lookup tables and finite sets. It also
//! describes *which variable is which*, by position rather than by name.
//!
//! The crate computes nothing itself. Constant propagation, range analysis and jump-table
//! recovery happen in an external engine; `valscope` decodes the engine's fixed-layout records
//! into typed values, answers membership and equality queries on them, and encodes them back.
//!
//! ## Features
//!
//! - **Closed value lattice** - Every engine record maps to exactly one variant; unknown tags are
//!   rejected, never guessed
//! - **Exact round trips** - `to_owned` and `to_raw` are inverses, including sign extension of
//!   signed range bounds
//! - **Three-valued queries** - Undecidable questions answer [`value::Tristate::NotApplicable`]
//!   instead of a misleading `false`
//! - **Positional variable identity** - Handles compare by packed identifier and owning function,
//!   so renames never change identity
//!
//! ## Quick Start
//!
//! ```rust
//! use valscope::prelude::*;
//!
//! let raw = PossibleValueSetRaw {
//!     state: RegisterValueType::InSetOfValues.as_raw(),
//!     value_set: vec![0x10, 0x20, 0x30],
//!     count: 3,
//!     ..PossibleValueSetRaw::default()
//! };
//!
//! let set = raw.to_owned(None)?;
//! assert_eq!(set.contains(0x20), Tristate::True);
//! assert_eq!(set.contains(0x28), Tristate::False);
//! assert_eq!(set.to_raw(), raw);
//! # Ok::<(), valscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`value`] - Register values, possible-value sets and their building blocks
//! - [`variable`] - Variable identities, live handles and parameter lists
//! - [`records`] - Small findings: constant references, branch edges, stack references
//! - [`engine`] - The narrow interface to the analysis engine, with in-memory implementations
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! Decoding a record the engine should never have produced is an error, not a fallback:
//!
//! ```rust
//! use valscope::{Error, value::PossibleValueSetRaw};
//!
//! let raw = PossibleValueSetRaw { state: 0x99, ..PossibleValueSetRaw::default() };
//! assert!(matches!(raw.to_owned(None), Err(Error::UnknownValueType(0x99))));
//! ```
//!
//! ## Logging
//!
//! Diagnostics are emitted through the [`log`](https://docs.rs/log) facade: rejected records at
//! `warn`, write requests to owning functions at `debug` and record decoding at `trace`. Install
//! any `log` backend to see them.
#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;

pub(crate) mod utils;

/// Convenient re-exports of the most commonly used types and traits.
///
/// ```rust
/// use valscope::prelude::*;
///
/// let set = PossibleValueSet::constant(5);
/// assert_eq!(set, 5_i64);
/// ```
pub mod prelude;

/// The narrow interface to the external analysis engine.
///
/// See the module documentation for the collaborator traits and their in-memory
/// implementations.
pub mod engine;

/// Small findings reported alongside values.
pub mod records;

/// The value lattice.
pub mod value;

/// The variable identity model.
pub mod variable;

/// `valscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use valscope::{Result, value::{RegisterValue, RegisterValueRaw}};
///
/// fn decode(raw: &RegisterValueRaw) -> Result<RegisterValue> {
///     raw.to_owned(None)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `valscope` Error type
///
/// The main error type for all operations in this crate. Errors only arise at the boundary with
/// the analysis engine, when a record cannot be decoded or a handle cannot be resolved.
pub use error::Error;
