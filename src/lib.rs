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

//! # utilscope
//!
//! [![Crates.io](https://img.shields.io/crates/v/utilscope.svg)](https://crates.io/crates/utilscope)
//! [![Documentation](https://docs.rs/utilscope/badge.svg)](https://docs.rs/utilscope)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/utilscope/blob/main/LICENSE-APACHE)
//!
//! A test-support assertion engine which verifies that a type has the shape of a well formed
//! static utility class: sealed, a single private zero-argument constructor, no instance state
//! and no mutable static state.
//!
//! ## Features
//!
//! - **🔍 Fixed, ordered checks** - Six structural checks, first violation wins
//! - **🧩 Pluggable introspection** - Any metadata source can implement [`Introspect`]
//! - **⚙️ Per-check suppression** - Fluent configuration or a [`VerifierConfig`] value
//! - **🛡️ Constructor guards** - Verify that a constructor raises the expected error kind
//!
//! ## Quick Start
//!
//! ```rust
//! use utilscope::prelude::*;
//!
//! let strings = TypeBuilder::class("demo.Strings")
//!     .public()
//!     .sealed()
//!     .constructor(Constructor::private())
//!     .field("EMPTY", FieldAttributes::PUBLIC | FieldAttributes::STATIC | FieldAttributes::INIT_ONLY)
//!     .static_method("join")
//!     .build();
//!
//! UtilsVerifier::for_type(&strings).verify()?;
//! # Ok::<(), utilscope::Error>(())
//! ```
//!
//! ### Guarded Constructors
//!
//! Utility types often refuse instantiation by raising from their constructor. The verifier
//! invokes the constructor and compares the raised error kind:
//!
//! ```rust
//! use utilscope::prelude::*;
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("no instances")]
//! struct NoInstances;
//!
//! let guarded = TypeBuilder::class("demo.Guarded")
//!     .sealed()
//!     .constructor(Constructor::private().with_body(|| Err(Thrown::new(NoInstances))))
//!     .build();
//!
//! UtilsVerifier::for_type(&guarded)
//!     .with_constructor_throwing::<NoInstances>()
//!     .verify()?;
//! # Ok::<(), utilscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`introspection`] - The [`Introspect`] facility, attribute flags, and the in-memory
//!   [`TypeDescriptor`]
//! - [`verification`] - The [`UtilsVerifier`], its configuration, and the individual validators
//! - [`Error`] and [`Result`] - Violations and internal errors
//!
//! ## Standards Compliance
//!
//! Type, field and method flags use the **ECMA-335** attribute encoding, so descriptors can be
//! populated directly from metadata tables.
//!
//! ## Error Handling
//!
//! Verification returns [`Result<(), Error>`](Result). Errors are either violations (a defect of
//! the type under test) or internal errors (the verifier could not evaluate the type):
//!
//! ```rust
//! use utilscope::{Error, TypeBuilder, UtilsVerifier};
//!
//! let open = TypeBuilder::class("demo.Open").build();
//!
//! match UtilsVerifier::for_type(&open).verify() {
//!     Err(Error::NotFinal { type_name }) => println!("{type_name} can be extended"),
//!     Err(e) => println!("Other error: {e}"),
//!     Ok(()) => println!("well formed"),
//! }
//! ```
//!
//! ## Logging
//!
//! Stage results are emitted as `tracing` events at `debug` level. The library never installs a
//! subscriber.

mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use utilscope::prelude::*;
///
/// let subject = TypeBuilder::class("demo.Empty").sealed().build();
/// assert!(UtilsVerifier::for_type(&subject).verify().is_err());
/// ```
pub mod prelude;

/// Type introspection: the facility consumed by the verifier and its in-memory implementation.
pub mod introspection;

/// The verifier and its validators.
pub mod verification;

/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `utilscope` Error type
///
/// Every verification failure is reported through this type, either as a violation of the type
/// under test or as an internal error of the verification setup.
pub use error::Error;

pub use introspection::{
    Constructor, ExceptionKind, Introspect, Invocation, InvocationError, Thrown, TypeBuilder,
    TypeDescriptor,
};
pub use verification::{Check, UtilsVerifier, VerifierConfig};
