#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    clippy::as_ptr_cast_mut,
    clippy::ptr_as_ptr,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Extra checks on nightly
#![cfg_attr(nightly_extra_checks, feature(rustdoc_missing_doc_code_examples))]
#![cfg_attr(nightly_extra_checks, forbid(rustdoc::missing_doc_code_examples))]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A generic, index-addressable, dynamically growing sequence container.
//!
//! ## Overview
//!
//! This crate provides [`Collection<T>`], an order-preserving sequence of
//! elements backed by a single owned, contiguous buffer. The collection
//! starts with room for sixteen elements and grows by explicit
//! reallocate-and-copy steps as elements are appended; the capacity never
//! shrinks, not even when elements are removed.
//!
//! Unlike slice-oriented containers, the API surface is deliberately
//! positional: elements are addressed by index, every index is checked
//! explicitly, and a bad index is reported as a typed [`IndexOutOfRange`]
//! error rather than a panic, so calling code can assert on the failure
//! specifically and rely on the collection being left untouched.
//!
//! ## Quick Example
//!
//! ```
//! use seqcol::{Collection, collection};
//!
//! let mut numbers = collection![5, 6];
//! assert_eq!(numbers.to_string(), "[5, 6]");
//!
//! numbers.add(7);
//! numbers.add_range([8, 9]);
//! numbers.exchange(0, 4).unwrap();
//! assert_eq!(numbers.to_string(), "[9, 6, 7, 8, 5]");
//!
//! assert!(numbers.get(17).is_err());
//! ```
//!
//! ## Core Concepts
//!
//! On a mechanical level a [`Collection<T>`] is three things: a backing
//! buffer, a **count**, and a **capacity**.
//!
//! The **count** is the number of logically present elements. The slots
//! below it hold the elements in exactly the order they were appended or
//! inserted; the slots above it are unused storage. Everything the
//! collection renders or hands out comes from below the count — unused
//! capacity is never observable.
//!
//! The **capacity** is the size of the backing buffer. It starts at
//! [`Collection::DEFAULT_CAPACITY`] regardless of how the collection is
//! constructed, at least doubles on every growth event (a bulk append may
//! grow further, to exactly what it needs), and is monotone: removal and
//! clearing keep the buffer for later reuse. A growth event copies the live
//! elements into the fresh buffer without reordering them.
//!
//! Every operation runs to completion synchronously, and each collection
//! exclusively owns its buffer — there is no aliasing between instances and
//! no interior mutability, so a `Collection<T>` is [`Send`]/[`Sync`]
//! precisely when `T` is.
//!
//! For implementation details, see the [`seqcol-internals`] crate.
//!
//! [`seqcol-internals`]: seqcol_internals

extern crate alloc;

#[macro_use]
mod macros;

mod collection;
mod error;
pub mod prelude;

pub use self::{collection::Collection, error::IndexOutOfRange};
