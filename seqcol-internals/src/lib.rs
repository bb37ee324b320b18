#![no_std]
#![forbid(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::missing_docs_in_private_items,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
#![allow(rustdoc::private_intra_doc_links)]
//! Internal implementation crate for [`seqcol`].
//!
//! # Overview
//!
//! This crate contains the low-level allocation machinery that powers the
//! [`seqcol`] container library. It provides an owned, contiguous backing
//! buffer with an explicit reallocate-and-copy growth step, on top of which
//! the public crate builds its safe, bounds-checked API.
//!
//! **This crate is an implementation detail.** No semantic versioning
//! guarantees are provided. Users should depend on the [`seqcol`] crate, not
//! this one.
//!
//! # Architecture
//!
//! The crate exposes a single type:
//!
//! - **[`RawStorage`]**: An owned allocation with room for a fixed number of
//!   element slots. It allocates, grows, and frees the buffer, but it never
//!   reads, writes, or drops elements — which slots hold live values is a
//!   contract the caller carries, and every operation that depends on it
//!   states the obligation in its `# Safety` section.
//!
//! # Safety Strategy
//!
//! Manual memory management requires careful handling to maintain Rust's
//! safety guarantees. This crate maintains safety through:
//!
//! - **Module-based encapsulation**: The pointer and capacity fields of
//!   [`RawStorage`] are private to a single module, making the invariant
//!   "the pointer refers to an allocation of exactly `cap` slots" locally
//!   verifiable within one file.
//! - **Caller-carried element contracts**: Because the storage does not track
//!   which slots are initialized, operations that could touch element memory
//!   ([`RawStorage::grow`]) are `unsafe` and document exactly what the caller
//!   must guarantee.
//! - **Unrecoverable allocation failure**: Failure to allocate is reported
//!   via [`handle_alloc_error`], never as a recoverable error value.
//!
//! [`seqcol`]: https://docs.rs/seqcol/latest/seqcol/
//! [`handle_alloc_error`]: alloc::alloc::handle_alloc_error

extern crate alloc;

mod storage;

pub use storage::RawStorage;
