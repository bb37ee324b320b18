//! Commonly used items for convenient importing.
//!
//! The prelude re-exports the handful of items nearly every user of the crate
//! touches, so a single use statement covers the common case.
//!
//! # Usage
//!
//! ```rust
//! use seqcol::prelude::*;
//!
//! fn first_even(numbers: &Collection<i32>) -> Result<i32, IndexOutOfRange> {
//!     let mut index = 0;
//!     loop {
//!         let value = *numbers.get(index)?;
//!         if value % 2 == 0 {
//!             return Ok(value);
//!         }
//!         index += 1;
//!     }
//! }
//!
//! let numbers = collection![1, 3, 4];
//! assert_eq!(first_even(&numbers), Ok(4));
//! ```
//!
//! # What's Included
//!
//! - **[`Collection`]**: The container type
//! - **[`IndexOutOfRange`]**: The error returned by bounds-checked operations
//! - **[`collection!`]**: Macro for constructing collections from element
//!   lists

pub use crate::{Collection, IndexOutOfRange, collection};
