#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Non-owning, read-only views over contiguous data.
//!
//! The core struct is a [`View`], a borrowed (pointer, length) pair over a
//! contiguous run of elements. A view can be constructed without copying from
//! a fixed-size array, a vector, an existing slice, or a raw pointer region,
//! and provides read-only indexing, iteration, cross-type equality, and
//! conversion back into owning containers.
//!
//! A view never allocates, never mutates the viewed storage, and never
//! extends its lifetime: safe constructors tie the view to a borrow of the
//! source, so the borrow checker rejects use of a view past its source. The
//! raw constructors shift that obligation to the caller.
//!
//! Where the equivalent C-family designs leave out-of-bounds access to
//! unchecked operations undefined, this crate strengthens the contract:
//! indexing through [`View::index`](std::ops::Index) panics on violation, and
//! [`View::first`]/[`View::last`] return [`None`] for empty views. The only
//! fallible operation is [`View::at`], which reports an [`OutOfRangeError`].
//!
//! # Example
//!
//! ```
//! use array_view::View;
//!
//! let source = vec![10, 20, 30];
//! let view = View::from(&source);
//!
//! assert_eq!(view.len(), 3);
//! assert_eq!(view[1], 20);
//! assert!(view.at(5).is_err());
//! assert_eq!(view, [10, 20, 30]);
//! assert_eq!(view.to_array::<5>(), [10, 20, 30, 0, 0]);
//! ```

pub mod view;
pub use view::{OutOfRangeError, View};
