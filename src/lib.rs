//! # ennet
//!
//! Expands Emmet-like abbreviations into markup.
//!
//! ```text
//! ul>li.item$*3  =>  <ul><li class="item1" /><li class="item2" /><li class="item3" /></ul>
//! ```
//!
//! The work happens in four stages, see the [ennet] module for the tour.
//!
//! ## Limitations
//!
//! - No implicit tag names (`ul>.cls` is an error)
//! - Empty elements are always self-closing (`<a />`, never `<a></a>`)

pub mod ennet;

pub use ennet::{expand, ParseError};
