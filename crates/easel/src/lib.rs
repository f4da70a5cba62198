//! Easel - build visual symbol models and serialize them for submission
//! to a visualization backend.
//!
//! Client code constructs symbols ([`symbol::Rectangle`],
//! [`symbol::Circle`], [`symbol::SymbolGroup`], ...), gathers them into
//! a [`SymbolCollection`] (or any other [`DataStructure`]), and hands
//! the structure to [`Submission`], which assembles the JSON document an
//! external transport sends to the backend. The transport itself is not
//! part of this crate.
//!
//! # Examples
//!
//! ```
//! use easel::{Submission, SymbolCollection, config::SubmissionConfig};
//! use easel::symbol::{Rectangle, SymbolGroup};
//!
//! let mut group = SymbolGroup::new(7);
//! group.add_symbol(Box::new(Rectangle::new(1, 10.0, 5.0)));
//!
//! let mut collection = SymbolCollection::new();
//! collection.add_symbol(Box::new(group));
//!
//! let submission = Submission::new(SubmissionConfig::default());
//! let payload = submission.payload(&collection).expect("within element cap");
//! assert!(payload.contains("\"parentID\":7"));
//! ```

pub mod config;

mod collection;
mod error;
mod structure;
mod submission;

pub use easel_core::{color, geometry, symbol};

pub use collection::SymbolCollection;
pub use error::EaselError;
pub use structure::{DataStructure, Representation, SubmissionToken};
pub use submission::{MAX_ELEMENTS_ALLOWED, Submission};
