// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A base abstraction for objects which own and manipulate a single DOM element.
//!
//! A [`NodeWrapper`] creates its element exactly once, when it is constructed,
//! through the creation hook of its [`NodeKind`]. After that the element can be read
//! with [`NodeWrapper::node`] but never replaced, and the wrapper exposes the element's
//! id and class list:
//!
//! ```
//! use node_wrapper::{DomElement, NodeWrapper, memory::MemoryDocument};
//!
//! let document = MemoryDocument::default();
//! let mut wrapper: NodeWrapper<_> = NodeWrapper::new(&document);
//! assert_eq!(wrapper.node().tag_name(), "DIV");
//!
//! wrapper.set_id("sidebar");
//! assert!(wrapper.toggle_class("collapsed", None));
//! assert!(wrapper.node().contains_class("collapsed"));
//! ```
//!
//! The element object model is abstracted by the [`Document`] and [`DomElement`] traits.
//! They are implemented for [`web_sys::Document`] and [`web_sys::Element`] (see [`web`]),
//! and for the in-memory DOM in [`memory`], which needs no browser.
//!
//! ## Feature flags
//!
//! - `intern_strings`: Interns the tag names passed to the browser, which slightly improves
//!   performance when creating many elements at the cost of a bigger wasm binary.

mod dom;
mod wrapper;

pub mod kinds;
pub mod memory;
pub mod web;

pub use dom::{Document, DomElement};
pub use kinds::NodeKind;
pub use web::document;
pub use wrapper::NodeWrapper;
