// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The creation hook of a [`NodeWrapper`](crate::NodeWrapper), and kinds for common HTML elements.
//!
//! The kind is a type parameter of the wrapper, so the hook is resolved per wrapper type,
//! not per instance. [`Div`] is the default kind.
//!
//! A kind can also be implemented by hand, e.g. to prepare the node before it is handed to
//! the wrapper:
//!
//! ```
//! use node_wrapper::{Document, DomElement, NodeKind, NodeWrapper, memory::MemoryDocument};
//!
//! struct PrimaryButton;
//!
//! impl NodeKind for PrimaryButton {
//!     fn create_node<D: Document + ?Sized>(document: &D) -> D::Element {
//!         let node = document.create_element("button");
//!         node.add_class("primary");
//!         node
//!     }
//! }
//!
//! let document = MemoryDocument::default();
//! let wrapper = NodeWrapper::<_, PrimaryButton>::new(&document);
//! assert_eq!(wrapper.node().tag_name(), "BUTTON");
//! assert!(wrapper.has_class("primary"));
//! ```

use crate::Document;

/// Creates the node owned by a [`NodeWrapper`](crate::NodeWrapper).
pub trait NodeKind {
    /// Create the DOM node for a new wrapper of this kind.
    ///
    /// This is called exactly once per wrapper, while it is constructed.
    fn create_node<D: Document + ?Sized>(document: &D) -> D::Element;
}

macro_rules! define_node_kind {
    ($ty_name:ident, $tag_name:literal) => {
        /// Node kind creating an empty
        #[doc = concat!("`<", $tag_name, ">`")]
        /// element.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $ty_name;

        impl $ty_name {
            /// The tag name passed to [`Document::create_element`].
            pub const TAG_NAME: &'static str = $tag_name;
        }

        impl NodeKind for $ty_name {
            fn create_node<D: Document + ?Sized>(document: &D) -> D::Element {
                document.create_element(Self::TAG_NAME)
            }
        }
    };
}

macro_rules! define_node_kinds {
    ($(($ty_name:ident, $tag_name:literal),)*) => {
        $(define_node_kind!($ty_name, $tag_name);)*
    };
}

define_node_kinds!(
    (Div, "div"),
    (Span, "span"),
    (P, "p"),
    (Section, "section"),
    (Ul, "ul"),
    (Li, "li"),
    (Button, "button"),
    (Input, "input"),
    (Label, "label"),
    (Canvas, "canvas"),
);
