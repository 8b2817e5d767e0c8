// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! An in-memory DOM, used to drive [`NodeWrapper`](crate::NodeWrapper)s without a browser.
//!
//! [`MemoryElement`] behaves like a reference to a DOM element: clones share the same
//! element, and two handles compare equal only if they refer to the same element.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::{Document, DomElement};

/// A [`Document`] creating [`MemoryElement`]s.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    created: Cell<usize>,
}

impl MemoryDocument {
    /// The number of elements created by this document so far.
    pub fn created_count(&self) -> usize {
        self.created.get()
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn create_element(&self, tag_name: &str) -> MemoryElement {
        self.created.set(self.created.get() + 1);
        MemoryElement::new(tag_name)
    }
}

struct ElementData {
    tag_name: String,
    id: String,
    // in insertion order, like `DOMTokenList`
    class_list: Vec<String>,
}

/// A shared handle to an in-memory element.
#[derive(Clone)]
pub struct MemoryElement {
    inner: Rc<RefCell<ElementData>>,
}

impl MemoryElement {
    /// Creates a new element, detached from any document.
    ///
    /// The tag name is reported upper-cased, like elements of an HTML document.
    pub fn new(tag_name: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ElementData {
                tag_name: tag_name.to_ascii_uppercase(),
                id: String::new(),
                class_list: Vec::new(),
            })),
        }
    }

    /// Whether both handles refer to the same element.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// The current classes of the element, in the order they were added.
    pub fn class_list(&self) -> Vec<String> {
        self.inner.borrow().class_list.clone()
    }

    /// The class list serialized as a `class` attribute value.
    ///
    /// Tokens are joined with single spaces, so this only round-trips when every token is
    /// non-empty and free of whitespace. Use [`class_list`](Self::class_list) otherwise.
    pub fn class_name(&self) -> String {
        self.inner.borrow().class_list.join(" ")
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for MemoryElement {}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.borrow();
        f.debug_struct("MemoryElement")
            .field("tag_name", &data.tag_name)
            .field("id", &data.id)
            .field("class_list", &data.class_list)
            .finish()
    }
}

impl DomElement for MemoryElement {
    fn tag_name(&self) -> String {
        self.inner.borrow().tag_name.clone()
    }

    fn id(&self) -> String {
        self.inner.borrow().id.clone()
    }

    fn set_id(&self, id: &str) {
        let mut data = self.inner.borrow_mut();
        data.id.clear();
        data.id.push_str(id);
    }

    fn contains_class(&self, name: &str) -> bool {
        self.inner.borrow().class_list.iter().any(|c| c == name)
    }

    fn add_class(&self, name: &str) {
        let mut data = self.inner.borrow_mut();
        if !data.class_list.iter().any(|c| c == name) {
            data.class_list.push(name.to_owned());
        }
    }

    fn remove_class(&self, name: &str) {
        self.inner.borrow_mut().class_list.retain(|c| c != name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_element() {
        let element = MemoryElement::new("div");
        let other = element.clone();
        other.add_class("foo");
        other.set_id("bar");
        assert!(element.contains_class("foo"));
        assert_eq!(element.id(), "bar");
        assert_eq!(element, other);
    }

    #[test]
    fn equality_is_identity() {
        let a = MemoryElement::new("div");
        let b = MemoryElement::new("div");
        assert_ne!(a, b, "Distinct elements with equal contents must not compare equal");
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn class_list_keeps_insertion_order_without_duplicates() {
        let element = MemoryElement::new("span");
        element.add_class("b");
        element.add_class("a");
        element.add_class("b");
        element.add_class("c");
        assert_eq!(element.class_list(), ["b", "a", "c"]);
        assert_eq!(element.class_name(), "b a c");

        element.remove_class("a");
        element.remove_class("missing");
        assert_eq!(element.class_name(), "b c");
    }

    #[test]
    fn tokens_are_stored_unvalidated() {
        let element = MemoryElement::new("div");
        element.add_class("a b");
        element.add_class("");
        assert_eq!(element.class_list(), ["a b", ""]);
        assert!(element.contains_class("a b"));
        assert!(!element.contains_class("a"));
        assert_eq!(
            element.class_name(),
            "a b ",
            "Invalid tokens are joined as is"
        );
    }

    #[test]
    fn document_counts_created_elements() {
        let document = MemoryDocument::default();
        assert_eq!(document.created_count(), 0);
        let element = document.create_element("button");
        assert_eq!(element.tag_name(), "BUTTON");
        assert_eq!(document.created_count(), 1);
    }
}
