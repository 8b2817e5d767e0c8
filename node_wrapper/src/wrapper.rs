// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::marker::PhantomData;

use crate::kinds::Div;
use crate::{Document, DomElement, NodeKind};

/// A base type for objects which wrap a DOM node.
///
/// The node is created by [`K::create_node`](NodeKind::create_node) when the wrapper is
/// constructed, and is owned by the wrapper for its whole lifetime.
/// The wrapper never attaches, detaches or destroys the node, that's up to its owner.
///
/// The mutating methods take `&mut self` to mark which calls change the node, but this is not
/// an exclusive lock: the handle returned by [`node`](Self::node) can make the same changes
/// through `&self`, and the wrapper always reads the node's current state.
///
/// The node can be read, but not replaced:
///
/// ```compile_fail
/// use node_wrapper::{Document, NodeWrapper, memory::MemoryDocument};
///
/// let document = MemoryDocument::default();
/// let mut wrapper: NodeWrapper<_> = NodeWrapper::new(&document);
/// wrapper.node = document.create_element("span");
/// ```
pub struct NodeWrapper<E, K = Div> {
    node: E,
    kind: PhantomData<fn() -> K>,
}

impl<E: DomElement, K: NodeKind> NodeWrapper<E, K> {
    /// Create the DOM node for a new wrapper of this type.
    ///
    /// This is the creation hook of the kind `K`, which defaults to an empty `<div>`.
    pub fn create_node<D: Document<Element = E> + ?Sized>(document: &D) -> E {
        K::create_node(document)
    }

    /// Creates a new wrapper, with a node created by [`create_node`](Self::create_node).
    pub fn new<D: Document<Element = E> + ?Sized>(document: &D) -> Self {
        let node = Self::create_node(document);
        tracing::trace!(tag_name = %node.tag_name(), "created wrapper node");
        Self {
            node,
            kind: PhantomData,
        }
    }
}

impl<E: DomElement, K> NodeWrapper<E, K> {
    /// The DOM node managed by the wrapper.
    pub fn node(&self) -> &E {
        &self.node
    }

    /// The id of the wrapper's DOM node, read from the node on every call.
    pub fn id(&self) -> String {
        self.node.id()
    }

    /// Sets the id of the wrapper's DOM node.
    pub fn set_id(&mut self, id: &str) {
        self.node.set_id(id);
    }

    /// Whether the wrapper's DOM node has the class `name`.
    pub fn has_class(&self, name: &str) -> bool {
        self.node.contains_class(name)
    }

    /// Adds the class `name` to the wrapper's DOM node.
    ///
    /// If the class is already present, this is a no-op.
    pub fn add_class(&mut self, name: &str) {
        self.node.add_class(name);
    }

    /// Removes the class `name` from the wrapper's DOM node.
    ///
    /// If the class isn't present, this is a no-op.
    pub fn remove_class(&mut self, name: &str) {
        self.node.remove_class(name);
    }

    /// Toggles the class `name` on the wrapper's DOM node.
    ///
    /// `force` selects the behavior:
    /// - `Some(true)` adds the class,
    /// - `Some(false)` removes the class,
    /// - `None` removes the class if it's present and adds it otherwise.
    ///
    /// Returns `true` if the class is present after the call, `false` otherwise.
    pub fn toggle_class(&mut self, name: &str, force: Option<bool>) -> bool {
        let present = force.unwrap_or_else(|| !self.has_class(name));
        if present {
            self.add_class(name);
        } else {
            self.remove_class(name);
        }
        present
    }
}

impl<E, K> AsRef<E> for NodeWrapper<E, K> {
    fn as_ref(&self) -> &E {
        &self.node
    }
}

impl<E: fmt::Debug, K> fmt::Debug for NodeWrapper<E, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeWrapper")
            .field("node", &self.node)
            .field("kind", &std::any::type_name::<K>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::Button;
    use crate::memory::{MemoryDocument, MemoryElement};

    #[test]
    fn new_calls_the_hook_once() {
        let document = MemoryDocument::default();
        let wrapper: NodeWrapper<MemoryElement> = NodeWrapper::new(&document);
        assert_eq!(document.created_count(), 1);
        let _ = wrapper.node();
        let _ = wrapper.id();
        assert_eq!(
            document.created_count(),
            1,
            "Accessing the node must not create another one"
        );
    }

    #[test]
    fn toggle_without_force_flips_membership() {
        let document = MemoryDocument::default();
        let mut wrapper: NodeWrapper<MemoryElement> = NodeWrapper::new(&document);
        assert!(wrapper.toggle_class("foo", None));
        assert!(wrapper.has_class("foo"));
        assert!(!wrapper.toggle_class("foo", None));
        assert!(!wrapper.has_class("foo"));
        assert!(wrapper.toggle_class("foo", None));
    }

    #[test]
    fn toggle_with_force_is_idempotent() {
        let document = MemoryDocument::default();
        let mut wrapper: NodeWrapper<MemoryElement> = NodeWrapper::new(&document);
        assert!(wrapper.toggle_class("foo", Some(true)));
        assert!(wrapper.toggle_class("foo", Some(true)));
        assert_eq!(wrapper.node().class_list(), ["foo"]);
        assert!(!wrapper.toggle_class("foo", Some(false)));
        assert!(!wrapper.toggle_class("foo", Some(false)));
        assert!(wrapper.node().class_list().is_empty());
    }

    #[test]
    fn toggle_only_touches_the_named_class() {
        let document = MemoryDocument::default();
        let mut wrapper: NodeWrapper<MemoryElement> = NodeWrapper::new(&document);
        wrapper.add_class("a");
        wrapper.add_class("b");
        wrapper.toggle_class("a", None);
        wrapper.toggle_class("c", Some(true));
        assert_eq!(wrapper.node().class_name(), "b c");
    }

    #[test]
    fn as_ref_is_the_node() {
        let document = MemoryDocument::default();
        let wrapper = NodeWrapper::<_, Button>::new(&document);
        let node: &MemoryElement = wrapper.as_ref();
        assert!(node.ptr_eq(wrapper.node()));
    }

    #[test]
    fn debug_names_the_kind() {
        let document = MemoryDocument::default();
        let wrapper = NodeWrapper::<_, Button>::new(&document);
        let debug = format!("{wrapper:?}");
        assert!(debug.contains("Button"), "{debug}");
        assert!(debug.contains("BUTTON"), "{debug}");
    }
}
