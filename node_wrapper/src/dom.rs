// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

/// A handle to a single element of a DOM-like object model.
///
/// Handles are cheap references to the underlying element, mutations go through `&self`
/// the same way they do on [`web_sys::Element`].
/// The class list is owned by the element, implementations must not require callers
/// to track it.
pub trait DomElement {
    /// The tag name of the element, as reported by the object model (e.g. `"DIV"`).
    fn tag_name(&self) -> String;

    /// The current id of the element, or an empty string if it has none.
    fn id(&self) -> String;

    /// Sets the id of the element.
    fn set_id(&self, id: &str);

    /// Whether the class list of the element contains `name`.
    fn contains_class(&self, name: &str) -> bool;

    /// Adds `name` to the class list, this is a no-op if it's already present.
    fn add_class(&self, name: &str);

    /// Removes `name` from the class list, this is a no-op if it isn't present.
    fn remove_class(&self, name: &str);
}

/// Creates new, unattached elements.
pub trait Document {
    /// The element handle type created by this document.
    type Element: DomElement;

    /// Creates a new empty element with the given tag name.
    fn create_element(&self, tag_name: &str) -> Self::Element;
}
