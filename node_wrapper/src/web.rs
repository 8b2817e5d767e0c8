// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! [`Document`] and [`DomElement`] for the browser DOM, via [`web_sys`].
//!
//! Exceptions raised by the DOM (for example `DOMTokenList.add` rejecting an empty or
//! whitespace-containing token) are rethrown to JavaScript.

use wasm_bindgen::UnwrapThrowExt;

use crate::{Document, DomElement};

/// Helper to get the HTML document
pub fn document() -> web_sys::Document {
    let window = web_sys::window().expect_throw("no global `window` exists");
    window
        .document()
        .expect_throw("should have a document on window")
}

impl Document for web_sys::Document {
    type Element = web_sys::Element;

    fn create_element(&self, tag_name: &str) -> web_sys::Element {
        Self::create_element(self, wasm_bindgen::intern(tag_name)).unwrap_throw()
    }
}

impl DomElement for web_sys::Element {
    fn tag_name(&self) -> String {
        Self::tag_name(self)
    }

    fn id(&self) -> String {
        Self::id(self)
    }

    fn set_id(&self, id: &str) {
        Self::set_id(self, id);
    }

    fn contains_class(&self, name: &str) -> bool {
        self.class_list().contains(name)
    }

    fn add_class(&self, name: &str) {
        self.class_list().add_1(name).unwrap_throw();
    }

    fn remove_class(&self, name: &str) {
        self.class_list().remove_1(name).unwrap_throw();
    }
}
