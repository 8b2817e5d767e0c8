// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Wraps a few browser elements and drives their classes.

use node_wrapper::kinds::{Button, Div, Li, Ul};
use node_wrapper::{NodeWrapper, document};
use wasm_bindgen::UnwrapThrowExt;

type Item = NodeWrapper<web_sys::Element, Li>;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::TRACE)
            .build(),
    );

    let document = document();
    let body = document.body().expect_throw("HTML document missing body");

    let mut panel = NodeWrapper::<_, Div>::new(&document);
    panel.set_id("panel");
    panel.add_class("panel");

    let mut toggle = NodeWrapper::<_, Button>::new(&document);
    toggle.set_id("panel-toggle");
    toggle.node().set_text_content(Some("Toggle panel"));

    let list = NodeWrapper::<_, Ul>::new(&document);
    let mut items = Vec::new();
    for (idx, label) in ["first", "second", "third"].into_iter().enumerate() {
        let mut item = Item::new(&document);
        item.node().set_text_content(Some(label));
        item.toggle_class("odd", Some(idx % 2 == 1));
        list.node().append_child(item.node()).unwrap_throw();
        items.push(item);
    }

    let open = panel.toggle_class("open", None);
    tracing::info!(open, id = %panel.id(), "toggled panel");
    let open = panel.toggle_class("open", None);
    tracing::info!(open, id = %panel.id(), "toggled panel");
    toggle.toggle_class("active", Some(open));

    let selected = &mut items[1];
    selected.add_class("selected");
    tracing::info!(
        selected = selected.has_class("selected"),
        odd = selected.has_class("odd"),
        "second item"
    );

    panel.node().append_child(list.node()).unwrap_throw();
    body.append_child(toggle.node()).unwrap_throw();
    body.append_child(panel.node()).unwrap_throw();
}
