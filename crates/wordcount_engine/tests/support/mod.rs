#![allow(dead_code)]

use std::sync::Once;

use wordcount_engine::{Catalog, CountSettings, HostDom, RefreshLoop, SnapshotDom};

pub const PAGE_A: &str = "https://www.notion.so/acme/Draft-0a1b2c";
pub const PAGE_B: &str = "https://www.notion.so/acme/Notes-3d4e5f";

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(wordcount_logging::initialize_for_tests);
}

/// A page shaped like the host editor: breadcrumb anchor in the top bar and
/// the block container inside the frame.
pub fn page(blocks: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>Draft</title></head><body>
        <div id="notion-app">
            <div class="notion-topbar">
                <div class="shadow-cursor-breadcrumb"><a href="/acme">Acme</a> / <span>Draft</span></div>
            </div>
            <div class="notion-frame">
                <div class="notion-page-content">{blocks}</div>
            </div>
        </div>
        </body></html>"#
    )
}

/// One selectable block of `kind` whose single text leaf holds `text`.
pub fn block(kind: &str, text: &str) -> String {
    format!(
        r#"<div class="notion-selectable notion-{kind}-block"><div><div data-content-editable-leaf="true">{text}</div></div></div>"#
    )
}

/// Same as `block` with a selection halo drawn inside it.
pub fn selected_block(kind: &str, text: &str) -> String {
    format!(
        r#"<div class="notion-selectable notion-{kind}-block"><div><div data-content-editable-leaf="true">{text}</div></div><div class="notion-selectable-halo" style="position: absolute; inset: 0"></div></div>"#
    )
}

pub fn dom_with(blocks: &[String]) -> SnapshotDom {
    SnapshotDom::parse(&page(&blocks.concat()), PAGE_A)
}

pub fn root_of(dom: &SnapshotDom) -> <SnapshotDom as HostDom>::Node {
    let roots = dom.elements_by_class("notion-page-content");
    assert_eq!(roots.len(), 1, "fixture must have one page root");
    roots[0]
}

pub fn english_loop(dom: &SnapshotDom) -> RefreshLoop<<SnapshotDom as HostDom>::Node> {
    let catalog = Catalog::english().expect("built-in catalog");
    RefreshLoop::start(dom, &CountSettings::default(), Box::new(catalog)).expect("loop starts")
}

pub fn indicator_text(dom: &SnapshotDom) -> Option<String> {
    dom.element_by_id("notion-word-count-label")
        .map(|wrapper| dom.visible_text(wrapper))
}
