#![allow(dead_code)]

use readable::config::ReadableConfig;
use readable::document::{shared, Document, DocumentHandle, DocumentProvider};
use readable::schedule::FakeClock;
use readable::widget::Readable;

/// Provider over a preview document that is already attached.
pub struct StaticProvider(pub DocumentHandle);

impl DocumentProvider for StaticProvider {
    fn document(&self) -> Option<DocumentHandle> {
        Some(self.0.clone())
    }
}

/// Build a preview document with one block element per (tag, text) pair.
pub fn preview_doc(blocks: &[(&str, &str)]) -> DocumentHandle {
    let mut doc = Document::new("body");
    let root = doc.root();
    for (tag, text) in blocks {
        let node = doc.create_element(tag);
        doc.set_text(node, text);
        doc.append_child(root, node);
    }
    shared(doc)
}

/// Widget surface carrying the default chart and summary mount points.
pub fn widget_surface() -> DocumentHandle {
    let options = readable::config::WidgetOptions::default();
    let mut doc = Document::new("div");
    let root = doc.root();
    for mount in [
        &options.chart_mount,
        &options.score_mount,
        &options.grade_mount,
        &options.level_mount,
    ] {
        let node = doc.create_element("div");
        doc.set_dom_id(node, mount);
        doc.append_child(root, node);
    }
    shared(doc)
}

/// A widget over the given preview, with a fake clock to drive its timers.
pub fn widget_with_fake_clock(
    preview: DocumentHandle,
    surface: DocumentHandle,
) -> (Readable<StaticProvider>, FakeClock) {
    let clock = FakeClock::new();
    let widget = Readable::with_clock(
        StaticProvider(preview),
        surface,
        ReadableConfig::default(),
        Box::new(clock.clone()),
    )
    .expect("default config is valid");
    (widget, clock)
}

/// Twenty short sentences of ten monosyllabic words each: 200 words that
/// score far into the very-easy band.
pub fn easy_200_words() -> String {
    "The cat sat on the mat and the dog ran. ".repeat(20).trim_end().to_string()
}

pub fn mount_text(surface: &DocumentHandle, mount: &str) -> Option<String> {
    let doc = surface.borrow();
    let node = doc.element_by_id(mount)?;
    doc.node(node).map(|n| n.text.clone())
}
