mod common;

use std::time::Duration;

use common::{preview_doc, widget_surface, widget_with_fake_clock};
use pretty_assertions::assert_eq;
use readable::render::{MARKER_CLASS, TOOLTIP_ID};
use readable::widget::WidgetState;

const DEBOUNCE: Duration = Duration::from_millis(500);
const CHART_DELAY: Duration = Duration::from_millis(200);

fn complete_pass(
    widget: &mut readable::widget::Readable<common::StaticProvider>,
    clock: &readable::schedule::FakeClock,
) {
    widget.analyze();
    clock.advance(DEBOUNCE);
    widget.tick();
    clock.advance(CHART_DELAY);
    widget.tick();
}

#[test]
fn test_teardown_twice_is_idempotent() {
    let preview = preview_doc(&[
        ("p", "The cat sat on the mat."),
        ("p", "The dog ran far today."),
    ]);
    let (mut widget, clock) = widget_with_fake_clock(preview.clone(), widget_surface());
    complete_pass(&mut widget, &clock);
    assert_eq!(preview.borrow().elements_by_class(MARKER_CLASS).len(), 2);

    widget.teardown();
    let after_first = preview.borrow().live_node_count();
    assert!(preview.borrow().elements_by_class(MARKER_CLASS).is_empty());
    assert_eq!(preview.borrow().element_by_id(TOOLTIP_ID), None);
    assert_eq!(widget.pending_timers(), 0);

    widget.teardown();
    assert_eq!(preview.borrow().live_node_count(), after_first);
    assert_eq!(widget.pending_timers(), 0);
}

#[test]
fn test_second_pass_leaves_no_stale_markers() {
    let preview = preview_doc(&[
        ("p", "The cat sat on the mat."),
        ("p", "The dog ran far today."),
        ("li", "A list item with words."),
    ]);
    let (mut widget, clock) = widget_with_fake_clock(preview.clone(), widget_surface());
    complete_pass(&mut widget, &clock);
    assert_eq!(preview.borrow().elements_by_class(MARKER_CLASS).len(), 3);

    // the host removes a block between passes
    {
        let mut doc = preview.borrow_mut();
        let li = doc.elements_by_tag("li")[0];
        doc.remove_node(li);
    }

    complete_pass(&mut widget, &clock);
    assert_eq!(widget.elements().len(), 2);
    // marker count equals exactly the new pass's element count
    assert_eq!(preview.borrow().elements_by_class(MARKER_CLASS).len(), 2);
    assert_eq!(widget.state(), WidgetState::Finished);
}

#[test]
fn test_growing_document_gets_markers_for_every_new_block() {
    let preview = preview_doc(&[("p", "The cat sat on the mat.")]);
    let (mut widget, clock) = widget_with_fake_clock(preview.clone(), widget_surface());
    complete_pass(&mut widget, &clock);
    assert_eq!(preview.borrow().elements_by_class(MARKER_CLASS).len(), 1);

    {
        let mut doc = preview.borrow_mut();
        let root = doc.root();
        for text in ["The dog ran far today.", "The sun is out now."] {
            let p = doc.create_element("p");
            doc.set_text(p, text);
            doc.append_child(root, p);
        }
    }

    complete_pass(&mut widget, &clock);
    assert_eq!(preview.borrow().elements_by_class(MARKER_CLASS).len(), 3);
}

#[test]
fn test_teardown_mid_pass_cancels_pending_timers() {
    let preview = preview_doc(&[("p", "The cat sat on the mat.")]);
    let (mut widget, clock) = widget_with_fake_clock(preview.clone(), widget_surface());

    widget.analyze();
    assert_eq!(widget.pending_timers(), 1);
    widget.teardown();
    assert_eq!(widget.pending_timers(), 0);

    // the cancelled rebuild never fires
    clock.advance(Duration::from_secs(5));
    widget.tick();
    assert!(preview.borrow().elements_by_class(MARKER_CLASS).is_empty());
}

#[test]
fn test_reanalyze_after_teardown_builds_a_fresh_pass() {
    let preview = preview_doc(&[("p", "The cat sat on the mat.")]);
    let (mut widget, clock) = widget_with_fake_clock(preview.clone(), widget_surface());
    complete_pass(&mut widget, &clock);
    widget.teardown();

    complete_pass(&mut widget, &clock);
    assert_eq!(widget.state(), WidgetState::Finished);
    assert_eq!(preview.borrow().elements_by_class(MARKER_CLASS).len(), 1);
}
