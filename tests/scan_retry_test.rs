mod common;

use std::time::Duration;

use common::{preview_doc, widget_surface, widget_with_fake_clock};
use pretty_assertions::assert_eq;
use readable::document::{shared, Document};
use readable::render::MARKER_CLASS;
use readable::widget::WidgetState;

const RETRY_DELAY: Duration = Duration::from_millis(500);

#[test]
fn test_empty_preview_retries_five_times_then_goes_quiet() {
    let preview = shared(Document::new("body"));
    let surface = widget_surface();
    let (mut widget, clock) = widget_with_fake_clock(preview.clone(), surface.clone());

    widget.analyze();
    assert_eq!(widget.state(), WidgetState::Started);
    assert_eq!(widget.pending_timers(), 1);

    // four retries fire and re-arm
    for _ in 0..4 {
        clock.advance(RETRY_DELAY);
        widget.tick();
        assert_eq!(widget.pending_timers(), 1);
        assert_eq!(widget.state(), WidgetState::Started);
    }

    // the fifth retry exhausts the budget
    clock.advance(RETRY_DELAY);
    widget.tick();
    assert_eq!(widget.pending_timers(), 0);
    assert_eq!(widget.state(), WidgetState::NotStarted);

    // the renderer was never invoked
    assert!(preview.borrow().elements_by_class(MARKER_CLASS).is_empty());
    assert!(widget.result().is_none());
    assert!(widget.elements().is_empty());

    // and nothing ever fires again
    clock.advance(Duration::from_secs(10));
    widget.tick();
    assert_eq!(widget.pending_timers(), 0);
}

#[test]
fn test_retry_does_not_fire_before_its_delay() {
    let preview = shared(Document::new("body"));
    let (mut widget, clock) = widget_with_fake_clock(preview, widget_surface());

    widget.analyze();
    clock.advance(Duration::from_millis(499));
    widget.tick();
    // still armed: the deadline has not passed
    assert_eq!(widget.pending_timers(), 1);

    clock.advance(Duration::from_millis(1));
    widget.tick();
    assert_eq!(widget.pending_timers(), 1);
}

#[test]
fn test_content_arriving_mid_retry_completes_the_pass() {
    let preview = shared(Document::new("body"));
    let surface = widget_surface();
    let (mut widget, clock) = widget_with_fake_clock(preview.clone(), surface);

    widget.analyze();

    // two failed retries while the preview is still loading
    for _ in 0..2 {
        clock.advance(RETRY_DELAY);
        widget.tick();
    }
    assert_eq!(widget.state(), WidgetState::Started);

    // the preview populates
    {
        let mut doc = preview.borrow_mut();
        let root = doc.root();
        let p = doc.create_element("p");
        doc.set_text(p, "The cat sat on the mat.");
        doc.append_child(root, p);
    }

    clock.advance(RETRY_DELAY);
    widget.tick();
    assert_eq!(widget.elements().len(), 1);

    clock.advance(Duration::from_millis(500));
    widget.tick();
    clock.advance(Duration::from_millis(200));
    widget.tick();
    assert_eq!(widget.state(), WidgetState::Finished);
    assert_eq!(preview.borrow().elements_by_class(MARKER_CLASS).len(), 1);
}

#[test]
fn test_detached_preview_counts_as_not_ready() {
    // provider yields no document at all
    let provider = || -> Option<readable::document::DocumentHandle> { None };
    let clock = readable::schedule::FakeClock::new();
    let mut widget = readable::widget::Readable::with_clock(
        provider,
        widget_surface(),
        readable::config::ReadableConfig::default(),
        Box::new(clock.clone()),
    )
    .unwrap();

    widget.analyze();
    assert_eq!(widget.pending_timers(), 1);
    for _ in 0..5 {
        clock.advance(RETRY_DELAY);
        widget.tick();
    }
    assert_eq!(widget.state(), WidgetState::NotStarted);
    assert_eq!(widget.pending_timers(), 0);
}

#[test]
fn test_markup_only_blocks_are_not_scorable_content() {
    // blocks exist but none carries countable words
    let preview = preview_doc(&[("p", ""), ("li", "   ")]);
    let (mut widget, clock) = widget_with_fake_clock(preview, widget_surface());

    widget.analyze();
    for _ in 0..5 {
        clock.advance(RETRY_DELAY);
        widget.tick();
    }
    assert_eq!(widget.state(), WidgetState::NotStarted);
    assert!(widget.elements().is_empty());
}
