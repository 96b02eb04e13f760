//! Lifecycle controller: owns state transitions, the retry loop against a
//! not-yet-populated preview, and the debounced teardown/rebuild cycle.
//!
//! The widget is a constructed service instance; nothing here is global.
//! The host supplies a [`DocumentProvider`] for the preview, a surface
//! document carrying the mount points, and drives deferred work by calling
//! [`Readable::tick`] from its event loop.

use std::time::Duration;

use im::Vector;

use crate::config::ReadableConfig;
use crate::document::{DocumentHandle, DocumentProvider, NodeId};
use crate::errors::ReadableError;
use crate::render::Renderer;
use crate::scan::{aggregate, scan_document, AggregateResult, ScoredElement};
use crate::schedule::{Clock, Scheduler, SystemClock, TimerSlot};

/// Widget lifecycle. Mirrored as a state class on the surface root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetState {
    NotStarted,
    Started,
    Finished,
}

impl WidgetState {
    pub fn class(self) -> &'static str {
        match self {
            Self::NotStarted => "readable--state-not-started",
            Self::Started => "readable--state-started",
            Self::Finished => "readable--state-finished",
        }
    }
}

pub struct Readable<P: DocumentProvider> {
    config: ReadableConfig,
    provider: P,
    surface: DocumentHandle,
    scheduler: Scheduler,
    renderer: Renderer,
    state: WidgetState,
    attempts: u32,
    elements: Vector<ScoredElement>,
    result: Option<AggregateResult>,
}

impl<P: DocumentProvider> Readable<P> {
    pub fn new(
        provider: P,
        surface: DocumentHandle,
        config: ReadableConfig,
    ) -> Result<Self, ReadableError> {
        Self::with_clock(provider, surface, config, Box::new(SystemClock))
    }

    /// Construct with an injected clock so tests can drive timers without
    /// wall-clock waits.
    pub fn with_clock(
        provider: P,
        surface: DocumentHandle,
        config: ReadableConfig,
        clock: Box<dyn Clock>,
    ) -> Result<Self, ReadableError> {
        config.validate()?;
        let widget = Self {
            config,
            provider,
            surface,
            scheduler: Scheduler::new(clock),
            renderer: Renderer::new(),
            state: WidgetState::NotStarted,
            attempts: 0,
            elements: Vector::new(),
            result: None,
        };
        {
            let mut surface = widget.surface.borrow_mut();
            let root = surface.root();
            surface.add_class(root, WidgetState::NotStarted.class());
        }
        Ok(widget)
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn result(&self) -> Option<&AggregateResult> {
        self.result.as_ref()
    }

    pub fn elements(&self) -> &Vector<ScoredElement> {
        &self.elements
    }

    pub fn config(&self) -> &ReadableConfig {
        &self.config
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// User-initiated analyze action: begins a scan pass.
    pub fn analyze(&mut self) {
        self.transition(WidgetState::Started);
        self.attempts = 0;
        self.run_scan();
    }

    /// Drive pending timers. Called by the host's event loop; all deferred
    /// work (retries, debounced rebuild, chart mount) fires here.
    pub fn tick(&mut self) {
        for slot in self.scheduler.fire_due() {
            match slot {
                TimerSlot::ScanRetry => self.run_scan(),
                TimerSlot::Rebuild => self.paint(),
                TimerSlot::ChartMount => self.mount_summary(),
            }
        }
    }

    /// Resize / reflow signal: tear down and rebuild annotations from the
    /// last pass's data after the debounce window. Does not re-score.
    pub fn invalidate(&mut self) {
        if self.elements.is_empty() {
            return;
        }
        self.teardown_pass();
    }

    /// Full teardown, used when the host unmounts the widget. Idempotent.
    pub fn teardown(&mut self) {
        self.scheduler.cancel_all();
        match self.provider.document() {
            Some(doc) => self.renderer.teardown(&mut doc.borrow_mut()),
            None => self.renderer.reset(),
        }
    }

    // Pointer events forwarded by the host.

    pub fn pointer_entered(&mut self, element: NodeId) {
        if let Some(doc) = self.provider.document() {
            self.renderer.pointer_entered(&mut doc.borrow_mut(), element);
        }
    }

    pub fn pointer_left(&mut self, element: NodeId) {
        if let Some(doc) = self.provider.document() {
            self.renderer.pointer_left(&mut doc.borrow_mut(), element);
        }
    }

    pub fn pointer_moved(&mut self, x: i64, y: i64) {
        if let Some(doc) = self.provider.document() {
            self.renderer.pointer_moved(&mut doc.borrow_mut(), x, y);
        }
    }

    fn run_scan(&mut self) {
        let Some(doc) = self.provider.document() else {
            self.retry();
            return;
        };
        let elements = {
            let doc = doc.borrow();
            scan_document(&doc, &self.config.options.tags, &self.config.labels)
        };
        if elements.is_empty() {
            self.retry();
            return;
        }

        self.scheduler.cancel(TimerSlot::ScanRetry);
        self.attempts = 0;
        let result = aggregate(&elements, &self.config.labels);
        self.elements = elements;
        self.result = Some(result);
        self.teardown_pass();
    }

    /// Bounded recovery for a preview with no scorable content yet. After
    /// the last attempt the widget goes quiet: no error surfaces, the UI
    /// returns to its not-started state.
    fn retry(&mut self) {
        let max = self.config.options.max_scan_attempts;
        if self.attempts < max {
            self.attempts += 1;
            log::debug!(
                "preview not ready, scheduling retry {}/{}",
                self.attempts,
                max
            );
            self.scheduler.schedule(
                TimerSlot::ScanRetry,
                Duration::from_millis(self.config.options.retry_delay_ms),
            );
        } else {
            log::debug!(
                "{}",
                ReadableError::not_ready(self.attempts)
            );
            self.scheduler.cancel(TimerSlot::ScanRetry);
            self.attempts = 0;
            self.transition(WidgetState::NotStarted);
        }
    }

    /// Destroy the previous pass's annotations now, then arm the debounced
    /// rebuild. Re-arming replaces any pending rebuild; a chart mount left
    /// over from the old pass must not fire into the new one.
    fn teardown_pass(&mut self) {
        match self.provider.document() {
            Some(doc) => self.renderer.teardown(&mut doc.borrow_mut()),
            None => self.renderer.reset(),
        }
        self.scheduler.cancel(TimerSlot::ChartMount);
        self.scheduler.schedule(
            TimerSlot::Rebuild,
            Duration::from_millis(self.config.options.debounce_ms),
        );
    }

    fn paint(&mut self) {
        let Some(doc) = self.provider.document() else {
            return;
        };
        {
            let mut doc = doc.borrow_mut();
            self.renderer.paint_tooltip(&mut doc);
            self.renderer.paint_markers(&mut doc, &self.elements);
        }
        self.scheduler.schedule(
            TimerSlot::ChartMount,
            Duration::from_millis(self.config.options.chart_delay_ms),
        );
    }

    fn mount_summary(&mut self) {
        let Some(result) = self.result.clone() else {
            return;
        };
        let outcome =
            self.renderer
                .mount_summary(&mut self.surface.borrow_mut(), &result, &self.config);
        match outcome {
            Ok(()) => self.transition(WidgetState::Finished),
            // caught and logged; a broken surface must not crash the host
            Err(err) => log::warn!("render pass aborted: {}", err),
        }
    }

    fn transition(&mut self, next: WidgetState) {
        let mut surface = self.surface.borrow_mut();
        let root = surface.root();
        surface.remove_class(root, self.state.class());
        surface.add_class(root, next.class());
        self.state = next;
    }
}
