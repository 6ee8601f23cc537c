//! Tests for the screen navigation controller
//!
//! Tests are organized by topic:
//! - `lifecycle` - Construction, lazy building of the configuration screen, build failures
//! - `navigation` - Visibility sequencing and the closed notification
//! - `scenarios` - End-to-end walks through the navigation state machine
//!
//! All tests drive the screens through a recording UI builder that logs every
//! build and visibility change in order.


use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::ScreenError;
use crate::function_screen::FunctionScreen;
use crate::screen::{ScreenKind, ScreenUi, UiBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UiCall {
    Built(ScreenKind),
    Shown(ScreenKind),
    Hidden(ScreenKind),
}

#[derive(Debug, Default)]
pub(crate) struct UiLog {
    pub calls: Vec<UiCall>,
    pub visible: Vec<ScreenKind>,
    /// Largest number of screens visible at the same moment
    pub max_visible: usize,
}

impl UiLog {
    pub fn built(&self, kind: ScreenKind) -> usize {
        self.calls
            .iter()
            .filter(|call| **call == UiCall::Built(kind))
            .count()
    }
}

pub(crate) struct RecordingUi {
    kind: ScreenKind,
    log: Rc<RefCell<UiLog>>,
}

impl ScreenUi for RecordingUi {
    fn set_visible(&mut self, visible: bool) {
        let mut guard = self.log.borrow_mut();
        let log = &mut *guard;
        if visible {
            log.calls.push(UiCall::Shown(self.kind));
            if !log.visible.contains(&self.kind) {
                log.visible.push(self.kind);
            }
            log.max_visible = log.max_visible.max(log.visible.len());
        } else {
            log.calls.push(UiCall::Hidden(self.kind));
            let kind = self.kind;
            log.visible.retain(|k| *k != kind);
        }
    }
}

#[derive(Default)]
pub(crate) struct RecordingBuilder {
    log: Rc<RefCell<UiLog>>,
    fail_on: Option<ScreenKind>,
}

impl RecordingBuilder {
    pub fn failing_on(kind: ScreenKind) -> Self {
        Self {
            fail_on: Some(kind),
            ..Self::default()
        }
    }

    pub fn log(&self) -> Rc<RefCell<UiLog>> {
        self.log.clone()
    }
}

impl UiBuilder for RecordingBuilder {
    type Ui = RecordingUi;

    fn build(&mut self, kind: ScreenKind) -> Result<RecordingUi, ScreenError> {
        if self.fail_on == Some(kind) {
            return Err(ScreenError::build(kind, "builder refused"));
        }
        self.log.borrow_mut().calls.push(UiCall::Built(kind));
        Ok(RecordingUi {
            kind,
            log: self.log.clone(),
        })
    }
}

/// A function screen wired to a recording builder and a closed counter.
pub(crate) struct Harness {
    pub screen: FunctionScreen<RecordingBuilder>,
    pub log: Rc<RefCell<UiLog>>,
    pub closed: Rc<Cell<usize>>,
}

impl Harness {
    pub fn new() -> Self {
        let builder = RecordingBuilder::default();
        let log = builder.log();
        let closed = Rc::new(Cell::new(0));
        let counter = closed.clone();
        let screen = FunctionScreen::new(builder, move || counter.set(counter.get() + 1))
            .expect("recording builder never fails");

        Self {
            screen,
            log,
            closed,
        }
    }

    /// Construct and show, as a presenter would.
    pub fn shown() -> Self {
        use crate::screen::Screen;

        let mut harness = Self::new();
        harness.screen.show();
        harness
    }

    pub fn config_builds(&self) -> usize {
        self.log.borrow().built(ScreenKind::Config)
    }

    pub fn calls(&self) -> Vec<UiCall> {
        self.log.borrow().calls.clone()
    }

    pub fn max_visible(&self) -> usize {
        self.log.borrow().max_visible
    }
}
