//! In-progress capture state and the per-thread open-capture guard
//!
//! A capture's steps live in an `Rc`-owned [`CaptureState`] shared by every
//! placeholder it produced, so an open capture can never leave the thread
//! that started it. Closing freezes the steps into an immutable chain.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use super::factory::PlaceholderFactory;
use crate::error::{LambdaError, LambdaResult};
use crate::model::{InvocationChain, InvocationStep, TypeDescriptor};
use crate::registry::RegistryId;

static CAPTURE_COUNTER: AtomicU64 = AtomicU64::new(1);

// The capture currently open on this thread, if any
thread_local! {
    static OPEN_CAPTURE: RefCell<Option<Weak<CaptureState>>> = const { RefCell::new(None) };
}

/// Identity of one capture expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CaptureId(u64);

impl CaptureId {
    fn next() -> Self {
        Self(CAPTURE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CaptureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub(crate) struct CaptureState {
    id: CaptureId,
    owner: RegistryId,
    root: Arc<TypeDescriptor>,
    factory: Arc<PlaceholderFactory>,
    steps: RefCell<Vec<InvocationStep>>,
    closed: Cell<bool>,
}

impl CaptureState {
    /// Open a capture on the current thread
    ///
    /// Fails with `NestedCaptureNotClosed` while another capture started on
    /// this thread is still open and alive.
    pub(crate) fn open(
        factory: Arc<PlaceholderFactory>,
        owner: RegistryId,
        root: Arc<TypeDescriptor>,
    ) -> LambdaResult<Rc<Self>> {
        OPEN_CAPTURE.with(|slot| {
            let mut slot = slot.borrow_mut();
            if let Some(open) = slot.as_ref().and_then(Weak::upgrade) {
                if !open.is_closed() {
                    return Err(LambdaError::nested_capture(open.id));
                }
            }

            let state = Rc::new(Self {
                id: CaptureId::next(),
                owner,
                root,
                factory,
                steps: RefCell::new(Vec::new()),
                closed: Cell::new(false),
            });
            *slot = Some(Rc::downgrade(&state));
            Ok(state)
        })
    }

    pub(crate) fn id(&self) -> CaptureId {
        self.id
    }

    pub(crate) fn owner(&self) -> RegistryId {
        self.owner
    }

    pub(crate) fn root(&self) -> &TypeDescriptor {
        &self.root
    }

    pub(crate) fn factory(&self) -> &PlaceholderFactory {
        &self.factory
    }

    pub(crate) fn len(&self) -> usize {
        self.steps.borrow().len()
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed.get()
    }

    pub(crate) fn push(&self, step: InvocationStep) {
        self.steps.borrow_mut().push(step);
    }

    /// Copy of the steps recorded so far
    pub(crate) fn snapshot(&self) -> InvocationChain {
        InvocationChain::from_steps(self.root.type_ref(), self.steps.borrow().clone())
    }

    /// Mark the capture closed and release this thread's open slot
    pub(crate) fn close(&self) {
        self.closed.set(true);
        OPEN_CAPTURE.with(|slot| {
            let mut slot = slot.borrow_mut();
            let is_current = slot
                .as_ref()
                .and_then(Weak::upgrade)
                .is_some_and(|open| open.id == self.id);
            if is_current {
                *slot = None;
            }
        });
    }
}

impl fmt::Debug for CaptureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureState")
            .field("id", &self.id)
            .field("root", &self.root.name)
            .field("steps", &self.len())
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// The capture currently open on this thread, if any
#[must_use]
pub fn open_capture() -> Option<CaptureId> {
    OPEN_CAPTURE.with(|slot| {
        slot.borrow()
            .as_ref()
            .and_then(Weak::upgrade)
            .filter(|state| !state.is_closed())
            .map(|state| state.id)
    })
}
