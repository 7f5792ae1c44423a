//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui`, `session`, `comments`, `map`, `form`) so
//! components can depend on small focused models. `Portfolio` gathers them
//! into the single page state the controller mutates; components hold it as
//! one `RwSignal<Portfolio>` provided through context.


pub mod comments;
pub mod form;
pub mod map;
pub mod session;
pub mod ui;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use comments::CommentsState;
use form::CommentForm;
use map::MapState;
use session::SessionState;
use ui::{PanelsState, TabsState};

/// Everything the page renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Portfolio {
    pub tabs: TabsState,
    pub panels: PanelsState,
    pub session: SessionState,
    pub comments: CommentsState,
    pub map: MapState,
    pub form: CommentForm,
}

/// Handle through which the controller reads and mutates page state.
///
/// Both methods return `None` once the underlying state is gone (a disposed
/// signal after the page unmounted).
pub trait PortfolioStore {
    fn read_with<R>(&self, f: impl FnOnce(&Portfolio) -> R) -> Option<R>;
    fn write_with<R>(&self, f: impl FnOnce(&mut Portfolio) -> R) -> Option<R>;
}

impl PortfolioStore for RwSignal<Portfolio> {
    fn read_with<R>(&self, f: impl FnOnce(&Portfolio) -> R) -> Option<R> {
        WithUntracked::try_with_untracked(self, f)
    }

    fn write_with<R>(&self, f: impl FnOnce(&mut Portfolio) -> R) -> Option<R> {
        Update::try_update(self, f)
    }
}

impl PortfolioStore for Rc<RefCell<Portfolio>> {
    fn read_with<R>(&self, f: impl FnOnce(&Portfolio) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn write_with<R>(&self, f: impl FnOnce(&mut Portfolio) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
