pub mod buttons;
pub mod keyboard;
pub mod pointer;
pub mod scroll;

use crate::stage::Stage;
use missed_call_core::{Effect, Sequencer, UiState};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handles captured by every listener.
#[derive(Clone)]
pub struct Wiring {
    pub state: Rc<RefCell<UiState>>,
    pub stage: Rc<Stage>,
    pub sequencer: Rc<RefCell<Sequencer>>,
}

impl Wiring {
    /// Run a state handler and carry out the effects it produced.
    ///
    /// The state borrow ends before any effect runs, so effects may re-enter.
    pub fn update(&self, handler: impl FnOnce(&mut UiState, &mut Vec<Effect>)) {
        let mut out = Vec::new();
        handler(&mut self.state.borrow_mut(), &mut out);
        self.stage.run(&out);
    }
}
