// This file is part of sld-core.

// sld-core is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// sld-core is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with sld-core.  If not, see <https://www.gnu.org/licenses/>.

//! A LIFO journal of reversible mutations, partitioned into nested frames.
//!
//! Every component that mutates shared state (the expression pool, the bind
//! map, the goal/candidate/resolution stores, the sequencer) logs an undo
//! action here instead of mutating irreversibly. `pop()` unwinds a frame by
//! running its undo actions back to front.

use crate::state::EngineState;

type UndoAction = Box<dyn FnOnce(&mut EngineState)>;

pub struct Trail {
    undo_stack: Vec<UndoAction>,
    frame_starts: Vec<usize>,
}

impl Trail {
    pub fn new() -> Self {
        Trail {
            undo_stack: Vec::new(),
            frame_starts: Vec::new(),
        }
    }

    /// Opens a new frame. Every `log` call until the matching `pop()` belongs
    /// to this frame.
    pub fn push(&mut self) {
        self.frame_starts.push(self.undo_stack.len());
    }

    /// Appends an undo action to the innermost open frame.
    pub(crate) fn log(&mut self, action: impl FnOnce(&mut EngineState) + 'static) {
        self.undo_stack.push(Box::new(action));
    }

    /// Closes the innermost frame, running its undo actions in LIFO order.
    ///
    /// Panics if there is no open frame — popping without a matching push is
    /// a programmer error, not a logical failure.
    pub(crate) fn pop(&mut self, state: &mut EngineState) {
        let checkpoint = self
            .frame_starts
            .pop()
            .expect("trail: pop() called with no matching push()");
        while self.undo_stack.len() > checkpoint {
            let action = self
                .undo_stack
                .pop()
                .expect("trail: frame checkpoint exceeds undo stack length");
            action(state);
        }
    }

    /// Number of currently open frames.
    pub fn depth(&self) -> usize {
        self.frame_starts.len()
    }
}
