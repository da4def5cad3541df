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

//! Interned ancestry identities for open goals and resolution steps.
//!
//! Lineages interleave: `root -> GoalLineage -> ResolutionLineage ->
//! GoalLineage -> ...`. They distinguish two syntactically identical goals
//! that arose at different points in the search tree. Unlike the rest of
//! the engine's mutable state, this pool is *not* trail-journaled: pinning
//! and trimming is an independent, driver-controlled memory-reclamation
//! policy, not part of backtracking.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

/// Identifies an open subgoal as "the `index`-th body expression of
/// `parent`" (or the top-level goal, if `parent` is `None`).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct GoalLineage {
    pub(crate) parent: Option<Rc<ResolutionLineage>>,
    pub(crate) index: usize,
}

/// Identifies "the choice of using rule `index` to resolve `parent`".
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ResolutionLineage {
    pub(crate) parent: Rc<GoalLineage>,
    pub(crate) index: usize,
}

pub struct LineagePool {
    goals: HashMap<Rc<GoalLineage>, Cell<bool>>,
    resolutions: HashMap<Rc<ResolutionLineage>, Cell<bool>>,
}

impl LineagePool {
    pub fn new() -> Self {
        LineagePool {
            goals: HashMap::new(),
            resolutions: HashMap::new(),
        }
    }

    /// The distinguished lineage of the top-level goal installed by
    /// `Engine::initialize`.
    pub fn root(&mut self) -> Rc<GoalLineage> {
        self.goal(None, 0)
    }

    pub fn goal(&mut self, parent: Option<Rc<ResolutionLineage>>, index: usize) -> Rc<GoalLineage> {
        let key = GoalLineage { parent, index };
        if let Some((existing, _)) = self.goals.get_key_value(&key) {
            return existing.clone();
        }
        let rc = Rc::new(key);
        self.goals.insert(rc.clone(), Cell::new(false));
        rc
    }

    pub fn resolution(&mut self, parent: Rc<GoalLineage>, index: usize) -> Rc<ResolutionLineage> {
        let key = ResolutionLineage { parent, index };
        if let Some((existing, _)) = self.resolutions.get_key_value(&key) {
            return existing.clone();
        }
        let rc = Rc::new(key);
        self.resolutions.insert(rc.clone(), Cell::new(false));
        rc
    }

    /// Marks `gl` and every ancestor up to the root pinned, short-circuiting
    /// as soon as an already-pinned node is reached.
    pub fn pin_goal(&mut self, gl: &Rc<GoalLineage>) {
        let parent = match self.goals.get(gl) {
            Some(flag) if flag.get() => return,
            Some(flag) => {
                flag.set(true);
                gl.parent.clone()
            }
            None => return,
        };
        if let Some(parent) = parent {
            self.pin_resolution(&parent);
        }
    }

    pub fn pin_resolution(&mut self, rl: &Rc<ResolutionLineage>) {
        let parent = match self.resolutions.get(rl) {
            Some(flag) if flag.get() => return,
            Some(flag) => {
                flag.set(true);
                rl.parent.clone()
            }
            None => return,
        };
        self.pin_goal(&parent);
    }

    /// Discards every entry whose pin flag is still false, then clears all
    /// remaining flags. Callers must pin everything they intend to keep
    /// before calling this.
    pub fn trim(&mut self) {
        self.goals.retain(|_, pinned| pinned.get());
        self.resolutions.retain(|_, pinned| pinned.get());
        for flag in self.goals.values() {
            flag.set(false);
        }
        for flag in self.resolutions.values() {
            flag.set(false);
        }
    }

    pub fn size(&self) -> usize {
        self.goals.len() + self.resolutions.len()
    }
}
