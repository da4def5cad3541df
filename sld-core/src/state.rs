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

//! The mutable state every trail undo action ultimately reaches back into.
//!
//! Kept as a separate struct from [`crate::engine::Engine`] so that a
//! [`crate::trail::Trail`] can own a queue of `FnOnce(&mut EngineState)`
//! closures without aliasing the engine that also owns the trail itself.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::bind::BindMap;
use crate::expr::{ExprPool, ExprRef};
use crate::lineage::{GoalLineage, LineagePool, ResolutionLineage};
use crate::rule::RuleId;
use crate::sequencer::Sequencer;

pub(crate) struct EngineState {
    pub(crate) sequencer: Sequencer,
    pub(crate) pool: ExprPool,
    pub(crate) bind_map: BindMap,
    pub(crate) lineage_pool: LineagePool,
    pub(crate) goals: HashMap<Rc<GoalLineage>, ExprRef>,
    pub(crate) candidates: HashMap<Rc<GoalLineage>, Vec<RuleId>>,
    pub(crate) resolutions: HashSet<Rc<ResolutionLineage>>,
}

impl EngineState {
    pub(crate) fn new(occurs_check: bool) -> Self {
        EngineState {
            sequencer: Sequencer::new(),
            pool: ExprPool::new(),
            bind_map: BindMap::new(occurs_check),
            lineage_pool: LineagePool::new(),
            goals: HashMap::new(),
            candidates: HashMap::new(),
            resolutions: HashSet::new(),
        }
    }
}
