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

//! §4.9: inserts a goal and enumerates every rule index in the database as
//! a candidate for it. Filtering happens later, via the head-elimination
//! detector — this stage is deliberately maximal.

use std::rc::Rc;

use crate::engine::Engine;
use crate::expr::ExprRef;
use crate::lineage::GoalLineage;
use crate::rule::RuleId;

pub(crate) fn add_goal(engine: &mut Engine, gl: Rc<GoalLineage>, e: ExprRef) {
    let gl_for_goals_undo = gl.clone();
    engine.state.goals.insert(gl.clone(), e);
    engine.trail.log(move |state| {
        state.goals.remove(&gl_for_goals_undo);
    });

    let candidate_ids: Vec<RuleId> = (0..engine.database.len()).collect();
    let gl_for_candidates_undo = gl.clone();
    engine.state.candidates.insert(gl.clone(), candidate_ids);
    engine.trail.log(move |state| {
        state.candidates.remove(&gl_for_candidates_undo);
    });
}
