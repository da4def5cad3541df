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

//! §4.11: one resolution step. Erases the goal, mints a resolution lineage,
//! copies the chosen rule's head and body with a fresh renaming, unifies
//! the copied head with the goal, and spawns a child goal per body literal.

use std::collections::HashMap;
use std::rc::Rc;

use crate::copier;
use crate::engine::Engine;
use crate::goal_adder;
use crate::lineage::GoalLineage;
use crate::rule::RuleId;

pub(crate) fn resolve(engine: &mut Engine, gl: &Rc<GoalLineage>, rule_id: RuleId) -> bool {
    let goal = engine
        .state
        .goals
        .get(gl)
        .expect("resolve: goal lineage not present in Goals")
        .clone();

    // 2. journal-erase (gl, ·) from Goals and Candidates.
    let removed_goal = engine.state.goals.remove(gl);
    let gl_for_goal_undo = gl.clone();
    engine.trail.log(move |state| {
        if let Some(e) = removed_goal {
            state.goals.insert(gl_for_goal_undo, e);
        }
    });

    let removed_candidates = engine.state.candidates.remove(gl);
    let gl_for_candidates_undo = gl.clone();
    engine.trail.log(move |state| {
        if let Some(ids) = removed_candidates {
            state.candidates.insert(gl_for_candidates_undo, ids);
        }
    });

    // 3. mint rl, insert into Resolutions.
    let rl = engine.state.lineage_pool.resolution(gl.clone(), rule_id);
    engine.state.resolutions.insert(rl.clone());
    let rl_for_undo = rl.clone();
    engine.trail.log(move |state| {
        state.resolutions.remove(&rl_for_undo);
    });

    // 4. copy head and body through a shared per-call renaming.
    let rule = engine.database[rule_id].clone();
    let mut renaming = HashMap::new();
    let copied_head = copier::copy(
        &mut engine.state.pool,
        &mut engine.state.sequencer,
        &mut engine.trail,
        &mut renaming,
        &rule.head,
    );
    let copied_body: Vec<_> = rule
        .body
        .iter()
        .map(|b| {
            copier::copy(
                &mut engine.state.pool,
                &mut engine.state.sequencer,
                &mut engine.trail,
                &mut renaming,
                b,
            )
        })
        .collect();

    // 5. unify the copied head with the goal.
    if !engine.state.bind_map.unify(&mut engine.trail, &copied_head, &goal) {
        return false;
    }

    // 6. spawn a child goal per body literal.
    for (j, b) in copied_body.into_iter().enumerate() {
        let child_gl = engine.state.lineage_pool.goal(Some(rl.clone()), j);
        goal_adder::add_goal(engine, child_gl, b);
    }

    true
}
