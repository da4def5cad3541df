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

//! The facade tying the pool, trail, bind map, lineage pool and stores
//! together, and exposing the driver-facing operators (§4.9–§4.12).

use std::rc::Rc;

use crate::elimination;
use crate::expr::ExprRef;
use crate::goal_adder;
use crate::lineage::{GoalLineage, ResolutionLineage};
use crate::normalize;
use crate::resolver;
use crate::rule::{Rule, RuleId};
use crate::state::EngineState;
use crate::trail::Trail;

/// The resolution core: a read-only rule database plus all mutable
/// proof-search state, mutated exclusively through trail-journaled frames.
pub struct Engine {
    pub(crate) database: Vec<Rule>,
    pub(crate) trail: Trail,
    pub(crate) state: EngineState,
    initial_goal: Option<ExprRef>,
}

impl Engine {
    /// `occurs_check` resolves the open question in §9 of the design notes:
    /// the source omits an occurs-check. Pass `false` to preserve that
    /// behavior unchanged.
    pub fn new(database: Vec<Rule>, occurs_check: bool) -> Self {
        Engine {
            database,
            trail: Trail::new(),
            state: EngineState::new(occurs_check),
            initial_goal: None,
        }
    }

    pub fn database(&self) -> &[Rule] {
        &self.database
    }

    /// Replaces the rule database. Meant for building a database with
    /// [`crate::text::parse_rule`], which needs an `Engine` to intern its
    /// expressions into — callers construct an empty engine, parse rules
    /// with it, then install the resulting database before `initialize`.
    pub fn set_database(&mut self, database: Vec<Rule>) {
        self.database = database;
    }

    // -- Expression constructors (§4.1) --------------------------------

    pub fn atom(&mut self, s: &str) -> ExprRef {
        self.state.pool.atom(&mut self.trail, s)
    }

    pub fn var(&mut self, index: u32) -> ExprRef {
        self.state.pool.var(&mut self.trail, index)
    }

    pub fn pair(&mut self, lhs: ExprRef, rhs: ExprRef) -> ExprRef {
        self.state.pool.pair(&mut self.trail, lhs, rhs)
    }

    pub fn fresh_var(&mut self) -> u32 {
        self.state.sequencer.next(&mut self.trail)
    }

    pub fn pool_size(&self) -> usize {
        self.state.pool.size()
    }

    // -- Driver API (§6) -------------------------------------------------

    /// Installs `root_goal` as the top-level goal and returns its lineage.
    pub fn initialize(&mut self, root_goal: ExprRef) -> Rc<GoalLineage> {
        let gl = self.state.lineage_pool.root();
        goal_adder::add_goal(self, gl.clone(), root_goal.clone());
        self.initial_goal = Some(root_goal);
        gl
    }

    pub fn open_goals(&self) -> impl Iterator<Item = &Rc<GoalLineage>> {
        self.state.goals.keys()
    }

    pub fn is_solved(&self) -> bool {
        self.state.goals.is_empty()
    }

    pub fn goal_expr(&self, gl: &Rc<GoalLineage>) -> &ExprRef {
        self.state
            .goals
            .get(gl)
            .expect("goal_expr: goal lineage not present in Goals")
    }

    pub fn candidates(&self, gl: &Rc<GoalLineage>) -> impl Iterator<Item = RuleId> + '_ {
        self.state
            .candidates
            .get(gl)
            .into_iter()
            .flat_map(|ids| ids.iter().copied())
    }

    pub fn is_eliminated(&mut self, gl: &Rc<GoalLineage>, rule_id: RuleId) -> bool {
        elimination::is_eliminated(self, gl, rule_id)
    }

    /// Performs one resolution step (§4.11). Returns `false` on unification
    /// failure — the caller must have already opened a trail frame and is
    /// responsible for rolling it back.
    pub fn resolve(&mut self, gl: &Rc<GoalLineage>, rule_id: RuleId) -> bool {
        resolver::resolve(self, gl, rule_id)
    }

    pub fn push(&mut self) {
        self.trail.push();
    }

    pub fn pop(&mut self) {
        self.trail.pop(&mut self.state);
    }

    pub fn trail_depth(&self) -> usize {
        self.trail.depth()
    }

    /// `normalize(root_goal)` under the bindings currently installed.
    ///
    /// Panics if `initialize` has not been called yet.
    pub fn snapshot_answer(&mut self) -> ExprRef {
        let root = self
            .initial_goal
            .clone()
            .expect("snapshot_answer: initialize() has not been called");
        normalize::normalize(&mut self.state.pool, &mut self.state.bind_map, &mut self.trail, &root)
    }

    // -- Lineage lifecycle (§4.7) -----------------------------------------

    pub fn pin_goal(&mut self, gl: &Rc<GoalLineage>) {
        self.state.lineage_pool.pin_goal(gl);
    }

    pub fn pin_resolution(&mut self, rl: &Rc<ResolutionLineage>) {
        self.state.lineage_pool.pin_resolution(rl);
    }

    /// Pins every lineage node currently reachable from `Goals` or
    /// `Resolutions`, then trims. A convenience for drivers that want to
    /// reclaim abandoned branches between top-level queries without
    /// manually walking the live stores first.
    pub fn trim(&mut self) {
        let live_goals: Vec<_> = self.state.goals.keys().cloned().collect();
        for gl in &live_goals {
            self.state.lineage_pool.pin_goal(gl);
        }
        let live_resolutions: Vec<_> = self.state.resolutions.iter().cloned().collect();
        for rl in &live_resolutions {
            self.state.lineage_pool.pin_resolution(rl);
        }
        self.state.lineage_pool.trim();
    }

    pub fn lineage_pool_size(&self) -> usize {
        self.state.lineage_pool.size()
    }
}
