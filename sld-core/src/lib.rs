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

//! Trail-backtracked SLD resolution: interned expressions, a journaled
//! bind map, lineage-tracked goals, and the operators that turn a rule
//! database and a goal into a proof search. Choice ordering (which goal,
//! which candidate, when to give up) is left to a collaborator — see
//! [`driver::DepthFirstSearch`] for a minimal reference strategy built on
//! the same public surface a caller can use directly.

mod bind;
mod copier;
mod driver;
mod elimination;
mod engine;
mod expr;
mod goal_adder;
mod lineage;
mod normalize;
mod resolver;
mod rule;
mod sequencer;
mod state;
mod text;
mod trail;

pub use bind::BindMap;
pub use driver::DepthFirstSearch;
pub use engine::Engine;
pub use expr::{ExprKind, ExprPool, ExprRef};
pub use lineage::{GoalLineage, LineagePool, ResolutionLineage};
pub use rule::{Rule, RuleId};
pub use sequencer::Sequencer;
pub use text::{parse_goal, parse_rule};
pub use trail::Trail;
