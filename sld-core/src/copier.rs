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

//! Produces copies of expressions with a private, per-invocation variable
//! renaming — how a rule's head and body are instantiated with fresh
//! variables before being unified against a goal.

use std::collections::HashMap;

use crate::expr::{ExprKind, ExprPool, ExprRef};
use crate::sequencer::Sequencer;
use crate::trail::Trail;

/// Copies `e`, replacing every variable with a fresh id drawn from
/// `sequencer`. `renaming` is shared across every expression copied within
/// one rule instantiation so two occurrences of the same source variable
/// map to the same fresh variable.
pub fn copy(
    pool: &mut ExprPool,
    sequencer: &mut Sequencer,
    trail: &mut Trail,
    renaming: &mut HashMap<u32, u32>,
    e: &ExprRef,
) -> ExprRef {
    match &**e {
        ExprKind::Atom(_) => e.clone(),
        ExprKind::Var(idx) => {
            let fresh = *renaming
                .entry(*idx)
                .or_insert_with(|| sequencer.next(trail));
            pool.var(trail, fresh)
        }
        ExprKind::Pair(l, r) => {
            let l2 = copy(pool, sequencer, trail, renaming, l);
            let r2 = copy(pool, sequencer, trail, renaming, r);
            pool.pair(trail, l2, r2)
        }
    }
}
