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

//! §4.10: a cheap prefilter that rejects a candidate rule whose head cannot
//! possibly unify with a goal, without paying for a fresh copy. False
//! negatives are fine — the real test still runs inside the resolver
//! against a copied head.

use std::rc::Rc;

use crate::engine::Engine;
use crate::lineage::GoalLineage;
use crate::rule::RuleId;

pub(crate) fn is_eliminated(engine: &mut Engine, gl: &Rc<GoalLineage>, rule_id: RuleId) -> bool {
    let goal = engine
        .state
        .goals
        .get(gl)
        .expect("is_eliminated: goal lineage not present in Goals")
        .clone();
    let head = engine.database[rule_id].head.clone();

    engine.trail.push();
    let unified = engine.state.bind_map.unify(&mut engine.trail, &goal, &head);
    engine.trail.pop(&mut engine.state);

    !unified
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    #[test]
    fn incompatible_head_is_eliminated() {
        let mut engine = Engine::new(Vec::new(), false);
        let u_a = build_compound(&mut engine, "u", &["a"]);
        let u_b = build_compound(&mut engine, "u", &["b"]);
        engine.database = vec![Rule::new(u_a.clone(), vec![]), Rule::new(u_b, vec![])];

        let gl = engine.initialize(u_a);
        assert!(!is_eliminated(&mut engine, &gl, 0));
        assert!(is_eliminated(&mut engine, &gl, 1));
    }

    #[test]
    fn elimination_never_leaves_bindings_installed() {
        let mut engine = Engine::new(Vec::new(), false);
        let v0 = engine.var(0);
        let goal = build_compound(&mut engine, "p", &["unused"]);
        let _ = goal; // only v0 is probed below
        let a = engine.atom("a");
        engine.database = vec![Rule::new(a.clone(), vec![])];
        let gl = engine.initialize(v0.clone());

        assert!(!is_eliminated(&mut engine, &gl, 0));
        assert_eq!(engine.trail_depth(), 0);
    }

    fn build_compound(engine: &mut Engine, functor: &str, args: &[&str]) -> crate::expr::ExprRef {
        let mut list = engine.atom("nil");
        for a in args.iter().rev() {
            let ae = engine.atom(a);
            list = engine.pair(ae, list);
        }
        let head = engine.atom(functor);
        engine.pair(head, list)
    }
}
