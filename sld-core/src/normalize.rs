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

//! Fully dereferences an expression under the current bindings, for
//! presenting answers. Not used inside unification itself.

use crate::bind::BindMap;
use crate::expr::{ExprKind, ExprPool, ExprRef};
use crate::trail::Trail;

pub fn normalize(pool: &mut ExprPool, bind_map: &mut BindMap, trail: &mut Trail, e: &ExprRef) -> ExprRef {
    let e = bind_map.whnf(trail, e);
    let kind = (*e).clone();
    match kind {
        ExprKind::Atom(_) | ExprKind::Var(_) => e,
        ExprKind::Pair(l, r) => {
            let nl = normalize(pool, bind_map, trail, &l);
            let nr = normalize(pool, bind_map, trail, &r);
            pool.pair(trail, nl, nr)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_resolves_nested_bindings() {
        let mut trail = Trail::new();
        let mut pool = ExprPool::new();
        let mut bind_map = BindMap::new(false);

        let c = pool.atom(&mut trail, "c");
        let v1 = pool.var(&mut trail, 1);
        let v0 = pool.var(&mut trail, 0);
        let goal = pool.pair(&mut trail, v0.clone(), v0.clone());

        trail.push();
        assert!(bind_map.unify(&mut trail, &v0, &v1));
        assert!(bind_map.unify(&mut trail, &v1, &c));

        let answer = normalize(&mut pool, &mut bind_map, &mut trail, &goal);
        let expected = pool.pair(&mut trail, c.clone(), c);
        assert_eq!(answer, expected);
    }

    #[test]
    fn normalize_leaves_unbound_variables_alone() {
        let mut trail = Trail::new();
        let mut pool = ExprPool::new();
        let mut bind_map = BindMap::new(false);
        let v0 = pool.var(&mut trail, 0);
        let answer = normalize(&mut pool, &mut bind_map, &mut trail, &v0);
        assert_eq!(answer, v0);
    }
}
