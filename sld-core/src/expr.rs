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

//! Immutable, interned expressions: atoms, logic variables, and pairs.

use std::collections::HashSet;
use std::rc::Rc;

use crate::trail::Trail;

/// A single expression node. Atoms carry an owned string; variables an
/// index minted by a [`crate::sequencer::Sequencer`]; pairs two child
/// handles, forming the only compound shape the model has.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ExprKind {
    Atom(Rc<str>),
    Var(u32),
    Pair(ExprRef, ExprRef),
}

/// A handle to an interned expression. The pool guarantees two calls with
/// structurally equal arguments return the same handle, so `Rc::ptr_eq`
/// and `==` agree.
pub type ExprRef = Rc<ExprKind>;

/// Hash-consing pool for [`ExprKind`] values.
///
/// Every insertion of a previously-unseen expression is journaled on the
/// trail; rolling back past the frame that created an expression removes
/// it from the pool again, so stale `ExprRef`s from an abandoned branch
/// must not be dereferenced after the matching `pop()`.
pub struct ExprPool {
    interned: HashSet<ExprRef>,
}

impl ExprPool {
    pub fn new() -> Self {
        ExprPool {
            interned: HashSet::new(),
        }
    }

    pub fn atom(&mut self, trail: &mut Trail, s: &str) -> ExprRef {
        self.intern(trail, ExprKind::Atom(Rc::from(s)))
    }

    pub fn var(&mut self, trail: &mut Trail, index: u32) -> ExprRef {
        self.intern(trail, ExprKind::Var(index))
    }

    pub fn pair(&mut self, trail: &mut Trail, lhs: ExprRef, rhs: ExprRef) -> ExprRef {
        self.intern(trail, ExprKind::Pair(lhs, rhs))
    }

    pub fn size(&self) -> usize {
        self.interned.len()
    }

    fn intern(&mut self, trail: &mut Trail, e: ExprKind) -> ExprRef {
        if let Some(existing) = self.interned.get(&e) {
            return existing.clone();
        }
        let r: ExprRef = Rc::new(e);
        self.interned.insert(r.clone());
        let undo_key = r.clone();
        trail.log(move |state| {
            state.pool.interned.remove(&undo_key);
        });
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trail::Trail;

    #[test]
    fn atoms_with_equal_text_are_identical() {
        let mut pool = ExprPool::new();
        let mut trail = Trail::new();
        let a = pool.atom(&mut trail, "foo");
        let b = pool.atom(&mut trail, "foo");
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn pairs_with_equal_children_are_identical() {
        let mut pool = ExprPool::new();
        let mut trail = Trail::new();
        let a = pool.atom(&mut trail, "a");
        let b = pool.atom(&mut trail, "b");
        let p1 = pool.pair(&mut trail, a.clone(), b.clone());
        let p2 = pool.pair(&mut trail, a, b);
        assert!(Rc::ptr_eq(&p1, &p2));
    }

    #[test]
    fn distinct_atoms_are_distinct() {
        let mut pool = ExprPool::new();
        let mut trail = Trail::new();
        let a = pool.atom(&mut trail, "a");
        let b = pool.atom(&mut trail, "b");
        assert!(!Rc::ptr_eq(&a, &b));
        assert_ne!(a, b);
    }
}
