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

//! §4.12: the core does not prescribe a search strategy — it only exposes
//! the goal/candidate iterators, `push`/`pop`, and `resolve`. This module
//! is a minimal, correct depth-first reference strategy built entirely on
//! that surface; it is not part of the core's contract and a caller is
//! free to ignore it and drive `Engine` directly with a different strategy
//! (iterative deepening, best-first, interactive).

use crate::engine::Engine;
use crate::expr::ExprRef;

/// Exhaustive depth-first search over one `Engine`'s open goals, trying
/// candidates in the order `candidates()` yields them.
pub struct DepthFirstSearch<'a> {
    engine: &'a mut Engine,
    max_solutions: usize,
}

impl<'a> DepthFirstSearch<'a> {
    pub fn new(engine: &'a mut Engine) -> Self {
        DepthFirstSearch {
            engine,
            max_solutions: usize::MAX,
        }
    }

    pub fn limit(mut self, max_solutions: usize) -> Self {
        self.max_solutions = max_solutions;
        self
    }

    /// Explores every proof of the goal installed by `Engine::initialize`,
    /// returning one normalized answer per solution found (up to the
    /// configured limit).
    pub fn run(&mut self) -> Vec<ExprRef> {
        let mut solutions = Vec::new();
        self.search(&mut solutions);
        solutions
    }

    fn search(&mut self, solutions: &mut Vec<ExprRef>) {
        if solutions.len() >= self.max_solutions {
            return;
        }
        if self.engine.is_solved() {
            solutions.push(self.engine.snapshot_answer());
            return;
        }

        let gl = match self.engine.open_goals().next().cloned() {
            Some(gl) => gl,
            None => return,
        };
        let candidates: Vec<_> = self.engine.candidates(&gl).collect();

        for rule_id in candidates {
            if self.engine.is_eliminated(&gl, rule_id) {
                continue;
            }

            #[cfg(debug_assertions)]
            eprintln!("sld-core: trying rule {} for goal lineage {:?}", rule_id, gl);

            self.engine.push();
            let resolved = self.engine.resolve(&gl, rule_id);
            if resolved {
                self.search(solutions);
            }
            self.engine.pop();

            if solutions.len() >= self.max_solutions {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use crate::text;

    #[test]
    fn s1_identity() {
        let mut engine = Engine::new(Vec::new(), false);
        let rule = text::parse_rule(&mut engine, "foo :- .");
        engine.database = vec![rule];
        let goal = text::parse_goal(&mut engine, "foo");
        engine.initialize(goal);

        let answers = DepthFirstSearch::new(&mut engine).run();
        assert_eq!(answers.len(), 1);
        let expected = engine.atom("foo");
        assert_eq!(answers[0], expected);
    }

    #[test]
    fn s2_single_variable_two_solutions() {
        let mut engine = Engine::new(Vec::new(), false);
        let r0 = text::parse_rule(&mut engine, "p(a) :- .");
        let r1 = text::parse_rule(&mut engine, "p(b) :- .");
        engine.database = vec![r0, r1];
        let goal = text::parse_goal(&mut engine, "p(?X)");
        engine.initialize(goal);

        let answers = DepthFirstSearch::new(&mut engine).run();
        assert_eq!(answers.len(), 2);

        let want_a = text::parse_goal(&mut engine, "p(a)");
        let want_b = text::parse_goal(&mut engine, "p(b)");
        assert!(answers.contains(&want_a));
        assert!(answers.contains(&want_b));
    }

    #[test]
    fn s3_chained_resolution() {
        let mut engine = Engine::new(Vec::new(), false);
        let r0 = text::parse_rule(&mut engine, "q(?Y) :- r(?Y).");
        let r1 = text::parse_rule(&mut engine, "r(c) :- .");
        engine.database = vec![r0, r1];
        let goal = text::parse_goal(&mut engine, "q(?Z)");
        engine.initialize(goal);

        let answers = DepthFirstSearch::new(&mut engine).run();
        assert_eq!(answers.len(), 1);
        let want = text::parse_goal(&mut engine, "q(c)");
        assert_eq!(answers[0], want);
    }

    #[test]
    fn s4_failure_then_backtrack_to_success() {
        let mut engine = Engine::new(Vec::new(), false);
        let r0 = text::parse_rule(&mut engine, "s(a) :- .");
        let r1 = text::parse_rule(&mut engine, "s(b) :- t.");
        let r2 = text::parse_rule(&mut engine, "t :- .");
        engine.database = vec![r0, r1, r2];
        let goal = text::parse_goal(&mut engine, "s(b)");
        engine.initialize(goal);

        let answers = DepthFirstSearch::new(&mut engine).run();
        assert_eq!(answers.len(), 1);
        let want = text::parse_goal(&mut engine, "s(b)");
        assert_eq!(answers[0], want);
    }

    #[test]
    fn trim_after_full_search_discards_backtracked_lineages() {
        let mut engine = Engine::new(Vec::new(), false);
        let r0 = text::parse_rule(&mut engine, "s(a) :- .");
        let r1 = text::parse_rule(&mut engine, "s(b) :- t.");
        let r2 = text::parse_rule(&mut engine, "t :- .");
        engine.database = vec![r0, r1, r2];
        let goal = text::parse_goal(&mut engine, "s(b)");
        engine.initialize(goal);
        assert_eq!(engine.lineage_pool_size(), 1); // just the root goal lineage

        let answers = DepthFirstSearch::new(&mut engine).run();
        assert_eq!(answers.len(), 1);

        // The rule-1/rule-2 branch minted a resolution lineage and a child
        // goal lineage along the way; a full exhaustive search backtracks
        // past all of them, so nothing but the root goal is live anymore.
        assert!(engine.lineage_pool_size() > 1);
        engine.trim();
        assert_eq!(engine.lineage_pool_size(), 1);
    }

    #[test]
    fn s5_elimination_prefilter() {
        let mut engine = Engine::new(Vec::new(), false);
        let r0 = text::parse_rule(&mut engine, "u(a) :- .");
        let r1 = text::parse_rule(&mut engine, "u(b) :- .");
        engine.database = vec![r0, r1];
        let goal = text::parse_goal(&mut engine, "u(a)");
        let gl = engine.initialize(goal);

        assert!(!engine.is_eliminated(&gl, 0));
        assert!(engine.is_eliminated(&gl, 1));
    }

    #[test]
    fn s6_deep_pair_unification() {
        let mut engine = Engine::new(Vec::new(), false);
        let rule = text::parse_rule(&mut engine, "pair(?X,?X) :- .");
        engine.database = vec![rule];
        let goal = text::parse_goal(&mut engine, "pair(cons(a,b), cons(a,b))");
        engine.initialize(goal);

        let answers = DepthFirstSearch::new(&mut engine).run();
        assert_eq!(answers.len(), 1);
        let want = text::parse_goal(&mut engine, "pair(cons(a,b), cons(a,b))");
        assert_eq!(answers[0], want);
    }

    #[test]
    fn no_proof_found_yields_no_solutions() {
        let mut engine = Engine::new(Vec::new(), false);
        let rule = text::parse_rule(&mut engine, "p(a) :- .");
        engine.database = vec![rule];
        let goal = text::parse_goal(&mut engine, "p(b)");
        engine.initialize(goal);

        let answers = DepthFirstSearch::new(&mut engine).run();
        assert!(answers.is_empty());
    }

    #[test]
    fn limit_stops_search_after_the_requested_count() {
        let mut engine = Engine::new(Vec::new(), false);
        let rules: Vec<Rule> = ["a", "b", "c"]
            .iter()
            .map(|name| text::parse_rule(&mut engine, &format!("p({}) :- .", name)))
            .collect();
        engine.database = rules;
        let goal = text::parse_goal(&mut engine, "p(?X)");
        engine.initialize(goal);

        let answers = DepthFirstSearch::new(&mut engine).limit(1).run();
        assert_eq!(answers.len(), 1);
    }
}
