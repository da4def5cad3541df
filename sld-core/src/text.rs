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

//! A minimal textual notation for writing rules and goals by hand.
//!
//! This exists purely for convenience in tests and small demonstrations —
//! parsing of an actual source language is an external collaborator the
//! core does not implement. Syntax: atoms are lowercase identifiers,
//! variables are `?Name`, and a compound term `f(a1, a2, ...)` desugars
//! into a nil-terminated chain of pairs headed by the functor atom, since
//! {Atom, Var, Pair} is the only shape a compound term can take.

use std::collections::HashMap;

use crate::engine::Engine;
use crate::expr::ExprRef;
use crate::rule::Rule;

#[derive(Clone, Debug, PartialEq)]
enum TermAst {
    Atom(String),
    Var(String),
    App(String, Vec<TermAst>),
}

#[derive(Clone, Debug, PartialEq)]
struct RuleAst {
    head: TermAst,
    body: Vec<TermAst>,
}

/// Parses and lowers a single term, e.g. `p(a, ?X)`.
///
/// Panics on a syntax error; this notation is for hand-written tests and
/// demos, not for parsing untrusted input.
pub fn parse_goal(engine: &mut Engine, input: &str) -> ExprRef {
    let (rest, ast) = parser::term(input.trim()).expect("parse_goal: invalid term syntax");
    assert!(rest.trim().is_empty(), "parse_goal: trailing input {:?}", rest);
    let mut vars = HashMap::new();
    lower_term(engine, &mut vars, &ast)
}

/// Parses and lowers a single clause, e.g. `q(?Y) :- r(?Y).`.
///
/// A clause with no body (`foo :- .`) is a fact. Variable names are scoped
/// to this single call: `?X` in one `parse_rule` call is unrelated to `?X`
/// in another.
pub fn parse_rule(engine: &mut Engine, input: &str) -> Rule {
    let (rest, ast) = parser::rule(input.trim()).expect("parse_rule: invalid rule syntax");
    assert!(rest.trim().is_empty(), "parse_rule: trailing input {:?}", rest);
    let mut vars = HashMap::new();
    let head = lower_term(engine, &mut vars, &ast.head);
    let body = ast
        .body
        .iter()
        .map(|t| lower_term(engine, &mut vars, t))
        .collect();
    Rule::new(head, body)
}

fn lower_term(engine: &mut Engine, vars: &mut HashMap<String, u32>, t: &TermAst) -> ExprRef {
    match t {
        TermAst::Atom(s) => engine.atom(s),
        TermAst::Var(name) => {
            let idx = *vars.entry(name.clone()).or_insert_with(|| engine.fresh_var());
            engine.var(idx)
        }
        TermAst::App(functor, args) => {
            let mut list = engine.atom("nil");
            for a in args.iter().rev() {
                let ae = lower_term(engine, vars, a);
                list = engine.pair(ae, list);
            }
            let head = engine.atom(functor);
            engine.pair(head, list)
        }
    }
}

mod parser {
    use super::{RuleAst, TermAst};
    use nom::branch::alt;
    use nom::bytes::complete::tag;
    use nom::character::complete::{alpha1, alphanumeric1, char, multispace0};
    use nom::combinator::{map, opt, recognize};
    use nom::multi::{many0, separated_list0, separated_list1};
    use nom::sequence::{delimited, pair, preceded, separated_pair, terminated};
    use nom::IResult;

    fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
    where
        F: FnMut(&'a str) -> IResult<&'a str, O>,
    {
        delimited(multispace0, inner, multispace0)
    }

    fn identifier(i: &str) -> IResult<&str, &str> {
        recognize(pair(
            alpha1,
            many0(alt((alphanumeric1, tag("_"), tag("-")))),
        ))(i)
    }

    fn var_ref(i: &str) -> IResult<&str, TermAst> {
        map(preceded(char('?'), identifier), |s: &str| {
            TermAst::Var(s.to_string())
        })(i)
    }

    fn app_or_atom(i: &str) -> IResult<&str, TermAst> {
        map(
            pair(
                identifier,
                opt(delimited(
                    terminated(char('('), multispace0),
                    separated_list1(ws(char(',')), term),
                    preceded(multispace0, char(')')),
                )),
            ),
            |(name, args): (&str, Option<Vec<TermAst>>)| match args {
                Some(args) => TermAst::App(name.to_string(), args),
                None => TermAst::Atom(name.to_string()),
            },
        )(i)
    }

    pub(super) fn term(i: &str) -> IResult<&str, TermAst> {
        alt((var_ref, app_or_atom))(i)
    }

    pub(super) fn rule(i: &str) -> IResult<&str, RuleAst> {
        map(
            terminated(
                separated_pair(term, ws(tag(":-")), separated_list0(ws(char(',')), term)),
                pair(multispace0, opt(char('.'))),
            ),
            |(head, body)| RuleAst { head, body },
        )(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;

    #[test]
    fn parses_a_bare_atom_goal() {
        let mut engine = Engine::new(Vec::new(), false);
        let parsed = parse_goal(&mut engine, "foo");
        let expected = engine.atom("foo");
        assert_eq!(parsed, expected);
    }

    #[test]
    fn parses_a_compound_term_as_nil_terminated_pairs() {
        let mut engine = Engine::new(Vec::new(), false);
        let parsed = parse_goal(&mut engine, "p(a)");

        let nil = engine.atom("nil");
        let a = engine.atom("a");
        let args = engine.pair(a, nil);
        let head = engine.atom("p");
        let expected = engine.pair(head, args);

        assert_eq!(parsed, expected);
    }

    #[test]
    fn repeated_variable_in_one_rule_shares_an_id() {
        let mut engine = Engine::new(Vec::new(), false);
        let rule = parse_rule(&mut engine, "pair(?X,?X) :- .");
        match &*rule.head {
            crate::expr::ExprKind::Pair(_, args) => match &**args {
                crate::expr::ExprKind::Pair(x1, rest) => match &**rest {
                    crate::expr::ExprKind::Pair(x2, _) => assert_eq!(x1, x2),
                    _ => panic!("expected nested pair"),
                },
                _ => panic!("expected nested pair"),
            },
            _ => panic!("expected a pair"),
        }
    }

    #[test]
    fn a_fact_has_an_empty_body() {
        let mut engine = Engine::new(Vec::new(), false);
        let rule = parse_rule(&mut engine, "foo :- .");
        assert!(rule.body.is_empty());
    }

    #[test]
    fn a_rule_with_a_multi_literal_body_parses_each_literal() {
        let mut engine = Engine::new(Vec::new(), false);
        let rule = parse_rule(&mut engine, "w :- a, b, c.");
        assert_eq!(rule.body.len(), 3);
    }
}
