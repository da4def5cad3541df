// This file is part of sld-demo.

// sld-demo is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// sld-demo is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with sld-demo.  If not, see <https://www.gnu.org/licenses/>.

//! Runs a small hardcoded rule database through sld-core's reference
//! depth-first driver and prints whatever proofs it finds. No source
//! parsing or CLI flags: that surface belongs to a real caller, not this
//! engine's core.

use thiserror::Error;

use sld_core::{parse_goal, parse_rule, DepthFirstSearch, Engine};

#[derive(Debug, Error)]
enum DemoError {
    #[error("no proof found for the goal")]
    NoProof,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("sld-demo: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), DemoError> {
    // q(?Y) :- r(?Y).
    // r(c) :- .
    let mut engine = Engine::new(Vec::new(), false);
    let r0 = parse_rule(&mut engine, "q(?Y) :- r(?Y).");
    let r1 = parse_rule(&mut engine, "r(c) :- .");
    engine.set_database(vec![r0, r1]);

    let goal = parse_goal(&mut engine, "q(?Z)");
    engine.initialize(goal);

    let answers = DepthFirstSearch::new(&mut engine).run();
    if answers.is_empty() {
        return Err(DemoError::NoProof);
    }

    for answer in &answers {
        println!("{:?}", answer);
    }
    println!("{} proof(s) found", answers.len());
    Ok(())
}
