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

//! A single Horn clause: a head expression plus an ordered body.

use crate::expr::ExprRef;

/// Index into a [`crate::engine::Engine`]'s rule database. Rules are stable
/// for the database's lifetime and addressed by this zero-based position.
pub type RuleId = usize;

#[derive(Clone, Debug)]
pub struct Rule {
    pub head: ExprRef,
    pub body: Vec<ExprRef>,
}

impl Rule {
    pub fn new(head: ExprRef, body: Vec<ExprRef>) -> Self {
        Rule { head, body }
    }
}
