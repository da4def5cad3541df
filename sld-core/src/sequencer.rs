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

//! Monotone allocator of fresh variable ids.
//!
//! Deliberately instance-owned rather than a process-global counter: two
//! `Engine`s never share ids, and rollback is strictly LIFO so two
//! overlapping `copy` calls can never be handed the same id.

use crate::trail::Trail;

pub struct Sequencer {
    next: u32,
}

impl Sequencer {
    pub fn new() -> Self {
        Sequencer { next: 0 }
    }

    pub fn next(&mut self, trail: &mut Trail) -> u32 {
        let id = self.next;
        self.next += 1;
        trail.log(move |state| {
            state.sequencer.next -= 1;
        });
        id
    }
}
