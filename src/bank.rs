// Pending particle calls of one cascade.
//
// The bank is a LIFO stack. Secondaries are pushed in reverse so that they pop
// in the order the process model listed them, and each child's whole subtree
// is finished before its next sibling starts. Processing order, and therefore
// draw order, matches a depth-first recursion while the call stack stays flat.

use crate::particle::ParticleCall;

/// Stack of particles waiting to be transported.
#[derive(Debug, Clone)]
pub struct ParticleBank {
    stack: Vec<ParticleCall>,
    /// Largest number of particles held at once
    high_water: usize,
}

impl ParticleBank {
    /// Create a new empty particle bank
    pub fn new() -> Self {
        ParticleBank {
            stack: Vec::new(),
            high_water: 0,
        }
    }

    /// Add a primary particle to the bank
    pub fn add_source_particle(&mut self, particle: ParticleCall) {
        self.stack.push(particle);
        self.high_water = self.high_water.max(self.stack.len());
    }

    /// Bank the secondaries of one branching, first child on top
    pub fn bank_secondaries(&mut self, secondaries: Vec<ParticleCall>) {
        self.stack.extend(secondaries.into_iter().rev());
        self.high_water = self.high_water.max(self.stack.len());
    }

    /// Next particle to transport, or None once the cascade is finished
    pub fn pop_particle(&mut self) -> Option<ParticleCall> {
        self.stack.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl Default for ParticleBank {
    fn default() -> Self {
        Self::new()
    }
}
