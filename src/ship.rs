use std::iter::from_fn;

use crate::error::Error;

/// A single labeled crate. There is no identity beyond the label, so two
/// crates marked `[A]` are interchangeable.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Crate(pub char);

/// One rearrangement instruction, carrying the 1-based stack references
/// exactly as they appear in the input.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Move {
    pub count: usize,
    pub from: usize,
    pub to: usize,
}

/// Which crane carries out the moves.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Crane {
    /// Moves crates one at a time, so a moved run lands in reverse order.
    CrateMover9000,
    /// Picks up the whole run at once, preserving its order.
    CrateMover9001,
}

/// The stacks on the ship, in diagram order. Each stack reads
/// bottom-to-top. Moves shuffle crates between stacks but never add or
/// remove a stack.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Ship {
    stacks: Vec<Vec<Crate>>,
}

impl Ship {
    pub fn new(stacks: Vec<Vec<Crate>>) -> Ship {
        Ship { stacks }
    }

    fn stack_mut(&mut self, reference: usize) -> Result<&mut Vec<Crate>, Error> {
        let stacks = self.stacks.len();

        reference
            .checked_sub(1)
            .and_then(|i| self.stacks.get_mut(i))
            .ok_or(Error::StackOutOfRange {
                stack: reference,
                stacks,
            })
    }

    pub fn perform(&mut self, crane: Crane, m: Move) -> Result<(), Error> {
        // Check the destination before touching the source, so a failed
        // move leaves the ship as it was.
        self.stack_mut(m.to)?;

        let from = self.stack_mut(m.from)?;
        if from.len() < m.count {
            return Err(Error::InsufficientCrates {
                stack: m.from,
                wanted: m.count,
                available: from.len(),
            });
        }

        // Two stacks can't be borrowed out of the vec at once, so the
        // moved crates sit here in the interim, in pop order (top first).
        let mut carried = Vec::with_capacity(m.count);
        carried.extend(from_fn(|| from.pop()).take(m.count));

        let to = self.stack_mut(m.to)?;
        match crane {
            Crane::CrateMover9000 => to.extend(carried),
            Crane::CrateMover9001 => to.extend(carried.into_iter().rev()),
        }

        Ok(())
    }

    pub fn perform_all(&mut self, crane: Crane, moves: &[Move]) -> Result<(), Error> {
        moves.iter().try_for_each(|&m| self.perform(crane, m))
    }

    /// The top crate label of every stack, in stack order.
    pub fn tops(&self) -> Result<String, Error> {
        self.stacks
            .iter()
            .enumerate()
            .map(|(i, stack)| {
                stack
                    .last()
                    .map(|&Crate(label)| label)
                    .ok_or(Error::EmptyStack { stack: i + 1 })
            })
            .collect()
    }
}
