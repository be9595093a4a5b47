use thiserror::Error;

/// Everything that can go wrong between reading an input file and
/// reporting the top crates. Well-formed inputs never hit any of these;
/// the variants exist so that bad input fails loudly instead of
/// producing a silently wrong answer.
#[derive(Error, Debug)]
pub enum Error {
    #[error("reading input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed input: {0}")]
    Parse(#[from] nom::error::Error<String>),

    #[error("move references stack {stack}, but the ship only has {stacks}")]
    StackOutOfRange { stack: usize, stacks: usize },

    #[error("cannot take {wanted} crates from stack {stack}, it holds {available}")]
    InsufficientCrates {
        stack: usize,
        wanted: usize,
        available: usize,
    },

    #[error("stack {stack} is empty, it has no top crate")]
    EmptyStack { stack: usize },
}
