use thiserror::Error;

use crate::constants::STACK_DEPTH;

pub type Result<T> = std::result::Result<T, Chip8Error>;

/// Faults the Chip-8 reports to its host instead of corrupting its own state.
///
/// Unknown opcodes are not faults; they execute as no-ops.
#[derive(Debug, Error)]
pub enum Chip8Error {
    #[error("unable to read ROM: {0}")]
    Io(#[from] std::io::Error),

    #[error("ROM is {size} bytes but only {capacity} bytes fit in program memory")]
    RomTooLarge { size: usize, capacity: usize },

    #[error("stack overflow: call at {pc:#05X} exceeds {} nested subroutines", STACK_DEPTH)]
    StackOverflow { pc: u16 },

    #[error("stack underflow: return at {pc:#05X} with no subroutine to return from")]
    StackUnderflow { pc: u16 },
}
