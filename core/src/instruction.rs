use crate::error::Result;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// A single instruction's effect on the machine
pub type Operation = fn(op: &dyn Opcode, state: &mut State) -> Result<()>;

/// What an opcode's family nibble selects
#[derive(Clone, Copy)]
enum Entry {
    /// the family has exactly one instruction
    Direct(Operation),
    /// the family is split further by its low nibble
    ByNibble(&'static [Option<Operation>; 16]),
    /// the family is split further by its low byte
    ByByte(&'static [Option<Operation>; 256]),
}

/// 00E0, 00EE
static SYSTEM: [Option<Operation>; 16] = {
    let mut table: [Option<Operation>; 16] = [None; 16];
    table[0x0] = Some(clr as Operation);
    table[0xE] = Some(rts as Operation);
    table
};

/// 8xy0..8xyE
static ALU: [Option<Operation>; 16] = {
    let mut table: [Option<Operation>; 16] = [None; 16];
    table[0x0] = Some(mv as Operation);
    table[0x1] = Some(or as Operation);
    table[0x2] = Some(and as Operation);
    table[0x3] = Some(xor as Operation);
    table[0x4] = Some(addr as Operation);
    table[0x5] = Some(sub as Operation);
    table[0x6] = Some(shr as Operation);
    table[0x7] = Some(subn as Operation);
    table[0xE] = Some(shl as Operation);
    table
};

/// Ex9E, ExA1
static KEYS: [Option<Operation>; 16] = {
    let mut table: [Option<Operation>; 16] = [None; 16];
    table[0xE] = Some(skpr as Operation);
    table[0x1] = Some(skup as Operation);
    table
};

/// Fx07..Fx65
static MISC: [Option<Operation>; 256] = {
    let mut table: [Option<Operation>; 256] = [None; 256];
    table[0x07] = Some(moved as Operation);
    table[0x0A] = Some(keyd as Operation);
    table[0x15] = Some(loads as Operation);
    table[0x18] = Some(ld as Operation);
    table[0x1E] = Some(addi as Operation);
    table[0x29] = Some(ldspr as Operation);
    table[0x33] = Some(bcd as Operation);
    table[0x55] = Some(stor as Operation);
    table[0x65] = Some(read as Operation);
    table
};

/// Indexed by an opcode's most significant nibble
static FAMILIES: [Entry; 16] = [
    Entry::ByNibble(&SYSTEM),
    Entry::Direct(jump),
    Entry::Direct(call),
    Entry::Direct(ske),
    Entry::Direct(skne),
    Entry::Direct(skre),
    Entry::Direct(load),
    Entry::Direct(add),
    Entry::ByNibble(&ALU),
    Entry::Direct(skrne),
    Entry::Direct(loadi),
    Entry::Direct(jumpi),
    Entry::Direct(rand),
    Entry::Direct(draw),
    Entry::ByNibble(&KEYS),
    Entry::ByByte(&MISC),
];

/// Finds the Operation registered for an Opcode, if there is one
pub fn lookup(op: &dyn Opcode) -> Option<Operation> {
    match FAMILIES[op.family() as usize] {
        Entry::Direct(operation) => Some(operation),
        Entry::ByNibble(table) => table[op.n() as usize],
        Entry::ByByte(table) => table[op.kk() as usize],
    }
}

/// Selects the Operation for a given Opcode.
///
/// Opcodes whose family or family member has nothing registered resolve to a
/// no-op, so a malformed ROM can't bring the machine down.
pub fn from_op(op: &dyn Opcode) -> Operation {
    lookup(op).unwrap_or(nop)
}
