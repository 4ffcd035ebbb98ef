/// # Opcodes
///
/// Chip-8 opcodes are 16 bits each, fetched big-endian. Which instruction an
/// opcode names is decided by:
/// - `(n, _, _, _)` its family; applies to all opcodes
/// - `(_, _, _, n)` the member of the 0x0, 0x8 and 0xE families
/// - `(_, _, n, n)` the member of the 0xF family
///
/// Nibbles not used to select the instruction carry its operands.
/// - `(_, n, n, n)` a 12-bit address
/// - `(_, _, n, n)` a byte that is assigned to and/or compared with Vx
/// - `(_, n, _, _)` the register Vx or the range of registers V0..=Vx
/// - `(_, _, n, _)` the register Vy
/// - `(_, _, _, n)` the height of a sprite
pub trait Opcode {
    /// The Opcode's component nibbles.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// The Opcode's most significant nibble.
    /// `[f___]`
    fn family(&self) -> u8;

    /// The Opcode's second nibble as a register index.
    /// `[_x__]`
    fn x(&self) -> usize;

    /// The Opcode's third nibble as a register index.
    /// `[__y_]`
    fn y(&self) -> usize;

    /// The Opcode's fourth nibble.
    /// `[___n]`
    fn n(&self) -> u8;

    /// The Opcode's least significant byte.
    /// `[__kk]`
    fn kk(&self) -> u8;

    /// The Opcode without its most significant nibble.
    /// `[_nnn]`
    fn addr(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (self.family(), self.x() as u8, self.y() as u8, self.n())
    }

    fn family(&self) -> u8 {
        ((self & 0xF000) >> 12) as u8
    }

    fn x(&self) -> usize {
        ((self & 0x0F00) >> 8) as usize
    }

    fn y(&self) -> usize {
        ((self & 0x00F0) >> 4) as usize
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn kk(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn addr(&self) -> u16 {
        self & 0x0FFF
    }
}
