/// Bytes of addressable memory (0x000..=0xFFF)
pub const MEMORY_SIZE: usize = 4096;

/// Every memory access through PC or I is masked into the address space
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// ROMs are loaded and executed from here; everything below is reserved
pub const PROGRAM_START: u16 = 0x200;

/// Largest ROM that fits between `PROGRAM_START` and the end of memory
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Frame buffer cells are blitted directly as 32-bit pixels
pub const PIXEL_ON: u32 = 0xFFFF_FFFF;
pub const PIXEL_OFF: u32 = 0x0000_0000;

/// Maximum number of nested subroutine calls
pub const STACK_DEPTH: usize = 16;

pub const REGISTER_COUNT: usize = 16;
pub const KEY_COUNT: usize = 16;

/// Index of VF, the carry/borrow/collision flag
pub const FLAG: usize = 0xF;

/// Address of the first glyph of the sprite sheet
pub const SPRITE_SHEET_START: u16 = 0x050;

/// One past the last byte of the sprite sheet
pub const SPRITE_SHEET_END: u16 = SPRITE_SHEET_START + SPRITE_SHEET.len() as u16;

/// Each hexadecimal glyph is 5 rows tall
pub const SPRITE_HEIGHT: u16 = 5;

/// # Sprite Sheet
/// Glyphs for the hexadecimal digits 0..F, each 4 pixels wide and 5 rows tall.
/// Only the high nibble of each byte is drawn.
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
