use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{
    ADDRESS_MASK, DISPLAY_HEIGHT, DISPLAY_WIDTH, FLAG, KEY_COUNT, MEMORY_SIZE, PIXEL_OFF,
    PROGRAM_START, REGISTER_COUNT, SPRITE_SHEET, SPRITE_SHEET_END, SPRITE_SHEET_START, STACK_DEPTH,
};

/// The Chip-8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is overwritten as a carry, borrow or collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) the number of return addresses on the stack
///
/// Timers
/// - 2 8-bit timers (delay & sound)
/// - both count down by one per cycle until they reach 0
///
/// ## Memory
/// - 16 entry stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x050..0x0A0 holds the sprite sheet
///     - 0x200.. holds the ROM
/// - 32x64 frame buffer of 32-bit cells
///
/// ## Input
/// - the pressed status of keys 0..F, latched by the host before every cycle
///
/// ## Randomness
/// - a seedable byte source for the RND instruction
#[derive(Clone)]
pub struct State {
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    pub sp: usize,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_DEPTH],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub keypad: [bool; KEY_COUNT],
    pub rng: StdRng,
}

impl State {
    /// Builds a state whose random source is seeded from the OS
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Builds a state whose random source replays the same bytes for the same seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut memory = [0; MEMORY_SIZE];
        let start = SPRITE_SHEET_START as usize;
        memory[start..start + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_DEPTH],
            memory,
            frame_buffer: [[PIXEL_OFF; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            draw_flag: false,
            keypad: [false; KEY_COUNT],
            rng,
        }
    }

    /// Reads a byte, wrapping the address into the 4K address space
    pub fn read(&self, addr: u16) -> u8 {
        self.memory[(addr & ADDRESS_MASK) as usize]
    }

    /// Writes a byte, wrapping the address into the 4K address space.
    /// Stores that land on the sprite sheet are dropped, so FX29 always finds its glyphs
    pub fn write(&mut self, addr: u16, value: u8) {
        let addr = addr & ADDRESS_MASK;
        if (SPRITE_SHEET_START..SPRITE_SHEET_END).contains(&addr) {
            return;
        }
        self.memory[addr as usize] = value;
    }

    pub fn set_flag(&mut self, flag: bool) {
        self.v[FLAG] = u8::from(flag);
    }

    /// Skips the next instruction; the pc already points past the current one
    pub fn skip_if(&mut self, condition: bool) {
        if condition {
            self.pc = self.pc.wrapping_add(2);
        }
    }

    /// Whether the key selected by the low nibble of `key` is held down
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keypad[(key & 0xF) as usize]
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// The FrameBuffer is indexed as [y][x]
pub type FrameBuffer = [[u32; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
