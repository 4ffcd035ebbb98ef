use std::io::Read;

use tracing::{debug, trace, warn};

use crate::constants::{KEY_COUNT, MAX_ROM_SIZE, PROGRAM_START};
use crate::error::{Chip8Error, Result};
use crate::instruction;
use crate::state::{FrameBuffer, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks the current `state` and supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the machine by a single cycle
/// - inspecting its frame buffer for rendering by some display
/// - inspecting its sound timer for playing a tone
pub struct Chip8 {
    state: State,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: State::new(),
        }
    }

    /// A Chip-8 whose RND instruction produces the same bytes on every run
    ///
    /// # Arguments
    /// * `seed` the seed for the random byte source
    pub fn with_seed(seed: u64) -> Self {
        Chip8 {
            state: State::with_seed(seed),
        }
    }

    /// Load a rom from a source file
    ///
    /// The whole source is read before anything is written to memory, so a rom
    /// that doesn't fit leaves memory untouched.
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<()> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        self.load_program(&rom)
    }

    /// Copy a program into memory at 0x200
    ///
    /// Everything from 0x200 up is cleared first, so nothing of a previously
    /// loaded, longer program is left behind.
    ///
    /// # Arguments
    /// * `program` the raw bytes of a ROM
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        if program.len() > MAX_ROM_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: program.len(),
                capacity: MAX_ROM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        self.state.memory[start..].fill(0);
        self.state.memory[start..start + program.len()].copy_from_slice(program);
        debug!(size = program.len(), "loaded ROM");
        Ok(())
    }

    /// The current frame, whether or not it changed
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Returns the FrameBuffer if it changed since it was last taken
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Whether a tone should currently be playing
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 4-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        self.state.keypad[(key & 0xF) as usize] = true;
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 4-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) {
        self.state.keypad[(key & 0xF) as usize] = false;
    }

    /// Replace the pressed status of every key at once
    pub fn set_keys(&mut self, keys: [bool; KEY_COUNT]) {
        self.state.keypad = keys;
    }

    /// Advances the machine by a single cycle
    /// - gets the opcode at the pc and moves the pc past it
    /// - executes the opcode
    /// - decrements the timers
    ///
    /// A stack fault abandons the cycle: the pc is put back on the faulting
    /// instruction and the timers don't tick, so the state is as it was before.
    pub fn step(&mut self) -> Result<()> {
        let pc = self.state.pc;
        let op = self.get_op();
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            pc
        );
        self.state.pc = pc.wrapping_add(2);

        let operation = instruction::lookup(&op).unwrap_or_else(|| {
            debug!("skipping unknown opcode {:04X}", op);
            instruction::from_op(&op)
        });
        if let Err(e) = operation(&op, &mut self.state) {
            warn!("{}", e);
            self.state.pc = pc;
            return Err(e);
        }

        self.advance_timers();
        Ok(())
    }

    /// Decrements each timer that hasn't reached 0
    fn advance_timers(&mut self) {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }
        if self.state.sound_timer > 0 {
            self.state.sound_timer -= 1;
        }
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> u16 {
        let left = u16::from(self.state.read(self.state.pc));
        let right = u16::from(self.state.read(self.state.pc.wrapping_add(1)));
        left << 8 | right
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
