use rand::Rng;

use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FLAG, PIXEL_OFF, PIXEL_ON, SPRITE_HEIGHT, SPRITE_SHEET_START,
    STACK_DEPTH,
};
use crate::error::{Chip8Error, Result};
use crate::opcode::Opcode;
use crate::state::State;

// Every operation runs after the fetch, so `state.pc` already points at the
// next instruction and the current one lives at `state.pc - 2`.

fn current_pc(state: &State) -> u16 {
    state.pc.wrapping_sub(2)
}

/// clear
pub fn clr(_op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.frame_buffer = [[PIXEL_OFF; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    state.draw_flag = true;
    Ok(())
}

/// PC = STACK.pop()
pub fn rts(_op: &dyn Opcode, state: &mut State) -> Result<()> {
    if state.sp == 0 {
        return Err(Chip8Error::StackUnderflow {
            pc: current_pc(state),
        });
    }
    state.sp -= 1;
    state.pc = state.stack[state.sp];
    Ok(())
}

/// PC = addr
pub fn jump(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.pc = op.addr();
    Ok(())
}

/// STACK.push(PC); PC = addr
pub fn call(op: &dyn Opcode, state: &mut State) -> Result<()> {
    if state.sp == STACK_DEPTH {
        return Err(Chip8Error::StackOverflow {
            pc: current_pc(state),
        });
    }
    state.stack[state.sp] = state.pc;
    state.sp += 1;
    state.pc = op.addr();
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.skip_if(state.v[op.x()] == op.kk());
    Ok(())
}

/// if Vx != kk then pc += 2
pub fn skne(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.skip_if(state.v[op.x()] != op.kk());
    Ok(())
}

/// if Vx == Vy then pc += 2
pub fn skre(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.skip_if(state.v[op.x()] == state.v[op.y()]);
    Ok(())
}

/// Vx = kk
pub fn load(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.v[op.x()] = op.kk();
    Ok(())
}

/// Vx += kk
/// Allow for overflow but drop it; VF is untouched
pub fn add(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.v[op.x()] = state.v[op.x()].wrapping_add(op.kk());
    Ok(())
}

/// Vx = Vy
pub fn mv(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.v[op.x()] = state.v[op.y()];
    Ok(())
}

/// Vx |= Vy
pub fn or(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.v[op.x()] |= state.v[op.y()];
    Ok(())
}

/// Vx &= Vy
pub fn and(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.v[op.x()] &= state.v[op.y()];
    Ok(())
}

/// Vx ^= Vy
pub fn xor(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.v[op.x()] ^= state.v[op.y()];
    Ok(())
}

// The flag is written before the result in the arithmetic and shift
// operations below, so an operation targeting VF keeps its result.

/// Vx += Vy; VF = overflow
pub fn addr(op: &dyn Opcode, state: &mut State) -> Result<()> {
    let (res, over) = state.v[op.x()].overflowing_add(state.v[op.y()]);
    state.set_flag(over);
    state.v[op.x()] = res;
    Ok(())
}

/// Vx -= Vy; VF = !underflow
pub fn sub(op: &dyn Opcode, state: &mut State) -> Result<()> {
    let (res, under) = state.v[op.x()].overflowing_sub(state.v[op.y()]);
    state.set_flag(!under);
    state.v[op.x()] = res;
    Ok(())
}

/// Vx >>= 1; VF = lsb
pub fn shr(op: &dyn Opcode, state: &mut State) -> Result<()> {
    let value = state.v[op.x()];
    state.v[FLAG] = value & 0x1;
    state.v[op.x()] = value >> 1;
    Ok(())
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(op: &dyn Opcode, state: &mut State) -> Result<()> {
    let (res, under) = state.v[op.y()].overflowing_sub(state.v[op.x()]);
    state.set_flag(!under);
    state.v[op.x()] = res;
    Ok(())
}

/// Vx <<= 1; VF = msb
pub fn shl(op: &dyn Opcode, state: &mut State) -> Result<()> {
    let value = state.v[op.x()];
    state.v[FLAG] = value >> 7;
    state.v[op.x()] = value << 1;
    Ok(())
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.skip_if(state.v[op.x()] != state.v[op.y()]);
    Ok(())
}

/// I = addr
pub fn loadi(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.i = op.addr();
    Ok(())
}

/// PC = V0 + addr
pub fn jumpi(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.pc = op.addr() + u16::from(state.v[0x0]);
    Ok(())
}

/// Vx = rand_byte & kk
pub fn rand(op: &dyn Opcode, state: &mut State) -> Result<()> {
    let rand_byte: u8 = state.rng.gen();
    state.v[op.x()] = rand_byte & op.kk();
    Ok(())
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory I..I+n at position x, y on the FrameBuffer.
/// Every pixel wraps around the edges of the display on its own.
/// Sets VF if any pixels are erased
pub fn draw(op: &dyn Opcode, state: &mut State) -> Result<()> {
    let origin_x = state.v[op.x()] as usize % DISPLAY_WIDTH;
    let origin_y = state.v[op.y()] as usize % DISPLAY_HEIGHT;
    let mut collision = false;

    for row in 0..op.n() {
        let sprite_byte = state.read(state.i.wrapping_add(u16::from(row)));
        let y = (origin_y + row as usize) % DISPLAY_HEIGHT;
        for col in 0..8 {
            if sprite_byte & (0x80u8 >> col) == 0 {
                continue;
            }
            let x = (origin_x + col) % DISPLAY_WIDTH;
            let pixel = &mut state.frame_buffer[y][x];
            collision |= *pixel == PIXEL_ON;
            *pixel ^= PIXEL_ON;
        }
    }

    state.set_flag(collision);
    state.draw_flag = true;
    Ok(())
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.skip_if(state.is_pressed(state.v[op.x()]));
    Ok(())
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.skip_if(!state.is_pressed(state.v[op.x()]));
    Ok(())
}

/// Vx = DT
pub fn moved(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.v[op.x()] = state.delay_timer;
    Ok(())
}

/// Vx = first pressed key, else pc -= 2
/// Stepping the pc back re-fetches this instruction next cycle, so the machine waits for a
/// key while the timers keep running
pub fn keyd(op: &dyn Opcode, state: &mut State) -> Result<()> {
    match state.keypad.iter().position(|&pressed| pressed) {
        Some(key) => state.v[op.x()] = key as u8,
        None => state.pc = current_pc(state),
    }
    Ok(())
}

/// DT = Vx
pub fn loads(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.delay_timer = state.v[op.x()];
    Ok(())
}

/// ST = Vx
pub fn ld(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.sound_timer = state.v[op.x()];
    Ok(())
}

/// I += Vx
/// VF is untouched
pub fn addi(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.i = state.i.wrapping_add(u16::from(state.v[op.x()]));
    Ok(())
}

/// I = SPRITE_SHEET_START + Vx * 5
/// Set I to the memory address of the glyph for the digit in Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(op: &dyn Opcode, state: &mut State) -> Result<()> {
    state.i = SPRITE_SHEET_START + u16::from(state.v[op.x()]) * SPRITE_HEIGHT;
    Ok(())
}

/// mem[I..I+3] = bcd(Vx)
/// Store the hundreds, tens and ones digits of Vx starting at address I
pub fn bcd(op: &dyn Opcode, state: &mut State) -> Result<()> {
    let value = state.v[op.x()];
    let digits = [value / 100, value / 10 % 10, value % 10];
    for (offset, digit) in (0u16..).zip(digits) {
        state.write(state.i.wrapping_add(offset), digit);
    }
    Ok(())
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(op: &dyn Opcode, state: &mut State) -> Result<()> {
    for register in 0..=op.x() {
        state.write(state.i.wrapping_add(register as u16), state.v[register]);
    }
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(op: &dyn Opcode, state: &mut State) -> Result<()> {
    for register in 0..=op.x() {
        state.v[register] = state.read(state.i.wrapping_add(register as u16));
    }
    Ok(())
}

/// Anything without a registered operation is skipped
pub fn nop(_op: &dyn Opcode, _state: &mut State) -> Result<()> {
    Ok(())
}
