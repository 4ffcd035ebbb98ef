use std::fs::File;
use std::io::BufReader;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use tracing::{error, info};

use chip8_core::Chip8;
use chip8_display::Display;

use crate::keymap::keymap;
use crate::Args;

const TITLE: &str = "CHIP-8 Emulator";

pub fn run(args: Args) -> Result<()> {
    let mut chip8: Chip8 = match args.seed {
        Some(seed) => Chip8::with_seed(seed),
        None => Chip8::new(),
    };

    // Load ROM
    let file = File::open(&args.rom)
        .with_context(|| format!("unable to open {}", args.rom.display()))?;
    let mut reader = BufReader::new(file);
    chip8
        .load_rom(&mut reader)
        .with_context(|| format!("unable to load {}", args.rom.display()))?;
    info!(rom = %args.rom.display(), "loaded ROM");

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut display: Display = Display::new(&sdl, TITLE, args.scale)?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;

    // Set initial timing
    let cycle_time: Duration = Duration::from_millis(args.delay);
    let mut last_cycle: Instant = Instant::now();

    // Whether or not the cycle delay should be respected
    let mut fast_forward: bool = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => break 'event,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state once the delay has elapsed
        let current_time = Instant::now();
        if fast_forward || current_time - last_cycle >= cycle_time {
            last_cycle = current_time;
            if let Err(e) = chip8.step() {
                error!(pc = chip8.state().pc, "halting: {}", e);
                return Err(e.into());
            }
        } else {
            std::thread::sleep(cycle_time - (current_time - last_cycle));
        }

        // Render the frame if it changed
        if let Some(frame) = chip8.take_frame() {
            display.render(frame)?;
        }
    }

    info!("quit");
    Ok(())
}
