use sdl2::keyboard::Keycode;

/// # Keymap
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// The keypad's 4x4 grid is laid over the left 4 alphanumeric columns of a QWERTY keyboard.
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
///
/// Host keys are listed in keypad order, so `KEYMAP[n]` produces key `n`.
const KEYMAP: [Keycode; 16] = [
    Keycode::X,
    Keycode::Num1,
    Keycode::Num2,
    Keycode::Num3,
    Keycode::Q,
    Keycode::W,
    Keycode::E,
    Keycode::A,
    Keycode::S,
    Keycode::D,
    Keycode::Z,
    Keycode::C,
    Keycode::Num4,
    Keycode::R,
    Keycode::F,
    Keycode::V,
];

/// The Chip-8 key a host key stands in for, if any
pub fn keymap(key: Keycode) -> Option<u8> {
    KEYMAP
        .iter()
        .position(|&mapped| mapped == key)
        .map(|index| index as u8)
}
