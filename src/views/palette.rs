// src/views/palette.rs
//
// Tile colours: matplotlib's tab10 for 2 through 1024, near-black above that.

use nannou::color::{rgb8, Rgb8};

const TAB10: [(u8, u8, u8); 10] = [
    (0x1f, 0x77, 0xb4),
    (0xff, 0x7f, 0x0e),
    (0x2c, 0xa0, 0x2c),
    (0xd6, 0x27, 0x28),
    (0x94, 0x67, 0xbd),
    (0x8c, 0x56, 0x4b),
    (0xe3, 0x77, 0xc2),
    (0x7f, 0x7f, 0x7f),
    (0xbc, 0xbd, 0x22),
    (0x17, 0xbe, 0xcf),
];

const FALLBACK: (u8, u8, u8) = (0x11, 0x11, 0x11);

pub fn tile_color(value: u32) -> Rgb8 {
    let (r, g, b) = value
        .is_power_of_two()
        .then(|| value.trailing_zeros() as usize)
        .filter(|&exp| exp >= 1)
        .and_then(|exp| TAB10.get(exp - 1).copied())
        .unwrap_or(FALLBACK);
    rgb8(r, g, b)
}
