//! Fixed color families for the particle field.

use crate::types::{Rgb, rgb};

pub const CYAN: [Rgb; 4] = [
    rgb(0x00, 0xff, 0xff),
    rgb(0x00, 0xe5, 0xff),
    rgb(0x00, 0xbc, 0xd4),
    rgb(0x00, 0x97, 0xa7),
];

pub const MAGENTA: [Rgb; 4] = [
    rgb(0xff, 0x00, 0xff),
    rgb(0xff, 0x00, 0x80),
    rgb(0xe9, 0x1e, 0x63),
    rgb(0xc2, 0x18, 0x5b),
];

pub const BLUE: [Rgb; 3] = [
    rgb(0x21, 0x96, 0xf3),
    rgb(0x19, 0x76, 0xd2),
    rgb(0x0d, 0x47, 0xa1),
];

pub const WHITE: [Rgb; 2] = [rgb(0xff, 0xff, 0xff), rgb(0xe0, 0xe0, 0xe0)];

/// Combined dot palette: cyan + magenta + blue. The white family is reserved
/// for line heads.
pub const COMBINED: [Rgb; 11] = [
    CYAN[0], CYAN[1], CYAN[2], CYAN[3], MAGENTA[0], MAGENTA[1], MAGENTA[2], MAGENTA[3], BLUE[0],
    BLUE[1], BLUE[2],
];

/// Base page background; also the translucent per-frame fill color.
pub const BACKGROUND: Rgb = rgb(0x0a, 0x0a, 0x0a);

/// Confetti piece colors.
pub const CONFETTI: [Rgb; 5] = [
    rgb(0x00, 0xff, 0xff),
    rgb(0xff, 0x00, 0xff),
    rgb(0xff, 0xff, 0x00),
    rgb(0x00, 0xff, 0x00),
    rgb(0xff, 0x00, 0x80),
];
