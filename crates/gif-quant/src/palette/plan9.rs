//! The Plan 9 fixed color map.
//!
//! 256 colors laid out as 4 shades of red, each split into 4 value rows of
//! 16 entries spanning green and blue. Generated rather than tabulated.

use crate::color::Rgba;

/// Build the 256-entry Plan 9 palette.
///
/// Entry 0 is black and entry 255 is white.
pub fn plan9() -> [Rgba; 256] {
    let mut colors = [Rgba::TRANSPARENT; 256];
    let mut i = 0i32;
    for r in 0..4i32 {
        for v in 0..4i32 {
            let mut j = v - r;
            for g in 0..4i32 {
                for b in 0..4i32 {
                    let den = r.max(g).max(b);
                    let [cr, cg, cb] = if den == 0 {
                        [0x11 * v; 3]
                    } else {
                        let num = 17 * (4 * den + v);
                        [r * num / den, g * num / den, b * num / den]
                    };
                    colors[(i + (j & 0x0f)) as usize] =
                        Rgba::opaque_u8(cr as u8, cg as u8, cb as u8);
                    j += 1;
                }
            }
            i += 16;
        }
    }
    colors
}
