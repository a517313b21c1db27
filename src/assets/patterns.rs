use crate::foundation::core::Extent;
use crate::foundation::error::{MipError, MipResult};
use crate::mip::chain::MipChain;
use crate::mip::image::Image;

const WHITE: [u8; 4] = [255, 255, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Per-level colours of the hand-authored checker chain, 64x64 down to 1x1.
const CHECKER_LEVELS: [(u32, [u8; 4]); 7] = [
    (64, [128, 0, 255, 255]),
    (32, [0, 255, 0, 255]),
    (16, [255, 0, 0, 255]),
    (8, [255, 255, 0, 255]),
    (4, [0, 0, 255, 255]),
    (2, [0, 255, 255, 255]),
    (1, [255, 0, 255, 255]),
];

/// Checkerboard of `cell`-sized squares; the top-left cell is `a`.
pub fn checkerboard(extent: Extent, cell: u32, a: [u8; 4], b: [u8; 4]) -> MipResult<Image> {
    if cell == 0 {
        return Err(MipError::validation("checkerboard cell size must be >= 1"));
    }
    Image::from_fn(extent, |x, y| {
        if (x / cell + y / cell) % 2 == 0 { a } else { b }
    })
}

/// Hand-authored mip chain where every level is visibly distinct.
///
/// Each level is split into quadrants: top-left and bottom-right carry the level colour, the
/// other two alternate between white (even levels) and black (odd levels). Useful for seeing
/// which level a sampler picks.
pub fn checker_mips() -> MipResult<MipChain> {
    let levels = CHECKER_LEVELS
        .iter()
        .enumerate()
        .map(|(i, &(size, color))| {
            let background = if i % 2 == 1 { BLACK } else { WHITE };
            let half = size / 2;
            Image::from_fn(Extent::new(size, size)?, |x, y| {
                if (x < half) == (y < half) {
                    color
                } else {
                    background
                }
            })
        })
        .collect::<MipResult<Vec<_>>>()?;
    MipChain::from_levels(levels)
}

/// 16x16 six-colour test image with sharp diagonal edges, meant as a generator input.
pub fn blended_pattern() -> MipResult<Image> {
    const W: [u8; 4] = [255, 255, 255, 255];
    const R: [u8; 4] = [255, 0, 0, 255];
    const B: [u8; 4] = [0, 28, 116, 255];
    const Y: [u8; 4] = [255, 231, 0, 255];
    const G: [u8; 4] = [58, 181, 75, 255];
    const A: [u8; 4] = [38, 123, 167, 255];

    #[rustfmt::skip]
    const GRID: [[[u8; 4]; 16]; 16] = [
        [W, R, R, R, R, R, R, A, A, R, R, R, R, R, R, W],
        [W, W, R, R, R, R, R, A, A, R, R, R, R, R, W, W],
        [W, W, W, R, R, R, R, A, A, R, R, R, R, W, W, W],
        [W, W, W, W, R, R, R, A, A, R, R, R, W, W, W, W],
        [W, W, W, W, W, R, R, A, A, R, R, W, W, W, W, W],
        [W, W, W, W, W, W, R, A, A, R, W, W, W, W, W, W],
        [W, W, W, W, W, W, W, A, A, W, W, W, W, W, W, W],
        [B, B, B, B, B, B, B, B, A, Y, Y, Y, Y, Y, Y, Y],
        [B, B, B, B, B, B, B, G, Y, Y, Y, Y, Y, Y, Y, Y],
        [W, W, W, W, W, W, W, G, G, W, W, W, W, W, W, W],
        [W, W, W, W, W, W, R, G, G, R, W, W, W, W, W, W],
        [W, W, W, W, W, R, R, G, G, R, R, W, W, W, W, W],
        [W, W, W, W, R, R, R, G, G, R, R, R, W, W, W, W],
        [W, W, W, R, R, R, R, G, G, R, R, R, R, W, W, W],
        [W, W, R, R, R, R, R, G, G, R, R, R, R, R, W, W],
        [W, R, R, R, R, R, R, G, G, R, R, R, R, R, R, W],
    ];

    Image::from_fn(Extent::new(16, 16)?, |x, y| GRID[y as usize][x as usize])
}

#[cfg(test)]
#[path = "../../tests/unit/assets/patterns.rs"]
mod tests;
