use std::sync::Arc;

use rayon::prelude::*;

use crate::foundation::core::BYTES_PER_PIXEL;
use crate::foundation::error::{MipError, MipResult, SampleAxis};
use crate::mip::image::Image;
use crate::mip::options::EdgePolicy;

/// Source texel pair and blend weight for one destination column or row.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Tap {
    lo: usize,
    hi: usize,
    t: f64,
}

/// Produce the next mip level of `src` (half size, floored, never below 1).
///
/// Each destination texel center is mapped back into source space and bilinearly blended from
/// the four nearest source texels, per channel, on raw 0..=255 values.
pub fn downsample(src: &Image, edge: EdgePolicy) -> MipResult<Image> {
    src.validate()?;
    downsample_level(src, edge, None)
}

pub(crate) fn downsample_level(
    src: &Image,
    edge: EdgePolicy,
    pool: Option<&rayon::ThreadPool>,
) -> MipResult<Image> {
    let dst = src.extent().next_level();
    let xs = axis_taps(src.width, dst.width, SampleAxis::X, edge)?;
    let ys = axis_taps(src.height, dst.height, SampleAxis::Y, edge)?;

    let mut out = vec![0u8; dst.byte_len()?];
    let row_bytes = dst.width as usize * BYTES_PER_PIXEL;
    let fill = |(y, row): (usize, &mut [u8])| fill_row(src, &xs, ys[y], row);
    match pool {
        Some(pool) => pool.install(|| {
            out.par_chunks_exact_mut(row_bytes)
                .enumerate()
                .for_each(fill)
        }),
        None => out.chunks_exact_mut(row_bytes).enumerate().for_each(fill),
    }

    Ok(Image {
        width: dst.width,
        height: dst.height,
        data: Arc::new(out),
    })
}

fn axis_taps(
    src_len: u32,
    dst_len: u32,
    axis: SampleAxis,
    edge: EdgePolicy,
) -> MipResult<Vec<Tap>> {
    let src = f64::from(src_len);
    let dst = f64::from(dst_len);
    let max = i64::from(src_len) - 1;

    (0..dst_len)
        .map(|i| {
            // Destination texel center in normalized space, then back to source texel centers.
            let a = (f64::from(i) + 0.5) / dst * src - 0.5;
            let base = a.floor();
            let t = a - base;
            let lo = base as i64;
            let hi = lo + 1;
            match edge {
                EdgePolicy::Clamp => Ok(Tap {
                    lo: lo.clamp(0, max) as usize,
                    hi: hi.clamp(0, max) as usize,
                    t,
                }),
                EdgePolicy::Strict => {
                    for coord in [lo, hi] {
                        if coord < 0 || coord > max {
                            return Err(MipError::OutOfBoundsSample {
                                axis,
                                coord,
                                extent: src_len,
                            });
                        }
                    }
                    Ok(Tap {
                        lo: lo as usize,
                        hi: hi as usize,
                        t,
                    })
                }
            }
        })
        .collect()
}

fn fill_row(src: &Image, xs: &[Tap], ty: Tap, row: &mut [u8]) {
    let stride = src.row_bytes();
    let top = &src.data[ty.lo * stride..(ty.lo + 1) * stride];
    let bottom = &src.data[ty.hi * stride..(ty.hi + 1) * stride];

    for (tx, out) in xs.iter().zip(row.chunks_exact_mut(BYTES_PER_PIXEL)) {
        let l = tx.lo * BYTES_PER_PIXEL;
        let r = tx.hi * BYTES_PER_PIXEL;
        for c in 0..BYTES_PER_PIXEL {
            let upper = lerp(top[l + c], top[r + c], tx.t);
            let lower = lerp(bottom[l + c], bottom[r + c], tx.t);
            out[c] = channel_to_u8(upper + (lower - upper) * ty.t);
        }
    }
}

fn lerp(a: u8, b: u8, t: f64) -> f64 {
    let a = f64::from(a);
    a + (f64::from(b) - a) * t
}

fn channel_to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/mip/downsample.rs"]
mod tests;
