use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A `width` x `height` frame filled with `value`.
pub fn uniform(width: usize, height: usize, value: u8) -> Vec<u8> {
    vec![value; width * height]
}

/// Uniformly random samples, reproducible from `seed`.
pub fn random(width: usize, height: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..width * height).map(|_| rng.gen_range(0..=255u8)).collect()
}

/// `base` with up to `changes` random pixels replaced by random values.
pub fn perturbed(base: &[u8], changes: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = base.to_vec();
    for _ in 0..changes {
        let i = rng.gen_range(0..out.len());
        out[i] = rng.gen_range(0..=255u8);
    }
    out
}

/// Sets every pixel in the `[x0, x1) x [y0, y1)` rectangle to `value`.
pub fn fill_rect(data: &mut [u8], width: usize, (x0, y0): (usize, usize), (x1, y1): (usize, usize), value: u8) {
    for y in y0..y1 {
        data[y * width + x0..y * width + x1].fill(value);
    }
}

/// Copies a packed frame into rows of `stride` bytes, filling padding with `pad`.
pub fn with_stride(packed: &[u8], width: usize, stride: usize, pad: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(packed.len() / width * stride);
    for row in packed.chunks(width) {
        out.extend_from_slice(row);
        out.extend(std::iter::repeat_n(pad, stride - width));
    }
    out
}

/// Naive K x K window test for every interior pixel, in raster order.
pub fn brute_force_moving(
    current: &[u8],
    previous: &[u8],
    width: usize,
    height: usize,
    kernel: usize,
    threshold: u32,
) -> Vec<(usize, usize)> {
    let half = kernel / 2;
    let mut moving = Vec::new();
    if width < kernel || height < kernel {
        return moving;
    }
    for y in half..height - half {
        for x in half..width - half {
            let mut sum = 0u32;
            for j in y - half..=y + half {
                for i in x - half..=x + half {
                    let idx = j * width + i;
                    sum += current[idx].abs_diff(previous[idx]) as u32;
                }
            }
            if sum / (kernel * kernel) as u32 > threshold {
                moving.push((x, y));
            }
        }
    }
    moving
}
