// ============================================================================
// BLUR — rayon-parallelized separable Gaussian over coverage masks
// ============================================================================
//
// The pad drop shadow and the caption glow both soften a single-channel
// coverage mask; the two-pass separable form keeps the cost linear in the
// kernel radius.

use rayon::prelude::*;

/// Build a 1-D Gaussian kernel truncated at ceil(3*sigma), normalized.
fn build_gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (sigma * 3.0).ceil() as usize;
    if radius == 0 {
        return vec![1.0];
    }
    let len = radius * 2 + 1;
    let mut kernel = vec![0.0f32; len];
    let s2 = 2.0 * sigma * sigma;
    let mut sum = 0.0f32;
    for (i, v) in kernel.iter_mut().enumerate() {
        let x = i as f32 - radius as f32;
        *v = (-x * x / s2).exp();
        sum += *v;
    }
    let inv = 1.0 / sum;
    for v in &mut kernel {
        *v *= inv;
    }
    kernel
}

/// Gaussian-blur a single-channel coverage mask. Edges clamp (the border
/// value repeats).
pub fn gaussian_blur_mask(mask: &[f32], w: usize, h: usize, sigma: f32) -> Vec<f32> {
    debug_assert_eq!(mask.len(), w * h);
    if w == 0 || h == 0 || sigma <= 0.0 {
        return mask.to_vec();
    }

    let kernel = build_gaussian_kernel(sigma);
    let radius = kernel.len() / 2;

    // --- Horizontal pass (parallel by row) ---
    let mut buf_h = vec![0.0f32; w * h];
    buf_h.par_chunks_mut(w).enumerate().for_each(|(y, row_out)| {
        let row_in = &mask[y * w..(y + 1) * w];
        for (x, out) in row_out.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let sx = (x as isize + ki as isize - radius as isize)
                    .max(0)
                    .min(w as isize - 1) as usize;
                acc += row_in[sx] * kv;
            }
            *out = acc;
        }
    });

    // --- Vertical pass (parallel by row) ---
    let mut buf_v = vec![0.0f32; w * h];
    buf_v.par_chunks_mut(w).enumerate().for_each(|(y, row_out)| {
        for (x, out) in row_out.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let sy = (y as isize + ki as isize - radius as isize)
                    .max(0)
                    .min(h as isize - 1) as usize;
                acc += buf_h[sy * w + x] * kv;
            }
            *out = acc;
        }
    });

    buf_v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_is_normalized() {
        for sigma in [0.5, 1.0, 7.0, 12.0] {
            let k = build_gaussian_kernel(sigma);
            let sum: f32 = k.iter().sum();
            assert!((sum - 1.0).abs() < 1e-4, "sigma {sigma}: sum {sum}");
        }
    }

    #[test]
    fn test_zero_sigma_is_identity() {
        let mask = vec![0.0, 1.0, 0.0, 0.5];
        assert_eq!(gaussian_blur_mask(&mask, 2, 2, 0.0), mask);
    }

    #[test]
    fn test_impulse_spreads_symmetrically() {
        let w = 31;
        let h = 31;
        let mut mask = vec![0.0f32; w * h];
        mask[15 * w + 15] = 1.0;
        let out = gaussian_blur_mask(&mask, w, h, 2.0);
        // Peak stays at the center and drops below the input
        let peak = out[15 * w + 15];
        assert!(peak > 0.0 && peak < 1.0);
        assert!((out[15 * w + 14] - out[15 * w + 16]).abs() < 1e-6);
        assert!((out[14 * w + 15] - out[16 * w + 15]).abs() < 1e-6);
        // Mass is preserved for an interior impulse
        let total: f32 = out.iter().sum();
        assert!((total - 1.0).abs() < 1e-3);
    }
}
