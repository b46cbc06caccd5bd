//! Deterministic test images.

use rgbtone_core::PixelBuffer;

/// Every level 0..=255 in each channel: a 16x16 image where red counts up,
/// green counts down and blue is red rotated by 85.
pub fn level_ramp() -> PixelBuffer {
    let mut data = Vec::with_capacity(256 * 3);
    for i in 0..=255u8 {
        data.extend_from_slice(&[i, 255 - i, i.wrapping_add(85)]);
    }
    PixelBuffer::from_raw(16, 16, 3, data).unwrap()
}

/// The 2x2 image with red `[[100, 150], [200, 250]]`, green 10 and blue 20.
pub fn quad() -> PixelBuffer {
    PixelBuffer::from_raw(
        2,
        2,
        3,
        vec![100, 10, 20, 150, 10, 20, 200, 10, 20, 250, 10, 20],
    )
    .unwrap()
}

/// Pseudo-random pixels from a fixed xorshift seed.
pub fn noise(height: usize, width: usize, seed: u32) -> PixelBuffer {
    let mut state = seed.max(1);
    let data = (0..height * width * 3)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect();
    PixelBuffer::from_raw(height, width, 3, data).unwrap()
}
