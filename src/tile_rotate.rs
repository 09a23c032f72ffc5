/*
 * Copyright (c) Radzivon Bartoshyk, 3/2025. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::y2r_support::{ImageTile, TILE_SIZE};

/// Identity remap for line-by-line output.
pub(crate) static LINEAR_LUT: [u8; TILE_SIZE] = [
    0, 1, 2, 3, 4, 5, 6, 7, //
    8, 9, 10, 11, 12, 13, 14, 15, //
    16, 17, 18, 19, 20, 21, 22, 23, //
    24, 25, 26, 27, 28, 29, 30, 31, //
    32, 33, 34, 35, 36, 37, 38, 39, //
    40, 41, 42, 43, 44, 45, 46, 47, //
    48, 49, 50, 51, 52, 53, 54, 55, //
    56, 57, 58, 59, 60, 61, 62, 63, //
];

/// Morton order remap for the swizzled 8x8 output layout.
pub(crate) static MORTON_LUT: [u8; TILE_SIZE] = [
    0, 1, 4, 5, 16, 17, 20, 21, //
    2, 3, 6, 7, 18, 19, 22, 23, //
    8, 9, 12, 13, 24, 25, 28, 29, //
    10, 11, 14, 15, 26, 27, 30, 31, //
    32, 33, 36, 37, 48, 49, 52, 53, //
    34, 35, 38, 39, 50, 51, 54, 55, //
    40, 41, 44, 45, 56, 57, 60, 61, //
    42, 43, 46, 47, 58, 59, 62, 63, //
];

/// Rotation and remap are fused into one pass over the used sub-region of
/// a tile. `height` is the active row count and may be less than 8 on the
/// final strip; only the used rows participate.
pub(crate) fn rotate_tile_0(
    input: &ImageTile,
    output: &mut ImageTile,
    height: usize,
    out_map: &[u8; TILE_SIZE],
) {
    for (i, &pixel) in input[..height * 8].iter().enumerate() {
        output[out_map[i] as usize] = pixel;
    }
}

pub(crate) fn rotate_tile_90(
    input: &ImageTile,
    output: &mut ImageTile,
    height: usize,
    out_map: &[u8; TILE_SIZE],
) {
    let mut out_i = 0;
    for x in 0..8 {
        for y in (0..height).rev() {
            output[out_map[out_i] as usize] = input[y * 8 + x];
            out_i += 1;
        }
    }
}

pub(crate) fn rotate_tile_180(
    input: &ImageTile,
    output: &mut ImageTile,
    height: usize,
    out_map: &[u8; TILE_SIZE],
) {
    for (out_i, i) in (0..height * 8).rev().enumerate() {
        output[out_map[out_i] as usize] = input[i];
    }
}

pub(crate) fn rotate_tile_270(
    input: &ImageTile,
    output: &mut ImageTile,
    height: usize,
    out_map: &[u8; TILE_SIZE],
) {
    let mut out_i = 0;
    for x in (0..8).rev() {
        for y in 0..height {
            output[out_map[out_i] as usize] = input[y * 8 + x];
            out_i += 1;
        }
    }
}

/// Copies the used rows of a rotated tile into the strip buffer at the
/// given line stride.
pub(crate) fn write_tile_to_output(
    output: &mut [u32],
    tile: &ImageTile,
    height: usize,
    line_stride: usize,
) {
    for y in 0..height {
        output[y * line_stride..y * line_stride + 8].copy_from_slice(&tile[y * 8..y * 8 + 8]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_tile() -> ImageTile {
        let mut rng = rand::rng();
        let mut tile = [0u32; TILE_SIZE];
        for pixel in tile.iter_mut() {
            *pixel = rng.random::<u32>();
        }
        tile
    }

    #[test]
    fn test_quarter_turns_compose_to_the_identity() {
        let original = random_tile();
        let mut a = [0u32; TILE_SIZE];
        let mut b = [0u32; TILE_SIZE];
        rotate_tile_90(&original, &mut a, 8, &LINEAR_LUT);
        rotate_tile_90(&a, &mut b, 8, &LINEAR_LUT);
        rotate_tile_90(&b, &mut a, 8, &LINEAR_LUT);
        rotate_tile_90(&a, &mut b, 8, &LINEAR_LUT);
        assert_eq!(b, original);
    }

    #[test]
    fn test_half_turn_equals_two_quarter_turns() {
        let original = random_tile();
        let mut once = [0u32; TILE_SIZE];
        let mut twice = [0u32; TILE_SIZE];
        let mut half = [0u32; TILE_SIZE];
        rotate_tile_90(&original, &mut once, 8, &LINEAR_LUT);
        rotate_tile_90(&once, &mut twice, 8, &LINEAR_LUT);
        rotate_tile_180(&original, &mut half, 8, &LINEAR_LUT);
        assert_eq!(twice, half);
    }

    #[test]
    fn test_270_equals_three_quarter_turns() {
        let original = random_tile();
        let mut a = [0u32; TILE_SIZE];
        let mut b = [0u32; TILE_SIZE];
        let mut direct = [0u32; TILE_SIZE];
        rotate_tile_90(&original, &mut a, 8, &LINEAR_LUT);
        rotate_tile_90(&a, &mut b, 8, &LINEAR_LUT);
        rotate_tile_90(&b, &mut a, 8, &LINEAR_LUT);
        rotate_tile_270(&original, &mut direct, 8, &LINEAR_LUT);
        assert_eq!(a, direct);
    }

    #[test]
    fn test_quarter_turn_reads_columns_bottom_up() {
        let mut tile = [0u32; TILE_SIZE];
        for (i, pixel) in tile.iter_mut().enumerate() {
            *pixel = i as u32;
        }
        let mut rotated = [0u32; TILE_SIZE];
        rotate_tile_90(&tile, &mut rotated, 8, &LINEAR_LUT);

        // Output row x holds input column x from the last row upward.
        for x in 0..8 {
            for (slot, y) in (0..8).rev().enumerate() {
                assert_eq!(rotated[x * 8 + slot], (y * 8 + x) as u32);
            }
        }
    }

    #[test]
    fn test_partial_strip_touches_only_active_positions() {
        let tile = random_tile();
        let mut output = [0xDEADBEEFu32; TILE_SIZE];
        rotate_tile_90(&tile, &mut output, 3, &LINEAR_LUT);
        // 8 columns of 3 active rows fill the first 24 slots.
        assert!(output[..24].iter().all(|&p| p != 0xDEADBEEF));
        assert!(output[24..].iter().all(|&p| p == 0xDEADBEEF));
    }

    #[test]
    fn test_morton_remap_hits_the_documented_slots() {
        let mut tile = [0u32; TILE_SIZE];
        for (i, pixel) in tile.iter_mut().enumerate() {
            *pixel = i as u32;
        }
        let mut swizzled = [0u32; TILE_SIZE];
        rotate_tile_0(&tile, &mut swizzled, 8, &MORTON_LUT);

        assert_eq!(
            &swizzled[..16],
            &[0, 1, 8, 9, 2, 3, 10, 11, 16, 17, 24, 25, 18, 19, 26, 27]
        );
    }

    #[test]
    fn test_tile_writeback_respects_the_line_stride() {
        let mut tile = [0u32; TILE_SIZE];
        for (i, pixel) in tile.iter_mut().enumerate() {
            *pixel = i as u32;
        }
        let mut output = vec![0u32; 16 * 8];
        write_tile_to_output(&mut output[8..], &tile, 8, 16);

        for y in 0..8 {
            assert_eq!(output[8 + y * 16..8 + y * 16 + 8], tile[y * 8..y * 8 + 8]);
            assert!(output[y * 16..y * 16 + 8].iter().all(|&p| p == 0));
        }
    }
}
