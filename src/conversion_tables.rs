/*
 * Copyright (c) Radzivon Bartoshyk, 2/2025. All rights reserved.
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
use crate::y2r_support::StandardCoefficient;
use num_traits::clamp;
use std::sync::OnceLock;

const ROUNDING_OFFSET: i32 = 0x18;

/// Precomputed lookup tables for one coefficient set, 256 KiB total.
///
/// The converter never multiplies per pixel. R depends on (Y, V) and B on
/// (Y, U) directly; the chroma green term is first renormalized into an
/// 8-bit intermediate index so that G stays a plain table access for any
/// coefficient magnitude. Table contents are bit-exact with the modeled
/// hardware, as far as could be verified.
pub(crate) struct CoefficientTable {
    yv_to_r: Vec<[u8; 256]>,
    yu_to_b: Vec<[u8; 256]>,
    uv_to_ig: Vec<[u8; 256]>,
    yig_to_g: Vec<[u8; 256]>,
}

impl CoefficientTable {
    fn build(coefficient: StandardCoefficient) -> CoefficientTable {
        let c = coefficient.get_coefficients().map(i32::from);

        let mut uv_to_ig = vec![[0u8; 256]; 256];
        let max_ig = c[2] * 255 + c[3] * 255 + 1;
        for v in 0..256i32 {
            for u in 0..256i32 {
                let i = c[2] * v + c[3] * u;
                uv_to_ig[u as usize][v as usize] = ((i << 8) / max_ig) as u8;
            }
        }

        let mut yv_to_r = vec![[0u8; 256]; 256];
        let mut yu_to_b = vec![[0u8; 256]; 256];
        let mut yig_to_g = vec![[0u8; 256]; 256];
        for y in 0..256i32 {
            let c_y = c[0] * y;
            for v in 0..256i32 {
                let r = ((c_y + c[1] * v) >> 3) + c[5] + ROUNDING_OFFSET;
                yv_to_r[y as usize][v as usize] = clamp(r >> 5, 0, 0xFF) as u8;

                // Colliding intermediate indices resolve last-writer-wins,
                // so this fill order is part of the observable behavior.
                for u in 0..256i32 {
                    let g = ((c_y - c[2] * v - c[3] * u) >> 3) + c[6] + ROUNDING_OFFSET;
                    let ig = uv_to_ig[u as usize][v as usize];
                    yig_to_g[y as usize][ig as usize] = clamp(g >> 5, 0, 0xFF) as u8;
                }
            }
            for u in 0..256i32 {
                let b = ((c_y + c[4] * u) >> 3) + c[7] + ROUNDING_OFFSET;
                yu_to_b[y as usize][u as usize] = clamp(b >> 5, 0, 0xFF) as u8;
            }
        }

        CoefficientTable {
            yv_to_r,
            yu_to_b,
            uv_to_ig,
            yig_to_g,
        }
    }

    /// Packed `R<<24 | G<<16 | B<<8` for one sample triple.
    #[inline(always)]
    pub(crate) fn get_rgb(&self, y: u8, u: u8, v: u8) -> u32 {
        let ig = self.uv_to_ig[u as usize][v as usize] as usize;
        ((self.yv_to_r[y as usize][v as usize] as u32) << 24)
            | ((self.yig_to_g[y as usize][ig] as u32) << 16)
            | ((self.yu_to_b[y as usize][u as usize] as u32) << 8)
    }

    /// Two luma samples sharing one chroma pair resolve the intermediate
    /// green index once.
    #[inline(always)]
    pub(crate) fn get_rgb2(&self, y0: u8, y1: u8, u: u8, v: u8) -> (u32, u32) {
        let ig = self.uv_to_ig[u as usize][v as usize] as usize;
        let p0 = ((self.yv_to_r[y0 as usize][v as usize] as u32) << 24)
            | ((self.yig_to_g[y0 as usize][ig] as u32) << 16)
            | ((self.yu_to_b[y0 as usize][u as usize] as u32) << 8);
        let p1 = ((self.yv_to_r[y1 as usize][v as usize] as u32) << 24)
            | ((self.yig_to_g[y1 as usize][ig] as u32) << 16)
            | ((self.yu_to_b[y1 as usize][u as usize] as u32) << 8);
        (p0, p1)
    }
}

static TABLES: [OnceLock<CoefficientTable>; StandardCoefficient::COUNT] =
    [const { OnceLock::new() }; StandardCoefficient::COUNT];

/// Process-wide table for `coefficient`, built on first use and retained
/// for the lifetime of the process.
pub(crate) fn coefficient_table(coefficient: StandardCoefficient) -> &'static CoefficientTable {
    TABLES[coefficient as usize].get_or_init(|| CoefficientTable::build(coefficient))
}

/// Builds the lookup tables for `coefficient` if they do not exist yet.
///
/// Conversion jobs build tables lazily, which puts a one-off 256 KiB table
/// construction on the first job per coefficient set. Hosts that care can
/// call this up front to move the cost off the conversion path.
pub fn prepare_coefficient_tables(coefficient: StandardCoefficient) {
    let _ = coefficient_table(coefficient);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const ALL_SETS: [StandardCoefficient; 4] = [
        StandardCoefficient::ItuRec601,
        StandardCoefficient::ItuRec709,
        StandardCoefficient::ItuRec601Scaling,
        StandardCoefficient::ItuRec709Scaling,
    ];

    #[test]
    fn test_ig_index_monotonic_in_weighted_chroma_sum() {
        for set in ALL_SETS {
            let table = coefficient_table(set);
            let c = set.get_coefficients().map(i32::from);

            let mut pairs: Vec<(i32, u8)> = Vec::with_capacity(256 * 256);
            for v in 0..256usize {
                for u in 0..256usize {
                    pairs.push((c[2] * v as i32 + c[3] * u as i32, table.uv_to_ig[u][v]));
                }
            }
            pairs.sort_by_key(|pair| pair.0);
            for window in pairs.windows(2) {
                assert!(
                    window[0].1 <= window[1].1,
                    "IG index not monotonic for {:?}: sum {} gave {}, sum {} gave {}",
                    set,
                    window[0].0,
                    window[0].1,
                    window[1].0,
                    window[1].1
                );
            }
        }
    }

    #[test]
    fn test_rgb_lookup_composes_the_four_tables() {
        let table = coefficient_table(StandardCoefficient::ItuRec601);
        for y in 0..256usize {
            for u in (0..256usize).step_by(2) {
                for v in (0..256usize).step_by(2) {
                    let ig = table.uv_to_ig[u][v] as usize;
                    let expected = ((table.yv_to_r[y][v] as u32) << 24)
                        | ((table.yig_to_g[y][ig] as u32) << 16)
                        | ((table.yu_to_b[y][u] as u32) << 8);
                    assert_eq!(table.get_rgb(y as u8, u as u8, v as u8), expected);
                }
            }
        }
    }

    #[test]
    fn test_paired_lookup_matches_two_single_lookups() {
        let table = coefficient_table(StandardCoefficient::ItuRec709);
        let mut rng = rand::rng();
        for _ in 0..4096 {
            let y0 = rng.random::<u8>();
            let y1 = rng.random::<u8>();
            let u = rng.random::<u8>();
            let v = rng.random::<u8>();
            assert_eq!(
                table.get_rgb2(y0, y1, u, v),
                (table.get_rgb(y0, u, v), table.get_rgb(y1, u, v))
            );
        }
    }

    #[test]
    fn test_red_and_blue_follow_the_coefficient_formula() {
        for set in ALL_SETS {
            let table = coefficient_table(set);
            let c = set.get_coefficients().map(i32::from);
            for y in (0..256).step_by(5) {
                let c_y = c[0] * y;
                for s in (0..256).step_by(5) {
                    let r = ((c_y + c[1] * s) >> 3) + c[5] + ROUNDING_OFFSET;
                    assert_eq!(
                        table.yv_to_r[y as usize][s as usize],
                        (r >> 5).clamp(0, 0xFF) as u8
                    );
                    let b = ((c_y + c[4] * s) >> 3) + c[7] + ROUNDING_OFFSET;
                    assert_eq!(
                        table.yu_to_b[y as usize][s as usize],
                        (b >> 5).clamp(0, 0xFF) as u8
                    );
                }
            }
        }
    }

    #[test]
    fn test_packed_layout_leaves_the_low_byte_clear() {
        let table = coefficient_table(StandardCoefficient::ItuRec601Scaling);
        let mut rng = rand::rng();
        for _ in 0..4096 {
            let pixel = table.get_rgb(rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>());
            assert_eq!(pixel & 0xFF, 0);
        }
    }
}
