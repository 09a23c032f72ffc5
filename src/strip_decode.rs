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
use crate::conversion_tables::CoefficientTable;
use crate::y2r_support::{ImageTile, InputFormat};

/// Converts one strip from the source YUV layout into 8x8 RGB32 tiles.
///
/// `height` is the active row count of the strip, at most 8. Pixels land
/// straight at `tiles[x >> 3][(y << 3) + (x & 7)]`, so no separate
/// re-tiling pass is needed. 16-bit planar formats share the 8-bit paths
/// because samples are narrowed during transfer, before decode.
///
/// The interleaved format carries all of its samples in `input_y`;
/// `input_u` and `input_v` are not read in that case.
pub(crate) fn decode_strip(
    input_format: InputFormat,
    input_y: &[u8],
    input_u: &[u8],
    input_v: &[u8],
    tiles: &mut [ImageTile],
    width: usize,
    height: usize,
    table: &CoefficientTable,
) {
    match input_format {
        InputFormat::Yuv422Indiv8 | InputFormat::Yuv422Indiv16 => {
            let mut yi = 0;
            for y in 0..height {
                for x in 0..width {
                    // U = input_u[(y * width + x) / 2]
                    let ci = yi >> 1;
                    tiles[x >> 3][(y << 3) + (x & 7)] =
                        table.get_rgb(input_y[yi], input_u[ci], input_v[ci]);
                    yi += 1;
                }
            }
        }
        InputFormat::Yuv420Indiv8 | InputFormat::Yuv420Indiv16 => {
            // Rows are processed in pairs sharing one chroma row. The chroma
            // cursor rewinds after the first row of a pair and keeps its
            // advance after the second.
            let mut yi = 0;
            let mut ui = 0;
            let mut y = 0;
            while y < height {
                for x in (0..width).step_by(2) {
                    // U = input_u[((y / 2) * width + x) / 2]
                    let (p0, p1) =
                        table.get_rgb2(input_y[yi], input_y[yi + 1], input_u[ui], input_v[ui]);
                    tiles[x >> 3][(y << 3) + (x & 7)] = p0;
                    tiles[(x + 1) >> 3][(y << 3) + ((x + 1) & 7)] = p1;
                    ui += 1;
                    yi += 2;
                }
                ui -= width >> 1;
                y += 1;
                for x in (0..width).step_by(2) {
                    let (p0, p1) =
                        table.get_rgb2(input_y[yi], input_y[yi + 1], input_u[ui], input_v[ui]);
                    tiles[x >> 3][(y << 3) + (x & 7)] = p0;
                    tiles[(x + 1) >> 3][(y << 3) + ((x + 1) & 7)] = p1;
                    ui += 1;
                    yi += 2;
                }
                y += 1;
            }
        }
        InputFormat::Yuyv422Interleaved => {
            let mut yi = 0;
            for y in 0..height {
                for x in 0..width {
                    // An even and odd pixel pair read chroma out of the same
                    // Y0 U Y1 V quadruple.
                    let ui = (((y * width + x) & !1) << 1) + 1;
                    let pixel = table.get_rgb(input_y[yi], input_y[ui], input_y[ui + 2]);
                    yi += 2;
                    tiles[x >> 3][(y << 3) + (x & 7)] = pixel;
                }
            }
        }
    }
}
