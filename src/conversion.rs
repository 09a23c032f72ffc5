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
use crate::conversion_tables::coefficient_table;
use crate::strip_decode::decode_strip;
use crate::stream_transfer::{receive_data, send_data, ByteStore, ConversionBuffer};
use crate::tile_rotate::{
    rotate_tile_0, rotate_tile_180, rotate_tile_270, rotate_tile_90, write_tile_to_output,
    LINEAR_LUT, MORTON_LUT,
};
use crate::y2r_error::{MismatchedSize, Y2rError};
use crate::y2r_support::{
    BlockAlignment, ImageTile, InputFormat, OutputFormat, Rotation, StandardCoefficient, MAX_TILES,
    TILE_SIZE,
};

/// Full parameter set for one conversion job.
///
/// The five stream cursors are owned by the job and advanced in place while
/// it runs. Planar formats use `src_y`, `src_u` and `src_v`; the interleaved
/// format uses `src_yuyv` alone.
#[derive(Debug, Clone)]
pub struct ConversionConfiguration {
    pub input_format: InputFormat,
    pub output_format: OutputFormat,
    pub rotation: Rotation,
    pub block_alignment: BlockAlignment,
    pub coefficients: StandardCoefficient,
    /// Width of an input line in pixels. Must be a multiple of 8.
    pub input_line_width: u32,
    pub input_lines: u32,
    /// Constant alpha attached to destination formats that carry one; only
    /// the low byte is transferred.
    pub alpha: u16,
    pub src_y: ConversionBuffer,
    pub src_u: ConversionBuffer,
    pub src_v: ConversionBuffer,
    pub src_yuyv: ConversionBuffer,
    pub dst: ConversionBuffer,
}

impl ConversionConfiguration {
    pub fn check_constraints(&self) -> Result<(), Y2rError> {
        if self.input_line_width == 0 || self.input_lines == 0 {
            return Err(Y2rError::ZeroBaseSize);
        }
        if self.input_line_width % 8 != 0 {
            return Err(Y2rError::UnalignedLineWidth(self.input_line_width as usize));
        }
        if self.block_alignment == BlockAlignment::Block8x8 && self.input_lines % 8 != 0 {
            return Err(Y2rError::UnalignedImageLines(self.input_lines as usize));
        }
        let num_tiles = (self.input_line_width >> 3) as usize;
        if num_tiles > MAX_TILES {
            return Err(Y2rError::StripTooWide(MismatchedSize {
                expected: MAX_TILES,
                received: num_tiles,
            }));
        }
        Ok(())
    }
}

/// Runs one colorspace conversion job to completion.
///
/// The modeled converter buffers a single strip of eight input lines,
/// converts it in one go and writes it out before loading the next strip.
/// Per strip the steps are:
///
/// - Raw samples arrive through [`ByteStore`] reads driven by the source
///   cursors. A stream may be fed in several bursts per strip since every
///   cursor keeps its unit and gap stride across calls, which leaves input
///   strides flexible. 16-bit sample formats are narrowed to 8 bits on the
///   way in.
/// - The strip is decoded into 8x8 RGB32 tiles using the lookup tables of
///   the selected coefficient set.
/// - Each tile is rotated on its own and remapped into line-by-line or
///   swizzled 8x8 order. Because tiles rotate independently, a quarter turn
///   yields output arranged as a sequence of 8-wide strips rather than a
///   rotated whole image, and for 180 and 270 degrees the order of tiles
///   inside the strip inverts as well.
/// - The strip is encoded into the destination format and pushed out
///   through the destination cursor.
///
/// A job runs synchronously to completion and is not resumable; on a
/// contract violation it aborts with the violated precondition before the
/// offending transfer. A final strip shorter than eight lines is emitted
/// with its natural alignment under `Linear` layout. Real hardware
/// misaligns that case for quarter-turn rotations and produces garbage
/// under `Block8x8`; the former is normalized here and the latter is
/// rejected by [`ConversionConfiguration::check_constraints`].
pub fn perform_conversion<S: ByteStore>(
    store: &mut S,
    cvt: &mut ConversionConfiguration,
) -> Result<(), Y2rError> {
    cvt.check_constraints()?;

    let width = cvt.input_line_width as usize;
    let lines = cvt.input_lines as usize;
    let num_tiles = width >> 3;

    // Strip scratch. The luma area also holds the double-width interleaved
    // stream, so it is sized for that worst case.
    let mut y_data = vec![0u8; width * 16];
    let mut u_data = vec![0u8; width * 4];
    let mut v_data = vec![0u8; width * 4];
    let mut output = vec![0u32; width * 8];
    let mut tiles = vec![[0u32; TILE_SIZE]; num_tiles];
    let mut scratch_tile: ImageTile = [0; TILE_SIZE];

    let table = coefficient_table(cvt.coefficients);

    let tile_remap: &[u8; TILE_SIZE] = match cvt.block_alignment {
        BlockAlignment::Linear => &LINEAR_LUT,
        BlockAlignment::Block8x8 => &MORTON_LUT,
    };

    let mut y = 0;
    while y < lines {
        let row_height = (lines - y).min(8);
        // Pixels of incoming data required for this strip.
        let row_data_size = row_height * width;

        match cvt.input_format {
            InputFormat::Yuv422Indiv8 => {
                receive_data::<1, _>(store, &mut y_data[..row_data_size], &mut cvt.src_y)?;
                receive_data::<1, _>(store, &mut u_data[..row_data_size >> 1], &mut cvt.src_u)?;
                receive_data::<1, _>(store, &mut v_data[..row_data_size >> 1], &mut cvt.src_v)?;
            }
            InputFormat::Yuv420Indiv8 => {
                receive_data::<1, _>(store, &mut y_data[..row_data_size], &mut cvt.src_y)?;
                receive_data::<1, _>(store, &mut u_data[..row_data_size >> 2], &mut cvt.src_u)?;
                receive_data::<1, _>(store, &mut v_data[..row_data_size >> 2], &mut cvt.src_v)?;
            }
            InputFormat::Yuv422Indiv16 => {
                receive_data::<2, _>(store, &mut y_data[..row_data_size], &mut cvt.src_y)?;
                receive_data::<2, _>(store, &mut u_data[..row_data_size >> 1], &mut cvt.src_u)?;
                receive_data::<2, _>(store, &mut v_data[..row_data_size >> 1], &mut cvt.src_v)?;
            }
            InputFormat::Yuv420Indiv16 => {
                receive_data::<2, _>(store, &mut y_data[..row_data_size], &mut cvt.src_y)?;
                receive_data::<2, _>(store, &mut u_data[..row_data_size >> 2], &mut cvt.src_u)?;
                receive_data::<2, _>(store, &mut v_data[..row_data_size >> 2], &mut cvt.src_v)?;
            }
            InputFormat::Yuyv422Interleaved => {
                receive_data::<1, _>(store, &mut y_data[..row_data_size << 1], &mut cvt.src_yuyv)?;
            }
        }

        decode_strip(
            cvt.input_format,
            &y_data,
            &u_data,
            &v_data,
            &mut tiles,
            width,
            row_height,
            table,
        );

        for i in 0..num_tiles {
            let image_strip_width;
            let output_stride;

            match cvt.rotation {
                Rotation::None => {
                    rotate_tile_0(&tiles[i], &mut scratch_tile, row_height, tile_remap);
                    image_strip_width = width;
                    output_stride = 8;
                }
                Rotation::Clockwise90 => {
                    rotate_tile_90(&tiles[i], &mut scratch_tile, row_height, tile_remap);
                    image_strip_width = 8;
                    output_stride = row_height << 3;
                }
                Rotation::Clockwise180 => {
                    // Tiles rotate individually, so the order of tiles in
                    // the strip inverts as well.
                    rotate_tile_180(
                        &tiles[num_tiles - i - 1],
                        &mut scratch_tile,
                        row_height,
                        tile_remap,
                    );
                    image_strip_width = width;
                    output_stride = 8;
                }
                Rotation::Clockwise270 => {
                    rotate_tile_270(
                        &tiles[num_tiles - i - 1],
                        &mut scratch_tile,
                        row_height,
                        tile_remap,
                    );
                    image_strip_width = 8;
                    output_stride = row_height << 3;
                }
            }

            match cvt.block_alignment {
                BlockAlignment::Linear => write_tile_to_output(
                    &mut output[i * output_stride..],
                    &scratch_tile,
                    row_height,
                    image_strip_width,
                ),
                BlockAlignment::Block8x8 => {
                    write_tile_to_output(&mut output[i * TILE_SIZE..], &scratch_tile, 8, 8)
                }
            }
        }

        send_data(
            store,
            &output[..row_data_size],
            &mut cvt.dst,
            cvt.output_format,
            cvt.alpha as u8,
        )?;

        y += 8;
    }

    Ok(())
}
