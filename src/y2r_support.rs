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

/// Pixels per 8x8 tile, the unit of decode and rotation.
pub(crate) const TILE_SIZE: usize = 64;
/// Widest strip the converter buffers internally, in tiles.
pub(crate) const MAX_TILES: usize = 1024 / 8;
/// One 8x8 block of packed `R<<24 | G<<16 | B<<8` pixels.
pub(crate) type ImageTile = [u32; TILE_SIZE];

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Declares the sample layout of the source streams.
pub enum InputFormat {
    /// 4:2:2, 8-bit samples in separate Y, U and V planes.
    Yuv422Indiv8 = 0,
    /// 4:2:0, 8-bit samples in separate Y, U and V planes.
    Yuv420Indiv8 = 1,
    /// 4:2:2, 16-bit samples in separate planes, narrowed to 8 bits on transfer.
    Yuv422Indiv16 = 2,
    /// 4:2:0, 16-bit samples in separate planes, narrowed to 8 bits on transfer.
    Yuv420Indiv16 = 3,
    /// Single interleaved stream of Y0 U Y1 V quadruples.
    Yuyv422Interleaved = 4,
}

impl From<u8> for InputFormat {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => InputFormat::Yuv422Indiv8,
            1 => InputFormat::Yuv420Indiv8,
            2 => InputFormat::Yuv422Indiv16,
            3 => InputFormat::Yuv420Indiv16,
            4 => InputFormat::Yuyv422Interleaved,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl InputFormat {
    /// Bytes occupied by one sample in the source stream before narrowing.
    #[inline(always)]
    pub const fn get_sample_size(&self) -> usize {
        match self {
            InputFormat::Yuv422Indiv16 | InputFormat::Yuv420Indiv16 => 2,
            _ => 1,
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Declares the packed destination pixel format.
pub enum OutputFormat {
    Rgba8 = 0,
    Rgb8 = 1,
    Rgb5A1 = 2,
    Rgb565 = 3,
}

impl From<u8> for OutputFormat {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => OutputFormat::Rgba8,
            1 => OutputFormat::Rgb8,
            2 => OutputFormat::Rgb5A1,
            3 => OutputFormat::Rgb565,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl OutputFormat {
    #[inline(always)]
    pub const fn get_bytes_per_pixel(&self) -> usize {
        match self {
            OutputFormat::Rgba8 => 4,
            OutputFormat::Rgb8 => 3,
            OutputFormat::Rgb5A1 | OutputFormat::Rgb565 => 2,
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Declares the geometric rotation applied to each strip, clockwise.
pub enum Rotation {
    None = 0,
    Clockwise90 = 1,
    Clockwise180 = 2,
    Clockwise270 = 3,
}

impl From<u8> for Rotation {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => Rotation::None,
            1 => Rotation::Clockwise90,
            2 => Rotation::Clockwise180,
            3 => Rotation::Clockwise270,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Declares the pixel order of the destination buffer.
pub enum BlockAlignment {
    /// Line-by-line row major order.
    Linear = 0,
    /// Swizzled 8x8 tile order. Requires a line count divisible by 8.
    Block8x8 = 1,
}

impl From<u8> for BlockAlignment {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => BlockAlignment::Linear,
            1 => BlockAlignment::Block8x8,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

const ITU_REC_601: [i16; 8] = [0x100, 0x166, 0xB6, 0x58, 0x1C5, -0x166F, 0x10EE, -0x1C5B];
const ITU_REC_709: [i16; 8] = [0x100, 0x193, 0x77, 0x2F, 0x1DB, -0x1933, 0xA7C, -0x1D51];
const ITU_REC_601_SCALING: [i16; 8] = [0x12A, 0x198, 0xD0, 0x64, 0x204, -0x1BDE, 0x10F2, -0x229B];
const ITU_REC_709_SCALING: [i16; 8] = [0x12A, 0x1CA, 0x88, 0x36, 0x21C, -0x1F04, 0x99C, -0x2421];

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Declares one of the fixed coefficient tuples wired into the modeled
/// converter. The scaling variants map the limited TV sample range onto the
/// full output range.
pub enum StandardCoefficient {
    ItuRec601 = 0,
    ItuRec709 = 1,
    ItuRec601Scaling = 2,
    ItuRec709Scaling = 3,
}

impl From<u8> for StandardCoefficient {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => StandardCoefficient::ItuRec601,
            1 => StandardCoefficient::ItuRec709,
            2 => StandardCoefficient::ItuRec601Scaling,
            3 => StandardCoefficient::ItuRec709Scaling,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl StandardCoefficient {
    pub(crate) const COUNT: usize = 4;

    /// The eight signed fixed-point constants of this coefficient set.
    #[inline]
    pub const fn get_coefficients(&self) -> [i16; 8] {
        match self {
            StandardCoefficient::ItuRec601 => ITU_REC_601,
            StandardCoefficient::ItuRec709 => ITU_REC_709,
            StandardCoefficient::ItuRec601Scaling => ITU_REC_601_SCALING,
            StandardCoefficient::ItuRec709Scaling => ITU_REC_709_SCALING,
        }
    }
}
