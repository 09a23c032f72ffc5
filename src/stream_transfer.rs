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
use crate::y2r_error::{MismatchedSize, Y2rError};
use crate::y2r_support::OutputFormat;

/// Byte-addressable store backing the transfer engine, the seam to the
/// host's memory subsystem.
///
/// Addresses are opaque integers owned by the store. A returned view must
/// cover at least the requested length; how the store maps addresses to
/// storage is its own concern.
pub trait ByteStore {
    /// Readable view of `len` bytes starting at `address`.
    fn read_bytes(&self, address: u32, len: usize) -> &[u8];
    /// Writable view of `len` bytes starting at `address`.
    fn write_bytes(&mut self, address: u32, len: usize) -> &mut [u8];
}

/// Cursor into an external store for one stream of a conversion job.
///
/// `transfer_unit` bytes move contiguously, then `gap` bytes are skipped,
/// modeling a bus transfer with a fixed stride between bursts. The cursor
/// is mutated in place as streaming proceeds, so one logical image may be
/// moved across any number of calls.
#[derive(Debug, Copy, Clone, Default)]
pub struct ConversionBuffer {
    pub address: u32,
    /// Remaining bytes of the whole image, decremented as units complete.
    pub image_size: u32,
    pub transfer_unit: u16,
    pub gap: u16,
}

/// Simulates an incoming bus transfer. `SAMPLE_SIZE` of 2 narrows 16-bit
/// samples to 8 bits by keeping the byte at each sample's base offset.
pub(crate) fn receive_data<const SAMPLE_SIZE: usize, S: ByteStore>(
    store: &S,
    output: &mut [u8],
    buf: &mut ConversionBuffer,
) -> Result<(), Y2rError> {
    let output_unit = buf.transfer_unit as usize / SAMPLE_SIZE;
    if output_unit == 0 {
        return Err(Y2rError::ZeroTransferUnit);
    }
    if output.len() % output_unit != 0 {
        return Err(Y2rError::UnalignedTransfer(MismatchedSize {
            expected: output_unit,
            received: output.len(),
        }));
    }

    for chunk in output.chunks_exact_mut(output_unit) {
        let unit = store.read_bytes(buf.address, buf.transfer_unit as usize);
        if SAMPLE_SIZE == 1 {
            chunk.copy_from_slice(&unit[..output_unit]);
        } else {
            for (sample, raw) in chunk.iter_mut().zip(unit.chunks_exact(SAMPLE_SIZE)) {
                *sample = raw[0];
            }
        }

        buf.address = buf
            .address
            .wrapping_add(buf.transfer_unit as u32 + buf.gap as u32);
        buf.image_size = buf.image_size.wrapping_sub(buf.transfer_unit as u32);
    }
    Ok(())
}

/// Converts intermediate RGB32 pixels to the destination format while
/// simulating an outgoing bus transfer.
pub(crate) fn send_data(
    store: &mut impl ByteStore,
    input: &[u32],
    buf: &mut ConversionBuffer,
    output_format: OutputFormat,
    alpha: u8,
) -> Result<(), Y2rError> {
    let bytes_per_pixel = output_format.get_bytes_per_pixel();
    let transfer_unit = buf.transfer_unit as usize;
    if transfer_unit < bytes_per_pixel {
        return Err(Y2rError::ZeroTransferUnit);
    }
    if transfer_unit % bytes_per_pixel != 0 {
        return Err(Y2rError::UnalignedTransfer(MismatchedSize {
            expected: bytes_per_pixel,
            received: transfer_unit,
        }));
    }
    let pixels_per_unit = transfer_unit / bytes_per_pixel;
    if input.len() % pixels_per_unit != 0 {
        return Err(Y2rError::UnalignedTransfer(MismatchedSize {
            expected: pixels_per_unit,
            received: input.len(),
        }));
    }

    for unit_pixels in input.chunks_exact(pixels_per_unit) {
        let unit = store.write_bytes(buf.address, transfer_unit);
        for (bytes, &color) in unit.chunks_exact_mut(bytes_per_pixel).zip(unit_pixels) {
            match output_format {
                OutputFormat::Rgba8 => encode_rgba8(color, alpha, bytes),
                OutputFormat::Rgb8 => encode_rgb8(color, bytes),
                OutputFormat::Rgb5A1 => encode_rgb5a1(color, alpha, bytes),
                OutputFormat::Rgb565 => encode_rgb565(color, bytes),
            }
        }

        buf.address = buf.address.wrapping_add(transfer_unit as u32 + buf.gap as u32);
        buf.image_size = buf.image_size.wrapping_sub(transfer_unit as u32);
    }
    Ok(())
}

#[inline(always)]
fn encode_rgba8(color: u32, alpha: u8, bytes: &mut [u8]) {
    bytes[3] = (color >> 24) as u8;
    bytes[2] = (color >> 16) as u8;
    bytes[1] = (color >> 8) as u8;
    bytes[0] = alpha;
}

#[inline(always)]
fn encode_rgb8(color: u32, bytes: &mut [u8]) {
    bytes[2] = (color >> 24) as u8;
    bytes[1] = (color >> 16) as u8;
    bytes[0] = (color >> 8) as u8;
}

#[inline(always)]
fn encode_rgb5a1(color: u32, alpha: u8, bytes: &mut [u8]) {
    let r = ((color >> 24) & 0xFF) as u16;
    let g = ((color >> 16) & 0xFF) as u16;
    let b = ((color >> 8) & 0xFF) as u16;
    let data = ((r >> 3) << 11) | ((g >> 3) << 6) | ((b >> 3) << 1) | (alpha as u16 >> 7);
    bytes.copy_from_slice(&data.to_le_bytes());
}

#[inline(always)]
fn encode_rgb565(color: u32, bytes: &mut [u8]) {
    let r = ((color >> 24) & 0xFF) as u16;
    let g = ((color >> 16) & 0xFF) as u16;
    let b = ((color >> 8) & 0xFF) as u16;
    let data = ((r >> 3) << 11) | ((g >> 2) << 5) | (b >> 3);
    bytes.copy_from_slice(&data.to_le_bytes());
}
