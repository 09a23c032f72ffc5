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
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Contract violations of a conversion job. A job fails with one of these
/// before producing the offending transfer; no violation is silently
/// coerced.
#[derive(Debug)]
pub enum Y2rError {
    ZeroBaseSize,
    ZeroTransferUnit,
    UnalignedLineWidth(usize),
    UnalignedImageLines(usize),
    StripTooWide(MismatchedSize),
    UnalignedTransfer(MismatchedSize),
}

impl Display for Y2rError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Y2rError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            Y2rError::ZeroTransferUnit => {
                f.write_str("Transfer unit must hold at least one whole sample")
            }
            Y2rError::UnalignedLineWidth(width) => f.write_fmt(format_args!(
                "Input line width must be a multiple of 8, but it was {}",
                width
            )),
            Y2rError::UnalignedImageLines(lines) => f.write_fmt(format_args!(
                "Block 8x8 output requires a lines count that is a multiple of 8, but it was {}",
                lines
            )),
            Y2rError::StripTooWide(size) => f.write_fmt(format_args!(
                "A strip must hold at most {} tiles, but it would hold {}",
                size.expected, size.received
            )),
            Y2rError::UnalignedTransfer(size) => f.write_fmt(format_args!(
                "Transfer size must be a multiple of {}, but it was {}",
                size.expected, size.received
            )),
        }
    }
}

impl Error for Y2rError {}
