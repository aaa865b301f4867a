// This file is part of daid, the AMOLED dynamic AID gamma calibrator
// Copyright (C) 2023 Pengutronix e.K.
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! Packing of calibration values into register bytes and back.
//!
//! The MTP area and the gamma register share one layout:
//!
//! | bytes  | content                                           |
//! |--------|---------------------------------------------------|
//! | 0..6   | V255 per channel, flag byte followed by magnitude |
//! | 6..30  | GCP 8 down to GCP 1, one byte per channel         |
//! | 30..32 | VT per channel as nibbles (R, G low/high, B low)  |
//! | 32..35 | unused                                            |

use crate::error::{DaidError, Result};
use crate::{Calibration, GammaRow, CHANNELS, GCP_COUNT, GCP_MAX, PARAM_COUNT};

/// Bit offset of the first VT nibble
const VT_BIT_OFFSET: usize = 30 * 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidth {
    /// 3 bit magnitude with a sign bit above it
    Nibble,
    /// Two's complement byte
    Byte,
    /// Flag bit in bit 0 of one byte followed by an 8 bit magnitude byte.
    ///
    /// The calibration area reads the flag as a sign, the gamma register as
    /// bit 8 of an unsigned code. [`decode_field`] does the former, use
    /// [`unpack_gamma_row`] for the latter.
    Wide,
}

/// Read a signed value from `data`.
///
/// `bit_offset` has to be nibble aligned for [`FieldWidth::Nibble`] and
/// byte aligned otherwise.
///
/// # Panics
///
/// If the field does not lie within `data`.
pub fn decode_field(data: &[u8], bit_offset: usize, width: FieldWidth) -> i32 {
    let pos = bit_offset / 8;

    match width {
        FieldWidth::Nibble => {
            let nibble = (data[pos] >> (bit_offset % 8)) & 0xf;
            let magnitude = i32::from(nibble & 0x7);

            if nibble & 0x8 != 0 {
                -magnitude
            } else {
                magnitude
            }
        }
        FieldWidth::Byte => i32::from(data[pos] as i8),
        FieldWidth::Wide => {
            let magnitude = i32::from(data[pos + 1]);

            if data[pos] & 0x1 != 0 {
                -magnitude
            } else {
                magnitude
            }
        }
    }
}

/// Write `value` into `data`, leaving all bits outside of the field alone.
///
/// Negative values of [`FieldWidth::Nibble`] and [`FieldWidth::Wide`] fields
/// are stored as sign and magnitude. Positive `Wide` values carry their
/// bit 8 in the flag bit, which makes 9 bit gamma codes (up to 511) come out
/// unchanged. `Byte` fields wrap like a cast to `u8` does.
///
/// # Panics
///
/// If the field does not lie within `data`.
pub fn encode_field(data: &mut [u8], bit_offset: usize, width: FieldWidth, value: i32) {
    let pos = bit_offset / 8;

    match width {
        FieldWidth::Nibble => {
            let shift = bit_offset % 8;
            let nibble = if value < 0 {
                0x8 | (value.unsigned_abs() as u8 & 0x7)
            } else {
                value as u8 & 0x7
            };

            data[pos] = (data[pos] & !(0xf << shift)) | (nibble << shift);
        }
        FieldWidth::Byte => data[pos] = value as u8,
        FieldWidth::Wide => {
            let (flag, magnitude) = if value < 0 {
                (1, value.unsigned_abs() as u8)
            } else {
                (((value >> 8) & 0x1) as u8, value as u8)
            };

            data[pos] = (data[pos] & !0x1) | flag;
            data[pos + 1] = magnitude;
        }
    }
}

/// Where the field for one control point / channel pair is located
fn field_location(gcp: usize, channel: usize) -> (usize, FieldWidth) {
    match gcp {
        0 => (VT_BIT_OFFSET + 4 * channel, FieldWidth::Nibble),
        GCP_MAX => (16 * channel, FieldWidth::Wide),
        _ => ((PARAM_COUNT - 5 - 3 * gcp + channel) * 8, FieldWidth::Byte),
    }
}

/// Split the calibration area into per channel offsets.
///
/// Only the first [`PARAM_COUNT`] bytes are looked at, anything beyond that
/// belongs to other factory settings.
pub fn unpack_calibration(data: &[u8]) -> Result<Calibration> {
    if data.len() < PARAM_COUNT {
        return Err(DaidError::MalformedInput(format!(
            "Calibration data has {} bytes, need at least {}",
            data.len(),
            PARAM_COUNT
        )));
    }

    let mut cal = [[0; CHANNELS]; GCP_COUNT];

    for (gcp, rgb) in cal.iter_mut().enumerate() {
        for (channel, value) in rgb.iter_mut().enumerate() {
            let (bit_offset, width) = field_location(gcp, channel);
            *value = decode_field(data, bit_offset, width);
        }
    }

    Ok(cal)
}

/// Read back the gamma codes from a row produced by [`pack_calibration`].
///
/// Unlike the calibration area the register holds unsigned codes: inner
/// control points are plain bytes and V255 is a 9 bit value.
pub fn unpack_gamma_row(row: &GammaRow) -> Calibration {
    let mut codes = [[0; CHANNELS]; GCP_COUNT];

    for (gcp, rgb) in codes.iter_mut().enumerate() {
        for (channel, code) in rgb.iter_mut().enumerate() {
            let (bit_offset, width) = field_location(gcp, channel);
            let pos = bit_offset / 8;

            *code = match width {
                FieldWidth::Nibble => decode_field(row, bit_offset, width),
                FieldWidth::Byte => i32::from(row[pos]),
                FieldWidth::Wide => i32::from(row[pos] & 0x1) << 8 | i32::from(row[pos + 1]),
            };
        }
    }

    codes
}

pub fn pack_calibration(cal: &Calibration) -> GammaRow {
    let mut row = [0; PARAM_COUNT];

    for (gcp, rgb) in cal.iter().enumerate() {
        for (channel, &value) in rgb.iter().enumerate() {
            let (bit_offset, width) = field_location(gcp, channel);
            encode_field(&mut row, bit_offset, width, value);
        }
    }

    row
}

#[cfg(test)]
mod tests {
    use super::{
        decode_field, encode_field, pack_calibration, unpack_calibration, unpack_gamma_row,
        FieldWidth,
    };
    use crate::{DaidError, GCP_COUNT, MTP_LEN, PARAM_COUNT};

    #[test]
    fn nibble_sign_magnitude() {
        let data = [0xd5];

        assert_eq!(decode_field(&data, 0, FieldWidth::Nibble), 5);
        assert_eq!(decode_field(&data, 4, FieldWidth::Nibble), -5);
    }

    #[test]
    fn nibble_keeps_other_half() {
        let mut data = [0xa0];

        encode_field(&mut data, 0, FieldWidth::Nibble, -3);
        assert_eq!(data[0], 0xab);

        encode_field(&mut data, 4, FieldWidth::Nibble, 7);
        assert_eq!(data[0], 0x7b);
    }

    #[test]
    fn byte_is_twos_complement() {
        assert_eq!(decode_field(&[0x80], 0, FieldWidth::Byte), -128);
        assert_eq!(decode_field(&[0x7f], 0, FieldWidth::Byte), 127);
        assert_eq!(decode_field(&[0xff], 0, FieldWidth::Byte), -1);

        let mut data = [0];
        encode_field(&mut data, 0, FieldWidth::Byte, -2);
        assert_eq!(data[0], 0xfe);
    }

    #[test]
    fn wide_sign_magnitude() {
        assert_eq!(decode_field(&[0x01, 0x20], 0, FieldWidth::Wide), -0x20);
        assert_eq!(decode_field(&[0x00, 0x20], 0, FieldWidth::Wide), 0x20);

        // Only bit 0 of the flag byte carries information
        assert_eq!(decode_field(&[0xfe, 0x20], 0, FieldWidth::Wide), 0x20);
    }

    #[test]
    fn wide_gamma_codes_above_255() {
        let mut data = [0xf0, 0x00];

        encode_field(&mut data, 0, FieldWidth::Wide, 0x100);
        assert_eq!(data, [0xf1, 0x00]);

        encode_field(&mut data, 0, FieldWidth::Wide, 0xb8);
        assert_eq!(data, [0xf0, 0xb8]);

        encode_field(&mut data, 0, FieldWidth::Wide, -0x12);
        assert_eq!(data, [0xf1, 0x12]);
    }

    #[test]
    fn wide_flag_is_a_sign_when_decoding() {
        let mut data = [0, 0];

        // Codes above 255 do not survive the calibration decoder
        encode_field(&mut data, 0, FieldWidth::Wide, 0x100);
        assert_eq!(decode_field(&data, 0, FieldWidth::Wide), 0);

        encode_field(&mut data, 0, FieldWidth::Wide, 0x1b8);
        assert_eq!(decode_field(&data, 0, FieldWidth::Wide), -0xb8);
    }

    #[test]
    fn gamma_row_codes() {
        let mut codes = [[0x80; 3]; GCP_COUNT];
        codes[0] = [0; 3];
        codes[9] = [0x100, 0xff, 0x1c3];
        codes[1] = [132, 255, 0];
        codes[8] = [200, 1, 128];

        let row = pack_calibration(&codes);
        assert_eq!(&row[..6], &[0x01, 0x00, 0x00, 0xff, 0x01, 0xc3]);
        assert_eq!(unpack_gamma_row(&row), codes);

        // The same bytes read as calibration offsets
        let offsets = unpack_calibration(&row).unwrap();
        assert_eq!(offsets[9], [0, 0xff, -0xc3]);
        assert_eq!(offsets[1], [-124, -1, 0]);
    }

    #[test]
    fn layout() {
        let mut data = [0u8; MTP_LEN];

        data[0] = 0x01;
        data[1] = 0x10; // V255 R = -16
        data[5] = 0x22; // V255 B = 34
        data[6] = 0xfd; // GCP 8 R = -3
        data[29] = 0x05; // GCP 1 B = 5
        data[30] = 0x92; // VT R = 2, VT G = -1
        data[31] = 0x07; // VT B = 7
        data[40] = 0xff; // not part of the gamma data

        let cal = unpack_calibration(&data).unwrap();

        assert_eq!(cal[9], [-16, 0, 34]);
        assert_eq!(cal[8], [-3, 0, 0]);
        assert_eq!(cal[1], [0, 0, 5]);
        assert_eq!(cal[0], [2, -1, 7]);

        let row = pack_calibration(&cal);
        assert_eq!(&row[..], &data[..PARAM_COUNT]);
    }

    #[test]
    fn round_trip() {
        let mut seed: u32 = 0x1234_5678;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed
        };

        for _ in 0..1000 {
            let mut cal = [[0; 3]; GCP_COUNT];

            for channel in 0..3 {
                cal[0][channel] = (next() % 15) as i32 - 7;
                cal[9][channel] = (next() % 511) as i32 - 255;

                for gcp in 1..9 {
                    cal[gcp][channel] = (next() % 256) as i32 - 128;
                }
            }

            let row = pack_calibration(&cal);
            assert_eq!(unpack_calibration(&row).unwrap(), cal);
        }
    }

    #[test]
    fn short_input() {
        let res = unpack_calibration(&[0; PARAM_COUNT - 1]);
        assert!(matches!(res, Err(DaidError::MalformedInput(_))));
    }
}
