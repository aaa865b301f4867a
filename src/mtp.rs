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

//! Getting calibration data from the outside world.

use std::fs::read;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};

use crate::MTP_LEN;

pub type Mtp = [u8; MTP_LEN];

/// Parse calibration data written as hex.
///
/// Whitespace, commas and `0x` prefixes are ignored, so both a plain dump
/// like `00b800c3` and a C style list like `0x00, 0xb8` are accepted.
pub fn parse_hex(text: &str) -> Result<Mtp> {
    let digits: String = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(|word| word.trim_start_matches("0x").trim_start_matches("0X"))
        .collect();

    if digits.len() % 2 != 0 {
        bail!("Calibration data has an odd number of hex digits");
    }

    let bytes = (0..digits.len())
        .step_by(2)
        .map(|i| {
            digits
                .get(i..i + 2)
                .and_then(|byte| u8::from_str_radix(byte, 16).ok())
                .ok_or_else(|| anyhow!("Invalid hex byte at position {}", i / 2))
        })
        .collect::<Result<Vec<u8>>>()?;

    from_slice(&bytes)
}

/// Format bytes as a plain hex dump, the inverse of [`parse_hex`]
pub fn to_hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

pub fn from_slice(bytes: &[u8]) -> Result<Mtp> {
    bytes.try_into().map_err(|_| {
        anyhow!(
            "Calibration data has {} bytes instead of {}",
            bytes.len(),
            MTP_LEN
        )
    })
}

/// Read calibration data from a file containing either the raw bytes or a
/// hex dump of them.
pub fn read_file(path: &Path) -> Result<Mtp> {
    let content =
        read(path).with_context(|| format!("Failed to read \"{}\"", path.display()))?;

    if content.len() == MTP_LEN {
        return from_slice(&content);
    }

    let text = String::from_utf8(content)
        .map_err(|_| anyhow!("\"{}\" is neither raw nor hex calibration data", path.display()))?;

    parse_hex(&text).with_context(|| format!("Failed to parse \"{}\"", path.display()))
}

#[cfg(test)]
mod tests {
    use super::{from_slice, parse_hex, to_hex};
    use crate::MTP_LEN;

    #[test]
    fn hex_formats() {
        let plain = "00b8".to_string() + &"00".repeat(MTP_LEN - 2);
        let mtp = parse_hex(&plain).unwrap();
        assert_eq!(&mtp[..3], &[0x00, 0xb8, 0x00]);

        let c_style: Vec<String> = mtp.iter().map(|b| format!("0x{b:02x}")).collect();
        assert_eq!(parse_hex(&c_style.join(", ")).unwrap(), mtp);

        let spaced = plain.replace("b8", "b8\n ");
        assert_eq!(parse_hex(&spaced).unwrap(), mtp);

        assert_eq!(to_hex(&mtp), plain);
        assert_eq!(to_hex(&[0x0a, 0xff]), "0aff");
    }

    #[test]
    fn bad_hex() {
        assert!(parse_hex("0").is_err());
        assert!(parse_hex("zz").is_err());
        assert!(parse_hex("00").is_err());
        assert!(from_slice(&[0; MTP_LEN + 1]).is_err());
    }
}
