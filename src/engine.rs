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

//! Per brightness step gamma computation.

use log::debug;

use crate::bitfield::{pack_calibration, unpack_calibration};
use crate::config::Config;
use crate::curve::{self, base_voltage, modifiers, reference_voltage, Modifiers, Voltages};
use crate::error::{DaidError, Result};
use crate::lut::lookup_nearest;
use crate::{Calibration, GammaRow, CHANNELS, GCP_COUNT, GCP_MAX, MTP_LEN};

/// Voltages the control points of `step` have to hit (VMGCP).
///
/// The target luminance of each control point is looked up in the step's
/// gamma curve and mapped back onto a gamma code of the 2.20 curve. This
/// code, shifted by the step's gradation, selects the voltage from `vout`.
///
/// `config` has to have passed [`Config::validate`].
pub fn vmgcp(
    config: &Config,
    vgcp: &[Voltages; GCP_COUNT],
    vout: &[Voltages],
    step: usize,
) -> Result<[Voltages; GCP_COUNT]> {
    let gct = config.gct_for_step(step);
    let base = i64::from(config.brightness_base[step]);
    let max_nits = i64::from(config.max_nits());

    let mut mv = [[0; CHANNELS]; GCP_COUNT];
    mv[0] = vgcp[0];

    for gcp in 1..GCP_COUNT {
        let luminance = (base * i64::from(gct[curve::GCP_CODES[gcp]]))
            .checked_div(max_nits)
            .ok_or(DaidError::ZeroDivisor { gcp })?;
        let code = lookup_nearest(&config.gct_2p20, luminance) as i64;
        let index = code + i64::from(config.gradation[step][gcp]);

        mv[gcp] = usize::try_from(index)
            .ok()
            .and_then(|i| vout.get(i))
            .copied()
            .ok_or(DaidError::IndexOutOfRange { step, gcp, index })?;
    }

    Ok(mv)
}

/// Turn the voltages of one step back into register values.
///
/// This is the inverse of [`curve::vgcp`] with the step's color offsets on
/// top. Inner control points are capped at 255, V255 is a 9 bit value and
/// may go beyond that. There is no lower bound: a negative value ends up in
/// the register as its two's complement.
pub fn gamma(
    config: &Config,
    mtp: &Calibration,
    vgcp: &[Voltages; GCP_COUNT],
    mv: &[Voltages; GCP_COUNT],
    step: usize,
) -> Result<Calibration> {
    let v0 = base_voltage(config.vreg_out);
    let mut g = [[0; CHANNELS]; GCP_COUNT];

    for channel in 0..CHANNELS {
        for gcp in (1..=GCP_MAX).rev() {
            let Modifiers { m0, m1, .. } = modifiers(gcp);

            let mut vref = reference_voltage(gcp, channel, v0, vgcp);

            let vdiff = if gcp < GCP_MAX {
                vref - mv[gcp + 1][channel]
            } else {
                vref
            };

            vref -= mv[gcp][channel];

            let mut gt = ((vref + 1) * m1)
                .checked_div(vdiff)
                .ok_or(DaidError::ZeroDivisor { gcp })?
                - m0;

            gt += i64::from(config.color_offset[step][gcp][channel]);
            gt -= i64::from(mtp[gcp][channel]);

            if gt > 255 && gcp != GCP_MAX {
                gt = 255;
            }

            g[gcp][channel] =
                i32::try_from(gt).map_err(|_| DaidError::Overflow { gcp, value: gt })?;
        }
    }

    // VT is fully accounted for in the voltages and is never programmed.
    g[0] = [0; CHANNELS];

    Ok(g)
}

/// Compute the gamma register payload for every brightness step.
///
/// `mtp` is the raw content of the panel's calibration area.
pub fn compute_gamma_tables(config: &Config, mtp: &[u8]) -> Result<Vec<GammaRow>> {
    if mtp.len() != MTP_LEN {
        return Err(DaidError::MalformedInput(format!(
            "Calibration data has {} bytes instead of {}",
            mtp.len(),
            MTP_LEN
        )));
    }

    config.validate()?;

    let cal = unpack_calibration(mtp)?;
    let vgcp = curve::vgcp(&cal, config.vreg_out)?;
    let vout = curve::vout(&vgcp, config.vreg_out)?;

    debug!("MTP offsets: {:?}", cal);
    debug!("Control point voltages: {:?}", vgcp);

    let steps = config.nits_count();
    let mut table = Vec::new();
    table
        .try_reserve_exact(steps)
        .map_err(|_| DaidError::Allocation(steps))?;

    for step in 0..steps {
        let mv = vmgcp(config, &vgcp, &vout, step)?;
        let g = gamma(config, &cal, &vgcp, &mv, step)?;

        table.push(pack_calibration(&g));
    }

    debug!(
        "Computed gamma table for {} with {} steps",
        config.name, steps
    );

    Ok(table)
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::{compute_gamma_tables, gamma, vmgcp};
    use crate::bitfield::{pack_calibration, unpack_calibration, unpack_gamma_row};
    use crate::config::Config;
    use crate::curve::{vgcp, vout};
    use crate::{DaidError, GCP_COUNT, MTP_LEN, PARAM_COUNT};

    const ZERO_MTP: [u8; MTP_LEN] = [0; MTP_LEN];

    /// Calibration data of a panel with a bit of spread on every channel
    fn sample_mtp() -> [u8; MTP_LEN] {
        let cal = [
            [-5, 3, 7],
            [10, -20, 5],
            [4, 4, 4],
            [-3, -2, -1],
            [1, 2, 3],
            [0, 0, -7],
            [6, -6, 6],
            [12, 11, 10],
            [-8, 9, -10],
            [30, -40, 25],
        ];

        let mut mtp = [0; MTP_LEN];
        mtp[..PARAM_COUNT].copy_from_slice(&pack_calibration(&cal));
        mtp[PARAM_COUNT..].copy_from_slice(&[0x55; MTP_LEN - PARAM_COUNT]);
        mtp
    }

    fn unhex(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    #[test]
    fn shape() -> Result<()> {
        let table = compute_gamma_tables(&Config::s6e3ha2(), &ZERO_MTP)?;

        assert_eq!(table.len(), 64);
        assert!(table.iter().all(|row| row.len() == PARAM_COUNT));

        Ok(())
    }

    #[test]
    fn uncalibrated_brightest_step_is_default_gamma() -> Result<()> {
        let table = compute_gamma_tables(&Config::s6e3ha2(), &ZERO_MTP)?;

        assert_eq!(
            &table[63][..],
            &unhex("0100010001008080808080808080808080808080808080808080808080800000000000")[..]
        );

        Ok(())
    }

    #[test]
    fn known_rows() -> Result<()> {
        let config = Config::s6e3ha2();

        let table = compute_gamma_tables(&config, &ZERO_MTP)?;
        assert_eq!(
            &table[0][..],
            &unhex("002e002e002ec7c8c7b8b9b78e908d8a8d89bcc1bbc6cbc4d4dad2ebf3e80000000000")[..]
        );
        assert_eq!(
            &table[61][..],
            &unhex("00e600e600e68484848585858282828282828080808080808080808080800000000000")[..]
        );

        let table = compute_gamma_tables(&config, &sample_mtp())?;
        assert_eq!(
            &table[0][..],
            &unhex("004300680053d1bcd3b0aab18995838b8e8fbbc0b9c8ccc5cfd5ceecffef0000000000")[..]
        );

        Ok(())
    }

    #[test]
    fn duplicated_top_step() -> Result<()> {
        let config = Config::s6e3ha2();
        let table = compute_gamma_tables(&config, &ZERO_MTP)?;

        assert_eq!(config.nits[62], config.nits[63]);

        let differing: Vec<usize> = (0..PARAM_COUNT)
            .filter(|&i| table[62][i] != table[63][i])
            .collect();

        // GCP 1 and 2 carry gradation and color offsets on step 62 only
        assert_eq!(differing, vec![24, 25, 26, 27, 28, 29]);

        let row = unpack_gamma_row(&table[62]);
        assert_eq!(row[1], [132, 133, 132]);
        assert_eq!(row[2], [138, 138, 138]);

        Ok(())
    }

    #[test]
    fn v255_never_decreases() -> Result<()> {
        for mtp in [ZERO_MTP, sample_mtp()].iter() {
            let table = compute_gamma_tables(&Config::s6e3ha2(), mtp)?;

            let v255: Vec<[i32; 3]> = table.iter().map(|row| unpack_gamma_row(row)[9]).collect();

            assert_eq!(v255[63], [256; 3]);

            for w in v255.windows(2) {
                for channel in 0..3 {
                    assert!(w[0][channel] <= w[1][channel]);
                }
            }
        }

        Ok(())
    }

    #[test]
    fn vt_is_zeroed() -> Result<()> {
        let config = Config::s6e3ha2();
        let cal = unpack_calibration(&sample_mtp())?;
        let vgcp = vgcp(&cal, config.vreg_out)?;
        let vout = vout(&vgcp, config.vreg_out)?;

        assert_ne!(cal[0], [0; 3]);

        for step in 0..config.nits_count() {
            let mv = vmgcp(&config, &vgcp, &vout, step)?;
            assert_eq!(mv[0], vgcp[0]);

            let g = gamma(&config, &cal, &vgcp, &mv, step)?;
            assert_eq!(g[0], [0; 3]);
        }

        Ok(())
    }

    #[test]
    fn v255_is_not_clamped() -> Result<()> {
        let config = Config::s6e3ha2();
        let cal = [[0; 3]; GCP_COUNT];
        let vgcp = vgcp(&cal, config.vreg_out)?;
        let vout = vout(&vgcp, config.vreg_out)?;
        let mv = vmgcp(&config, &vgcp, &vout, 63)?;

        let g = gamma(&config, &cal, &vgcp, &mv, 63)?;
        assert_eq!(g[9], [256; 3]);

        // Pull every inner control point far up as well
        let mut config = config;
        config.color_offset[63] = [[200; 3]; GCP_COUNT];

        let g = gamma(&config, &cal, &vgcp, &mv, 63)?;
        assert_eq!(g[9], [456; 3]);
        for gcp in 1..9 {
            assert_eq!(g[gcp], [255; 3]);
        }

        Ok(())
    }

    #[test]
    fn negative_gamma_wraps() -> Result<()> {
        // There is no lower bound, the register sees the two's complement.
        let mut config = Config::s6e3ha2();
        config.color_offset[63][4] = [-130, 0, 0];

        let table = compute_gamma_tables(&config, &ZERO_MTP)?;
        let row = unpack_gamma_row(&table[63]);

        assert_eq!(row[4], [254, 128, 128]);
        assert_eq!(table[63][35 - 5 - 12], 0xfe);

        Ok(())
    }

    #[test]
    fn deterministic() -> Result<()> {
        let config = Config::s6e3ha2();

        let a = compute_gamma_tables(&config, &sample_mtp())?;
        let b = compute_gamma_tables(&config, &sample_mtp())?;
        assert_eq!(a, b);

        Ok(())
    }

    #[test]
    fn wrong_mtp_length() {
        let config = Config::s6e3ha2();

        for len in [0, PARAM_COUNT, MTP_LEN - 1, MTP_LEN + 1].iter() {
            let mtp = vec![0u8; *len];
            assert!(matches!(
                compute_gamma_tables(&config, &mtp),
                Err(DaidError::MalformedInput(_))
            ));
        }
    }

    #[test]
    fn inconsistent_config() {
        let mut config = Config::s6e3ha2();
        config.color_offset.truncate(10);

        assert!(matches!(
            compute_gamma_tables(&config, &ZERO_MTP),
            Err(DaidError::MalformedInput(_))
        ));
    }

    #[test]
    fn gradation_out_of_range() {
        let mut config = Config::s6e3ha2();
        config.gradation[5][1] = -100;

        assert_eq!(
            compute_gamma_tables(&config, &ZERO_MTP),
            Err(DaidError::IndexOutOfRange {
                step: 5,
                gcp: 1,
                index: -98
            })
        );

        let mut config = Config::s6e3ha2();
        config.gradation[63][8] = 60;

        assert!(matches!(
            compute_gamma_tables(&config, &ZERO_MTP),
            Err(DaidError::IndexOutOfRange { step: 63, gcp: 8, .. })
        ));
    }

    #[test]
    fn flat_voltages_are_reported() {
        // With GCP 2 and 3 on the VT voltage the divisor for GCP 2 vanishes
        let mut config = Config::s6e3ha2();
        config.gradation[63][3] = -23;

        assert_eq!(
            compute_gamma_tables(&config, &ZERO_MTP),
            Err(DaidError::ZeroDivisor { gcp: 2 })
        );
    }
}
