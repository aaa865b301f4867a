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

//! Reference voltage curves of a calibrated panel.
//!
//! All voltages are in hundredths of a millivolt. Divisions truncate towards
//! zero, which is what the panel vendor's tables were generated with.

use crate::error::{DaidError, Result};
use crate::{Calibration, CHANNELS, GCP_COUNT, GCP_MAX};

/// One voltage per color channel
pub type Voltages = [i64; CHANNELS];

/// Gamma code at which each gamma control point sits
pub const GCP_CODES: [usize; GCP_COUNT] = [0, 3, 11, 23, 35, 51, 87, 151, 203, 255];

/// Number of entries in the voltage table, one per 8 bit gamma code
pub const VOUT_LEN: usize = 256;

const VT_COEFFICIENT: [i64; 16] = [
    0, 12, 24, 36, 48, 60, 72, 84, 96, 108, 138, 148, 158, 168, 178, 186,
];

/// Constants of the voltage formula for one gamma control point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifiers {
    pub m0: i64,
    pub m1: i64,
    pub default_gamma: i64,
}

const V255_MODIFIERS: Modifiers = Modifiers {
    m0: 72,
    m1: 860,
    default_gamma: 0x100,
};

const INNER_MODIFIERS: Modifiers = Modifiers {
    m0: 64,
    m1: 320,
    default_gamma: 0x80,
};

pub fn modifiers(gcp: usize) -> Modifiers {
    if gcp == GCP_MAX {
        V255_MODIFIERS
    } else {
        INNER_MODIFIERS
    }
}

/// Base voltage `v0` for the regulator output
pub fn base_voltage(vreg_out_mv: i32) -> i64 {
    i64::from(vreg_out_mv) * 100
}

/// The voltage a control point is measured against.
///
/// The outermost points use the regulator voltage, the inner ones hang off
/// the VT voltage.
pub fn reference_voltage(gcp: usize, channel: usize, v0: i64, vgcp: &[Voltages; GCP_COUNT]) -> i64 {
    if gcp == 1 || gcp == GCP_MAX {
        v0
    } else {
        vgcp[0][channel]
    }
}

/// Compute the voltage at every gamma control point (VGCP).
pub fn vgcp(mtp: &Calibration, vreg_out_mv: i32) -> Result<[Voltages; GCP_COUNT]> {
    let v0 = base_voltage(vreg_out_mv);
    let mut vgcp = [[0; CHANNELS]; GCP_COUNT];

    for channel in 0..CHANNELS {
        let vt = mtp[0][channel];
        let coefficient = VT_COEFFICIENT
            .get(vt.unsigned_abs() as usize)
            .ok_or_else(|| {
                DaidError::MalformedInput(format!("VT offset {vt} is out of range"))
            })?;

        vgcp[0][channel] = v0 - v0 * coefficient / V255_MODIFIERS.m1;

        // Every point depends on the one above it
        for gcp in (1..=GCP_MAX).rev() {
            let Modifiers {
                m0,
                m1,
                default_gamma,
            } = modifiers(gcp);

            let vref = reference_voltage(gcp, channel, v0, &vgcp);

            let mut vdiff = vref;
            if gcp < GCP_MAX {
                vdiff -= vgcp[gcp + 1][channel];
            }
            vdiff *= default_gamma + i64::from(mtp[gcp][channel]) + m0;

            vgcp[gcp][channel] = vref - vdiff / m1;
        }
    }

    Ok(vgcp)
}

/// Interpolate the control point voltages over all 256 gamma codes (VOUT).
pub fn vout(vgcp: &[Voltages; GCP_COUNT], vreg_out_mv: i32) -> Result<Vec<Voltages>> {
    let mut vout = Vec::new();
    vout.try_reserve_exact(VOUT_LEN)
        .map_err(|_| DaidError::Allocation(VOUT_LEN))?;

    vout.push([base_voltage(vreg_out_mv); CHANNELS]);

    for gcp in 1..GCP_COUNT {
        let start = GCP_CODES[gcp - 1];
        let end = GCP_CODES[gcp];
        let dk = (end - start) as i64;

        let mut dv = [0; CHANNELS];
        for (channel, dv) in dv.iter_mut().enumerate() {
            *dv = vgcp[gcp][channel] - vout[start][channel];
        }

        for code in (start + 1)..=end {
            let steps = (end - code) as i64;
            let mut v = [0; CHANNELS];

            for (channel, v) in v.iter_mut().enumerate() {
                *v = vgcp[gcp][channel] - dv[channel] * steps / dk;
            }

            vout.push(v);
        }
    }

    Ok(vout)
}
