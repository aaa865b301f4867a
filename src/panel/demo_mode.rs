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

use anyhow::{bail, Result};

use super::DcsBus;
use crate::mtp::to_hex as hex;
use crate::MTP_LEN;

/// A panel that only exists in memory.
///
/// Reads of the MTP register return a fixed buffer, all writes are logged
/// and kept around for inspection.
pub struct DemoBus {
    mtp: [u8; MTP_LEN],
    writes: Vec<Vec<u8>>,
    fail_reads: bool,
}

impl DemoBus {
    pub fn new(mtp: [u8; MTP_LEN]) -> Self {
        Self {
            mtp,
            writes: Vec::new(),
            fail_reads: false,
        }
    }

    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }

    pub fn set_mtp(&mut self, mtp: [u8; MTP_LEN]) {
        self.mtp = mtp;
    }

    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }
}

impl DcsBus for DemoBus {
    fn dcs_write(&mut self, data: &[u8]) -> Result<()> {
        log::info!("DCS: Write {}", hex(data));

        self.writes.push(data.to_vec());

        Ok(())
    }

    fn dcs_read(&mut self, cmd: u8, buf: &mut [u8]) -> Result<()> {
        if self.fail_reads {
            bail!("Read of register {cmd:#04x} timed out");
        }

        if cmd != 0xc8 || buf.len() > MTP_LEN {
            bail!("Register {:#04x} can not be read ({} bytes)", cmd, buf.len());
        }

        buf.copy_from_slice(&self.mtp[..buf.len()]);

        log::info!("DCS: Read {} from {:#04x}", hex(buf), cmd);

        Ok(())
    }
}
