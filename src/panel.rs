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

use anyhow::{anyhow, Context, Result};
use log::{info, warn};

use crate::config::Config;
use crate::engine::compute_gamma_tables;
use crate::mtp::{self, Mtp};
use crate::{GammaRow, MTP_LEN};

mod demo_mode;

pub use demo_mode::DemoBus;

/// Highest brightness level accepted by [`Panel::set_brightness`]
pub const MAX_BRIGHTNESS: u32 = 100;

const MTP_REG: u8 = 0xc8;
const GAMMA_REG: u8 = 0xca;

const TEST_KEY_ON_F0: [u8; 3] = [0xf0, 0x5a, 0x5a];
const TEST_KEY_OFF_F0: [u8; 3] = [0xf0, 0xa5, 0xa5];
const GAMMA_UPDATE: [u8; 2] = [0xf7, 0x03];

/// Access to the display command set of a panel
pub trait DcsBus {
    fn dcs_write(&mut self, data: &[u8]) -> Result<()>;
    fn dcs_read(&mut self, cmd: u8, buf: &mut [u8]) -> Result<()>;
}

/// Map a brightness level onto a step of the gamma table
pub fn step_for_brightness(level: u32, nits_count: usize) -> usize {
    let level = level.min(MAX_BRIGHTNESS) as usize;

    level * nits_count.saturating_sub(1) / MAX_BRIGHTNESS as usize
}

pub struct Panel<B: DcsBus> {
    bus: B,
    config: Config,
    mtp: Mtp,
    gamma: Vec<GammaRow>,
    brightness: u32,
}

impl<B: DcsBus> Panel<B> {
    /// Read the panel's calibration and compute its gamma table
    pub fn new(bus: B, config: Config) -> Result<Self> {
        config.validate()?;

        let mut panel = Self {
            bus,
            config,
            mtp: [0; MTP_LEN],
            gamma: Vec::new(),
            brightness: MAX_BRIGHTNESS,
        };

        panel.refresh()?;

        Ok(panel)
    }

    fn read_mtp(&mut self) -> Result<Mtp> {
        let mut buf = [0; MTP_LEN];

        self.bus.dcs_write(&TEST_KEY_ON_F0)?;
        let res = self.bus.dcs_read(MTP_REG, &mut buf);
        self.bus.dcs_write(&TEST_KEY_OFF_F0)?;

        res.context("Failed to read MTP")?;

        mtp::from_slice(&buf)
    }

    /// Re-read the calibration data and recompute the gamma table.
    ///
    /// If anything goes wrong the previous table stays in use.
    pub fn refresh(&mut self) -> Result<()> {
        let mtp = self.read_mtp()?;

        let gamma = compute_gamma_tables(&self.config, &mtp).with_context(|| {
            format!("Failed to compute gamma table for {}", self.config.name)
        })?;

        info!(
            "Computed {} gamma steps for {} ({} to {} nits)",
            gamma.len(),
            self.config.name,
            self.config.nits[0],
            self.config.max_nits()
        );

        self.mtp = mtp;
        self.gamma = gamma;

        Ok(())
    }

    /// Send the gamma row that belongs to `level` to the panel
    pub fn set_brightness(&mut self, level: u32) -> Result<()> {
        let level = if level > MAX_BRIGHTNESS {
            warn!(
                "Brightness {} is above the maximum of {}, clamping",
                level, MAX_BRIGHTNESS
            );
            MAX_BRIGHTNESS
        } else {
            level
        };

        let step = step_for_brightness(level, self.config.nits_count());
        let row = self
            .gamma
            .get(step)
            .ok_or_else(|| anyhow!("No gamma table entry for step {step}"))?;

        let mut gamma_cmd = Vec::with_capacity(row.len() + 1);
        gamma_cmd.push(GAMMA_REG);
        gamma_cmd.extend_from_slice(row);

        self.bus.dcs_write(&TEST_KEY_ON_F0)?;
        self.bus.dcs_write(&gamma_cmd)?;
        self.bus.dcs_write(&GAMMA_UPDATE)?;
        self.bus.dcs_write(&TEST_KEY_OFF_F0)?;

        info!(
            "Brightness {} -> step {} ({} nits)",
            level, step, self.config.nits[step]
        );

        self.brightness = level;

        Ok(())
    }

    pub fn brightness(&self) -> u32 {
        self.brightness
    }

    /// Luminance of the current brightness level
    pub fn nits(&self) -> i32 {
        self.config.nits[step_for_brightness(self.brightness, self.config.nits_count())]
    }

    pub fn gamma_table(&self) -> &[GammaRow] {
        &self.gamma
    }

    pub fn mtp(&self) -> &Mtp {
        &self.mtp
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}
