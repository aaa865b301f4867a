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

use std::fs::read_to_string;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::DaidError;
use crate::{Rgb, GCP_COUNT};

pub mod gct;
mod s6e3ha2;

pub use gct::{GCT_2P15, GCT_2P20};

/// Number of entries in a gamma curve table
pub const GCT_LEN: usize = 256;

fn default_gct_2p15() -> Vec<i32> {
    GCT_2P15.to_vec()
}

fn default_gct_2p20() -> Vec<i32> {
    GCT_2P20.to_vec()
}

fn is_default_gct_2p15(gct: &[i32]) -> bool {
    gct == &GCT_2P15[..]
}

fn is_default_gct_2p20(gct: &[i32]) -> bool {
    gct == &GCT_2P20[..]
}

/// Static description of a panel model.
///
/// All per step tables are indexed by brightness step and have one entry per
/// value in `nits`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    pub name: String,
    /// Regulator output voltage in mV
    pub vreg_out: i32,
    /// Luminance of each brightness step in cd/m²
    pub nits: Vec<i32>,
    /// Steps below this luminance use the 2.15 curve, the rest use 2.20
    pub nit_gct: i32,
    pub brightness_base: Vec<i32>,
    pub gradation: Vec<[i32; GCP_COUNT]>,
    pub color_offset: Vec<[Rgb; GCP_COUNT]>,
    #[serde(
        default = "default_gct_2p15",
        skip_serializing_if = "is_default_gct_2p15"
    )]
    pub gct_2p15: Vec<i32>,
    #[serde(
        default = "default_gct_2p20",
        skip_serializing_if = "is_default_gct_2p20"
    )]
    pub gct_2p20: Vec<i32>,
}

fn malformed(msg: String) -> DaidError {
    DaidError::MalformedInput(msg)
}

impl Config {
    /// The built-in description of the S6E3HA2 panel
    pub fn s6e3ha2() -> Self {
        Self {
            name: "s6e3ha2".to_string(),
            vreg_out: s6e3ha2::VREG_OUT,
            nits: s6e3ha2::NITS.to_vec(),
            nit_gct: s6e3ha2::NIT_GCT,
            brightness_base: s6e3ha2::BRIGHTNESS_BASE.to_vec(),
            gradation: s6e3ha2::GRADATION.to_vec(),
            color_offset: s6e3ha2::COLOR_OFFSET.to_vec(),
            gct_2p15: default_gct_2p15(),
            gct_2p20: default_gct_2p20(),
        }
    }

    /// Load a panel description from a YAML file and make sure it is usable
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = read_to_string(path)
            .with_context(|| format!("Failed to read panel model \"{}\"", path.display()))?;

        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to load panel model \"{}\"", path.display()))?;

        info!(
            "Loaded panel model \"{}\" with {} brightness steps from \"{}\"",
            config.name,
            config.nits_count(),
            path.display()
        );

        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;

        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn nits_count(&self) -> usize {
        self.nits.len()
    }

    /// Luminance of the brightest step
    pub fn max_nits(&self) -> i32 {
        self.nits.last().copied().unwrap_or(0)
    }

    /// The curve used to derive the target luminance of `step`
    pub fn gct_for_step(&self, step: usize) -> &[i32] {
        if self.nits[step] < self.nit_gct {
            &self.gct_2p15
        } else {
            &self.gct_2p20
        }
    }

    /// Check that all tables fit together.
    ///
    /// The engine indexes the tables without further checks, so this has to
    /// pass before a table is computed.
    pub fn validate(&self) -> std::result::Result<(), DaidError> {
        let count = self.nits_count();

        if count == 0 {
            return Err(malformed("Panel model has no brightness steps".into()));
        }

        if self.vreg_out <= 0 {
            return Err(malformed(format!(
                "Regulator voltage must be positive, got {}",
                self.vreg_out
            )));
        }

        if self.nits[0] <= 0 {
            return Err(malformed("Luminance values must be positive".into()));
        }

        // The brightest step may be repeated, everything else has to increase.
        if self.nits.windows(2).any(|w| w[1] < w[0]) {
            return Err(malformed("Luminance values are not sorted".into()));
        }

        let lengths = [
            ("brightness_base", self.brightness_base.len()),
            ("gradation", self.gradation.len()),
            ("color_offset", self.color_offset.len()),
        ];

        for (name, len) in lengths.iter() {
            if *len != count {
                return Err(malformed(format!(
                    "Table {name} has {len} entries but there are {count} brightness steps"
                )));
            }
        }

        for (name, gct) in [("gct_2p15", &self.gct_2p15), ("gct_2p20", &self.gct_2p20)] {
            if gct.len() != GCT_LEN {
                return Err(malformed(format!(
                    "Gamma curve table {name} has {} entries instead of {GCT_LEN}",
                    gct.len()
                )));
            }

            if gct.windows(2).any(|w| w[1] <= w[0]) {
                return Err(malformed(format!(
                    "Gamma curve table {name} is not strictly increasing"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::{Config, GCT_2P15, GCT_LEN};
    use crate::DaidError;

    #[test]
    fn builtin_is_valid() {
        let config = Config::s6e3ha2();

        assert_eq!(config.nits_count(), 64);
        assert_eq!(config.max_nits(), 360);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn gct_selection() {
        let config = Config::s6e3ha2();

        assert_eq!(config.gct_for_step(0), &GCT_2P15[..]);
        assert_eq!(config.gct_for_step(61), &GCT_2P15[..]);

        // nits == nit_gct already uses the steeper curve
        assert_eq!(config.gct_for_step(62), &config.gct_2p20[..]);
        assert_eq!(config.gct_for_step(63), &config.gct_2p20[..]);
    }

    #[test]
    fn yaml_round_trip() -> Result<()> {
        let config = Config::s6e3ha2();
        let yaml = config.to_yaml()?;

        // The built-in curves are not repeated in the output
        assert!(!yaml.contains("gct_2p15"));

        assert_eq!(Config::from_yaml(&yaml)?, config);

        Ok(())
    }

    #[test]
    fn length_mismatch() {
        let mut config = Config::s6e3ha2();
        config.gradation.pop();

        assert!(matches!(
            config.validate(),
            Err(DaidError::MalformedInput(_))
        ));

        let yaml = config.to_yaml().unwrap();
        assert!(Config::from_yaml(&yaml).is_err());
    }

    #[test]
    fn bad_curves() {
        let mut config = Config::s6e3ha2();
        config.gct_2p20.truncate(GCT_LEN - 1);
        assert!(config.validate().is_err());

        let mut config = Config::s6e3ha2();
        config.gct_2p15[10] = config.gct_2p15[9];
        assert!(config.validate().is_err());
    }

    #[test]
    fn unsorted_nits() {
        let mut config = Config::s6e3ha2();
        config.nits.swap(3, 4);
        assert!(config.validate().is_err());

        let mut config = Config::s6e3ha2();
        config.vreg_out = 0;
        assert!(config.validate().is_err());
    }
}
