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

//! Dynamic AID gamma calibration for Samsung AMOLED panels.
//!
//! The panel stores its factory calibration in MTP memory. Together with a
//! static per-model description ([`Config`]) this is turned into one gamma
//! register payload per brightness step by [`compute_gamma_tables`]:
//!
//! * [`bitfield`] unpacks the MTP bytes into per-channel offsets,
//! * [`curve`] derives the reference voltages (VGCP) and the 256 entry
//!   voltage table (VOUT),
//! * [`engine`] remaps the voltages for every brightness step (VMGCP) and
//!   converts them back into gamma codes.
//!
//! [`panel`] is the consumer side: it reads the MTP, caches the table and
//! sends the matching row whenever the brightness changes.

pub mod bitfield;
pub mod config;
pub mod curve;
pub mod engine;
pub mod error;
pub mod lut;
pub mod mtp;
pub mod panel;

pub use config::Config;
pub use engine::compute_gamma_tables;
pub use error::DaidError;

/// Number of color channels (R, G, B)
pub const CHANNELS: usize = 3;

/// Number of gamma control points, VT (0) up to V255 (9)
pub const GCP_COUNT: usize = 10;

/// Index of the topmost gamma control point (V255)
pub const GCP_MAX: usize = GCP_COUNT - 1;

/// Length of one gamma register payload
pub const PARAM_COUNT: usize = CHANNELS * (GCP_COUNT + 1) + 2;

/// Length of the MTP calibration area
pub const MTP_LEN: usize = 44;

/// One signed value per color channel
pub type Rgb = [i32; CHANNELS];

/// One [`Rgb`] triple per gamma control point
pub type Calibration = [Rgb; GCP_COUNT];

/// The bytes sent to the gamma register for one brightness step
pub type GammaRow = [u8; PARAM_COUNT];
