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

use thiserror::Error;

/// Everything that can go wrong while computing a gamma table.
///
/// None of these leave the caller with a partially written table, so it is
/// always safe to keep using the previous one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DaidError {
    #[error("Failed to allocate memory for {0} gamma rows")]
    Allocation(usize),
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Step {step}: gamma control point {gcp} maps to voltage index {index} outside of 0..=255")]
    IndexOutOfRange { step: usize, gcp: usize, index: i64 },
    #[error("Division by zero while computing gamma control point {gcp}")]
    ZeroDivisor { gcp: usize },
    #[error("Gamma control point {gcp} evaluates to {value} which does not fit a register")]
    Overflow { gcp: usize, value: i64 },
}

pub type Result<T> = std::result::Result<T, DaidError>;
