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

//! Static tables for the S6E3HA2 AMOLED panel.
//!
//! The luminance steps and gamma curves follow the panel's brightness
//! table. Brightness base, gradation and color offsets are reconstructed to
//! be well formed, not taken from the vendor driver, so gamma rows computed
//! from them are not vendor reference output.

use crate::{Rgb, GCP_COUNT};

pub const NITS_COUNT: usize = 64;
pub const VREG_OUT: i32 = 6400;
pub const NIT_GCT: i32 = 360;

pub static NITS: [i32; NITS_COUNT] = [
    2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17,
    19, 20, 21, 22, 24, 25, 27, 29, 30, 32, 34, 37, 39, 41, 44, 47,
    50, 53, 56, 60, 64, 68, 72, 77, 82, 87, 93, 98, 105, 111, 119, 126,
    134, 143, 152, 162, 172, 183, 195, 207, 220, 234, 249, 265, 282, 300, 360, 360,
];

pub static BRIGHTNESS_BASE: [i32; NITS_COUNT] = [
    113, 113, 113, 113, 113, 113, 113, 113, 113, 113, 113, 113, 113, 113, 113, 113,
    113, 113, 113, 113, 113, 113, 113, 113, 113, 113, 113, 113, 113, 113, 113, 113,
    113, 113, 113, 113, 113, 113, 113, 113, 113, 113, 113, 113, 113, 113, 130, 137,
    146, 156, 166, 177, 187, 199, 213, 226, 240, 255, 271, 289, 307, 330, 360, 360,
];

// Indexed by step, then GCP. GCP 0 is never remapped.
pub static GRADATION: [[i32; GCP_COUNT]; NITS_COUNT] = [
    [0, 24, 20, 16, 13, 10, 7, 4, 2, 0], // 2
    [0, 24, 20, 16, 13, 10, 7, 4, 2, 0], // 3
    [0, 24, 20, 16, 13, 10, 7, 4, 2, 0], // 4
    [0, 23, 19, 16, 13, 10, 7, 4, 2, 0], // 5
    [0, 23, 19, 15, 13, 10, 7, 4, 2, 0], // 6
    [0, 23, 19, 15, 12, 10, 7, 4, 2, 0], // 7
    [0, 23, 19, 15, 12, 9, 7, 4, 2, 0], // 8
    [0, 22, 19, 15, 12, 9, 7, 4, 2, 0], // 9
    [0, 22, 19, 15, 12, 9, 6, 4, 2, 0], // 10
    [0, 22, 18, 15, 12, 9, 6, 4, 2, 0], // 11
    [0, 22, 18, 15, 12, 9, 6, 4, 2, 0], // 12
    [0, 22, 18, 14, 12, 9, 6, 4, 2, 0], // 13
    [0, 21, 18, 14, 12, 9, 6, 4, 2, 0], // 14
    [0, 21, 18, 14, 11, 9, 6, 4, 2, 0], // 15
    [0, 21, 17, 14, 11, 9, 6, 3, 2, 0], // 16
    [0, 21, 17, 14, 11, 9, 6, 3, 2, 0], // 17
    [0, 20, 17, 14, 11, 8, 6, 3, 2, 0], // 19
    [0, 20, 17, 13, 11, 8, 6, 3, 2, 0], // 20
    [0, 20, 17, 13, 11, 8, 6, 3, 2, 0], // 21
    [0, 20, 16, 13, 11, 8, 6, 3, 2, 0], // 22
    [0, 19, 16, 13, 10, 8, 6, 3, 2, 0], // 24
    [0, 19, 16, 13, 10, 8, 6, 3, 2, 0], // 25
    [0, 18, 15, 12, 10, 8, 5, 3, 2, 0], // 27
    [0, 18, 15, 12, 10, 8, 5, 3, 2, 0], // 29
    [0, 18, 15, 12, 10, 7, 5, 3, 1, 0], // 30
    [0, 17, 14, 12, 9, 7, 5, 3, 1, 0], // 32
    [0, 17, 14, 11, 9, 7, 5, 3, 1, 0], // 34
    [0, 16, 14, 11, 9, 7, 5, 3, 1, 0], // 37
    [0, 16, 13, 11, 9, 7, 5, 3, 1, 0], // 39
    [0, 15, 13, 10, 8, 6, 4, 3, 1, 0], // 41
    [0, 15, 12, 10, 8, 6, 4, 2, 1, 0], // 44
    [0, 14, 12, 9, 8, 6, 4, 2, 1, 0], // 47
    [0, 13, 11, 9, 7, 6, 4, 2, 1, 0], // 50
    [0, 13, 11, 9, 7, 5, 4, 2, 1, 0], // 53
    [0, 12, 10, 8, 7, 5, 4, 2, 1, 0], // 56
    [0, 11, 9, 7, 6, 5, 3, 2, 1, 0], // 60
    [0, 11, 10, 8, 7, 5, 4, 3, 2, 0], // 64
    [0, 10, 9, 7, 6, 5, 4, 3, 2, 0], // 68
    [0, 10, 8, 7, 6, 5, 4, 2, 2, 0], // 72
    [0, 8, 7, 6, 5, 4, 3, 2, 2, 0], // 77
    [0, 7, 6, 5, 4, 4, 3, 2, 2, 0], // 82
    [0, 6, 5, 5, 4, 3, 3, 2, 1, 0], // 87
    [0, 5, 4, 4, 3, 3, 2, 2, 1, 0], // 93
    [0, 4, 3, 3, 3, 2, 2, 1, 1, 0], // 98
    [0, 2, 2, 2, 2, 2, 1, 1, 1, 0], // 105
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 0], // 111
    [0, 3, 3, 2, 2, 1, 1, -1, -1, 0], // 119
    [0, 3, 3, 2, 2, 1, 1, -1, -1, 0], // 126
    [0, 3, 3, 2, 2, 1, 1, -1, -1, 0], // 134
    [0, 2, 2, 2, 2, 1, 1, -1, -1, 0], // 143
    [0, 2, 2, 2, 2, 1, 1, -1, -1, 0], // 152
    [0, 2, 2, 1, 1, 1, 1, -1, -1, 0], // 162
    [0, 2, 2, 1, 1, 1, 1, -1, -1, 0], // 172
    [0, 2, 2, 1, 1, 1, 1, -1, -1, 0], // 183
    [0, 2, 2, 1, 1, 1, 1, -1, -1, 0], // 195
    [0, 1, 1, 1, 1, 0, 0, 0, 0, 0], // 207
    [0, 1, 1, 1, 1, 0, 0, 0, 0, 0], // 220
    [0, 1, 1, 1, 1, 0, 0, 0, 0, 0], // 234
    [0, 1, 1, 1, 1, 0, 0, 0, 0, 0], // 249
    [0, 1, 1, 0, 0, 0, 0, 0, 0, 0], // 265
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 282
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 300
    [0, 1, 1, 0, 0, 0, 0, 0, 0, 0], // 360
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // 360
];

pub static COLOR_OFFSET: [[Rgb; GCP_COUNT]; NITS_COUNT] = [
    // 2
    [
        [0, 0, 0], [-6, 2, -9], [-5, 1, -7], [-4, 1, -6], [-4, 1, -5],
        [-3, 0, -4], [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 3
    [
        [0, 0, 0], [-6, 2, -9], [-5, 1, -7], [-4, 1, -6], [-4, 1, -5],
        [-3, 0, -4], [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 4
    [
        [0, 0, 0], [-6, 2, -9], [-5, 1, -7], [-4, 1, -6], [-4, 1, -5],
        [-3, 0, -4], [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 5
    [
        [0, 0, 0], [-6, 2, -9], [-5, 1, -7], [-4, 1, -6], [-4, 1, -5],
        [-3, 0, -4], [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 6
    [
        [0, 0, 0], [-6, 2, -9], [-5, 1, -7], [-4, 1, -6], [-4, 1, -5],
        [-3, 0, -4], [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 7
    [
        [0, 0, 0], [-6, 2, -9], [-5, 1, -7], [-4, 1, -6], [-4, 1, -5],
        [-3, 0, -4], [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 8
    [
        [0, 0, 0], [-6, 2, -9], [-5, 1, -7], [-4, 1, -6], [-4, 1, -5],
        [-3, 0, -4], [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 9
    [
        [0, 0, 0], [-6, 2, -8], [-5, 1, -7], [-4, 1, -6], [-4, 1, -5],
        [-3, 0, -4], [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 10
    [
        [0, 0, 0], [-6, 2, -8], [-5, 1, -6], [-4, 1, -6], [-4, 1, -5],
        [-3, 0, -4], [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 11
    [
        [0, 0, 0], [-6, 2, -8], [-5, 1, -6], [-4, 1, -6], [-4, 1, -5],
        [-3, 0, -4], [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 12
    [
        [0, 0, 0], [-5, 2, -8], [-5, 1, -6], [-4, 1, -5], [-4, 1, -5],
        [-3, 0, -4], [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 13
    [
        [0, 0, 0], [-5, 2, -8], [-4, 1, -6], [-4, 1, -5], [-4, 1, -4],
        [-3, 0, -4], [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 14
    [
        [0, 0, 0], [-5, 2, -8], [-4, 1, -6], [-4, 1, -5], [-4, 1, -4],
        [-3, 0, -4], [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 15
    [
        [0, 0, 0], [-5, 2, -8], [-4, 1, -6], [-4, 1, -5], [-4, 1, -4],
        [-3, 0, -4], [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 16
    [
        [0, 0, 0], [-5, 2, -8], [-4, 1, -6], [-3, 1, -5], [-3, 1, -4],
        [-3, 0, -3], [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 17
    [
        [0, 0, 0], [-5, 2, -8], [-4, 1, -6], [-3, 1, -5], [-3, 1, -4],
        [-3, 0, -3], [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 19
    [
        [0, 0, 0], [-5, 2, -8], [-4, 1, -6], [-3, 1, -5], [-3, 1, -4],
        [-3, 0, -3], [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 20
    [
        [0, 0, 0], [-5, 2, -8], [-4, 1, -6], [-3, 1, -5], [-3, 1, -4],
        [-3, 0, -3], [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 21
    [
        [0, 0, 0], [-5, 2, -7], [-4, 1, -6], [-3, 1, -5], [-3, 1, -4],
        [-2, 0, -3], [-2, 0, -2], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 22
    [
        [0, 0, 0], [-5, 2, -7], [-4, 1, -6], [-3, 1, -5], [-3, 1, -4],
        [-2, 0, -3], [-2, 0, -2], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 24
    [
        [0, 0, 0], [-5, 2, -7], [-4, 1, -6], [-3, 1, -5], [-3, 1, -4],
        [-2, 0, -3], [-2, 0, -2], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 25
    [
        [0, 0, 0], [-5, 2, -7], [-4, 1, -6], [-3, 1, -5], [-3, 1, -4],
        [-2, 0, -3], [-2, 0, -2], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 27
    [
        [0, 0, 0], [-5, 2, -7], [-4, 1, -5], [-3, 1, -5], [-3, 1, -4],
        [-2, 0, -3], [-2, 0, -2], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 29
    [
        [0, 0, 0], [-5, 2, -7], [-4, 1, -5], [-3, 1, -5], [-3, 1, -4],
        [-2, 0, -3], [-2, 0, -2], [-1, 0, -2], [-1, 0, -1], [0, 0, 0],
    ],
    // 30
    [
        [0, 0, 0], [-4, 1, -7], [-4, 1, -5], [-3, 1, -4], [-3, 1, -4],
        [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [-1, 0, -1], [0, 0, 0],
    ],
    // 32
    [
        [0, 0, 0], [-4, 1, -7], [-4, 1, -5], [-3, 1, -4], [-3, 1, -4],
        [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [-1, 0, -1], [0, 0, 0],
    ],
    // 34
    [
        [0, 0, 0], [-4, 1, -6], [-4, 1, -5], [-3, 1, -4], [-3, 1, -4],
        [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [-1, 0, -1], [0, 0, 0],
    ],
    // 37
    [
        [0, 0, 0], [-4, 1, -6], [-3, 1, -5], [-3, 1, -4], [-3, 1, -3],
        [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [-1, 0, -1], [0, 0, 0],
    ],
    // 39
    [
        [0, 0, 0], [-4, 1, -6], [-3, 1, -5], [-3, 1, -4], [-3, 1, -3],
        [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [-1, 0, -1], [0, 0, 0],
    ],
    // 41
    [
        [0, 0, 0], [-4, 1, -6], [-3, 1, -4], [-3, 1, -4], [-3, 1, -3],
        [-2, 0, -3], [-1, 0, -2], [-1, 0, -1], [-1, 0, -1], [0, 0, 0],
    ],
    // 44
    [
        [0, 0, 0], [-4, 1, -6], [-3, 1, -4], [-2, 1, -4], [-2, 1, -3],
        [-2, 0, -2], [-1, 0, -2], [-1, 0, -1], [-1, 0, -1], [0, 0, 0],
    ],
    // 47
    [
        [0, 0, 0], [-4, 1, -5], [-3, 1, -4], [-2, 1, -4], [-2, 1, -3],
        [-2, 0, -2], [-1, 0, -2], [-1, 0, -1], [-1, 0, -1], [0, 0, 0],
    ],
    // 50
    [
        [0, 0, 0], [-3, 1, -5], [-3, 1, -4], [-2, 1, -3], [-2, 1, -3],
        [-2, 0, -2], [-1, 0, -2], [-1, 0, -1], [-1, 0, -1], [0, 0, 0],
    ],
    // 53
    [
        [0, 0, 0], [-3, 1, -5], [-3, 1, -4], [-2, 1, -3], [-2, 1, -3],
        [-2, 0, -2], [-1, 0, -2], [-1, 0, -1], [-1, 0, -1], [0, 0, 0],
    ],
    // 56
    [
        [0, 0, 0], [-3, 1, -5], [-3, 1, -4], [-2, 1, -3], [-2, 1, -3],
        [-2, 0, -2], [-1, 0, -2], [-1, 0, -1], [-1, 0, -1], [0, 0, 0],
    ],
    // 60
    [
        [0, 0, 0], [-3, 1, -4], [-2, 0, -3], [-2, 0, -3], [-2, 0, -2],
        [-1, 0, -2], [-1, 0, -1], [0, 0, -1], [0, 0, 0], [0, 0, 0],
    ],
    // 64
    [
        [0, 0, 0], [-3, 1, -4], [-2, 0, -3], [-2, 0, -3], [-2, 0, -2],
        [-1, 0, -2], [-1, 0, -1], [0, 0, -1], [0, 0, 0], [0, 0, 0],
    ],
    // 68
    [
        [0, 0, 0], [-2, 1, -4], [-2, 0, -3], [-2, 0, -2], [-2, 0, -2],
        [-1, 0, -2], [-1, 0, -1], [0, 0, -1], [0, 0, 0], [0, 0, 0],
    ],
    // 72
    [
        [0, 0, 0], [-2, 1, -3], [-2, 0, -3], [-1, 0, -2], [-1, 0, -2],
        [-1, 0, -1], [-1, 0, -1], [0, 0, -1], [0, 0, 0], [0, 0, 0],
    ],
    // 77
    [
        [0, 0, 0], [-2, 1, -3], [-2, 0, -2], [-1, 0, -2], [-1, 0, -2],
        [-1, 0, -1], [-1, 0, -1], [0, 0, -1], [0, 0, 0], [0, 0, 0],
    ],
    // 82
    [
        [0, 0, 0], [-2, 1, -2], [-1, 0, -2], [-1, 0, -2], [-1, 0, -1],
        [-1, 0, -1], [-1, 0, -1], [0, 0, -1], [0, 0, 0], [0, 0, 0],
    ],
    // 87
    [
        [0, 0, 0], [-1, 0, -2], [-1, 0, -2], [-1, 0, -1], [-1, 0, -1],
        [-1, 0, -1], [0, 0, -1], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    ],
    // 93
    [
        [0, 0, 0], [-1, 0, -1], [-1, 0, -1], [-1, 0, -1], [-1, 0, -1],
        [0, 0, -1], [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    ],
    // 98
    [
        [0, 0, 0], [-1, 0, -1], [-1, 0, -1], [0, 0, -1], [0, 0, -1],
        [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    ],
    [[0; 3]; GCP_COUNT], // 105
    [[0; 3]; GCP_COUNT], // 111
    // 119
    [
        [0, 0, 0], [-2, 1, -3], [-2, 0, -2], [-1, 0, -2], [-1, 0, -1],
        [-1, 0, -1], [0, 0, -1], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    ],
    // 126
    [
        [0, 0, 0], [-2, 1, -3], [-2, 0, -2], [-1, 0, -2], [-1, 0, -1],
        [-1, 0, -1], [0, 0, -1], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    ],
    // 134
    [
        [0, 0, 0], [-2, 1, -3], [-2, 0, -2], [-1, 0, -2], [-1, 0, -1],
        [-1, 0, -1], [0, 0, -1], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    ],
    // 143
    [
        [0, 0, 0], [-2, 1, -2], [-2, 0, -2], [-1, 0, -2], [-1, 0, -1],
        [-1, 0, -1], [0, 0, -1], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    ],
    // 152
    [
        [0, 0, 0], [-2, 1, -2], [-2, 0, -2], [-1, 0, -2], [-1, 0, -1],
        [-1, 0, -1], [0, 0, -1], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    ],
    // 162
    [
        [0, 0, 0], [-1, 1, -2], [-1, 0, -1], [-1, 0, -1], [-1, 0, -1],
        [-1, 0, -1], [0, 0, -1], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    ],
    // 172
    [
        [0, 0, 0], [-1, 1, -2], [-1, 0, -1], [-1, 0, -1], [-1, 0, -1],
        [-1, 0, -1], [0, 0, -1], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    ],
    // 183
    [
        [0, 0, 0], [-1, 1, -2], [-1, 0, -1], [-1, 0, -1], [-1, 0, -1],
        [-1, 0, -1], [0, 0, -1], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    ],
    // 195
    [
        [0, 0, 0], [-1, 1, -2], [-1, 0, -1], [-1, 0, -1], [-1, 0, -1],
        [-1, 0, -1], [0, 0, -1], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    ],
    // 207
    [
        [0, 0, 0], [-1, 0, -1], [-1, 0, -1], [0, 0, -1], [0, 0, 0],
        [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    ],
    // 220
    [
        [0, 0, 0], [-1, 0, -1], [-1, 0, -1], [0, 0, -1], [0, 0, 0],
        [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    ],
    // 234
    [
        [0, 0, 0], [-1, 0, -1], [-1, 0, -1], [0, 0, -1], [0, 0, 0],
        [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    ],
    // 249
    [
        [0, 0, 0], [-1, 0, -1], [-1, 0, -1], [0, 0, -1], [0, 0, 0],
        [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    ],
    // 265
    [
        [0, 0, 0], [0, 0, -1], [0, 0, 0], [0, 0, 0], [0, 0, 0],
        [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    ],
    [[0; 3]; GCP_COUNT], // 282
    [[0; 3]; GCP_COUNT], // 300
    // 360
    [
        [0, 0, 0], [-1, 0, -1], [0, 0, 0], [0, 0, 0], [0, 0, 0],
        [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    ],
    [[0; 3]; GCP_COUNT], // 360
];
