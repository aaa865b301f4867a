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

//! Gamma curve tables: code (0..=255) to luminance scaled to 1_000_000.

use super::GCT_LEN;

/// Gamma 2.15
pub static GCT_2P15: [i32; GCT_LEN] = [
    0, 7, 30, 71, 132, 213, 315, 439,
    586, 754, 946, 1161, 1400, 1663, 1950, 2262,
    2599, 2961, 3348, 3761, 4199, 4663, 5154, 5671,
    6214, 6784, 7381, 8005, 8656, 9335, 10040, 10774,
    11535, 12324, 13141, 13986, 14859, 15761, 16691, 17649,
    18637, 19653, 20698, 21772, 22875, 24007, 25169, 26360,
    27581, 28831, 30111, 31421, 32760, 34130, 35529, 36959,
    38419, 39909, 41429, 42980, 44562, 46174, 47817, 49490,
    51195, 52930, 54696, 56494, 58322, 60182, 62073, 63995,
    65948, 67933, 69950, 71998, 74078, 76189, 78333, 80508,
    82715, 84954, 87224, 89528, 91863, 94230, 96630, 99062,
    101526, 104022, 106552, 109113, 111708, 114334, 116994, 119686,
    122411, 125169, 127960, 130784, 133641, 136530, 139453, 142409,
    145399, 148421, 151477, 154566, 157688, 160844, 164034, 167257,
    170513, 173803, 177127, 180484, 183875, 187300, 190759, 194252,
    197778, 201339, 204933, 208562, 212224, 215921, 219652, 223417,
    227217, 231050, 234918, 238821, 242757, 246729, 250734, 254775,
    258849, 262959, 267103, 271282, 275495, 279743, 284026, 288344,
    292697, 297084, 301507, 305964, 310457, 314984, 319547, 324145,
    328778, 333446, 338149, 342888, 347661, 352471, 357315, 362195,
    367110, 372061, 377047, 382069, 387126, 392219, 397348, 402512,
    407712, 412948, 418219, 423526, 428869, 434248, 439663, 445113,
    450600, 456122, 461681, 467275, 472906, 478572, 484275, 490014,
    495789, 501600, 507448, 513332, 519252, 525208, 531201, 537230,
    543296, 549398, 555536, 561711, 567923, 574171, 580455, 586777,
    593134, 599529, 605960, 612428, 618933, 625474, 632052, 638668,
    645319, 652008, 658734, 665497, 672296, 679133, 686006, 692917,
    699865, 706850, 713872, 720931, 728027, 735160, 742331, 749539,
    756784, 764066, 771386, 778743, 786138, 793569, 801039, 808545,
    816089, 823671, 831290, 838947, 846641, 854373, 862143, 869950,
    877794, 885677, 893597, 901555, 909550, 917584, 925655, 933764,
    941911, 950095, 958318, 966578, 974877, 983213, 991588, 1000000,
];

/// Gamma 2.20
pub static GCT_2P20: [i32; GCT_LEN] = [
    0, 5, 23, 57, 107, 175, 262, 367,
    493, 638, 805, 992, 1202, 1433, 1687, 1963,
    2263, 2586, 2932, 3303, 3697, 4116, 4560, 5028,
    5522, 6041, 6585, 7155, 7751, 8373, 9021, 9696,
    10398, 11126, 11881, 12664, 13473, 14311, 15175, 16068,
    16988, 17936, 18913, 19918, 20951, 22013, 23104, 24223,
    25371, 26549, 27755, 28991, 30257, 31551, 32876, 34230,
    35614, 37029, 38473, 39947, 41452, 42987, 44553, 46149,
    47776, 49433, 51122, 52842, 54592, 56374, 58187, 60032,
    61907, 63815, 65754, 67725, 69727, 71761, 73828, 75926,
    78057, 80219, 82414, 84642, 86901, 89194, 91518, 93876,
    96266, 98689, 101145, 103634, 106156, 108711, 111299, 113921,
    116576, 119264, 121986, 124741, 127530, 130352, 133209, 136099,
    139022, 141980, 144972, 147998, 151058, 154152, 157281, 160444,
    163641, 166872, 170138, 173439, 176774, 180144, 183549, 186989,
    190463, 193972, 197516, 201096, 204710, 208360, 212044, 215764,
    219520, 223310, 227137, 230998, 234895, 238828, 242796, 246800,
    250840, 254916, 259027, 263175, 267358, 271577, 275833, 280124,
    284452, 288816, 293216, 297653, 302125, 306635, 311180, 315763,
    320382, 325037, 329729, 334458, 339223, 344026, 348865, 353741,
    358654, 363604, 368591, 373615, 378676, 383775, 388910, 394083,
    399293, 404541, 409826, 415148, 420508, 425905, 431340, 436813,
    442323, 447871, 453456, 459080, 464741, 470440, 476177, 481952,
    487765, 493616, 499505, 505432, 511398, 517401, 523443, 529523,
    535642, 541798, 547994, 554227, 560499, 566810, 573159, 579547,
    585973, 592438, 598942, 605484, 612066, 618686, 625345, 632043,
    638779, 645555, 652370, 659224, 666117, 673049, 680020, 687031,
    694081, 701170, 708298, 715465, 722672, 729919, 737205, 744530,
    751895, 759300, 766744, 774227, 781751, 789314, 796917, 804559,
    812241, 819964, 827726, 835528, 843370, 851252, 859174, 867136,
    875138, 883180, 891262, 899385, 907547, 915750, 923993, 932277,
    940601, 948965, 957370, 965815, 974300, 982826, 991393, 1000000,
];
