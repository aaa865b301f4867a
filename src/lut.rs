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

/// Find the index of the entry in `table` that is closest to `value`.
///
/// `table` has to be sorted in ascending order. If `value` lies exactly
/// between two entries the lower index wins.
///
/// # Panics
///
/// If `table` is empty.
pub fn lookup_nearest(table: &[i32], value: i64) -> usize {
    let last = table.len() - 1;

    if value <= i64::from(table[0]) {
        return 0;
    }

    if value >= i64::from(table[last]) {
        return last;
    }

    // table[b] <= value < table[e]
    let mut b = 0;
    let mut e = last;

    while e - b > 1 {
        let m = b + (e - b) / 2;

        if i64::from(table[m]) <= value {
            b = m;
        } else {
            e = m;
        }
    }

    if value - i64::from(table[b]) > i64::from(table[e]) - value {
        e
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::lookup_nearest;
    use crate::config::gct::GCT_2P20;

    fn lookup_linear(table: &[i32], value: i64) -> usize {
        let mut best = 0;

        for (i, &entry) in table.iter().enumerate() {
            if (i64::from(entry) - value).abs() < (i64::from(table[best]) - value).abs() {
                best = i;
            }
        }

        best
    }

    #[test]
    fn exact_hits() {
        for (i, &entry) in GCT_2P20.iter().enumerate() {
            assert_eq!(lookup_nearest(&GCT_2P20, i64::from(entry)), i);
        }
    }

    #[test]
    fn ties_go_down() {
        let table = [0, 10, 20, 30];

        assert_eq!(lookup_nearest(&table, 15), 1);
        assert_eq!(lookup_nearest(&table, 16), 2);
        assert_eq!(lookup_nearest(&table, 14), 1);
        assert_eq!(lookup_nearest(&table, 25), 2);
    }

    #[test]
    fn out_of_range() {
        let table = [100, 200, 300];

        assert_eq!(lookup_nearest(&table, -5), 0);
        assert_eq!(lookup_nearest(&table, 1_000), 2);
        assert_eq!(lookup_nearest(&[42], 7), 0);
    }

    #[test]
    fn matches_linear_scan() {
        let mut seed: u32 = 0xdead_beef;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed
        };

        for _ in 0..50 {
            let mut table = [0i32; 256];
            let mut acc = (next() % 100) as i32;

            for entry in table.iter_mut() {
                acc += 1 + (next() % 40) as i32;
                *entry = acc;
            }

            for _ in 0..200 {
                let value = i64::from(next() % (acc as u32 + 100)) - 50;
                assert_eq!(
                    lookup_nearest(&table, value),
                    lookup_linear(&table, value),
                    "value {value}"
                );
            }
        }
    }
}
