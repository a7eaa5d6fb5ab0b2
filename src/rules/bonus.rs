//! Merger bonus distribution.
//!
//! When a corporation is acquired its largest shareholders are paid out:
//! holders at the top holding split the majority bonus, holders at the next
//! distinct holding split the minority bonus. If nobody sits below the top,
//! the top holders split both.

use crate::core::PlayerId;

/// Split merger bonuses among shareholders.
///
/// `holdings` lists each player's shares in the acquired corporation;
/// players with no shares are ignored. Returns one entry per recipient, in
/// the order of `holdings`. Splits round down.
#[must_use]
pub fn merger_bonuses(holdings: &[(PlayerId, u32)], majority: u32, minority: u32) -> Vec<(PlayerId, u32)> {
    let held = || holdings.iter().filter(|(_, shares)| *shares > 0);

    let Some(max) = held().map(|(_, shares)| *shares).max() else {
        return Vec::new();
    };
    let second = held().map(|(_, shares)| *shares).filter(|&s| s < max).max();

    let top_count = held().filter(|(_, s)| *s == max).count() as u32;
    let Some(second) = second else {
        let each = (majority + minority) / top_count;
        return held().map(|(id, _)| (*id, each)).collect();
    };
    let second_count = held().filter(|(_, s)| *s == second).count() as u32;

    held()
        .filter_map(|(id, shares)| {
            if *shares == max {
                Some((*id, majority / top_count))
            } else if *shares == second {
                Some((*id, minority / second_count))
            } else {
                None
            }
        })
        .collect()
}
