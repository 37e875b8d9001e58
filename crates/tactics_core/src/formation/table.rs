//! Roster slot → target position table

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Result, TacticsError};
use crate::geometry::Vec2;

/// Target position per roster slot, ordered by slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PositionTable(BTreeMap<u8, Vec2>);

impl PositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, unum: u8, pos: Vec2) -> Option<Vec2> {
        self.0.insert(unum, pos)
    }

    pub fn get(&self, unum: u8) -> Result<Vec2> {
        self.0.get(&unum).copied().ok_or(TacticsError::UnknownSlot(unum))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, Vec2)> + '_ {
        self.0.iter().map(|(unum, pos)| (*unum, *pos))
    }

    /// Ceiling on x for every entry; y is left alone.
    pub fn clamp_x_max(&mut self, max_x: f32) {
        for pos in self.0.values_mut() {
            pos.x = pos.x.min(max_x);
        }
    }

    /// Second-smallest x among all entries.
    ///
    /// Falls back to the only x with a single entry and to 0.0 when empty.
    pub fn second_smallest_x(&self) -> f32 {
        let mut xs: Vec<f32> = self.0.values().map(|p| p.x).collect();
        xs.sort_by(|a, b| a.total_cmp(b));
        match xs.as_slice() {
            [] => 0.0,
            [only] => *only,
            [_, second, ..] => *second,
        }
    }
}

impl FromIterator<(u8, Vec2)> for PositionTable {
    fn from_iter<I: IntoIterator<Item = (u8, Vec2)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
