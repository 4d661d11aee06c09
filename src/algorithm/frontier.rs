use std::collections::{BTreeSet, HashMap};

use crate::math::random::RandomSelector;

/// Dig priority of a frontier wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// Ordinary candidate
    Normal,
    /// Next to an unfinished corridor end
    Elevated,
}

/// Walls eligible for digging, bucketed by priority
///
/// Each bucket is ordered by coordinate so a uniform pick over it is
/// reproducible for a fixed seed. The index keeps a wall in at most one
/// bucket.
#[derive(Debug, Clone, Default)]
pub struct WallFrontier {
    normal: BTreeSet<[i32; 2]>,
    elevated: BTreeSet<[i32; 2]>,
    index: HashMap<[i32; 2], Priority>,
}

impl WallFrontier {
    /// Create an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a wall, replacing any priority it already had
    pub fn insert(&mut self, position: [i32; 2], priority: Priority) {
        if let Some(previous) = self.index.insert(position, priority) {
            self.bucket_mut(previous).remove(&position);
        }
        self.bucket_mut(priority).insert(position);
    }

    /// Drop a wall, returning its priority if it was present
    pub fn remove(&mut self, position: [i32; 2]) -> Option<Priority> {
        let priority = self.index.remove(&position)?;
        self.bucket_mut(priority).remove(&position);
        Some(priority)
    }

    /// Take a random wall from the highest non-empty priority bucket
    pub fn pop(&mut self, rng: &mut RandomSelector) -> Option<[i32; 2]> {
        let bucket = if self.elevated.is_empty() {
            &self.normal
        } else {
            &self.elevated
        };

        let pick = rng.pick_index(bucket.len())?;
        let position = bucket.iter().nth(pick).copied()?;
        self.remove(position);
        Some(position)
    }

    /// Whether any elevated wall is waiting
    pub fn has_elevated(&self) -> bool {
        !self.elevated.is_empty()
    }

    fn bucket_mut(&mut self, priority: Priority) -> &mut BTreeSet<[i32; 2]> {
        match priority {
            Priority::Normal => &mut self.normal,
            Priority::Elevated => &mut self.elevated,
        }
    }
}
