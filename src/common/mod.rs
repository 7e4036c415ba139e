use crate::common::ops::SetIntersect;
use crate::common::time_point::{PointId, Timestamp};
use std::collections::HashSet;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

pub mod time_point;
pub mod time_series;

pub mod ops {
    pub trait SetIntersect {
        fn set_intersect(&self, other: &Self) -> Self;
    }
}

impl SetIntersect for HashSet<Timestamp> {
    fn set_intersect(&self, other: &Self) -> Self {
        self.intersection(other).cloned().collect()
    }
}

pub struct IdGenerator(AtomicU64);

impl IdGenerator {
    pub const fn new(init_id: PointId) -> IdGenerator {
        IdGenerator(AtomicU64::new(init_id))
    }
    pub fn next(&self) -> PointId {
        self.0.fetch_add(1, Ordering::SeqCst)
    }
}
