use crate::common::IdGenerator;

pub type Timestamp = u64;
pub type Value = f64;
pub type PointId = u64;

static POINT_ID_GENERATOR: IdGenerator = IdGenerator::new(0);

/// One timestamped observation. The id is process-local and unique, so two
/// points built from the same (timestamp, value) pair still compare unequal;
/// removal is keyed on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub id: PointId,
    pub timestamp: Timestamp,
    pub value: Value,
}

impl Point {
    pub fn new(timestamp: Timestamp, value: Value) -> Point {
        Point {
            id: POINT_ID_GENERATOR.next(),
            timestamp,
            value,
        }
    }
}
