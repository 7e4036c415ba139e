use std::collections::HashMap;

use uuid::Uuid;

use crate::common::time_point::{Point, Timestamp};
use crate::{PlotlineErr, Result};

pub type TimeSeriesId = Uuid;

/// A named serie of points, kept in arrival order and indexed by timestamp
/// for O(1) lookup. The index and the ordered list always agree: a timestamp
/// is indexed iff a point with it is in the list, and both entries carry the
/// same point id.
#[derive(Clone, Debug)]
pub struct TimeSeries {
    id: TimeSeriesId,
    name: String,
    points: Vec<Point>,
    timestamp_to_point: HashMap<Timestamp, Point>,
}

impl TimeSeries {
    pub fn new(name: &str) -> Self {
        TimeSeries {
            id: Uuid::new_v4(),
            name: name.to_string(),
            points: Vec::new(),
            timestamp_to_point: HashMap::new(),
        }
    }

    /// Every initial point goes through `add`, so list and index cannot
    /// start out inconsistent.
    pub fn from_data(name: &str, points: Vec<Point>) -> Self {
        let mut series = TimeSeries::new(name);
        for point in points {
            series.add(point);
        }
        series
    }

    pub fn id(&self) -> TimeSeriesId {
        self.id
    }

    /// Display label. Expected to be unique across series; the type does not
    /// enforce it, duplicate names only make axis labels ambiguous.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &Vec<Point> {
        &self.points
    }

    /// Indexed insert. A point at an already known timestamp replaces the
    /// previous one in the ordered list as well, so no unreachable list
    /// entry is left behind.
    pub fn add(&mut self, point: Point) {
        match self.timestamp_to_point.insert(point.timestamp, point) {
            Some(old) => {
                if let Some(pos) = self.points.iter().position(|p| p.id == old.id) {
                    self.points[pos] = point;
                }
            }
            None => self.points.push(point),
        }
    }

    /// Remove by identity. Fails with `PointNotExist` when no point with
    /// this id is in the serie, even if one shares its timestamp.
    pub fn remove(&mut self, point: &Point) -> Result<()> {
        let pos = self
            .points
            .iter()
            .position(|p| p.id == point.id)
            .ok_or(PlotlineErr::PointNotExist(point.id))?;
        self.points.remove(pos);
        self.timestamp_to_point.remove(&point.timestamp);
        Ok(())
    }

    /// Remove whatever point is indexed at the given timestamp.
    pub fn remove_point_with_timestamp(&mut self, timestamp: Timestamp) -> Result<Point> {
        let point = *self
            .timestamp_to_point
            .get(&timestamp)
            .ok_or(PlotlineErr::TimestampNotFound(timestamp))?;
        self.remove(&point)?;
        Ok(point)
    }

    pub fn get_point(&self, timestamp: Timestamp) -> Result<&Point> {
        self.timestamp_to_point
            .get(&timestamp)
            .ok_or(PlotlineErr::TimestampNotFound(timestamp))
    }

    pub fn has_timestamp(&self, timestamp: Timestamp) -> bool {
        self.timestamp_to_point.contains_key(&timestamp)
    }

    /// All indexed timestamps, order unspecified.
    pub fn timestamps(&self) -> Vec<Timestamp> {
        self.timestamp_to_point.keys().cloned().collect()
    }
}
