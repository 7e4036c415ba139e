use std::collections::{HashMap, HashSet};

use log::{debug, error, warn};

use crate::common::ops::SetIntersect;
use crate::common::time_point::{Point, Timestamp, Value};
use crate::common::time_series::{TimeSeries, TimeSeriesId};
use crate::{PlotlineErr, Result};

/// One row per overlapped timestamp: each serie's value in registration
/// order, then the timestamp itself as the last element.
pub type ScatterPoint = Vec<Value>;

/// Owns the registered series and answers cross-serie queries. External
/// holders keep the serie id and borrow through `get`/`get_mut`.
pub struct TimeSeriesManager {
    series_list: Vec<TimeSeries>,
    series_index: HashMap<TimeSeriesId, usize>,
}

impl TimeSeriesManager {
    pub fn new() -> TimeSeriesManager {
        TimeSeriesManager {
            series_list: Vec::new(),
            series_index: HashMap::new(),
        }
    }

    /// Register a serie. Registering the same id twice is rejected, it
    /// would leave the list and the index disagreeing.
    pub fn add(&mut self, series: TimeSeries) -> Result<()> {
        if self.series_index.contains_key(&series.id()) {
            return Err(PlotlineErr::SeriesAlreadyRegistered(series.id()));
        }
        self.series_index.insert(series.id(), self.series_list.len());
        self.series_list.push(series);
        Ok(())
    }

    pub fn remove(&mut self, id: TimeSeriesId) -> Result<TimeSeries> {
        let pos = match self.series_index.remove(&id) {
            Some(pos) => pos,
            None => return Err(PlotlineErr::SeriesNotFound(id)),
        };
        let series = self.series_list.remove(pos);
        // positions after the removed serie shift down by one
        for p in self.series_index.values_mut() {
            if *p > pos {
                *p -= 1;
            }
        }
        Ok(series)
    }

    pub fn get(&self, id: TimeSeriesId) -> Option<&TimeSeries> {
        self.series_index.get(&id).map(|&pos| &self.series_list[pos])
    }

    pub fn get_mut(&mut self, id: TimeSeriesId) -> Option<&mut TimeSeries> {
        match self.series_index.get(&id) {
            Some(&pos) => self.series_list.get_mut(pos),
            None => None,
        }
    }

    /// Series in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TimeSeries> {
        self.series_list.iter()
    }

    pub fn len(&self) -> usize {
        self.series_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series_list.is_empty()
    }

    /// Timestamps present in every registered serie. Seeded from the first
    /// serie and narrowed by each subsequent one.
    pub fn overlapped_timestamps(&self) -> Result<HashSet<Timestamp>> {
        let first = self.series_list.first().ok_or(PlotlineErr::EmptyManager)?;
        let mut overlapped: HashSet<Timestamp> = first.timestamps().into_iter().collect();
        for series in self.series_list.iter().skip(1) {
            let current: HashSet<Timestamp> = series.timestamps().into_iter().collect();
            overlapped = overlapped.set_intersect(&current);
        }
        Ok(overlapped)
    }

    /// Scatter rows for every overlapped timestamp. An empty manager
    /// degrades to an empty result instead of failing the caller.
    pub fn scatter_points(&self) -> Vec<ScatterPoint> {
        debug!("computing scatter points over {} series", self.series_list.len());

        let timestamps = match self.overlapped_timestamps() {
            Ok(timestamps) => timestamps,
            Err(err) => {
                warn!("failed to get overlapped timestamps: {}", err);
                HashSet::new()
            }
        };

        let mut rows = Vec::with_capacity(timestamps.len());
        for timestamp in timestamps {
            let mut row: ScatterPoint = Vec::with_capacity(self.series_list.len() + 1);
            let mut complete = true;
            for series in &self.series_list {
                match series.get_point(timestamp) {
                    Ok(point) => row.push(point.value),
                    Err(err) => {
                        // overlap guarantees the timestamp is in every
                        // serie; a miss here means a broken index
                        error!(
                            "serie {} has no point at overlapped timestamp {}: {}",
                            series.id(),
                            timestamp,
                            err
                        );
                        complete = false;
                        break;
                    }
                }
            }
            if complete {
                row.push(timestamp as Value);
                rows.push(row);
            }
        }
        rows
    }

    /// Remove the point from every serie that holds it. A serie not holding
    /// the point is the expected case and is skipped silently; any other
    /// failure is logged and the fan-out continues.
    pub fn remove_point(&mut self, point: &Point) {
        for series in self.series_list.iter_mut() {
            match series.remove(point) {
                Ok(()) => {}
                Err(PlotlineErr::PointNotExist(_)) => {}
                Err(err) => {
                    error!(
                        "failed to remove point {} from serie {}: {}",
                        point.id,
                        series.id(),
                        err
                    );
                }
            }
        }
    }

    /// Remove the point at the given timestamp from every serie
    /// independently; series without it are logged and skipped.
    pub fn remove_point_with_timestamp(&mut self, timestamp: Timestamp) {
        for series in self.series_list.iter_mut() {
            if let Err(err) = series.remove_point_with_timestamp(timestamp) {
                warn!(
                    "serie {} kept no point at timestamp {}: {}",
                    series.id(),
                    timestamp,
                    err
                );
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::common::time_point::Point;
    use crate::common::time_series::TimeSeries;
    use crate::manager::TimeSeriesManager;
    use crate::PlotlineErr;

    #[test]
    fn add_and_remove_series() {
        let mut manager = TimeSeriesManager::new();
        assert!(manager.is_empty());

        let series = TimeSeries::new("temperature");
        let id = series.id();
        manager.add(series).unwrap();
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.get(id).unwrap().name(), "temperature");

        let removed = manager.remove(id).unwrap();
        assert_eq!(removed.id(), id);
        assert!(manager.is_empty());
        assert_eq!(
            manager.remove(id).unwrap_err(),
            PlotlineErr::SeriesNotFound(id)
        );
    }

    #[test]
    fn add_rejects_duplicate_registration() {
        let mut manager = TimeSeriesManager::new();
        let series = TimeSeries::new("temperature");
        let id = series.id();
        manager.add(series.clone()).unwrap();

        assert_eq!(
            manager.add(series),
            Err(PlotlineErr::SeriesAlreadyRegistered(id))
        );
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn remove_keeps_positions_consistent() {
        let mut manager = TimeSeriesManager::new();
        let first = TimeSeries::new("first");
        let second = TimeSeries::new("second");
        let third = TimeSeries::new("third");
        let (first_id, third_id) = (first.id(), third.id());
        manager.add(first).unwrap();
        manager.add(second.clone()).unwrap();
        manager.add(third).unwrap();

        manager.remove(second.id()).unwrap();
        assert_eq!(manager.get(first_id).unwrap().name(), "first");
        assert_eq!(manager.get(third_id).unwrap().name(), "third");
        let names: Vec<&str> = manager.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["first", "third"]);
    }

    #[test]
    fn overlapped_timestamps_on_empty_manager() {
        let manager = TimeSeriesManager::new();
        assert_eq!(
            manager.overlapped_timestamps(),
            Err(PlotlineErr::EmptyManager)
        );
    }

    #[test]
    fn scatter_points_on_empty_manager() {
        let manager = TimeSeriesManager::new();
        assert!(manager.scatter_points().is_empty());
    }

    #[test]
    fn remove_point_leaves_other_series_untouched() {
        let mut manager = TimeSeriesManager::new();
        let mut holder = TimeSeries::new("holder");
        let point = Point::new(1, 10.0);
        holder.add(point);
        let holder_id = holder.id();

        let mut other = TimeSeries::new("other");
        other.add(Point::new(1, 99.0));
        let other_id = other.id();

        manager.add(holder).unwrap();
        manager.add(other).unwrap();

        manager.remove_point(&point);
        assert!(!manager.get(holder_id).unwrap().has_timestamp(1));
        assert!(manager.get(other_id).unwrap().has_timestamp(1));
    }
}
