use serde::Serialize;

use crate::common::time_point::Value;
use crate::common::time_series::TimeSeries;
use crate::manager::{ScatterPoint, TimeSeriesManager};

/// Line-serie option block the chart layer consumes, values in list order.
#[derive(Debug, Serialize)]
pub struct EchartSerie {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct EchartAxis {
    pub name: String,
}

impl From<&TimeSeries> for EchartSerie {
    fn from(series: &TimeSeries) -> Self {
        EchartSerie {
            kind: "line",
            data: series.points().iter().map(|point| point.value).collect(),
        }
    }
}

impl From<&TimeSeries> for EchartAxis {
    fn from(series: &TimeSeries) -> Self {
        EchartAxis {
            name: series.name().to_string(),
        }
    }
}

/// Scatter rows for the chart layer, so it imports one module for all of
/// its option blocks.
pub fn scatter_data(manager: &TimeSeriesManager) -> Vec<ScatterPoint> {
    manager.scatter_points()
}
