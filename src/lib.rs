mod common;
mod dto;
mod echart;
mod error;
mod manager;

pub use common::*;
pub use dto::{SeriesData, TimeSeriesDto};
pub use echart::{scatter_data, EchartAxis, EchartSerie};
pub use error::*;
pub use manager::{ScatterPoint, TimeSeriesManager};
