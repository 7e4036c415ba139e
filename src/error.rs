use crate::common::time_point::{PointId, Timestamp};
use crate::common::time_series::TimeSeriesId;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PlotlineErr {
    /// No point is indexed at the given timestamp.
    TimestampNotFound(Timestamp),
    /// Identity-based removal found no point with this id in the serie,
    /// even if another point shares its timestamp.
    PointNotExist(PointId),
    SeriesNotFound(TimeSeriesId),
    SeriesAlreadyRegistered(TimeSeriesId),
    /// Overlap queries need at least one registered serie.
    EmptyManager,
    /// The DTO's datetime and val sequences must pair up index by index.
    MismatchedDtoLength { datetime: usize, val: usize },
    DtoDecodeErr(String),
}

impl fmt::Display for PlotlineErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlotlineErr::TimestampNotFound(timestamp) => {
                write!(f, "no point at timestamp {}", timestamp)
            }
            PlotlineErr::PointNotExist(id) => {
                write!(f, "point {} does not exist in the serie", id)
            }
            PlotlineErr::SeriesNotFound(id) => {
                write!(f, "time series {} is not registered", id)
            }
            PlotlineErr::SeriesAlreadyRegistered(id) => {
                write!(f, "time series {} is already registered", id)
            }
            PlotlineErr::EmptyManager => write!(f, "no time series registered"),
            PlotlineErr::MismatchedDtoLength { datetime, val } => write!(
                f,
                "dto sequences differ in length: {} datetimes, {} vals",
                datetime, val
            ),
            PlotlineErr::DtoDecodeErr(msg) => write!(f, "cannot decode dto: {}", msg),
        }
    }
}

impl Error for PlotlineErr {}

impl From<serde_json::Error> for PlotlineErr {
    fn from(err: serde_json::Error) -> Self {
        PlotlineErr::DtoDecodeErr(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlotlineErr>;
