use serde::Deserialize;

use crate::common::time_point::{Point, Timestamp, Value};
use crate::common::time_series::TimeSeries;
use crate::{PlotlineErr, Result};

/// Wire shape of one serie as the backend hands it over: two parallel
/// sequences, `datetime[i]` paired with `val[i]`.
#[derive(Clone, Debug, Deserialize)]
pub struct TimeSeriesDto {
    pub name: String,
    pub series: SeriesData,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SeriesData {
    pub datetime: Vec<Timestamp>,
    pub val: Vec<Value>,
}

impl TimeSeriesDto {
    pub fn from_json(raw: &str) -> Result<TimeSeriesDto> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl TimeSeries {
    /// Build a serie from a decoded DTO. The two sequences must have the
    /// same length.
    pub fn from_dto(dto: &TimeSeriesDto) -> Result<TimeSeries> {
        if dto.series.datetime.len() != dto.series.val.len() {
            return Err(PlotlineErr::MismatchedDtoLength {
                datetime: dto.series.datetime.len(),
                val: dto.series.val.len(),
            });
        }
        let points = dto
            .series
            .datetime
            .iter()
            .zip(dto.series.val.iter())
            .map(|(&timestamp, &value)| Point::new(timestamp, value))
            .collect();
        Ok(TimeSeries::from_data(&dto.name, points))
    }
}

#[cfg(test)]
mod test {
    use crate::common::time_series::TimeSeries;
    use crate::dto::{SeriesData, TimeSeriesDto};
    use crate::PlotlineErr;

    #[test]
    fn build_from_dto() {
        let dto = TimeSeriesDto {
            name: "S".to_string(),
            series: SeriesData {
                datetime: vec![5, 6],
                val: vec![1.5, 2.5],
            },
        };
        let series = TimeSeries::from_dto(&dto).unwrap();
        assert_eq!(series.name(), "S");
        assert_eq!(series.get_point(5).unwrap().value, 1.5);
        assert_eq!(series.get_point(6).unwrap().value, 2.5);
    }

    #[test]
    fn build_from_dto_with_mismatched_lengths() {
        let dto = TimeSeriesDto {
            name: "S".to_string(),
            series: SeriesData {
                datetime: vec![5, 6, 7],
                val: vec![1.5],
            },
        };
        assert_eq!(
            TimeSeries::from_dto(&dto).unwrap_err(),
            PlotlineErr::MismatchedDtoLength {
                datetime: 3,
                val: 1
            }
        );
    }

    #[test]
    fn decode_from_json() {
        let raw = r#"{"name":"S","series":{"datetime":[5,6],"val":[1.5,2.5]}}"#;
        let dto = TimeSeriesDto::from_json(raw).unwrap();
        assert_eq!(dto.name, "S");
        assert_eq!(dto.series.datetime, vec![5, 6]);
        assert_eq!(dto.series.val, vec![1.5, 2.5]);
    }

    #[test]
    fn decode_from_malformed_json() {
        let res = TimeSeriesDto::from_json(r#"{"name":"S"}"#);
        assert!(matches!(res, Err(PlotlineErr::DtoDecodeErr(_))));
    }
}
