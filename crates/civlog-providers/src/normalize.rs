use civlog_types::{FieldError, FlightRecord, RecordId, RowError};

use crate::extract::extract_crew_id;
use crate::filter::parse_flight_date;
use crate::row::SourceRow;
use crate::timecode::decode_time_code;

/// Landing count; a blank cell means none
fn parse_landings(cell: &str) -> Result<u32, FieldError> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(0);
    }
    cell.parse().map_err(|_| FieldError::MalformedNumber {
        column: "landings",
        value: cell.to_string(),
    })
}

/// Distance in nautical miles, decimal comma or point; a blank cell is zero
fn parse_distance(cell: &str) -> Result<f64, FieldError> {
    let normalized = cell.replace(',', ".");
    let normalized = normalized.trim();
    if normalized.is_empty() {
        return Ok(0.0);
    }
    normalized
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite())
        .ok_or_else(|| FieldError::MalformedNumber {
            column: "distance",
            value: cell.trim().to_string(),
        })
}

/// Convert one filtered source row into a canonical record.
///
/// Each call assigns a fresh [`RecordId`]. Text cells are trimmed; empty text
/// never fails. Time, date and numeric cells that cannot be read reject the
/// whole row.
pub fn normalize_row(row: &SourceRow) -> Result<FlightRecord, RowError> {
    Ok(FlightRecord {
        id: RecordId::new(),
        date: parse_flight_date(&row.date)?,
        aircraft: row.aircraft.trim().to_string(),
        crew: row.crew.trim().to_string(),
        crew_id: extract_crew_id(&row.crew),
        departure: row.departure.trim().to_string(),
        arrival: row.arrival.trim().to_string(),
        day: decode_time_code("day", &row.day)?,
        night: decode_time_code("night", &row.night)?,
        navigation: decode_time_code("navigation", &row.navigation)?,
        instrument: decode_time_code("instrument", &row.instrument)?,
        captain: decode_time_code("captain", &row.captain)?,
        landings: parse_landings(&row.landings)?,
        distance: parse_distance(&row.distance)?,
        function: row.function.trim().to_string(),
        observation: row.observation.trim().to_string(),
        status: row.status.trim().to_string(),
        registration: row.registration.trim().to_string(),
        exclusion_date: row.exclusion_date.trim().to_string(),
        excluded_by: row.excluded_by.trim().to_string(),
    })
}
