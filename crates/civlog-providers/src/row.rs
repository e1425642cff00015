use civlog_types::{ColumnMap, RowError};

/// A filtered source row with every cell addressed by name.
///
/// Built at the parser boundary so that nothing downstream depends on column
/// positions. Cells are kept exactly as read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRow {
    pub date: String,
    pub aircraft: String,
    pub departure: String,
    pub arrival: String,
    pub observation: String,
    pub crew: String,
    pub day: String,
    pub night: String,
    pub navigation: String,
    pub instrument: String,
    pub captain: String,
    pub landings: String,
    pub distance: String,
    pub function: String,
    pub status: String,
    pub registration: String,
    pub exclusion_date: String,
    pub excluded_by: String,
}

impl SourceRow {
    /// Name the cells of a positional row using `columns`.
    ///
    /// Fails with [`RowError::MissingColumn`] for the first mapped column the
    /// row is too short to hold.
    pub fn from_cells(cells: &[String], columns: &ColumnMap) -> Result<Self, RowError> {
        let cell = |column: &'static str, index: usize| -> Result<String, RowError> {
            cells
                .get(index)
                .cloned()
                .ok_or(RowError::MissingColumn { column, index })
        };

        Ok(Self {
            date: cell("date", columns.date)?,
            aircraft: cell("aircraft", columns.aircraft)?,
            departure: cell("departure", columns.departure)?,
            arrival: cell("arrival", columns.arrival)?,
            observation: cell("observation", columns.observation)?,
            crew: cell("crew", columns.crew)?,
            day: cell("day", columns.day)?,
            night: cell("night", columns.night)?,
            navigation: cell("navigation", columns.navigation)?,
            instrument: cell("instrument", columns.instrument)?,
            captain: cell("captain", columns.captain)?,
            landings: cell("landings", columns.landings)?,
            distance: cell("distance", columns.distance)?,
            function: cell("function", columns.function)?,
            status: cell("status", columns.status)?,
            registration: cell("registration", columns.registration)?,
            exclusion_date: cell("exclusion_date", columns.exclusion_date)?,
            excluded_by: cell("excluded_by", columns.excluded_by)?,
        })
    }
}
