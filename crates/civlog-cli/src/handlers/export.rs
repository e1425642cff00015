use anyhow::{Context, Result};
use civlog_types::FlightRecord;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::context::ExecutionContext;
use crate::views::DATE_FORMAT;

/// Spreadsheet programs only detect UTF-8 with it
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Serialize)]
struct CsvRow<'a> {
    date: String,
    aircraft: &'a str,
    departure: &'a str,
    arrival: &'a str,
    crew: &'a str,
    crew_id: &'a str,
    function: &'a str,
    day: String,
    night: String,
    total: String,
    navigation: String,
    instrument: String,
    captain: String,
    landings: u32,
    distance: f64,
    observation: &'a str,
    status: &'a str,
    registration: &'a str,
}

impl<'a> From<&'a FlightRecord> for CsvRow<'a> {
    fn from(record: &'a FlightRecord) -> Self {
        Self {
            date: record.date.format(DATE_FORMAT).to_string(),
            aircraft: &record.aircraft,
            departure: &record.departure,
            arrival: &record.arrival,
            crew: &record.crew,
            crew_id: &record.crew_id,
            function: &record.function,
            day: record.day.to_string(),
            night: record.night.to_string(),
            total: record.total().to_string(),
            navigation: record.navigation.to_string(),
            instrument: record.instrument.to_string(),
            captain: record.captain.to_string(),
            landings: record.landings,
            distance: record.distance,
            observation: &record.observation,
            status: &record.status,
            registration: &record.registration,
        }
    }
}

pub fn handle(ctx: &ExecutionContext, file: &Path, output: Option<&Path>) -> Result<()> {
    let export = ctx.load(file)?;

    match output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_records(BufWriter::new(out), &export.records)?;
            log::info!("wrote {} records to {}", export.records.len(), path.display());
        }
        None => write_records(io::stdout().lock(), &export.records)?,
    }

    if !export.rejected.is_empty() {
        log::warn!(
            "{} rows were rejected and are not in the export (see `civlog show`)",
            export.rejected.len()
        );
    }

    Ok(())
}

fn write_records<W: Write>(mut out: W, records: &[FlightRecord]) -> Result<()> {
    out.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        writer.serialize(CsvRow::from(record))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use civlog_types::{Hours, RecordId};

    #[test]
    fn test_bom_header_and_rows() {
        let record = FlightRecord {
            id: RecordId::new(),
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            aircraft: "PR-EJQ".to_string(),
            crew: "Fulano (123)".to_string(),
            crew_id: "123".to_string(),
            departure: "SBMT".to_string(),
            arrival: "SBJD".to_string(),
            day: Hours::from_parts(1, 5),
            night: Hours::ZERO,
            navigation: Hours::ZERO,
            instrument: Hours::ZERO,
            captain: Hours::ZERO,
            landings: 3,
            distance: 12.5,
            function: "Piloto em comando".to_string(),
            observation: "Toque, arremetida".to_string(),
            status: "Aprovado".to_string(),
            registration: "REG-1".to_string(),
            exclusion_date: String::new(),
            excluded_by: String::new(),
        };

        let mut buffer = Vec::new();
        write_records(&mut buffer, &[record]).unwrap();

        assert!(buffer.starts_with(UTF8_BOM));
        let text = String::from_utf8(buffer[UTF8_BOM.len()..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "date,aircraft,departure,arrival,crew,crew_id,function,day,night,total,navigation,instrument,captain,landings,distance,observation,status,registration"
        );
        assert_eq!(
            lines[1],
            "02/01/2024,PR-EJQ,SBMT,SBJD,Fulano (123),123,Piloto em comando,1.5,0.0,1.5,0.0,0.0,0.0,3,12.5,\"Toque, arremetida\",Aprovado,REG-1"
        );
    }
}
