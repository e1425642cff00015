//! Fixtures for SACI export generation.
//!
//! Provides utilities to:
//! - Describe export rows with sensible defaults
//! - Render them as a delimited (`.csv`) or markup (`.xlt`) export
//! - Encode the result the way SACI does (single-byte Latin)

use civlog_types::ColumnMap;
use encoding_rs::WINDOWS_1252;

const HEADER: [&str; 18] = [
    "Data",
    "Aeronave",
    "Origem",
    "Destino",
    "Observação",
    "Tripulante",
    "Diurno",
    "Noturno",
    "Navegação",
    "IFR",
    "Capitão",
    "Pousos",
    "NM",
    "Função",
    "Status",
    "Registro",
    "Data exclusão",
    "Excluído por",
];

/// One source row. Every field holds the raw cell text.
#[derive(Debug, Clone)]
pub struct ExportRow {
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

impl ExportRow {
    /// A valid, approved one-hour day flight on `date` (`D/M/YYYY`)
    pub fn new(date: &str) -> Self {
        Self {
            date: date.to_string(),
            aircraft: "PR-EJQ".to_string(),
            departure: "SBMT".to_string(),
            arrival: "SBJD".to_string(),
            observation: String::new(),
            crew: "Fulano de Tal (123456)".to_string(),
            day: "1:00".to_string(),
            night: "0:00".to_string(),
            navigation: "0:00".to_string(),
            instrument: "0:00".to_string(),
            captain: "0:00".to_string(),
            landings: "1".to_string(),
            distance: "0".to_string(),
            function: "Piloto em comando".to_string(),
            status: "Aprovado".to_string(),
            registration: "REG-1".to_string(),
            exclusion_date: String::new(),
            excluded_by: String::new(),
        }
    }

    pub fn aircraft(mut self, value: &str) -> Self {
        self.aircraft = value.to_string();
        self
    }

    pub fn crew(mut self, value: &str) -> Self {
        self.crew = value.to_string();
        self
    }

    pub fn day(mut self, value: &str) -> Self {
        self.day = value.to_string();
        self
    }

    pub fn night(mut self, value: &str) -> Self {
        self.night = value.to_string();
        self
    }

    pub fn navigation(mut self, value: &str) -> Self {
        self.navigation = value.to_string();
        self
    }

    pub fn instrument(mut self, value: &str) -> Self {
        self.instrument = value.to_string();
        self
    }

    pub fn landings(mut self, value: &str) -> Self {
        self.landings = value.to_string();
        self
    }

    pub fn distance(mut self, value: &str) -> Self {
        self.distance = value.to_string();
        self
    }

    pub fn function(mut self, value: &str) -> Self {
        self.function = value.to_string();
        self
    }

    pub fn observation(mut self, value: &str) -> Self {
        self.observation = value.to_string();
        self
    }

    /// Mark the row as excluded at the source
    pub fn excluded(mut self) -> Self {
        self.status = "Exclusão".to_string();
        self.exclusion_date = "10/01/2024".to_string();
        self.excluded_by = "Operador".to_string();
        self
    }

    /// Cells placed according to the default SACI column layout
    pub fn cells(&self) -> Vec<String> {
        let columns = ColumnMap::default();
        let mut cells = vec![String::new(); columns.width()];
        cells[columns.date] = self.date.clone();
        cells[columns.aircraft] = self.aircraft.clone();
        cells[columns.departure] = self.departure.clone();
        cells[columns.arrival] = self.arrival.clone();
        cells[columns.observation] = self.observation.clone();
        cells[columns.crew] = self.crew.clone();
        cells[columns.day] = self.day.clone();
        cells[columns.night] = self.night.clone();
        cells[columns.navigation] = self.navigation.clone();
        cells[columns.instrument] = self.instrument.clone();
        cells[columns.captain] = self.captain.clone();
        cells[columns.landings] = self.landings.clone();
        cells[columns.distance] = self.distance.clone();
        cells[columns.function] = self.function.clone();
        cells[columns.status] = self.status.clone();
        cells[columns.registration] = self.registration.clone();
        cells[columns.exclusion_date] = self.exclusion_date.clone();
        cells[columns.excluded_by] = self.excluded_by.clone();
        cells
    }
}

/// Builds a whole export file from rows.
#[derive(Debug, Clone, Default)]
pub struct ExportBuilder {
    rows: Vec<ExportRow>,
}

impl ExportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(mut self, row: ExportRow) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(&self) -> &[ExportRow] {
        &self.rows
    }

    /// Twelve rows in date order: rows 4 and 9 are excluded, row 7 has an
    /// invalid date, leaving nine records.
    pub fn twelve_row_scenario() -> Self {
        Self::new()
            .row(ExportRow::new("2/1/2024").day("1:30").landings("3"))
            .row(
                ExportRow::new("3/1/2024")
                    .day("0:45")
                    .night("0:20")
                    .function("Instrutor de voo")
                    .crew("Aluno Um (700001)"),
            )
            .row(ExportRow::new("5/1/2024").day("2:10").function("Co-piloto"))
            .row(ExportRow::new("6/1/2024").day("3:00").excluded())
            .row(
                ExportRow::new("8/1/2024")
                    .day("1:04")
                    .navigation("1:04")
                    .function("Solo"),
            )
            .row(
                ExportRow::new("9/1/2024")
                    .night("1:58")
                    .instrument("0:40")
                    .function("Aluno")
                    .distance("120,5"),
            )
            .row(ExportRow::new("31/02/2024").day("5:00"))
            .row(
                ExportRow::new("12/1/2024")
                    .day("0:52")
                    .function("INSTRUÇÃO")
                    .observation("Toque; arremetida"),
            )
            .row(ExportRow::new("13/1/2024").night("1:00").excluded())
            .row(
                ExportRow::new("15/1/2024")
                    .day("1:16")
                    .night("0:33")
                    .landings("2"),
            )
            .row(ExportRow::new("16/1/2024").day("0:03").function("co-piloto"))
            .row(
                ExportRow::new("20/1/2024")
                    .day("4:27")
                    .navigation("4:27")
                    .landings("1")
                    .function("Piloto em Comando"),
            )
    }

    /// Delimited export text: two comment lines, a header row, `;` separated
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str("* Relatório de voos SACI\n");
        out.push_str("==========================\n");
        out.push_str(&HEADER.join(";"));
        out.push('\n');
        for row in &self.rows {
            let line: Vec<String> = row.cells().iter().map(|c| quote_csv(c)).collect();
            out.push_str(&line.join(";"));
            out.push('\n');
        }
        out
    }

    /// Markup export text: one `tr` per row, header first
    pub fn to_xlt(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"iso-8859-1\"?>\n");
        out.push_str("<html><body><table>\n");
        out.push_str("<tr>");
        for title in HEADER {
            out.push_str(&format!("<th>{}</th>", escape_xml(title)));
        }
        out.push_str("</tr>\n");
        for row in &self.rows {
            out.push_str("<tr>");
            for cell in row.cells() {
                out.push_str(&format!("<td>{}</td>", escape_xml(&cell)));
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</table></body></html>\n");
        out
    }

    pub fn csv_bytes(&self) -> Vec<u8> {
        encode_latin(&self.to_csv())
    }

    pub fn xlt_bytes(&self) -> Vec<u8> {
        encode_latin(&self.to_xlt())
    }
}

/// Encode text as SACI does (windows-1252)
pub fn encode_latin(text: &str) -> Vec<u8> {
    let (bytes, _, _) = WINDOWS_1252.encode(text);
    bytes.into_owned()
}

fn quote_csv(cell: &str) -> String {
    if cell.contains([';', '"', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
