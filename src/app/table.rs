use crate::domain::model::SourceReport;
use comfy_table::{presets::ASCII_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};

const HEADER: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Renders one source's rows as an ASCII table headed by the source title.
pub fn render_report(report: &SourceReport) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(HEADER.to_vec());

    for row in &report.rows {
        let mut cells = Row::new();
        cells.add_cell(Cell::new(&row.keyword).set_alignment(CellAlignment::Left));
        cells.add_cell(Cell::new(row.stats.found).set_alignment(CellAlignment::Right));
        cells.add_cell(Cell::new(row.stats.processed).set_alignment(CellAlignment::Right));
        cells.add_cell(Cell::new(row.stats.average).set_alignment(CellAlignment::Right));
        table.add_row(cells);
    }

    format!("{}\n{}", report.title, table)
}
