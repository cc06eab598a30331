use comfy_table::Table;

use crate::journal::{SessionRecord, format_ordinal};
use crate::output::format::{create_styled_table, dim_cell, header_cell, right_cell};
use crate::utils::format_date;

const MISSING: &str = "-";

pub(crate) fn session_table(files: &[String], use_color: bool) -> Table {
    let mut table = create_styled_table();
    table.set_header(
        ["#", "Session", "Date", "Topic", "File"]
            .into_iter()
            .map(|h| header_cell(h, use_color)),
    );

    for (index, file) in files.iter().enumerate() {
        let record = SessionRecord::from_filename(file);
        let number = record.number.map(format_ordinal);
        let date = record.date.map(format_date);
        table.add_row(vec![
            right_cell(&(index + 1).to_string()),
            right_cell(number.as_deref().unwrap_or(MISSING)),
            dim_cell(date.as_deref().unwrap_or(MISSING), use_color),
            comfy_table::Cell::new(record.topic.as_deref().unwrap_or(MISSING)),
            dim_cell(file, use_color),
        ]);
    }
    table
}

/// Print the newest sessions, most recent first
pub(crate) fn print_session_list(files: &[String], use_color: bool) {
    if files.is_empty() {
        println!("No sessions found.");
        return;
    }
    println!("Recent sessions (showing {}):", files.len());
    println!("{}", session_table(files, use_color));
}

pub(crate) fn output_session_json(files: &[String]) -> String {
    let records: Vec<SessionRecord> = files
        .iter()
        .map(|f| SessionRecord::from_filename(f))
        .collect();
    serde_json::to_string_pretty(&records).unwrap_or_else(|_| "[]".to_string())
}
