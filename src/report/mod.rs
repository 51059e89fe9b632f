//! Presentation of scenario reports: console tables and file exports

mod table;
mod export;

pub use table::{
    format_year_row, report_banner, write_input_summary, write_report, write_report_header,
    write_scenario_report, write_title, GOODBYE, RUN_AGAIN_PROMPT, TABLE_WIDTH,
};
pub use export::{to_json, write_csv, ExportRecord, ScenarioCsvWriter};
