mod csv;
mod text;

pub use csv::{read_master_timetable, write_master_timetable};
pub use text::print_summary;
