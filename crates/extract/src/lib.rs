pub mod pipeline;
pub mod workbook;
pub mod writer;

pub use pipeline::{ExtractParams, SortKey, run};
pub use workbook::load_table;
pub use writer::write_json;
