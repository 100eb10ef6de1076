pub mod csv_table;
pub mod discovery;
pub mod numeric;

pub use csv_table::{CsvTable, read_csv_table};
pub use discovery::{load_first_existing, load_optional};
pub use numeric::{format_numeric, parse_f64};
