pub mod table;

pub use table::{print_columns, print_table};
