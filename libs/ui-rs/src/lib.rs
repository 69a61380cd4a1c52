//! Dioxus building blocks for the voting dashboard.

pub mod style;
mod table_cell;

pub use style::StatusColor;
pub use table_cell::{HeaderCell, StatusCell, TableCell};
