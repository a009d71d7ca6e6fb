pub mod trades;
pub mod weekly;
