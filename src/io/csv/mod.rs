mod read;
mod write;

pub(crate) use read::{read_csv, read_csv_string, read_location_labels};
pub(crate) use write::{write_csv, write_csv_string};
