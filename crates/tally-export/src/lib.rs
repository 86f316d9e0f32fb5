pub mod csv;
pub mod json;
pub mod writer;
pub mod error;

// Re-exports
pub use csv::{csv_file_name, parse_quoted_rows, render_csv, write_csv};
pub use json::{
    json_file_name, render_all_owners_json, render_single_owner_json, write_all_owners_json,
    write_single_owner_json, AllOwnersEntry, SingleOwnerEntry, ALL_OWNERS_FILE_NAME,
};
pub use writer::write_atomic;
pub use error::{Error, Result};
