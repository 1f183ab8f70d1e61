pub mod csv_writer;
pub mod markdown;

pub use csv_writer::write_csv;
pub use markdown::{render_markdown, write_markdown};
