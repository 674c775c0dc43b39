pub mod file_type;
pub mod size;
pub mod time;

pub use file_type::classify_file_type;
pub use size::format_file_size;
