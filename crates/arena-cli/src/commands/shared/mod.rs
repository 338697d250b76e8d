pub mod limit;
pub mod user_file;
