pub mod image_file;
pub mod terminal;
