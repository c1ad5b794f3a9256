pub mod target;
pub mod timeline;
