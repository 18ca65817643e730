pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod list;
pub mod log;
pub mod screen;
pub mod show;

pub use screen::StudentScreen;
