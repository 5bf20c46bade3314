pub mod config_io;
pub mod day_io;
pub mod watcher;
