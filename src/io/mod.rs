pub mod config_io;
pub mod list_io;
pub mod logging;
