pub mod cli;
pub mod config;
pub mod csv;
pub mod extract;
pub mod record;
pub mod util;
pub mod xlsx;
