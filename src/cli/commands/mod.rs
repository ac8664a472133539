pub mod check;
pub mod config;
pub mod init;
pub mod simulate;
pub mod today;
