pub mod alerts;
pub mod analytics;
pub mod clock;
pub mod config;
pub mod driver;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod notifications;
pub mod watch;
