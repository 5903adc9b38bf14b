pub mod alerts;
pub mod analytics;
pub mod clock;
pub mod log;
pub mod notifications;
pub mod refresh;
pub mod search;
pub mod store;
pub mod tracker;
pub mod watch;
