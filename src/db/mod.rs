pub mod alerts;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod notifications;
pub mod pool;
pub mod queries;
pub mod seed;
