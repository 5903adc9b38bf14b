pub mod alert;
pub mod driver;
pub mod driving_status;
pub mod notification;
pub mod risk_type;
pub mod status;
