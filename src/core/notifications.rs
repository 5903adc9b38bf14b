use crate::core::store::DriverStore;
use crate::db::notifications;
use crate::errors::{AppError, AppResult};
use crate::models::notification::Notification;

pub struct NotificationLogic;

impl NotificationLogic {
    pub fn list(store: &DriverStore) -> AppResult<Vec<Notification>> {
        Ok(notifications::load_notifications(store.conn())?)
    }

    pub fn unread_count(store: &DriverStore) -> AppResult<usize> {
        Ok(notifications::unread_count(store.conn())?)
    }

    pub fn mark_read(store: &mut DriverStore, id: &str) -> AppResult<()> {
        if notifications::mark_read(store.conn(), id)? == 0 {
            return Err(AppError::UnknownNotification(id.to_string()));
        }
        Ok(())
    }

    /// Returns how many notifications flipped to read.
    pub fn mark_all_read(store: &mut DriverStore) -> AppResult<usize> {
        Ok(notifications::mark_all_read(store.conn())?)
    }
}
