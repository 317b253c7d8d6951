pub mod notification_repo;
pub mod settings_repo;

pub use notification_repo::NotificationRepo;
pub use settings_repo::SettingsRepo;
