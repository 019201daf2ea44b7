pub mod alert_message;
pub mod dashboard;
pub mod donations;
pub mod forms;
pub mod login_form;
pub mod settings;
pub mod sidebar;
pub mod title;

pub use dashboard::Dashboard;
