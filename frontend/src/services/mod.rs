pub mod api;
pub mod logging;
pub mod session_store;

pub use api::{ApiClient, ApiError};
pub use logging::Logger;
pub use session_store::BrowserSessionStore;
