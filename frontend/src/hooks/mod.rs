pub mod use_alert;
pub mod use_donations;
pub mod use_paginator;
pub mod use_session;

pub use use_alert::{use_alert, AlertHandle, AlertKind, AlertProvider};
pub use use_donations::use_donations;
pub use use_paginator::use_paginator;
pub use use_session::{use_session, SessionHandle, SessionProvider};
