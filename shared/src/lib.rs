//! Domain types and view logic shared by the donation dashboard.
//!
//! Nothing in this crate touches the network or the DOM; the frontend feeds
//! it whatever the donation API returned and renders the results.
//!
//! ## Modules
//!
//! - **donation**: donation records, API payloads, amount coercion
//! - **pagination**: page state, derived pages and the page-number window
//! - **aggregate**: running count/amount series for the summary charts
//! - **validation**: rules for the two donation entry forms
//! - **session**: admin login/logout lifecycle

pub mod aggregate;
pub mod donation;
pub mod pagination;
pub mod session;
pub mod validation;

pub use aggregate::{derive_series, total_amount, SeriesMemo, SeriesPoint};
pub use donation::{
    format_currency, to_number, with_visibility, Donation, DonationInput, DonationListResponse,
    FormKind, Record, SubmitDonationResponse, VisibilityUpdate,
};
pub use pagination::{
    derive_page, total_pages, DerivedPage, PageLink, PageMeta, PageState, PageWindow,
    PaginatedCollection, Paginator, PaginatorEvent, DEFAULT_PAGE_SIZE, MAX_VISIBLE_PAGES,
    PAGE_SIZE_OPTIONS,
};
pub use session::{
    AdminCredentials, Authenticator, MemoryStore, Session, SessionError, SessionStore,
    SESSION_STORAGE_KEY,
};
pub use validation::{DonationDraft, FieldError, FormField, FormValidation};
