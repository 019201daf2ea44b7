pub mod donation_list;
pub mod donation_table;
pub mod edit_modal;
pub mod pagination;
pub mod summary_chart;

pub use donation_list::DonationList;
