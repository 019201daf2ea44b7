pub mod donation_form;

pub use donation_form::DonationForm;
