//! Contact wizard.
//!
//! Three steps: pick a service category, fill in contact details, see a
//! thank-you message. Nothing is stored; the selected category travels with
//! the form and a completed submission is forwarded to the external forms
//! endpoint.
//!
//! # Architecture
//!
//! - [`InquiryType`]: the fixed set of service categories
//! - [`ContactFlow`]: the step state machine
//! - [`ContactSubmission`]: submitted fields, validation, form encoding
//! - [`FormSink`]: where valid submissions are forwarded
//!
//! # Example
//!
//! ```rust
//! use noerr_site::contact::{ContactFlow, ContactStep, InquiryType};
//!
//! let mut flow = ContactFlow::new();
//! flow.select(InquiryType::B2b);
//! assert_eq!(flow.step(), ContactStep::ContactDetails);
//! assert_eq!(flow.selected(), Some(InquiryType::B2b));
//!
//! flow.reset();
//! assert_eq!(flow.selected(), None);
//! ```

mod delivery;
mod flow;
mod inquiry;
mod submission;

pub use delivery::{FormSink, HttpFormSink, LogOnlySink, deliver};
pub use flow::{ContactFlow, ContactStep};
pub use inquiry::InquiryType;
pub use submission::{ContactSubmission, FORM_NAME};

/// Why a submission could not be accepted or forwarded.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// One or more required fields are missing or malformed.
    #[error("invalid submission: {}", .0.join(", "))]
    Invalid(Vec<String>),
    /// The inquiry category is not one of the known identifiers.
    #[error("unknown inquiry type `{0}`")]
    UnknownInquiry(String),
    /// The forms endpoint could not be reached.
    #[error("forms endpoint unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    /// The forms endpoint answered with a non-success status.
    #[error("forms endpoint returned {0}")]
    Rejected(reqwest::StatusCode),
}
