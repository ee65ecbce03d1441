//! # tessera-leads
//!
//! Lead capture for the CTA section: the form state machine and the HTTP
//! transport that posts one JSON lead per explicit submit. [`render_cta`]
//! draws the registered CTA section with the form's values and status.
//!
//! # Usage
//!
//! ```no_run
//! use tessera_config::TesseraConfig;
//! use tessera_leads::{LeadClient, LeadForm};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TesseraConfig::load()?;
//! let client = LeadClient::from_config(&config.leads)?;
//!
//! let mut form = LeadForm::new();
//! form.name = "Ada".into();
//! form.email = "ada@example.com".into();
//! form.age = "29".into();
//! form.consent = true;
//! println!("{:?}", form.submit(&client).await);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod form;
mod http;
mod submission;
mod view;

pub use client::{LeadClient, LeadTransport};
pub use error::LeadError;
pub use form::{FormField, FormStatus, LeadForm, PROCESSING_LABEL, SUCCESS_MESSAGE};
pub use http::check_response;
pub use submission::LeadSubmission;
pub use view::render_cta;
