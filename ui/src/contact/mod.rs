//! Contact form: field model, delivery capability and submission state machine.

mod delivery;
mod form;
mod machine;

pub use delivery::{DeliveryError, EmailJsMailer, EmailPayload, Mailer, MailerHandle};
pub use form::{is_plausible_email, ContactForm, Field, ValidationError, COMPANY_PLACEHOLDER};
pub use machine::{Attempt, ClearTicket, ContactController, SubmissionStatus, SubmitRejected};
