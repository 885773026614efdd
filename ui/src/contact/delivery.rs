//! Outbound email delivery.
//!
//! The contact form only depends on the [`Mailer`] capability; the production
//! implementation posts to the EmailJS REST API from the browser.

use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use serde::Serialize;
use thiserror::Error;

use crate::core::config::DeliveryConfig;

/// Template parameters understood by the email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailPayload {
    pub from_name: String,
    pub from_email: String,
    pub company: String,
    pub message: String,
    pub reply_to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("request could not be sent: {0}")]
    Transport(String),
    #[error("email service rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("email delivery is only available in the browser")]
    Unsupported,
}

/// Sends one message. Success means the service accepted it.
pub trait Mailer {
    fn send(&self, payload: EmailPayload) -> LocalBoxFuture<'static, Result<(), DeliveryError>>;
}

/// Shared, clonable mailer for the component context.
#[derive(Clone)]
pub struct MailerHandle(Rc<dyn Mailer>);

impl MailerHandle {
    pub fn new(mailer: impl Mailer + 'static) -> Self {
        Self(Rc::new(mailer))
    }

    pub fn emailjs(config: DeliveryConfig) -> Self {
        Self::new(EmailJsMailer::new(config))
    }

    pub fn send(&self, payload: EmailPayload) -> LocalBoxFuture<'static, Result<(), DeliveryError>> {
        self.0.send(payload)
    }

    #[cfg(test)]
    pub(crate) fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for MailerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Request body of `POST /api/v1.0/email/send`.
#[derive(Debug, Serialize)]
pub struct SendRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: EmailPayload,
}

#[derive(Debug, Clone)]
pub struct EmailJsMailer {
    config: DeliveryConfig,
}

impl EmailJsMailer {
    pub fn new(config: DeliveryConfig) -> Self {
        Self { config }
    }

    pub fn request_body(&self, payload: EmailPayload) -> SendRequest {
        SendRequest {
            service_id: self.config.service_id.clone(),
            template_id: self.config.template_id.clone(),
            user_id: self.config.public_key.clone(),
            template_params: payload,
        }
    }
}

impl Mailer for EmailJsMailer {
    fn send(&self, payload: EmailPayload) -> LocalBoxFuture<'static, Result<(), DeliveryError>> {
        let endpoint = self.config.endpoint.clone();
        let body = self.request_body(payload);
        post_json(endpoint, body).boxed_local()
    }
}

#[cfg(target_arch = "wasm32")]
async fn post_json(endpoint: String, body: SendRequest) -> Result<(), DeliveryError> {
    use gloo_net::http::Request;

    let request = Request::post(&endpoint)
        .json(&body)
        .map_err(|err| DeliveryError::Transport(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| DeliveryError::Transport(err.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected { status, body })
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn post_json(endpoint: String, _body: SendRequest) -> Result<(), DeliveryError> {
    tracing::warn!(%endpoint, "email delivery attempted outside the browser");
    Err(DeliveryError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> EmailPayload {
        EmailPayload {
            from_name: "Amal Saleh".into(),
            from_email: "amal@example.com".into(),
            company: "N/A".into(),
            message: "Hello".into(),
            reply_to: "amal@example.com".into(),
        }
    }

    #[test]
    fn request_body_matches_emailjs_shape() {
        let mailer = EmailJsMailer::new(DeliveryConfig::default());
        let body = serde_json::to_value(mailer.request_body(payload())).unwrap();

        assert_eq!(body["service_id"], "service_b45xjy4");
        assert_eq!(body["template_id"], "template_96gduzn");
        assert_eq!(body["user_id"], "dKFtNZkVLu4WTgbZ1");
        assert_eq!(body["template_params"]["from_name"], "Amal Saleh");
        assert_eq!(body["template_params"]["company"], "N/A");
        assert_eq!(body["template_params"]["reply_to"], "amal@example.com");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn host_builds_report_unsupported() {
        let mailer = EmailJsMailer::new(DeliveryConfig::default());
        let outcome = futures::executor::block_on(mailer.send(payload()));
        assert_eq!(outcome, Err(DeliveryError::Unsupported));
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = MailerHandle::emailjs(DeliveryConfig::default());
        let b = a.clone();
        let c = MailerHandle::emailjs(DeliveryConfig::default());
        assert!(a == b);
        assert!(a != c);
    }
}
