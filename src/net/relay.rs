use std::sync::Arc;

use serde::Serialize;
use url::Url;

use crate::config::RelayConfig;
use crate::contact::ContactForm;

/// Template parameters forwarded to the relay. The email goes out trimmed;
/// the other fields are sent as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<&ContactForm> for TemplateParams {
    fn from(form: &ContactForm) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.trim().to_string(),
            subject: form.subject.clone(),
            message: form.message.clone(),
        }
    }
}

/// Body of an EmailJS `email/send` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    /// Public key
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl RelayRequest {
    pub fn new(config: &RelayConfig, form: &ContactForm) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams::from(form),
        }
    }
}

/// Error during a relay call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayError {
    pub message: String,
    pub phase: &'static str,
}

impl RelayError {
    pub fn new(phase: &'static str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            phase,
        }
    }
}

impl std::fmt::Display for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.phase, self.message)
    }
}

impl std::error::Error for RelayError {}

/// Something that can dispatch a templated email.
///
/// Calls block; the contact workflow runs them off the UI thread.
pub trait EmailRelay: Send + Sync {
    fn send(&self, request: &RelayRequest) -> Result<(), RelayError>;
}

/// EmailJS REST client (blocking).
pub struct EmailJsRelay {
    client: reqwest::blocking::Client,
    endpoint: Url,
}

impl EmailJsRelay {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| RelayError::new("client", format!("Invalid endpoint: {}", e)))?;

        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("matrix-portfolio/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| RelayError::new("client", format!("Client error: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl EmailRelay for EmailJsRelay {
    fn send(&self, request: &RelayRequest) -> Result<(), RelayError> {
        let response = self
            .client
            .post(self.endpoint.as_str())
            .json(request)
            .send()
            .map_err(|e| RelayError::new("request", format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // EmailJS explains rejections in a plain-text body
        let body = response.text().unwrap_or_default();
        Err(RelayError::new(
            "response",
            format!("HTTP {}: {}", status.as_u16(), body.trim()),
        ))
    }
}

/// Stand-in used when the real client could not be built: every send fails
/// with the construction error.
pub struct UnavailableRelay {
    pub reason: RelayError,
}

impl EmailRelay for UnavailableRelay {
    fn send(&self, _request: &RelayRequest) -> Result<(), RelayError> {
        Err(self.reason.clone())
    }
}

/// Build the EmailJS client, falling back to [`UnavailableRelay`].
pub fn relay_from_config(config: &RelayConfig) -> Arc<dyn EmailRelay> {
    match EmailJsRelay::new(config) {
        Ok(relay) => Arc::new(relay),
        Err(reason) => {
            log::error!("email relay unavailable: {}", reason);
            Arc::new(UnavailableRelay { reason })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_relay_reports_reason() {
        let config = RelayConfig {
            endpoint: "::".into(),
            ..RelayConfig::default()
        };
        let relay = relay_from_config(&config);
        let req = RelayRequest::new(&config, &filled());
        let err = relay.send(&req).unwrap_err();
        assert_eq!(err.phase, "client");
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: "A".into(),
            email: "a@b.com".into(),
            subject: "S".into(),
            message: "M".into(),
        }
    }

    #[test]
    fn request_json_shape() {
        let req = RelayRequest::new(&RelayConfig::default(), &filled());
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["service_id"], "service_tktl2ob");
        assert_eq!(json["template_id"], "template_7o85vd9");
        assert_eq!(json["user_id"], "BfOarPzL3ITYZaqmO");
        assert_eq!(
            json["template_params"],
            serde_json::json!({
                "name": "A",
                "email": "a@b.com",
                "subject": "S",
                "message": "M",
            })
        );
    }

    #[test]
    fn email_is_trimmed_in_payload() {
        let mut form = filled();
        form.email = " a@b.com ".into();
        form.message = "  hi  ".into();
        let params = TemplateParams::from(&form);
        assert_eq!(params.email, "a@b.com");
        assert_eq!(params.message, "  hi  ");
    }

    #[test]
    fn error_display_includes_phase() {
        let err = RelayError::new("response", "HTTP 400: The Public Key is invalid");
        assert_eq!(err.to_string(), "[response] HTTP 400: The Public Key is invalid");
    }

    #[test]
    fn invalid_endpoint_rejected() {
        let config = RelayConfig {
            endpoint: "not a url".into(),
            ..RelayConfig::default()
        };
        let err = EmailJsRelay::new(&config).err().expect("should fail");
        assert_eq!(err.phase, "client");
    }

    #[test]
    fn default_endpoint_parses() {
        let relay = EmailJsRelay::new(&RelayConfig::default()).unwrap();
        assert_eq!(relay.endpoint().host_str(), Some("api.emailjs.com"));
    }
}
