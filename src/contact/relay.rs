use serde::Serialize;

use super::{DeliveryError, EmailConfig, Mailer, TemplateParams};

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a TemplateParams,
}

/// EmailJS REST client.
pub struct EmailJs {
    client: reqwest::Client,
    config: EmailConfig,
}

impl EmailJs {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn request<'a>(&'a self, params: &'a TemplateParams) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: params,
        }
    }
}

impl Mailer for EmailJs {
    async fn send(&self, params: &TemplateParams) -> Result<(), DeliveryError> {
        tracing::debug!(
            service_id = %self.config.service_id,
            template_id = %self.config.template_id,
            "sending contact message"
        );
        let response = self
            .client
            .post(&self.config.api_url)
            .json(&self.request(params))
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{FormFields, DEFAULT_API_URL};

    fn config(private_key: Option<&str>) -> EmailConfig {
        EmailConfig {
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "public_test".to_string(),
            private_key: private_key.map(str::to_string),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    fn params() -> TemplateParams {
        let fields = FormFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello there".to_string(),
        };
        TemplateParams::new(&fields, "Owner")
    }

    #[test]
    fn test_request_body() {
        let relay = EmailJs::new(config(None));
        let params = params();
        let body = serde_json::to_value(relay.request(&params)).unwrap();
        assert_eq!(body["service_id"], "service_test");
        assert_eq!(body["template_id"], "template_test");
        assert_eq!(body["user_id"], "public_test");
        assert!(body.get("accessToken").is_none());
        assert_eq!(body["template_params"]["from_name"], "Ada");
        assert_eq!(body["template_params"]["reply_to"], "ada@example.com");
        assert_eq!(body["template_params"]["to_name"], "Owner");
    }

    #[test]
    fn test_request_body_with_access_token() {
        let relay = EmailJs::new(config(Some("secret")));
        let params = params();
        let body = serde_json::to_value(relay.request(&params)).unwrap();
        assert_eq!(body["accessToken"], "secret");
    }
}
