#[cfg(feature = "ssr")]
pub mod relay;

use std::{fmt, future::Future, sync::Mutex, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::portfolio::OWNER_NAME;

/// How long the success notice stays up before the form returns to idle.
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(5000);

pub const DEFAULT_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// The form control's `name`/`id`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Email Address",
            Self::Subject => "Subject",
            Self::Message => "Your Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Email => "john@example.com",
            Self::Subject => "What is this regarding?",
            Self::Message => "Tell me about your project, timeline, and budget...",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// First empty field, if any. Same rule as a `required` form control.
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.get(*f).is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Ties a scheduled success dismissal to the success that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessTicket(u64);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("required field `{0}` is empty")]
    Incomplete(Field),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("required field `{0}` is empty")]
    MissingField(Field),
    #[error("email delivery is not configured: {0}")]
    NotConfigured(#[from] ConfigError),
    #[error("could not reach the email relay: {0}")]
    Transport(String),
    #[error("email relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("message relay failed: {0}")]
    Relay(String),
}

/// Contact form state: the controlled fields plus the submission lifecycle.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: FormFields,
    status: SubmissionStatus,
    submitting: bool,
    successes: u64,
}

impl ContactForm {
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
    }

    /// Start an attempt. Hands back a snapshot of the fields to deliver.
    pub fn begin_submit(&mut self) -> Result<FormFields, SubmitRejected> {
        if self.submitting {
            return Err(SubmitRejected::InFlight);
        }
        if let Some(field) = self.fields.first_missing() {
            return Err(SubmitRejected::Incomplete(field));
        }
        self.submitting = true;
        self.status = SubmissionStatus::Idle;
        Ok(self.fields.clone())
    }

    /// Resolve the in-flight attempt. On success the fields are cleared and
    /// a ticket is returned for dismissing the notice after
    /// [`SUCCESS_DISPLAY`]; on failure the fields are kept for a retry.
    pub fn finish(&mut self, result: Result<(), DeliveryError>) -> Option<SuccessTicket> {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.fields = FormFields::default();
                self.status = SubmissionStatus::Success;
                self.successes += 1;
                Some(SuccessTicket(self.successes))
            }
            Err(_) => {
                self.status = SubmissionStatus::Error;
                None
            }
        }
    }

    pub fn dismiss_success(&mut self, ticket: SuccessTicket) {
        if self.status == SubmissionStatus::Success && ticket == SuccessTicket(self.successes) {
            self.status = SubmissionStatus::Idle;
        }
    }
}

/// Somewhere a [`ContactForm`] lives between events.
pub trait FormCell {
    /// Run `f` against the form. `None` once the form is gone.
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R>;
}

impl FormCell for Mutex<ContactForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.lock().ok().map(|mut form| f(&mut *form))
    }
}

/// One full submission: start the attempt, hand the fields to `send`, record
/// the outcome, and on success wait out [`SUCCESS_DISPLAY`] with `pause`
/// before dismissing the notice.
pub async fn submit<C, S, SF, P, PF>(form: &C, send: S, pause: P) -> Result<(), SubmitRejected>
where
    C: FormCell,
    S: FnOnce(FormFields) -> SF,
    SF: Future<Output = Result<(), DeliveryError>>,
    P: FnOnce(Duration) -> PF,
    PF: Future<Output = ()>,
{
    let Some(started) = form.with_form(ContactForm::begin_submit) else {
        return Ok(());
    };
    let result = send(started?).await;
    if let Some(Some(ticket)) = form.with_form(|f| f.finish(result)) {
        pause(SUCCESS_DISPLAY).await;
        form.with_form(|f| f.dismiss_success(ticket));
    }
    Ok(())
}

/// Template variables handed to the email relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
    pub reply_to: String,
}

impl TemplateParams {
    pub fn new(fields: &FormFields, to_name: &str) -> Self {
        Self {
            from_name: fields.name.clone(),
            from_email: fields.email.clone(),
            subject: fields.subject.clone(),
            message: fields.message.clone(),
            to_name: to_name.to_string(),
            reply_to: fields.email.clone(),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub api_url: String,
}

// keys stay out of logs
impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl EmailConfig {
    pub const SERVICE_ID: &'static str = "EMAILJS_SERVICE_ID";
    pub const TEMPLATE_ID: &'static str = "EMAILJS_TEMPLATE_ID";
    pub const PUBLIC_KEY: &'static str = "EMAILJS_PUBLIC_KEY";
    pub const PRIVATE_KEY: &'static str = "EMAILJS_PRIVATE_KEY";
    pub const API_URL: &'static str = "EMAILJS_API_URL";

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));
        Ok(Self {
            service_id: require(Self::SERVICE_ID)?,
            template_id: require(Self::TEMPLATE_ID)?,
            public_key: require(Self::PUBLIC_KEY)?,
            private_key: get(Self::PRIVATE_KEY),
            api_url: get(Self::API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}

/// The external email-delivery collaborator.
pub trait Mailer {
    fn send(&self, params: &TemplateParams) -> impl Future<Output = Result<(), DeliveryError>> + Send;
}

/// Validate the fields and hand them to `mailer`, addressed to the site owner.
pub async fn deliver<M: Mailer>(mailer: &M, fields: &FormFields) -> Result<(), DeliveryError> {
    if let Some(field) = fields.first_missing() {
        return Err(DeliveryError::MissingField(field));
    }
    let params = TemplateParams::new(fields, OWNER_NAME);
    mailer.send(&params).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashMap, sync::Arc};

    struct FakeMailer {
        reply: Result<(), DeliveryError>,
        sent: Mutex<Vec<TemplateParams>>,
    }

    impl FakeMailer {
        fn accepting() -> Self {
            Self {
                reply: Ok(()),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(DeliveryError::Transport("connection refused".to_string())),
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    impl Mailer for FakeMailer {
        async fn send(&self, params: &TemplateParams) -> Result<(), DeliveryError> {
            self.sent.lock().unwrap().push(params.clone());
            self.reply.clone()
        }
    }

    fn fill(form: &mut ContactForm) {
        form.set_field(Field::Name, "Ada".to_string());
        form.set_field(Field::Email, "ada@example.com".to_string());
        form.set_field(Field::Subject, "Hello".to_string());
        form.set_field(Field::Message, "Let's build something".to_string());
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        fill(&mut form);
        form
    }

    #[test]
    fn test_field_edits_apply_in_order() {
        let mut form = ContactForm::default();
        for partial in ["A", "Ad", "Ada"] {
            form.set_field(Field::Name, partial.to_string());
        }
        assert_eq!(form.field(Field::Name), "Ada");
        assert_eq!(form.field(Field::Email), "");
    }

    #[test]
    fn test_begin_submit_requires_all_fields() {
        let mut form = filled();
        form.set_field(Field::Subject, String::new());
        assert_eq!(
            form.begin_submit(),
            Err(SubmitRejected::Incomplete(Field::Subject))
        );
        assert!(!form.is_submitting());
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_no_resubmit_while_in_flight() {
        let mut form = filled();
        let fields = form.begin_submit().expect("complete form should submit");
        assert_eq!(fields.name, "Ada");
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let ticket = form.finish(Ok(()));
        assert!(ticket.is_some());
        assert!(!form.is_submitting());
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form.fields(), &FormFields::default());
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled();
        let before = form.fields().clone();
        form.begin_submit().unwrap();
        let ticket = form.finish(Err(DeliveryError::Rejected {
            status: 400,
            body: "The Public Key is invalid".to_string(),
        }));
        assert!(ticket.is_none());
        assert!(!form.is_submitting());
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.fields(), &before);
    }

    #[test]
    fn test_resubmit_after_error() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish(Err(DeliveryError::Transport("offline".to_string())));
        assert_eq!(form.status(), SubmissionStatus::Error);

        // error persists through edits, clears when the next attempt starts
        form.set_field(Field::Message, "Trying again".to_string());
        assert_eq!(form.status(), SubmissionStatus::Error);
        let fields = form.begin_submit().unwrap();
        assert_eq!(fields.message, "Trying again");
        assert_eq!(form.status(), SubmissionStatus::Idle);

        form.finish(Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[test]
    fn test_stale_ticket_does_not_dismiss_newer_success() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let first = form.finish(Ok(())).unwrap();

        fill(&mut form);
        form.begin_submit().unwrap();
        let second = form.finish(Ok(())).unwrap();
        assert_ne!(first, second);

        form.dismiss_success(first);
        assert_eq!(form.status(), SubmissionStatus::Success);
        form.dismiss_success(second);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_dismiss_ignored_after_error() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let ticket = form.finish(Ok(())).unwrap();

        fill(&mut form);
        form.begin_submit().unwrap();
        form.finish(Err(DeliveryError::Relay("500".to_string())));

        form.dismiss_success(ticket);
        assert_eq!(form.status(), SubmissionStatus::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_reverts_after_display_window() {
        let form = Arc::new(Mutex::new(filled()));
        let mailer = Arc::new(FakeMailer::accepting());

        let task = {
            let form = form.clone();
            let mailer = mailer.clone();
            tokio::spawn(async move {
                submit(
                    &*form,
                    |fields| async move { deliver(&*mailer, &fields).await },
                    tokio::time::sleep,
                )
                .await
            })
        };

        tokio::task::yield_now().await;
        {
            let form = form.lock().unwrap();
            assert_eq!(form.status(), SubmissionStatus::Success);
            assert!(!form.is_submitting());
            assert_eq!(form.fields(), &FormFields::default());
        }

        tokio::time::advance(SUCCESS_DISPLAY - Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(form.lock().unwrap().status(), SubmissionStatus::Success);
        assert!(!task.is_finished());

        tokio::time::advance(Duration::from_millis(1)).await;
        task.await.unwrap().unwrap();
        assert_eq!(form.lock().unwrap().status(), SubmissionStatus::Idle);
        assert_eq!(mailer.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_fields_without_waiting() {
        let form = Mutex::new(filled());
        let before = form.lock().unwrap().fields().clone();
        let mailer = FakeMailer::failing();
        let relay = &mailer;

        submit(
            &form,
            move |fields| async move { deliver(relay, &fields).await },
            |_| async { unreachable!("failed submissions have nothing to dismiss") },
        )
        .await
        .unwrap();

        let form = form.lock().unwrap();
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.fields(), &before);
        assert!(!form.is_submitting());
        assert_eq!(mailer.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_rejects_incomplete_form() {
        let form = Mutex::new(ContactForm::default());
        form.lock().unwrap().set_field(Field::Name, "Ada".to_string());

        let mailer = FakeMailer::accepting();
        let relay = &mailer;

        let rejected = submit(
            &form,
            move |fields| async move { deliver(relay, &fields).await },
            |_| async {},
        )
        .await;

        assert_eq!(rejected, Err(SubmitRejected::Incomplete(Field::Email)));
        assert_eq!(form.lock().unwrap().status(), SubmissionStatus::Idle);
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_deliver_builds_template_params() {
        let mailer = FakeMailer::accepting();
        let fields = filled().fields().clone();
        deliver(&mailer, &fields).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let params = &sent[0];
        assert_eq!(params.from_name, "Ada");
        assert_eq!(params.from_email, "ada@example.com");
        assert_eq!(params.reply_to, "ada@example.com");
        assert_eq!(params.subject, "Hello");
        assert_eq!(params.message, "Let's build something");
        assert_eq!(params.to_name, OWNER_NAME);

        let json = serde_json::to_value(params).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            ["from_email", "from_name", "message", "reply_to", "subject", "to_name"]
        );
    }

    #[tokio::test]
    async fn test_deliver_failure_and_validation() {
        let mailer = FakeMailer::failing();
        let fields = filled().fields().clone();
        assert!(matches!(
            deliver(&mailer, &fields).await,
            Err(DeliveryError::Transport(_))
        ));

        let mut incomplete = fields.clone();
        incomplete.email.clear();
        assert_eq!(
            deliver(&mailer, &incomplete).await,
            Err(DeliveryError::MissingField(Field::Email))
        );
        // validation failures never reach the relay
        assert_eq!(mailer.sent.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_email_config_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (EmailConfig::SERVICE_ID, "service_x"),
            (EmailConfig::TEMPLATE_ID, "template_y"),
            (EmailConfig::PUBLIC_KEY, "pk"),
        ]
        .into_iter()
        .collect();
        let config = EmailConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.service_id, "service_x");
        assert_eq!(config.template_id, "template_y");
        assert_eq!(config.public_key, "pk");
        assert_eq!(config.private_key, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(!format!("{config:?}").contains("pk"));
    }

    #[test]
    fn test_email_config_requires_credentials() {
        let none = EmailConfig::from_lookup(|_| None);
        assert_eq!(none, Err(ConfigError::Missing(EmailConfig::SERVICE_ID)));

        let blank_key = EmailConfig::from_lookup(|k| {
            if k == EmailConfig::PUBLIC_KEY {
                Some("  ".to_string())
            } else {
                Some("set".to_string())
            }
        });
        assert_eq!(blank_key, Err(ConfigError::Missing(EmailConfig::PUBLIC_KEY)));

        let err = DeliveryError::from(ConfigError::Missing(EmailConfig::TEMPLATE_ID));
        assert_eq!(
            err.to_string(),
            "email delivery is not configured: environment variable EMAILJS_TEMPLATE_ID is not set"
        );
    }
}
