// src/client/inquiry_form.rs

use async_trait::async_trait;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    client::auth::AuthState,
    models::inquiry::CreateInquiry,
    validation::{FieldErrors, ParseOptions, RawInput, Schema},
};

/// Sends a validated inquiry to the API.
#[async_trait]
pub trait InquirySubmitter: Send + Sync {
    async fn submit(&self, inquiry: CreateInquiry) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Submitted,
    Failed(String),
}

/// The inquiry form on a campsite page.
///
/// Inputs are kept as entered; blank inputs count as not filled in.
/// Submitting runs the inquiry schema and shows every field error at once.
#[derive(Debug, Clone)]
pub struct InquiryForm {
    values: Map<String, Value>,
    errors: FieldErrors,
    status: SubmitStatus,
    options: ParseOptions,
}

impl InquiryForm {
    /// Opens the form for a campsite, prefilled from the signed-in user.
    pub fn new(campsite_id: Uuid, auth: &AuthState) -> Self {
        let mut form = Self {
            values: Map::new(),
            errors: FieldErrors::new(),
            status: SubmitStatus::Idle,
            options: ParseOptions::default(),
        };
        form.values
            .insert("campsite_id".to_string(), Value::String(campsite_id.to_string()));

        if let Some(user) = auth.user.as_ref().filter(|_| auth.is_authenticated()) {
            if let Some(name) = &user.full_name {
                form.set("guest_name", name);
            }
            if let Some(email) = &user.email {
                form.set("guest_email", email);
            }
            if let Some(phone) = &user.phone {
                form.set("guest_phone", phone);
            }
        }
        form
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn set(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.values.remove(field);
        } else {
            self.values.insert(field.to_string(), Value::String(value.to_string()));
        }
    }

    /// Numeric inputs (guest count) go in as numbers.
    pub fn set_number(&mut self, field: &str, value: Option<i64>) {
        match value {
            Some(n) => self.values.insert(field.to_string(), Value::from(n)),
            None => self.values.remove(field),
        };
    }

    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).and_then(Value::as_str)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn errors_for(&self, field: &str) -> Vec<&str> {
        self.errors.messages_for(field)
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Validates and, if clean, submits. Returns whether the inquiry was sent.
    pub async fn submit<S>(&mut self, submitter: &S) -> bool
    where
        S: InquirySubmitter + ?Sized,
    {
        if self.status == SubmitStatus::Submitting {
            return false;
        }

        let input = RawInput::from_json(Value::Object(self.values.clone()));
        let inquiry = match input.and_then(|input| CreateInquiry::parse(input, &self.options)) {
            Ok(inquiry) => inquiry,
            Err(errors) => {
                tracing::debug!(%errors, "Inquiry form has errors");
                self.errors = errors;
                return false;
            }
        };

        self.errors = FieldErrors::new();
        self.status = SubmitStatus::Submitting;
        match submitter.submit(inquiry).await {
            Ok(()) => {
                self.status = SubmitStatus::Submitted;
                true
            }
            Err(message) => {
                tracing::error!(error = %message, "Failed to send inquiry");
                self.status = SubmitStatus::Failed(message);
                false
            }
        }
    }
}
