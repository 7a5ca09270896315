//! Contact-form inquiries and the message template sent to the sales inbox.

use serde::{Deserialize, Serialize};

/// Fields submitted by the contact form. All optional; blank counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInquiry {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub models: Option<String>,
    pub spend: Option<String>,
}

/// Variables substituted into the inquiry e-mail template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub title: String,
    pub name: String,
    /// Used as the Reply-To address by the template.
    pub email: String,
    pub message: String,
}

impl ContactInquiry {
    /// Build the fixed-shape template variables for this inquiry.
    pub fn template_params(&self) -> TemplateParams {
        let email = present(&self.email).unwrap_or_default();
        let company = present(&self.company);

        let message = format!(
            "User Email: {email}\nCompany: {}\nModels: {}\nSpend: {}",
            company.unwrap_or("N/A"),
            present(&self.models).unwrap_or("Not specified"),
            present(&self.spend).unwrap_or("Not specified"),
        );

        TemplateParams {
            title: format!("New Inquiry from {}", company.unwrap_or("Website")),
            name: present(&self.name).unwrap_or_default().to_string(),
            email: email.to_string(),
            message,
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
