//! Typed form records with declarative validation.
//!
//! DESIGN
//! ======
//! Each form is a plain struct plus a static schema of per-field rules.
//! Validation walks the schema once and reports every failing field, so the
//! page can show all problems at once instead of failing on the first.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use serde::Serialize;

use crate::net::types::{Credentials, RegisterRequest, UserProfile};

/// A single constraint attached to a form field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldRule {
    Required,
    Email,
    MinLen(usize),
    NumberAtLeast(f64),
    OneOf(&'static [&'static str]),
}

#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub rules: &'static [FieldRule],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// A form whose fields can be validated against a static schema.
pub trait Form {
    const SCHEMA: &'static [FieldSpec];

    /// Raw input value for a schema field name.
    fn field(&self, name: &str) -> &str;

    /// Cross-field checks the schema cannot express.
    fn extra_errors(&self) -> Vec<FieldError> {
        Vec::new()
    }

    /// Run every rule for every field.
    ///
    /// # Errors
    ///
    /// Returns all failing fields, in schema order.
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        for spec in Self::SCHEMA {
            let value = self.field(spec.name).trim();
            if let Some(message) = first_failure(spec, value) {
                errors.push(FieldError { field: spec.name, message });
            }
        }
        errors.extend(self.extra_errors());
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// First failing message, for a single inline banner.
    fn first_error(&self) -> Option<String> {
        self.validate().err().and_then(|errors| errors.into_iter().next()).map(|e| e.message)
    }
}

fn first_failure(spec: &FieldSpec, value: &str) -> Option<String> {
    let required = spec.rules.contains(&FieldRule::Required);
    if value.is_empty() {
        return required.then(|| format!("{} is required", spec.label));
    }
    spec.rules.iter().find_map(|rule| check_rule(*rule, spec.label, value))
}

fn check_rule(rule: FieldRule, label: &str, value: &str) -> Option<String> {
    match rule {
        FieldRule::Required => None,
        FieldRule::Email => (!is_email(value)).then(|| format!("{label} must be a valid email address")),
        FieldRule::MinLen(min) => {
            (value.chars().count() < min).then(|| format!("{label} must be at least {min} characters"))
        }
        FieldRule::NumberAtLeast(min) => match value.parse::<f64>() {
            Ok(n) if n.is_finite() && n >= min => None,
            _ => Some(format!("{label} must be a number of at least {min}")),
        },
        FieldRule::OneOf(options) => (!options.contains(&value)).then(|| format!("Select a valid {}", label.to_lowercase())),
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

// =============================================================
// Auth forms
// =============================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl Form for LoginForm {
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec { name: "email", label: "Email", rules: &[FieldRule::Required, FieldRule::Email] },
        FieldSpec { name: "password", label: "Password", rules: &[FieldRule::Required] },
    ];

    fn field(&self, name: &str) -> &str {
        match name {
            "email" => &self.email,
            "password" => &self.password,
            _ => "",
        }
    }
}

impl LoginForm {
    pub fn credentials(&self) -> Credentials {
        Credentials { email: self.email.trim().to_owned(), password: self.password.clone() }
    }
}

/// Self-service roles offered at sign-up. Administrators are provisioned server-side.
pub const REGISTER_ROLES: &[&str] = &["tenant", "landlord"];

#[derive(Clone, Debug, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: "tenant".to_owned(),
        }
    }
}

impl Form for RegisterForm {
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec { name: "name", label: "Full name", rules: &[FieldRule::Required] },
        FieldSpec { name: "email", label: "Email", rules: &[FieldRule::Required, FieldRule::Email] },
        FieldSpec { name: "password", label: "Password", rules: &[FieldRule::Required, FieldRule::MinLen(8)] },
        FieldSpec { name: "role", label: "Account type", rules: &[FieldRule::Required, FieldRule::OneOf(REGISTER_ROLES)] },
    ];

    fn field(&self, name: &str) -> &str {
        match name {
            "name" => &self.name,
            "email" => &self.email,
            "password" => &self.password,
            "role" => &self.role,
            _ => "",
        }
    }

    fn extra_errors(&self) -> Vec<FieldError> {
        if self.password == self.confirm_password {
            Vec::new()
        } else {
            vec![FieldError { field: "confirm_password", message: "Passwords do not match".to_owned() }]
        }
    }
}

impl RegisterForm {
    pub fn request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            role: self.role.clone(),
        }
    }
}

// =============================================================
// Housing application
// =============================================================

pub const EMPLOYMENT_STATUSES: &[&str] = &["Employed", "Self-employed", "Unemployed", "Retired"];
pub const HOUSING_PROGRAMS: &[&str] = &["RDP Housing", "Social Housing", "FLISP", "Rental Housing"];

/// Housing application posted to `/api/applications/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub id_number: String,
    pub address: String,
    pub employment_status: String,
    pub monthly_income: String,
    pub housing_program: String,
}

impl Form for ApplicationForm {
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec { name: "full_name", label: "Full name", rules: &[FieldRule::Required] },
        FieldSpec { name: "email", label: "Email", rules: &[FieldRule::Required, FieldRule::Email] },
        FieldSpec { name: "phone", label: "Phone number", rules: &[FieldRule::Required] },
        FieldSpec { name: "id_number", label: "ID number", rules: &[FieldRule::Required] },
        FieldSpec { name: "address", label: "Address", rules: &[FieldRule::Required] },
        FieldSpec {
            name: "employment_status",
            label: "Employment status",
            rules: &[FieldRule::Required, FieldRule::OneOf(EMPLOYMENT_STATUSES)],
        },
        FieldSpec {
            name: "monthly_income",
            label: "Monthly income",
            rules: &[FieldRule::Required, FieldRule::NumberAtLeast(0.0)],
        },
        FieldSpec {
            name: "housing_program",
            label: "Housing program",
            rules: &[FieldRule::Required, FieldRule::OneOf(HOUSING_PROGRAMS)],
        },
    ];

    fn field(&self, name: &str) -> &str {
        match name {
            "full_name" => &self.full_name,
            "email" => &self.email,
            "phone" => &self.phone,
            "id_number" => &self.id_number,
            "address" => &self.address,
            "employment_status" => &self.employment_status,
            "monthly_income" => &self.monthly_income,
            "housing_program" => &self.housing_program,
            _ => "",
        }
    }
}

impl ApplicationForm {
    /// Write one schema field by name. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        let slot = match name {
            "full_name" => &mut self.full_name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "id_number" => &mut self.id_number,
            "address" => &mut self.address,
            "employment_status" => &mut self.employment_status,
            "monthly_income" => &mut self.monthly_income,
            "housing_program" => &mut self.housing_program,
            _ => return,
        };
        *slot = value;
    }
}

// =============================================================
// Forum
// =============================================================

pub const TOPIC_CATEGORIES: &[&str] = &["general", "legal", "maintenance", "rights"];

#[derive(Clone, Debug, PartialEq)]
pub struct TopicForm {
    pub title: String,
    pub content: String,
    pub category: String,
    /// Comma-separated tags exactly as typed.
    pub tags: String,
}

impl Default for TopicForm {
    fn default() -> Self {
        Self { title: String::new(), content: String::new(), category: "general".to_owned(), tags: String::new() }
    }
}

impl Form for TopicForm {
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec { name: "title", label: "Title", rules: &[FieldRule::Required, FieldRule::MinLen(5)] },
        FieldSpec { name: "content", label: "Content", rules: &[FieldRule::Required] },
        FieldSpec { name: "category", label: "Category", rules: &[FieldRule::Required, FieldRule::OneOf(TOPIC_CATEGORIES)] },
    ];

    fn field(&self, name: &str) -> &str {
        match name {
            "title" => &self.title,
            "content" => &self.content,
            "category" => &self.category,
            _ => "",
        }
    }
}

/// Body posted to `/api/forum/topics`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTopicRequest {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(rename = "authorId")]
    pub author_id: String,
}

impl TopicForm {
    /// Split the tag input on commas, trimming and dropping blanks.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .collect()
    }

    pub fn request(&self, author_id: &str) -> NewTopicRequest {
        NewTopicRequest {
            title: self.title.trim().to_owned(),
            content: self.content.trim().to_owned(),
            category: self.category.clone(),
            tags: self.tag_list(),
            author_id: author_id.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommentForm {
    pub content: String,
}

impl Form for CommentForm {
    const SCHEMA: &'static [FieldSpec] =
        &[FieldSpec { name: "content", label: "Comment", rules: &[FieldRule::Required] }];

    fn field(&self, name: &str) -> &str {
        if name == "content" { &self.content } else { "" }
    }
}

/// Body posted to `/api/forum/topics/{id}/comments`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewCommentRequest {
    pub content: String,
    #[serde(rename = "authorId")]
    pub author_id: String,
}

impl CommentForm {
    pub fn request(&self, author_id: &str) -> NewCommentRequest {
        NewCommentRequest { content: self.content.trim().to_owned(), author_id: author_id.to_owned() }
    }
}

// =============================================================
// Profile
// =============================================================

impl Form for UserProfile {
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec { name: "name", label: "Name", rules: &[FieldRule::Required] },
        FieldSpec { name: "email", label: "Email", rules: &[FieldRule::Required, FieldRule::Email] },
    ];

    fn field(&self, name: &str) -> &str {
        match name {
            "name" => &self.name,
            "email" => &self.email,
            _ => "",
        }
    }
}
