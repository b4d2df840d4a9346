//! Contact form route handlers.
//!
//! Submissions are validated and logged. Nothing is stored or sent.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::rejection::FormRejection,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gearbox_core::catalog::{self, OpeningHours};
use gearbox_core::forms::{ContactForm, FieldErrors};
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::layout::PageContext;
use crate::middleware::CspNonce;
use crate::state::AppState;
use crate::views::SelectOption;

/// Shown after a valid submission.
pub const CONTACT_SUCCESS: &str =
    "Thank you for your message! We'll get back to you within one business day.";

/// Subjects offered in the dropdown. Free text is accepted too.
pub const SUBJECTS: &[&str] = &[
    "General question",
    "Quote request",
    "Warranty claim",
    "Feedback",
];

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub page: PageContext,
    /// Values to refill the form with.
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub success: Option<&'static str>,
    pub subjects: Vec<SelectOption>,
    pub hours: &'static [OpeningHours],
}

impl ContactTemplate {
    fn new(state: &AppState, nonce: &CspNonce, form: ContactForm) -> Self {
        Self {
            page: PageContext::new(state, nonce, "/contact").seo(|seo| {
                seo.title("Contact Us").description(
                    "Call, email or visit Gearbox Auto Repair in Springfield, OR. Send us a question and we'll reply within one business day.",
                )
            }),
            subjects: SelectOption::from_values(SUBJECTS, form.subject.trim()),
            form,
            errors: FieldErrors::new(),
            success: None,
            hours: catalog::site_profile().hours,
        }
    }
}

/// Display the contact form.
#[instrument(skip(state, nonce))]
pub async fn show(State(state): State<AppState>, nonce: CspNonce) -> impl IntoResponse {
    ContactTemplate::new(&state, &nonce, ContactForm::default())
}

/// Validate a contact form submission.
///
/// A body that isn't a urlencoded form is a 400. Invalid input re-renders
/// the form with inline errors (422). Valid input renders an empty form
/// with the success message.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    nonce: CspNonce,
    form: std::result::Result<Form<ContactForm>, FormRejection>,
) -> Result<Response> {
    let Form(form) = form.map_err(|e| AppError::BadRequest(e.body_text()))?;
    match form.validate() {
        Ok(request) => {
            tracing::info!(
                subject = request.subject.as_deref().unwrap_or("-"),
                has_phone = request.phone.is_some(),
                "Contact request received"
            );
            add_breadcrumb("form", "Contact request submitted", None);

            let mut template = ContactTemplate::new(&state, &nonce, ContactForm::default());
            template.page.seo = template.page.seo.noindex();
            template.success = Some(CONTACT_SUCCESS);
            Ok((StatusCode::OK, template).into_response())
        }
        Err(errors) => {
            tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Contact form rejected");

            let mut template = ContactTemplate::new(&state, &nonce, form);
            template.page.seo = template.page.seo.noindex();
            template.errors = errors;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response())
        }
    }
}
