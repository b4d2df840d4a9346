//! Appointment booking route handlers.
//!
//! Like the contact form, a valid booking is only logged and acknowledged.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::rejection::FormRejection,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use gearbox_core::catalog;
use gearbox_core::forms::{AppointmentForm, AppointmentRequest, FieldErrors, TIME_SLOTS};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::layout::PageContext;
use crate::middleware::CspNonce;
use crate::state::AppState;
use crate::views::SelectOption;

/// Booking page query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct AppointmentQuery {
    /// Service id to preselect.
    pub service: Option<String>,
}

/// Services of one category, rendered as an `<optgroup>`.
#[derive(Debug, Clone)]
pub struct ServiceGroup {
    pub label: &'static str,
    pub options: Vec<SelectOption>,
}

/// What the visitor booked, echoed back in the confirmation.
#[derive(Debug, Clone)]
pub struct BookingSummary {
    pub service: &'static str,
    /// e.g. "Tuesday, March 4, 2025".
    pub date: String,
    pub time: &'static str,
    pub phone: String,
}

impl From<&AppointmentRequest> for BookingSummary {
    fn from(request: &AppointmentRequest) -> Self {
        Self {
            service: request.service.title,
            date: request.date.format("%A, %B %-d, %Y").to_string(),
            time: request.time,
            phone: request.phone.as_str().to_string(),
        }
    }
}

/// Appointment page template.
#[derive(Template, WebTemplate)]
#[template(path = "appointment.html")]
pub struct AppointmentTemplate {
    pub page: PageContext,
    pub form: AppointmentForm,
    pub errors: FieldErrors,
    pub booked: Option<BookingSummary>,
    pub service_groups: Vec<ServiceGroup>,
    pub time_slots: Vec<SelectOption>,
    /// `min` for the date input.
    pub today: String,
}

impl AppointmentTemplate {
    fn new(state: &AppState, nonce: &CspNonce, form: AppointmentForm, today: NaiveDate) -> Self {
        Self {
            page: PageContext::new(state, nonce, "/appointment").seo(|seo| {
                seo.title("Book an Appointment").description(
                    "Book a repair or maintenance appointment at Gearbox Auto Repair. Pick a service, a day and a time that suits you.",
                )
            }),
            service_groups: service_groups(&form.service),
            time_slots: time_slots(&form.time),
            form,
            errors: FieldErrors::new(),
            booked: None,
            today: today.format("%Y-%m-%d").to_string(),
        }
    }
}

fn service_groups(selected: &str) -> Vec<ServiceGroup> {
    catalog::categories_in_use()
        .into_iter()
        .map(|category| ServiceGroup {
            label: category.label(),
            options: catalog::services()
                .iter()
                .filter(|s| s.category == category)
                .map(|s| SelectOption {
                    value: s.id,
                    label: s.title,
                    selected: s.id == selected,
                })
                .collect(),
        })
        .collect()
}

fn time_slots(selected: &str) -> Vec<SelectOption> {
    SelectOption::from_values(TIME_SLOTS, selected)
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Display the booking form, preselecting `?service=<id>` when it names a
/// known service.
#[instrument(skip(state, nonce))]
pub async fn show(
    State(state): State<AppState>,
    nonce: CspNonce,
    Query(query): Query<AppointmentQuery>,
) -> impl IntoResponse {
    let form = AppointmentForm {
        service: query
            .service
            .as_deref()
            .and_then(catalog::service_by_id)
            .map(|s| s.id.to_string())
            .unwrap_or_default(),
        ..AppointmentForm::default()
    };

    AppointmentTemplate::new(&state, &nonce, form, today())
}

/// Validate a booking submission.
///
/// A body that isn't a urlencoded form is a 400. Invalid input re-renders
/// the form with inline errors (422). Valid input renders a confirmation.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    nonce: CspNonce,
    form: std::result::Result<Form<AppointmentForm>, FormRejection>,
) -> Result<Response> {
    let Form(form) = form.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let today = today();

    match form.validate(today) {
        Ok(request) => {
            tracing::info!(
                service = request.service.id,
                date = %request.date,
                time = request.time,
                "Appointment request received"
            );
            add_breadcrumb(
                "form",
                "Appointment requested",
                Some(&[("service", request.service.id)]),
            );

            let mut template =
                AppointmentTemplate::new(&state, &nonce, AppointmentForm::default(), today);
            template.page.seo = template.page.seo.noindex();
            template.booked = Some(BookingSummary::from(&request));
            Ok((StatusCode::OK, template).into_response())
        }
        Err(errors) => {
            tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Appointment form rejected");

            let mut template = AppointmentTemplate::new(&state, &nonce, form, today);
            template.page.seo = template.page.seo.noindex();
            template.errors = errors;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_groups_mark_selection() {
        let groups = service_groups("oil-change");
        let selected: Vec<_> = groups
            .iter()
            .flat_map(|g| g.options.iter())
            .filter(|o| o.selected)
            .map(|o| o.value)
            .collect();
        assert_eq!(selected, vec!["oil-change"]);

        let total: usize = groups.iter().map(|g| g.options.len()).sum();
        assert_eq!(total, catalog::services().len());
    }

    #[test]
    fn test_time_slots_mark_selection() {
        let slots = time_slots("10:00");
        assert_eq!(slots.len(), TIME_SLOTS.len());
        assert_eq!(slots.iter().filter(|s| s.selected).count(), 1);
        assert!(time_slots("").iter().all(|s| !s.selected));
    }

    #[test]
    fn test_booking_summary_date_format() {
        let request = AppointmentForm {
            name: "Sam Driver".to_string(),
            email: "sam@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            service: "oil-change".to_string(),
            date: "2030-03-05".to_string(),
            time: "09:00".to_string(),
            ..AppointmentForm::default()
        }
        .validate(NaiveDate::from_ymd_opt(2030, 3, 1).unwrap_or_default());
        let summary = request.as_ref().map(BookingSummary::from).ok();
        assert_eq!(
            summary.map(|s| s.date),
            Some("Tuesday, March 5, 2030".to_string())
        );
    }
}
