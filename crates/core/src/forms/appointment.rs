//! Appointment booking form.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::{FieldErrors, MAX_TEXT_LENGTH, check_email, check_name, check_phone, non_empty};
use crate::catalog::{Service, service_by_id};
use crate::{Email, Phone};

/// Bookable drop-off times.
pub const TIME_SLOTS: &[&str] = &[
    "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00",
];

/// Oldest vehicle model year we book in.
pub const MIN_VEHICLE_YEAR: i32 = 1950;

/// Raw appointment form fields as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppointmentForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// One of [`TIME_SLOTS`].
    pub time: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vehicle {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
}

/// An appointment form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRequest {
    pub name: String,
    pub email: Email,
    pub phone: Phone,
    pub service: &'static Service,
    pub vehicle: Vehicle,
    pub date: NaiveDate,
    pub time: &'static str,
    pub notes: Option<String>,
}

impl AppointmentForm {
    /// Validate the submitted fields against `today`.
    ///
    /// # Errors
    ///
    /// Returns every failing field with its message.
    pub fn validate(&self, today: NaiveDate) -> Result<AppointmentRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        check_name(&mut errors, name);
        let email = check_email(&mut errors, self.email.trim());
        let phone = check_phone(&mut errors, self.phone.trim(), true);
        let service = check_service(&mut errors, self.service.trim());
        let year = check_vehicle_year(&mut errors, self.vehicle_year.trim(), today);
        let date = check_date(&mut errors, self.date.trim(), today);
        let time = check_time(&mut errors, self.time.trim());

        let notes = non_empty(&self.notes);
        if notes
            .as_ref()
            .is_some_and(|n| n.chars().count() > MAX_TEXT_LENGTH)
        {
            errors.add(
                "notes",
                format!("Notes must be at most {MAX_TEXT_LENGTH} characters"),
            );
        }

        errors.into_result(|| {
            Some(AppointmentRequest {
                name: name.to_string(),
                email: email?,
                phone: phone?,
                service: service?,
                vehicle: Vehicle {
                    make: non_empty(&self.vehicle_make),
                    model: non_empty(&self.vehicle_model),
                    year,
                },
                date: date?,
                time: time?,
                notes,
            })
        })
    }
}

fn check_service(errors: &mut FieldErrors, id: &str) -> Option<&'static Service> {
    if id.is_empty() {
        errors.add("service", "Please choose a service");
        return None;
    }
    let service = service_by_id(id);
    if service.is_none() {
        errors.add("service", "Please choose a service from the list");
    }
    service
}

fn check_vehicle_year(errors: &mut FieldErrors, raw: &str, today: NaiveDate) -> Option<i32> {
    if raw.is_empty() {
        return None;
    }
    let max = today.year() + 1;
    let year = raw
        .parse::<i32>()
        .ok()
        .filter(|y| raw.len() == 4 && (MIN_VEHICLE_YEAR..=max).contains(y));
    if year.is_none() {
        errors.add(
            "vehicle_year",
            format!("Enter a 4-digit year between {MIN_VEHICLE_YEAR} and {max}"),
        );
    }
    year
}

fn check_date(errors: &mut FieldErrors, raw: &str, today: NaiveDate) -> Option<NaiveDate> {
    if raw.is_empty() {
        errors.add("date", "Please choose a date");
        return None;
    }
    let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
        errors.add("date", "Please enter a valid date");
        return None;
    };
    if date < today {
        errors.add("date", "Please choose a date from today onward");
        return None;
    }
    if date.weekday() == Weekday::Sun {
        errors.add("date", "We are closed on Sundays");
        return None;
    }
    Some(date)
}

fn check_time(errors: &mut FieldErrors, raw: &str) -> Option<&'static str> {
    if raw.is_empty() {
        errors.add("time", "Please choose a time");
        return None;
    }
    let slot = TIME_SLOTS.iter().copied().find(|slot| *slot == raw);
    if slot.is_none() {
        errors.add("time", "Please choose one of the available times");
    }
    slot
}
