//! Form validation and field-error merging.
//!
//! Every rule is evaluated independently so the form can highlight all
//! invalid fields at once; nothing short-circuits. Field keys use the
//! wire names (camelCase) so locally produced errors line up with the
//! field-scoped errors the server reports.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::event::EventForm;

/// `(DDD) DDD DD DD` — the national mobile format the form accepts.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{3}\) \d{3} \d{2} \d{2}$").expect("valid phone regex"));

/// An error attributable to one named form field. Ephemeral: scoped to a
/// single submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> FieldError {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate a form draft. Pure and synchronous; returns one entry per
/// violated rule, empty when the draft is submittable.
pub fn validate(form: &EventForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    // Gelin bilgileri
    if form.bride_name.trim().is_empty() {
        errors.push(FieldError::new("brideName", "Gelin adı zorunludur"));
    }
    if form.bride_surname.trim().is_empty() {
        errors.push(FieldError::new("brideSurname", "Gelin soyadı zorunludur"));
    }

    // Damat bilgileri
    if form.groom_name.trim().is_empty() {
        errors.push(FieldError::new("groomName", "Damat adı zorunludur"));
    }
    if form.groom_surname.trim().is_empty() {
        errors.push(FieldError::new("groomSurname", "Damat soyadı zorunludur"));
    }

    // Sözleşme sahibi
    if form.hosted_name_surname.trim().is_empty() {
        errors.push(FieldError::new(
            "hostedNameSurname",
            "Sözleşme sahibi adı soyadı zorunludur",
        ));
    }

    // Tarih ve saatler
    if form.event_date.is_none() {
        errors.push(FieldError::new("eventDate", "Etkinlik tarihi zorunludur"));
    }
    if form.event_time_start.trim().is_empty() {
        errors.push(FieldError::new(
            "eventTimeStart",
            "Başlangıç saati zorunludur",
        ));
    }
    if form.event_time_finish.trim().is_empty() {
        errors.push(FieldError::new("eventTimeFinish", "Bitiş saati zorunludur"));
    }

    // Etkinlik tipi: unset is a failure, not a default
    if form.event_type.is_none() {
        errors.push(FieldError::new("eventType", "Etkinlik tipi zorunludur"));
    }

    // Telefon: format is only checked once the required rule passes
    if form.phone.trim().is_empty() {
        errors.push(FieldError::new("phone", "Telefon numarası zorunludur"));
    } else if !PHONE_RE.is_match(form.phone.trim()) {
        errors.push(FieldError::new(
            "phone",
            "Geçerli bir telefon numarası giriniz",
        ));
    }

    // Misafir sayısı
    if form.number_of_guests.is_none() || form.number_of_guests.is_some_and(|n| n < 0) {
        errors.push(FieldError::new(
            "numberOfGuests",
            "Geçerli bir misafir sayısı giriniz",
        ));
    }

    errors
}

/// Merge locally computed errors with server-reported ones for the same
/// submission cycle. The server is authoritative for rules the client
/// cannot fully check, so its message wins whenever both sides flag the
/// same field.
pub fn merge_field_errors(local: Vec<FieldError>, server: Vec<FieldError>) -> Vec<FieldError> {
    let server_fields: HashSet<&str> = server.iter().map(|e| e.field.as_str()).collect();

    let mut merged: Vec<FieldError> = local
        .into_iter()
        .filter(|e| !server_fields.contains(e.field.as_str()))
        .collect();
    merged.extend(server);
    merged
}
