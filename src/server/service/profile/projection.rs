//! Assembly of the full and redacted profile shapes.
//!
//! The redacted shape is built field by field from an allow-list; nothing is copied from the
//! full shape, so a new protected column cannot leak by default.

use chrono::NaiveDate;

use crate::{
    model::profile::{FullProfileDto, PhotoDto, RedactedProfileDto},
    server::util::time::age_on,
};

pub fn full(
    profile: entity::rishta_profile::Model,
    photos: Vec<PhotoDto>,
    today: NaiveDate,
) -> FullProfileDto {
    FullProfileDto {
        age: age_on(profile.date_of_birth, today),
        id: profile.id,
        owner_id: profile.owner_id,
        code: profile.code,
        first_name: profile.first_name,
        surname: profile.surname,
        date_of_birth: profile.date_of_birth,
        height_cm: profile.height_cm,
        marital_status: profile.marital_status,
        caste: profile.caste,
        gotra: profile.gotra,
        education: profile.education,
        occupation: profile.occupation,
        city: profile.city,
        state: profile.state,
        contact_number: profile.contact_number,
        postal_address: profile.postal_address,
        about: profile.about,
        photos,
    }
}

pub fn redacted(
    profile: &entity::rishta_profile::Model,
    primary_photo: Option<PhotoDto>,
    today: NaiveDate,
) -> RedactedProfileDto {
    RedactedProfileDto {
        id: profile.id,
        code: profile.code.clone(),
        first_name: profile.first_name.clone(),
        age: age_on(profile.date_of_birth, today),
        height_cm: profile.height_cm,
        marital_status: profile.marital_status.clone(),
        community: join_present(&[&profile.caste, &profile.gotra], " / "),
        education_or_occupation: first_present(&[&profile.education, &profile.occupation]),
        location: join_present(&[&profile.city, &profile.state], ", "),
        photo: primary_photo,
    }
}

/// The photo flagged primary, else the first by position
///
/// `photos` must belong to one profile.
pub fn primary_photo(
    photos: &[entity::rishta_profile_photo::Model],
) -> Option<&entity::rishta_profile_photo::Model> {
    photos
        .iter()
        .find(|photo| photo.is_primary)
        .or_else(|| photos.iter().min_by_key(|photo| (photo.position, photo.id)))
}

fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn join_present(values: &[&Option<String>], separator: &str) -> Option<String> {
    let parts: Vec<&str> = values.iter().filter_map(|value| present(value)).collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(separator))
    }
}

fn first_present(values: &[&Option<String>]) -> Option<String> {
    values
        .iter()
        .find_map(|value| present(value))
        .map(str::to_string)
}
