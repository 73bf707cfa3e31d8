//! Client-side validation of the registration form.
//!
//! Every rule is evaluated; the result lists each violation in a fixed order
//! so the form can show them all at once.

use chrono::NaiveDate;

use super::location::LocationSelection;
use super::ProfileForm;
use crate::models::{Gender, GenderPreference, GuestPolicy, Neatness, PetPreference};

pub const MIN_AGE: u32 = 18;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_ANSWER_LEN: usize = 30;

/// Long-form answers, by wire name, that must reach [`MIN_ANSWER_LEN`].
pub const ANSWER_FIELDS: [&str; 9] = [
    "dailyRoutine",
    "priorities",
    "homeSpaceUse",
    "biggestStressors",
    "worstHabit",
    "dealBreakers",
    "confrontationStyle",
    "sundayNightActivity",
    "roommateSelfAssessment",
];

/// Collect every violation of the registration rules.
pub fn validate(
    form: &ProfileForm,
    location: &LocationSelection,
    image_count: usize,
) -> Vec<String> {
    let mut errors = Vec::new();
    let mut require = |ok: bool, message: &str| {
        if !ok {
            errors.push(message.to_string());
        }
    };

    require(image_count > 0, "At least one image is required.");
    require(!form.name.is_empty(), "First name is required.");
    require(
        parse_age(&form.age).is_some_and(|age| age >= MIN_AGE),
        "You must be at least 18 years old.",
    );
    require(looks_like_email(&form.email), "Please enter a valid email address.");
    require(
        form.password.chars().count() >= MIN_PASSWORD_LEN
            && form.password.chars().any(|c| c.is_ascii_digit()),
        "Password must be at least 6 characters long and include numbers.",
    );

    for field in ANSWER_FIELDS {
        let answer = form.answer(field).unwrap_or_default();
        if answer.chars().count() < MIN_ANSWER_LEN {
            errors.push(format!(
                "{} must be at least {MIN_ANSWER_LEN} characters long.",
                capitalize(field)
            ));
        }
    }

    let mut require = |ok: bool, message: &str| {
        if !ok {
            errors.push(message.to_string());
        }
    };
    require(!form.wake_up_time.is_empty(), "Wake up time is required.");
    require(!form.bed_time.is_empty(), "Bed time is required.");
    require(!form.move_in_date.is_empty(), "Move in date is required.");
    require(!form.move_out_date.is_empty(), "Move out date is required.");
    if !form.move_in_date.is_empty() && !form.move_out_date.is_empty() {
        require(
            dates_ordered(&form.move_in_date, &form.move_out_date),
            "Move out date must be after move in date.",
        );
    }

    require(
        Neatness::from_label(&form.neatness_preference).is_some(),
        "Please select a valid neatness preference.",
    );
    require(
        PetPreference::from_label(&form.pets).is_some(),
        "Please select a pet preference.",
    );
    require(
        GenderPreference::from_label(&form.gender_preference).is_some(),
        "Please select a gender preference.",
    );
    require(
        Gender::from_label(&form.own_gender).is_some(),
        "Please select your gender.",
    );
    require(
        GuestPolicy::from_label(&form.overnight_guests).is_some(),
        "Please select a valid option for overnight guests.",
    );

    require(!location.country.is_empty(), "Country is required.");
    require(!location.state.is_empty(), "State is required.");
    require(!location.city.is_empty(), "City is required.");

    errors
}

/// Age as typed into the number input.
pub fn parse_age(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Loose `local@domain.tld` shape: non-blank runs around an `@` and a later `.`.
///
/// Unanchored, like a substring search for `\S+@\S+\.\S+`.
pub fn looks_like_email(email: &str) -> bool {
    email.split_whitespace().any(|word| {
        word.char_indices().any(|(at, c)| {
            if c != '@' || at == 0 {
                return false;
            }
            let domain = &word[at + 1..];
            domain
                .char_indices()
                .any(|(dot, d)| d == '.' && dot > 0 && dot + 1 < domain.len())
        })
    })
}

/// True when move-in is strictly before move-out.
fn dates_ordered(move_in: &str, move_out: &str) -> bool {
    match (
        NaiveDate::parse_from_str(move_in, "%Y-%m-%d"),
        NaiveDate::parse_from_str(move_out, "%Y-%m-%d"),
    ) {
        (Ok(start), Ok(end)) => start < end,
        // ISO-8601 text compares in date order
        _ => move_in < move_out,
    }
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
