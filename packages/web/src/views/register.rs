//! Registration page: the full compatibility profile, location, and photos.

use api::models::{Gender, GenderPreference, GuestPolicy, Neatness, PetPreference};
use api::registration::validation::MIN_ANSWER_LEN;
use api::registration::{ImageAttachment, LocationFetch, RegistrationForm};
use api::{Backend, DirectoryClient};
use dioxus::prelude::*;
use ui::{
    make_registration_form, use_services, AnswerField, ImagePicker, Previews, SelectField,
    TextField,
};

use crate::Route;

type Form = Signal<RegistrationForm<Previews>>;

/// Long-form answers: label and wire name.
const ANSWERS_BEFORE_TIMES: [(&str, &str); 2] = [
    ("Daily Routine", "dailyRoutine"),
    ("Priorities", "priorities"),
];
const ANSWERS_AFTER_TIMES: [(&str, &str); 4] = [
    ("Home Space Use", "homeSpaceUse"),
    ("Biggest Stressors", "biggestStressors"),
    ("Worst Habit", "worstHabit"),
    ("Deal Breakers", "dealBreakers"),
];
const ANSWERS_AFTER_CHOICES: [(&str, &str); 3] = [
    ("Confrontation Style", "confrontationStyle"),
    ("Sunday Night Activity", "sundayNightActivity"),
    ("Roommate Self-Assessment", "roommateSelfAssessment"),
];

fn owned(labels: Vec<&'static str>) -> Vec<String> {
    labels.into_iter().map(str::to_string).collect()
}

/// Run a directory fetch and every follow-up, writing results into the form.
fn drive_location(mut form: Form, directory: DirectoryClient, fetch: Option<LocationFetch>) {
    let Some(fetch) = fetch else {
        return;
    };
    spawn(async move {
        let mut next = Some(fetch);
        while let Some(fetch) = next.take() {
            match fetch.clone().run(&directory).await {
                Ok(data) => next = form.write().location.apply(data),
                Err(e) => form.write().location.fail(&fetch, &e),
            }
        }
    });
}

#[component]
pub fn Register() -> Element {
    let mut form: Form = use_signal(make_registration_form);
    let mut messages = use_signal(Vec::<String>::new);
    let mut submitting = use_signal(|| false);
    let services = use_services();

    // Directory credential, then countries, once on mount
    let directory = services.directory.clone();
    use_hook(move || {
        let fetch = form.peek().location.start();
        drive_location(form, directory, fetch);
    });

    let mut edit = move |name: &'static str, value: String| {
        form.write().fields.set(name, &value);
        messages.set(Vec::new());
    };

    let directory = services.directory.clone();
    let on_country = move |country: String| {
        let fetch = form.write().location.select_country(&country);
        messages.set(Vec::new());
        drive_location(form, directory.clone(), fetch);
    };
    let directory = services.directory.clone();
    let on_state = move |state: String| {
        let fetch = form.write().location.select_state(&state);
        messages.set(Vec::new());
        drive_location(form, directory.clone(), fetch);
    };
    let on_city = move |city: String| {
        form.write().location.select_city(&city);
        messages.set(Vec::new());
    };

    let on_files = move |batch: Vec<ImageAttachment>| {
        if let Err(e) = form.write().images.attach(batch) {
            messages.set(vec![e.to_string()]);
        }
    };
    let on_remove = move |index: usize| {
        form.write().images.remove(index);
    };

    let backend = services.backend.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let record = match form.read().prepare() {
            Ok(record) => record,
            Err(errors) => {
                tracing::debug!("Registration form has {} problems", errors.len());
                messages.set(errors);
                return;
            }
        };
        messages.set(Vec::new());
        submitting.set(true);
        let backend = backend.clone();
        spawn(async move {
            let result = backend.register(&record).await;
            let outcome = form.write().finish(result);
            messages.set(outcome.messages());
            submitting.set(false);
        });
    };

    let current = form.read();
    let fields = &current.fields;
    let place = current.location.selection().clone();
    let location_notice = current.location.notice();
    let options = current.location.options();
    let countries = options.countries.to_vec();
    let states = options.states.to_vec();
    let cities = options.cities.to_vec();
    let previews: Vec<String> = current.images.previews().map(str::to_string).collect();
    let answer = |name: &str| fields.answer(name).unwrap_or_default().to_string();

    rsx! {
        div {
            class: "register-page",
            h1 { "Registration Form" }

            if !messages().is_empty() {
                div {
                    class: "form-error",
                    for (index, message) in messages().into_iter().enumerate() {
                        div { key: "{index}", "{message}" }
                    }
                }
            }

            form {
                onsubmit: handle_submit,
                class: "register-form",

                if let Some(notice) = location_notice {
                    p { class: "form-notice", "{notice}" }
                }
                SelectField {
                    label: "Country",
                    name: "country",
                    value: place.country.clone(),
                    options: countries,
                    placeholder: "Select a country",
                    on_change: on_country,
                }
                SelectField {
                    label: "State",
                    name: "state",
                    value: place.state.clone(),
                    options: states,
                    placeholder: "Select a state",
                    on_change: on_state,
                }
                SelectField {
                    label: "City",
                    name: "city",
                    value: place.city.clone(),
                    options: cities,
                    placeholder: "Select a city",
                    on_change: on_city,
                }

                TextField {
                    label: "Name",
                    name: "name",
                    value: fields.name.clone(),
                    on_input: move |v: String| edit("name", v),
                }
                TextField {
                    label: "Age",
                    name: "age",
                    input_type: "number",
                    value: fields.age.clone(),
                    on_input: move |v: String| edit("age", v),
                }
                TextField {
                    label: "Email",
                    name: "email",
                    input_type: "email",
                    value: fields.email.clone(),
                    on_input: move |v: String| edit("email", v),
                }
                TextField {
                    label: "Password",
                    name: "password",
                    input_type: "password",
                    value: fields.password.clone(),
                    on_input: move |v: String| edit("password", v),
                }

                for (label, name) in ANSWERS_BEFORE_TIMES {
                    AnswerField {
                        key: "{name}",
                        label: label.to_string(),
                        name: name.to_string(),
                        value: answer(name),
                        min_chars: MIN_ANSWER_LEN,
                        on_input: move |v: String| edit(name, v),
                    }
                }

                TextField {
                    label: "Wake Up Time",
                    name: "wakeUpTime",
                    input_type: "time",
                    value: fields.wake_up_time.clone(),
                    on_input: move |v: String| edit("wakeUpTime", v),
                }
                TextField {
                    label: "Bed Time",
                    name: "bedTime",
                    input_type: "time",
                    value: fields.bed_time.clone(),
                    on_input: move |v: String| edit("bedTime", v),
                }

                for (label, name) in ANSWERS_AFTER_TIMES {
                    AnswerField {
                        key: "{name}",
                        label: label.to_string(),
                        name: name.to_string(),
                        value: answer(name),
                        min_chars: MIN_ANSWER_LEN,
                        on_input: move |v: String| edit(name, v),
                    }
                }

                SelectField {
                    label: "Neatness Preference",
                    name: "neatnessPreference",
                    value: fields.neatness_preference.clone(),
                    options: owned(Neatness::labels()),
                    placeholder: "Select neatness preference",
                    on_change: move |v: String| edit("neatnessPreference", v),
                }
                SelectField {
                    label: "Pet Preference",
                    name: "pets",
                    value: fields.pets.clone(),
                    options: owned(PetPreference::labels()),
                    placeholder: "Select pet preference",
                    on_change: move |v: String| edit("pets", v),
                }
                SelectField {
                    label: "Gender Preference",
                    name: "gender",
                    value: fields.gender_preference.clone(),
                    options: owned(GenderPreference::labels()),
                    placeholder: "Select gender preference",
                    on_change: move |v: String| edit("gender", v),
                }
                SelectField {
                    label: "Your Gender",
                    name: "yourgender",
                    value: fields.own_gender.clone(),
                    options: owned(Gender::labels()),
                    placeholder: "Select your gender",
                    on_change: move |v: String| edit("yourgender", v),
                }
                SelectField {
                    label: "Overnight Guests",
                    name: "overnightGuests",
                    value: fields.overnight_guests.clone(),
                    options: owned(GuestPolicy::labels()),
                    placeholder: "Select option",
                    on_change: move |v: String| edit("overnightGuests", v),
                }

                for (label, name) in ANSWERS_AFTER_CHOICES {
                    AnswerField {
                        key: "{name}",
                        label: label.to_string(),
                        name: name.to_string(),
                        value: answer(name),
                        min_chars: MIN_ANSWER_LEN,
                        on_input: move |v: String| edit(name, v),
                    }
                }

                TextField {
                    label: "Move In Date",
                    name: "moveInDate",
                    input_type: "date",
                    value: fields.move_in_date.clone(),
                    on_input: move |v: String| edit("moveInDate", v),
                }
                TextField {
                    label: "Move Out Date",
                    name: "moveOutDate",
                    input_type: "date",
                    value: fields.move_out_date.clone(),
                    on_input: move |v: String| edit("moveOutDate", v),
                }

                ImagePicker {
                    previews,
                    on_files,
                    on_remove,
                }

                button {
                    class: "primary-button",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Submitting..." } else { "Register" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
