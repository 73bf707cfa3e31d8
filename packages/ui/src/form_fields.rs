//! Labelled inputs for the registration form.

use dioxus::prelude::*;

/// `<select>` with a blank first option. Used for the enumerated answers and
/// for the country, state and city pickers.
#[component]
pub fn SelectField(
    label: String,
    name: String,
    value: String,
    options: Vec<String>,
    #[props(default = "Select...".to_string())] placeholder: String,
    #[props(default)] disabled: bool,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            select {
                name: "{name}",
                value: "{value}",
                disabled: disabled || options.is_empty(),
                onchange: move |evt: FormEvent| on_change.call(evt.value()),
                option { value: "", selected: value.is_empty(), "{placeholder}" }
                for choice in options.iter() {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: *choice == value,
                        "{choice}"
                    }
                }
            }
        }
    }
}

/// Single-line `<input>`.
#[component]
pub fn TextField(
    label: String,
    name: String,
    value: String,
    #[props(default = "text".to_string())] input_type: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            input {
                r#type: "{input_type}",
                name: "{name}",
                value: "{value}",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
        }
    }
}

/// `<textarea>` for the long-form answers, with a running character count.
#[component]
pub fn AnswerField(
    label: String,
    name: String,
    value: String,
    min_chars: usize,
    on_input: EventHandler<String>,
) -> Element {
    let count = value.chars().count();
    let short = count < min_chars;

    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            textarea {
                name: "{name}",
                rows: "3",
                value: "{value}",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
            span {
                class: if short { "field-count field-count-short" } else { "field-count" },
                "{count}/{min_chars}"
            }
        }
    }
}
