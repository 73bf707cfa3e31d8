//! # Enumerated profile answers
//!
//! The backend stores these categorical answers as their display labels
//! (`"Very Neat"`, `"Sometimes"`, ...), so each enum round-trips through
//! [`label`](Neatness::label) / [`from_label`](Neatness::from_label) rather than
//! a serde rename. Forms keep the raw `<select>` value as a string; validation
//! asks `from_label(value).is_some()`.

macro_rules! choice_set {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every option, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Label shown in the select and stored by the backend.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Parse an exact label.
            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// All labels, in display order.
            pub fn labels() -> Vec<&'static str> {
                Self::ALL.iter().map(|c| c.label()).collect()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

choice_set! {
    /// How tidy the user wants the shared home.
    Neatness {
        VeryNeat => "Very Neat",
        Neat => "Neat",
        SomewhatNeat => "Somewhat Neat",
        Messy => "Messy",
    }
}

choice_set! {
    /// Whether pets are welcome.
    PetPreference {
        Yes => "Yes",
        No => "No",
    }
}

choice_set! {
    /// Gender the user would like to live with.
    GenderPreference {
        Male => "Male",
        Female => "Female",
        Any => "Any",
    }
}

choice_set! {
    /// The user's own gender.
    Gender {
        Male => "Male",
        Female => "Female",
    }
}

choice_set! {
    /// Overnight guests policy.
    GuestPolicy {
        Yes => "Yes",
        No => "No",
        Sometimes => "Sometimes",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_roundtrip() {
        for n in Neatness::ALL {
            assert_eq!(Neatness::from_label(n.label()), Some(*n));
        }
        assert_eq!(
            Neatness::labels(),
            vec!["Very Neat", "Neat", "Somewhat Neat", "Messy"]
        );
        assert_eq!(GuestPolicy::labels(), vec!["Yes", "No", "Sometimes"]);
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(Neatness::from_label("neat"), None);
        assert_eq!(Neatness::from_label(" Neat"), None);
        assert_eq!(Gender::from_label("Any"), None);
        assert_eq!(GenderPreference::from_label("Any"), Some(GenderPreference::Any));
        assert_eq!(PetPreference::from_label(""), None);
    }
}
