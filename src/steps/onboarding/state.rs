//! Onboarding form state and validation.

use std::collections::BTreeMap;

use crate::store::{Budget, Location, Profile, Stream, StoredState, AGE_MAX, AGE_MIN};

const NAME_MAX_LEN: usize = 60;

/// The six form fields, in display and focus order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Age,
    Stream,
    Percentage,
    Location,
    Budget,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Age,
        Field::Stream,
        Field::Percentage,
        Field::Location,
        Field::Budget,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Age => "Age",
            Field::Stream => "Current Stream",
            Field::Percentage => "Academic Percentage",
            Field::Location => "Preferred Study Location",
            Field::Budget => "Budget Range",
        }
    }

    pub fn error_message(self) -> &'static str {
        match self {
            Field::Name => "Name is required",
            Field::Age => "Age is required",
            Field::Stream => "Stream is required",
            Field::Percentage => "Percentage is required",
            Field::Location => "Preferred location is required",
            Field::Budget => "Budget preference is required",
        }
    }

    /// Text fields consume typed characters; the rest are option selectors.
    pub fn is_text(self) -> bool {
        matches!(self, Field::Name | Field::Percentage)
    }
}

/// The in-progress profile form.
///
/// Text fields are kept as raw strings until submit; selector fields hold
/// their parsed value directly. `errors` only ever contains entries produced
/// by the last failed submit, minus any field edited since.
pub struct ProfileForm {
    pub name: String,
    pub age: Option<u8>,
    pub stream: Option<Stream>,
    pub percentage: String,
    pub location: Option<Location>,
    pub budget: Option<Budget>,
    pub focus: Field,
    pub errors: BTreeMap<Field, &'static str>,
}

impl ProfileForm {
    /// Start the form prefilled from whatever the store already holds, so a
    /// returning student edits instead of retyping.
    pub fn from_stored(stored: &StoredState) -> Self {
        Self {
            name: stored.name.clone().unwrap_or_default(),
            age: stored.age,
            stream: stored.stream,
            percentage: stored.percentage.map(|p| p.to_string()).unwrap_or_default(),
            location: stored.preferred_location,
            budget: stored.budget,
            focus: Field::Name,
            errors: BTreeMap::new(),
        }
    }

    pub fn focus_next(&mut self) {
        let i = Field::ALL.iter().position(|&f| f == self.focus).unwrap_or(0);
        self.focus = Field::ALL[(i + 1) % Field::ALL.len()];
    }

    pub fn focus_prev(&mut self) {
        let i = Field::ALL.iter().position(|&f| f == self.focus).unwrap_or(0);
        self.focus = Field::ALL[(i + Field::ALL.len() - 1) % Field::ALL.len()];
    }

    /// Type a character into the focused field. Text fields accept it as an
    /// edit; selector fields treat digits as a direct option pick. Any edit
    /// clears that field's validation error.
    pub fn type_char(&mut self, c: char) -> bool {
        let changed = match self.focus {
            Field::Name => {
                if self.name.chars().count() < NAME_MAX_LEN && !c.is_control() {
                    self.name.push(c);
                    true
                } else {
                    false
                }
            }
            Field::Percentage => {
                if !c.is_ascii_digit() {
                    false
                } else {
                    let candidate = format!("{}{}", self.percentage, c);
                    // The entry widget only admits values 0..=100
                    match candidate.parse::<u16>() {
                        Ok(v) if v <= 100 => {
                            self.percentage = candidate;
                            true
                        }
                        _ => false,
                    }
                }
            }
            _ => self.pick_option(c),
        };
        if changed {
            self.errors.remove(&self.focus);
        }
        changed
    }

    pub fn backspace(&mut self) -> bool {
        let changed = match self.focus {
            Field::Name => self.name.pop().is_some(),
            Field::Percentage => self.percentage.pop().is_some(),
            _ => false,
        };
        if changed {
            self.errors.remove(&self.focus);
        }
        changed
    }

    /// Advance the focused selector to its next option, wrapping.
    pub fn cycle(&mut self, forward: bool) -> bool {
        let changed = match self.focus {
            Field::Age => {
                self.age = Some(cycle_range(self.age, AGE_MIN, AGE_MAX, forward));
                true
            }
            Field::Stream => {
                self.stream = Some(cycle_slice(&Stream::ALL, self.stream, forward));
                true
            }
            Field::Location => {
                self.location = Some(cycle_slice(&Location::ALL, self.location, forward));
                true
            }
            Field::Budget => {
                self.budget = Some(cycle_slice(&Budget::ALL, self.budget, forward));
                true
            }
            Field::Name | Field::Percentage => false,
        };
        if changed {
            self.errors.remove(&self.focus);
        }
        changed
    }

    /// Pick a selector option by its 1-based digit key.
    fn pick_option(&mut self, c: char) -> bool {
        let idx = match c.to_digit(10) {
            Some(d) if d >= 1 => (d - 1) as usize,
            _ => return false,
        };
        match self.focus {
            Field::Age => {
                let age = AGE_MIN + idx as u8;
                if age <= AGE_MAX {
                    self.age = Some(age);
                    true
                } else {
                    false
                }
            }
            Field::Stream => pick_slice(&Stream::ALL, idx, &mut self.stream),
            Field::Location => pick_slice(&Location::ALL, idx, &mut self.location),
            Field::Budget => pick_slice(&Budget::ALL, idx, &mut self.budget),
            Field::Name | Field::Percentage => false,
        }
    }

    /// Validate all fields, recording an error message per missing field.
    /// Returns true when the form is submittable.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        if self.name.trim().is_empty() {
            self.errors.insert(Field::Name, Field::Name.error_message());
        }
        if self.age.is_none() {
            self.errors.insert(Field::Age, Field::Age.error_message());
        }
        if self.stream.is_none() {
            self.errors.insert(Field::Stream, Field::Stream.error_message());
        }
        if self.percentage.is_empty() {
            self.errors
                .insert(Field::Percentage, Field::Percentage.error_message());
        }
        if self.location.is_none() {
            self.errors
                .insert(Field::Location, Field::Location.error_message());
        }
        if self.budget.is_none() {
            self.errors.insert(Field::Budget, Field::Budget.error_message());
        }
        self.errors.is_empty()
    }

    /// The completed profile, if every field is filled in.
    pub fn profile(&self) -> Option<Profile> {
        if self.name.trim().is_empty() {
            return None;
        }
        Some(Profile {
            name: self.name.clone(),
            age: self.age?,
            stream: self.stream?,
            // Entry is digit-constrained to 0..=100, so this parse holds
            percentage: self.percentage.parse().ok()?,
            location: self.location?,
            budget: self.budget?,
        })
    }

    /// Display string for the focused value of a selector field.
    pub fn value_label(&self, field: Field) -> Option<String> {
        match field {
            Field::Name => (!self.name.is_empty()).then(|| self.name.clone()),
            Field::Age => self.age.map(|a| format!("{} years", a)),
            Field::Stream => self.stream.map(|s| s.label().to_string()),
            Field::Percentage => {
                (!self.percentage.is_empty()).then(|| format!("{}%", self.percentage))
            }
            Field::Location => self.location.map(|l| l.label().to_string()),
            Field::Budget => self.budget.map(|b| b.label().to_string()),
        }
    }
}

fn cycle_range(current: Option<u8>, min: u8, max: u8, forward: bool) -> u8 {
    match current {
        None => min,
        Some(v) if forward => {
            if v >= max {
                min
            } else {
                v + 1
            }
        }
        Some(v) => {
            if v <= min {
                max
            } else {
                v - 1
            }
        }
    }
}

fn cycle_slice<T: Copy + PartialEq>(options: &[T], current: Option<T>, forward: bool) -> T {
    let n = options.len();
    match current.and_then(|c| options.iter().position(|&o| o == c)) {
        None => options[0],
        Some(i) if forward => options[(i + 1) % n],
        Some(i) => options[(i + n - 1) % n],
    }
}

fn pick_slice<T: Copy>(options: &[T], idx: usize, slot: &mut Option<T>) -> bool {
    match options.get(idx) {
        Some(&v) => {
            *slot = Some(v);
            true
        }
        None => false,
    }
}
