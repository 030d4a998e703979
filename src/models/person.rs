//! Person record
//!
//! A `Person` holds a name and an age, both freely mutable. The plain
//! constructor and setters never validate. Callers that want rules applied go
//! through the `try_*` variants with a [`PersonConfig`].

use crate::config::PersonConfig;
use crate::error::{PersonError, Result};
use crate::models::traits::EntityModel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Example names offered to callers that need a starting point
pub const SUGGESTED_NAMES: [&str; 2] = ["Jan", "Piet"];

/// A person with a name and an age
///
/// Not internally synchronized: mutation needs `&mut self`, so share it
/// across threads behind a `Mutex` if more than one writer is expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: String,
    age: i32,
}

impl Person {
    /// Create a new person with exactly the given values
    #[must_use]
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Create a new person, rejecting values the config forbids
    pub fn try_new(name: impl Into<String>, age: i32, config: &PersonConfig) -> Result<Self> {
        let person = Self::new(name, age);
        person.validate(config)?;
        Ok(person)
    }

    /// Build a person from the suggested name at `index`, aged 0
    #[must_use]
    pub fn suggested(index: usize) -> Option<Self> {
        SUGGESTED_NAMES.get(index).map(|name| Self::new(*name, 0))
    }

    /// The shared list of suggested names, always `["Jan", "Piet"]`
    #[must_use]
    pub const fn suggested_names() -> &'static [&'static str] {
        &SUGGESTED_NAMES
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        log::debug!("Person name set to {:?}", self.name);
    }

    /// Replace the name if the config accepts it; otherwise leave it untouched
    pub fn try_set_name(&mut self, name: impl Into<String>, config: &PersonConfig) -> Result<()> {
        let name = name.into();
        check_name(&name, config)?;
        self.set_name(name);
        Ok(())
    }

    #[must_use]
    pub const fn age(&self) -> i32 {
        self.age
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
        log::debug!("Person {:?} age set to {}", self.name, age);
    }

    /// Replace the age if the config accepts it; otherwise leave it untouched
    pub fn try_set_age(&mut self, age: i32, config: &PersonConfig) -> Result<()> {
        check_age(age, config)?;
        self.set_age(age);
        Ok(())
    }

    /// Check the current values against the config
    pub fn validate(&self, config: &PersonConfig) -> Result<()> {
        check_name(&self.name, config)?;
        check_age(self.age, config)
    }

    /// Copy of this person with a different name
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self::new(name, self.age)
    }

    /// Copy of this person with a different age
    #[must_use]
    pub fn with_age(&self, age: i32) -> Self {
        Self::new(self.name.clone(), age)
    }

    /// Copy of this person one year older
    #[must_use]
    pub fn celebrate_birthday(&self) -> Self {
        self.with_age(self.age.saturating_add(1))
    }

    /// Split into `(name, age)`
    #[must_use]
    pub fn into_parts(self) -> (String, i32) {
        (self.name, self.age)
    }
}

fn check_name(name: &str, config: &PersonConfig) -> Result<()> {
    if config.reject_empty_name && name.is_empty() {
        log::warn!("Rejected empty person name");
        return Err(PersonError::EmptyName);
    }
    Ok(())
}

fn check_age(age: i32, config: &PersonConfig) -> Result<()> {
    if config.reject_negative_age && age < 0 {
        log::warn!("Rejected negative person age {age}");
        return Err(PersonError::NegativeAge(age));
    }
    Ok(())
}

impl Default for Person {
    fn default() -> Self {
        Self::new("unknown", 0)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person(name={}, age={})", self.name, self.age)
    }
}

impl From<(String, i32)> for Person {
    fn from((name, age): (String, i32)) -> Self {
        Self::new(name, age)
    }
}

impl From<Person> for (String, i32) {
    fn from(person: Person) -> Self {
        person.into_parts()
    }
}

/// Two partners produce a newborn named after both of them
impl Add<&Person> for &Person {
    type Output = Person;

    fn add(self, partner: &Person) -> Person {
        Person::new(format!("{} {} Junior", self.name, partner.name), 0)
    }
}

impl EntityModel for Person {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }

    fn key(&self) -> String {
        format!("{}:{}", self.name, self.age)
    }
}
