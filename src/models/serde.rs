//! JSON conversion for `Person`
//!
//! The wire form is a flat object: `{"name": "...", "age": n}`.

use crate::config::PersonConfig;
use crate::error::Result;
use crate::models::person::Person;

/// Serialize a person to compact JSON
pub fn to_json(person: &Person) -> Result<String> {
    Ok(serde_json::to_string(person)?)
}

/// Serialize a person to indented JSON
pub fn to_json_pretty(person: &Person) -> Result<String> {
    Ok(serde_json::to_string_pretty(person)?)
}

/// Parse a person from JSON without applying any validation
pub fn from_json(json: &str) -> Result<Person> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a person from JSON and check it against the config
pub fn from_json_validated(json: &str, config: &PersonConfig) -> Result<Person> {
    let person = from_json(json)?;
    person.validate(config)?;
    Ok(person)
}
