//! ID newtypes for record identity.
//!
//! Both IDs are distinct newtype wrappers over `String`, providing type
//! safety so that a `PersonId` cannot be accidentally used where a `CarId`
//! is expected. On the wire they serialize as plain strings ("1", "2", ...),
//! matching the decimal-string ids the store assigns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable person identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

/// Stable car identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarId(pub String);

// Display implementations -- just print the inner value.

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        PersonId(s.to_string())
    }
}

impl From<&str> for CarId {
    fn from(s: &str) -> Self {
        CarId(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_id_display() {
        assert_eq!(format!("{}", PersonId::from("7")), "7");
    }

    #[test]
    fn car_id_display() {
        assert_eq!(format!("{}", CarId::from("12")), "12");
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&PersonId::from("3")).unwrap();
        assert_eq!(json, "\"3\"");

        let back: PersonId = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(back, PersonId::from("3"));
    }

    #[test]
    fn id_types_are_distinct() {
        // Same inner value, different types; confusion is a compile error.
        let person = PersonId::from("1");
        let car = CarId::from("1");
        assert_eq!(person.0, car.0);
    }
}
