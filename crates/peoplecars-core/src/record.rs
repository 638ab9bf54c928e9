//! The two record types and their wire shapes.
//!
//! Field names are camelCase on the wire (`firstName`, `personId`) to match
//! the client contract. [`PersonWithCars`] flattens the person's fields so a
//! person-with-cars response reads as a person record with a `cars` array.

use serde::{Deserialize, Serialize};

use crate::id::{CarId, PersonId};

/// A person record. Owns zero or more cars via `Car::person_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Person identifier.
    pub id: PersonId,
    /// Required, non-blank.
    pub first_name: String,
    /// Required, non-blank.
    pub last_name: String,
}

/// A car record, owned by one person via `person_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Car identifier.
    pub id: CarId,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub price: f64,
    /// Foreign key into `Person::id`.
    pub person_id: PersonId,
}

/// A person together with the cars that reference it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonWithCars {
    #[serde(flatten)]
    pub person: Person,
    pub cars: Vec<Car>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_wire_shape_is_camel_case() {
        let person = Person {
            id: PersonId::from("1"),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        };
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "firstName": "Ada",
                "lastName": "Lovelace"
            })
        );
    }

    #[test]
    fn car_wire_shape_is_camel_case() {
        let car = Car {
            id: CarId::from("1"),
            year: 1990,
            make: "Ford".to_string(),
            model: "Taurus".to_string(),
            price: 5000.0,
            person_id: PersonId::from("1"),
        };
        let json = serde_json::to_value(&car).unwrap();
        assert_eq!(json["personId"], "1");
        assert_eq!(json["make"], "Ford");
        assert_eq!(json["price"], 5000.0);
    }

    #[test]
    fn person_with_cars_flattens_person_fields() {
        let nested = PersonWithCars {
            person: Person {
                id: PersonId::from("2"),
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
            },
            cars: vec![],
        };
        let json = serde_json::to_value(&nested).unwrap();
        // Person fields sit at the top level next to the cars array.
        assert_eq!(json["id"], "2");
        assert_eq!(json["firstName"], "Grace");
        assert!(json["cars"].as_array().unwrap().is_empty());
    }
}
