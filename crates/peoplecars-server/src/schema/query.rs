//! The structured query document accepted by the single API endpoint.
//!
//! [`QueryDocument`] is adjacently tagged: the `operation` field names the
//! operation and `args` carries its arguments (omitted for the zero-argument
//! list operations). Operation tags and argument fields are camelCase on the
//! wire, matching the client contract:
//!
//! ```json
//! { "operation": "addPerson", "args": { "firstName": "Ada", "lastName": "Lovelace" } }
//! ```

use serde::Deserialize;

use peoplecars_core::{CarId, PersonId};

/// One read or write operation against the record service.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "operation", content = "args", rename_all = "camelCase")]
pub enum QueryDocument {
    /// Full snapshot of the people collection.
    People,
    /// Full snapshot of the cars collection.
    Cars,
    /// Single person lookup; absent id is an empty result.
    Person { id: PersonId },
    /// Single car lookup; absent id is an empty result.
    Car { id: CarId },
    /// Person plus the cars referencing it; absent id is an empty result.
    PersonWithCars { id: PersonId },
    /// Append a new person. Both fields required and non-blank.
    #[serde(rename_all = "camelCase")]
    AddPerson {
        first_name: String,
        last_name: String,
    },
    /// Append a new car. `personId` must reference an existing person.
    #[serde(rename_all = "camelCase")]
    AddCar {
        year: i32,
        make: String,
        model: String,
        price: f64,
        person_id: PersonId,
    },
    /// Partial update: only supplied fields change.
    #[serde(rename_all = "camelCase")]
    UpdatePerson {
        id: PersonId,
        first_name: Option<String>,
        last_name: Option<String>,
    },
    /// Full replace of all fields except id and personId.
    UpdateCar {
        id: CarId,
        year: i32,
        make: String,
        model: String,
        price: f64,
    },
    /// Remove a person and cascade to its cars.
    DeletePerson { id: PersonId },
    /// Remove a single car.
    DeleteCar { id: CarId },
}
