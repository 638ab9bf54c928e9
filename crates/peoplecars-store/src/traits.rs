//! The [`RecordStore`] trait defining the storage contract for records.
//!
//! The trait exposes low-level CRUD primitives only. Each method touches
//! exactly one collection; composite operations (cascade delete, integrity
//! checks) are built from these primitives by the resolution layer.
//!
//! The trait is synchronous (not async) for simplicity in the current
//! single-writer design. All backends implement this trait, ensuring they
//! are fully swappable without changing resolution semantics.

use peoplecars_core::{Car, CarId, Person, PersonId};

use crate::error::StoreError;

/// The storage contract for people and car records.
pub trait RecordStore {
    // -------------------------------------------------------------------
    // Person primitives
    // -------------------------------------------------------------------

    /// Returns a snapshot of all people in insertion order.
    fn list_people(&self) -> Vec<Person>;

    /// Retrieves a person by id, or `None` if absent.
    fn get_person(&self, id: &PersonId) -> Option<Person>;

    /// Inserts a new person, allocating the next person id.
    ///
    /// Returns the stored record.
    fn insert_person(&mut self, first_name: &str, last_name: &str) -> Person;

    /// Replaces an existing person record wholesale.
    ///
    /// The record to replace is addressed by `person.id`.
    fn put_person(&mut self, person: Person) -> Result<(), StoreError>;

    /// Removes a person by id, returning the removed record.
    fn remove_person(&mut self, id: &PersonId) -> Result<Person, StoreError>;

    // -------------------------------------------------------------------
    // Car primitives
    // -------------------------------------------------------------------

    /// Returns a snapshot of all cars in insertion order.
    fn list_cars(&self) -> Vec<Car>;

    /// Retrieves a car by id, or `None` if absent.
    fn get_car(&self, id: &CarId) -> Option<Car>;

    /// Inserts a new car, allocating the next car id.
    ///
    /// No check that `person_id` exists -- referential integrity is
    /// resolution-layer policy, not a storage concern.
    fn insert_car(
        &mut self,
        year: i32,
        make: &str,
        model: &str,
        price: f64,
        person_id: PersonId,
    ) -> Car;

    /// Replaces an existing car record wholesale.
    ///
    /// The record to replace is addressed by `car.id`.
    fn put_car(&mut self, car: Car) -> Result<(), StoreError>;

    /// Removes a car by id, returning the removed record.
    fn remove_car(&mut self, id: &CarId) -> Result<Car, StoreError>;

    // -------------------------------------------------------------------
    // Relationship queries
    // -------------------------------------------------------------------

    /// Finds all cars whose `person_id` matches, in insertion order.
    fn cars_of(&self, person_id: &PersonId) -> Vec<Car>;

    /// Removes all cars whose `person_id` matches, returning them.
    ///
    /// Removing zero cars is not an error; the result is simply empty.
    fn remove_cars_of(&mut self, person_id: &PersonId) -> Vec<Car>;
}
