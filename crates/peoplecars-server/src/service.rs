//! RegistryService: the resolution layer between the HTTP handler and the
//! record store.
//!
//! All business logic flows through [`RegistryService`]: required-field
//! validation, the referential-integrity check on car creation, cascade
//! delete, and the update rules (partial for people, full replace for cars).
//! The handler is a thin wrapper that delegates to these methods.
//!
//! Not-found convention, applied uniformly: reads resolve an absent id to an
//! empty result (`None`); writes addressed to an absent id fail with
//! `ApiError::NotFound`.

use peoplecars_core::{Car, CarId, Person, PersonId, PersonWithCars};
use peoplecars_store::RecordStore;

use crate::error::ApiError;

/// The resolution layer over a [`RecordStore`] backend.
///
/// Generic over the store so tests can inject a fresh backend; the server
/// runs it over [`peoplecars_store::InMemoryStore`].
pub struct RegistryService<S> {
    store: S,
}

impl<S: RecordStore> RegistryService<S> {
    /// Creates a service over the given store backend.
    pub fn new(store: S) -> Self {
        RegistryService { store }
    }

    // -------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------

    /// Full snapshot of the people collection.
    pub fn people(&self) -> Vec<Person> {
        self.store.list_people()
    }

    /// Full snapshot of the cars collection.
    pub fn cars(&self) -> Vec<Car> {
        self.store.list_cars()
    }

    /// Single person lookup.
    pub fn person(&self, id: &PersonId) -> Option<Person> {
        self.store.get_person(id)
    }

    /// Single car lookup.
    pub fn car(&self, id: &CarId) -> Option<Car> {
        self.store.get_car(id)
    }

    /// Person plus its dependent cars, or `None` for an unknown person id.
    pub fn person_with_cars(&self, id: &PersonId) -> Option<PersonWithCars> {
        let person = self.store.get_person(id)?;
        let cars = self.store.cars_of(id);
        Some(PersonWithCars { person, cars })
    }

    // -------------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------------

    /// Appends a new person. Both name fields must be non-blank.
    pub fn add_person(&mut self, first_name: &str, last_name: &str) -> Result<Person, ApiError> {
        require_non_blank("firstName", first_name)?;
        require_non_blank("lastName", last_name)?;

        let person = self.store.insert_person(first_name.trim(), last_name.trim());
        tracing::info!(id = %person.id, "added person");
        Ok(person)
    }

    /// Appends a new car owned by `person_id`.
    ///
    /// The owner must exist: a car may never be created against an unknown
    /// person id.
    pub fn add_car(
        &mut self,
        year: i32,
        make: &str,
        model: &str,
        price: f64,
        person_id: PersonId,
    ) -> Result<Car, ApiError> {
        require_non_blank("make", make)?;
        require_non_blank("model", model)?;

        if self.store.get_person(&person_id).is_none() {
            return Err(ApiError::NotFound(format!(
                "person not found: {}",
                person_id
            )));
        }

        let car = self
            .store
            .insert_car(year, make.trim(), model.trim(), price, person_id);
        tracing::info!(id = %car.id, owner = %car.person_id, "added car");
        Ok(car)
    }

    /// Partial update: mutates only the supplied fields.
    ///
    /// A supplied-but-blank field is a validation error rather than a
    /// silent no-op.
    pub fn update_person(
        &mut self,
        id: &PersonId,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<Person, ApiError> {
        let mut person = self
            .store
            .get_person(id)
            .ok_or_else(|| ApiError::NotFound(format!("person not found: {}", id)))?;

        if let Some(first) = first_name {
            require_non_blank("firstName", first)?;
            person.first_name = first.trim().to_string();
        }
        if let Some(last) = last_name {
            require_non_blank("lastName", last)?;
            person.last_name = last.trim().to_string();
        }

        self.store.put_person(person.clone())?;
        tracing::debug!(id = %person.id, "updated person");
        Ok(person)
    }

    /// Full replace of all car fields except id and owner.
    pub fn update_car(
        &mut self,
        id: &CarId,
        year: i32,
        make: &str,
        model: &str,
        price: f64,
    ) -> Result<Car, ApiError> {
        require_non_blank("make", make)?;
        require_non_blank("model", model)?;

        let mut car = self
            .store
            .get_car(id)
            .ok_or_else(|| ApiError::NotFound(format!("car not found: {}", id)))?;

        car.year = year;
        car.make = make.trim().to_string();
        car.model = model.trim().to_string();
        car.price = price;

        self.store.put_car(car.clone())?;
        tracing::debug!(id = %car.id, "updated car");
        Ok(car)
    }

    /// Removes a person and cascades the delete to all cars it owns.
    ///
    /// Returns the removed person.
    pub fn delete_person(&mut self, id: &PersonId) -> Result<Person, ApiError> {
        let person = self.store.remove_person(id)?;
        let cascaded = self.store.remove_cars_of(id);
        tracing::info!(
            id = %person.id,
            cascaded = cascaded.len(),
            "deleted person"
        );
        Ok(person)
    }

    /// Removes a single car, returning it.
    pub fn delete_car(&mut self, id: &CarId) -> Result<Car, ApiError> {
        let car = self.store.remove_car(id)?;
        tracing::info!(id = %car.id, "deleted car");
        Ok(car)
    }
}

/// Rejects missing-in-spirit required fields: empty or whitespace-only.
fn require_non_blank(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!(
            "required field '{}' is blank",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use peoplecars_store::InMemoryStore;

    fn service() -> RegistryService<InMemoryStore> {
        RegistryService::new(InMemoryStore::new())
    }

    #[test]
    fn add_person_then_lookup_returns_same_names() {
        let mut svc = service();
        let person = svc.add_person("Ada", "Lovelace").unwrap();
        assert_eq!(person.id, PersonId::from("1"));

        let found = svc.person(&person.id).unwrap();
        assert_eq!(found.first_name, "Ada");
        assert_eq!(found.last_name, "Lovelace");
    }

    #[test]
    fn add_person_blank_name_is_validation_error() {
        let mut svc = service();
        let err = svc.add_person("  ", "Lovelace").unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn add_car_requires_existing_owner() {
        let mut svc = service();
        let err = svc
            .add_car(1990, "Ford", "Taurus", 5000.0, PersonId::from("1"))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn delete_person_cascades_to_owned_cars() {
        let mut svc = service();
        let owner = svc.add_person("Ada", "Lovelace").unwrap();
        let other = svc.add_person("Grace", "Hopper").unwrap();
        svc.add_car(1990, "Ford", "Taurus", 5000.0, owner.id.clone())
            .unwrap();
        svc.add_car(2001, "Honda", "Civic", 8000.0, other.id.clone())
            .unwrap();

        svc.delete_person(&owner.id).unwrap();

        assert!(svc
            .cars()
            .iter()
            .all(|c| c.person_id != owner.id));
        assert_eq!(svc.cars().len(), 1);
    }

    #[test]
    fn delete_person_unknown_id_is_not_found() {
        let mut svc = service();
        let err = svc.delete_person(&PersonId::from("42")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn person_with_cars_unknown_id_is_empty_not_error() {
        let svc = service();
        assert!(svc.person_with_cars(&PersonId::from("42")).is_none());
    }

    #[test]
    fn person_with_cars_attaches_only_owned_cars() {
        let mut svc = service();
        let owner = svc.add_person("Ada", "Lovelace").unwrap();
        let other = svc.add_person("Grace", "Hopper").unwrap();
        svc.add_car(1990, "Ford", "Taurus", 5000.0, owner.id.clone())
            .unwrap();
        svc.add_car(2001, "Honda", "Civic", 8000.0, other.id.clone())
            .unwrap();

        let nested = svc.person_with_cars(&owner.id).unwrap();
        assert_eq!(nested.cars.len(), 1);
        assert_eq!(nested.cars[0].make, "Ford");
    }

    #[test]
    fn update_person_changes_only_supplied_fields() {
        let mut svc = service();
        let person = svc.add_person("Ada", "Lovelace").unwrap();

        let updated = svc
            .update_person(&person.id, None, Some("Byron"))
            .unwrap();
        assert_eq!(updated.first_name, "Ada");
        assert_eq!(updated.last_name, "Byron");
    }

    #[test]
    fn update_person_blank_field_is_validation_error() {
        let mut svc = service();
        let person = svc.add_person("Ada", "Lovelace").unwrap();

        let err = svc
            .update_person(&person.id, Some("  "), None)
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        // The record is untouched.
        let stored = svc.person(&person.id).unwrap();
        assert_eq!(stored.first_name, "Ada");
    }

    #[test]
    fn update_car_blank_make_is_validation_error() {
        let mut svc = service();
        let owner = svc.add_person("Ada", "Lovelace").unwrap();
        let car = svc
            .add_car(1990, "Ford", "Taurus", 5000.0, owner.id.clone())
            .unwrap();

        let err = svc
            .update_car(&car.id, 1992, "", "Accord", 6500.0)
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(svc.car(&car.id).unwrap().make, "Ford");
    }

    #[test]
    fn update_car_unknown_id_is_not_found() {
        let mut svc = service();
        let err = svc
            .update_car(&CarId::from("9"), 1991, "Ford", "Taurus", 4000.0)
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn update_car_replaces_all_fields_but_keeps_owner() {
        let mut svc = service();
        let owner = svc.add_person("Ada", "Lovelace").unwrap();
        let car = svc
            .add_car(1990, "Ford", "Taurus", 5000.0, owner.id.clone())
            .unwrap();

        let updated = svc
            .update_car(&car.id, 1992, "Honda", "Accord", 6500.0)
            .unwrap();
        assert_eq!(updated.year, 1992);
        assert_eq!(updated.make, "Honda");
        assert_eq!(updated.price, 6500.0);
        assert_eq!(updated.person_id, owner.id);
    }

    #[test]
    fn delete_car_removes_single_record() {
        let mut svc = service();
        let owner = svc.add_person("Ada", "Lovelace").unwrap();
        let car = svc
            .add_car(1990, "Ford", "Taurus", 5000.0, owner.id.clone())
            .unwrap();

        let removed = svc.delete_car(&car.id).unwrap();
        assert_eq!(removed.id, car.id);
        assert!(svc.cars().is_empty());
        // The owner is untouched.
        assert!(svc.person(&owner.id).is_some());
    }
}
