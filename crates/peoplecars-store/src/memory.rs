//! In-memory implementation of [`RecordStore`].
//!
//! [`InMemoryStore`] holds both collections as `Vec`s so that list snapshots
//! preserve insertion order. Lookups are linear scans, which is the intended
//! cost model for a store this size.
//!
//! Ids come from per-collection monotonic counters rendered as decimal
//! strings. A counter only moves forward, so deleting a record never causes
//! its id to be reused -- unlike length-based assignment, which hands out a
//! duplicate id as soon as a non-tail record is deleted.

use peoplecars_core::{Car, CarId, Person, PersonId};

use crate::error::StoreError;
use crate::seed;
use crate::traits::RecordStore;

/// In-memory record store backed by ordered `Vec`s.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    people: Vec<Person>,
    cars: Vec<Car>,
    /// Next person id to allocate. Monotonic; never reset by deletion.
    next_person_id: u64,
    /// Next car id to allocate. Monotonic; never reset by deletion.
    next_car_id: u64,
}

impl InMemoryStore {
    /// Creates an empty store. The first allocated id in each collection
    /// is "1".
    pub fn new() -> Self {
        InMemoryStore {
            people: Vec::new(),
            cars: Vec::new(),
            next_person_id: 0,
            next_car_id: 0,
        }
    }

    /// Creates a store seeded with the static sample dataset.
    ///
    /// Counters start past the highest seeded id, so freshly inserted
    /// records never collide with seed records.
    pub fn with_sample_data() -> Self {
        let people = seed::sample_people();
        let cars = seed::sample_cars();
        InMemoryStore {
            next_person_id: people.len() as u64,
            next_car_id: cars.len() as u64,
            people,
            cars,
        }
    }
}

impl RecordStore for InMemoryStore {
    fn list_people(&self) -> Vec<Person> {
        self.people.clone()
    }

    fn get_person(&self, id: &PersonId) -> Option<Person> {
        self.people.iter().find(|p| &p.id == id).cloned()
    }

    fn insert_person(&mut self, first_name: &str, last_name: &str) -> Person {
        self.next_person_id += 1;
        let person = Person {
            id: PersonId(self.next_person_id.to_string()),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };
        self.people.push(person.clone());
        person
    }

    fn put_person(&mut self, person: Person) -> Result<(), StoreError> {
        let slot = self
            .people
            .iter_mut()
            .find(|p| p.id == person.id)
            .ok_or_else(|| StoreError::PersonNotFound(person.id.clone()))?;
        *slot = person;
        Ok(())
    }

    fn remove_person(&mut self, id: &PersonId) -> Result<Person, StoreError> {
        let index = self
            .people
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| StoreError::PersonNotFound(id.clone()))?;
        Ok(self.people.remove(index))
    }

    fn list_cars(&self) -> Vec<Car> {
        self.cars.clone()
    }

    fn get_car(&self, id: &CarId) -> Option<Car> {
        self.cars.iter().find(|c| &c.id == id).cloned()
    }

    fn insert_car(
        &mut self,
        year: i32,
        make: &str,
        model: &str,
        price: f64,
        person_id: PersonId,
    ) -> Car {
        self.next_car_id += 1;
        let car = Car {
            id: CarId(self.next_car_id.to_string()),
            year,
            make: make.to_string(),
            model: model.to_string(),
            price,
            person_id,
        };
        self.cars.push(car.clone());
        car
    }

    fn put_car(&mut self, car: Car) -> Result<(), StoreError> {
        let slot = self
            .cars
            .iter_mut()
            .find(|c| c.id == car.id)
            .ok_or_else(|| StoreError::CarNotFound(car.id.clone()))?;
        *slot = car;
        Ok(())
    }

    fn remove_car(&mut self, id: &CarId) -> Result<Car, StoreError> {
        let index = self
            .cars
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| StoreError::CarNotFound(id.clone()))?;
        Ok(self.cars.remove(index))
    }

    fn cars_of(&self, person_id: &PersonId) -> Vec<Car> {
        self.cars
            .iter()
            .filter(|c| &c.person_id == person_id)
            .cloned()
            .collect()
    }

    fn remove_cars_of(&mut self, person_id: &PersonId) -> Vec<Car> {
        let mut removed = Vec::new();
        self.cars.retain(|c| {
            if &c.person_id == person_id {
                removed.push(c.clone());
                false
            } else {
                true
            }
        });
        removed
    }
}
