//! Static sample dataset loaded at startup.
//!
//! Ids are contiguous decimal strings starting at "1"; the store relies on
//! that to position its id counters past the seeded records.

use peoplecars_core::{Car, CarId, Person, PersonId};

/// The seeded people: three well-known owners.
pub fn sample_people() -> Vec<Person> {
    [
        ("1", "Bill", "Gates"),
        ("2", "Steve", "Jobs"),
        ("3", "Linus", "Torvalds"),
    ]
    .into_iter()
    .map(|(id, first, last)| Person {
        id: PersonId::from(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
    })
    .collect()
}

/// The seeded cars: three per person.
pub fn sample_cars() -> Vec<Car> {
    [
        ("1", 2019, "Honda", "Accord", 22_000.0, "1"),
        ("2", 2018, "Lexus", "350 GS", 32_000.0, "1"),
        ("3", 2017, "Honda", "Civic", 20_000.0, "1"),
        ("4", 2019, "Acura", "ILX", 22_000.0, "2"),
        ("5", 2018, "Honda", "Accord", 20_000.0, "2"),
        ("6", 2017, "Honda", "Accord", 18_000.0, "2"),
        ("7", 2019, "Ford", "Explorer", 32_000.0, "3"),
        ("8", 2018, "Volkswagen", "Golf", 28_000.0, "3"),
        ("9", 2017, "Volkswagen", "Golf", 28_000.0, "3"),
    ]
    .into_iter()
    .map(|(id, year, make, model, price, owner)| Car {
        id: CarId::from(id),
        year,
        make: make.to_string(),
        model: model.to_string(),
        price,
        person_id: PersonId::from(owner),
    })
    .collect()
}
