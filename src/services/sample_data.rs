//! Records loaded when `SEED_SAMPLE_DATA` is enabled.

use chrono::NaiveDate;

use crate::models::{Owner, Pet, PetType};

pub fn pet_types() -> Vec<PetType> {
    ["cat", "dog", "lizard", "snake", "bird", "hamster"]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| PetType::new(id, name))
        .collect()
}

pub fn owners() -> Vec<Owner> {
    [
        ("George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023"),
        ("Betty", "Davis", "638 Cardinal Ave.", "Sun Prairie", "6085551749"),
        ("Eduardo", "Rodriquez", "2693 Commerce St.", "McFarland", "6085558763"),
        ("Harold", "Davis", "563 Friendly St.", "Windsor", "6085553198"),
        ("Peter", "McTavish", "2387 S. Fair Way", "Madison", "6085552765"),
        ("Jean", "Coleman", "105 N. Lake St.", "Monona", "6085552654"),
        ("Jeff", "Black", "1450 Oak Blvd.", "Monona", "6085555387"),
        ("Maria", "Escobito", "345 Maple St.", "Madison", "6085557683"),
        ("David", "Schroeder", "2749 Blackhawk Trail", "Madison", "6085559435"),
        ("Carlos", "Estaban", "2335 Independence La.", "Waunakee", "6085555487"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((first, last, address, city, telephone), id)| Owner {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        telephone: telephone.to_string(),
    })
    .collect()
}

pub fn pets() -> Vec<Pet> {
    let types = pet_types();
    [
        ("Leo", (2010, 9, 7), 1, 1),
        ("Basil", (2012, 8, 6), 6, 2),
        ("Rosy", (2011, 4, 17), 2, 3),
        ("Jewel", (2010, 3, 7), 2, 3),
        ("Iggy", (2010, 11, 30), 3, 4),
        ("George", (2010, 1, 20), 4, 5),
        ("Samantha", (2012, 9, 4), 1, 6),
        ("Max", (2012, 9, 4), 1, 6),
        ("Lucky", (2011, 8, 6), 5, 7),
        ("Mulligan", (2007, 2, 24), 2, 8),
        ("Freddy", (2010, 3, 9), 5, 9),
        ("Lucky", (2010, 6, 24), 2, 10),
        ("Sly", (2012, 6, 8), 1, 10),
    ]
    .into_iter()
    .zip(1..)
    .filter_map(|((name, (y, m, d), type_id, owner_id), id)| {
        let birth_date = NaiveDate::from_ymd_opt(y, m, d)?;
        let pet_type = types.iter().find(|t| t.id == type_id)?.clone();
        let mut pet = Pet::new(name, birth_date, pet_type).with_owner(owner_id);
        pet.id = Some(id);
        Some(pet)
    })
    .collect()
}
