use serde::{Deserialize, Serialize};

use crate::domain::types::{SpecialtyId, SpecialtyName, VetId, VetName};

/// Area of expertise a veterinarian can hold.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Specialty {
    pub id: SpecialtyId,
    pub name: SpecialtyName,
}

/// Veterinarian with the specialties they practice.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Vet {
    pub id: VetId,
    pub first_name: VetName,
    pub last_name: VetName,
    /// Sorted by name.
    pub specialties: Vec<Specialty>,
}

impl Vet {
    #[must_use]
    pub fn new(
        id: VetId,
        first_name: VetName,
        last_name: VetName,
        mut specialties: Vec<Specialty>,
    ) -> Self {
        specialties.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            id,
            first_name,
            last_name,
            specialties,
        }
    }

    pub fn nr_of_specialties(&self) -> usize {
        self.specialties.len()
    }
}

/// Top-level JSON document for the full veterinarian list.
///
/// Wrapping the sequence keeps the serialized shape an object rather than a
/// bare array.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Vets {
    pub vet_list: Vec<Vet>,
}

impl From<Vec<Vet>> for Vets {
    fn from(vet_list: Vec<Vet>) -> Self {
        Self { vet_list }
    }
}
