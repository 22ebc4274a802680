//! Diesel models for veterinarians and their specialties.

use diesel::prelude::*;

use crate::domain::types::{SpecialtyId, SpecialtyName, TypeConstraintError, VetId, VetName};
use crate::domain::vet::{Specialty as DomainSpecialty, Vet as DomainVet};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::vets)]
/// Diesel model for [`crate::domain::vet::Vet`] without its specialties.
pub struct Vet {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::specialties)]
/// Diesel model for [`crate::domain::vet::Specialty`].
pub struct Specialty {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Queryable, Selectable, Associations, Identifiable)]
#[diesel(primary_key(vet_id, specialty_id))]
#[diesel(belongs_to(Vet, foreign_key = vet_id))]
#[diesel(belongs_to(Specialty, foreign_key = specialty_id))]
#[diesel(table_name = crate::schema::vet_specialties)]
/// Association table linking vets to specialties.
pub struct VetSpecialty {
    pub vet_id: i32,
    pub specialty_id: i32,
}

impl TryFrom<Specialty> for DomainSpecialty {
    type Error = TypeConstraintError;

    fn try_from(specialty: Specialty) -> Result<Self, Self::Error> {
        Ok(Self {
            id: SpecialtyId::new(specialty.id)?,
            name: SpecialtyName::new(specialty.name)?,
        })
    }
}

impl Vet {
    /// Builds the domain vet, attaching the specialties loaded for it.
    pub fn into_domain(
        self,
        specialties: Vec<Specialty>,
    ) -> Result<DomainVet, TypeConstraintError> {
        let specialties = specialties
            .into_iter()
            .map(DomainSpecialty::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DomainVet::new(
            VetId::new(self.id)?,
            VetName::new(self.first_name)?,
            VetName::new(self.last_name)?,
            specialties,
        ))
    }
}

impl TryFrom<Vet> for DomainVet {
    type Error = TypeConstraintError;

    fn try_from(vet: Vet) -> Result<Self, Self::Error> {
        vet.into_domain(Vec::new())
    }
}
