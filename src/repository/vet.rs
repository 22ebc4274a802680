//! Repository implementation for veterinarians.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    db::DbConnection,
    domain::vet::Vet,
    models::vet::{Specialty as DbSpecialty, Vet as DbVet, VetSpecialty as DbVetSpecialty},
    repository::{
        DieselRepository, PageRequest, VetListQuery, VetReader, VetSearchQuery,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::{specialties, vets},
};

/// Escape character for `LIKE` patterns built from user input.
const LIKE_ESCAPE: char = '\\';

/// Wraps `term` in `%` wildcards, escaping the wildcard characters it contains.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Loads specialties for `db_vets` and converts every row to the domain type.
fn attach_specialties(
    conn: &mut DbConnection,
    db_vets: Vec<DbVet>,
) -> RepositoryResult<Vec<Vet>> {
    let links = DbVetSpecialty::belonging_to(&db_vets)
        .inner_join(specialties::table)
        .select((DbVetSpecialty::as_select(), DbSpecialty::as_select()))
        .load::<(DbVetSpecialty, DbSpecialty)>(conn)?;

    links
        .grouped_by(&db_vets)
        .into_iter()
        .zip(db_vets)
        .map(|(links, db_vet)| {
            let specialties = links.into_iter().map(|(_, specialty)| specialty).collect();
            db_vet.into_domain(specialties).map_err(RepositoryError::from)
        })
        .collect()
}

/// Loads one page (or everything) from `query_builder`, returning the total too.
fn load_page<F>(
    conn: &mut DbConnection,
    query_builder: F,
    pagination: Option<PageRequest>,
) -> RepositoryResult<(usize, Vec<Vet>)>
where
    F: Fn() -> vets::BoxedQuery<'static, Sqlite>,
{
    let total = query_builder().count().get_result::<i64>(conn)? as usize;

    let mut items = query_builder().order(vets::id.asc());
    if let Some(page) = pagination {
        items = items.offset(page.offset()).limit(page.limit());
    }

    let db_vets = items.select(DbVet::as_select()).load::<DbVet>(conn)?;
    let vets = attach_specialties(conn, db_vets)?;

    Ok((total, vets))
}

impl VetReader for DieselRepository {
    fn list_vets(&self, query: VetListQuery) -> RepositoryResult<(usize, Vec<Vet>)> {
        let mut conn = self.conn()?;

        load_page(
            &mut conn,
            || vets::table.into_boxed::<Sqlite>(),
            query.pagination,
        )
    }

    fn search_vets(&self, query: VetSearchQuery) -> RepositoryResult<(usize, Vec<Vet>)> {
        let mut conn = self.conn()?;

        // SQLite's LIKE is case-insensitive for ASCII letters.
        let first = query.first_name.as_deref().map(contains_pattern);
        let last = query.last_name.as_deref().map(contains_pattern);

        let query_builder = || {
            let items = vets::table.into_boxed::<Sqlite>();
            match (first.clone(), last.clone()) {
                (Some(first), Some(last)) => items.filter(
                    vets::first_name
                        .like(first)
                        .escape(LIKE_ESCAPE)
                        .or(vets::last_name.like(last).escape(LIKE_ESCAPE)),
                ),
                (Some(first), None) => {
                    items.filter(vets::first_name.like(first).escape(LIKE_ESCAPE))
                }
                (None, Some(last)) => {
                    items.filter(vets::last_name.like(last).escape(LIKE_ESCAPE))
                }
                (None, None) => items,
            }
        };

        load_page(&mut conn, query_builder, query.pagination)
    }
}
