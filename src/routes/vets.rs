//! Routes listing and searching veterinarians.

use actix_web::{HttpResponse, Responder, get, web};
use tera::Tera;

use crate::dto::vets::{
    FindVetsPageData, VetListPageData, VetListQueryParams, VetSearchOutcome, VetSearchPageParams,
};
use crate::forms::field_messages;
use crate::forms::vets::VetSearchForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::vets::VetListService;

fn render_vet_list(tera: &Tera, data: &VetListPageData) -> HttpResponse {
    let mut context = base_context("vets");
    context.insert("vets", &data.vets);
    context.insert("page_links", &data.page_links);
    if let Some(search_query) = &data.search_query {
        context.insert("search_query", search_query);
    }

    render_template(tera, "vets/vet_list.html", &context)
}

fn render_find_vets(tera: &Tera, data: &FindVetsPageData) -> HttpResponse {
    let mut context = base_context("find_vets");
    context.insert("vet", &data.vet);
    context.insert("errors", &field_messages(&data.errors));

    render_template(tera, "vets/find_vets.html", &context)
}

/// Paginated vet table, optionally filtered by `search`.
#[get("/vets.html")]
pub async fn show_vet_list(
    params: web::Query<VetListQueryParams>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let service = VetListService::new(repo.get_ref());

    match service.list_vets(params.into_inner()) {
        Ok(data) => render_vet_list(&tera, &data),
        Err(err) => {
            log::error!("Failed to show the vet list: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Every vet as `{"vetList": [...]}`.
#[get("/vets")]
pub async fn show_resources_vet_list(repo: web::Data<DieselRepository>) -> impl Responder {
    let service = VetListService::new(repo.get_ref());

    match service.list_all_vets() {
        Ok(vets) => HttpResponse::Ok().json(vets),
        Err(err) => {
            log::error!("Failed to export vets: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/vets/search")]
pub async fn init_find_form(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let service = VetListService::new(repo.get_ref());

    render_find_vets(&tera, &service.init_search_form())
}

#[get("/vets/search-results")]
pub async fn process_find_form(
    form: web::Query<VetSearchForm>,
    params: web::Query<VetSearchPageParams>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let service = VetListService::new(repo.get_ref());

    match service.process_search_form(form.into_inner(), params.page) {
        Ok(VetSearchOutcome::Found(data)) => render_vet_list(&tera, &data),
        Ok(VetSearchOutcome::EmptyCriteria(data)) | Ok(VetSearchOutcome::NoMatches(data)) => {
            render_find_vets(&tera, &data)
        }
        Err(err) => {
            log::error!("Failed to search vets: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
