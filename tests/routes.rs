use actix_web::{App, http::StatusCode, test, web};
use diesel::prelude::*;
use petclinic_vets::repository::DieselRepository;
use petclinic_vets::schema::vets;
use tera::Tera;

mod common;

macro_rules! init_app {
    ($test_db:expr) => {{
        let tera = Tera::new("templates/**/*").expect("templates");
        let repo = DieselRepository::new($test_db.pool().clone());
        test::init_service(
            App::new()
                .app_data(web::Data::new(tera))
                .app_data(web::Data::new(repo))
                .configure(petclinic_vets::configure),
        )
        .await
    }};
}

async fn body_text(resp: actix_web::dev::ServiceResponse) -> String {
    let body = test::read_body(resp).await;
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

#[actix_web::test]
async fn test_vet_resources_as_json() {
    let test_db = common::TestDb::new("test_vet_resources_as_json.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/vets").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let vets = body["vetList"].as_array().expect("vetList array");
    assert_eq!(vets.len(), 6);
    assert_eq!(vets[0]["firstName"], "James");
    assert_eq!(vets[0]["lastName"], "Carter");
    assert_eq!(vets[2]["specialties"][0]["name"], "dentistry");
}

#[actix_web::test]
async fn test_vet_list_second_page() {
    let test_db = common::TestDb::new("test_vet_list_second_page.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/vets.html?page=2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Sharon"));
    assert!(!body.contains("Carter"));
}

#[actix_web::test]
async fn test_vet_list_huge_page_is_empty() {
    let test_db = common::TestDb::new("test_vet_list_huge_page.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/vets.html?page=18446744073709551615")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(!body.contains("Carter"));
    assert!(!body.contains("Jenkins"));
    assert!(body.contains("href=\"/vets.html?page=2\""));
}

#[actix_web::test]
async fn test_vet_list_filtered_by_search() {
    let test_db = common::TestDb::new("test_vet_list_filtered.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/vets.html?search=ar")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Carter"));
    assert!(body.contains("Leary"));
    assert!(body.contains("Jenkins"));
    assert!(!body.contains("Douglas"));
}

#[actix_web::test]
async fn test_vet_list_rejects_non_numeric_page() {
    let test_db = common::TestDb::new("test_vet_list_rejects_page.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/vets.html?page=abc")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_find_form_renders() {
    let test_db = common::TestDb::new("test_find_form_renders.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/vets/search").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("name=\"lastName\""));
}

#[actix_web::test]
async fn test_search_without_criteria_asks_for_a_name() {
    let test_db = common::TestDb::new("test_search_without_criteria.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/vets/search-results?firstName=&lastName=%20")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Please enter a name to search"));
}

#[actix_web::test]
async fn test_search_without_matches_reports_it() {
    let test_db = common::TestDb::new("test_search_without_matches_route.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/vets/search-results?lastName=nonexistent-zzz")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("No vets found matching your criteria"));
    assert!(body.contains("nonexistent-zzz"));
}

#[actix_web::test]
async fn test_search_with_matches_renders_list() {
    let test_db = common::TestDb::new("test_search_with_matches.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/vets/search-results?lastName=Carter")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("James"));
    assert!(!body.contains("Leary"));
}

#[actix_web::test]
async fn test_search_results_page_links_keep_criteria() {
    let test_db = common::TestDb::new("test_search_results_page_links.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/vets/search-results?firstName=e&lastName=s")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("href=\"/vets/search-results?firstName=e&amp;lastName=s&amp;page=2\""));
    assert!(!body.contains("href=\"/vets.html?page=2\""));

    let req = test::TestRequest::get()
        .uri("/vets/search-results?firstName=e&lastName=s&page=2")
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(body.contains("Jenkins"));
    assert!(!body.contains("Carter"));
    assert!(body.contains("href=\"/vets/search-results?firstName=e&amp;lastName=s&amp;page=1\""));
}

#[actix_web::test]
async fn test_vet_list_page_links_keep_search() {
    let test_db = common::TestDb::new("test_vet_list_page_links.db");
    let app = init_app!(test_db);

    let mut conn = test_db.pool().get().unwrap();
    for i in 0..4 {
        diesel::insert_into(vets::table)
            .values((vets::first_name.eq(format!("Arlo{i}")), vets::last_name.eq("Smith")))
            .execute(&mut conn)
            .unwrap();
    }

    let req = test::TestRequest::get()
        .uri("/vets.html?search=ar")
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(body.contains("href=\"/vets.html?search=ar&amp;page=2\""));

    let req = test::TestRequest::get()
        .uri("/vets.html?search=%20ar")
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(body.contains("href=\"/vets.html?search=%20ar&amp;page=2\""));
}
