//! Search pipeline tests: fixture catalog + MockModel → `CarSearch::search()`.

use carmatch_agent::testing::{listing, FailingCatalog, InMemoryCatalog, MockModel};
use carmatch_agent::CarSearch;
use carmatch_common::{CarMatchError, CarType};

fn red_suv_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(vec![listing("c1", "Toyota RAV4", CarType::Suv, &["red"])])
}

#[tokio::test]
async fn search_returns_the_matched_identifier() {
    let search = CarSearch::new(MockModel::returning("c1"), red_suv_catalog());

    let id = search.search("I like a red SUV").await.unwrap();
    assert_eq!(id, "c1");
}

#[tokio::test]
async fn search_trims_whitespace_around_the_identifier() {
    let search = CarSearch::new(MockModel::returning("  c1\n"), red_suv_catalog());

    let id = search.search("I like a red SUV").await.unwrap();
    assert_eq!(id, "c1");
}

#[tokio::test]
async fn search_maps_the_sentinel_to_not_found() {
    let search = CarSearch::new(
        MockModel::returning("Sorry, No car found for that description."),
        red_suv_catalog(),
    );

    let err = search.search("a submarine").await.unwrap_err();
    assert!(matches!(err, CarMatchError::NotFound));
}

#[tokio::test]
async fn search_sentinel_detection_is_case_insensitive() {
    let search = CarSearch::new(MockModel::returning("NO CAR FOUND"), red_suv_catalog());

    let err = search.search("a submarine").await.unwrap_err();
    assert!(matches!(err, CarMatchError::NotFound));
}

#[tokio::test]
async fn search_rejects_identifiers_outside_the_snapshot() {
    let search = CarSearch::new(MockModel::returning("c999"), red_suv_catalog());

    let err = search.search("I like a red SUV").await.unwrap_err();
    match err {
        CarMatchError::Extraction(message) => assert!(message.contains("c999")),
        other => panic!("expected Extraction, got {other:?}"),
    }
}

#[tokio::test]
async fn search_picks_among_multiple_listings() {
    let catalog = InMemoryCatalog::new(vec![
        listing("c1", "Toyota RAV4", CarType::Suv, &["red"]),
        listing("c2", "Honda Civic", CarType::Sedan, &["blue"]),
        listing("c3", "Ford Mustang", CarType::Sports, &["yellow"]),
    ]);
    let search = CarSearch::new(MockModel::returning("c3"), catalog);

    let id = search.search("a fast yellow sports car").await.unwrap();
    assert_eq!(id, "c3");
}

#[tokio::test]
async fn search_surfaces_catalog_failures_as_storage_errors() {
    let search = CarSearch::new(MockModel::returning("c1"), FailingCatalog);

    let err = search.search("I like a red SUV").await.unwrap_err();
    match err {
        CarMatchError::Storage(message) => assert!(message.contains("catalog unavailable")),
        other => panic!("expected Storage, got {other:?}"),
    }
}

#[tokio::test]
async fn search_surfaces_model_failures_as_model_invocation_errors() {
    let search = CarSearch::new(MockModel::failing("connection reset"), red_suv_catalog());

    let err = search.search("I like a red SUV").await.unwrap_err();
    assert!(matches!(err, CarMatchError::ModelInvocation(_)));
}

#[tokio::test]
async fn search_works_against_an_empty_catalog() {
    let search = CarSearch::new(
        MockModel::returning("No car found"),
        InMemoryCatalog::new(vec![]),
    );

    let err = search.search("anything at all").await.unwrap_err();
    assert!(matches!(err, CarMatchError::NotFound));
}
