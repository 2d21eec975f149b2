// Remote dataset loading against a mock HTTP server

use persona_quiz::services::{CollegeDataset, DatasetError};
use std::time::Duration;

#[tokio::test]
async fn test_load_dataset_from_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/colleges.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"colleges": [
                {"name": "Grinnell College", "url": "www.grinnell.edu", "state": "Iowa", "collegeType": "Private", "population": "1,800"},
                {"name": "Creighton University", "website": "www.creighton.edu", "state": "NE", "type": "Denominational", "enrollment": 8654}
            ]}"#,
        )
        .create_async()
        .await;

    let url = format!("{}/colleges.json", server.url());
    let dataset = CollegeDataset::load(&url, Duration::from_secs(5)).await.unwrap();

    mock.assert_async().await;
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.colleges()[0].website, "www.grinnell.edu");
    assert_eq!(dataset.colleges()[0].enrollment_count(), Some(1800));
    assert_eq!(dataset.colleges()[1].college_type, "Denominational");
}

#[tokio::test]
async fn test_load_dataset_http_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/colleges.json")
        .with_status(500)
        .create_async()
        .await;

    let url = format!("{}/colleges.json", server.url());
    let err = CollegeDataset::load(&url, Duration::from_secs(5)).await.unwrap_err();

    assert!(matches!(err, DatasetError::Http(status) if status.as_u16() == 500));
}

#[tokio::test]
async fn test_load_dataset_from_file() {
    let dataset = CollegeDataset::load("data/colleges.json", Duration::from_secs(5))
        .await
        .unwrap();

    assert!(!dataset.is_empty());
}
