use crate::locations::catalogue::{CatalogueError, CatalogueLocationProvider, SeedCatalogue};
use crate::locations::consts::GENERIC_CLUE;
use crate::locations::endpoint;
use crate::locations::models::Media;
use crate::locations::pexels::{video_to_location, PexelsLocationProvider, PexelsVideo};
use crate::locations::provider::{LocationProvider, ProviderError};
use crate::locations::testing::fake_seed;
use crate::locations::unsplash::UnsplashLocationProvider;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::io::Cursor;
use std::path::Path;
use url::Url;

async fn spawn_mock_api(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind the mock API listener.");
    let address = listener
        .local_addr()
        .expect("Failed to get the mock API address.");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock API server failed.");
    });
    Url::parse(&format!("http://{address}")).expect("Failed to construct the mock API URL.")
}

fn single_seed_catalogue() -> SeedCatalogue {
    SeedCatalogue::new(vec![fake_seed("Cairo", 30.0444, 31.2357)])
        .expect("Failed to construct the catalogue.")
}

#[test]
fn test_catalogue_is_read_line_by_line() {
    let file = "\
{\"name\":\"Paris, France\",\"search\":\"paris\",\"lat\":48.8566,\"lng\":2.3522}

{\"name\":\"Tokyo, Japan\",\"search\":\"tokyo\",\"lat\":35.6762,\"lng\":139.6503,\
\"imageUrl\":\"https://img.test/tokyo.jpg\",\"description\":\"A bustling metropolis\"}
";
    let catalogue = SeedCatalogue::from_reader(Cursor::new(file)).expect("Valid catalogue.");

    assert_eq!(catalogue.seeds().len(), 2);
    assert_eq!(catalogue.seeds()[0].image_url, None);
    assert_eq!(
        catalogue.seeds()[1].description.as_deref(),
        Some("A bustling metropolis")
    );
}

#[test]
fn test_catalogue_reports_the_broken_line() {
    let file = "{\"name\":\"Paris\",\"search\":\"paris\",\"lat\":48.8,\"lng\":2.3}\nnot json\n";
    let err = SeedCatalogue::from_reader(Cursor::new(file)).unwrap_err();
    assert!(matches!(err, CatalogueError::Parse { line: 2, .. }), "{err:?}");
}

#[test]
fn test_catalogue_rejects_out_of_range_coordinates() {
    let err = SeedCatalogue::new(vec![
        fake_seed("Paris", 48.8566, 2.3522),
        fake_seed("Nowhere", 123.0, 0.0),
    ])
    .unwrap_err();
    assert!(matches!(err, CatalogueError::InvalidCoordinates { line: 2, .. }));
}

#[test]
fn test_catalogue_must_not_be_empty() {
    assert!(matches!(
        SeedCatalogue::new(vec![]),
        Err(CatalogueError::Empty)
    ));
    assert!(matches!(
        SeedCatalogue::from_reader(Cursor::new("\n\n")),
        Err(CatalogueError::Empty)
    ));
}

#[test]
fn test_bundled_example_catalogue_loads() {
    let catalogue = SeedCatalogue::from_path(Path::new("locations.example.ndjson"))
        .expect("The example catalogue should be valid.");
    assert!(catalogue
        .seeds()
        .iter()
        .all(|seed| seed.image_url.is_some() && seed.description.is_some()));
    assert!(catalogue
        .seeds()
        .iter()
        .all(|seed| !seed.description.as_deref().unwrap_or_default().contains(&seed.name)));
}

#[test]
fn test_endpoint_keeps_the_base_path() {
    let base = Url::parse("https://api.pexels.com/videos").unwrap();
    assert_eq!(
        endpoint(&base, "search").unwrap().as_str(),
        "https://api.pexels.com/videos/search"
    );
    let base = Url::parse("https://api.unsplash.com/").unwrap();
    assert_eq!(
        endpoint(&base, "search/photos").unwrap().as_str(),
        "https://api.unsplash.com/search/photos"
    );
}

#[tokio::test]
async fn test_catalogue_provider_serves_catalogue_images() {
    let provider = CatalogueLocationProvider::new(single_seed_catalogue());

    let first = provider.fetch_random_location().await.expect("A location.");
    let second = provider.fetch_random_location().await.expect("A location.");

    assert_eq!(first.name, "Cairo");
    assert_eq!(
        first.media,
        Media::Image {
            url: String::from("https://img.test/cairo.jpg")
        }
    );
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_catalogue_provider_needs_images() {
    let mut seed = fake_seed("Cairo", 30.0444, 31.2357);
    seed.image_url = None;
    let catalogue = SeedCatalogue::new(vec![seed]).unwrap();
    let provider = CatalogueLocationProvider::new(catalogue);

    let err = provider.fetch_random_location().await.unwrap_err();
    assert!(matches!(err, ProviderError::NoResults(_)));
}

#[tokio::test]
async fn test_unsplash_without_access_key_fails() {
    let api_url = Url::parse("http://127.0.0.1:9").unwrap();
    let provider = UnsplashLocationProvider::new(&api_url, None, single_seed_catalogue()).unwrap();

    let err = provider.fetch_random_location().await.unwrap_err();
    assert!(matches!(err, ProviderError::MissingCredentials("UNSPLASH_ACCESS_KEY")));
}

#[tokio::test]
async fn test_unsplash_photo_becomes_a_location() {
    let router = Router::new().route(
        "/search/photos",
        get(|headers: HeaderMap| async move {
            assert_eq!(headers["authorization"], "Client-ID test-key");
            assert_eq!(headers["accept-version"], "v1");
            Json(json!({
                "results": [{
                    "id": "abc123",
                    "urls": { "regular": "https://images.test/abc123.jpg" },
                    "alt_description": "sand dunes under a blue sky"
                }]
            }))
        }),
    );
    let api_url = spawn_mock_api(router).await;
    let provider = UnsplashLocationProvider::new(
        &api_url,
        Some(String::from("test-key")),
        single_seed_catalogue(),
    )
    .unwrap();

    let location = provider.fetch_random_location().await.expect("A location.");

    assert_eq!(location.id, "unsplash-abc123");
    assert_eq!(location.name, "Cairo");
    assert_eq!(location.description, "sand dunes under a blue sky");
    assert_eq!(
        location.media,
        Media::Image {
            url: String::from("https://images.test/abc123.jpg")
        }
    );
}

#[tokio::test]
async fn test_unsplash_photo_without_alt_text_gets_a_generic_clue() {
    let router = Router::new().route(
        "/search/photos",
        get(|| async {
            Json(json!({
                "results": [{
                    "id": "abc123",
                    "urls": { "regular": "https://images.test/abc123.jpg" },
                    "alt_description": null
                }]
            }))
        }),
    );
    let api_url = spawn_mock_api(router).await;
    let provider = UnsplashLocationProvider::new(
        &api_url,
        Some(String::from("test-key")),
        single_seed_catalogue(),
    )
    .unwrap();

    let location = provider.fetch_random_location().await.expect("A location.");
    assert_eq!(location.description, GENERIC_CLUE);
}

#[tokio::test]
async fn test_unsplash_empty_results_and_api_errors_are_reported() {
    let router = Router::new()
        .route(
            "/empty/search/photos",
            get(|| async { Json(json!({ "results": [] })) }),
        )
        .route(
            "/denied/search/photos",
            get(|| async { (StatusCode::UNAUTHORIZED, "OAuth error") }),
        )
        .route(
            "/garbage/search/photos",
            get(|| async { Json(json!({ "unexpected": true })) }),
        );
    let api_url = spawn_mock_api(router).await;
    let fetch = |path: &'static str| {
        let base = endpoint(&api_url, path).unwrap();
        async move {
            UnsplashLocationProvider::new(
                &base,
                Some(String::from("test-key")),
                single_seed_catalogue(),
            )
            .unwrap()
            .fetch_random_location()
            .await
            .unwrap_err()
        }
    };

    assert!(matches!(fetch("empty").await, ProviderError::NoResults(_)));
    assert!(matches!(
        fetch("denied").await,
        ProviderError::Api { status: 401, .. }
    ));
    assert!(matches!(fetch("garbage").await, ProviderError::Malformed(_)));
}

#[tokio::test]
async fn test_pexels_video_becomes_a_location() {
    let router = Router::new().route(
        "/videos/search",
        get(|headers: HeaderMap| async move {
            assert_eq!(headers["authorization"], "test-key");
            Json(json!({
                "videos": [{
                    "id": 42,
                    "image": "https://images.test/42.jpg",
                    "video_files": [
                        { "quality": null, "link": "https://videos.test/42-raw.mp4" },
                        { "quality": "hd", "link": "https://videos.test/42-hd.mp4" }
                    ]
                }]
            }))
        }),
    );
    let api_url = endpoint(&spawn_mock_api(router).await, "videos").unwrap();
    let provider = PexelsLocationProvider::new(
        &api_url,
        Some(String::from("test-key")),
        single_seed_catalogue(),
    )
    .unwrap();

    let location = provider.fetch_random_location().await.expect("A location.");

    assert_eq!(location.id, "pexels-42");
    assert_eq!(location.description, GENERIC_CLUE);
    assert_eq!(
        location.media,
        Media::Video {
            url: String::from("https://videos.test/42-hd.mp4"),
            poster_url: String::from("https://images.test/42.jpg"),
        }
    );
}

#[test]
fn test_pexels_video_falls_back_to_the_first_file() {
    let video: PexelsVideo = serde_json::from_value(json!({
        "id": 7,
        "image": "https://images.test/7.jpg",
        "video_files": [
            { "quality": "uhd", "link": "https://videos.test/7-uhd.mp4" },
            { "quality": "uhd", "link": "https://videos.test/7-uhd-2.mp4" }
        ]
    }))
    .unwrap();
    let seed = fake_seed("Cairo", 30.0444, 31.2357);

    let location = video_to_location(&video, &seed).unwrap();
    assert!(matches!(
        location.media,
        Media::Video { ref url, .. } if url == "https://videos.test/7-uhd.mp4"
    ));
}

#[test]
fn test_pexels_video_without_files_is_malformed() {
    let video = PexelsVideo {
        id: 7,
        image: String::from("https://images.test/7.jpg"),
        video_files: vec![],
    };
    let seed = fake_seed("Cairo", 30.0444, 31.2357);

    assert!(matches!(
        video_to_location(&video, &seed),
        Err(ProviderError::Malformed(_))
    ));
}
