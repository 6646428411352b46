use chrono::Utc;
use sqlx::sqlite::SqlitePoolOptions;

use villa_api::models::villa::{CreateVillaRequest, Villa};
use villa_api::repository::VillaRepository;
use villa_data::{DataError, Repository, SqlxRepository};

async fn repo() -> VillaRepository {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    VillaRepository::new(SqlxRepository::new(pool))
}

fn casa_bella() -> Villa {
    CreateVillaRequest {
        name: "Casa Bella".into(),
        details: "d".into(),
        rate: 120.5,
        sqft: 800,
        occupancy: 4,
        image_url: "x".into(),
        amenity: "pool".into(),
    }
    .into_villa()
}

#[tokio::test]
async fn save_assigns_identity_and_timestamps_on_insert() {
    let repo = repo().await;
    let created = repo.save(&casa_bella()).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.created_at, created.updated_at);
}

#[tokio::test]
async fn save_on_existing_id_returns_the_stored_row() {
    let repo = repo().await;
    let created = repo.save(&casa_bella()).await.unwrap();

    let mut changed = created.clone();
    changed.rate = 999.0;
    // Caller-side timestamps are not authoritative and must not leak back.
    changed.created_at = Utc::now();

    let saved = repo.save(&changed).await.unwrap();
    assert_eq!(saved.id, created.id);
    assert_eq!(saved.rate, 999.0);
    assert_eq!(saved.created_at, created.created_at);
    assert!(saved.updated_at >= created.updated_at);
}

#[tokio::test]
async fn save_on_unknown_id_is_not_found() {
    let repo = repo().await;
    let mut villa = casa_bella();
    villa.id = 42;
    let err = repo.save(&villa).await.unwrap_err();
    assert!(matches!(err, DataError::NotFound(_)));
}
