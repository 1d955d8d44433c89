//! Contract tests against a real Postgres.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -- --ignored`.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use greenmesh_core::dto::dispatch::{CreateDispatchPlan, CreateDispatchPlanDetail};
use greenmesh_core::dto::master_data::AssetFilter;
use greenmesh_core::domain::timeseries::Measurement;
use greenmesh_server::repository::{asset_repository, dispatch_repository, timeseries_repository};
use greenmesh_server::{api, db, seed};
use rust_decimal_macros::dec;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPool::connect(&url).await.unwrap();
    db::run_migrations(&pool).await.unwrap();
    pool
}

/// Positive id no other test run will reuse
fn unique_id() -> i64 {
    (uuid::Uuid::new_v4().as_u128() >> 66) as i64
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn sample(point_id: i64, ts: DateTime<Utc>, value: i64) -> Measurement {
    Measurement {
        point_id,
        ts,
        value: Some(value.into()),
        quality_flag: Some("GOOD".to_string()),
        agg_level: Some("raw".to_string()),
    }
}

async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn seeder_is_idempotent() {
    let pool = pool().await;

    let first = seed::seed_demo_data(&pool).await.unwrap();
    let second = seed::seed_demo_data(&pool).await.unwrap();

    assert_eq!(first, second);

    let assets = asset_repository::list(
        &pool,
        &AssetFilter {
            park_id: Some(first.park_id),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let names: Vec<_> = assets.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names.iter().filter(|n| **n == seed::DEMO_PV_NAME).count(),
        1
    );
    assert_eq!(
        names.iter().filter(|n| **n == seed::DEMO_BESS_NAME).count(),
        1
    );
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn assets_are_filtered_by_park() {
    let pool = pool().await;
    let ids = seed::seed_demo_data(&pool).await.unwrap();

    let (status, body) = call(
        api::create_router(pool),
        Request::builder()
            .uri(format!("/api/assets?parkId={}&assetType=", ids.park_id))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let assets = body.as_array().unwrap();
    assert!(assets.len() >= 2);
    assert!(assets.iter().all(|a| a["parkId"] == ids.park_id));

    let ids: Vec<i64> = assets.iter().map(|a| a["id"].as_i64().unwrap()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn plan_round_trip_orders_details() {
    let pool = pool().await;
    let start: DateTime<Utc> = "2030-01-01T00:00:00Z".parse().unwrap();

    let detail = |minutes: i64, asset_id: i64| CreateDispatchPlanDetail {
        ts: start + Duration::minutes(minutes),
        asset_id,
        p_set_kw: Some(dec!(100)),
        q_set_kvar: None,
        heat_set_mw: None,
        soc_target: None,
    };

    let req = CreateDispatchPlan {
        park_id: 1,
        horizon_start: start,
        horizon_end: start + Duration::hours(1),
        interval_min: Some(15),
        strategy_profile_id: None,
        status: None,
        details: vec![detail(15, 2), detail(0, 9), detail(0, 3), detail(15, 1)],
    };

    let plan_id = dispatch_repository::create_with_details(&pool, &req, "DRAFT")
        .await
        .unwrap();
    let plan = dispatch_repository::find_by_id(&pool, plan_id)
        .await
        .unwrap()
        .unwrap();
    let details = dispatch_repository::find_details(&pool, plan_id).await.unwrap();

    assert_eq!(plan.status, "DRAFT");
    let order: Vec<(i64, i64)> = details
        .iter()
        .map(|d| ((d.ts - start).num_minutes(), d.asset_id))
        .collect();
    assert_eq!(order, vec![(0, 3), (0, 9), (15, 1), (15, 2)]);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn unknown_plan_is_not_found() {
    let pool = pool().await;

    let (status, body) = call(
        api::create_router(pool),
        Request::builder()
            .uri("/api/dispatch/plans/9223372036854775807")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].is_string());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn default_admin_can_log_in() {
    let pool = pool().await;
    db::ensure_default_user(&pool).await.unwrap();

    let login = |password: &str| {
        Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "username": "admin", "password": password }).to_string(),
            ))
            .unwrap()
    };

    let (status, body) = call(api::create_router(pool.clone()), login("admin123")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"], json!({ "username": "admin", "role": "admin" }));
    assert!(uuid_like(body["token"].as_str().unwrap()));
    assert!(body["issuedAt"].is_string());

    let (status, body) = call(api::create_router(pool), login("wrong")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": "invalid username or password" }));
}

fn uuid_like(token: &str) -> bool {
    token.len() == 36 && token.chars().filter(|c| *c == '-').count() == 4
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn failed_detail_rolls_back_plan_header() {
    let pool = pool().await;
    let park_id = unique_id();

    let (status, _) = call(
        api::create_router(pool.clone()),
        post_json(
            "/api/dispatch/plans",
            json!({
                "parkId": park_id,
                "horizonStart": "2030-01-01T00:00:00Z",
                "horizonEnd": "2030-01-01T01:00:00Z",
                "intervalMin": 15,
                "details": [
                    { "ts": "2030-01-01T00:00:00Z", "assetId": 1, "socTarget": 50 },
                    { "ts": "2030-01-01T00:15:00Z", "assetId": 1, "socTarget": 1e9 }
                ]
            }),
        ),
    )
    .await;

    // soc_target is NUMERIC(9, 4); the second detail overflows it
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (headers,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM dispatch_plan WHERE park_id = $1")
        .bind(park_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(headers, 0);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn created_plan_matches_fetched_plan() {
    let pool = pool().await;
    let park_id = unique_id();

    let (status, created) = call(
        api::create_router(pool.clone()),
        post_json(
            "/api/dispatch/plans",
            json!({
                "parkId": park_id,
                "horizonStart": "2030-01-01T00:00:00Z",
                "horizonEnd": "2030-01-01T00:30:00Z",
                "details": [
                    { "ts": "2030-01-01T00:15:00Z", "assetId": 4, "pSetKw": 120.5 },
                    { "ts": "2030-01-01T00:00:00Z", "assetId": 4, "pSetKw": 100 }
                ]
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["plan"]["status"], "DRAFT");
    assert_eq!(created["plan"]["parkId"], park_id);
    assert_eq!(created["details"].as_array().unwrap().len(), 2);

    let plan_id = created["plan"]["id"].as_i64().unwrap();
    let (status, fetched) = call(
        api::create_router(pool),
        get(&format!("/api/dispatch/plans/{plan_id}")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created, fetched);
    assert_eq!(fetched["details"][0]["ts"], "2030-01-01T00:00:00Z");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn measurement_range_is_inclusive() {
    let pool = pool().await;
    let point_id = unique_id();
    let start: DateTime<Utc> = "2031-03-01T00:00:00Z".parse().unwrap();

    let samples: Vec<_> = (-1..=3)
        .map(|i| sample(point_id, start + Duration::minutes(10 * i), i))
        .collect();
    timeseries_repository::insert_measurements(&pool, &samples).await.unwrap();

    let uri = format!(
        "/api/timeseries/measurements?pointId={point_id}&start=2031-03-01T00:00:00Z&end=2031-03-01T00:20:00Z&limit="
    );
    let (status, body) = call(api::create_router(pool), get(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    let stamps: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["ts"].as_str().unwrap())
        .collect();
    assert_eq!(
        stamps,
        vec![
            "2031-03-01T00:00:00Z",
            "2031-03-01T00:10:00Z",
            "2031-03-01T00:20:00Z"
        ]
    );
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn latest_returns_one_row_per_point() {
    let pool = pool().await;
    let first = unique_id();
    let second = unique_id();
    let tie: DateTime<Utc> = "2031-04-01T12:00:00Z".parse().unwrap();

    timeseries_repository::insert_measurements(
        &pool,
        &[
            sample(first, tie - Duration::minutes(5), 1),
            sample(first, tie, 2),
            sample(first, tie, 3),
            sample(second, tie - Duration::hours(1), 7),
        ],
    )
    .await
    .unwrap();

    let latest = timeseries_repository::find_latest(&pool, &[first, second])
        .await
        .unwrap();

    assert_eq!(latest.len(), 2);
    let of = |id: i64| latest.iter().find(|m| m.point_id == id).unwrap();
    assert_eq!(of(first).ts, tie);
    // Same timestamp: the row inserted last wins
    assert_eq!(of(first).value, Some(dec!(3)));
    assert_eq!(of(second).value, Some(dec!(7)));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn carbon_factors_filter_by_active_day() {
    let pool = pool().await;
    let region = format!("test-region-{}", unique_id());

    for (from, to) in [
        ("2024-01-01", None),
        ("2024-01-01", Some("2024-12-31")),
        ("2031-01-01", None),
    ] {
        sqlx::query(
            r#"
            INSERT INTO dim_carbon_factor (region, energy_type, factor_value, unit, effective_from, effective_to)
            VALUES ($1, 'ELEC', 0.5703, 'tCO2/MWh', $2, $3)
            "#,
        )
        .bind(&region)
        .bind(from.parse::<NaiveDate>().unwrap())
        .bind(to.map(|d| d.parse::<NaiveDate>().unwrap()))
        .execute(&pool)
        .await
        .unwrap();
    }

    let active = |day: &str| {
        let uri = format!("/api/carbon-factors?region={region}&activeOn={day}");
        let app = api::create_router(pool.clone());
        async move {
            let (status, body) = call(app, get(&uri)).await;
            assert_eq!(status, StatusCode::OK);
            body.as_array()
                .unwrap()
                .iter()
                .map(|f| f["effectiveTo"].as_str().map(str::to_string))
                .collect::<Vec<_>>()
        }
    };

    assert_eq!(active("2024-12-31").await, vec![None, Some("2024-12-31".to_string())]);
    assert_eq!(active("2025-01-01").await, vec![None]);
    assert_eq!(active("2023-12-31").await, Vec::<Option<String>>::new());
    assert_eq!(active("2031-01-01").await.len(), 2);
}
