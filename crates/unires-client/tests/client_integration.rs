//! Integration tests for the pooled client and scorecard aggregation.

mod common;

use std::time::Duration;

use common::{TestDb, ASHA, BILAL, CHEN, DARA};
use unires_client::{Client, Error, PoolConfig};
use unires_core::{MarksTally, ResultFilter, ResultStatus, Tenths};

async fn client_for(db: &TestDb) -> Client {
    Client::connect(PoolConfig::new(db.client_config().read_only()).with_max_connections(4))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_reference_scorecard() {
    let db = TestDb::seeded();
    let client = client_for(&db).await;

    let card = client.scorecard(ASHA).await.unwrap();
    assert_eq!(card.name, "Asha Rao");
    assert_eq!(card.university, "Northfield University");
    assert_eq!(card.department, "Computer Science");
    assert_eq!(card.semester, 6);
    assert_eq!(card.year, 2021);
    assert_eq!(card.total_marks, MarksTally { obtained: 512, max: 600 });
    assert_eq!(card.percentage, Tenths::from_tenths(853));
    assert_eq!(card.cgpa, Tenths::from_tenths(85));
    assert_eq!(card.overall_status, ResultStatus::Pass);
    assert_eq!(card.rank, Some(4));
    assert_eq!(card.subjects[0].code, "CS101");
}

#[tokio::test]
async fn test_one_failed_subject_fails_scorecard() {
    let db = TestDb::seeded();
    let client = client_for(&db).await;

    let card = client.scorecard(BILAL).await.unwrap();
    // 45 + 30 + 70 over 300
    assert_eq!(card.total_marks.to_string(), "145/300");
    assert_eq!(card.percentage, Tenths::from_tenths(483));
    assert_eq!(card.cgpa, Tenths::from_tenths(48));
    assert_eq!(card.overall_status, ResultStatus::Fail);
    assert_eq!(card.rank, None);
}

#[tokio::test]
async fn test_zero_rank_is_unranked() {
    let db = TestDb::seeded();
    let client = client_for(&db).await;

    let card = client.scorecard(CHEN).await.unwrap();
    assert_eq!(card.rank, None);
    let json = serde_json::to_value(&card).unwrap();
    assert_eq!(json["rank"], "N/A");
}

#[tokio::test]
async fn test_student_without_results_gets_sentinel() {
    let db = TestDb::seeded();
    let client = client_for(&db).await;

    let card = client.scorecard(DARA).await.unwrap();
    assert!(card.subjects.is_empty());
    assert_eq!(card.total_marks, MarksTally::default());
    assert_eq!(card.percentage, Tenths::ZERO);
    assert_eq!(card.cgpa, Tenths::ZERO);
}

#[tokio::test]
async fn test_unknown_registration_number() {
    let db = TestDb::seeded();
    let client = client_for(&db).await;

    let err = client.scorecard("REG9999999").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Student not found");

    assert!(client.student("").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_stats() {
    let db = TestDb::seeded();
    let client = client_for(&db).await;

    let stats = client.stats().await.unwrap();
    assert_eq!(stats.total_universities, 3);
    assert_eq!(stats.total_students, 4);
    assert_eq!(stats.total_results, 11);
    // 10 / 11 = 90.909..
    assert_eq!(stats.pass_rate, Tenths::from_tenths(909));
}

#[tokio::test]
async fn test_stats_on_empty_store() {
    let db = TestDb::empty();
    let client = client_for(&db).await;

    let stats = client.stats().await.unwrap();
    assert_eq!(stats.total_results, 0);
    assert_eq!(stats.pass_rate, Tenths::ZERO);
}

#[tokio::test]
async fn test_results_and_universities() {
    let db = TestDb::seeded();
    let client = client_for(&db).await;

    assert_eq!(client.universities().await.unwrap().len(), 3);

    let rows = client
        .results(ResultFilter::new().with_university(1).with_year(2023))
        .await
        .unwrap();
    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|r| r.university == "Northfield University"));
}

#[tokio::test]
async fn test_init_schema_on_fresh_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = unires_client::ClientConfig::new(dir.path().join("new.db"));
    let client = Client::open(config).await.unwrap();

    assert_eq!(client.init_schema().await.unwrap(), unires_client::schema::SCHEMA_VERSION);
    assert!(client.universities().await.unwrap().is_empty());
    client.ping().await.unwrap();
}

#[tokio::test]
async fn test_read_only_client_cannot_init_schema() {
    let db = TestDb::empty();
    let client = client_for(&db).await;

    let err = client.init_schema().await.unwrap_err();
    assert!(matches!(err, Error::Store(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_share_pool() {
    let db = TestDb::seeded();
    let client = Client::connect(
        PoolConfig::new(db.client_config().read_only())
            .with_max_connections(2)
            .with_acquire_timeout(Duration::from_secs(10)),
    )
    .await
    .unwrap();

    let mut handles = Vec::new();
    for i in 0..16 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            if i % 2 == 0 {
                client.scorecard(ASHA).await.map(|c| c.total_marks.obtained)
            } else {
                client.stats().await.map(|s| s.total_results)
            }
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let value = handle.await.unwrap().unwrap();
        assert_eq!(value, if i % 2 == 0 { 512 } else { 11 });
    }
    assert!(client.pool().idle_connections() <= 2);
}

#[tokio::test]
async fn test_closed_client() {
    let db = TestDb::seeded();
    let client = client_for(&db).await;
    client.close();

    assert!(matches!(client.ping().await, Err(Error::PoolClosed)));
    assert!(matches!(client.scorecard(ASHA).await, Err(Error::PoolClosed)));
}
