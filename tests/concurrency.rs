//! Concurrent access tests for the users API.

use std::collections::HashSet;
use std::time::Instant;

use users_sdk::StatusCode;

mod common;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_case_variants_create_once() {
    let server = common::start_server(&[]).await;

    let variants = ["maria", "Maria", "MARIA", "mAria", "maRia", "marIa", "mariA", "MaRiA"];
    let mut tasks = Vec::new();
    for name in variants {
        let client = server.client();
        tasks.push(tokio::spawn(async move { client.create_user(name).await.unwrap() }));
    }

    let mut created = 0;
    for task in tasks {
        let reply = task.await.unwrap();
        if reply.status == StatusCode::CREATED {
            created += 1;
        } else {
            assert_eq!(reply.status, StatusCode::FORBIDDEN);
            assert_eq!(reply.message, "O nome de usuário já existe no banco de dados");
        }
    }

    assert_eq!(created, 1);
    assert_eq!(server.client().list_users().await.unwrap().len(), 1);

    server.stop().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_distinct_creates_all_land() {
    let server = common::start_server(&[]).await;

    let concurrency = 10;
    let creates_per_task = 20;
    let start = Instant::now();

    let mut tasks = Vec::new();
    for t in 0..concurrency {
        let client = server.client();
        tasks.push(tokio::spawn(async move {
            let mut accepted = 0;
            for i in 0..creates_per_task {
                let reply = client.create_user(&format!("user-{t}-{i}")).await.unwrap();
                if reply.status == StatusCode::CREATED {
                    accepted += 1;
                }
            }
            accepted
        }));
    }

    let mut accepted = 0;
    for task in tasks {
        accepted += task.await.unwrap();
    }

    let users = server.client().list_users().await.unwrap();
    let unique: HashSet<_> = users.iter().map(|u| u.to_lowercase()).collect();

    println!(
        "{} creates across {} tasks in {:?}",
        accepted,
        concurrency,
        start.elapsed()
    );

    assert_eq!(accepted, concurrency * creates_per_task);
    assert_eq!(users.len(), accepted);
    assert_eq!(unique.len(), users.len());

    server.stop().await.unwrap();
}
