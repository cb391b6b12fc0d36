//! Settle an async lookup into an outcome, including a lookup that panics
//! while pending.
//!
//! Run with `cargo run --example async_fetch --features async`.

use std::time::Duration;

use tri_outcome::prelude_async::*;

#[derive(Debug, Clone)]
struct User {
    id: u64,
    name: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(u64),
}

async fn fetch_user(id: u64) -> Outcome<User, ApiError> {
    async_result(|ok, err| async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        match id {
            1 => ok(User { id, name: "ada".to_string() }),
            13 => panic!("connection pool poisoned"),
            _ => err(ApiError::NotFound(id)),
        }
    })
    .await
}

#[tokio::main]
async fn main() {
    for id in [1, 2, 13] {
        let line = fetch_user(id).await.match_with(
            |user| format!("user {} is {}", user.id, user.name),
            |err| format!("lookup failed: {err:?}"),
            |msg| format!("lookup panicked: {msg}"),
        );
        println!("{line}");
    }
}
