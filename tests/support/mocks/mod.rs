// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod storage;
pub mod store;
pub mod time;

// 時刻関連
pub use time::{FixedClock, fixed_now};

// 認証関連
pub use security::{DummyIdentityVerifier, EXPIRED_TOKEN, OTHER_TOKEN, OTHER_USER, TEST_TOKEN, TEST_USER};

// ストレージ関連
pub use storage::MemoryStorage;

// リポジトリ関連
pub use store::InMemoryStore;
