#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    HighScoreRecord, HighScoreRepository, InMemoryRepository, Storage, StorageError,
};
