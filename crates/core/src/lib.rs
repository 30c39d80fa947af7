#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod model;
pub mod random;
pub mod time;

pub use bank::{BankError, QuestionBank};
pub use error::Error;
pub use random::ShuffleSource;
pub use time::Clock;
