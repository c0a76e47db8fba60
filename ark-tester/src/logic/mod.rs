pub mod answers;
pub mod harness;
pub mod player;
pub mod reports;
pub mod scenarios;
pub mod tester;

pub use answers::AnswerKey;
pub use tester::*;
