pub mod catalog;
pub mod extract;
pub mod generate;
pub mod prompts;
pub mod search;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod validate;

pub use generate::CarGenerator;
pub use search::CarSearch;
