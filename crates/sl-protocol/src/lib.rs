pub mod catalog;
pub mod intent;
pub mod language;
pub mod messages;
pub mod topic;

pub use catalog::*;
pub use intent::*;
pub use language::*;
pub use messages::*;
pub use topic::*;
