pub mod models;
pub mod rules;
pub mod detection;
pub mod demo;
pub mod history;
pub mod triage;
pub mod remote;
pub mod reporting;

// Re-export commonly used items
pub use models::*;
pub use rules::*;
pub use detection::*;
pub use demo::*;
pub use history::*;
pub use triage::*;
pub use remote::*;
pub use reporting::*;
