pub mod members;

pub use members::Members;
