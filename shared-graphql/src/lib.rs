pub mod documents;
pub mod envelope;
pub mod operations;

pub use envelope::{GraphQlError, GraphQlRequest, GraphQlResponse, InputVariables};
pub use operations::{GetAllMembers, HandleRegister, Operation};
