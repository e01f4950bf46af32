mod commands;
mod error;
pub mod integrity;
mod persist;
mod propagation;
mod storage;
mod transaction;
pub mod validator;

pub use commands::AssemblyCommand;
pub use error::{AssemblyError, AttachRejection};
pub use propagation::{propagate, relative_offset};
pub use storage::PartsStorage;
pub use transaction::DragTransaction;
pub use validator::{can_attach, would_form_cycle};
