pub(crate) mod session_context;
pub(crate) mod session_file;

pub use session_context::SessionContext;
