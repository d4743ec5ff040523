mod error_handlers;
mod health_check;
mod login;

pub use error_handlers::*;
pub use health_check::*;
pub use login::*;
