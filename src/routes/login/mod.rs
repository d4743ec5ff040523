mod get;
mod keycloak;
mod page;
mod post;
mod status_cookie;

pub use get::*;
pub use keycloak::*;
pub use page::render_login_page;
pub use post::*;
