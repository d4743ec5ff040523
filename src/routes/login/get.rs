use axum::response::Html;
use axum_extra::extract::SignedCookieJar;

use crate::identity::IdentitySession;

use super::{page::render_login_page, status_cookie::restore_form};

#[tracing::instrument(
    name = "Render the login page",
    skip_all,
    fields(authenticated = identity.authenticated())
)]
pub async fn login_page(jar: SignedCookieJar, identity: IdentitySession) -> Html<String> {
    let form = restore_form(&jar);
    Html(render_login_page(&form, &identity))
}
