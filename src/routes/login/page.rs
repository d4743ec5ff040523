use htmlescape::{encode_attribute, encode_minimal};

use crate::{identity::IdentitySession, login_form::LoginForm};

fn field_error(id: &str, message: Option<&String>) -> String {
    match message {
        None => "".into(),
        Some(message) => format!(
            r#"<p id="{id}-error" class="field-error"><i>{}</i></p>"#,
            encode_minimal(message)
        ),
    }
}

pub fn render_login_page(form: &LoginForm, identity: &IdentitySession) -> String {
    let banner_html = match form.failure_message() {
        None => "".into(),
        Some(message) => format!(r#"<p class="banner"><b>{}</b></p>"#, message),
    };
    let email = encode_attribute(form.email());
    let email_error = field_error("email", form.field_errors().email.as_ref());
    let password_error = field_error("password", form.field_errors().password.as_ref());
    let disabled = if form.is_interactive() { "" } else { " disabled" };
    let lock_on_submit = "this.querySelector('button[type=submit]').disabled = true;";
    let not = if identity.authenticated() { "" } else { "NOT " };
    let username_html = match identity.preferred_username() {
        None => "".into(),
        Some(username) => format!("<p>{}</p>", encode_minimal(username)),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">

<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>Login</title>
</head>

<body>
    <h3>Login using email/password</h3>
    {banner_html}
    <form action="/login" method="post" onsubmit="{lock_on_submit}">
        <label for="email">Email</label>
        <input id="email" type="text" placeholder="name@email.com" name="email" value="{email}">
        {email_error}
        <label for="password">Password</label>
        <input id="password" type="password" placeholder="Enter password" name="password">
        {password_error}
        <p><small>Never tell your password to anyone</small></p>
        <button type="submit"{disabled}>Login</button>
    </form>
    <form action="/login/keycloak" method="get">
        <button type="submit">Login using Keycloak</button>
    </form>
    <p>User is {not}authenticated</p>
    {username_html}
</body>

</html>"#,
    )
}
