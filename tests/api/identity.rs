use crate::helpers::{spawn_app, token_with_claims};

#[tokio::test]
async fn anonymous_visitors_are_not_authenticated() {
    let app = spawn_app().await;
    let html_page = app.get_login_html().await;
    assert!(html_page.contains("<p>User is NOT authenticated</p>"));
}

#[tokio::test]
async fn token_cookie_marks_the_user_as_authenticated() {
    let app = spawn_app().await;
    let token = token_with_claims(&serde_json::json!({
        "exp": chrono::Utc::now().timestamp() + 600,
        "preferred_username": "ursula",
    }));

    let html_page = app
        .get_login_html_with_cookie(&format!("theme=dark; kcToken={}", token))
        .await;
    assert!(html_page.contains("<p>User is authenticated</p>"));
    assert!(html_page.contains("<p>ursula</p>"));
}

#[tokio::test]
async fn expired_token_is_not_authenticated() {
    let app = spawn_app().await;
    let token = token_with_claims(&serde_json::json!({
        "exp": 1,
        "preferred_username": "ursula",
    }));

    let html_page = app
        .get_login_html_with_cookie(&format!("kcToken={}", token))
        .await;
    assert!(html_page.contains("<p>User is NOT authenticated</p>"));
}

#[tokio::test]
async fn garbage_cookies_are_tolerated() {
    let app = spawn_app().await;
    let html_page = app
        .get_login_html_with_cookie("kcToken=not-a-jwt; ;; =; broken")
        .await;
    assert!(html_page.contains("<p>User is NOT authenticated</p>"));
}
