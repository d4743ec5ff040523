use crate::session_bootstrap::CookieMap;

pub const ACCESS_TOKEN_KEY: &str = "kcToken";

/// Storage the identity provider adapter restores its tokens from.
pub trait SessionPersistor {
    fn get_item(&self, key: &str) -> Option<&str>;
}

/// Read side of a cookie-backed persistor, seeded with the cookies of the
/// request being rendered.
#[derive(Debug, Clone, Default)]
pub struct SsrCookies {
    cookies: CookieMap,
}

impl SsrCookies {
    pub fn new(cookies: CookieMap) -> Self {
        Self { cookies }
    }
}

impl SessionPersistor for SsrCookies {
    fn get_item(&self, key: &str) -> Option<&str> {
        self.cookies.get(key).filter(|value| !value.is_empty())
    }
}
