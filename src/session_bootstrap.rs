use std::collections::BTreeMap;

use axum_extra::extract::CookieJar;
use http::HeaderMap;

/// Cookies sent with a request, keyed by cookie name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieMap(BTreeMap<String, String>);

impl CookieMap {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for CookieMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Extracts the cookies of an incoming request.
///
/// `None` stands for "no request at all" and yields an empty map, as does a
/// request without a `Cookie` header. Pairs that do not parse are dropped.
pub fn parse_cookies(headers: Option<&HeaderMap>) -> CookieMap {
    let Some(headers) = headers else {
        return CookieMap::default();
    };
    CookieJar::from_headers(headers)
        .iter()
        .map(|cookie| (cookie.name(), cookie.value()))
        .collect()
}
