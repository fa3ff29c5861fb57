use gloo_net::http;
use web_sys::FormData;

use crate::error::{Error, Http};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    /// Parses a trigger or form `method` attribute. Missing and unrecognized
    /// verbs fall back to `GET`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None => Self::Get,
            Some(value) if value.eq_ignore_ascii_case("get") => Self::Get,
            Some(value) if value.eq_ignore_ascii_case("post") => Self::Post,
            Some(value) if value.eq_ignore_ascii_case("put") => Self::Put,
            Some(value) if value.eq_ignore_ascii_case("delete") => Self::Delete,
            Some(value) if value.eq_ignore_ascii_case("patch") => Self::Patch,
            Some(value) => {
                leptos::logging::warn!("unrecognized request method `{value}`, using GET");
                Self::Get
            }
        }
    }

    fn carries_body(self) -> bool {
        !matches!(self, Self::Get)
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Put => http::Method::PUT,
            Method::Delete => http::Method::DELETE,
            Method::Patch => http::Method::PATCH,
        }
    }
}

/// Request payload: a collected form, or the raw `data-params` string.
pub enum Payload {
    Form(FormData),
    Raw(String),
}

impl Payload {
    /// Query-string rendition, used when the verb cannot carry a body.
    /// Non-string form entries (file uploads) are skipped.
    fn query(&self) -> String {
        match self {
            Self::Form(form) => {
                let mut pairs = Vec::new();
                if let Ok(Some(entries)) = js_sys::try_iter(form.as_ref()) {
                    for entry in entries.flatten() {
                        let entry = js_sys::Array::from(&entry);
                        if let (Some(name), Some(value)) =
                            (entry.get(0).as_string(), entry.get(1).as_string())
                        {
                            pairs.push(format!("{}={}", encode(&name), encode(&value)));
                        }
                    }
                }
                pairs.join("&")
            }
            Self::Raw(raw) => raw.clone(),
        }
    }
}

fn encode(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

pub struct Response {
    pub status: u16,
    pub status_text: String,
    pub content_type: String,
    pub text: String,
}

pub struct Client;

impl Client {
    pub async fn fetch(
        url: &str,
        method: Method,
        payload: Option<Payload>,
    ) -> Result<Response, Error> {
        let response = Self::build(url, method, payload)?.send().await?;
        let status = response.status();
        let status_text = response.status_text();
        let content_type = response.headers().get("content-type").unwrap_or_default();
        let ok = response.ok();
        let text = response.text().await?;
        if ok {
            Ok(Response { status, status_text, content_type, text })
        } else {
            Err(Http { code: status, text: status_text, body: text }.into())
        }
    }

    fn build(
        url: &str,
        method: Method,
        payload: Option<Payload>,
    ) -> Result<http::Request, Error> {
        if method.carries_body() {
            let builder = http::RequestBuilder::new(url).method(method.into());
            Ok(match payload {
                Some(Payload::Form(form)) => builder.body(form)?,
                Some(Payload::Raw(raw)) => builder
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(raw)?,
                None => builder.build()?,
            })
        } else {
            let url = match payload.as_ref().map(Payload::query) {
                Some(query) if !query.is_empty() => {
                    let separator = if url.contains('?') { '&' } else { '?' };
                    format!("{url}{separator}{query}")
                }
                _ => url.to_owned(),
            };
            Ok(http::RequestBuilder::new(&url).method(http::Method::GET).build()?)
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None, Method::Get)]
    #[case(Some("GET"), Method::Get)]
    #[case(Some("get"), Method::Get)]
    #[case(Some("POST"), Method::Post)]
    #[case(Some("Post"), Method::Post)]
    #[case(Some("put"), Method::Put)]
    #[case(Some("DELETE"), Method::Delete)]
    #[case(Some("patch"), Method::Patch)]
    #[case(Some("fetch"), Method::Get)]
    #[case(Some(""), Method::Get)]
    fn test_method_parse(#[case] value: Option<&str>, #[case] method: Method) {
        assert_eq!(Method::parse(value), method);
    }

    #[rstest]
    #[case(Method::Get, false)]
    #[case(Method::Post, true)]
    #[case(Method::Delete, true)]
    fn test_carries_body(#[case] method: Method, #[case] carries: bool) {
        assert_eq!(method.carries_body(), carries);
    }
}
