#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    GlooNet(#[from] gloo_net::Error),
    #[error(transparent)]
    Http(#[from] Http),
    #[error(transparent)]
    Payload(#[from] serde_json::Error),
    #[error("unsupported response content type `{0}`")]
    ContentType(String),
    #[error("missing `{0}` attribute on trigger element")]
    MissingAttribute(&'static str),
    #[error("no element matches selector `{0}`")]
    ElementNotFound(String),
    #[error("element `{0}` is not a <dialog>")]
    NotDialog(String),
}

/// A non-2xx response. Displays as status code and status text back to back,
/// the way the dialog titles its error state ("404Not Found").
#[derive(Debug, thiserror::Error, Clone)]
#[error("{code}{text}")]
pub struct Http {
    pub code: u16,
    pub text: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_display() {
        let error = Http { code: 404, text: "Not Found".into(), body: "<h1>gone</h1>".into() };
        assert_eq!(error.to_string(), "404Not Found");
    }
}
