use web_sys::Element;

use crate::client::Method;
use crate::error::Error;

/// Confirm sub-flow configuration. Present whenever the trigger carries a
/// confirm title or message attribute, even an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirm {
    pub title: Option<String>,
    pub message: Option<String>,
    pub ok: Option<String>,
    pub cancel: Option<String>,
}

/// Immutable snapshot of a trigger element's data attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    /// Selector of the dialog surface, from `data-target`.
    pub target: String,
    /// Request destination, from `href` or `data-url`.
    pub url: String,
    pub method: Method,
    /// Raw `data-modal-size` value, validated by the dialog.
    pub size: String,
    /// Raw `data-params` value, sent as extra request payload.
    pub params: Option<String>,
    pub confirm: Option<Confirm>,
}

impl Trigger {
    pub fn from_element(element: &Element) -> Result<Self, Error> {
        Self::parse(|name| element.get_attribute(name))
    }

    pub fn parse(attr: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let url = attr("href")
            .or_else(|| attr("data-url"))
            .ok_or(Error::MissingAttribute("data-url"))?;
        let target = attr("data-target").ok_or(Error::MissingAttribute("data-target"))?;
        let method = Method::parse(attr("data-request-method").as_deref());
        let size = attr("data-modal-size").unwrap_or_else(|| "normal".to_owned());
        let params = attr("data-params");

        let title = attr("data-confirm-title");
        let message = attr("data-confirm-message");
        let confirm = (title.is_some() || message.is_some()).then(|| Confirm {
            title,
            message,
            ok: attr("data-confirm-ok"),
            cancel: attr("data-confirm-cancel"),
        });

        Ok(Self { target, url, method, size, params, confirm })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs.iter().find(|(key, _)| *key == name).map(|(_, value)| (*value).to_owned())
        }
    }

    #[test]
    fn test_defaults() {
        let trigger =
            Trigger::parse(attrs(&[("href", "/users/1"), ("data-target", "#crud-dialog")]))
                .unwrap();
        assert_eq!(
            trigger,
            Trigger {
                target: "#crud-dialog".into(),
                url: "/users/1".into(),
                method: Method::Get,
                size: "normal".into(),
                params: None,
                confirm: None,
            }
        );
    }

    #[test]
    fn test_href_wins_over_data_url() {
        let trigger = Trigger::parse(attrs(&[
            ("href", "/a"),
            ("data-url", "/b"),
            ("data-target", "#dialog"),
        ]))
        .unwrap();
        assert_eq!(trigger.url, "/a");
    }

    #[test]
    fn test_data_url_fallback() {
        let trigger =
            Trigger::parse(attrs(&[("data-url", "/b"), ("data-target", "#dialog")])).unwrap();
        assert_eq!(trigger.url, "/b");
    }

    #[test]
    fn test_missing_url() {
        let error = Trigger::parse(attrs(&[("data-target", "#dialog")])).unwrap_err();
        assert!(matches!(error, Error::MissingAttribute("data-url")));
    }

    #[test]
    fn test_missing_target() {
        let error = Trigger::parse(attrs(&[("href", "/a")])).unwrap_err();
        assert!(matches!(error, Error::MissingAttribute("data-target")));
    }

    #[test]
    fn test_full() {
        let trigger = Trigger::parse(attrs(&[
            ("data-url", "/users/bulkdelete"),
            ("data-target", "#crud-dialog"),
            ("data-request-method", "post"),
            ("data-modal-size", "large"),
            ("data-params", "1,2,3"),
            ("data-confirm-title", "Delete users"),
            ("data-confirm-message", "Are you sure?"),
            ("data-confirm-ok", "Delete"),
            ("data-confirm-cancel", "Keep"),
        ]))
        .unwrap();
        assert_eq!(trigger.method, Method::Post);
        assert_eq!(trigger.size, "large");
        assert_eq!(trigger.params.as_deref(), Some("1,2,3"));
        assert_eq!(
            trigger.confirm,
            Some(Confirm {
                title: Some("Delete users".into()),
                message: Some("Are you sure?".into()),
                ok: Some("Delete".into()),
                cancel: Some("Keep".into()),
            })
        );
    }

    /// Confirm mode is presence-based: an empty message still triggers it.
    #[test]
    fn test_empty_confirm_message() {
        let trigger = Trigger::parse(attrs(&[
            ("href", "/a"),
            ("data-target", "#dialog"),
            ("data-confirm-message", ""),
        ]))
        .unwrap();
        let confirm = trigger.confirm.unwrap();
        assert_eq!(confirm.message.as_deref(), Some(""));
        assert_eq!(confirm.title, None);
        assert_eq!(confirm.ok, None);
    }
}
