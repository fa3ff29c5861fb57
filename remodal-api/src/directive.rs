use serde::{Deserialize, Serialize};

/// A follow-up instruction the server selects by name through the
/// `forceExecute` directive. Unrecognized names deserialize to [`Command::Unknown`]
/// and are ignored by the client with a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    ReloadPage,
    HistoryBack,
    ScrollTop,
    #[serde(other)]
    Unknown,
}

/// The declarative payload of a JSON response. Every field is independently
/// optional; unknown fields are ignored.
///
/// Directives apply in a fixed order: execute, forward, reload, close, size,
/// title, content, footer. `force_close` short-circuits everything after it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Directives {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    /// Raw size value, validated against [`crate::Size`] at apply time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub force_close: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_forward: Option<String>,
    /// Selector of the page fragment to refresh; only honored together with
    /// [`Self::force_reload_ajax_url`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_reload_ajax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_reload_ajax_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_execute: Option<Command>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_deserialize_full() {
        let directives: Directives = serde_json::from_str(
            r##"{
                "title": "Edit user",
                "content": "<form></form>",
                "footer": "<button>Save</button>",
                "size": "large",
                "forceClose": false,
                "forceForward": "/users",
                "forceReloadAjax": "#users-table",
                "forceReloadAjaxUrl": "/users/table",
                "forceExecute": "reload-page"
            }"##,
        )
        .unwrap();
        assert_eq!(
            directives,
            Directives {
                title: Some("Edit user".into()),
                content: Some("<form></form>".into()),
                footer: Some("<button>Save</button>".into()),
                size: Some("large".into()),
                force_close: false,
                force_forward: Some("/users".into()),
                force_reload_ajax: Some("#users-table".into()),
                force_reload_ajax_url: Some("/users/table".into()),
                force_execute: Some(Command::ReloadPage),
            }
        );
    }

    #[test]
    fn test_deserialize_empty() {
        let directives: Directives = serde_json::from_str("{}").unwrap();
        assert_eq!(directives, Directives::default());
    }

    #[test]
    fn test_deserialize_unknown_fields() {
        let directives: Directives =
            serde_json::from_str(r##"{"title": "X", "tableId": "#crud-table"}"##).unwrap();
        assert_eq!(directives.title.as_deref(), Some("X"));
    }

    #[test]
    fn test_deserialize_mismatched_type() {
        assert!(serde_json::from_str::<Directives>(r#"{"forceClose": "yes"}"#).is_err());
    }

    #[rstest]
    #[case("\"reload-page\"", Command::ReloadPage)]
    #[case("\"history-back\"", Command::HistoryBack)]
    #[case("\"scroll-top\"", Command::ScrollTop)]
    #[case("\"window.close()\"", Command::Unknown)]
    #[case("\"\"", Command::Unknown)]
    fn test_deserialize_command(#[case] input: &str, #[case] command: Command) {
        assert_eq!(serde_json::from_str::<Command>(input).unwrap(), command);
    }

    #[test]
    fn test_serialize_skips_absent() {
        let json = serde_json::to_string(&Directives {
            force_close: true,
            ..Directives::default()
        })
        .unwrap();
        assert_eq!(json, r#"{"forceClose":true}"#);
    }
}
