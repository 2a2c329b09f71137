//! Canned responses for the auto-reply manager.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use socialdesk_common::{AppError, AppResult};

#[allow(clippy::unwrap_used)]
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").unwrap());

/// Substitute `{{name}}` placeholders in `template`.
///
/// Placeholders without a value in `vars` are left as written.
#[must_use]
pub fn render_canned_response(template: &str, vars: &HashMap<String, String>) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| {
            vars.get(&caps[1])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Names of the placeholders used in `template`, first occurrence order.
#[must_use]
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER_RE.captures_iter(template) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Named canned-response templates.
#[derive(Debug, Clone, Default)]
pub struct CannedResponseService {
    templates: BTreeMap<String, String>,
}

impl CannedResponseService {
    /// Create an empty template set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a template. Returns the previous template, if any.
    pub fn add_template(
        &mut self,
        name: impl Into<String>,
        template: impl Into<String>,
    ) -> Option<String> {
        self.templates.insert(name.into(), template.into())
    }

    /// Remove a template.
    pub fn remove_template(&mut self, name: &str) -> Option<String> {
        self.templates.remove(name)
    }

    /// Template names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Render the template called `name`.
    pub fn render(&self, name: &str, vars: &HashMap<String, String>) -> AppResult<String> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| AppError::NotFound(format!("Canned response not found: {name}")))?;

        let missing: Vec<String> = placeholders(template)
            .into_iter()
            .filter(|p| !vars.contains_key(p))
            .collect();
        if !missing.is_empty() {
            tracing::debug!(name = %name, missing = ?missing, "Unfilled placeholders");
        }

        Ok(render_canned_response(template, vars))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use maplit::hashmap;

    #[test]
    fn test_render() {
        let vars = hashmap! {
            "name".to_string() => "Sam".to_string(),
            "brand".to_string() => "Acme".to_string(),
        };
        let text = render_canned_response("Hi {{name}}, thanks for contacting {{ brand }}!", &vars);
        assert_eq!(text, "Hi Sam, thanks for contacting Acme!");
    }

    #[test]
    fn test_unknown_variable_is_kept() {
        let vars = hashmap! { "name".to_string() => "Sam".to_string() };
        let text = render_canned_response("Hi {{name}}, order {{order_id}} shipped", &vars);
        assert_eq!(text, "Hi Sam, order {{order_id}} shipped");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            placeholders("{{a}} {{ b }} {{a}} {c}"),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_service() {
        let mut service = CannedResponseService::new();
        assert!(service.add_template("thanks", "Thanks {{name}}!").is_none());
        service.add_template("away", "We're away until {{date}}.");

        assert_eq!(service.names().collect::<Vec<_>>(), ["away", "thanks"]);

        let vars = hashmap! { "name".to_string() => "Ana".to_string() };
        assert_eq!(service.render("thanks", &vars).unwrap(), "Thanks Ana!");

        let err = service.render("missing", &vars).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        assert!(service.remove_template("away").is_some());
        assert_eq!(service.names().count(), 1);
    }
}
