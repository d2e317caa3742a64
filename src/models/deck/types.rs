use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named placeholder values injected into a deck template.
pub type Placeholders = BTreeMap<String, String>;

/// A slide deck template, identified by slug.
#[derive(Debug, Clone, Serialize)]
pub struct Deck {
    pub slug: String,
    pub title: String,
    pub lab: Option<String>,
    #[serde(skip)]
    pub template: String,
}

/// One entry of `decks.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeckManifestEntry {
    pub slug: String,
    pub title: String,
    pub file: String,
    #[serde(default)]
    pub lab: Option<String>,
}

impl Deck {
    /// Substitute `{{ key }}` markers for keys present in `placeholders`.
    /// Unknown keys and unterminated markers are copied through untouched.
    pub fn render(&self, placeholders: &Placeholders) -> String {
        let src = self.template.as_str();
        let mut out = String::with_capacity(src.len());
        let mut rest = src;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            let Some(end) = after_open.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };
            let key = after_open[..end].trim();
            match placeholders.get(key) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[start..start + 2 + end + 2]),
            }
            rest = &after_open[end + 2..];
        }
        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(template: &str) -> Deck {
        Deck {
            slug: "intro".into(),
            title: "Intro".into(),
            lab: None,
            template: template.into(),
        }
    }

    fn values(pairs: &[(&str, &str)]) -> Placeholders {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn substitutes_known_keys_with_and_without_spaces() {
        let d = deck("<h1>{{event_name}}</h1><p>{{ wifi_ssid }}</p>");
        let html = d.render(&values(&[("event_name", "RustConf"), ("wifi_ssid", "guest")]));
        assert_eq!(html, "<h1>RustConf</h1><p>guest</p>");
    }

    #[test]
    fn leaves_unknown_keys_alone() {
        let d = deck("a {{ mystery }} b");
        assert_eq!(d.render(&Placeholders::new()), "a {{ mystery }} b");
    }

    #[test]
    fn unterminated_marker_is_copied() {
        let d = deck("x {{event_name");
        assert_eq!(d.render(&values(&[("event_name", "E")])), "x {{event_name");
    }

    #[test]
    fn repeated_keys_all_replaced() {
        let d = deck("{{lab_title}}/{{lab_title}}");
        assert_eq!(d.render(&values(&[("lab_title", "L")])), "L/L");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let d = deck("{{speakers}}");
        let html = d.render(&values(&[("speakers", "{{event_name}}"), ("event_name", "nope")]));
        assert_eq!(html, "{{event_name}}");
    }
}
