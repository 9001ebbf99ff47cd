use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref TOKEN: Regex = Regex::new(r"\{\{([A-Za-z_]+)\}\}").expect("valid regex");
}

/// Values substituted for `{{NAME}}` placeholders.
#[derive(Clone, Debug, Default)]
pub struct TemplateTokens {
    values: Vec<(&'static str, String)>,
}

impl TemplateTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.values.push((name, value.into()));
        self
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(token, _)| *token == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Single pass over the template: substituted values are never rescanned and
/// unknown placeholders are kept verbatim.
pub fn render_template(template: &str, tokens: &TemplateTokens) -> String {
    TOKEN
        .replace_all(template, |captures: &Captures| {
            tokens
                .get(&captures[1])
                .map(str::to_string)
                .unwrap_or_else(|| captures[0].to_string())
        })
        .into_owned()
}
