//! Prompt template store
//!
//! Static code-generation prompts keyed by [`PromptType`], with `${name}`
//! placeholder substitution

pub mod templates;

use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Opening of a `${name}` placeholder
const PLACEHOLDER_OPEN: &str = "${";

/// Replacement used by [`escape_code_blocks`]
const ESCAPED_FENCE: &str = "\\`\\`\\`";

/// Registered prompt types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromptType {
    SeleniumJavaPageOnly,
    CucumberOnly,
    CucumberWithSeleniumJavaSteps,
    PlaywrightTypescriptPageOnly,
    Data,
}

/// Prompt keys paired with their display labels, in registration order
pub const CODE_GENERATOR_TYPES: [(&str, &str); 5] = [
    ("SELENIUM_JAVA_PAGE_ONLY", "Selenium-Java-Page-Only"),
    ("CUCUMBER_ONLY", "Cucumber-Only"),
    ("CUCUMBER_WITH_SELENIUM_JAVA_STEPS", "Cucumber-With-Selenium-Java-Steps"),
    ("PLAYWRIGHT_TYPESCRIPT_PAGE_ONLY", "Playwright-Typescript-Page-Only"),
    ("DATA", "Data"),
];

impl PromptType {
    /// All prompt types in registration order
    pub const ALL: [PromptType; 5] = [
        PromptType::SeleniumJavaPageOnly,
        PromptType::CucumberOnly,
        PromptType::CucumberWithSeleniumJavaSteps,
        PromptType::PlaywrightTypescriptPageOnly,
        PromptType::Data,
    ];

    /// Symbolic key, e.g. `CUCUMBER_ONLY`
    pub fn key(&self) -> &'static str {
        CODE_GENERATOR_TYPES[self.index()].0
    }

    /// Human-readable label for presentation
    pub fn label(&self) -> &'static str {
        CODE_GENERATOR_TYPES[self.index()].1
    }

    /// Raw template text
    pub fn template(&self) -> &'static str {
        match self {
            PromptType::SeleniumJavaPageOnly => templates::SELENIUM_JAVA_PAGE_ONLY,
            PromptType::CucumberOnly => templates::CUCUMBER_ONLY,
            PromptType::CucumberWithSeleniumJavaSteps => templates::CUCUMBER_WITH_SELENIUM_JAVA_STEPS,
            PromptType::PlaywrightTypescriptPageOnly => templates::PLAYWRIGHT_TYPESCRIPT_PAGE_ONLY,
            PromptType::Data => templates::DATA,
        }
    }

    /// Distinct placeholder names in order of first appearance
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        let mut rest = self.template();

        while let Some((start, name)) = next_placeholder(rest) {
            if !names.contains(&name) {
                names.push(name);
            }
            rest = &rest[start + placeholder_len(name)..];
        }

        names
    }

    /// Fill the template with `bindings` and trim the result
    pub fn render(&self, bindings: &HashMap<String, String>) -> String {
        substitute(self.template(), bindings).trim().to_string()
    }

    fn index(&self) -> usize {
        match self {
            PromptType::SeleniumJavaPageOnly => 0,
            PromptType::CucumberOnly => 1,
            PromptType::CucumberWithSeleniumJavaSteps => 2,
            PromptType::PlaywrightTypescriptPageOnly => 3,
            PromptType::Data => 4,
        }
    }
}

impl FromStr for PromptType {
    type Err = AppError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        PromptType::ALL
            .into_iter()
            .find(|prompt_type| prompt_type.key() == key)
            .ok_or_else(|| AppError::TemplateNotFound(key.to_string()))
    }
}

impl fmt::Display for PromptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Render the prompt registered under `key`
///
/// Placeholders without a binding are left as-is. Bound values are inserted
/// verbatim and never re-scanned for placeholders.
pub fn get_prompt(key: &str, bindings: &HashMap<String, String>) -> AppResult<String> {
    let prompt_type: PromptType = key.parse()?;
    debug!("Rendering prompt {} with {} bindings", prompt_type, bindings.len());
    Ok(prompt_type.render(bindings))
}

/// Escape every code fence so the text can sit inside an outer fence
pub fn escape_code_blocks(text: &str) -> String {
    text.replace("```", ESCAPED_FENCE)
}

/// Replace bound placeholders in a single pass over `template`
pub fn substitute(template: &str, bindings: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some((start, name)) = next_placeholder(rest) {
        let end = start + placeholder_len(name);
        out.push_str(&rest[..start]);
        match bindings.get(name) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[start..end]),
        }
        rest = &rest[end..];
    }

    out.push_str(rest);
    out
}

/// Byte offset and name of the next well-formed placeholder in `text`
fn next_placeholder(text: &str) -> Option<(usize, &str)> {
    let mut from = 0;

    while let Some(open) = text[from..].find(PLACEHOLDER_OPEN) {
        let start = from + open;
        let name_start = start + PLACEHOLDER_OPEN.len();
        if let Some(len) = text[name_start..].find('}') {
            let name = &text[name_start..name_start + len];
            if is_identifier(name) {
                return Some((start, name));
            }
        }
        from = name_start;
    }

    None
}

fn placeholder_len(name: &str) -> usize {
    PLACEHOLDER_OPEN.len() + name.len() + 1
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
