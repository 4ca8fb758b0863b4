//! Prompt template store tests

use aitestgen::prompts::{escape_code_blocks, get_prompt, PromptType, CODE_GENERATOR_TYPES};
use aitestgen::utils::error::AppError;
use aitestgen::utils::extract::extract_block;
use std::collections::HashMap;

fn bindings(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_every_template_renders_trimmed_without_bindings() {
    for (key, _) in CODE_GENERATOR_TYPES {
        let prompt_type: PromptType = key.parse().unwrap();
        let rendered = get_prompt(key, &HashMap::new()).unwrap();

        assert_eq!(rendered, prompt_type.template().trim());
        assert!(rendered.starts_with("Instructions:"));
        assert!(rendered.contains("${domContent}"));
    }
}

#[test]
fn test_covered_placeholders_are_all_replaced() {
    for prompt_type in PromptType::ALL {
        let values: Vec<(String, String)> = prompt_type
            .placeholders()
            .into_iter()
            .map(|name| (name.to_string(), format!("<value of {}>", name)))
            .collect();
        let vars: HashMap<String, String> = values.into_iter().collect();

        let rendered = get_prompt(prompt_type.key(), &vars).unwrap();

        for name in vars.keys() {
            assert!(
                !rendered.contains(&format!("${{{}}}", name)),
                "{} still contains ${{{}}}",
                prompt_type,
                name
            );
        }
    }
}

#[test]
fn test_page_url_is_replaced_everywhere() {
    let rendered = get_prompt(
        "CUCUMBER_WITH_SELENIUM_JAVA_STEPS",
        &bindings(&[("domContent", "<input id=\"username\">"), ("pageUrl", "https://example.test/login")]),
    )
    .unwrap();

    assert!(rendered.contains("URL: https://example.test/login"));
    assert!(rendered.contains("driver.get(\"https://example.test/login\");"));
    assert!(rendered.contains("<input id=\"username\">"));
    assert!(!rendered.contains("${pageUrl}"));
}

#[test]
fn test_unbound_placeholder_stays_literal() {
    let rendered = get_prompt(
        "CUCUMBER_WITH_SELENIUM_JAVA_STEPS",
        &bindings(&[("domContent", "<div></div>")]),
    )
    .unwrap();

    assert!(rendered.contains("URL: ${pageUrl}"));
    assert!(!rendered.contains("${domContent}"));
}

#[test]
fn test_unknown_key_is_template_not_found() {
    let err = get_prompt("NOT_A_KEY", &HashMap::new()).unwrap_err();

    assert!(matches!(err, AppError::TemplateNotFound(ref key) if key == "NOT_A_KEY"));
    assert_eq!(err.to_string(), "Prompt not found: NOT_A_KEY");
}

#[test]
fn test_keys_are_case_sensitive() {
    tokio_test::assert_err!(get_prompt("data", &HashMap::new()));
    tokio_test::assert_ok!(get_prompt("DATA", &HashMap::new()));
}

#[test]
fn test_dom_with_special_characters_is_inserted_verbatim() {
    let dom = r#"<a href="$1">${pageUrl} \d+ (.*) $&</a>"#;
    let rendered = get_prompt(
        "CUCUMBER_WITH_SELENIUM_JAVA_STEPS",
        &bindings(&[("domContent", dom), ("pageUrl", "https://x.test")]),
    )
    .unwrap();

    assert!(rendered.contains(dom));
}

#[test]
fn test_extra_bindings_are_ignored() {
    let with_extra = get_prompt("DATA", &bindings(&[("domContent", "d"), ("unused", "u")])).unwrap();
    let without = get_prompt("DATA", &bindings(&[("domContent", "d")])).unwrap();

    assert_eq!(with_extra, without);
}

#[test]
fn test_labels() {
    let labels: Vec<&str> = PromptType::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Selenium-Java-Page-Only",
            "Cucumber-Only",
            "Cucumber-With-Selenium-Java-Steps",
            "Playwright-Typescript-Page-Only",
            "Data",
        ]
    );
}

#[test]
fn test_escaped_template_survives_block_extraction_as_text() {
    let escaped = escape_code_blocks(PromptType::CucumberOnly.template());

    assert!(!escaped.contains("```"));
    assert_eq!(extract_block(&escaped), escaped);
}
