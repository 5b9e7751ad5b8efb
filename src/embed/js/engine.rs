//! Runs the shipped scripts in Node against `fake_dom.js` and checks that
//! they do what the Rust model does. Tests return early when `node` is not
//! on `PATH`.

use std::fmt::Write as _;
use std::io::{ErrorKind, Write as _};
use std::process::{Command, Stdio};

use serde_json::{Map, Value, json};

use crate::embed::preview::render_preview;
use crate::embed::reference::reference_snippet;
use crate::embed::{EmbedMode, EmbedSettings, bundle, generate};
use crate::page::{HtmlPage, PageMetadata};
use crate::platform::{PLATFORMS, ShareTarget, build_share_target};
use crate::theme::{THEME_KEY, Theme, ThemeContext};
use crate::utils::encode::decode_component;
use crate::utils::html::unescape;
use crate::widget::{
    Attributes, ButtonSize, ButtonStyle, DisplayStyle, IconColor, Position, RuntimeWidget,
    WidgetOptions,
};

const FAKE_DOM: &str = include_str!("fake_dom.js");

const LOCATION: &str = "https://blog.example.com/posts/1?ref=feed&lang=%C3%A9";

/// Run `scripts` in a fake page built from `setup`, fire DOMContentLoaded,
/// then evaluate `actions`, which must end with `dom.emit(..)`.
fn run(setup: Value, scripts: &[&str], actions: &str) -> Option<Value> {
    let mut program = format!("{FAKE_DOM}\nconst dom = createDom({setup});\n");
    for script in scripts {
        writeln!(program, "dom.run({});", json!(script)).unwrap();
    }
    program.push_str("dom.ready();\n");
    program.push_str(actions);

    let mut child = match Command::new("node")
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            eprintln!("node not found, skipping script test");
            return None;
        }
        Err(e) => panic!("failed to start node: {e}"),
    };
    child
        .stdin
        .take()
        .unwrap()
        .write_all(program.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(
        output.status.success(),
        "node failed:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    Some(serde_json::from_slice(&output.stdout).unwrap())
}

/// HTML fragment as the element tree `createDom` builds from.
fn tree(html: &str) -> Value {
    let dom = tl::parse(html, tl::ParserOptions::default()).unwrap();
    let parser = dom.parser();
    Value::Array(
        dom.children()
            .iter()
            .filter_map(|handle| node(handle, parser))
            .collect(),
    )
}

fn node(handle: &tl::NodeHandle, parser: &tl::Parser<'_>) -> Option<Value> {
    match handle.get(parser)? {
        tl::Node::Tag(tag) => {
            let attrs: Map<String, Value> = tag
                .attributes()
                .iter()
                .map(|(k, v)| {
                    let value = v.map(|v| unescape(&v).into_owned()).unwrap_or_default();
                    (k.to_ascii_lowercase(), json!(value))
                })
                .collect();
            let children: Vec<Value> = tag
                .children()
                .top()
                .as_slice()
                .iter()
                .filter_map(|child| node(child, parser))
                .collect();
            Some(json!({
                "tag": tag.name().as_utf8_str().to_ascii_lowercase(),
                "attrs": attrs,
                "children": children,
            }))
        }
        tl::Node::Raw(text) => Some(json!({ "text": unescape(&text.as_utf8_str()).into_owned() })),
        tl::Node::Comment(_) => None,
    }
}

/// Markup and script of a standalone snippet.
fn split_snippet(snippet: &str) -> (&str, &str) {
    let markup_end = snippet.find("\n\n<style>").unwrap();
    let script_start = snippet.rfind("<script>\n").unwrap() + "<script>\n".len();
    let script_end = snippet.rfind("\n</script>").unwrap();
    (&snippet[..markup_end], &snippet[script_start..script_end])
}

fn options(platforms: &[&str]) -> WidgetOptions {
    WidgetOptions {
        platforms: platforms.iter().map(|s| s.to_string()).collect(),
        ..WidgetOptions::default()
    }
}

fn standalone(options: &WidgetOptions, minify: bool) -> String {
    generate(
        options,
        &EmbedSettings {
            mode: EmbedMode::Standalone,
            minify,
            ..EmbedSettings::default()
        },
    )
}

/// Click every share button of one standalone snippet on a page with `head`
/// and check each result against [`build_share_target`].
fn assert_clicks_match_model(head: &str, platforms: &[&str]) -> Option<Vec<Value>> {
    let snippet = standalone(&options(platforms), false);
    let (markup, script) = split_snippet(&snippet);
    let records = run(
        json!({ "location": LOCATION, "head": tree(head), "body": tree(markup) }),
        &[script],
        "dom.emit(dom.clickAll('.share-btn'));",
    )?;

    let meta = PageMetadata::extract(&HtmlPage::parse(head, LOCATION).unwrap());
    let records = records.as_array().unwrap().clone();
    assert_eq!(records.len(), platforms.len());
    for record in &records {
        let id = record["platform"].as_str().unwrap();
        assert_eq!(record["prevented"], true, "{id}");
        assert_eq!(record["warnings"], json!([]), "{id}");
        match build_share_target(id, &meta).unwrap() {
            ShareTarget::Open(url) => {
                assert_eq!(record["opened"][0]["url"], url, "{id}");
                assert_eq!(record["opened"][0]["name"], "share-dialog");
                assert_eq!(record["copied"], json!([]), "{id}");
            }
            ShareTarget::Copy { text, message } => {
                assert_eq!(record["copied"], json!([text]), "{id}");
                assert!(record["html"].as_str().unwrap().ends_with(message), "{id}");
                assert_eq!(record["opened"], json!([]), "{id}");
            }
        }
    }
    Some(records)
}

fn opened_url<'a>(records: &'a [Value], id: &str) -> &'a str {
    records
        .iter()
        .find(|r| r["platform"] == id)
        .and_then(|r| r["opened"][0]["url"].as_str())
        .unwrap()
}

mod share_targets {
    use super::*;

    #[test]
    fn test_every_platform_matches_model() {
        let description = format!("{} end", "Ünïcödé 🎉 ".repeat(12));
        let head = format!(
            r#"<title>Ignored</title>
<meta property="og:title" content="Café &amp; &quot;Bar&quot; (№1) 🎉">
<meta property="og:description" content="{description}">
<meta property="og:image" content="https://cdn.example.com/a b.png">"#
        );
        let ids: Vec<&str> = PLATFORMS.iter().map(|p| p.id).collect();
        let Some(records) = assert_clicks_match_model(&head, &ids) else {
            return;
        };

        let x = opened_url(&records, "x");
        let text = decode_component(x.split("&text=").nth(1).unwrap());
        let (_, described) = text.split_once(" - ").unwrap();
        let truncated = described.strip_suffix("...").unwrap();
        assert_eq!(truncated.chars().count(), 100);

        assert!(opened_url(&records, "pinterest").ends_with("&media=https%3A%2F%2Fcdn.example.com%2Fa%20b.png"));
    }

    #[test]
    fn test_fallbacks_without_description_or_image() {
        let head = "<title> Spaced Title </title>";
        let Some(records) = assert_clicks_match_model(head, &["pinterest", "x", "reddit", "copy"])
        else {
            return;
        };

        let pinterest = opened_url(&records, "pinterest");
        assert!(pinterest.ends_with("&description=%20Spaced%20Title%20"));
        assert!(!pinterest.contains("&media="));
        assert!(opened_url(&records, "x").ends_with("&text=%20Spaced%20Title%20"));
    }

    #[test]
    fn test_hostname_title_fallback() {
        assert_clicks_match_model("<meta name=\"description\" content=\"Only this\">", &["reddit", "copy"]);
    }
}

mod standalone {
    use super::*;

    #[test]
    fn test_snippets_with_different_platforms_share_a_page() {
        for minify in [false, true] {
            let snippets = [
                standalone(&options(&["facebook"]), minify),
                standalone(&options(&["reddit", "copy"]), minify),
                standalone(&options(&["facebook"]), minify),
            ];
            let parts: Vec<_> = snippets.iter().map(|s| split_snippet(s)).collect();
            let body: Vec<Value> = parts
                .iter()
                .flat_map(|(markup, _)| tree(markup).as_array().unwrap().clone())
                .collect();
            let scripts: Vec<&str> = parts.iter().map(|(_, script)| *script).collect();

            let Some(out) = run(
                json!({ "location": LOCATION, "head": [], "body": body }),
                &scripts,
                "dom.emit({ records: dom.clickAll('.share-btn'), warnings: dom.warnings });",
            ) else {
                return;
            };

            assert_eq!(out["warnings"], json!([]), "minify={minify}");
            let records = out["records"].as_array().unwrap();
            let ids: Vec<_> = records.iter().map(|r| r["platform"].as_str().unwrap()).collect();
            assert_eq!(ids, ["facebook", "reddit", "copy", "facebook"]);
            for record in records {
                let acted = record["opened"].as_array().unwrap().len()
                    + record["copied"].as_array().unwrap().len();
                assert_eq!(acted, 1, "minify={minify}: {record}");
            }
        }
    }

    #[test]
    fn test_copy_feedback_reverts() {
        let snippet = standalone(&options(&["copy"]), false);
        let (markup, script) = split_snippet(&snippet);
        let Some(out) = run(
            json!({ "location": LOCATION, "head": [], "body": tree(markup) }),
            &[script],
            "const before = dom.query('.share-btn')[0].innerHTML;
             const record = dom.click(dom.query('.share-btn')[0]);
             const delays = dom.flushTimers();
             dom.emit({ before, during: record.html, delays, after: dom.query('.share-btn')[0].innerHTML });",
        ) else {
            return;
        };

        assert!(out["during"].as_str().unwrap().ends_with(">Copied!"));
        assert_eq!(out["delays"], json!([2000]));
        assert_eq!(out["after"], out["before"]);
    }
}

mod runtime {
    use super::*;

    const LENIENT_TAG: &str = r#"<script src="https://cdn.example.com/v1/share-buttons.min.js" data-platforms=" reddit, myspace ,copy" data-size="huge" position="floating-left" data-display-style="text-only"></script>"#;
    const BARE_TAG: &str = r#"<script src="https://cdn.example.com/share-buttons.js"></script>"#;

    /// Attributes of every script tag in `body`, in order.
    fn script_attributes(body: &Value) -> Vec<Attributes> {
        body.as_array()
            .unwrap()
            .iter()
            .filter(|n| n["tag"] == "script")
            .map(|n| {
                n["attrs"]
                    .as_object()
                    .unwrap()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.as_str().unwrap().to_string()))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_widgets_match_model() {
        let custom = WidgetOptions {
            platforms: vec!["pinterest".into(), "instagram".into()],
            icon_color: IconColor::Mono,
            display_style: DisplayStyle::IconOnly,
            button_style: ButtonStyle::Circle,
            size: ButtonSize::Large,
            position: Position::FloatingRight,
        };
        let reference = reference_snippet(&custom, "https://cdn.example.com/share-buttons.min.js");
        let body = tree(&format!("{LENIENT_TAG}\n<p>text</p>\n{reference}\n{BARE_TAG}"));
        let expected: Vec<_> = script_attributes(&body)
            .iter()
            .map(RuntimeWidget::from_attributes)
            .collect();

        for minify in [false, true] {
            let script = bundle(minify);
            let Some(out) = run(
                json!({ "location": LOCATION, "head": [], "body": body }),
                &[script.as_str()],
                "dom.emit({
                    widgets: dom.query('.share-widget').map((w) => {
                        const prev = w.parentNode.childNodes[w.parentNode.childNodes.indexOf(w) - 1];
                        return {
                            class: w.className,
                            after: prev.getAttribute('src'),
                            buttons: w.children.map((b) => b.outerHTML.replace(' data-share-bound=\"true\"', ''))
                        };
                    }),
                    warnings: dom.warnings,
                    styles: dom.query('style').length
                });",
            ) else {
                return;
            };

            let widgets = out["widgets"].as_array().unwrap();
            assert_eq!(widgets.len(), expected.len());
            for (widget, model) in widgets.iter().zip(&expected) {
                let markup = model.markup();
                assert_eq!(widget["class"], markup.class);
                let buttons: Vec<String> = markup.buttons.iter().map(|b| b.to_html()).collect();
                assert_eq!(widget["buttons"], json!(buttons));
            }
            assert!(widgets[0]["after"].as_str().unwrap().contains("/v1/"));
            assert_eq!(out["styles"], 1);

            let warnings = out["warnings"].to_string();
            assert!(warnings.contains(r#"invalid value \"huge\" for size"#), "minify={minify}");
            assert!(warnings.contains(r#"unknown platform \"myspace\""#), "minify={minify}");
        }
    }
}

mod preview {
    use super::*;

    /// Body sections and script of a rendered preview page.
    fn page(theme: ThemeContext) -> (Value, String, String) {
        let options = options(&["x", "copy"]);
        let settings = EmbedSettings::default();
        let html = render_preview(&options, &settings, theme);
        let start = html.find("<section").unwrap();
        let script_start = html.rfind("<script>\n").unwrap();
        let script_end = html.rfind("\n</script>").unwrap();
        (
            tree(&html[start..script_start]),
            html[script_start + "<script>\n".len()..script_end].to_string(),
            generate(&options, &settings),
        )
    }

    fn body_attrs(theme: Theme) -> Value {
        match theme {
            Theme::Light => json!({}),
            Theme::Dark => json!({ "data-theme": "dark" }),
        }
    }

    #[test]
    fn test_follows_system_theme_then_shortcuts() {
        let (body, script, code) = page(ThemeContext::new(Theme::Light));
        let Some(out) = run(
            json!({ "location": LOCATION, "head": [], "body": body, "bodyAttrs": body_attrs(Theme::Light), "prefersDark": true }),
            &[script.as_str()],
            "const initial = dom.document.body.getAttribute('data-theme');
             const copyKey = dom.document.dispatch('keydown', { key: 'k', ctrlKey: true });
             const label = dom.document.getElementById('copy-code-btn').innerHTML;
             const delays = dom.flushTimers();
             const themeKey = dom.document.dispatch('keydown', { key: 'D', metaKey: true });
             dom.emit({
                 initial, label, delays,
                 prevented: [copyKey.defaultPrevented, themeKey.defaultPrevented],
                 copied: dom.copied,
                 restored: dom.document.getElementById('copy-code-btn').innerHTML,
                 theme: dom.document.body.getAttribute('data-theme'),
                 icon: dom.document.getElementById('theme-icon').textContent,
                 storage: dom.storage,
                 shared: dom.clickAll('.share-btn').map((r) => r.opened.length + r.copied.length)
             });",
        ) else {
            return;
        };

        assert_eq!(out["initial"], "dark");
        assert_eq!(out["label"], "Copied!");
        assert_eq!(out["delays"], json!([2000]));
        assert_eq!(out["restored"], "Copy Code");
        assert_eq!(out["prevented"], json!([true, true]));
        assert_eq!(out["copied"][0], code);
        assert_eq!(out["theme"], Value::Null);
        assert_eq!(out["icon"], ThemeContext::new(Theme::Light).toggle_icon());
        assert_eq!(out["storage"][THEME_KEY], "light");
        assert_eq!(out["shared"], json!([1, 1]));
    }

    #[test]
    fn test_saved_theme_wins_over_system() {
        let (body, script, _) = page(ThemeContext::saved(Theme::Light));
        let Some(out) = run(
            json!({ "location": LOCATION, "head": [], "body": body, "bodyAttrs": body_attrs(Theme::Light), "prefersDark": true }),
            &[script.as_str()],
            "dom.emit(dom.document.body.getAttribute('data-theme'));",
        ) else {
            return;
        };
        assert_eq!(out, Value::Null);
    }

    #[test]
    fn test_browser_storage_wins_over_rendered_theme() {
        let (body, script, _) = page(ThemeContext::saved(Theme::Light));
        let storage: Map<String, Value> = [(THEME_KEY.to_string(), json!("dark"))].into_iter().collect();
        let Some(out) = run(
            json!({ "location": LOCATION, "head": [], "body": body, "bodyAttrs": body_attrs(Theme::Light), "storage": storage }),
            &[script.as_str()],
            "dom.document.getElementById('theme-toggle-btn').dispatch('click');
             const toggled = dom.document.body.getAttribute('data-theme');
             dom.emit({ toggled, storage: dom.storage });",
        ) else {
            return;
        };
        assert_eq!(out["toggled"], Value::Null);
        assert_eq!(out["storage"][THEME_KEY], "light");
    }

    #[test]
    fn test_copy_failure_shows_error() {
        let (body, script, _) = page(ThemeContext::saved(Theme::Dark));
        let Some(out) = run(
            json!({ "location": LOCATION, "head": [], "body": body, "bodyAttrs": body_attrs(Theme::Dark), "copyFails": true }),
            &[script.as_str()],
            "dom.document.getElementById('copy-code-btn').dispatch('click');
             dom.emit({
                 label: dom.document.getElementById('copy-code-btn').innerHTML,
                 theme: dom.document.body.getAttribute('data-theme')
             });",
        ) else {
            return;
        };
        assert_eq!(out["label"], "Error!");
        assert_eq!(out["theme"], "dark");
    }
}
