//! A small simulated browser for page-level system tests.
//!
//! Drives the router the way a user would: follow links by their text,
//! fill inputs by their label, press submit buttons, and accept or dismiss
//! `confirm()` prompts attached to forms. Redirects are followed with `GET`.
//! Markup is located with `regex`, which is enough for the server-rendered
//! pages this app produces.

use std::collections::HashMap;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use regex::Regex;

use super::{body_text, send};

const MAX_REDIRECTS: usize = 5;
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The last page the browser landed on.
#[derive(Debug)]
pub struct Page {
    pub status: StatusCode,
    pub path: String,
    pub html: String,
}

/// A form located by its submit button, ready to be sent.
#[derive(Debug)]
struct Submission {
    action: String,
    method: String,
    fields: Vec<(String, String)>,
    confirm: bool,
}

pub struct Browser {
    app: Router,
    page: Option<Page>,
    /// Values typed with [`Browser::fill_in`], keyed by input `name`.
    filled: HashMap<String, String>,
    accept_next_confirm: bool,
    confirm_shown: bool,
}

impl Browser {
    pub fn new(app: Router) -> Self {
        Self {
            app,
            page: None,
            filled: HashMap::new(),
            accept_next_confirm: false,
            confirm_shown: false,
        }
    }

    pub fn page(&self) -> &Page {
        self.page.as_ref().expect("no page has been visited yet")
    }

    pub fn status(&self) -> StatusCode {
        self.page().status
    }

    pub fn current_path(&self) -> &str {
        &self.page().path
    }

    /// Navigate to `path` with `GET`.
    pub async fn visit(&mut self, path: &str) {
        self.filled.clear();
        self.request(Method::GET, path, None).await;
    }

    /// Click the first link or submit button whose text is `locator`.
    ///
    /// A form guarded by `confirm()` is only submitted when the prompt is
    /// accepted (see [`Browser::accept_confirm`]); otherwise nothing happens.
    pub async fn click_on(&mut self, locator: &str) {
        let html = self.page().html.clone();

        if let Some(href) = find_link(&html, locator) {
            self.visit(&href).await;
            return;
        }

        let Some(mut submission) = find_submission(&html, locator) else {
            panic!(
                "Unable to find link or button {locator:?} on {}",
                self.current_path()
            );
        };

        if submission.confirm {
            self.confirm_shown = true;
            if !std::mem::take(&mut self.accept_next_confirm) {
                return;
            }
        }

        for (name, value) in submission.fields.iter_mut() {
            if let Some(typed) = self.filled.get(name.as_str()) {
                *value = typed.clone();
            }
        }
        self.filled.clear();

        if submission.action.is_empty() {
            submission.action = self.current_path().to_string();
        }
        let body = encode_form(&submission.fields);
        if submission.method.eq_ignore_ascii_case("post") {
            self.request(Method::POST, &submission.action, Some(body))
                .await;
        } else {
            let target = format!("{}?{body}", submission.action);
            self.request(Method::GET, &target, None).await;
        }
    }

    /// Click `locator` and accept the confirmation prompt it raises.
    pub async fn accept_confirm(&mut self, locator: &str) {
        self.accept_next_confirm = true;
        self.confirm_shown = false;
        self.click_on(locator).await;
        assert!(
            self.confirm_shown,
            "clicking {locator:?} did not raise a confirmation prompt"
        );
    }

    /// Click `locator` and dismiss the confirmation prompt it raises.
    pub async fn dismiss_confirm(&mut self, locator: &str) {
        self.accept_next_confirm = false;
        self.confirm_shown = false;
        self.click_on(locator).await;
        assert!(
            self.confirm_shown,
            "clicking {locator:?} did not raise a confirmation prompt"
        );
    }

    /// Type `value` into the input labelled `label`.
    pub fn fill_in(&mut self, label: &str, value: &str) {
        let name = {
            let html = &self.page().html;
            let id = find_label_target(html, label)
                .unwrap_or_else(|| panic!("no label {label:?} on {}", self.current_path()));
            find_field(html, &id)
                .unwrap_or_else(|| panic!("no field with id {id:?} for label {label:?}"))
                .0
        };
        self.filled.insert(name, value.to_string());
    }

    /// Current value of the input labelled `label`, as rendered.
    pub fn field_value(&self, label: &str) -> String {
        let html = &self.page().html;
        let id = find_label_target(html, label)
            .unwrap_or_else(|| panic!("no label {label:?} on {}", self.current_path()));
        find_field(html, &id)
            .unwrap_or_else(|| panic!("no field with id {id:?} for label {label:?}"))
            .1
    }

    /// Visible text of the page with whitespace collapsed.
    pub fn text(&self) -> String {
        strip_tags(&self.page().html)
    }

    pub fn has_text(&self, text: &str) -> bool {
        self.text().contains(text)
    }

    pub fn assert_text(&self, text: &str) {
        assert!(
            self.has_text(text),
            "expected {text:?} on {}, page text was: {}",
            self.current_path(),
            self.text()
        );
    }

    pub fn assert_no_text(&self, text: &str) {
        assert!(
            !self.has_text(text),
            "did not expect {text:?} on {}",
            self.current_path()
        );
    }

    /// Assert an element `tag` exists whose text contains `text`.
    pub fn assert_selector(&self, tag: &str, text: &str) {
        let re = Regex::new(&format!(r"(?s)<{tag}(?:\s[^>]*)?>(.*?)</{tag}>")).unwrap();
        let found = re
            .captures_iter(&self.page().html)
            .any(|c| strip_tags(&c[1]).contains(text));
        assert!(
            found,
            "expected <{tag}> containing {text:?} on {}",
            self.current_path()
        );
    }

    async fn request(&mut self, method: Method, path: &str, form_body: Option<String>) {
        let mut method = method;
        let mut path = path.to_string();
        let mut form_body = form_body;

        for _ in 0..=MAX_REDIRECTS {
            let builder = Request::builder().method(method.clone()).uri(&path);
            let request = match form_body.take() {
                Some(body) => builder
                    .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                    .body(Body::from(body)),
                None => builder.body(Body::empty()),
            }
            .unwrap();

            let response = send(self.app.clone(), request).await;
            if response.status().is_redirection() {
                path = response
                    .headers()
                    .get(LOCATION)
                    .expect("redirect without Location")
                    .to_str()
                    .unwrap()
                    .to_string();
                method = Method::GET;
                continue;
            }

            let status = response.status();
            let html = body_text(response).await;
            self.page = Some(Page { status, path, html });
            return;
        }
        panic!("too many redirects starting from {path}");
    }
}

/// Url-encode `fields` as an `application/x-www-form-urlencoded` body.
pub fn encode_form<K: AsRef<str>, V: AsRef<str>>(fields: &[(K, V)]) -> String {
    fields
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                urlencoding::encode(k.as_ref()),
                urlencoding::encode(v.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

// ---------------------------------------------------------------------------
// Markup helpers
// ---------------------------------------------------------------------------

fn unescape(raw: &str) -> String {
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn strip_tags(fragment: &str) -> String {
    let tags = Regex::new(r"<[^>]*>").unwrap();
    let text = unescape(&tags.replace_all(fragment, " "));
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn attr(attrs: &str, name: &str) -> Option<String> {
    let re = Regex::new(&format!(r#"(?:^|\s){}="([^"]*)""#, regex::escape(name))).unwrap();
    re.captures(attrs).map(|c| unescape(&c[1]))
}

fn find_link(html: &str, text: &str) -> Option<String> {
    let re = Regex::new(r"(?s)<a\s([^>]*)>(.*?)</a>").unwrap();
    let href = re
        .captures_iter(html)
        .find(|c| strip_tags(&c[2]) == text)
        .and_then(|c| attr(&c[1], "href"));
    href
}

fn find_label_target(html: &str, text: &str) -> Option<String> {
    let re = Regex::new(r"(?s)<label\s([^>]*)>(.*?)</label>").unwrap();
    let target = re
        .captures_iter(html)
        .find(|c| strip_tags(&c[2]) == text)
        .and_then(|c| attr(&c[1], "for"));
    target
}

/// `(name, value)` of the input or textarea with the given `id`.
fn find_field(html: &str, id: &str) -> Option<(String, String)> {
    let inputs = Regex::new(r"<input\s([^>]*?)/?>").unwrap();
    for c in inputs.captures_iter(html) {
        if attr(&c[1], "id").as_deref() == Some(id) {
            let name = attr(&c[1], "name")?;
            return Some((name, attr(&c[1], "value").unwrap_or_default()));
        }
    }
    let textareas = Regex::new(r"(?s)<textarea\s([^>]*)>(.*?)</textarea>").unwrap();
    for c in textareas.captures_iter(html) {
        if attr(&c[1], "id").as_deref() == Some(id) {
            let name = attr(&c[1], "name")?;
            return Some((name, unescape(&c[2])));
        }
    }
    None
}

/// Locate the first form containing a submit control labelled `locator`
/// and collect the values it would send.
fn find_submission(html: &str, locator: &str) -> Option<Submission> {
    let forms = Regex::new(r"(?s)<form\s([^>]*)>(.*?)</form>").unwrap();
    let inputs = Regex::new(r"<input\s([^>]*?)/?>").unwrap();
    let buttons = Regex::new(r"(?s)<button\b([^>]*)>(.*?)</button>").unwrap();
    let textareas = Regex::new(r"(?s)<textarea\s([^>]*)>(.*?)</textarea>").unwrap();

    for form in forms.captures_iter(html) {
        let (form_attrs, inner) = (&form[1], &form[2]);

        let mut pressed: Option<Option<(String, String)>> = None;
        for c in inputs.captures_iter(inner) {
            let is_submit = attr(&c[1], "type").as_deref() == Some("submit");
            if is_submit && attr(&c[1], "value").as_deref() == Some(locator) {
                pressed = Some(attr(&c[1], "name").map(|n| (n, locator.to_string())));
                break;
            }
        }
        if pressed.is_none() {
            for c in buttons.captures_iter(inner) {
                if strip_tags(&c[2]) == locator {
                    let name = attr(&c[1], "name");
                    let value = attr(&c[1], "value").unwrap_or_default();
                    pressed = Some(name.map(|n| (n, value)));
                    break;
                }
            }
        }
        let Some(pressed) = pressed else {
            continue;
        };

        let mut fields = Vec::new();
        for c in inputs.captures_iter(inner) {
            let kind = attr(&c[1], "type").unwrap_or_else(|| "text".to_string());
            if kind == "submit" || kind == "button" {
                continue;
            }
            if let Some(name) = attr(&c[1], "name") {
                fields.push((name, attr(&c[1], "value").unwrap_or_default()));
            }
        }
        for c in textareas.captures_iter(inner) {
            if let Some(name) = attr(&c[1], "name") {
                fields.push((name, unescape(&c[2])));
            }
        }
        fields.extend(pressed);

        return Some(Submission {
            action: attr(form_attrs, "action").unwrap_or_default(),
            method: attr(form_attrs, "method").unwrap_or_else(|| "get".to_string()),
            fields,
            confirm: attr(form_attrs, "onsubmit").is_some_and(|js| js.contains("confirm(")),
        });
    }
    None
}
