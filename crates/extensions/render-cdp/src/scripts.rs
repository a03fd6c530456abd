//! In-page script builders. Every argument is embedded as a JSON string literal.

use serde_json::Value;

fn js_string(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

/// Split a leading inline flag group such as `(?i)` off a pattern, since
/// JavaScript regexes take flags separately.
pub(crate) fn js_regex(pattern: &str) -> (String, String) {
    if let Some(rest) = pattern.strip_prefix("(?") {
        if let Some((flags, body)) = rest.split_once(')') {
            if !flags.is_empty() && flags.chars().all(|c| "imsux".contains(c)) {
                let js_flags: String = flags.chars().filter(|c| "ims".contains(*c)).collect();
                return (body.to_string(), js_flags);
            }
        }
    }
    (pattern.to_string(), String::new())
}

/// `[{ text, href }]` for every match, in document order.
pub(crate) fn query_elements(selector: &str) -> String {
    format!(
        "Array.from(document.querySelectorAll({})).map(e => ({{ \
            text: (e.innerText || e.textContent || '').trim(), \
            href: typeof e.href === 'string' ? e.href : null \
        }}))",
        js_string(selector)
    )
}

pub(crate) fn count_elements(selector: &str) -> String {
    format!("document.querySelectorAll({}).length", js_string(selector))
}

pub(crate) fn click_selector(selector: &str) -> String {
    format!(
        "(() => {{ \
            const el = document.querySelector({}); \
            if (!el) return false; \
            el.scrollIntoView({{ block: 'center' }}); \
            el.click(); \
            return true; \
        }})()",
        js_string(selector)
    )
}

/// Click the first candidate whose visible text matches `pattern`.
pub(crate) fn click_text_match(candidates: &str, pattern: &str) -> String {
    let (source, flags) = js_regex(pattern);
    format!(
        "(() => {{ \
            const re = new RegExp({}, {}); \
            const el = Array.from(document.querySelectorAll({})) \
                .find(e => re.test((e.innerText || e.textContent || '').trim())); \
            if (!el) return false; \
            el.scrollIntoView({{ block: 'center' }}); \
            el.click(); \
            return true; \
        }})()",
        js_string(&source),
        js_string(&flags),
        js_string(candidates)
    )
}
