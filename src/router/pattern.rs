use std::{collections::HashMap, sync::OnceLock};

use regex::{Captures, Regex};

/// Matches one `{identifier}` placeholder after the template has been
/// regex-escaped, so the braces appear as `\{` and `\}`.
fn escaped_placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\\\{([0-9A-Za-z_]+)\\\}").expect("placeholder pattern is valid")
    })
}

/// A path template compiled into an anchored regex plus the ordered list of
/// parameter names its capture groups bind.
///
/// Compilation is a pure function of the template string, so compiled
/// patterns can be cached indefinitely keyed by it.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    matcher: Regex,
    param_names: Vec<String>,
}

/// Compile a path template such as `/users/{id}/posts/{post_id}`.
///
/// Every character of the template is escaped for literal use before the
/// placeholders are rewritten, so templates containing `.`, `+`, `(` and the
/// like match only themselves. Each placeholder becomes a capture group
/// matching one or more word characters. The result is anchored to the whole
/// subject string, with any trailing run of `/` tolerated.
pub fn compile(template: &str) -> CompiledPattern {
    let mut param_names = Vec::new();
    let escaped = regex::escape(template);
    let body = escaped_placeholder().replace_all(&escaped, |caps: &Captures| {
        param_names.push(caps[1].to_string());
        "([0-9A-Za-z_]+)".to_string()
    });
    let anchored = format!("^{}[/]*$", body);
    let matcher = Regex::new(&anchored).expect("escaped template compiles");
    CompiledPattern {
        matcher,
        param_names,
    }
}

impl CompiledPattern {
    /// Placeholder identifiers in order of appearance. One capture group per
    /// name.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }

    /// Structural match returning the captured parameters, one entry per
    /// placeholder, or `None` when the path does not fit the template.
    pub fn extract(&self, path: &str) -> Option<HashMap<String, String>> {
        let caps = self.matcher.captures(path)?;
        Some(
            self.param_names
                .iter()
                .zip(caps.iter().skip(1))
                .map(|(name, group)| {
                    let value = group.map(|m| m.as_str().to_string()).unwrap_or_default();
                    (name.clone(), value)
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn literal_template_matches_itself_only() {
        let pattern = compile("/hello/world");
        assert!(pattern.is_match("/hello/world"));
        assert!(!pattern.is_match("/hello"));
        assert!(!pattern.is_match("/hello/world/again"));
        assert!(pattern.param_names().is_empty());
    }

    #[test]
    fn placeholders_capture_word_characters() {
        let pattern = compile("/users/{id}/posts/{post_id}");
        assert_eq!(pattern.param_names(), ["id", "post_id"]);
        let params = pattern.extract("/users/42/posts/first_post").unwrap();
        assert_eq!(params["id"], "42");
        assert_eq!(params["post_id"], "first_post");
        assert!(pattern.extract("/users/42/posts/").is_none());
        assert!(pattern.extract("/users/4/2/posts/x").is_none());
    }

    #[test]
    fn trailing_slashes_are_tolerated() {
        let pattern = compile("/users/{id}");
        for path in ["/users/42", "/users/42/", "/users/42///"] {
            let params = pattern.extract(path).unwrap();
            assert_eq!(params["id"], "42");
        }
    }

    #[test]
    fn regex_metacharacters_in_template_are_literal() {
        let pattern = compile("/files/v1.0/{name}");
        assert!(pattern.is_match("/files/v1.0/report"));
        assert!(!pattern.is_match("/files/v1X0/report"));

        let pattern = compile("/a+b/(c)/{id}");
        assert!(pattern.is_match("/a+b/(c)/7"));
        assert!(!pattern.is_match("/ab/c/7"));
    }

    #[test]
    fn extract_without_placeholders_is_empty() {
        let pattern = compile("/about");
        assert_eq!(pattern.extract("/about").unwrap(), HashMap::new());
    }

    #[test]
    fn root_template_matches_slash_runs() {
        let pattern = compile("/");
        assert!(pattern.is_match("/"));
        assert!(pattern.is_match("///"));
        assert!(!pattern.is_match(""));
        assert!(!pattern.is_match("/x"));
    }
}
