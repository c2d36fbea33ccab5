use crate::type_catalog::Member;
use regex::Regex;

/// Line classifier for Go struct declarations.
///
/// Recognition is purely textual. A declaration opens with a header line such as
/// `type User struct {`, and every following line is tried as a named member
/// (`Owner *Account`, `Tags []string`) and then as an embedded member (`Base`,
/// `*Base`) until a line starting with `}` closes the body.
///
/// # Example
///
/// ```
/// use struct_graph::parser::LineClassifier;
///
/// let classifier = LineClassifier::new();
/// assert_eq!(classifier.type_header("type User struct {"), Some("User"));
///
/// let member = classifier.member("\tOwner *Account").unwrap();
/// assert_eq!(member.name, "Owner");
/// assert_eq!(member.attribute, "*");
/// assert_eq!(member.type_name, "Account");
/// ```
pub struct LineClassifier {
    header: Regex,
    named: Regex,
    embedded: Regex,
}

impl LineClassifier {
    /// Compiles the three line patterns.
    pub fn new() -> Self {
        Self {
            header: Regex::new(r"^type\s+([A-Za-z][A-Za-z0-9]*)\s+struct\s+\{$")
                .expect("valid regex"),
            named: Regex::new(r"^\s*([A-Za-z][A-Za-z0-9]*)\s+([\[\]\*]+|)([A-Za-z][A-Za-z0-9]*)")
                .expect("valid regex"),
            embedded: Regex::new(r"^\s*(\*?)([A-Za-z][A-Za-z0-9]*)").expect("valid regex"),
        }
    }

    /// Returns the declared type name if `line` opens a struct body.
    pub fn type_header<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.header
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Classifies a line inside a struct body.
    ///
    /// The named-member pattern wins over the embedded one. Lines matching neither
    /// (comments, blank lines, the closing brace) yield `None`.
    pub fn member(&self, line: &str) -> Option<Member> {
        if let Some(caps) = self.named.captures(line) {
            return Some(Member::named(&caps[1], &caps[2], &caps[3]));
        }

        self.embedded
            .captures(line)
            .map(|caps| Member::embedded(&caps[2]))
    }

    /// Whether `line` ends the open struct body.
    pub fn closes_type(line: &str) -> bool {
        line.trim_start().starts_with('}')
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}
