//! Content-Security-Policy directive handling for the response hook.

/// Contents of a Content-Security-Policy header, directive order preserved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives(Vec<(String, Vec<String>)>);

impl Directives {
    /// Parse a CSP header value.
    ///
    /// Each `;`-separated part is a directive name followed by its
    /// sources. A repeated directive's later occurrence replaces the
    /// earlier one.
    pub fn parse(header: &str) -> Self {
        let mut directives = Directives::default();
        for part in header.split(';') {
            let mut tokens = part.split_whitespace();
            let Some(name) = tokens.next() else {
                continue;
            };
            let sources: Vec<String> = tokens.map(str::to_string).collect();
            match directives.0.iter_mut().find(|(n, _)| n == name) {
                Some((_, existing)) => *existing = sources,
                None => directives.0.push((name.to_string(), sources)),
            }
        }

        directives
    }

    /// Add sources to a directive, keeping existing entries and their
    /// order. The directive is created if absent.
    pub fn merge(&mut self, directive: &str, sources: &[&str]) {
        if !self.0.iter().any(|(n, _)| n == directive) {
            self.0.push((directive.to_string(), Vec::new()));
        }
        if let Some((_, existing)) = self.0.iter_mut().find(|(n, _)| n == directive) {
            for source in sources {
                if !existing.iter().any(|s| s.as_str() == *source) {
                    existing.push((*source).to_string());
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sources of a directive, if present
    pub fn get(&self, directive: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(n, _)| n == directive)
            .map(|(_, sources)| sources.as_slice())
    }

    /// Serialize back into a header value
    pub fn render(&self) -> String {
        self.0
            .iter()
            .map(|(name, sources)| {
                if sources.is_empty() {
                    name.clone()
                } else {
                    format!("{} {}", name, sources.join(" "))
                }
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}
