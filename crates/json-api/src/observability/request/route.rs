//! Route labels with numeric segments collapsed, so `/orders/42` and
//! `/orders/7` land in the same span name and metric series.

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RouteLabel(String);

impl RouteLabel {
    pub(super) fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path
            .split('/')
            .map(|segment| if is_numeric(segment) { "{id}" } else { segment })
            .collect();

        Self(segments.join("/"))
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }

    pub(super) fn span_name(&self, method: &str) -> String {
        format!("{method} {}", self.0)
    }
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit())
}
