//! Rendered document and search cursor.
//!
//! Stand-in for a JSON tree component: pretty-prints the document and walks
//! over lines matching the search query. It reacts to search requests by
//! watching the controller's [`SearchDirection`] value change.

use crate::state::{Direction, SearchDirection};

/// A parsed, pretty-printed document plus search position.
#[derive(Debug, Clone, Default)]
pub struct DocumentView {
    rendered: String,
    matches: Vec<usize>,
    selected: Option<usize>,
    last_direction: Option<SearchDirection>,
}

impl DocumentView {
    /// Parses `text` as JSON. The error string is the parser's own message.
    pub fn render(text: &str) -> Result<Self, String> {
        let value: serde_json::Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
        let rendered = serde_json::to_string_pretty(&value).map_err(|e| e.to_string())?;
        Ok(Self {
            rendered,
            ..Self::default()
        })
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Sets the search query and jumps to the first match.
    pub fn set_query(&mut self, query: &str) {
        let needle = query.to_lowercase();
        self.matches = if needle.is_empty() {
            Vec::new()
        } else {
            self.rendered
                .lines()
                .enumerate()
                .filter(|(_, line)| line.to_lowercase().contains(&needle))
                .map(|(index, _)| index)
                .collect()
        };
        self.selected = if self.matches.is_empty() { None } else { Some(0) };
    }

    /// Moves the cursor when the requested direction differs from the last one seen.
    pub fn observe_direction(&mut self, direction: Option<SearchDirection>) {
        if direction == self.last_direction {
            return;
        }
        self.last_direction = direction;
        if let Some(direction) = direction {
            self.step(direction.direction());
        }
    }

    /// Records `direction` as seen without moving, e.g. after re-rendering edited text.
    pub fn acknowledge_direction(&mut self, direction: Option<SearchDirection>) {
        self.last_direction = direction;
    }

    pub fn last_direction(&self) -> Option<SearchDirection> {
        self.last_direction
    }

    fn step(&mut self, direction: Direction) {
        let total = self.matches.len();
        if total == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0);
        self.selected = Some(match direction {
            Direction::Next => (current + 1) % total,
            Direction::Previous => (current + total - 1) % total,
        });
    }

    /// 1-based position of the selected match, 0 when there is none.
    pub fn selected_result(&self) -> usize {
        self.selected.map(|index| index + 1).unwrap_or(0)
    }

    pub fn total_results(&self) -> usize {
        self.matches.len()
    }

    /// Text of the line holding the selected match.
    pub fn selected_line(&self) -> Option<&str> {
        let line = *self.matches.get(self.selected?)?;
        self.rendered.lines().nth(line).map(str::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{"name": "alpha", "items": ["alpine", "beta", "Alps"]}"#;

    #[test]
    fn invalid_json_reports_parser_message() {
        let error = DocumentView::render("{\"a\":1}\n{\"b\":2}").unwrap_err();
        assert!(error.contains("line 2"), "unexpected message: {}", error);
    }

    #[test]
    fn query_matches_lines_case_insensitively() {
        let mut view = DocumentView::render(DOC).unwrap();

        view.set_query("al");

        assert_eq!(view.total_results(), 3);
        assert_eq!(view.selected_result(), 1);
        assert_eq!(view.selected_line(), Some("\"alpine\","));
    }

    #[test]
    fn empty_query_has_no_results() {
        let mut view = DocumentView::render(DOC).unwrap();

        view.set_query("");

        assert_eq!(view.total_results(), 0);
        assert_eq!(view.selected_result(), 0);
        assert_eq!(view.selected_line(), None);
    }

    #[test]
    fn cursor_moves_only_when_direction_value_changes() {
        let mut view = DocumentView::render(DOC).unwrap();
        view.set_query("al");

        view.observe_direction(Some(SearchDirection::Next { increment: 0 }));
        assert_eq!(view.selected_result(), 2);

        view.observe_direction(Some(SearchDirection::Next { increment: 0 }));
        assert_eq!(view.selected_result(), 2);

        view.observe_direction(Some(SearchDirection::Next { increment: 1 }));
        assert_eq!(view.selected_result(), 3);

        view.observe_direction(Some(SearchDirection::Next { increment: 2 }));
        assert_eq!(view.selected_result(), 1);

        view.observe_direction(Some(SearchDirection::Previous { increment: 0 }));
        assert_eq!(view.selected_result(), 3);
    }

    #[test]
    fn acknowledged_direction_does_not_move() {
        let mut view = DocumentView::render(DOC).unwrap();
        view.set_query("al");

        view.acknowledge_direction(Some(SearchDirection::Next { increment: 3 }));
        view.observe_direction(Some(SearchDirection::Next { increment: 3 }));

        assert_eq!(view.selected_result(), 1);
        assert_eq!(view.last_direction(), Some(SearchDirection::Next { increment: 3 }));
    }

    #[test]
    fn cleared_direction_does_not_move() {
        let mut view = DocumentView::render(DOC).unwrap();
        view.set_query("al");

        view.observe_direction(None);

        assert_eq!(view.selected_result(), 1);
    }
}
