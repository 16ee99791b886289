use pulldown_cmark::{html, Options, Parser};

/// Converts markdown content to an HTML fragment.
///
/// The fragment carries no `<html>`/`<body>` wrapper; callers embed it
///  in their own page layout.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading() {
        assert_eq!(render_markdown("### Heading"), "<h3>Heading</h3>\n");
    }

    #[test]
    fn test_emphasis_and_lists() {
        let html = render_markdown("- *one*\n- **two**\n");
        assert!(html.contains("<li><em>one</em></li>"));
        assert!(html.contains("<li><strong>two</strong></li>"));
    }

    #[test]
    fn test_tables_enabled() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
    }
}
