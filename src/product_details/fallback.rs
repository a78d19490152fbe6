use scraper::{ElementRef, Html, Selector};

/// One strategy in a fallback chain.
///
/// Chains are plain slices of steps, so adding another strategy for a
/// field is a data change in its `extract_*` function.
pub(crate) enum Step {
    /// First node matched by the locator, fed through the transform.
    Select {
        locator: &'static Selector,
        transform: fn(ElementRef) -> Option<String>,
    },
    /// Rule spanning more than one node, evaluated over the whole document.
    Document(fn(&Html) -> Option<String>),
}

impl Step {
    /// Locator step with the trimmed-text transform.
    pub(crate) fn text(locator: &'static Selector) -> Self {
        Step::Select {
            locator,
            transform: trimmed_text,
        }
    }
}

/// Walks `steps` in order and returns the first value produced.
///
/// A step whose locator matches nothing, or whose transform returns
/// `None`, advances the chain instead of ending it. Exhausting every
/// step yields `None`; sentinel rendering is the caller's concern.
pub(crate) fn first_match(document: &Html, steps: &[Step]) -> Option<String> {
    steps.iter().find_map(|step| match step {
        Step::Select { locator, transform } => {
            document.select(locator).next().and_then(|node| transform(node))
        }
        Step::Document(rule) => rule(document),
    })
}

/// Trimmed text content of a node, `None` when blank.
pub(crate) fn trimmed_text(element: ElementRef) -> Option<String> {
    let text = element.text().collect::<String>();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::LazyLock;

    static SPAN: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.a").unwrap());
    static DIV: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.b").unwrap());

    #[test]
    fn first_matching_step_wins() {
        let document = Html::parse_document(
            r#"<span class="a">first</span><div class="b">second</div>"#,
        );
        let steps = [Step::text(&SPAN), Step::text(&DIV)];
        assert_eq!(first_match(&document, &steps), Some("first".into()));
    }

    #[test]
    fn blank_node_advances_the_chain() {
        let document =
            Html::parse_document(r#"<span class="a">   </span><div class="b">second</div>"#);
        let steps = [Step::text(&SPAN), Step::text(&DIV)];
        assert_eq!(first_match(&document, &steps), Some("second".into()));
    }

    #[test]
    fn exhausted_chain_yields_none() {
        let document = Html::parse_document("<p>nothing to match</p>");
        let steps = [Step::text(&SPAN), Step::text(&DIV)];
        assert_eq!(first_match(&document, &steps), None);
    }

    #[test]
    fn document_step_runs_like_any_other() {
        let document = Html::parse_document("<p>ignored</p>");
        let steps = [Step::text(&SPAN), Step::Document(|_| Some("computed".into()))];
        assert_eq!(first_match(&document, &steps), Some("computed".into()));
    }
}
