//! Inline image and link syntax. Images must be expanded first: the two
//! share the bracket syntax, and a link match would strand the leading
//! `!` as literal text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"!\[(.*?)\]\((.*?)(?:\s+"(.*?)")?\)"#).unwrap()
});

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[(.*?)\]\((.*?)(?:\s+"(.*?)")?\)"#).unwrap()
});

/// `![alt](url "title")` → `<img />`. The title is optional.
pub(super) fn expand_images(text: &str) -> String {
    IMAGE
        .replace_all(text, |caps: &Captures<'_>| {
            let title = caps
                .get(3)
                .map(|m| format!(" title=\"{}\"", m.as_str()))
                .unwrap_or_default();
            format!("<img src=\"{}\" alt=\"{}\"{} />", &caps[2], &caps[1], title)
        })
        .into_owned()
}

/// `[text](url "title")` → `<a>`. The title is optional.
pub(super) fn expand_links(text: &str) -> String {
    LINK.replace_all(text, |caps: &Captures<'_>| {
        let title = caps
            .get(3)
            .map(|m| format!(" title=\"{}\"", m.as_str()))
            .unwrap_or_default();
        format!("<a href=\"{}\"{}>{}</a>", &caps[2], title, &caps[1])
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_with_and_without_title() {
        assert_eq!(
            expand_images("![logo](logo.png)"),
            "<img src=\"logo.png\" alt=\"logo\" />"
        );
        assert_eq!(
            expand_images("![logo](logo.png \"The logo\")"),
            "<img src=\"logo.png\" alt=\"logo\" title=\"The logo\" />"
        );
    }

    #[test]
    fn link_with_and_without_title() {
        assert_eq!(
            expand_links("[here](https://example.com)"),
            "<a href=\"https://example.com\">here</a>"
        );
        assert_eq!(
            expand_links("[here](https://example.com \"Example Site\")"),
            "<a href=\"https://example.com\" title=\"Example Site\">here</a>"
        );
    }

    #[test]
    fn several_images_in_one_line() {
        assert_eq!(
            expand_images("![a](1.png) mid ![b](2.png)"),
            "<img src=\"1.png\" alt=\"a\" /> mid <img src=\"2.png\" alt=\"b\" />"
        );
    }

    #[test]
    fn unterminated_syntax_is_untouched() {
        assert_eq!(expand_images("![alt](nope"), "![alt](nope");
        assert_eq!(expand_links("[text](nope"), "[text](nope");
    }

    #[test]
    fn image_pass_leaves_plain_links_for_the_link_pass() {
        let text = "![i](a.png) and [l](b)";
        let after_images = expand_images(text);
        assert_eq!(
            expand_links(&after_images),
            "<img src=\"a.png\" alt=\"i\" /> and <a href=\"b\">l</a>"
        );
    }
}
