use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

pub(super) fn truncate_with_ellipsis(input: &str, max_graphemes: usize) -> Cow<'_, str> {
    const ELLIPSIS: &str = "...";
    const ELLIPSIS_GRAPHEMES: usize = 3;

    if max_graphemes == 0 {
        return Cow::Owned(String::new());
    }

    if UnicodeSegmentation::graphemes(input, true).count() <= max_graphemes {
        return Cow::Borrowed(input);
    }

    if max_graphemes <= ELLIPSIS_GRAPHEMES {
        let head: String = UnicodeSegmentation::graphemes(input, true)
            .take(max_graphemes)
            .collect();
        return Cow::Owned(head);
    }

    let keep = max_graphemes - ELLIPSIS_GRAPHEMES;
    let mut head: String = UnicodeSegmentation::graphemes(input, true).take(keep).collect();
    head.push_str(ELLIPSIS);
    Cow::Owned(head)
}
