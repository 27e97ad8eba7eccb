/// Default category-axis wrap width, in characters.
pub const DEFAULT_LABEL_WRAP_WIDTH: usize = 16;

/// Greedy word-wrap for category-axis labels.
///
/// Labels within `max_width` characters are returned untouched. Longer labels
/// are split on whitespace, accumulating words on a line until the next word
/// would exceed `max_width`. Words longer than `max_width` occupy their own
/// line unbroken.
#[must_use]
pub fn wrap_label(label: &str, max_width: usize) -> Vec<String> {
    if label.chars().count() <= max_width {
        return vec![label.to_owned()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for word in label.split_whitespace() {
        let word_width = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::wrap_label;

    #[test]
    fn short_labels_stay_on_one_line() {
        assert_eq!(wrap_label("Q1 2024", 16), vec!["Q1 2024"]);
        assert_eq!(wrap_label("", 16), vec![""]);
    }

    #[test]
    fn long_labels_wrap_on_word_boundaries() {
        assert_eq!(
            wrap_label("Operating expenses excluding depreciation", 16),
            vec!["Operating", "expenses", "excluding", "depreciation"]
        );
        assert_eq!(
            wrap_label("Net revenue from core operations", 16),
            vec!["Net revenue from", "core operations"]
        );
    }

    #[test]
    fn oversized_words_are_not_broken() {
        assert_eq!(
            wrap_label("Interdepartmentalization costs", 10),
            vec!["Interdepartmentalization", "costs"]
        );
    }
}
