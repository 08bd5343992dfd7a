use crate::text_metrics::TextMeasure;

/// Greedy wrap of a comma-joined tool list into display lines.
///
/// Each word is measured together with its `", "` separator (every word but
/// the last carries one), packing left to right and starting a new line when
/// the next word would overflow `max_width`. A single word wider than the
/// budget goes alone on its own line; words are never split. Every line
/// except the last is normalized to end with a trailing comma.
pub fn wrap_tools_list(
    text: &str,
    max_width: f32,
    font_size: f32,
    measure: &dyn TextMeasure,
) -> Vec<String> {
    let words: Vec<&str> = text
        .split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect();

    let mut lines: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_width = 0.0f32;

    for (idx, word) in words.iter().enumerate() {
        let with_separator = if idx + 1 < words.len() {
            format!("{word}, ")
        } else {
            (*word).to_string()
        };
        let word_width = measure.width(&with_separator, font_size);

        if current_width + word_width > max_width {
            if current.is_empty() {
                // Oversized word: emit alone, never split mid-word.
                lines.push((*word).to_string());
            } else {
                lines.push(current.join(", "));
                current = vec![word];
                current_width = measure.width(word, font_size);
            }
        } else {
            current.push(word);
            current_width += word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current.join(", "));
    }

    let last = lines.len().saturating_sub(1);
    lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| {
            if idx < last && !line.ends_with(',') {
                format!("{line},")
            } else {
                line
            }
        })
        .collect()
}
