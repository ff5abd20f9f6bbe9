use crate::markup::{color_class, escape_html};

/// Gap between the art column and the info column.
const GUTTER: usize = 3;

/// Lay ASCII art out to the left of `info` lines, neofetch style.
///
/// Art lines are plain text and get escaped here; info lines are already
/// markup. Width is measured in chars so wide glyphs count once.
pub fn compose(art: &[String], color: Option<&str>, info: &[String]) -> String {
    if art.is_empty() {
        return info.join("\n");
    }

    let width = art.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let class = color_class(color);

    let mut rows = Vec::with_capacity(art.len().max(info.len()));
    for i in 0..art.len().max(info.len()) {
        let art_line = art.get(i).map(String::as_str).unwrap_or("");
        let info_line = info.get(i).map(String::as_str).unwrap_or("");

        let mut row = String::new();
        if !art_line.is_empty() {
            row.push_str(&format!(
                "<span class=\"{}\">{}</span>",
                class,
                escape_html(art_line)
            ));
        }
        if !info_line.is_empty() {
            let pad = width - art_line.chars().count() + GUTTER;
            row.push_str(&" ".repeat(pad));
            row.push_str(info_line);
        }
        rows.push(row);
    }
    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art() -> Vec<String> {
        vec!["/\\".to_string(), "/  \\".to_string()]
    }

    #[test]
    fn test_no_art_is_info_only() {
        let info = vec!["a".to_string(), "b".to_string()];
        assert_eq!(compose(&[], None, &info), "a\nb");
    }

    #[test]
    fn test_info_column_aligned() {
        let info = vec!["name".to_string(), "role".to_string(), "extra".to_string()];
        let out = compose(&art(), Some("green"), &info);
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "<span class=\"text-green-400\">/\\</span>     name");
        assert_eq!(rows[1], "<span class=\"text-green-400\">/  \\</span>   role");
        assert_eq!(rows[2], "       extra");
    }

    #[test]
    fn test_art_taller_than_info() {
        let out = compose(&art(), None, &["x".to_string()]);
        assert_eq!(out.lines().count(), 2);
        assert!(out.ends_with("/  \\</span>"));
    }
}
