/// Strip tags from HTML/XHTML and normalize whitespace.
///
/// Rudimentary on purpose: no DOM, no entity decoding, and a `>` inside an
/// attribute value ends the tag early. Chunk boundaries downstream depend on
/// this exact output.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut inside = false;

    for ch in html.chars() {
        match ch {
            '<' => inside = true,
            '>' => inside = false,
            _ if !inside => text.push(ch),
            _ => {}
        }
    }

    let text = text.replace('\n', " ");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Convert a full HTML page to readable text for the HTML loader
pub fn html_to_text(html: &str) -> String {
    let md = html2md::parse_html(html);
    clean_text(&md)
}

fn clean_text(md: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for line in md.lines().map(str::trim_end) {
        // At most one blank line between paragraphs.
        if line.is_empty() && lines.last().map_or(true, |prev| prev.is_empty()) {
            continue;
        }
        lines.push(line);
    }
    lines.join("\n").trim_end().to_string()
}
