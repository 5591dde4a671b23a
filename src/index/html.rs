const STYLE: &str = r#"  body{font-family:system-ui, -apple-system, sans-serif; background:#111; color:#eee;}
  .grid{display:grid; grid-template-columns:repeat(auto-fill, minmax(140px, 1fr)); gap:12px; padding:16px;}
  .card{background:#1b1b1b; border:1px solid #333; border-radius:10px; padding:10px;}
  .imgwrap{height:96px; display:flex; align-items:center; justify-content:center; background:#0c0c0c; border-radius:8px;}
  img{max-width:100%; max-height:96px; image-rendering:pixelated;}
  .name{margin-top:8px; font-size:12px; word-break:break-all; color:#ddd;}"#;

/// Escape text for use in HTML content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the index page: one card per image file name
pub fn render_index(title: &str, file_names: &[String]) -> String {
    let cards: Vec<String> = file_names.iter().map(|name| render_card(name)).collect();

    format!(
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n<title>Sprite Index</title>\n\
         <style>\n{STYLE}\n</style>\n</head>\n<body>\n\
         <h1 style=\"padding:16px; margin:0;\">{}</h1>\n<div class=\"grid\">\n{}\n</div>\n</body>\n</html>\n",
        escape_html(title),
        cards.join("\n")
    )
}

fn render_card(name: &str) -> String {
    let escaped = escape_html(name);
    format!(
        "<div class=\"card\">\n<div class=\"imgwrap\"><img src=\"{escaped}\" /></div>\n\
         <div class=\"name\">{escaped}</div>\n</div>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain.png"), "plain.png");
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_render_index_cards_in_order() {
        let page = render_index(
            "public/assets/v1/battle",
            &["a.png".to_string(), "b&c.png".to_string()],
        );

        assert!(page.starts_with("<!doctype html>"));
        assert!(page.contains(">public/assets/v1/battle</h1>"));
        let a = page.find(r#"src="a.png""#).unwrap();
        let b = page.find(r#"src="b&amp;c.png""#).unwrap();
        assert!(a < b);
        assert_eq!(page.matches("class=\"card\"").count(), 2);
    }

    #[test]
    fn test_render_index_empty() {
        let page = render_index("empty", &[]);
        assert!(page.contains("<div class=\"grid\">"));
        assert!(!page.contains("class=\"card\""));
    }
}
