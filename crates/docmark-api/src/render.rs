//! HTML rendering for the browser-facing pages.
//!
//! Markdown is always embedded as escaped text so it can never execute as
//! live markup. The raw strings reach the client only through the JSON data
//! island, which the copy buttons read verbatim; display escaping cannot
//! alter the copied value.

use docmark_core::models::ConversionResult;

use crate::constants::ASSET_VERSION;

/// Escape text for embedding in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Serialize results for the inline data island. `<` is escaped so a literal
/// `</script>` inside Markdown cannot terminate the block early.
fn data_island_json(results: &[ConversionResult]) -> String {
    serde_json::to_string(results)
        .unwrap_or_else(|_| "[]".to_string())
        .replace('<', "\\u003c")
}

/// Results page: one section per converted file, plus the data island and
/// the fixed copy-button script.
pub fn results_page(results: &[ConversionResult]) -> String {
    let mut sections = String::new();
    for (index, result) in results.iter().enumerate() {
        sections.push_str(&format!(
            r#"    <div id="result-{index}" class="result">
      <h2>{name}</h2>
      <pre>{markdown}</pre>
      <button class="copy-button" data-result-index="{index}">Copy Markdown</button>
    </div>
"#,
            index = index,
            name = escape_html(&result.name),
            markdown = escape_html(&result.data),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>Markdown Results</title>
    <link rel="stylesheet" href="/assets/style.css?v={version}" />
  </head>
  <body>
    <h1>Markdown Results</h1>
{sections}    <a href="/">Upload another file</a>
    <script type="application/json" id="conversion-data">{data}</script>
    <script src="/assets/copy.js?v={version}" defer></script>
  </body>
</html>
"#,
        version = ASSET_VERSION,
        sections = sections,
        data = data_island_json(results),
    )
}

/// Home page with the upload form.
pub fn upload_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>Markdown Converter</title>
    <link rel="stylesheet" href="/assets/style.css?v={version}" />
  </head>
  <body>
    <h1>Upload your files to convert to Markdown</h1>
    <form action="/convert" method="post" enctype="multipart/form-data">
      <input type="file" name="file" multiple required />
      <button type="submit">Convert</button>
    </form>
  </body>
</html>
"#,
        version = ASSET_VERSION,
    )
}

/// Error page shown to browser clients; carries the same status code as the
/// JSON representation of the failure.
pub fn error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>Conversion Failed</title>
    <link rel="stylesheet" href="/assets/style.css?v={version}" />
  </head>
  <body>
    <h1>Conversion failed</h1>
    <p class="error">{message}</p>
    <a href="/">Back to upload</a>
  </body>
</html>
"#,
        version = ASSET_VERSION,
        message = escape_html(message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, data: &str) -> ConversionResult {
        ConversionResult {
            name: name.to_string(),
            mime_type: "text/csv".to_string(),
            tokens: 3,
            data: data.to_string(),
        }
    }

    /// Pull the data island content back out of a rendered page.
    fn data_island(page: &str) -> &str {
        let start_marker = r#"<script type="application/json" id="conversion-data">"#;
        let start = page.find(start_marker).expect("data island missing") + start_marker.len();
        let end = page[start..].find("</script>").expect("island not closed") + start;
        &page[start..end]
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"bold" & 'proud'</b>"#),
            "&lt;b&gt;&quot;bold&quot; &amp; &#39;proud&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_results_page_escapes_markdown_display() {
        let page = results_page(&[result("a.csv", "# Title <script>alert(1)</script>")]);
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!page.contains("<pre># Title <script>"));
    }

    #[test]
    fn test_data_island_round_trips_markdown_exactly() {
        let markdown = "# Title\n</script> & <pre> \"quoted\" 'single'";
        let page = results_page(&[result("tricky.csv", markdown)]);

        let parsed: Vec<ConversionResult> =
            serde_json::from_str(data_island(&page)).expect("island must be valid JSON");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].data, markdown);
    }

    #[test]
    fn test_data_island_cannot_close_early() {
        let page = results_page(&[result("x.csv", "before </script> after")]);
        let island = data_island(&page);
        assert!(island.contains("\\u003c/script>"));
        assert!(!island.contains("</script>"));
    }

    #[test]
    fn test_results_page_is_deterministic() {
        let results = vec![result("a.csv", "# a"), result("b.csv", "# b")];
        assert_eq!(results_page(&results), results_page(&results));
    }

    #[test]
    fn test_result_ids_are_indexed_and_unique() {
        // Duplicate names still get distinct element ids.
        let page = results_page(&[result("dup.csv", "# 1"), result("dup.csv", "# 2")]);
        assert!(page.contains(r#"id="result-0""#));
        assert!(page.contains(r#"id="result-1""#));
        assert!(page.contains(r#"data-result-index="0""#));
        assert!(page.contains(r#"data-result-index="1""#));
    }

    #[test]
    fn test_json_serialization_is_deterministic() {
        let results = vec![result("a.csv", "# a")];
        assert_eq!(
            serde_json::to_vec(&results).unwrap(),
            serde_json::to_vec(&results).unwrap()
        );
    }

    #[test]
    fn test_error_page_escapes_message() {
        let page = error_page("Unsupported file type: <evil>");
        assert!(page.contains("Unsupported file type: &lt;evil&gt;"));
        assert!(!page.contains("<evil>"));
    }
}
