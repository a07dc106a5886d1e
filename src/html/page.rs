//! Wiki page assembly.
//!
//! Builds the complete standalone HTML document: banner header, event
//! sub-title, table of contents, the seven numbered sections, the
//! bottom-of-page note list, and a footer. All styling lives in an
//! embedded stylesheet so the output is a single self-contained file.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::article::ArticleSet;
use crate::category::Category;
use crate::error::Result;

use super::escape::escape_html;
use super::markup::{Footnote, apply_markup};
use super::slugify::slugify;

/// Default output file name.
pub const OUTPUT_FILE: &str = "wiki.html";

/// Site banner shown in the page header.
const SITE_NAME: &str = "Generated Wiki";

const STYLESHEET: &str = r#"
    body {
      font-family: 'Noto Sans', sans-serif;
      background-color: #ffffff;
      color: #333;
      margin: 0;
      padding: 0;
      line-height: 1.6;
    }
    .container {
      max-width: 800px;
      margin: 0 auto;
      padding: 20px;
    }
    header {
      background-color: #2e7d32;
      color: #fff;
      padding: 20px;
      text-align: center;
    }
    header h1 {
      margin: 0;
      font-size: 32px;
    }
    .sub-title {
      text-align: center;
      font-size: 26px;
      margin: 20px 0;
      color: #333;
      background-color: #ffffff;
      padding: 10px;
      border: 1px solid #ccc;
    }
    .toc {
      padding: 10px;
      margin: 20px 0;
      border-bottom: 1px solid #ccc;
    }
    .toc ul {
      list-style: none;
      padding-left: 0;
    }
    .toc li {
      margin-bottom: 8px;
    }
    .toc a {
      color: #007acc;
      text-decoration: none;
      font-weight: bold;
    }
    section {
      margin-bottom: 30px;
      padding: 20px;
      border: 1px solid #81c784;
      border-radius: 4px;
      background-color: #ffffff;
    }
    section h2 {
      margin-bottom: 15px;
      border-bottom: 1px solid #c8e6c9;
      padding-bottom: 5px;
    }
    .keyword {
      color: #00aaff;
    }
    .footnote-ref {
      text-decoration: none;
      color: #00aaff;
    }
    .footnotes {
      font-size: 14px;
      color: #555;
      border-top: 1px solid #ccc;
      padding-top: 10px;
    }
    .footnotes ol {
      padding-left: 20px;
    }
    .footnotes a {
      text-decoration: none;
      color: #00aaff;
    }
    footer {
      text-align: center;
      font-size: 14px;
      color: #555;
      margin-top: 30px;
      padding: 20px;
      border-top: 1px solid #ccc;
    }
"#;

struct Section {
    heading: String,
    id: String,
    body: String,
}

/// Render the complete wiki document for `event_title`.
///
/// Section bodies go through the markup transform with document-wide
/// footnote numbering; newlines in the prose render as `<br/>`.
pub fn render_page(event_title: &str, articles: &ArticleSet) -> String {
    let mut sections = Vec::with_capacity(Category::COUNT);
    let mut footnotes: Vec<Footnote> = Vec::new();
    let mut next_number = 1;

    for (i, category) in Category::ALL.into_iter().enumerate() {
        let title = category.section_title(event_title);
        let result = apply_markup(articles.article(category), next_number);
        next_number = result.next_number;
        footnotes.extend(result.footnotes);
        sections.push(Section {
            heading: format!("{}. {}", i + 1, escape_html(&title)),
            id: slugify(&title),
            body: result.html.replace('\n', "<br/>"),
        });
    }

    let mut doc = String::new();
    doc.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    doc.push_str("  <meta charset=\"UTF-8\">\n");
    doc.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    writeln!(
        doc,
        "  <title>{} - {SITE_NAME}</title>",
        escape_html(event_title)
    )
    .unwrap();
    writeln!(doc, "  <style>{STYLESHEET}  </style>").unwrap();
    doc.push_str("</head>\n<body>\n  <div class=\"container\">\n");

    writeln!(doc, "    <header>\n      <h1>{SITE_NAME}</h1>\n    </header>").unwrap();
    writeln!(
        doc,
        "    <div class=\"sub-title\">{}</div>",
        escape_html(event_title)
    )
    .unwrap();

    // Table of contents
    doc.push_str("    <div class=\"toc\">\n      <h2>Contents</h2>\n      <ul>\n");
    for section in &sections {
        writeln!(
            doc,
            "        <li><a href=\"#{}\">{}</a></li>",
            section.id, section.heading
        )
        .unwrap();
    }
    doc.push_str("      </ul>\n    </div>\n");

    // Sections
    for section in &sections {
        writeln!(
            doc,
            "    <section id=\"{}\">\n      <h2>{}</h2>\n      <p>{}</p>\n    </section>",
            section.id, section.heading, section.body
        )
        .unwrap();
    }

    // Notes
    if !footnotes.is_empty() {
        doc.push_str("    <div class=\"footnotes\">\n      <h2>Notes</h2>\n      <ol>\n");
        for note in &footnotes {
            writeln!(
                doc,
                "        <li id=\"footnote-{n}\"><a href=\"#footnote-ref-{n}\">[{n}]</a> {}</li>",
                note.content,
                n = note.number
            )
            .unwrap();
        }
        doc.push_str("      </ol>\n    </div>\n");
    }

    writeln!(
        doc,
        "    <footer>\n      <p>&copy; {SITE_NAME}. All rights reserved.</p>\n    </footer>"
    )
    .unwrap();
    doc.push_str("  </div>\n</body>\n</html>\n");
    doc
}

/// Write a rendered document to disk.
pub fn write_page(html: &str, path: &Path) -> Result<()> {
    fs::write(path, html)?;
    Ok(())
}
