// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML report assembly for the demo sections.

use std::fmt::Write as _;

#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) svg: String,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{title}</title>");
    out.push_str(
        "<style>\n\
         body { font-family: system-ui, sans-serif; margin: 24px; }\n\
         section { margin-bottom: 32px; }\n\
         h2 { margin-bottom: 4px; }\n\
         p { margin-top: 0; color: #444; }\n\
         svg { border: 1px solid #ddd; }\n\
         </style>\n</head>\n<body>\n",
    );
    let _ = writeln!(out, "<h1>{title}</h1>");
    for section in sections {
        out.push_str("<section>\n");
        let _ = writeln!(out, "<h2>{}</h2>", section.title);
        let _ = writeln!(out, "<p>{}</p>", section.description);
        out.push_str(&section.svg);
        out.push_str("</section>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}
