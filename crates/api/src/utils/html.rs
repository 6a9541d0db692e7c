use relaydns_application::use_cases::CacheSnapshot;
use std::fmt::Write;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_snapshot_page(snapshot: &CacheSnapshot) -> String {
    let mut page = String::with_capacity(2048);

    page.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>relaydns</title>\n</head>\n<body>\n",
    );
    let _ = writeln!(
        page,
        "<h1>relaydns</h1>\n<p>Upstream: <code>{}</code> | Backend: <code>{}</code> | Size: {}</p>",
        escape_html(&snapshot.upstream),
        escape_html(&snapshot.backend),
        snapshot.size
    );

    page.push_str(
        "<h2>Records</h2>\n<form method=\"post\" action=\"/add\">\n\
         <input name=\"domain\" placeholder=\"domain\">\n\
         <input name=\"ip\" placeholder=\"ip\">\n\
         <button type=\"submit\">Add</button>\n</form>\n\
         <table>\n<tr><th>Domain</th><th>IP</th><th></th></tr>\n",
    );
    for record in &snapshot.records {
        let _ = writeln!(
            page,
            "<tr><td>{}</td><td>{}</td><td><a href=\"/remove?domain={}\">remove</a></td></tr>",
            escape_html(&record.domain),
            escape_html(&record.ip),
            urlencoding::encode(&record.domain)
        );
    }
    page.push_str("</table>\n");

    if !snapshot.wildcard.is_empty() {
        page.push_str("<h2>Wildcard</h2>\n<table>\n<tr><th>Pattern</th><th>IP</th></tr>\n");
        for record in &snapshot.wildcard {
            let _ = writeln!(
                page,
                "<tr><td><code>{}</code></td><td>{}</td></tr>",
                escape_html(&record.domain),
                escape_html(&record.ip)
            );
        }
        page.push_str("</table>\n");
    }

    page.push_str(
        "<h2>Blacklist</h2>\n<form method=\"get\" action=\"/addBlack\">\n\
         <input name=\"domain\" placeholder=\"domain\">\n\
         <button type=\"submit\">Block</button>\n</form>\n<ul>\n",
    );
    for domain in &snapshot.black_domains {
        let _ = writeln!(
            page,
            "<li>{} <a href=\"/removeBlack?domain={}\">unblock</a></li>",
            escape_html(domain),
            urlencoding::encode(domain)
        );
    }
    page.push_str("</ul>\n</body>\n</html>\n");

    page
}
