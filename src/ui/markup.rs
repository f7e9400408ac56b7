//! HTML markup for the search history list.
//!
//! Each entry renders as an `<li>` whose `id` is the record's timestamp; the
//! delete icon carries the same timestamp in `data-id`, which is what the
//! page hands back when the user asks to delete the entry.

use chrono::{Local, TimeZone};

use crate::types::search::SearchRecord;

const DOCUMENT_ICON_PATH: &str = r#"<path fill-rule="evenodd" d="M4 4a2 2 0 012-2h4.586A2 2 0 0112 2.586L15.414 6A2 2 0 0116 7.414V16a2 2 0 01-2 2H6a2 2 0 01-2-2V4z" clip-rule="evenodd" />"#;

const TRASH_ICON_D: &str = "M9 2a1 1 0 00-.894.553L7.382 4H4a1 1 0 000 2v10a2 2 0 002 2h8a2 2 0 002-2V6a1 1 0 100-2h-3.382l-.724-1.447A1 1 0 0011 2H9zM7 8a1 1 0 012 0v6a1 1 0 11-2 0V8zm5-1a1 1 0 00-1 1v6a1 1 0 102 0V8a1 1 0 00-1-1z";

const TIME_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Formats a millisecond timestamp as a local date and time.
pub fn format_time(time_ms: i64) -> String {
    format_time_in(time_ms, &Local)
}

/// Formats a millisecond timestamp in the given time zone.
///
/// Timestamps chrono cannot represent fall back to the raw number.
pub fn format_time_in<Tz: TimeZone>(time_ms: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_millis_opt(time_ms).single() {
        Some(dt) => dt.format(TIME_FORMAT).to_string(),
        None => time_ms.to_string(),
    }
}

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Wraps an SVG path in a centered `span.svg-container`.
pub fn svg_icon(svg_path: &str, extra_svg_classes: &str) -> String {
    format!(
        "<span class=\"svg-container\">\
         <svg xmlns=\"http://www.w3.org/2000/svg\" class=\"{}\" viewBox=\"0 0 20 20\" fill=\"currentColor\">{}</svg>\
         </span>",
        extra_svg_classes, svg_path
    )
}

/// Builds the `<li>` for one history entry.
pub fn history_item(record: &SearchRecord) -> String {
    history_item_with(record, &format_time(record.time))
}

/// Same as [`history_item`] with a pre-formatted time, so callers control the zone.
pub fn history_item_with(record: &SearchRecord, formatted_time: &str) -> String {
    let delete_path = format!(
        "<path tabindex=0 data-id={} fill-rule=\"evenodd\" d=\"{}\" clip-rule=\"evenodd\"/>",
        record.time, TRASH_ICON_D
    );
    format!(
        "<li tabindex=0 id={time}>\
         {doc}\
         <section><a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">\
         <p> {when}</p>\n<p> {query}</p></a></section>\
         {delete}\
         </li>",
        time = record.time,
        doc = svg_icon(DOCUMENT_ICON_PATH, ""),
        url = escape_html(&record.url),
        when = escape_html(formatted_time),
        query = escape_html(&record.query),
        delete = svg_icon(&delete_path, "delete-icon"),
    )
}

/// Renders every record, oldest first, one `<li>` per line.
pub fn history_items(records: &[SearchRecord]) -> String {
    records
        .iter()
        .map(history_item)
        .collect::<Vec<_>>()
        .join("\n")
}
