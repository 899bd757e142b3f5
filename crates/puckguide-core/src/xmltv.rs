//! XMLTV guide document writer.
//!
//! Builds the guide listing as a string: one `<channel>` element followed
//! by one `<programme>` per entry. Text content and attribute values are
//! escaped; timestamps use the XMLTV form `YYYYMMDDHHMMSS +0000` (all
//! times are kept in UTC end to end).

use chrono::{DateTime, Utc};

use crate::guide::{LocalizedText, Programme};

/// The channel the guide is generated for.
#[derive(Debug, Clone)]
pub struct Channel {
    pub id: String,
    pub display_name: String,
    pub icon: Option<String>,
    pub url: Option<String>,
}

fn format_timestamp(t: DateTime<Utc>) -> String {
    t.format("%Y%m%d%H%M%S +0000").to_string()
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn push_text_element(xml: &mut String, indent: &str, tag: &str, text: &LocalizedText) {
    match &text.lang {
        Some(lang) => xml.push_str(&format!(
            "{indent}<{tag} lang=\"{}\">{}</{tag}>\n",
            escape_xml(lang),
            escape_xml(&text.value)
        )),
        None => xml.push_str(&format!(
            "{indent}<{tag}>{}</{tag}>\n",
            escape_xml(&text.value)
        )),
    }
}

/// Render the full guide document.
pub fn write_guide(channel: &Channel, programmes: &[Programme]) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<!DOCTYPE tv SYSTEM \"xmltv.dtd\">\n");
    xml.push_str("<tv>\n");

    xml.push_str(&format!("  <channel id=\"{}\">\n", escape_xml(&channel.id)));
    xml.push_str(&format!(
        "    <display-name>{}</display-name>\n",
        escape_xml(&channel.display_name)
    ));
    if let Some(icon) = &channel.icon {
        xml.push_str(&format!("    <icon src=\"{}\"/>\n", escape_xml(icon)));
    }
    if let Some(url) = &channel.url {
        xml.push_str(&format!("    <url>{}</url>\n", escape_xml(url)));
    }
    xml.push_str("  </channel>\n");

    for programme in programmes {
        let mut open = format!(
            "  <programme start=\"{}\"",
            format_timestamp(programme.start)
        );
        if let Some(stop) = programme.stop {
            open.push_str(&format!(" stop=\"{}\"", format_timestamp(stop)));
        }
        open.push_str(&format!(" channel=\"{}\">\n", escape_xml(&channel.id)));
        xml.push_str(&open);

        for title in &programme.title {
            push_text_element(&mut xml, "    ", "title", title);
        }
        if let Some(sub_title) = &programme.sub_title {
            push_text_element(&mut xml, "    ", "sub-title", sub_title);
        }
        if let Some(desc) = &programme.desc {
            push_text_element(&mut xml, "    ", "desc", desc);
        }

        xml.push_str(&format!(
            "    <episode-num system=\"xmltv_ns\">{}</episode-num>\n",
            escape_xml(&programme.episode.xmltv_ns())
        ));
        xml.push_str(&format!(
            "    <episode-num system=\"onscreen\">{}</episode-num>\n",
            escape_xml(&programme.episode.onscreen())
        ));

        if let Some(icon) = &programme.icon {
            xml.push_str(&format!("    <icon src=\"{}\"/>\n", escape_xml(icon)));
        }
        for image in &programme.images {
            xml.push_str(&format!(
                "    <image type=\"backdrop\" orient=\"L\">{}</image>\n",
                escape_xml(image)
            ));
        }

        xml.push_str("  </programme>\n");
    }

    xml.push_str("</tv>\n");
    xml
}
