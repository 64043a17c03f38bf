// src/card.rs
use crate::{
    config::consts::{ANONYMOUS, ELLIPSIS, EXCERPT_CHARS},
    core::sanitize::{escape_html, truncate_chars},
    model::Offering,
};

/// Display summary of one offering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardView {
    pub display_name: String,
    pub location_label: String,
    pub excerpt: String,
}

/// A card bound to its position in the current filtered view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub index: usize,
    pub view: CardView,
}

pub fn display_name(o: &Offering) -> String {
    s!(o.name().unwrap_or(ANONYMOUS))
}

/// "City, Country", whichever half exists, or "".
pub fn location_label(city: Option<&str>, country: Option<&str>) -> String {
    match (city, country) {
        (Some(city), Some(country)) => join!(city, ", ", country),
        (Some(one), None) | (None, Some(one)) => s!(one),
        (None, None) => s!(),
    }
}

pub fn excerpt(body: &str) -> String {
    truncate_chars(body, EXCERPT_CHARS, ELLIPSIS)
}

pub fn project(o: &Offering) -> CardView {
    CardView {
        display_name: display_name(o),
        location_label: location_label(o.city(), o.country()),
        excerpt: excerpt(o.body().unwrap_or("")),
    }
}

impl CardView {
    /// Card markup with every user-supplied field escaped.
    pub fn to_html(&self, index: usize) -> String {
        let mut out = String::with_capacity(256 + self.excerpt.len());
        out.push_str(&format!("<div class=\"offering-card\" data-index=\"{index}\">\n"));
        out.push_str("  <div class=\"card-header\">\n");
        out.push_str(&format!("    <h3 class=\"card-name\">{}</h3>\n", escape_html(&self.display_name)));
        if !self.location_label.is_empty() {
            out.push_str(&format!(
                "    <div class=\"card-location\"><span>{}</span></div>\n",
                escape_html(&self.location_label)
            ));
        }
        out.push_str("  </div>\n");
        out.push_str(&format!("  <div class=\"card-excerpt\">{}</div>\n", escape_html(&self.excerpt)));
        out.push_str("  <div class=\"card-footer\"><span class=\"read-more\">Read Full Offering</span></div>\n");
        out.push_str("</div>\n");
        out
    }
}

impl Card {
    pub fn to_html(&self) -> String {
        self.view.to_html(self.index)
    }
}
