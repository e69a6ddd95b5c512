//! Sitemap document parsing and entry normalization.
//!
//! Handles XML url sets, XML sitemap indexes, and plain-text sitemaps (one
//! URL per line). Raw entries keep the loose single-or-repeated field shape
//! the formats allow; `normalize` coerces them into `SitemapEntry`.

use anyhow::{Context, Result};

use super::SitemapEntry;

/// One entry as it came off the wire, before normalization.
#[derive(Debug, Clone)]
pub enum RawEntry {
    /// A bare location, from a plain-text sitemap line.
    Loc(String),
    /// A `<url>` record from an XML url set.
    Record(RawRecord),
}

/// Field values of a `<url>` record. Sitemap XML may legally repeat any of
/// these, so everything is a list; in practice each holds zero or one value.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    pub loc: Vec<String>,
    pub lastmod: Vec<String>,
    pub changefreq: Vec<String>,
    pub priority: Vec<String>,
    pub image: Vec<String>,
}

/// A parsed sitemap document: either entries, or child sitemaps to recurse
/// into.
#[derive(Debug)]
pub enum SitemapDocument {
    UrlSet(Vec<RawEntry>),
    Index(Vec<String>),
}

/// Parses sitemap content. Content starting with `<` is treated as XML,
/// anything else as a plain-text URL list.
pub fn parse_document(text: &str) -> Result<SitemapDocument> {
    if text.trim_start().starts_with('<') {
        parse_xml(text)
    } else {
        Ok(SitemapDocument::UrlSet(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| RawEntry::Loc(line.to_string()))
                .collect(),
        ))
    }
}

fn parse_xml(text: &str) -> Result<SitemapDocument> {
    let doc = roxmltree::Document::parse(text).context("parse sitemap XML")?;
    let root = doc.root_element();

    match root.tag_name().name() {
        "urlset" => {
            let entries = root
                .children()
                .filter(|node| node.is_element() && node.tag_name().name() == "url")
                .map(|node| RawEntry::Record(parse_record(node)))
                .collect();
            Ok(SitemapDocument::UrlSet(entries))
        }
        "sitemapindex" => {
            let children = root
                .children()
                .filter(|node| node.is_element() && node.tag_name().name() == "sitemap")
                .filter_map(|node| element_text(node, "loc"))
                .collect();
            Ok(SitemapDocument::Index(children))
        }
        other => anyhow::bail!("unrecognized sitemap root element <{}>", other),
    }
}

fn parse_record(url_node: roxmltree::Node) -> RawRecord {
    let mut record = RawRecord::default();
    for field in url_node.children().filter(|n| n.is_element()) {
        match field.tag_name().name() {
            "loc" => push_text(&mut record.loc, field),
            "lastmod" => push_text(&mut record.lastmod, field),
            "changefreq" => push_text(&mut record.changefreq, field),
            "priority" => push_text(&mut record.priority, field),
            // <image:image><image:loc>…</image:loc></image:image>
            "image" => {
                if let Some(loc) = element_text(field, "loc") {
                    record.image.push(loc);
                }
            }
            _ => {}
        }
    }
    record
}

fn push_text(values: &mut Vec<String>, node: roxmltree::Node) {
    if let Some(text) = node.text() {
        let text = text.trim();
        if !text.is_empty() {
            values.push(text.to_string());
        }
    }
}

fn element_text(parent: roxmltree::Node, name: &str) -> Option<String> {
    parent
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
        .and_then(|n| n.text())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Coerces a raw entry into a `SitemapEntry`, wrapping a bare location in a
/// one-element list. Entries with no resolvable location are dropped.
pub fn normalize(raw: RawEntry) -> Option<SitemapEntry> {
    fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
        if values.is_empty() {
            None
        } else {
            Some(values)
        }
    }

    match raw {
        RawEntry::Loc(loc) => {
            let loc = loc.trim();
            if loc.is_empty() {
                return None;
            }
            Some(SitemapEntry {
                locations: vec![loc.to_string()],
                last_modified: None,
                change_frequency: None,
                priority: None,
                image: None,
            })
        }
        RawEntry::Record(record) => {
            if record.loc.is_empty() {
                return None;
            }
            Some(SitemapEntry {
                locations: record.loc,
                last_modified: non_empty(record.lastmod),
                change_frequency: non_empty(record.changefreq),
                priority: non_empty(record.priority),
                image: non_empty(record.image),
            })
        }
    }
}
