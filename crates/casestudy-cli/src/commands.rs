//! Command implementations
//!
//! Each command returns the text to print so the binary stays a thin
//! dispatcher.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{bail, Context, Result};
use casestudy_builder::{DocumentBuilder, IconPicker};
use casestudy_render::markdown::{document_markdown, report_markdown};
use casestudy_render::{derive_tabs, ReportViewer};
use casestudy_schema::{codec, ensure, CaseStudyDocument, DocumentPath, Icon, OptionalSection, RoadmapBucket};
use casestudy_store::{load_document, save_document, FileStore, RecordId, RecordKind, RecordStore};
use serde_json::Value;

use crate::config::CliConfig;

/// Read a document file for editing; an empty file is a blank document
pub(crate) fn read_document(path: &Path) -> Result<CaseStudyDocument> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let document = codec::decode_stored(Some(text.as_str()))
        .with_context(|| format!("{} is not a case study document", path.display()))?;
    Ok(ensure(document))
}

fn write_document(path: &Path, builder: &DocumentBuilder) -> Result<()> {
    let mut text = builder.to_json()?;
    text.push('\n');
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

fn open(path: &Path, config: &CliConfig) -> Result<DocumentBuilder> {
    Ok(DocumentBuilder::new(
        Some(read_document(path)?),
        config.builder.clone(),
    ))
}

/// Blank document with every required section
pub(crate) fn new_document(config: &CliConfig) -> Result<String> {
    Ok(codec::serialize(&ensure(None), config.builder.pretty_json)?)
}

/// Check that a file holds a document and report icon names the renderer will not recognise
pub(crate) fn validate(path: &Path) -> Result<String> {
    let document = read_document(path)?;
    let mut out = String::new();

    let mut icon_fields: Vec<(String, &str)> = document
        .features
        .items
        .iter()
        .enumerate()
        .map(|(i, f)| (format!("features.items.{i}.icon"), f.icon.as_str()))
        .collect();
    if let Some(header) = &document.header {
        icon_fields.extend(header.icon.as_deref().map(|i| ("header.icon".to_string(), i)));
        icon_fields.extend(
            header
                .badge_icon
                .as_deref()
                .map(|i| ("header.badgeIcon".to_string(), i)),
        );
    }
    for (field, name) in icon_fields {
        if !name.is_empty() && Icon::from_name(name).is_none() {
            writeln!(out, "warning: {field}: unknown icon '{name}', fallback glyph is shown")?;
        }
    }

    let tabs = derive_tabs(Some(&document));
    writeln!(out, "ok: '{}' ({} tabs)", document.meta.title, tabs.len())?;
    Ok(out)
}

/// Tab ids and labels, one per line
pub(crate) fn tabs(path: &Path) -> Result<String> {
    let document = read_document(path)?;
    Ok(derive_tabs(Some(&document))
        .into_iter()
        .map(|tab| format!("{}\t{}\n", tab.id(), tab.label()))
        .collect())
}

/// Markdown of one tab, or of the whole report with `all`
pub(crate) fn render(path: &Path, tab: Option<&str>, all: bool, config: &CliConfig) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let document = codec::decode_for_display(Some(text.as_str()));

    if all {
        return Ok(document_markdown(&ensure(document), &config.render));
    }
    let mut viewer = ReportViewer::new(document, config.render.clone());
    if let Some(id) = tab {
        let shown = viewer.select_id(id);
        if shown.id() != id {
            tracing::warn!(requested = id, shown = %shown, "tab not available");
        }
    }
    Ok(report_markdown(&viewer.view()))
}

/// Set the value at a dotted path and write the file back
///
/// `value` is parsed as JSON; anything that does not parse is taken as a string.
pub(crate) fn set(path: &Path, target: &str, value: &str, config: &CliConfig) -> Result<String> {
    let target: DocumentPath = target
        .parse()
        .with_context(|| format!("invalid path '{target}'"))?;
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));

    let mut builder = open(path, config)?;
    builder
        .update(target.clone(), value)
        .with_context(|| format!("cannot set {target}"))?;
    write_document(path, &builder)?;
    Ok(format!("set {target}\n"))
}

/// Turn an optional section or roadmap bucket on or off
pub(crate) fn toggle(path: &Path, key: &str, enabled: bool, config: &CliConfig) -> Result<String> {
    let mut builder = open(path, config)?;
    if let Some(section) = OptionalSection::from_key(key) {
        builder.set_section_enabled(section, enabled)?;
    } else if let Some(bucket) = RoadmapBucket::from_key(key) {
        builder.set_bucket_enabled(bucket, enabled)?;
    } else {
        bail!("unknown section or roadmap bucket '{key}'");
    }
    write_document(path, &builder)?;
    Ok(format!("{key} {}\n", if enabled { "on" } else { "off" }))
}

/// Registry icons matching `query`
pub(crate) fn icons(query: Option<&str>, config: &CliConfig) -> String {
    let mut picker = IconPicker::for_header().with_limit(config.builder.icon_search_limit);
    picker.set_query(query.unwrap_or_default());
    if picker.is_empty_state() {
        return "no icons match\n".to_string();
    }
    picker
        .results()
        .into_iter()
        .map(|icon| format!("{}\t{}\n", icon.glyph(), icon.name()))
        .collect()
}

/// JSON Schema of the document
pub(crate) fn schema() -> Result<String> {
    Ok(serde_json::to_string_pretty(&codec::json_schema())?)
}

/// Save a document file as a record's case study; returns the record id
pub(crate) async fn store_save(
    dir: &Path,
    id: Option<&str>,
    kind: RecordKind,
    file: &Path,
) -> Result<String> {
    let document = read_document(file)?;
    let id = match id {
        Some(id) => RecordId::new(id)?,
        None => RecordId::generate(),
    };
    let store = FileStore::new(dir);
    save_document(&store, &id, kind, Some(&document)).await?;
    tracing::info!(%id, dir = %dir.display(), "record saved");
    Ok(format!("{id}\n"))
}

/// Case study JSON of a stored record, empty when the record has none
pub(crate) async fn store_load(dir: &Path, id: &str, config: &CliConfig) -> Result<String> {
    let id = RecordId::new(id)?;
    let store = FileStore::new(dir);
    match load_document(&store, &id).await? {
        Some(document) => {
            let mut text = codec::serialize(&document, config.builder.pretty_json)?;
            text.push('\n');
            Ok(text)
        }
        None => {
            tracing::info!(%id, "record has no case study");
            Ok(String::new())
        }
    }
}

/// Record ids in a store directory
pub(crate) async fn store_list(dir: &Path) -> Result<String> {
    let store = FileStore::new(dir);
    Ok(store
        .list()
        .await?
        .into_iter()
        .map(|id| format!("{id}\n"))
        .collect())
}
