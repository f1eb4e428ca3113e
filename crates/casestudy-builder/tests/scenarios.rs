use casestudy_builder::{DocumentBuilder, IconPicker, ListField, RawEdit, RawJsonEditor, SerializedField};
use casestudy_schema::{codec, ensure, Icon, OptionalSection, RoadmapBucket};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn title_and_heritage_survive_storage() {
    let mut builder = DocumentBuilder::new(Some(ensure(None)), Default::default());
    builder.update(["meta", "title"], json!("Acme Redesign")).unwrap();
    builder
        .update(["overview", "heritage", "items"], json!([{"text": "v1"}]))
        .unwrap();

    let text = codec::serialize(builder.document(), false).unwrap();
    let loaded = codec::deserialize(&text).unwrap();

    assert_eq!(loaded.meta.title, "Acme Redesign");
    assert_eq!(loaded.overview.heritage.items.len(), 1);
    assert_eq!(loaded.overview.heritage.items[0].text, "v1");
    assert_eq!(loaded.overview.heritage.items[0].label, None);
}

#[test]
fn authoring_session_end_to_end() {
    let mut builder = DocumentBuilder::default();
    let field = SerializedField::attach(&mut builder).unwrap();

    builder.update(["meta", "agency"], json!("Northwind")).unwrap();
    let feature = builder.add_item(ListField::Features).unwrap();
    builder
        .update(
            ["features", "items", &feature.to_string(), "title"],
            json!("Ordering"),
        )
        .unwrap();
    let mut picker = IconPicker::for_feature(feature);
    picker.set_query("zap");
    let icon = picker.results()[0];
    picker.select(&mut builder, icon).unwrap();
    builder.add_item(ListField::FeaturePoints { feature }).unwrap();

    builder.set_bucket_enabled(RoadmapBucket::Ux, false).unwrap();
    builder
        .set_section_enabled(OptionalSection::Deployment, true)
        .unwrap();

    let stored = codec::deserialize(&field.flush().unwrap().unwrap()).unwrap();
    assert_eq!(&stored, builder.document());
    assert_eq!(stored.features.items[0].icon, Icon::Zap.name());
    assert_eq!(stored.features.items[0].points.len(), 1);
    assert!(stored.roadmap.ux.is_none());
    assert_eq!(stored.deployment.map(|d| d.steps.len()), Some(0));
}

#[test]
fn raw_edit_then_structured_edit() {
    let mut builder = DocumentBuilder::default();
    let mut raw = RawJsonEditor::open(&builder).unwrap();

    assert!(matches!(raw.edit("{ broken", &mut builder), RawEdit::Rejected { .. }));
    assert_eq!(builder.document(), &ensure(None));

    let edited = r#"{"meta": {"title": "From raw"}, "visuals": {"title": "G", "items": []}}"#;
    assert_eq!(raw.edit(edited, &mut builder), RawEdit::Applied);
    builder.add_item(ListField::Visuals).unwrap();

    let doc = builder.document();
    assert_eq!(doc.meta.title, "From raw");
    assert_eq!(doc.visuals.as_ref().unwrap().items.len(), 1);
    assert!(doc.header.is_none());
}
