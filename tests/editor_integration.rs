use obapps::api::{ObApps, RuleUpdate};
use obapps::attrspec::ActionValue;
use obapps::model::{MatchCriterion, MatchField, WindowAttributes};
use obapps::store::fs::FileStore;
use std::fs;

const RC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<applications>
  <!-- mail always on desktop 3 -->
  <application class="Thunderbird" name="Mail">
    <desktop>3</desktop>
    <maximized>true</maximized>
  </application>
  <theme_hint experimental="yes"/>
  <application class="Gimp*">
    <layer>above</layer>
  </application>
</applications>
"#;

#[test]
fn untouched_session_saves_byte_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rc.xml");
    fs::write(&path, RC).unwrap();

    let mut api = ObApps::open(FileStore::new(&path)).unwrap();
    api.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), RC);
}

#[test]
fn edit_session_preserves_everything_it_did_not_touch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rc.xml");
    fs::write(&path, RC).unwrap();

    let mut api = ObApps::open(FileStore::new(&path)).unwrap();
    let gimp = api.document().rules().nth(1).unwrap().id;
    api.update_rule(gimp, RuleUpdate::new().set("desktop", ActionValue::Number(4)))
        .unwrap();
    api.add_rule(
        vec![MatchCriterion::new(MatchField::Title, "scratch*")],
        vec![("skip_taskbar".into(), ActionValue::Bool(true))],
        None,
    )
    .unwrap();
    api.save().unwrap();

    let written = fs::read_to_string(&path).unwrap();

    // The untouched rule is the original bytes, comment and all.
    assert!(written.contains(
        "  <!-- mail always on desktop 3 -->\n  <application class=\"Thunderbird\" name=\"Mail\">\n    <desktop>3</desktop>\n    <maximized>true</maximized>\n  </application>"
    ));
    // Unknown elements pass through unchanged.
    assert!(written.contains("<theme_hint experimental=\"yes\"/>"));
    // The edited rule was regenerated with its new field.
    assert!(written.contains("<desktop>4</desktop>"));
    assert!(written.contains("<layer>above</layer>"));
    // The added rule landed inside the wrapper.
    assert!(written.contains("<application title=\"scratch*\">"));
    assert!(written.trim_end().ends_with("</applications>"));

    // A backup of the pre-edit file was kept.
    assert_eq!(
        fs::read_to_string(dir.path().join("rc.xml.bak")).unwrap(),
        RC
    );
}

#[test]
fn saved_output_is_stable_across_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rc.xml");
    fs::write(&path, RC).unwrap();

    let mut api = ObApps::open(FileStore::new(&path)).unwrap();
    api.add_rule(
        vec![MatchCriterion::new(MatchField::Class, "URxvt")],
        vec![(
            "size".into(),
            ActionValue::Size {
                width: 800,
                height: 600,
            },
        )],
        None,
    )
    .unwrap();
    api.save().unwrap();
    let first = fs::read_to_string(&path).unwrap();

    let mut again = ObApps::open(FileStore::new(&path)).unwrap();
    again.save().unwrap();
    let second = fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn preview_reflects_document_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rc.xml");
    fs::write(&path, RC).unwrap();

    let api = ObApps::open(FileStore::new(&path)).unwrap();
    let settings = api.preview(
        &WindowAttributes::new()
            .with_class("Thunderbird")
            .with_name("Mail"),
    );
    assert_eq!(settings.get("desktop"), Some(&ActionValue::Number(3)));
    assert_eq!(
        settings.get("maximized"),
        Some(&ActionValue::Token("true".into()))
    );
    assert!(settings.get("layer").is_none());
}

#[test]
fn schema_issue_survives_load_edit_save() {
    let rc = "<applications>\n  <application class=\"Bad\">\n    <desktop>-2</desktop>\n  </application>\n  <application class=\"Good\"/>\n</applications>\n";
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rc.xml");
    fs::write(&path, rc).unwrap();

    let mut api = ObApps::open(FileStore::new(&path)).unwrap();
    assert_eq!(api.load_warnings().len(), 1);
    assert_eq!(api.document().rule_count(), 1);

    let good = api.document().rules().next().unwrap().id;
    api.update_rule(good, RuleUpdate::new().set("shade", ActionValue::Bool(true)))
        .unwrap();
    api.save().unwrap();

    // The out-of-domain rule was never parsed, so it is still there verbatim.
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("<desktop>-2</desktop>"));
}
