use bezel_core::{EmulatorBody, EmulatorPlan, Orientation, RecordingSink, Size};
use bezel_ui::showcase::{ShowcaseAction, apply, initial_config};

#[test]
fn showcase_actions_drive_the_rendered_plan() {
    let config = initial_config(Some(r#"{"deviceType":"galaxyS21"}"#)).expect("valid config");
    let config = apply(&config, ShowcaseAction::ToggleOrientation);
    assert_eq!(config.orientation, Orientation::Landscape);

    let sink = RecordingSink::new();
    let plan = EmulatorPlan::build(&config, &sink);
    let EmulatorBody::Framed(layout) = &plan.body else {
        panic!("expected framed body");
    };
    assert_eq!(layout.outer, Size::new(800.0, 360.0));

    let bare = apply(&config, ShowcaseAction::ToggleFrame);
    let plan = EmulatorPlan::build(&bare, &sink);
    assert!(matches!(plan.body, EmulatorBody::Unframed(_)));
    assert!(sink.is_empty());
}
