use bezel_core::{
    ContentPlan, Diagnostic, EmulatorBody, EmulatorConfig, EmulatorPlan, FrameLayout,
    FrameOptions, LandscapeTransform, Length, LoadEvent, LoadState, NotchVariant, Orientation,
    RecordingSink, Size, presets, resolve_specification_by_name,
};
use serde_json::json;

#[test]
fn iphone_14_pro_portrait_frame() -> anyhow::Result<()> {
    let sink = RecordingSink::new();
    let spec = resolve_specification_by_name("iphone14Pro", None, &sink);
    let layout = FrameLayout::compute(&spec, FrameOptions::default());

    assert_eq!(layout.outer, Size::new(393.0, 852.0));
    assert!((layout.screen_radius - 41.0).abs() < f64::EPSILON);
    let island = layout
        .notch
        .ok_or_else(|| anyhow::anyhow!("dynamic island missing"))?;
    assert_eq!(island.variant, NotchVariant::DynamicIsland);
    assert_eq!(island.size, Size::new(120.0, 35.0));
    assert_eq!(island.style().get("border-radius"), Some("17.5px"));
    assert_eq!(island.style().get("left"), Some("50%"));
    assert_eq!(island.style().get("transform"), Some("translateX(-50%)"));
    assert!(sink.is_empty());
    Ok(())
}

#[test]
fn galaxy_s21_landscape_frame() -> anyhow::Result<()> {
    let config = EmulatorConfig::from_json(
        &json!({"deviceType": "galaxyS21", "orientation": "landscape"}).to_string(),
    )?;
    let plan = EmulatorPlan::build(&config, &RecordingSink::new());
    let EmulatorBody::Framed(layout) = plan.body else {
        anyhow::bail!("expected a framed body");
    };
    assert_eq!(layout.outer, Size::new(800.0, 360.0));
    assert_eq!(layout.frame_style().get("width"), Some("800px"));
    let hole = layout
        .notch
        .ok_or_else(|| anyhow::anyhow!("punch hole missing"))?;
    assert_eq!(hole.style().get("right"), Some("10px"));
    assert_eq!(hole.style().get("top"), None);
    assert_eq!(hole.insets.right, Length::Px(10.0));
    Ok(())
}

#[test]
fn unknown_device_falls_back_with_one_warning() {
    let sink = RecordingSink::new();
    let config = EmulatorConfig::from_json(r#"{"deviceType":"foo"}"#).expect("valid config");
    let plan = EmulatorPlan::build(&config, &sink);
    let spec = plan.spec.expect("fallback specification");
    assert_eq!((spec.width, spec.height), (390, 844));
    assert_eq!(
        sink.events(),
        vec![Diagnostic::UnknownDeviceType {
            requested: "foo".to_string()
        }]
    );
}

#[test]
fn orientation_swaps_outer_dimensions_for_every_preset() {
    for (device, spec) in presets() {
        let portrait = FrameLayout::compute(spec, FrameOptions::default());
        let landscape = FrameLayout::compute(
            spec,
            FrameOptions {
                orientation: Orientation::Landscape,
                ..FrameOptions::default()
            },
        );
        assert_eq!(portrait.outer.swapped(), landscape.outer, "{device}");
        assert_eq!(portrait.screen_radius, landscape.screen_radius, "{device}");
        assert_eq!(landscape.rotation, None, "{device}");
    }
}

#[test]
fn legacy_rotation_applies_to_frame_and_unframed_box() {
    let rotated = EmulatorConfig::default()
        .with_orientation(Orientation::Landscape)
        .with_landscape_transform(LandscapeTransform::SwapAndRotate);
    let sink = RecordingSink::new();

    let framed = EmulatorPlan::build(&rotated, &sink);
    let EmulatorBody::Framed(layout) = &framed.body else {
        panic!("expected framed body");
    };
    assert_eq!(layout.frame_style().get("transform"), Some("rotate(90deg)"));

    let unframed = EmulatorPlan::build(&rotated.clone().with_show_frame(false), &sink);
    let EmulatorBody::Unframed(layout) = &unframed.body else {
        panic!("expected unframed body");
    };
    assert_eq!(layout.style().get("transform"), Some("rotate(90deg)"));
    assert!(sink.is_empty());
}

#[test]
fn custom_specification_is_used_verbatim() -> anyhow::Result<()> {
    let config = EmulatorConfig::from_json(
        &json!({
            "deviceType": "custom",
            "showButtons": false,
            "customSpecification": {
                "width": 320,
                "height": 640,
                "borderRadius": 4,
                "bezelColor": "#abcdef",
                "bezelThickness": 8
            }
        })
        .to_string(),
    )?;
    let sink = RecordingSink::new();
    let plan = EmulatorPlan::build(&config, &sink);
    let EmulatorBody::Framed(layout) = plan.body else {
        anyhow::bail!("expected a framed body");
    };
    assert_eq!(layout.outer, Size::new(320.0, 640.0));
    assert!(layout.screen_radius.abs() < f64::EPSILON);
    assert!(layout.notch.is_none());
    assert!(layout.buttons.is_empty());
    assert_eq!(layout.frame_style().get("background-color"), Some("#abcdef"));
    assert!(sink.is_empty());
    Ok(())
}

#[test]
fn embedded_page_loading_lifecycle() {
    let config = EmulatorConfig::default()
        .with_url("https://example.com/app")
        .with_loading_timeout_ms(3_000);
    let plan = EmulatorPlan::build(&config, &RecordingSink::new());
    assert!(matches!(plan.content, ContentPlan::Embedded(_)));
    assert_eq!(plan.loading_timeout_ms, Some(3_000));

    let state = LoadState::default();
    assert!(state.shows_indicator());
    let loaded = state.apply(LoadEvent::Loaded);
    assert!(!loaded.shows_indicator());
    assert_eq!(loaded.apply(LoadEvent::TimedOut), LoadState::Loaded);
}
