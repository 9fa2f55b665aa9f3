use anyhow::Result;
use stanza_ir::block::{BlockStyle, EditScope};
use stanza_ir::style::{
    Breakpoint, InteractionState, PropertyValue, StyleProperty,
};

#[test]
fn resolves_scoped_edits_through_the_full_pipeline() -> Result<()> {
    let mut block = BlockStyle::new();

    // Base styles edited on the desktop tab.
    let desktop = EditScope::breakpoint(Breakpoint::Desktop);
    block.set_property(desktop, StyleProperty::Width, PropertyValue::px(1200.0));
    block.set_property(
        desktop,
        StyleProperty::BackgroundColor,
        PropertyValue::color("#ffffff"),
    );

    // A tablet override and a hover override from their tabs.
    block.set_property(
        EditScope::breakpoint(Breakpoint::Tablet),
        StyleProperty::Width,
        PropertyValue::px(720.0),
    );
    block.set_property(
        EditScope::state(InteractionState::Hover),
        StyleProperty::BackgroundColor,
        PropertyValue::color("#eeeeee"),
    );

    // Mobile with no overrides of its own inherits the tablet width.
    let mobile = block.resolve(Breakpoint::Mobile, InteractionState::None);
    assert_eq!(
        mobile.get(StyleProperty::Width),
        Some(&PropertyValue::px(720.0)),
        "mobile should inherit the tablet width override"
    );
    assert_eq!(
        mobile.get(StyleProperty::BackgroundColor),
        Some(&PropertyValue::color("#ffffff"))
    );

    // Hover layers on top of any breakpoint resolution.
    let hovered = block.resolve(Breakpoint::Tablet, InteractionState::Hover);
    assert_eq!(
        hovered.get(StyleProperty::BackgroundColor),
        Some(&PropertyValue::color("#eeeeee"))
    );
    assert_eq!(
        hovered.get(StyleProperty::Width),
        Some(&PropertyValue::px(720.0))
    );

    // Resolution is idempotent and leaves the layers untouched.
    assert_eq!(
        block.resolve(Breakpoint::Tablet, InteractionState::Hover),
        hovered
    );
    assert_eq!(
        block.breakpoints.base.get(StyleProperty::Width),
        Some(&PropertyValue::px(1200.0)),
        "resolution must not write back into the base bag"
    );
    Ok(())
}

#[test]
fn state_reset_restores_none_equality() -> Result<()> {
    let mut block = BlockStyle::new();
    block.set_property(
        EditScope::breakpoint(Breakpoint::Desktop),
        StyleProperty::Opacity,
        PropertyValue::number(1.0),
    );
    block.set_property(
        EditScope::state(InteractionState::Hover),
        StyleProperty::Opacity,
        PropertyValue::number(0.5),
    );
    assert!(block.states.has_overrides_for(InteractionState::Hover));

    block.states.reset(InteractionState::Hover);
    assert!(!block.states.has_overrides_for(InteractionState::Hover));
    assert_eq!(
        block.resolve(Breakpoint::Desktop, InteractionState::Hover),
        block.resolve(Breakpoint::Desktop, InteractionState::None),
        "after reset, hover must resolve exactly like none"
    );
    Ok(())
}

#[test]
fn serde_round_trips_a_full_block_verbatim() -> Result<()> {
    let mut block = BlockStyle::new();
    block.set_property(
        EditScope::breakpoint(Breakpoint::Desktop),
        StyleProperty::BackgroundGradient,
        StyleProperty::BackgroundGradient.default_value(),
    );
    block.set_property(
        EditScope::breakpoint(Breakpoint::Mobile),
        StyleProperty::Width,
        PropertyValue::percentage(100.0),
    );
    block.set_property(
        EditScope::state(InteractionState::Pressed),
        StyleProperty::BoxShadow,
        StyleProperty::BoxShadow.default_value(),
    );

    use stanza_ir::effect::{ChildOverride, EffectPreset, EffectTrigger, StaggerConfig};
    let appear = block.effects.enable(EffectTrigger::Appear);
    appear.apply_preset(EffectPreset::SlideUp);
    appear.stagger = Some(StaggerConfig {
        enabled: true,
        amount_ms: 120.0,
        ..StaggerConfig::default()
    });
    appear.upsert_child_override(ChildOverride::new("card_3").with_delay_ms(40.0));

    let json = serde_json::to_string(&block)?;
    let back: BlockStyle = serde_json::from_str(&json)?;
    assert_eq!(back, block, "serialization must round-trip verbatim");

    // Absent layers stay absent rather than becoming empty objects.
    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert!(
        value["breakpoints"].get("tablet").is_none(),
        "an unedited tablet layer should not serialize"
    );
    assert!(
        value["states"].get("hover").is_none(),
        "an unedited hover layer should not serialize"
    );
    Ok(())
}

#[test]
fn editing_a_narrow_breakpoint_never_leaks_wider() -> Result<()> {
    let mut block = BlockStyle::new();
    block.set_property(
        EditScope::breakpoint(Breakpoint::Mobile),
        StyleProperty::FontSize,
        PropertyValue::px(14.0),
    );

    assert!(block.breakpoints.base.is_empty());
    assert!(block.breakpoints.tablet.is_none());
    let desktop = block.resolve(Breakpoint::Desktop, InteractionState::None);
    assert!(
        desktop.get(StyleProperty::FontSize).is_none(),
        "a mobile edit must not surface on desktop"
    );
    Ok(())
}
