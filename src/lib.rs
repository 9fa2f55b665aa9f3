//! Stanza: the style/effect engine behind the Stanza section editor.
//!
//! This umbrella crate re-exports the block styling IR and the
//! configuration layer, and wires configured authoring defaults into
//! freshly enabled effects.

pub use stanza_config as config;
pub use stanza_ir as ir;

use stanza_config::EffectsConfig;
use stanza_ir::effect::{EasingSpec, EffectDefinition, EffectTrigger, StaggerConfig};

/// Build the effect definition a trigger starts from, honoring the
/// configured authoring defaults for duration, easing, and stagger step.
pub fn default_effect_definition(
    trigger: EffectTrigger,
    effects: &EffectsConfig,
) -> EffectDefinition {
    let mut definition = EffectDefinition::default_for(trigger);
    definition.set_duration_ms(effects.default_duration_ms);
    if let Some(easing) = effects
        .default_easing
        .as_deref()
        .and_then(EasingSpec::parse_keyword)
    {
        definition.set_easing(easing);
    }
    definition.stagger = Some(StaggerConfig {
        enabled: false,
        amount_ms: effects.stagger_amount_ms,
        ..StaggerConfig::default()
    });
    definition
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_config() {
        let effects = EffectsConfig {
            default_duration_ms: 450.0,
            default_easing: Some("ease_out".to_string()),
            stagger_amount_ms: 80.0,
        };
        let definition = default_effect_definition(EffectTrigger::Appear, &effects);
        assert_eq!(definition.duration_ms(), 450.0);
        assert_eq!(definition.easing(), EasingSpec::EaseOut);
        let stagger = definition.stagger.unwrap();
        assert!(!stagger.enabled);
        assert_eq!(stagger.amount_ms, 80.0);
    }

    #[test]
    fn test_unknown_easing_keyword_keeps_default() {
        let effects = EffectsConfig {
            default_easing: Some("bouncy".to_string()),
            ..EffectsConfig::default()
        };
        let definition = default_effect_definition(EffectTrigger::Hover, &effects);
        assert_eq!(definition.easing(), EasingSpec::default());
    }
}
