//! Plain CSS generation for the active platform stack.

use fontstack_core::GenerationSnapshot;

use crate::values::{StyleProperty, StyleValues};

/// Selector of the generated rule.
pub const PREVIEW_SELECTOR: &str = ".typography-preview";

/// Comment placed directly above the rule.
pub const HEADER_COMMENT: &str = "/* Typography with custom styling */";

/// Generate the CSS block reproducing the snapshot.
///
/// Emits the stack's `@import` (only the cross-platform stack has one) before
/// everything else, then the header comment and a single
/// `.typography-preview` rule with `font-family`, `color`, `font-size`,
/// `line-height` and `letter-spacing`, in that order.
pub fn generate_css(snapshot: &GenerationSnapshot) -> String {
    let definition = snapshot.active_stack.definition();
    let values = StyleValues::from_snapshot(snapshot);
    let mut lines = Vec::new();

    // An @import inside a rule is invalid, so it goes first.
    if let Some(import) = definition.import_statement {
        lines.push(import.to_string());
        lines.push(String::new());
    }

    lines.push(HEADER_COMMENT.to_string());
    lines.push(format!("{} {{", PREVIEW_SELECTOR));
    lines.push(declarations(&values, 2));
    lines.push("}".to_string());

    tracing::trace!(stack = %snapshot.active_stack, "generated css");
    lines.join("\n")
}

/// One `property: value;` line per style property, indented by `indent`.
pub(crate) fn declarations(values: &StyleValues, indent: usize) -> String {
    let spaces = " ".repeat(indent);
    values
        .entries()
        .map(|(property, value)| format!("{}{}: {};", spaces, property.css_name(), value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Same as [`declarations`], with each value replaced by `reference(property)`.
pub(crate) fn declarations_with(
    indent: usize,
    reference: impl Fn(StyleProperty) -> String,
) -> String {
    let spaces = " ".repeat(indent);
    StyleProperty::ALL
        .into_iter()
        .map(|property| format!("{}{}: {};", spaces, property.css_name(), reference(property)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontstack_core::{ConfigurationStore, PlatformStackId, TypographyConfig};
    use proptest::prelude::*;

    fn snapshot(stack: PlatformStackId) -> GenerationSnapshot {
        GenerationSnapshot::new(stack, "#111827", TypographyConfig::default())
    }

    #[test]
    fn test_windows_end_to_end() {
        let css = generate_css(&snapshot(PlatformStackId::Windows));
        insta::assert_snapshot!(css, @r#"
/* Typography with custom styling */
.typography-preview {
  font-family: "Segoe UI", Tahoma, Geneva, Verdana, sans-serif;
  color: #111827;
  font-size: 100%;
  line-height: 105%;
  letter-spacing: -1px;
}
"#);
        assert!(!css.contains("@import"));
    }

    #[test]
    fn test_cross_import_precedes_rule() {
        let css = generate_css(&snapshot(PlatformStackId::Cross));
        insta::assert_snapshot!(css, @r#"
@import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700;800&display=swap');

/* Typography with custom styling */
.typography-preview {
  font-family: Inter, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
  color: #111827;
  font-size: 100%;
  line-height: 105%;
  letter-spacing: -1px;
}
"#);
    }

    #[test]
    fn test_single_rule_per_stack() {
        for stack in PlatformStackId::ALL {
            let css = generate_css(&snapshot(stack));
            assert_eq!(css.matches("font-family:").count(), 1, "{stack}");
            assert_eq!(css.matches('{').count(), 1, "{stack}");
            assert_eq!(css.matches('}').count(), 1, "{stack}");
            assert!(css.ends_with('}'));

            let import = css.find("@import");
            assert_eq!(import.is_some(), stack == PlatformStackId::Cross, "{stack}");
            if let Some(pos) = import {
                assert!(pos < css.find('{').unwrap_or(0));
            }
        }
    }

    #[test]
    fn test_every_declaration_terminated() {
        let css = generate_css(&snapshot(PlatformStackId::Android));
        let body: Vec<&str> = css
            .lines()
            .skip_while(|line| !line.ends_with('{'))
            .skip(1)
            .take_while(|line| *line != "}")
            .collect();
        assert_eq!(body.len(), 5);
        assert!(body.iter().all(|line| line.starts_with("  ") && line.ends_with(';')));
    }

    #[test]
    fn test_unknown_stack_matches_apple() {
        let unknown = snapshot(PlatformStackId::resolve("solaris"));
        assert_eq!(
            generate_css(&unknown),
            generate_css(&snapshot(PlatformStackId::Apple))
        );
    }

    #[test]
    fn test_store_values_flow_through() {
        let mut store = ConfigurationStore::new();
        store.set_active_stack(PlatformStackId::Android);
        store.set_font_size(125.0);
        store.set_line_height(150.0);
        store.set_letter_spacing(0.5);

        let css = generate_css(&store.snapshot());
        assert!(css.contains("  font-family: Roboto, \"Droid Sans\", \"Helvetica Neue\", Arial, sans-serif;\n"));
        assert!(css.contains("  color: #ffffff;\n"));
        assert!(css.contains("  font-size: 125%;\n"));
        assert!(css.contains("  line-height: 150%;\n"));
        assert!(css.contains("  letter-spacing: 0.5px;\n"));
    }

    #[test]
    fn test_deserialized_snapshot_is_clamped() {
        let json = serde_json::json!({
            "activeStack": "windows",
            "fontColor": "#111827",
            "typography": { "fontSizePct": 400, "lineHeightPct": 10, "letterSpacingPx": -50 }
        });
        let snapshot: GenerationSnapshot = serde_json::from_value(json).unwrap();
        let css = generate_css(&snapshot);
        assert!(css.contains("font-size: 200%;"));
        assert!(css.contains("line-height: 90%;"));
        assert!(css.contains("letter-spacing: -3px;"));
    }

    proptest! {
        #[test]
        fn prop_generation_is_deterministic(
            stack in 0usize..4,
            size in 50.0f64..=200.0,
            height in 90.0f64..=180.0,
            spacing in -3.0f64..=3.0,
        ) {
            let mut typography = TypographyConfig::default();
            typography.set_font_size(size);
            typography.set_line_height(height);
            typography.set_letter_spacing(spacing);
            let snapshot = GenerationSnapshot::new(PlatformStackId::ALL[stack], "#0f172a", typography);

            let first = generate_css(&snapshot);
            prop_assert_eq!(&first, &generate_css(&snapshot.clone()));
            prop_assert_eq!(first.matches("font-family:").count(), 1);
        }
    }
}
