//! Stylesheet-oriented targets: utility config, CSS-in-JS, custom properties
//! and preprocessor variables.

use crate::css::{declarations, declarations_with};
use crate::values::{StyleProperty, StyleValues};

use super::js_string;

/// Tailwind theme extension plus the utility classes that use it.
///
/// The font family is emitted as an array with each alternative quoted on
/// its own.
pub(super) fn tailwind(values: &StyleValues) -> String {
    let families = values
        .font_family_list()
        .into_iter()
        .map(js_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"/* tailwind.config.js */
module.exports = {{
  theme: {{
    extend: {{
      fontFamily: {{
        'system': [{families}]
      }},
      fontSize: {{
        'custom': {font_size}
      }},
      lineHeight: {{
        'custom': {line_height}
      }},
      letterSpacing: {{
        'custom': {letter_spacing}
      }}
    }}
  }}
}}

/* Usage */
<div className="font-system text-custom leading-custom tracking-custom"
     style={{{{color: {color}}}}}>
  Your content
</div>"#,
        families = families,
        font_size = js_string(&values.font_size),
        line_height = js_string(&values.line_height),
        letter_spacing = js_string(&values.letter_spacing),
        color = js_string(&values.color),
    )
}

/// styled-components tagged template.
pub(super) fn styled_components(values: &StyleValues) -> String {
    format!(
        r#"import styled from 'styled-components';

const SystemText = styled.div`
{}
`;

<SystemText>Your content</SystemText>"#,
        declarations(values, 2)
    )
}

/// CSS custom properties on `:root` and a class consuming them.
pub(super) fn css_custom_properties(values: &StyleValues) -> String {
    let variables = values
        .entries()
        .map(|(property, value)| format!("  --{}: {};", property.token_name(), value))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#":root {{
{}
}}

.typography-system {{
{}
}}

/* Usage */
<div class="typography-system">Your content</div>"#,
        variables,
        declarations_with(2, |p: StyleProperty| format!("var(--{})", p.token_name()))
    )
}

/// Sass variables, a mixin applying them and a class including the mixin.
pub(super) fn sass(values: &StyleValues) -> String {
    let variables = values
        .entries()
        .map(|(property, value)| format!("${}: {};", property.token_name(), value))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"// _typography.scss
{}

@mixin system-typography {{
{}
}}

.typography-system {{
  @include system-typography;
}}"#,
        variables,
        declarations_with(2, |p: StyleProperty| format!("${}", p.token_name()))
    )
}
