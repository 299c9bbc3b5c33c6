//! Component-framework targets: the style values bound to a component's
//! markup through a style object.

use crate::values::StyleValues;

use super::js_object_entries;

/// React inline style object.
pub(super) fn react(values: &StyleValues) -> String {
    format!(
        r#"const fontStyle = {{
{}
}};

<div style={{fontStyle}}>
  Your content
</div>"#,
        js_object_entries(values, 2, |p| p.js_name().to_string())
    )
}

/// Vue single-file component with the style object in `data()`.
pub(super) fn vue(values: &StyleValues) -> String {
    format!(
        r#"<template>
  <div :style="fontStyle">
    Your content
  </div>
</template>

<script>
export default {{
  data() {{
    return {{
      fontStyle: {{
{}
      }}
    }}
  }}
}}
</script>"#,
        js_object_entries(values, 8, |p| p.js_name().to_string())
    )
}

/// Angular component bound through `ngStyle`; keys are CSS property names.
pub(super) fn angular(values: &StyleValues) -> String {
    format!(
        r#"// component.ts
import {{ Component }} from '@angular/core';

@Component({{
  selector: 'app-typography',
  template: `
    <div [ngStyle]="fontStyle">
      Your content
    </div>
  `
}})
export class TypographyComponent {{
  fontStyle = {{
{}
  }};
}}"#,
        js_object_entries(values, 4, |p| format!("'{}'", p.css_name()))
    )
}

/// Svelte component turning the style object into an inline style string.
pub(super) fn svelte(values: &StyleValues) -> String {
    format!(
        r#"<script>
  const fontStyle = {{
{}
  }};
</script>

<div style={{Object.entries(fontStyle)
  .map(([key, value]) => `${{key.replace(/([A-Z])/g, '-$1').toLowerCase()}}: ${{value}}`)
  .join('; ')}}>
  Your content
</div>"#,
        js_object_entries(values, 4, |p| p.js_name().to_string())
    )
}
