//! MiniJinja templates behind the text formats.
//!
//! Built-in and user templates see the same context:
//!
//! - `tokens`: list of `{name, value, property, family, step}`
//! - `selector`: CSS selector from the options
//! - `export_name`: module binding name from the options
//!
//! and can use the `js_string` filter to quote a value as a JavaScript string
//! literal.

use minijinja::{context, AutoEscape, Environment, Error, ErrorKind, UndefinedBehavior};

use super::{EmitOptions, TokenRow};

pub(crate) const CSS: &str = "{{ selector }} {\n\
{%- for token in tokens %}\n  {{ token.property }}: {{ token.value }};\n{%- endfor %}\n}";

pub(crate) const MODULE: &str = "export const {{ export_name }} = {\n\
{%- for token in tokens %}\n\t{{ token.name | js_string }}: {{ token.value | js_string }},\n{%- endfor %}\n};";

/// Renders one of the templates shipped with the crate.
pub(crate) fn render_builtin(
    source: &str,
    rows: &[TokenRow],
    options: &EmitOptions,
) -> Result<String, Error> {
    let env = environment(UndefinedBehavior::Lenient);
    render(&env, source, rows, options)
}

/// Renders a user-supplied template.
///
/// Undefined variables are errors here, so a misspelt field fails the build
/// instead of silently emitting nothing.
pub(crate) fn render_custom(
    source: &str,
    rows: &[TokenRow],
    options: &EmitOptions,
) -> Result<String, Error> {
    let env = environment(UndefinedBehavior::Strict);
    render(&env, source, rows, options)
}

fn render(
    env: &Environment<'static>,
    source: &str,
    rows: &[TokenRow],
    options: &EmitOptions,
) -> Result<String, Error> {
    env.render_str(
        source,
        context! {
            tokens => rows,
            selector => &options.selector,
            export_name => &options.export_name,
        },
    )
}

fn environment(undefined: UndefinedBehavior) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_undefined_behavior(undefined);
    env.add_filter("js_string", js_string);
    env
}

fn js_string(value: String) -> Result<String, Error> {
    serde_json::to_string(&value).map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))
}
