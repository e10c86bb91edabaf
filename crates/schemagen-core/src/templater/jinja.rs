//! MiniJinja environment setup and rendering.

use super::error::{SourceLocation, TemplateError};
use super::helpers;
use super::Bindings;
use minijinja::{Environment, UndefinedBehavior};
use std::io::{self, Write};
#[cfg(feature = "tracing")]
use tracing::debug;

/// Recursion limit for template rendering. Schema templates nest at most a
/// few levels (tables, columns, macro calls).
const RECURSION_LIMIT: usize = 100;

/// A template that parsed successfully and is ready to execute.
///
/// Parsing happens in [`ParsedTemplate::parse`]; a syntax error there means
/// nothing was ever written. Each call to [`ParsedTemplate::render_to_write`]
/// executes the template once against the bound schema.
pub struct ParsedTemplate<'source> {
    env: Environment<'source>,
    name: &'source str,
}

impl<'source> ParsedTemplate<'source> {
    /// Parses `source` and registers the string helpers.
    pub fn parse(name: &'source str, source: &'source str) -> Result<Self, TemplateError> {
        let mut env = Environment::new();

        // Typos in attribute names should fail the run, not emit blanks.
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_recursion_limit(RECURSION_LIMIT);

        // Generated files keep their final newline; the newline after a block
        // tag is dropped so `{% for %}` lines do not leave blank lines behind.
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);

        helpers::register_string_helpers(&mut env);

        env.add_template(name, source)?;
        reject_unbound_names(&env, name)?;

        #[cfg(feature = "tracing")]
        debug!(template = name, "parsed template");

        Ok(Self { env, name })
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Executes the template once, streaming output into `out`.
    ///
    /// Returns the number of bytes written. On failure, whatever was
    /// written before the error stays in `out`.
    pub fn render_to_write<W: Write>(
        &self,
        bindings: &Bindings,
        out: W,
    ) -> Result<u64, TemplateError> {
        let template = self.env.get_template(self.name)?;
        let ctx = helpers::schema_context(bindings);

        let mut counter = CountingWriter {
            inner: out,
            written: 0,
        };
        template.render_to_write(ctx, &mut counter)?;
        counter.flush().map_err(|e| TemplateError::Write(e.to_string()))?;

        #[cfg(feature = "tracing")]
        debug!(
            template = self.name,
            bytes = counter.written,
            "rendered template"
        );

        Ok(counter.written)
    }

    /// Executes the template into a string. Nothing is returned on failure.
    pub fn render_to_string(&self, bindings: &Bindings) -> Result<String, TemplateError> {
        let mut buf = Vec::new();
        self.render_to_write(bindings, &mut buf)?;
        String::from_utf8(buf).map_err(|e| TemplateError::Write(e.to_string()))
    }
}

/// Fails when the template references a function or variable that no render
/// context provides, so a misspelled helper is caught before any output.
fn reject_unbound_names(env: &Environment<'_>, name: &str) -> Result<(), TemplateError> {
    let template = env.get_template(name)?;
    let mut unbound: Vec<String> = template
        .undeclared_variables(false)
        .into_iter()
        .filter(|var| !helpers::is_bound_name(var))
        .collect();

    if unbound.is_empty() {
        return Ok(());
    }
    unbound.sort();
    Err(TemplateError::Syntax {
        message: format!("unknown function or variable: {}", unbound.join(", ")),
        location: SourceLocation {
            name: Some(name.to_string()),
            line: None,
        },
    })
}

struct CountingWriter<W> {
    inner: W,
    written: u64,
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
