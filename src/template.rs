//! RFC 6570 URI Template integration.
//!
//! Thin wrapper around `iri_string::template` providing the two operations the
//! data model needs: expanding a template against variable bindings, and
//! listing the variable names a template references.

use iri_string::spec::UriSpec;
use iri_string::template::simple_context::SimpleContext;
use iri_string::template::UriTemplateStr;

use crate::{error::Error, Result, Variables};

/// Expands `template` against `variables` per RFC 6570.
///
/// Variables referenced by the template but absent from `variables` simply
/// drop out of the expansion, as the RFC's default expansion rules require.
pub(crate) fn expand(template: &str, variables: &Variables) -> Result<String> {
    let template = parse(template)?;

    let mut context = SimpleContext::new();
    for (name, value) in variables {
        context.insert(name.clone(), value.clone());
    }

    let expanded = template
        .expand::<UriSpec, _>(&context)
        .map_err(|e| Error::Template(format!("failed to expand '{}': {}", template, e)))?;
    Ok(expanded.to_string())
}

/// Returns the distinct variable names referenced by `template`, in order of
/// first appearance.
pub(crate) fn variable_names(template: &str) -> Result<Vec<String>> {
    let template = parse(template)?;

    let mut names: Vec<String> = Vec::new();
    for variable in template.variables() {
        if !names.iter().any(|name| name == variable.as_str()) {
            names.push(variable.as_str().to_owned());
        }
    }
    Ok(names)
}

fn parse(template: &str) -> Result<&UriTemplateStr> {
    UriTemplateStr::new(template)
        .map_err(|e| Error::Template(format!("invalid URI template '{}': {}", template, e)))
}
