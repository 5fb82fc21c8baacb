//! Typed errors raised by the generation phases.

use stencil_codegen::pipeline::Phase;
use thiserror::Error;

/// A failure that stops generation of one component.
///
/// Each variant belongs to exactly one [`Phase`], see [`CodegenError::phase`].
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("component `{id}` not found in manifest")]
    ComponentNotFound { id: String },

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Props(#[from] PropsError),

    #[error(transparent)]
    Jsx(#[from] JsxError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}

impl CodegenError {
    /// The phase that raised this error.
    pub fn phase(&self) -> Phase {
        match self {
            CodegenError::ComponentNotFound { .. } => Phase::Validation,
            CodegenError::Import(_) => Phase::Import,
            CodegenError::Props(_) => Phase::Props,
            CodegenError::Jsx(_) => Phase::Jsx,
            CodegenError::Assembly(_) => Phase::Assembly,
        }
    }
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("component `{id}` lists itself as a child")]
    SelfReference { id: String },
}

#[derive(Debug, Error)]
pub enum PropsError {
    #[error("properties `{first}` and `{second}` both map to identifier `{identifier}`")]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },

    #[error("property `{property}` clashes with the `{token}` event handler parameter")]
    HandlerCollision { property: String, token: String },
}

#[derive(Debug, Error)]
pub enum JsxError {
    #[error("`{tag}` is not a valid element tag")]
    InvalidTag { tag: String },

    #[error("class name `{class}` cannot be placed in a className attribute")]
    InvalidClassName { class: String },

    #[error("inline style `{property}` must be a string or number, found {found}")]
    UnsupportedStyleValue {
        property: String,
        found: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("component name `{name}` is also imported as a child component")]
    NameCollision { name: String },
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("setState node `{node_id}` targets `{variable}`, which is not a valid identifier")]
    InvalidStateVariable { node_id: String, variable: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_is_structural() {
        let err: CodegenError = JsxError::InvalidTag {
            tag: "My Tag".to_string(),
        }
        .into();
        assert_eq!(err.phase(), Phase::Jsx);
        assert_eq!(err.to_string(), "`My Tag` is not a valid element tag");

        let err = CodegenError::ComponentNotFound {
            id: "nope".to_string(),
        };
        assert_eq!(err.phase(), Phase::Validation);
    }
}
