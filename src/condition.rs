//! Guard-condition metadata carried on sequence edges.
//!
//! A [`Condition`] describes the guard governing whether an edge is taken at
//! run time. The resolver never evaluates conditions; it copies them from
//! the anchor edge into the resulting
//! [`TransitionEntry`](crate::model::TransitionEntry) so that consumers can
//! hand them to whatever expression or scripting engine the platform runs,
//! then drop entries whose guard evaluates false (see
//! [`TransitionModel::filtered`](crate::model::TransitionModel::filtered)).
//!
//! # Examples
//!
//! ```rust
//! use flowreach::condition::Condition;
//!
//! let plain = Condition::expression("${amount > 1000}");
//! assert!(!plain.is_script());
//!
//! let scripted = Condition::script("${result}", "javascript", Some("return amount > 1000;"));
//! assert!(scripted.is_script());
//! assert_eq!(scripted.value(), "${result}");
//! ```

use serde::{Deserialize, Serialize};

/// Guard metadata attached to a sequence edge.
///
/// Two variants mirror the two ways a guard can be authored: a plain
/// expression in the platform's expression language, or a script in a named
/// scripting language with externally resolved source text. Immutable after
/// construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    /// A plain guard expression.
    Expression {
        /// The expression text, uninterpreted by this crate.
        value: String,
    },
    /// A scripted guard.
    Script {
        /// The expression the script's result is compared against.
        value: String,
        /// Scripting language identifier (e.g. `"javascript"`).
        language: String,
        /// Externally resolved script source, when inlined in the model.
        source: Option<String>,
    },
}

impl Condition {
    /// Creates a plain expression condition.
    pub fn expression(value: impl Into<String>) -> Self {
        Self::Expression {
            value: value.into(),
        }
    }

    /// Creates a script condition.
    pub fn script(
        value: impl Into<String>,
        language: impl Into<String>,
        source: Option<&str>,
    ) -> Self {
        Self::Script {
            value: value.into(),
            language: language.into(),
            source: source.map(str::to_owned),
        }
    }

    /// The guard expression text, for either variant.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Expression { value } | Self::Script { value, .. } => value,
        }
    }

    /// Returns `true` for the [`Script`](Self::Script) variant.
    #[must_use]
    pub fn is_script(&self) -> bool {
        matches!(self, Self::Script { .. })
    }
}
