//! The grammar node: the handle every combinator returns.
//!
//! A [`Grammar`] is a cheap, clonable handle to a node that holds a single
//! parse operation. There are two ways a node gets its operation:
//!
//! 1. A combinator builds it with one, permanently.
//! 2. [`Grammar::placeholder`] builds it empty; [`Grammar::rebind`] later
//!    points it at another grammar, exactly once.
//!
//! The second path is what lets a grammar refer to itself:
//!
//! ```ignore
//! let expr = Grammar::placeholder();
//! let group = sequence([literal("("), expr.clone(), literal(")")]);
//! let atom = alternative([group, number]);
//! // ... build the rest of `sum` out of `atom` ...
//! expr.rebind(&sum)?;
//! ```
//!
//! Every handle cloned from the placeholder sees the binding, because the
//! binding lives in the shared node and is looked up at parse time.
//!
//! Node actions ([`Grammar::on_match`]) live in the shared node too, so a
//! decoration is seen through every handle to the node, including handles
//! cloned (or captured by other combinators) before it was attached.
//!
//! # Memory
//!
//! A recursive grammar is a reference cycle (`expr` → `sum` → ... → `group`
//! → `expr`) and is never freed. Build such grammars once and share them.
//!
//! # Concurrency
//!
//! `Grammar` is `Send + Sync`. All parse state lives in the [`Source`], so
//! any number of threads may parse with one grammar at the same time. Finish
//! every `rebind` and `on_match` before the first parse starts.

use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use tracing::debug;
use weft_source::{SliceSource, Source};
use weft_stack::ensure_sufficient_stack;

use crate::{BindError, Failure, Match, ParseError};

/// What a node's operation returns. `Ok(None)` is a discarded result.
pub(crate) type Outcome = Result<Option<Match>, ParseError>;

type Operation = Box<dyn Fn(&mut dyn Source) -> Outcome + Send + Sync>;

type Action = Box<dyn Fn(Match) -> Result<Match, ParseError> + Send + Sync>;

/// A composable grammar.
#[derive(Clone)]
pub struct Grammar {
    node: Arc<Node>,
}

struct Node {
    binding: OnceLock<Binding>,
    /// Node actions, applied in attachment order after the binding runs.
    actions: RwLock<Vec<Action>>,
}

enum Binding {
    /// Built by a combinator or decorator.
    Operation(Operation),
    /// A placeholder bound to another grammar, by reference.
    Alias(Grammar),
}

impl Grammar {
    /// Wrap a parse operation.
    pub(crate) fn from_fn<F>(operation: F) -> Self
    where
        F: Fn(&mut dyn Source) -> Outcome + Send + Sync + 'static,
    {
        Grammar {
            node: Arc::new(Node {
                binding: OnceLock::from(Binding::Operation(Box::new(operation))),
                actions: RwLock::new(Vec::new()),
            }),
        }
    }

    /// A grammar with no body yet, for forward and recursive references.
    ///
    /// Parsing it before [`rebind`](Self::rebind) fails fatally with
    /// [`Failure::Unbound`].
    pub fn placeholder() -> Self {
        Grammar {
            node: Arc::new(Node {
                binding: OnceLock::new(),
                actions: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Returns `true` once the node has an operation.
    pub fn is_bound(&self) -> bool {
        self.node.binding.get().is_some()
    }

    /// Give a placeholder its body.
    ///
    /// The placeholder becomes an alias of `target`: parsing either one runs
    /// the same operation. Binding happens once; a second call, or a call on a
    /// grammar built by a combinator, fails with [`BindError::AlreadyBound`].
    ///
    /// Binding a placeholder to itself, directly or through a chain of other
    /// placeholders, fails with [`BindError::Cycle`]. Recursion *through* a
    /// combinator is fine and is the whole point.
    pub fn rebind(&self, target: &Grammar) -> Result<(), BindError> {
        if self.is_bound() {
            return Err(BindError::AlreadyBound);
        }
        if target.resolves_to(self) {
            return Err(BindError::Cycle);
        }
        self.node
            .binding
            .set(Binding::Alias(target.clone()))
            .map_err(|_| BindError::AlreadyBound)
    }

    /// Does following alias bindings from `self` reach `other`?
    fn resolves_to(&self, other: &Grammar) -> bool {
        let mut current = self;
        loop {
            if Arc::ptr_eq(&current.node, &other.node) {
                return true;
            }
            match current.node.binding.get() {
                Some(Binding::Alias(next)) => current = next,
                Some(Binding::Operation(_)) | None => return false,
            }
        }
    }

    /// Attach a node action.
    ///
    /// Decorates this node in place: on success, the node's result is
    /// replaced with `transform(result)`. Every handle to the node sees the
    /// action, and further calls stack more actions after this one. The
    /// returned handle is `self`, for chaining.
    ///
    /// Actions on a placeholder run after whatever it is later bound to.
    ///
    /// A transform error fails the node *without* rewinding the input it
    /// consumed. Enclosing `sequence`/`alternative`/`repeat` still rewind to
    /// their own saved positions, which predate this node.
    #[allow(
        clippy::return_self_not_must_use,
        reason = "the action is attached in place; the return is only for chaining"
    )]
    pub fn on_match<F>(self, transform: F) -> Grammar
    where
        F: Fn(Match) -> Result<Match, ParseError> + Send + Sync + 'static,
    {
        self.node.actions.write().push(Box::new(transform));
        self
    }

    /// Run the node's operation, then its actions.
    pub(crate) fn run(&self, source: &mut dyn Source) -> Outcome {
        let outcome = match self.node.binding.get() {
            Some(Binding::Operation(operation)) => operation(source),
            Some(Binding::Alias(target)) => ensure_sufficient_stack(|| target.run(source)),
            None => Err(ParseError::Fatal(Failure::Unbound)),
        };
        let actions = self.node.actions.read();
        if actions.is_empty() {
            return outcome;
        }
        let mut matched = outcome?.unwrap_or_default();
        for action in actions.iter() {
            matched = action(matched)?;
        }
        Ok(Some(matched))
    }

    /// Parse from the source's current position.
    ///
    /// On success the source is left just past the consumed input. On
    /// failure it is wherever the failing combinator left it; save the
    /// position beforehand if you need it back. A discarded result comes
    /// back as [`Match::empty`].
    pub fn parse(&self, source: &mut dyn Source) -> Result<Match, ParseError> {
        let start = source.save();
        debug!(%start, "parse");
        let result = self.run(source).map(Option::unwrap_or_default);
        match &result {
            Ok(_) => debug!(%start, end = %source.save(), "parse succeeded"),
            Err(err) => debug!(%start, fatal = err.is_fatal(), %err, "parse failed"),
        }
        result
    }

    /// Parse the start of `text`. Trailing input is left unconsumed and is
    /// not an error.
    pub fn parse_text(&self, text: &str) -> Result<Match, ParseError> {
        self.parse(&mut SliceSource::new(text))
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.node.binding.get() {
            Some(Binding::Operation(_)) => "operation",
            Some(Binding::Alias(_)) => "alias",
            None => "unbound",
        };
        f.debug_struct("Grammar")
            .field("state", &state)
            .field("actions", &self.node.actions.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests;
