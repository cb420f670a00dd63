//! The pipe compositor and the pipelines it builds.

use std::fmt;
use std::slice;
use std::sync::Arc;

use crate::curry::Application;
use crate::error::CurryError;
use crate::function::Function;
use crate::value::Value;

/// The `pipe` operation.
///
/// Called with no stages it returns itself; called with one or more stages it
/// validates that every stage is callable and returns a [`Pipeline`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Compositor;

impl Compositor {
    /// Builds a pipeline from `stages`.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::InvalidInput`] if any stage is not a function.
    pub fn apply(self, stages: &[Value]) -> Result<Application, CurryError> {
        let Some((first, rest)) = stages.split_first() else {
            return Ok(Application::Unapplied(Function::Compositor(self)));
        };
        let first = first.expect_function("pipe", "stage")?.clone();
        let rest = rest
            .iter()
            .map(|stage| stage.expect_function("pipe", "stage").cloned())
            .collect::<Result<Vec<_>, _>>()?;
        let pipeline = Pipeline::new(first, rest);
        Ok(Application::Complete(Value::Function(Function::Pipeline(
            pipeline,
        ))))
    }
}

struct Stages {
    first: Function,
    rest: Vec<Function>,
}

/// An immutable, reusable sequence of stages.
///
/// Running a pipeline calls the first stage with the whole call record and
/// every following stage with the previous result as its only argument.
/// Results are never spread into several arguments.
#[derive(Clone)]
pub struct Pipeline(Arc<Stages>);

impl Pipeline {
    /// Builds a pipeline. A pipeline always has at least one stage.
    pub fn new(first: Function, rest: impl IntoIterator<Item = Function>) -> Self {
        let rest: Vec<Function> = rest.into_iter().collect();
        tracing::debug!(
            first = %first.name(),
            stages = rest.len() + 1,
            "pipeline built"
        );
        Self(Arc::new(Stages { first, rest }))
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.0.rest.len() + 1
    }

    /// Always `false`; present for symmetry with [`Pipeline::len`].
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the stages in execution order.
    pub fn stages(&self) -> impl Iterator<Item = &Function> {
        std::iter::once(&self.0.first).chain(&self.0.rest)
    }

    /// Returns a new pipeline with `stage` appended; `self` is unchanged.
    #[must_use]
    pub fn then(&self, stage: Function) -> Self {
        let rest = self.0.rest.iter().cloned().chain(std::iter::once(stage));
        Self::new(self.0.first.clone(), rest)
    }

    /// Runs the stages in order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing stage; later stages do not run.
    pub fn run(&self, arguments: &[Value]) -> Result<Value, CurryError> {
        let mut result = self.0.first.call(arguments)?;
        for stage in &self.0.rest {
            result = stage.call(slice::from_ref(&result))?;
        }
        Ok(result)
    }

    pub(crate) fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("Pipeline")
            .field(&self.stages().map(Function::name).collect::<Vec<_>>())
            .finish()
    }
}
