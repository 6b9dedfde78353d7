//! Ordered rule pipelines.
//!
//! A [`Pipeline`] applies its rules in sequence, each seeing the previous
//! rule's output. A pipeline built with [`Pipeline::until_stable`] repeats
//! the whole sequence until a pass changes nothing, which makes its output
//! a fixed point. Rules are stateless and share nothing, so a pipeline can
//! be cloned freely or shared across threads behind a reference.

pub mod presets;
pub mod rule;

pub use crate::markers::Bracket;
pub use rule::{ContentTest, Rule, Transform};

use crate::error::{CanonError, CanonResult};
use tracing::{debug, trace, warn};

/// Upper bound on passes for a pipeline that runs until stable.
pub const MAX_PASSES: usize = 16;

/// Outcome of running a pipeline over one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// Final canonical string
    pub output: String,

    /// Number of passes over the rule sequence
    pub passes: usize,

    /// Number of rules executed
    pub stages_applied: usize,

    /// Names of the rules that changed their input, in order
    pub stages_changed: Vec<String>,
}

impl PipelineReport {
    /// Returns true if any rule rewrote its input.
    pub fn has_changes(&self) -> bool {
        !self.stages_changed.is_empty()
    }
}

/// Ordered sequence of canonicalization rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    rules: Vec<Rule>,
    until_stable: bool,
}

impl Pipeline {
    /// Creates an empty pipeline, which returns its input unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pipeline from rules after validating every one of them.
    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> CanonResult<Self> {
        let pipeline = Self {
            rules: rules.into_iter().collect(),
            until_stable: false,
        };
        pipeline.validate()?;
        Ok(pipeline)
    }

    /// Appends a rule.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Repeats the rule sequence until a pass leaves the string unchanged,
    /// up to [`MAX_PASSES`] passes.
    pub fn until_stable(mut self) -> Self {
        self.until_stable = true;
        self
    }

    pub fn is_until_stable(&self) -> bool {
        self.until_stable
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Checks every rule's configuration up front.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError::Pipeline`] naming the first invalid rule.
    pub fn validate(&self) -> CanonResult<()> {
        for (index, rule) in self.rules.iter().enumerate() {
            rule.validate().map_err(|e| stage_error(index, rule, e))?;
        }
        Ok(())
    }

    /// Runs the pipeline and returns only the canonical string.
    pub fn apply(&self, s: &str) -> CanonResult<String> {
        self.run(s).map(|report| report.output)
    }

    /// Runs the pipeline, recording which rules changed the input.
    ///
    /// The first failing rule aborts the run; its error is wrapped in
    /// [`CanonError::Pipeline`] with the rule's position and name.
    pub fn run(&self, s: &str) -> CanonResult<PipelineReport> {
        let mut report = PipelineReport {
            output: s.to_string(),
            ..PipelineReport::default()
        };

        loop {
            report.passes += 1;
            let changed = self.run_pass(&mut report)?;
            if !changed || !self.until_stable {
                break;
            }
            if report.passes == MAX_PASSES {
                warn!(passes = report.passes, output = %report.output, "pipeline did not settle");
                break;
            }
        }

        Ok(report)
    }

    /// One pass over every rule. Returns true if any rule rewrote its input.
    fn run_pass(&self, report: &mut PipelineReport) -> CanonResult<bool> {
        let mut changed = false;

        for (index, rule) in self.rules.iter().enumerate() {
            let next = rule.apply(&report.output).map_err(|e| {
                warn!(stage = index, rule = rule.name(), error = %e, "pipeline aborted");
                stage_error(index, rule, e)
            })?;
            report.stages_applied += 1;

            if next == report.output {
                trace!(stage = index, rule = rule.name(), "unchanged");
                continue;
            }
            debug!(
                pass = report.passes,
                stage = index,
                rule = rule.name(),
                before = %report.output,
                after = %next,
                "rewrote input"
            );
            report.stages_changed.push(rule.name().to_string());
            report.output = next;
            changed = true;
        }

        Ok(changed)
    }

    /// Applies the pipeline to every input, stopping at the first error.
    pub fn apply_batch<I, S>(&self, inputs: I) -> CanonResult<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .map(|s| self.apply(s.as_ref()))
            .collect()
    }
}

impl Transform for Pipeline {
    fn apply(&self, s: &str) -> CanonResult<String> {
        Pipeline::apply(self, s)
    }

    fn name(&self) -> &str {
        "pipeline"
    }
}

fn stage_error(index: usize, rule: &Rule, source: CanonError) -> CanonError {
    CanonError::Pipeline {
        rule: format!("#{} {}", index, rule.name()),
        source: Box::new(source),
    }
}
