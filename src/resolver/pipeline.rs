//! Ordered pipelines of optional stages.
//!
//! Each stage is either always present or guarded by an explicit predicate.
//! Order of insertion is order of execution.

/// Builder for an ordered list of stages.
///
/// # Example
///
/// ```
/// use devpack::resolver::Pipeline;
///
/// let is_typescript = false;
/// let extensions = Pipeline::new()
///     .stage_if(is_typescript, || ".ts")
///     .stage(".js")
///     .build();
/// assert_eq!(extensions, vec![".js"]);
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline<T> {
    stages: Vec<T>,
}

impl<T> Pipeline<T> {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage unconditionally.
    pub fn stage(mut self, stage: T) -> Self {
        self.stages.push(stage);
        self
    }

    /// Append a stage only when `include` holds. The stage is not built
    /// otherwise.
    pub fn stage_if(mut self, include: bool, stage: impl FnOnce() -> T) -> Self {
        if include {
            self.stages.push(stage());
        }
        self
    }

    pub fn build(self) -> Vec<T> {
        self.stages
    }
}

impl<T> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_keep_insertion_order() {
        let stages = Pipeline::new().stage("a").stage("b").stage("c").build();
        assert_eq!(stages, vec!["a", "b", "c"]);
    }

    #[test]
    fn guarded_stage_included_when_predicate_holds() {
        let stages = Pipeline::new()
            .stage("env")
            .stage_if(true, || "typescript")
            .build();
        assert_eq!(stages, vec!["env", "typescript"]);
    }

    #[test]
    fn guarded_stage_skipped_and_not_built() {
        let mut built = false;
        let stages: Vec<&str> = Pipeline::new()
            .stage_if(false, || {
                built = true;
                "never"
            })
            .build();
        assert!(stages.is_empty());
        assert!(!built);
    }

    #[test]
    fn guarded_stage_keeps_position() {
        let stages = Pipeline::new()
            .stage(1)
            .stage_if(true, || 2)
            .stage(3)
            .build();
        assert_eq!(stages, vec![1, 2, 3]);
    }

    #[test]
    fn default_pipeline_is_empty() {
        let stages: Vec<u8> = Pipeline::default().build();
        assert!(stages.is_empty());
    }
}
