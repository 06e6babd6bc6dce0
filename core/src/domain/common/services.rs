/// Aggregate service over the crate's ports. Domain modules implement their
/// service traits on this struct, generic over the concrete adapters.
#[derive(Debug, Clone)]
pub struct Service<DP, TP> {
    pub(crate) diet_plan_repository: DP,
    pub(crate) text_processor: TP,
}

impl<DP, TP> Service<DP, TP> {
    pub fn new(diet_plan_repository: DP, text_processor: TP) -> Self {
        Self {
            diet_plan_repository,
            text_processor,
        }
    }
}
