use super::pricing::{calculate_input_tokens_cost, calculate_output_tokens_cost};
use super::types::{ChatCompletion, Usage};

/// Token usage and cost of a single completion
#[derive(Debug, Clone, PartialEq)]
pub struct UsageCost {
    model: String,
    usage: Usage,
}

impl UsageCost {
    pub fn new(model: impl Into<String>, usage: Usage) -> Self {
        Self {
            model: model.into(),
            usage,
        }
    }

    pub fn from_completion(comp: &ChatCompletion) -> Self {
        Self::new(comp.model.clone(), comp.usage)
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }

    pub fn prompt_tokens(&self) -> u64 {
        self.usage.prompt_tokens
    }

    pub fn completion_tokens(&self) -> u64 {
        self.usage.completion_tokens
    }

    pub fn total_tokens(&self) -> u64 {
        self.usage.total_tokens
    }

    pub fn prompt_tokens_cost(&self) -> Option<f64> {
        calculate_input_tokens_cost(&self.model, self.prompt_tokens())
    }

    pub fn completion_tokens_cost(&self) -> Option<f64> {
        calculate_output_tokens_cost(&self.model, self.completion_tokens())
    }

    pub fn total_tokens_cost(&self) -> Option<f64> {
        Some(self.prompt_tokens_cost()? + self.completion_tokens_cost()?)
    }
}

/// Usage summed over every completion of a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TotalUsageCost {
    usage_costs: Vec<UsageCost>,
}

impl TotalUsageCost {
    pub fn new(usage_costs: Vec<UsageCost>) -> Self {
        Self { usage_costs }
    }

    pub fn push(&mut self, usage_cost: UsageCost) {
        self.usage_costs.push(usage_cost);
    }

    pub fn is_empty(&self) -> bool {
        self.usage_costs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.usage_costs.len()
    }

    pub fn total_prompt_tokens(&self) -> u64 {
        self.usage_costs.iter().map(UsageCost::prompt_tokens).sum()
    }

    pub fn total_completion_tokens(&self) -> u64 {
        self.usage_costs.iter().map(UsageCost::completion_tokens).sum()
    }

    pub fn total_tokens(&self) -> u64 {
        self.usage_costs.iter().map(UsageCost::total_tokens).sum()
    }

    /// `None` if any completion used a model without known pricing.
    pub fn total_prompt_tokens_cost(&self) -> Option<f64> {
        self.usage_costs.iter().map(UsageCost::prompt_tokens_cost).sum()
    }

    pub fn total_completion_tokens_cost(&self) -> Option<f64> {
        self.usage_costs
            .iter()
            .map(UsageCost::completion_tokens_cost)
            .sum()
    }

    pub fn total_tokens_cost(&self) -> Option<f64> {
        self.usage_costs.iter().map(UsageCost::total_tokens_cost).sum()
    }
}
