/// Price of a model in USD per `input_tokens` / `output_tokens` tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pricing {
    pub model: &'static str,
    pub input_tokens_cost_dollar: f64,
    pub input_tokens: f64,
    pub output_tokens_cost_dollar: f64,
    pub output_tokens: f64,
}

pub const ONE_MILLION: f64 = 1_000_000.0;

const PRICING_LIST: &[Pricing] = &[
    Pricing {
        model: "gpt-4o",
        input_tokens_cost_dollar: 5.0,
        input_tokens: ONE_MILLION,
        output_tokens_cost_dollar: 15.0,
        output_tokens: ONE_MILLION,
    },
    Pricing {
        model: "gpt-4o-2024-05-13",
        input_tokens_cost_dollar: 5.0,
        input_tokens: ONE_MILLION,
        output_tokens_cost_dollar: 15.0,
        output_tokens: ONE_MILLION,
    },
    Pricing {
        model: "gpt-3.5-turbo-0125",
        input_tokens_cost_dollar: 0.5,
        input_tokens: ONE_MILLION,
        output_tokens_cost_dollar: 1.5,
        output_tokens: ONE_MILLION,
    },
    Pricing {
        model: "gpt-3.5-turbo-instruct",
        input_tokens_cost_dollar: 1.5,
        input_tokens: ONE_MILLION,
        output_tokens_cost_dollar: 2.0,
        output_tokens: ONE_MILLION,
    },
];

pub fn get_pricing(model: &str) -> Option<&'static Pricing> {
    PRICING_LIST.iter().find(|p| p.model == model)
}

pub fn calculate_input_tokens_cost(model: &str, input_tokens: u64) -> Option<f64> {
    get_pricing(model).map(|p| p.input_tokens_cost_dollar * input_tokens as f64 / p.input_tokens)
}

pub fn calculate_output_tokens_cost(model: &str, output_tokens: u64) -> Option<f64> {
    get_pricing(model)
        .map(|p| p.output_tokens_cost_dollar * output_tokens as f64 / p.output_tokens)
}
