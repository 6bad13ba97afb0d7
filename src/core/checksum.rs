//! Modulo-11 control digit.
//!
//! Two procedures exist and they are kept apart on purpose. Validation of an
//! existing code runs the full two-stage rule: weight table [`WEIGHT_1`], and
//! when that leaves remainder 10, a second pass with [`WEIGHT_2`]. Generation
//! has always used a single [`WEIGHT_1`] pass that turns remainder 10 straight
//! into 0. For bodies whose first remainder is 10 the two disagree, so a
//! freshly generated code can fail validation.

use crate::domain::model::ChecksumValidation;
use serde::{Deserialize, Serialize};

/// Number of digits covered by the checksum.
pub const BODY_LENGTH: usize = 10;

pub const WEIGHT_1: [u32; BODY_LENGTH] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
pub const WEIGHT_2: [u32; BODY_LENGTH] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChecksumAlgorithm {
    /// One pass with `WEIGHT_1`, remainder 10 becomes 0.
    #[default]
    #[serde(rename = "single-stage")]
    SingleStageModulo11,
    /// `WEIGHT_1`, falling back to `WEIGHT_2` on remainder 10, then 0.
    #[serde(rename = "two-stage")]
    TwoStageModulo11,
}

impl ChecksumAlgorithm {
    pub fn compute(&self, body: &[u8; BODY_LENGTH]) -> u8 {
        match self {
            ChecksumAlgorithm::SingleStageModulo11 => single_stage(body),
            ChecksumAlgorithm::TwoStageModulo11 => two_stage(body).checksum,
        }
    }
}

fn weighted_sum(body: &[u8; BODY_LENGTH], weights: &[u32; BODY_LENGTH]) -> u32 {
    body.iter()
        .zip(weights)
        .map(|(&digit, &weight)| u32::from(digit) * weight)
        .sum()
}

fn single_stage(body: &[u8; BODY_LENGTH]) -> u8 {
    match weighted_sum(body, &WEIGHT_1) % 11 {
        10 => 0,
        remainder => remainder as u8,
    }
}

struct Pass {
    sum: u32,
    remainder: u32,
}

struct TwoStageOutcome {
    checksum: u8,
    first: Pass,
    second: Option<Pass>,
}

fn run_pass(body: &[u8; BODY_LENGTH], weights: &[u32; BODY_LENGTH]) -> Pass {
    let sum = weighted_sum(body, weights);
    Pass {
        sum,
        remainder: sum % 11,
    }
}

fn two_stage(body: &[u8; BODY_LENGTH]) -> TwoStageOutcome {
    let first = run_pass(body, &WEIGHT_1);
    if first.remainder < 10 {
        return TwoStageOutcome {
            checksum: first.remainder as u8,
            first,
            second: None,
        };
    }

    let second = run_pass(body, &WEIGHT_2);
    let checksum = if second.remainder < 10 {
        second.remainder as u8
    } else {
        0
    };
    TwoStageOutcome {
        checksum,
        first,
        second: Some(second),
    }
}

fn describe_pass(steps: &mut String, body: &[u8; BODY_LENGTH], weights: &[u32; BODY_LENGTH], pass: &Pass) {
    let products: Vec<String> = weights
        .iter()
        .zip(body)
        .map(|(weight, digit)| format!("{}×{}", weight, digit))
        .collect();
    steps.push_str(&format!(
        "{} = {}.\n{} ÷ 11 = {} remainder {}.\n",
        products.join(" + "),
        pass.sum,
        pass.sum,
        pass.sum / 11,
        pass.remainder
    ));
}

/// Recomputes the control digit of `body` with the two-stage rule and compares
/// it with `provided`, narrating every step.
pub fn validate(body: &[u8; BODY_LENGTH], provided: u8) -> ChecksumValidation {
    let outcome = two_stage(body);

    let mut steps = String::from("First calculation with weight 1:\n");
    describe_pass(&mut steps, body, &WEIGHT_1, &outcome.first);

    match &outcome.second {
        None => {
            steps.push_str(&format!("Therefore, checksum should be {}.", outcome.checksum));
        }
        Some(second) => {
            steps.push_str("Since remainder is 10, trying second calculation with weight 2:\n");
            describe_pass(&mut steps, body, &WEIGHT_2, second);
            if second.remainder < 10 {
                steps.push_str(&format!(
                    "Therefore, final checksum should be {}.",
                    outcome.checksum
                ));
            } else {
                steps.push_str("Since remainder is again 10, final checksum should be 0.");
            }
        }
    }

    ChecksumValidation {
        is_valid: outcome.checksum == provided,
        calculated_checksum: outcome.checksum,
        provided_checksum: provided,
        calculation_steps: steps,
    }
}
