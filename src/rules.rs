// 🏷️ Scoring Rules - Reward points for a receipt
// Seven independent rules; the score is the sum of their contributions

use crate::fields::{parse_amount, parse_purchase_date, parse_purchase_time, ParseFailure};
use crate::receipt::Receipt;
use crate::schema::ValidReceipt;
use chrono::{Datelike, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

const WINDOW_START_SECS: u32 = 14 * 3600;
const WINDOW_END_SECS: u32 = 16 * 3600;

// ============================================================================
// RULE DEFINITION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointsRule {
    /// +1 per alphanumeric character in the retailer name
    RetailerName,
    /// +50 when the total has no cents
    RoundTotal,
    /// +25 when the total is a multiple of 0.25
    QuarterTotal,
    /// +5 for every two items
    ItemPairs,
    /// ceil(price * 0.2) for items whose trimmed description length is a multiple of 3
    ItemDescription,
    /// +6 when the purchase day is odd
    OddDay,
    /// +10 when purchased strictly between 14:00 and 16:00
    AfternoonWindow,
}

impl PointsRule {
    pub const ALL: [PointsRule; 7] = [
        PointsRule::RetailerName,
        PointsRule::RoundTotal,
        PointsRule::QuarterTotal,
        PointsRule::ItemPairs,
        PointsRule::ItemDescription,
        PointsRule::OddDay,
        PointsRule::AfternoonWindow,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            PointsRule::RetailerName => "retailer_name",
            PointsRule::RoundTotal => "round_total",
            PointsRule::QuarterTotal => "quarter_total",
            PointsRule::ItemPairs => "item_pairs",
            PointsRule::ItemDescription => "item_description",
            PointsRule::OddDay => "odd_day",
            PointsRule::AfternoonWindow => "afternoon_window",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PointsRule::RetailerName => "1 point per alphanumeric character in the retailer name",
            PointsRule::RoundTotal => "50 points if the total is a round dollar amount",
            PointsRule::QuarterTotal => "25 points if the total is a multiple of 0.25",
            PointsRule::ItemPairs => "5 points for every two items",
            PointsRule::ItemDescription => "price * 0.2 rounded up for descriptions with length divisible by 3",
            PointsRule::OddDay => "6 points if the purchase day is odd",
            PointsRule::AfternoonWindow => "10 points if purchased after 2:00pm and before 4:00pm",
        }
    }

    fn apply(&self, receipt: &Receipt, failures: &mut Vec<ParseFailure>) -> u64 {
        let outcome = match self {
            PointsRule::RetailerName => Ok(retailer_name_points(&receipt.retailer)),
            PointsRule::RoundTotal => round_total_points(&receipt.total),
            PointsRule::QuarterTotal => quarter_total_points(&receipt.total),
            PointsRule::ItemPairs => Ok(item_pair_points(receipt.items.len())),
            PointsRule::ItemDescription => {
                let mut points = 0u64;
                for item in &receipt.items {
                    match item_description_points(&item.description, &item.price) {
                        Ok(p) => points = points.saturating_add(p),
                        Err(failure) => failures.push(failure),
                    }
                }
                Ok(points)
            }
            PointsRule::OddDay => odd_day_points(&receipt.purchase_date),
            PointsRule::AfternoonWindow => afternoon_window_points(&receipt.purchase_time),
        };

        outcome.unwrap_or_else(|failure| {
            failures.push(failure);
            0
        })
    }
}

// ============================================================================
// RULES
// ============================================================================

fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

fn round_total_points(total: &str) -> Result<u64, ParseFailure> {
    let total = parse_amount(total)?;
    Ok(if total.fract().is_zero() { 50 } else { 0 })
}

fn quarter_total_points(total: &str) -> Result<u64, ParseFailure> {
    let total = parse_amount(total)?;
    Ok(if (total % Decimal::new(25, 2)).is_zero() { 25 } else { 0 })
}

fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * 5
}

fn item_description_points(description: &str, price: &str) -> Result<u64, ParseFailure> {
    // Length in UTF-8 bytes
    if description.trim().len() % 3 != 0 {
        return Ok(0);
    }
    let price = parse_amount(price)?;
    let bonus = (price * Decimal::new(2, 1)).ceil();
    Ok(bonus.to_u64().unwrap_or(u64::MAX))
}

fn odd_day_points(purchase_date: &str) -> Result<u64, ParseFailure> {
    let date = parse_purchase_date(purchase_date)?;
    Ok(if date.day() % 2 == 1 { 6 } else { 0 })
}

fn afternoon_window_points(purchase_time: &str) -> Result<u64, ParseFailure> {
    let secs = parse_purchase_time(purchase_time)?.num_seconds_from_midnight();
    Ok(if secs > WINDOW_START_SECS && secs < WINDOW_END_SECS { 10 } else { 0 })
}

// ============================================================================
// SCORE BREAKDOWN
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleContribution {
    pub rule: PointsRule,
    pub points: u64,
}

/// Per-rule contributions plus any fields that failed to parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub contributions: Vec<RuleContribution>,
    pub parse_failures: Vec<ParseFailure>,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u64 {
        self.contributions
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(c.points))
    }

    pub fn points_for(&self, rule: PointsRule) -> u64 {
        self.contributions
            .iter()
            .find(|c| c.rule == rule)
            .map(|c| c.points)
            .unwrap_or(0)
    }
}

// ============================================================================
// SCORING ENGINE
// ============================================================================

/// Pure scoring function over validated receipts.
///
/// Fields that fail to parse (total, prices, date, time) make their rule
/// contribute zero; scoring itself never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        ScoringEngine
    }

    pub fn score(&self, receipt: &ValidReceipt) -> u64 {
        self.breakdown(receipt).total()
    }

    pub fn breakdown(&self, receipt: &ValidReceipt) -> ScoreBreakdown {
        let receipt = receipt.receipt();
        let mut parse_failures = Vec::new();

        let contributions = PointsRule::ALL
            .iter()
            .map(|rule| RuleContribution {
                rule: *rule,
                points: rule.apply(receipt, &mut parse_failures),
            })
            .collect();

        for failure in &parse_failures {
            debug!(%failure, "field scored as zero");
        }

        ScoreBreakdown {
            contributions,
            parse_failures,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
