use pest::iterators::Pairs;
use pest::Parser;

#[derive(Parser)]
#[grammar = "period.pest"]
pub struct PeriodParser;

/// Runs a single grammar rule against the whole input, `None` when it
/// does not match. Both period rules are anchored with SOI/EOI so a
/// partial match never slips through.
pub(crate) fn try_rule(rule: Rule, input: &str) -> Option<Pairs<'_, Rule>> {
    PeriodParser::parse(rule, input).ok()
}

#[cfg(test)]
mod tests {
    use crate::parser::{try_rule, Rule};

    #[test]
    fn quarter_rule_is_anchored() {
        assert!(try_rule(Rule::quarter_period, "q1/2022").is_some());
        assert!(try_rule(Rule::quarter_period, "Q4/1999").is_some());
        assert!(try_rule(Rule::quarter_period, "q1/2022 tail").is_none());
        assert!(try_rule(Rule::quarter_period, "q5/2022").is_none());
    }

    #[test]
    fn month_rule_accepts_optional_leading_zero() {
        assert!(try_rule(Rule::month_period, "3/2022").is_some());
        assert!(try_rule(Rule::month_period, "03/2022").is_some());
        assert!(try_rule(Rule::month_period, "12/2022").is_some());
        assert!(try_rule(Rule::month_period, "13/2022").is_none());
        assert!(try_rule(Rule::month_period, "0/2022").is_none());
    }
}
