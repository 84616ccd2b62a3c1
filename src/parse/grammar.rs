use winnow::combinator::{opt, preceded};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{rest, take_while};

use super::spec::RuleSpec;

// -- Rule tokens ------------------------------------------------------------
//
// A token is a rule name optionally followed by a bracketed parameter, as in
// `max_length[10]`. Every combinator below accepts zero-length matches, so
// the grammar as a whole is total: any input string yields a RuleSpec.

fn name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(0.., |c: char| c != '[').parse_next(input)
}

fn param<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded('[', take_while(0.., |c: char| c != ']')).parse_next(input)
}

pub fn rule_token(input: &mut &str) -> ModalResult<RuleSpec> {
    let name = name.parse_next(input)?;
    let param = opt(param).parse_next(input)?;
    // Swallow the closing bracket and anything after it. A token with no
    // closing bracket has already handed the remainder to `param`.
    let _ = rest.parse_next(input)?;
    Ok(RuleSpec {
        name: name.to_owned(),
        param: param.unwrap_or_default().to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use crate::parse::parse_rule;

    #[test]
    fn parse_bare_name() {
        let spec = parse_rule("required");
        assert_eq!(spec.name, "required");
        assert_eq!(spec.param, "");
    }

    #[test]
    fn parse_with_param() {
        let spec = parse_rule("max_length[10]");
        assert_eq!(spec.name, "max_length");
        assert_eq!(spec.param, "10");
    }

    #[test]
    fn parse_empty_param() {
        let spec = parse_rule("rule[]");
        assert_eq!(spec.name, "rule");
        assert_eq!(spec.param, "");
    }

    #[test]
    fn parse_empty_token() {
        let spec = parse_rule("");
        assert_eq!(spec.name, "");
        assert_eq!(spec.param, "");
    }

    #[test]
    fn parse_missing_close_bracket_takes_remainder() {
        let spec = parse_rule("max_length[10");
        assert_eq!(spec.name, "max_length");
        assert_eq!(spec.param, "10");

        let spec = parse_rule("malformed[");
        assert_eq!(spec.name, "malformed");
        assert_eq!(spec.param, "");
    }

    #[test]
    fn parse_nested_brackets_stop_at_first_close() {
        let spec = parse_rule("a[b[c]]");
        assert_eq!(spec.name, "a");
        assert_eq!(spec.param, "b[c");
    }

    #[test]
    fn parse_trailing_text_after_close_ignored() {
        let spec = parse_rule("max_length[5]junk");
        assert_eq!(spec.name, "max_length");
        assert_eq!(spec.param, "5");
    }

    #[test]
    fn parse_leading_bracket_gives_empty_name() {
        let spec = parse_rule("[5]");
        assert_eq!(spec.name, "");
        assert_eq!(spec.param, "5");
    }
}
