use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, opt};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::{CompareOp, Condition, Field};

// -- Whitespace -------------------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., char::is_whitespace).void().parse_next(input)
}

// -- Tokens -----------------------------------------------------------------

fn field(input: &mut &str) -> ModalResult<Field> {
    alt((
        "freshness".value(Field::Freshness),
        "expiresIn".value(Field::Freshness),
        "value".value(Field::Value),
        "benefit".value(Field::Value),
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "field name",
    )))
    .parse_next(input)
}

fn compare_op(input: &mut &str) -> ModalResult<CompareOp> {
    alt((
        ">=".value(CompareOp::Gte),
        ">".value(CompareOp::Gt),
        "<=".value(CompareOp::Lte),
        "<".value(CompareOp::Lt),
        "==".value(CompareOp::Eq),
        "!=".value(CompareOp::Neq),
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "comparison operator",
    )))
    .parse_next(input)
}

fn operand(input: &mut &str) -> ModalResult<i64> {
    (opt('-'), digit1)
        .take()
        .try_map(|s: &str| s.parse::<i64>())
        .context(StrContext::Expected(StrContextValue::Description(
            "integer",
        )))
        .parse_next(input)
}

// -- Conditions -------------------------------------------------------------

fn comparison(input: &mut &str) -> ModalResult<Condition> {
    let field = field.parse_next(input)?;
    ws.parse_next(input)?;
    let op = compare_op.parse_next(input)?;
    ws.parse_next(input)?;
    let operand = operand.parse_next(input)?;
    Ok(Condition::Compare { field, op, operand })
}

pub fn condition(input: &mut &str) -> ModalResult<Condition> {
    delimited(
        ws,
        alt(("true".value(Condition::Always), comparison)),
        ws,
    )
    .parse_next(input)
}
