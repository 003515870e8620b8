//! The demonstration sequence printed by `primitives` / `primitives demo`.

use chrono::{DateTime, Utc};
use primitives_core::error::Result;
use primitives_core::{classify, format_number, parse, parse_literal, Callable, Radix, Value};

const RULE: &str = "===============================";

/// Build every line of the demonstration, in order.
pub fn lines() -> Result<Vec<String>> {
    let mut out = Vec::new();
    literals(&mut out)?;
    out.push(String::new());
    conversions(&mut out)?;
    out.push(String::new());
    type_inspection(&mut out);
    Ok(out)
}

fn literals(out: &mut Vec<String>) -> Result<()> {
    out.push("Number literals".to_string());
    out.push(RULE.to_string());

    for (label, source) in [("Decimal", "987"), ("Octal", "0o100"), ("Hex", "0xCAFE")] {
        let lit = parse_literal(source)?;
        out.push(format!("{} {} in decimal = {}", label, source, lit));
    }

    // The legacy spelling has no single meaning, so it is shown as rejected.
    if let Err(e) = parse_literal("0100") {
        out.push(format!("Legacy 0100 is rejected: {}", e));
    }

    out.push("Scientific notation is supported as well.".to_string());
    for (name, source) in [("speedOfLight", "2.99E8"), ("planckConstant", "6.62607004e-34")] {
        let lit = parse_literal(source)?;
        out.push(format!("{} {} = {}", name, source, lit));
    }
    Ok(())
}

fn conversions(out: &mut Vec<String>) -> Result<()> {
    out.push("Numbers convert to and from other bases".to_string());
    out.push(RULE.to_string());

    let number = 1024;
    for (name, radix) in [
        ("decimal", Radix::Decimal),
        ("binary", Radix::Binary),
        ("octal", Radix::Octal),
        ("hex", Radix::Hexadecimal),
    ] {
        out.push(format!("{} in {} {}", number, name, radix.format(number)));
    }

    for (name, text, radix) in [
        ("Decimal", "48", 10),
        ("Binary", "100101", 2),
        ("Octal", "100", 8),
        ("Hex", "CAFE", 16),
    ] {
        let value = parse(text, radix)?;
        out.push(format!("{} {} in decimal {}", name, text, value));
    }
    Ok(())
}

fn type_inspection(out: &mut Vec<String>) {
    out.push("typeof".to_string());
    out.push(RULE.to_string());

    let samples: [(&str, Value); 9] = [
        ("undefined", Value::Undefined),
        ("null", Value::Null),
        ("\"text\"", Value::from("text")),
        ("2.5", Value::from(2.5)),
        ("true", Value::from(true)),
        ("{ a: 1 }", Value::Object(vec![("a".to_string(), Value::from(1))])),
        ("[1, 2]", Value::from(vec![Value::from(1), Value::from(2)])),
        ("parseInt", Value::from(Callable::new("parseInt", 2))),
        ("epoch", Value::from(DateTime::<Utc>::UNIX_EPOCH)),
    ];
    for (label, value) in &samples {
        out.push(format!("typeof {} = {}", label, classify(value)));
    }

    out.push(format!(
        "0.1 + 0.2 = {} ({})",
        format_number(0.1 + 0.2),
        classify(&Value::from(0.1 + 0.2))
    ));
}
