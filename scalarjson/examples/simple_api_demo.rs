// Example demonstrating the parse API, typed accessors and error offsets

use scalarjson::{parse, ParseError, Parser, Rfc8259Config, Value};

fn describe(value: &Value) -> String {
    match value {
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        other => format!("{}", other.get_type()),
    }
}

fn main() -> Result<(), ParseError> {
    let inputs = [
        "null",
        " true",
        "-2.71828",
        "0000123",
        r#""Hello\nWorld""#,
        "1e300000009",
        r#""unterminated"#,
        "null x",
    ];

    println!("Using scalarjson::parse() with the default configuration:");
    for input in inputs {
        let mut parser = Parser::new(input);
        match parser.parse() {
            Ok(value) => println!("  {input:<20} => {}", describe(&value)),
            Err(e) => println!(
                "  {input:<20} => error: {e} (at byte {})",
                parser.error_offset().unwrap_or_default()
            ),
        }
    }

    println!();
    println!("Using Parser::<Rfc8259Config>:");
    for input in ["12 ", "0123", "\"a\" b"] {
        let result = Parser::<Rfc8259Config>::with_config(input).parse();
        println!("  {input:<20} => {result:?}");
    }

    let value = parse("42")?;
    println!();
    println!("Typed access: {:?}", value.get_number());
    println!("Mismatched access: {:?}", value.get_string());
    Ok(())
}
