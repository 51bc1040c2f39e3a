use clap::Parser;
use decima::{codec, decimal::value::Decimal};

/// decima evaluates decimal expressions and converts decimals to and from
/// their compact binary form.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Encode the decimal argument into its binary form, printed as hex.
    #[arg(short, long)]
    encode: bool,

    /// Decode a hex byte string back into a decimal.
    #[arg(short, long)]
    decode: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let outcome = if args.encode {
        run_encode(&args.contents)
    } else if args.decode {
        run_decode(&args.contents)
    } else {
        run_evaluate(&args.contents)
    };

    if let Err(e) = outcome {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run_encode(contents: &str) -> Result<(), Box<dyn std::error::Error>> {
    let value: Decimal = contents.trim().parse()?;
    let bytes = codec::encode::encode(&value);
    println!("{}", hex_string(&bytes));
    Ok(())
}

fn run_decode(contents: &str) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = parse_hex(contents)?;
    match codec::decode::decode(&bytes) {
        Some(value) => println!("{value}"),
        None => println!("(no value)"),
    }
    Ok(())
}

fn run_evaluate(contents: &str) -> Result<(), Box<dyn std::error::Error>> {
    let value = decima::evaluate(contents)?;
    println!("{value}");
    Ok(())
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

fn parse_hex(contents: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let cleaned: String = contents.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned = cleaned.strip_prefix("0x").unwrap_or(&cleaned);

    if cleaned.len() % 2 != 0 {
        return Err(format!("Odd number of hex digits in '{contents}'.").into());
    }

    let mut bytes = Vec::with_capacity(cleaned.len() / 2);
    for index in (0..cleaned.len()).step_by(2) {
        let byte = u8::from_str_radix(&cleaned[index..index + 2], 16)
            .map_err(|_| format!("Invalid hex byte in '{contents}'."))?;
        bytes.push(byte);
    }
    Ok(bytes)
}
