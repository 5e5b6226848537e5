use std::io::{self, BufWriter, ErrorKind, Write};

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use mt19937_64::{FloatVariant, MersenneTwister64};

#[derive(Parser, Debug)]
#[command(name = "mt64", version, about = "Print MT19937-64 draws in the reference output layout")]
struct Opts {
    /// Scalar seed (any i64)
    #[arg(long, allow_negative_numbers = true, conflicts_with = "keys")]
    seed: Option<i64>,

    /// Comma-separated key array, decimal or 0x-prefixed hex
    #[arg(long, value_delimiter = ',', value_parser = parse_key)]
    keys: Option<Vec<u64>>,

    /// Number of values to print
    #[arg(long, default_value_t = 1000)]
    count: usize,

    /// Draws to discard before printing
    #[arg(long, default_value_t = 0)]
    skip: usize,

    /// Output kind
    #[arg(long, value_enum, default_value_t = Format::Uint64)]
    format: Format,

    /// Print the state fingerprint to stderr when done
    #[arg(long, action = ArgAction::SetTrue)]
    fingerprint: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Uint64,
    Int63,
    FloatA,
    FloatB,
    FloatC,
}

fn parse_key(raw: &str) -> Result<u64> {
    let raw = raw.trim();
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => raw.parse::<u64>(),
    };
    parsed.with_context(|| format!("invalid key {:?}", raw))
}

/// Generator seeded per the flags and advanced past `--skip` draws
fn build_generator(opts: &Opts) -> Result<MersenneTwister64> {
    let mut rng = MersenneTwister64::new();
    if let Some(seed) = opts.seed {
        rng.seed(seed);
    } else if let Some(ref keys) = opts.keys {
        rng.try_seed_by_array(keys)
            .map_err(|e| anyhow!("--keys: {}", e))?;
    }

    for _ in 0..opts.skip {
        rng.next_u64();
    }
    Ok(rng)
}

fn draw_line(rng: &mut MersenneTwister64, format: Format) -> String {
    match format {
        Format::Uint64 => format!("{:20}", rng.next_u64()),
        Format::Int63 => format!("{:20}", rng.next_i63()),
        Format::FloatA => format!("{:10.8}", rng.next_f64_variant(FloatVariant::Closed)),
        Format::FloatB => format!("{:10.8}", rng.next_f64_variant(FloatVariant::HalfOpen)),
        Format::FloatC => format!("{:10.8}", rng.next_f64_variant(FloatVariant::Open)),
    }
}

fn write_draws<W: Write>(
    out: &mut W,
    rng: &mut MersenneTwister64,
    count: usize,
    format: Format,
) -> io::Result<()> {
    for _ in 0..count {
        writeln!(out, "{}", draw_line(rng, format))?;
    }
    out.flush()
}

/// Stream draws to `out`; a reader closing the pipe early ends output cleanly
fn emit<W: Write>(out: W, rng: &mut MersenneTwister64, opts: &Opts) -> Result<()> {
    let mut out = BufWriter::new(out);
    match write_draws(&mut out, rng, opts.count, opts.format) {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        result => result.context("writing draws"),
    }
}

fn fingerprint_line(rng: &MersenneTwister64) -> String {
    format!("fingerprint {}", rng.snapshot().fingerprint())
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    let mut rng = build_generator(&opts)?;

    emit(io::stdout().lock(), &mut rng, &opts)?;

    if opts.fingerprint {
        eprintln!("{}", fingerprint_line(&rng));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_hex_and_decimal() {
        assert_eq!(parse_key("0x12345").unwrap(), 0x12345);
        assert_eq!(parse_key("0XFF").unwrap(), 255);
        assert_eq!(parse_key("74565").unwrap(), 74565);
        assert!(parse_key("0xZZ").is_err());
        assert!(parse_key("-1").is_err());
    }

    #[test]
    fn test_keys_flag_reproduces_reference_output() {
        let opts = Opts::parse_from(["mt64", "--keys", "0x12345,0x23456,0x34567,0x45678"]);
        let mut rng = build_generator(&opts).unwrap();

        assert_eq!(draw_line(&mut rng, Format::Uint64), " 7266447313870364031");
    }

    #[test]
    fn test_default_generator_uses_lazy_seed() {
        let opts = Opts::parse_from(["mt64", "--format", "float-b"]);
        assert_eq!(opts.format, Format::FloatB);

        let mut rng = build_generator(&opts).unwrap();
        assert!(!rng.is_seeded());
        assert_eq!(draw_line(&mut rng, Format::FloatB), "0.78682095");
    }

    #[test]
    fn test_negative_seed_flag() {
        let opts = Opts::parse_from(["mt64", "--seed", "-1"]);
        let mut rng = build_generator(&opts).unwrap();

        assert_eq!(draw_line(&mut rng, Format::Uint64), "  478026398904862820");
    }

    #[test]
    fn test_seed_and_keys_conflict() {
        let parsed = Opts::try_parse_from(["mt64", "--seed", "1", "--keys", "2"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_skip_lands_on_word_after_twist() {
        let opts = Opts::parse_from(["mt64", "--skip", "312"]);
        let mut rng = build_generator(&opts).unwrap();

        assert_eq!(rng.index(), 312);
        assert_eq!(draw_line(&mut rng, Format::Uint64), " 6776537281339823025");
        assert_eq!(draw_line(&mut rng, Format::Uint64), " 3450492372588984223");
    }

    #[test]
    fn test_int63_format_is_shifted_word() {
        let opts = Opts::parse_from(["mt64", "--format", "int63"]);
        assert_eq!(opts.format, Format::Int63);

        let mut rng = build_generator(&opts).unwrap();
        // 14514284786278117030 >> 1
        assert_eq!(draw_line(&mut rng, Format::Int63), " 7257142393139058515");
        assert_eq!(draw_line(&mut rng, Format::Int63), " 2310273370083821454");
    }

    #[test]
    fn test_float_a_and_float_c_formats() {
        let opts = Opts::parse_from(["mt64", "--format", "float-a", "--skip", "4"]);
        assert_eq!(opts.format, Format::FloatA);
        let mut rng = build_generator(&opts).unwrap();
        assert_eq!(draw_line(&mut rng, Format::FloatA), "0.01927106");

        let opts = Opts::parse_from(["mt64", "--format", "float-c", "--skip", "1"]);
        assert_eq!(opts.format, Format::FloatC);
        let mut rng = build_generator(&opts).unwrap();
        assert_eq!(draw_line(&mut rng, Format::FloatC), "0.25048034");
    }

    #[test]
    fn test_emit_writes_count_lines() {
        let opts = Opts::parse_from(["mt64", "--count", "3"]);
        let mut rng = build_generator(&opts).unwrap();

        let mut buf = Vec::new();
        emit(&mut buf, &mut rng, &opts).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "14514284786278117030",
                " 4620546740167642908",
                "13109570281517897720",
            ]
        );
        assert_eq!(rng.index(), 3);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(ErrorKind::BrokenPipe))
        }
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::Other, "no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(ErrorKind::Other, "no space left"))
        }
    }

    #[test]
    fn test_emit_closed_pipe_is_clean_exit() {
        let opts = Opts::parse_from(["mt64", "--count", "2000000"]);
        let mut rng = build_generator(&opts).unwrap();

        assert!(emit(ClosedPipe, &mut rng, &opts).is_ok());
    }

    #[test]
    fn test_emit_other_write_errors_propagate() {
        let opts = Opts::parse_from(["mt64", "--count", "10"]);
        let mut rng = build_generator(&opts).unwrap();

        let err = emit(FullDisk, &mut rng, &opts).unwrap_err();
        assert_eq!(err.to_string(), "writing draws");
    }

    #[test]
    fn test_fingerprint_flag_reports_final_position() {
        let opts = Opts::parse_from(["mt64", "--count", "5", "--fingerprint"]);
        assert!(opts.fingerprint);

        let mut a = build_generator(&opts).unwrap();
        let mut b = build_generator(&opts).unwrap();
        emit(Vec::new(), &mut a, &opts).unwrap();
        emit(Vec::new(), &mut b, &opts).unwrap();

        let line = fingerprint_line(&a);
        let digest = line.strip_prefix("fingerprint ").unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(line, fingerprint_line(&b));

        b.next_u64();
        assert_ne!(line, fingerprint_line(&b));
    }
}
