//! Command-line front-end to the `kww` library: evaluates one transform
//! value and reports which algorithm produced it.
//!
//! ```text
//! runkww <debug> c|s|p a|l|m|h <beta> <omega>
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "CLI argument parsing and tabulation does plain index/count <-> f64 conversions throughout"
)]

#[path = "fmt_g.rs"]
mod fmt_g;

use fmt_g::format_g;
use kww::{Algorithm, DebugFlags, KwwError};
use std::process::ExitCode;

fn usage() {
    eprintln!("usage:");
    eprintln!("   runkww <deb> c|s|p a|l|m|h <b> <w>");
    eprintln!("with arguments:");
    eprintln!("   <deb>: integer debug code");
    eprintln!("   flag1: c: cos transform");
    eprintln!("          s: sin transform");
    eprintln!("          p: primitive of cos transform");
    eprintln!("   flag2: a: automatic determination of algorithm");
    eprintln!("          l: low-omega series expansion");
    eprintln!("          m: mid-omega numeric integration");
    eprintln!("          h: hig-omega series expansion");
    eprintln!("   b: stretching exponent (between 0.1 and 2)");
    eprintln!("   w: omega");
    eprintln!("output:");
    eprintln!("   value1: the function value of kwws or kwwc");
    eprintln!("   value2: algorithm used (1=l, 2=m, 3=h)");
    eprintln!("   value3: the number of summed terms");
}

fn algorithm_code(alg: Algorithm) -> i32 {
    match alg {
        Algorithm::Low => 1,
        Algorithm::Mid => 2,
        Algorithm::High => 3,
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 6 {
        usage();
        return ExitCode::from(1);
    }

    let debug = DebugFlags(args[1].parse::<u8>().unwrap_or(0));
    let dir = args[2].chars().next().unwrap_or('\0');
    if !matches!(dir, 'c' | 's' | 'p') {
        eprintln!(" choose transform 'c' or 's' or 'p'");
        return ExitCode::from(1);
    }
    let alg = args[3].chars().next().unwrap_or('\0');
    if !matches!(alg, 'a' | 'l' | 'm' | 'h') {
        eprintln!(" choose algorithm 'a' or 'l' or 'm' or 'h'");
        return ExitCode::from(1);
    }
    let Ok(beta) = args[4].parse::<f64>() else {
        eprintln!("invalid beta argument");
        return ExitCode::from(1);
    };
    let Ok(w) = args[5].parse::<f64>() else {
        eprintln!("invalid omega argument");
        return ExitCode::from(1);
    };

    let result = match (alg, dir) {
        ('a', 'c') => kww::kwwc_with_debug(w, beta, debug),
        ('a', 's') => kww::kwws_with_debug(w, beta, debug),
        ('a', 'p') => kww::kwwp_with_debug(w, beta, debug),
        ('l', 'c') => kww::kwwc_low(w, beta, debug).map(|o| wrap(o, Algorithm::Low)),
        ('l', 's') => kww::kwws_low(w, beta, debug).map(|o| wrap(o, Algorithm::Low)),
        ('l', 'p') => kww::kwwp_low(w, beta, debug).map(|o| wrap(o, Algorithm::Low)),
        ('m', 'c') => kww::kwwc_mid(w, beta, debug).map(|o| wrap(o, Algorithm::Mid)),
        ('m', 's') => kww::kwws_mid(w, beta, debug).map(|o| wrap(o, Algorithm::Mid)),
        ('m', 'p') => kww::kwwp_mid(w, beta, debug).map(|o| wrap(o, Algorithm::Mid)),
        ('h', 'c') => kww::kwwc_hig(w, beta, debug).map(|o| wrap(o, Algorithm::High)),
        ('h', 's') => kww::kwws_hig(w, beta, debug).map(|o| wrap(o, Algorithm::High)),
        ('h', 'p') => kww::kwwp_hig(w, beta, debug).map(|o| wrap(o, Algorithm::High)),
        _ => unreachable!("dir and alg were validated above"),
    };

    match result {
        Ok(outcome) => {
            println!(
                "{} {:1} {:6}",
                format_g(outcome.value, 19, 25),
                algorithm_code(outcome.diagnostics.algorithm),
                outcome.diagnostics.num_of_terms
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("runkww: {err}");
            ExitCode::from(u8::try_from(exit_code(&err)).unwrap_or(1))
        }
    }
}

fn wrap(out: kww::KernelOutput, algorithm: Algorithm) -> kww::KwwOutcome {
    kww::KwwOutcome {
        value: kernel_value(out),
        diagnostics: kww::Diagnostics {
            algorithm,
            num_of_terms: out.num_of_terms,
        },
    }
}

fn kernel_value(out: kww::KernelOutput) -> f64 {
    out.value.to_f64()
}

fn exit_code(err: &KwwError) -> i32 {
    err.exit_code()
}
