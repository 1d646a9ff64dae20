//! Sweeps the mid-frequency quadrature's term count across a grid of
//! `(beta, omega)` pairs, to help re-tune the double-exponential
//! transformation.
//!
//! ```text
//! kww_countterms <nb> <nw> [<beta>]
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
use kww::DebugFlags;
use std::process::ExitCode;

fn usage() {
    eprintln!("usage:");
    eprintln!("   kww_countterms <nb> <nw> [<b>]");
    eprintln!("with arguments:");
    eprintln!("   <nb>: number of different beta's");
    eprintln!("   <nw>: number of different omega's");
    eprintln!("   <b>:  value of beta if nb=1");
    eprintln!("output:");
    eprintln!("   number of terms w");
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 && args.len() != 4 {
        usage();
        return ExitCode::from(1);
    }
    let Ok(nb) = args[1].parse::<usize>() else {
        eprintln!("invalid <nb> argument");
        return ExitCode::from(1);
    };
    let Ok(nw) = args[2].parse::<usize>() else {
        eprintln!("invalid <nw> argument");
        return ExitCode::from(1);
    };
    if nw < 2 {
        eprintln!("<nw> must be at least 2");
        return ExitCode::from(1);
    }

    let mut grand_total: u64 = 0;
    for j in 0..nb {
        let beta = if nb == 1 {
            match args.get(3).and_then(|s| s.parse::<f64>().ok()) {
                Some(b) => b,
                None => {
                    eprintln!("nb=1 requires a fixed <b> argument");
                    return ExitCode::from(1);
                }
            }
        } else {
            0.1 + 1.8 * j as f64 / (nb as f64 - 1.0)
        };

        let mut beta_total: u64 = 0;
        for kind_is_sin in [false, true] {
            let (mut wl, mut wh) = if kind_is_sin {
                (kww::kwws_lim_low(beta), kww::kwws_lim_hig(beta))
            } else {
                (kww::kwwc_lim_low(beta), kww::kwwc_lim_hig(beta))
            };
            wl /= 1.02;
            wh *= 1.02;

            for i in 0..nw {
                let w = wl * (wh / wl).powf(i as f64 / (nw as f64 - 1.0));
                let result = if kind_is_sin {
                    kww::kwws_mid(w, beta, DebugFlags::NONE)
                } else {
                    kww::kwwc_mid(w, beta, DebugFlags::NONE)
                };
                match result {
                    Ok(out) => beta_total += u64::from(out.num_of_terms),
                    Err(err) => {
                        eprintln!(
                            "integration {} failed {} {} -> {err}",
                            i32::from(kind_is_sin),
                            format_g(beta, 18, 25),
                            format_g(w, 18, 25)
                        );
                        return ExitCode::from(1);
                    }
                }
            }
        }
        // Matches the reference tool exactly: `s1` accumulates terms from
        // both the cosine and sine sweeps, yet is divided by `nw` alone,
        // not `2*nw` -- the average it prints is per-direction-pair, not
        // per-call.
        let per_beta_avg = beta_total as f64 / nw as f64;
        println!("{} {}", format_g(beta, 9, 15), format_g(per_beta_avg, 9, 15));
        grand_total += beta_total;
    }
    let overall_avg = grand_total as f64 / (nb as f64) / (nw as f64);
    println!("total: {}", format_g(overall_avg, 9, 15));
    ExitCode::SUCCESS
}
