use clap::Parser;
use cc_cycle::{CycleInputs, CyclePerformance, solve};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cc-cli")]
#[command(about = "coolcycle CLI - scroll compressor COP estimator", long_about = None)]
struct Cli {
    /// Refrigerant name (registered blend like R454B, or any CoolProp
    /// pure/pseudo-pure fluid like R410A, R32, Propane)
    refrigerant: String,

    /// Evaporating temperature in °C
    #[arg(long)]
    t_evap: f64,

    /// Condensing temperature in °C
    #[arg(long)]
    t_cond: f64,

    /// Suction superheat in K
    #[arg(long, default_value_t = 5.0)]
    superheat: f64,

    /// Liquid subcooling in K
    #[arg(long, default_value_t = 5.0)]
    subcooling: f64,

    /// Compressor isentropic efficiency in (0, 1]
    #[arg(long = "is-eff", default_value_t = 0.80)]
    is_efficiency: f64,

    /// Motor efficiency in (0, 1]
    #[arg(long = "motor-eff", default_value_t = 0.93)]
    motor_efficiency: f64,

    /// Emit the raw result record as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let inputs = CycleInputs {
        refrigerant: cli.refrigerant,
        t_evap_c: cli.t_evap,
        t_cond_c: cli.t_cond,
        superheat_k: cli.superheat,
        subcooling_k: cli.subcooling,
        is_efficiency: cli.is_efficiency,
        motor_efficiency: cli.motor_efficiency,
    };

    match solve(&inputs) {
        Ok(perf) => {
            if cli.json {
                match serde_json::to_string_pretty(&perf) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("failed to encode result: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_summary(&perf);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if cli.json {
                match serde_json::to_string_pretty(&err) {
                    Ok(json) => eprintln!("{json}"),
                    Err(e) => eprintln!("failed to encode error: {e}"),
                }
            } else {
                eprintln!("✗ {err}");
            }
            ExitCode::FAILURE
        }
    }
}

fn print_summary(perf: &CyclePerformance) {
    println!("Refrigerant: {}", perf.refrigerant);
    println!("Condition:   {}", perf.operating_condition);
    println!();
    println!("  Carnot COP limit:     {:.3}", perf.cop_carnot);
    println!("  Ideal cycle COP:      {:.3}", perf.cop_ideal_cycle);
    println!("  Scroll-limit COP:     {:.3}", perf.cop_scroll_limit);
    println!();
    println!("  Pressure ratio:       {:.2}", perf.pressure_ratio);
    println!("  Discharge temp:       {:.2} °C", perf.discharge_temp_c);
    println!("  Liquid temp:          {:.2} °C", perf.liquid_temp_c);
    println!(
        "  Efficiencies:         isentropic {:.2}, motor {:.2}",
        perf.is_efficiency, perf.motor_efficiency
    );
}
