//! # Fabshop Converter CLI
//!
//! Terminal front end for the composite-fabrication conversion engine.
//! Three panes mirror the shop workflow: textile areal weight, roll length,
//! and catalyst dosing. Each result prints as a formatted summary plus a
//! JSON block for scripting.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use fab_core::conversions::catalyst::{self, CatalystInput};
use fab_core::conversions::roll::{self, RollInput};
use fab_core::format::format_value;
use fab_core::parse::{parse_non_negative, parse_positive};
use fab_core::resolver::{ArealField, ArealPane};
use fab_core::units::{MassUnit, VolumeUnit, WidthUnit};

const DEFAULT_PRECISION: u8 = 4;

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

/// Prompt for a positive quantity; empty input takes the default, anything
/// unparsable yields no value (the pane then has nothing to compute).
fn prompt_positive(prompt: &str, default: &str) -> Option<f64> {
    let input = prompt_line(prompt);
    if input.is_empty() {
        parse_positive(default)
    } else {
        parse_positive(&input)
    }
}

fn prompt_non_negative(prompt: &str, default: &str) -> Option<f64> {
    let input = prompt_line(prompt);
    if input.is_empty() {
        parse_non_negative(default)
    } else {
        parse_non_negative(&input)
    }
}

/// Prompt for a unit symbol; empty or unknown input takes the default.
fn prompt_unit<U: FromStr + Copy>(prompt: &str, default: U) -> U {
    let input = prompt_line(prompt);
    if input.is_empty() {
        return default;
    }
    input.parse().unwrap_or(default)
}

fn print_json<T: serde::Serialize>(value: &T) {
    if let Ok(json) = serde_json::to_string_pretty(value) {
        println!();
        println!("JSON:");
        println!("{}", json);
    }
}

fn no_result() {
    println!();
    println!("No result - enter a positive number.");
}

fn textile_pane(pane: &mut ArealPane, precision: u8) {
    println!();
    println!("Textile Areal Weight (gsm <-> oz/yd2 <-> oz/ft2)");
    println!("Fields: 1) gsm  2) oz/yd2  3) oz/ft2");

    let field = match prompt_line("Which field are you entering? [1]: ").as_str() {
        "" | "1" => ArealField::Gsm,
        "2" => ArealField::OzPerYd2,
        "3" => ArealField::OzPerFt2,
        other => {
            println!("Unknown field '{}', using gsm.", other);
            ArealField::Gsm
        }
    };

    let raw = prompt_line(&format!("Value [{}]: ", pane.raw()));
    if !raw.is_empty() {
        pane.edit(field, raw);
    }

    match pane.derived() {
        Some(weights) => {
            println!();
            println!(
                "{} gsm  =  {} oz/yd2  =  {} oz/ft2",
                format_value(weights.gsm, precision),
                format_value(weights.oz_per_yd2, precision),
                format_value(weights.oz_per_ft2, precision),
            );
            print_json(&weights);
        }
        None => no_result(),
    }
}

fn roll_pane(precision: u8) {
    println!();
    println!("Roll Length from roll weight, areal weight, and width");

    let areal = prompt_positive("Areal weight (gsm) [200]: ", "200");
    let weight = prompt_positive("Roll weight [25]: ", "25");
    let weight_unit: MassUnit = prompt_unit("Weight unit (kg/lb) [kg]: ", MassUnit::Kilograms);
    let width = prompt_positive("Roll width [50]: ", "50");
    let width_unit: WidthUnit = prompt_unit("Width unit (in/mm/cm/m) [in]: ", WidthUnit::Inches);

    let (Some(areal_weight_gsm), Some(roll_weight), Some(roll_width)) = (areal, weight, width)
    else {
        no_result();
        return;
    };

    let input = RollInput {
        areal_weight_gsm,
        roll_weight,
        weight_unit,
        roll_width,
        width_unit,
    };

    match roll::calculate(&input) {
        Ok(result) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  ROLL LENGTH");
            println!("═══════════════════════════════════════");
            println!(
                "  {} {} of {} gsm cloth, {} {} wide",
                format_value(input.roll_weight, precision),
                input.weight_unit,
                format_value(input.areal_weight_gsm, precision),
                format_value(input.roll_width, precision),
                input.width_unit,
            );
            println!("  Area:   {} m2", format_value(result.area_m2, precision));
            println!(
                "  Length: {} yd ({} m)",
                format_value(result.length_yd, precision),
                format_value(result.length_m, precision),
            );
            print_json(&result);
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn catalyst_pane(precision: u8) {
    println!();
    println!("Catalyst by volume (shop-friendly cc/gal and oz/gal)");

    let percent = prompt_non_negative("Catalyst % (v/v) [1.5]: ", "1.5");
    let volume = prompt_positive("Resin amount [1]: ", "1");
    let resin_unit: VolumeUnit = prompt_unit("Resin unit (gal/qt/L/fl oz) [gal]: ", VolumeUnit::Gallons);

    let (Some(percent), Some(resin_volume)) = (percent, volume) else {
        no_result();
        return;
    };

    let input = CatalystInput {
        percent,
        resin_volume,
        resin_unit,
    };

    match catalyst::calculate(&input) {
        Ok(result) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  CATALYST DOSE");
            println!("═══════════════════════════════════════");
            println!(
                "  {} {} at {}%  ->  {} cc ({} fl oz)",
                format_value(input.resin_volume, precision),
                input.resin_unit,
                format_value(input.percent, precision),
                format_value(result.catalyst_cc, precision),
                format_value(result.catalyst_fl_oz, precision),
            );
            println!(
                "  Rate: {} cc/gal ~ {} oz/gal",
                format_value(result.cc_per_gal, precision),
                format_value(result.oz_per_gal, precision),
            );
            print_json(&result);
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn precision_pane(precision: &mut u8) {
    let input = prompt_line(&format!("Display precision 0-6 [{}]: ", precision));
    if input.is_empty() {
        return;
    }
    match input.parse::<u8>() {
        Ok(p) if p <= fab_core::format::MAX_PRECISION => *precision = p,
        _ => println!("Precision must be an integer from 0 to 6."),
    }
}

fn main() {
    println!("Fabshop Converter");
    println!("=================");

    let mut pane = ArealPane::new();
    let mut precision = DEFAULT_PRECISION;

    loop {
        println!();
        println!("1) Textile areal weight   2) Roll length   3) Catalyst");
        println!("p) Precision ({})          q) Quit", precision);
        match prompt_line("> ").as_str() {
            "1" => textile_pane(&mut pane, precision),
            "2" => roll_pane(precision),
            "3" => catalyst_pane(precision),
            "p" => precision_pane(&mut precision),
            "q" | "" => break,
            other => println!("Unknown choice: {}", other),
        }
    }
}
