//! # Walltake CLI Application
//!
//! Terminal front end for the drywall takeoff engine. Prompts for wall
//! parameters, computes against the built-in seed catalog, and prints the
//! material list together with the derivation log.

use std::io::{self, BufRead, Write};

use wall_core::calculations::wall::{calculate, Faces, Opening, StudSpacing, WallInput};
use wall_core::materials::seed;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_flag(prompt: &str, default: bool) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    match input.trim() {
        "y" | "Y" | "yes" => true,
        "n" | "N" | "no" => false,
        _ => default,
    }
}

fn main() {
    println!("Walltake CLI - Drywall Material Takeoff");
    println!("=======================================");
    println!();

    let width_m = prompt_f64("Enter wall width (m) [3.0]: ", 3.0);
    let height_m = prompt_f64("Enter wall height (m) [2.6]: ", 2.6);
    let spacing_mm = prompt_f64("Enter stud spacing (400/600 mm) [400]: ", 400.0);
    let stud_spacing = StudSpacing::try_from(spacing_mm as u32).unwrap_or(StudSpacing::Mm400);
    let face_count = prompt_f64("Enter boarded faces (1/2) [1]: ", 1.0);
    let faces = Faces::try_from(face_count as u8).unwrap_or(Faces::One);
    let double_board = prompt_flag("Double board layer? (y/n) [n]: ", false);
    let screws_per_m2 = prompt_f64("Enter screws per m2 of board [25.0]: ", 25.0);

    let mut openings = Vec::new();
    let opening_count = prompt_f64("Number of openings (doors/windows) [0]: ", 0.0) as usize;
    for index in 1..=opening_count {
        let width = prompt_f64(&format!("  Opening {index} width (m) [0.9]: "), 0.9);
        let height = prompt_f64(&format!("  Opening {index} height (m) [2.1]: "), 2.1);
        openings.push(Opening {
            width_m: width,
            height_m: height,
        });
    }

    let input = WallInput {
        label: "CLI-Demo".to_string(),
        width_m,
        height_m,
        stud_spacing,
        double_board,
        faces,
        openings,
        screws_per_m2,
    };

    let catalog = seed::builtin();
    let roles = seed::standard_roles();

    println!();
    println!("Calculating takeoff against the built-in catalog...");
    println!();

    match calculate(&input, catalog, &roles) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  WALL TAKEOFF RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Wall:     {:.2} x {:.2} m", input.width_m, input.height_m);
            println!("  Spacing:  {}", input.stud_spacing);
            println!("  Faces:    {}", u8::from(input.faces));
            println!(
                "  Layers:   {}",
                if input.double_board { "double" } else { "single" }
            );
            println!("  Openings: {}", input.openings.len());
            println!();
            println!("Materials:");
            for item in &result.items {
                let name = catalog
                    .get(&item.material_id)
                    .map(|m| m.name.as_str())
                    .unwrap_or(item.material_id.as_str());
                println!("  {:>4} {:<4} {}", item.quantity, item.unit.symbol(), name);
                if let Some(note) = &item.note {
                    println!("            {}", note);
                }
            }
            println!();
            println!("Detail:");
            for line in &result.detail {
                println!("  - {line}");
            }
            println!();
            println!("═══════════════════════════════════════");
            println!("  COVERED AREA: {:.2} m²", result.covered_area_m2);
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
