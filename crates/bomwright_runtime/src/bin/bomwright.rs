//! Bomwright demo driver.
//!
//! Builds the classic pen bill-of-materials (ink cartridge → pen → pen
//! box), saves it as a base project, then derives one variant per
//! barrel/ink combination by restoring the base, attaching the variant
//! parts, and saving the result under its own project name.

use std::env;
use std::process::ExitCode;

use bomwright_engine::Engine;
use bomwright_foundation::{NodeKind, Result};
use bomwright_runtime::{export, render};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    show_help: bool,
    show_version: bool,
    quiet: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> std::result::Result<CliConfig, String> {
    let mut config = CliConfig::default();

    for arg in &args[1..] {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-q" | "--quiet" => config.quiet = true,
            other => return Err(format!("unknown option: {other}")),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("bomwright {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut engine = Engine::new();
    build_base_pen(&mut engine)?;

    // Checkpoint the base build and start each variant from it.
    engine.save_project("base_pen");
    engine.restore_project("base_pen")?;

    let barrel_types = ["metal_barrel", "plastic_barrel"];
    let ink_colors = ["red_ink", "blue_ink"];

    for barrel in barrel_types {
        for ink_color in ink_colors {
            engine.create_part(barrel)?;
            engine.attach_part(barrel, "pen")?;
            engine.create_part(ink_color)?;
            engine.attach_part(ink_color, "ink_cartridge")?;

            let project = format!("{barrel}_{ink_color}_pen");
            if !config.quiet {
                let tree = export::export_tree(engine.forest(), NodeKind::Assembly, "pen_box")?;
                println!("\x1b[1m{project}:\x1b[0m\n");
                println!("{}", render(&tree));
            }

            engine.save_project(&project);
            engine.restore_project("base_pen")?;
        }
    }

    if !config.quiet {
        let mut projects: Vec<_> = engine.snapshots().project_names().collect();
        projects.sort_unstable();
        println!("\x1b[1;36mSaved projects:\x1b[0m");
        for name in projects {
            println!("  - {name}");
        }
    }

    Ok(())
}

/// Builds the base pen box: ink cartridge inside a pen inside a box.
fn build_base_pen(engine: &mut Engine) -> Result<()> {
    let ink_cartridge = ["cartridge_body", "cartridge_cap", "writing_tip"];
    for part in ink_cartridge {
        engine.create_part(part)?;
    }
    engine.create_assembly("ink_cartridge", &ink_cartridge, &[])?;

    let pen_components = ["pocket_clip", "thruster", "spring", "cam"];
    for part in pen_components {
        engine.create_part(part)?;
    }
    engine.create_assembly("pen", &pen_components, &["ink_cartridge"])?;

    let box_parts = ["box_top", "box_bottom", "box_inserts"];
    for part in box_parts {
        engine.create_part(part)?;
    }
    engine.create_assembly("pen_box", &box_parts, &["pen"])?;

    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mBomwright\x1b[0m - Bill-of-materials engine demo

\x1b[1mUSAGE:\x1b[0m
    bomwright [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help       Print help information
    -V, --version    Print version information
    -q, --quiet      Build and save the pen variants without printing trees

Builds the pen box bill of materials, saves it as the 'base_pen'
project, then derives and saves one project per barrel/ink variant."
    );
}
