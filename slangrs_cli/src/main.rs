//! Slang CLI tool using safe Rust API

use clap::{ArgAction, Parser, Subcommand};
use slangrs::reflect::{ParameterCategory, ProgramLayout, TypeLayout, VariableLayout};
use slangrs::{Component, CompileTarget, Define, GlobalSession, SessionBuilder, TargetBuilder};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "slangrs")]
#[command(about = "Slang shader compiler command-line tool", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a Slang shader to target code
    Compile {
        /// Input Slang file
        input: PathBuf,

        /// Entry point function name
        #[arg(short, long, default_value = "main")]
        entry: String,

        /// Output format (spirv, hlsl, glsl, dxil, metal, wgsl, ...)
        #[arg(short, long, default_value = "spirv", value_parser = parse_target)]
        target: CompileTarget,

        /// Profile (e.g., spirv_1_6, sm_6_5); defaults per target
        #[arg(short, long)]
        profile: Option<String>,

        /// Output file (default: <input>.<target extension>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Preprocessor defines (NAME=VALUE or NAME)
        #[arg(short = 'D', long = "define", value_name = "NAME=VALUE")]
        defines: Vec<String>,

        /// Include / import search paths
        #[arg(short = 'I', long = "include", value_name = "DIR")]
        search_paths: Vec<PathBuf>,
    },

    /// Show parameter bindings and entry points
    Reflect {
        /// Input Slang file
        input: PathBuf,

        /// Entry points to include (default: main)
        #[arg(short, long = "entry", default_value = "main")]
        entries: Vec<String>,

        /// Target whose layout rules apply
        #[arg(short, long, default_value = "spirv", value_parser = parse_target)]
        target: CompileTarget,

        /// Preprocessor defines (NAME=VALUE or NAME)
        #[arg(short = 'D', long = "define", value_name = "NAME=VALUE")]
        defines: Vec<String>,

        /// Include / import search paths
        #[arg(short = 'I', long = "include", value_name = "DIR")]
        search_paths: Vec<PathBuf>,
    },

    /// List supported targets
    Targets,

    /// Look up a profile id by name
    Profile {
        /// Profile name (e.g., sm_6_0)
        name: String,
    },
}

fn parse_target(s: &str) -> Result<CompileTarget, String> {
    s.parse::<CompileTarget>().map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn session_builder(target: TargetBuilder, defines: &[String], search_paths: &[PathBuf]) -> SessionBuilder {
    search_paths
        .iter()
        .fold(SessionBuilder::new().target(target), |builder, path| {
            builder.search_path(&path.to_string_lossy())
        })
        .defines(defines.iter().map(|d| Define::parse(d)))
}

fn read_source(input: &Path) -> Result<String, String> {
    std::fs::read_to_string(input).map_err(|e| format!("Failed to read {}: {}", input.display(), e))
}

fn warn(warnings: Option<&str>) {
    if let Some(warnings) = warnings {
        eprintln!("Warnings:\n{}", warnings);
    }
}

fn compile_shader(
    input: PathBuf,
    entry: String,
    target: CompileTarget,
    profile: Option<String>,
    output: Option<PathBuf>,
    defines: Vec<String>,
    search_paths: Vec<PathBuf>,
) -> Result<(), String> {
    let output = output.unwrap_or_else(|| input.with_extension(target.extension()));
    let source = read_source(&input)?;

    let mut target_builder = TargetBuilder::new(target);
    if let Some(profile) = &profile {
        target_builder = target_builder.profile(profile);
    }

    let global = GlobalSession::new().map_err(|e| e.to_string())?;
    let session = session_builder(target_builder, &defines, &search_paths)
        .build(&global)
        .map_err(|e| e.to_string())?;

    let module = session.load_module(&source).map_err(|e| e.to_string())?;
    warn(module.warnings());
    let entry_point = module.find_entry_point(&entry).map_err(|e| e.to_string())?;
    let program = session
        .compose(&[&module, &entry_point])
        .and_then(|composite| composite.link())
        .map_err(|e| e.to_string())?;
    warn(program.warnings());

    let code = program.target_code().map_err(|e| e.to_string())?;
    std::fs::write(&output, code.as_bytes())
        .map_err(|e| format!("Failed to write {}: {}", output.display(), e))?;

    eprintln!(
        "Compiled {} ({}) -> {} ({} bytes)",
        input.display(),
        target,
        output.display(),
        code.len()
    );

    Ok(())
}

fn describe_binding(param: &VariableLayout<'_>) -> String {
    let categories = param.categories();
    if categories.is_empty() {
        return "unbound".to_string();
    }
    categories
        .iter()
        .map(|&category| {
            let offset = param.offset(category);
            let space = param.binding_space_for(category);
            match category {
                ParameterCategory::Uniform => format!("uniform offset {}", offset),
                ParameterCategory::DescriptorTableSlot => format!("binding {} set {}", offset, space),
                _ => format!("{} {} space {}", category, offset, space),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_fields(layout: &TypeLayout<'_>, indent: usize) {
    for field in layout.fields() {
        let size = field
            .type_layout()
            .map(|t| t.size(ParameterCategory::Uniform))
            .unwrap_or(0);
        println!(
            "{:indent$}+{:3}: {} ({} bytes)",
            "",
            field.offset(ParameterCategory::Uniform),
            field.name().unwrap_or("?"),
            size,
            indent = indent
        );
    }
}

fn print_layout(layout: &ProgramLayout<'_>) {
    let params: Vec<_> = layout.parameters().collect();
    if !params.is_empty() {
        println!("Parameters ({}):", params.len());
        for param in &params {
            let type_name = param.ty().and_then(|t| t.name()).unwrap_or("?");
            println!(
                "  {}: {} [{}]",
                param.name().unwrap_or("?"),
                type_name,
                describe_binding(param)
            );

            // Constant buffers and parameter blocks: show the element's fields
            if let Some(element) = param.type_layout().and_then(|t| t.element_type_layout()) {
                print_fields(&element, 6);
            }
        }
        println!();
    }

    let entry_points: Vec<_> = layout.entry_points().collect();
    if !entry_points.is_empty() {
        println!("Entry Points ({}):", entry_points.len());
        for entry in &entry_points {
            print!("  {} ({})", entry.name().unwrap_or("?"), entry.stage());
            if entry.stage() == slangrs::reflect::Stage::Compute {
                let [x, y, z] = entry.compute_thread_group_size();
                print!(" numthreads({}, {}, {})", x, y, z);
            }
            println!();
            for param in entry.parameters() {
                let semantic = param.semantic_name().unwrap_or("");
                println!(
                    "      {}: {} {}",
                    param.name().unwrap_or("?"),
                    semantic,
                    describe_binding(&param)
                );
            }
        }
        println!();
    }
}

fn reflect_shader(
    input: PathBuf,
    entries: Vec<String>,
    target: CompileTarget,
    defines: Vec<String>,
    search_paths: Vec<PathBuf>,
) -> Result<(), String> {
    let source = read_source(&input)?;

    let global = GlobalSession::new().map_err(|e| e.to_string())?;
    let session = session_builder(TargetBuilder::new(target), &defines, &search_paths)
        .build(&global)
        .map_err(|e| e.to_string())?;

    let module = session.load_module(&source).map_err(|e| e.to_string())?;
    warn(module.warnings());
    let entry_points = entries
        .iter()
        .map(|name| module.find_entry_point(name))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;

    let mut components: Vec<&dyn Component> = vec![&module];
    components.extend(entry_points.iter().map(|e| e as &dyn Component));
    let program = session
        .compose(&components)
        .and_then(|composite| composite.link())
        .map_err(|e| e.to_string())?;

    let layout = program.layout(0).map_err(|e| e.to_string())?;
    println!("Target: {}", target);
    println!();
    print_layout(&layout);

    Ok(())
}

fn list_targets() -> Result<(), String> {
    for target in CompileTarget::ALL {
        println!(
            "  {:14} .{:12} {}",
            target.name(),
            target.extension(),
            target.default_profile().unwrap_or("-")
        );
    }
    Ok(())
}

fn lookup_profile(name: String) -> Result<(), String> {
    let global = GlobalSession::new().map_err(|e| e.to_string())?;
    match global.find_profile(&name) {
        Some(id) => {
            println!("{}: 0x{:08x}", name, id);
            Ok(())
        }
        None => Err(format!("Unknown profile: {}", name)),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compile {
            input,
            entry,
            target,
            profile,
            output,
            defines,
            search_paths,
        } => compile_shader(input, entry, target, profile, output, defines, search_paths),
        Commands::Reflect {
            input,
            entries,
            target,
            defines,
            search_paths,
        } => reflect_shader(input, entries, target, defines, search_paths),
        Commands::Targets => list_targets(),
        Commands::Profile { name } => lookup_profile(name),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compile_args() {
        let cli = Cli::parse_from([
            "slangrs", "-vv", "compile", "shader.slang", "-t", "hlsl", "-D", "FOO=1", "-D", "BAR", "-I", "inc",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Compile {
                target,
                entry,
                defines,
                search_paths,
                ..
            } => {
                assert_eq!(target, CompileTarget::Hlsl);
                assert_eq!(entry, "main");
                assert_eq!(defines, vec!["FOO=1".to_string(), "BAR".to_string()]);
                assert_eq!(search_paths, vec![PathBuf::from("inc")]);
            }
            _ => panic!("expected compile"),
        }
    }

    #[test]
    fn test_parse_target_rejects_unknown() {
        assert!(parse_target("spv").is_ok());
        assert!(parse_target("vs_5_0").is_err());
    }
}
