use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Component, Path, PathBuf};

#[derive(Parser)]
#[command(name = "smock")]
#[command(about = "smock - Solidity mock contract generator for Foundry test suites")]
#[command(version = "0.1.0")]
#[command(author = "Gianluca Brigandi <gbrigand@gmail.com>")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render Solidity mocks for every contract in an AST snapshot
    Generate {
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long)]
        contract: Option<String>,

        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        helper: bool,

        #[arg(short, long)]
        verbose: bool,
    },

    /// Dump the mock contexts of one contract as JSON lines
    Inspect {
        input: PathBuf,

        #[arg(short, long)]
        contract: String,

        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the resolved selector map of one contract
    Selectors {
        input: PathBuf,

        #[arg(short, long)]
        contract: String,

        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            contract,
            config,
            helper,
            verbose,
        } => {
            init_logging(verbose);
            cmd_generate(input, output, contract, config, helper, verbose)
        }
        Commands::Inspect {
            input,
            contract,
            verbose,
        } => {
            init_logging(verbose);
            cmd_inspect(input, contract)
        }
        Commands::Selectors {
            input,
            contract,
            verbose,
        } => {
            init_logging(verbose);
            cmd_selectors(input, contract)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_snapshot(input: &Path) -> Result<smock::AstSnapshot> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read snapshot {}", input.display()))?;
    smock::AstSnapshot::from_json(&json)
        .with_context(|| format!("Invalid AST snapshot {}", input.display()))
}

fn load_config(path: Option<&Path>) -> Result<smock::EmitterConfig> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            smock::EmitterConfig::from_json(&json)
                .with_context(|| format!("Invalid config {}", path.display()))
        }
        None => Ok(smock::EmitterConfig::default()),
    }
}

/// `src/tokens/Token.sol` lands at `<output>/src/tokens/MockToken.sol`.
fn mock_file_path(output: &Path, source_path: &str, prefix: &str) -> PathBuf {
    let source = Path::new(source_path);
    let mut path = output.to_path_buf();
    if let Some(parent) = source.parent() {
        path.extend(
            parent
                .components()
                .filter(|component| matches!(component, Component::Normal(_))),
        );
    }
    let stem = source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("Contract");
    path.join(format!("{}{}.sol", prefix, stem))
}

fn cmd_generate(
    input: PathBuf,
    output: Option<PathBuf>,
    contract: Option<String>,
    config: Option<PathBuf>,
    helper: bool,
    verbose: bool,
) -> Result<()> {
    use colored::*;
    use std::fs;
    use std::time::Instant;

    let mut config = load_config(config.as_deref())?;
    config.include_helper |= helper;
    if !config.use_colors {
        colored::control::set_override(false);
    }

    if verbose {
        eprintln!("{}", " smock Generator".bright_blue().bold());
        eprintln!("{}", "=".repeat(50).bright_blue());
        eprintln!(" Input: {}", input.display());
        if let Some(ref out) = output {
            eprintln!(" Output: {}", out.display());
        }
        if let Some(ref name) = contract {
            eprintln!(" Contract: {}", name);
        }
        eprintln!();
    }

    let start = Instant::now();
    let snapshot = load_snapshot(&input)?;

    let files: Vec<smock::MockFile> = match contract {
        Some(ref name) => smock::generate_mock_file(&snapshot, &config, name)?
            .into_iter()
            .collect(),
        None => smock::generate_mock_files(&snapshot, &config)?,
    };

    if files.is_empty() {
        eprintln!("{}", "  No mockable contracts found in input".yellow());
    }

    let helper_file = if config.include_helper {
        Some(smock::MockFileEmitter::new(config.clone()).helper_file()?)
    } else {
        None
    };

    match output {
        Some(output_dir) => {
            for file in &files {
                let path = mock_file_path(&output_dir, &file.source_path, &config.mock_prefix);
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create {}", parent.display()))?;
                }
                fs::write(&path, &file.contents)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                if verbose {
                    eprintln!("   Wrote {}", path.display());
                }
            }
            if let Some(helper) = helper_file {
                fs::create_dir_all(&output_dir)
                    .with_context(|| format!("Failed to create {}", output_dir.display()))?;
                let path = output_dir.join("SmockHelper.sol");
                fs::write(&path, helper)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            eprintln!(
                " {} Generated {} mock file(s) in {:.3}s",
                "SUCCESS:".bright_green().bold(),
                files.len(),
                start.elapsed().as_secs_f64()
            );
        }
        None => {
            let rendered: Vec<&str> = files
                .iter()
                .map(|file| file.contents.as_str())
                .chain(helper_file.as_deref())
                .collect();
            print!("{}", rendered.join("\n"));
        }
    }

    Ok(())
}

fn cmd_inspect(input: PathBuf, contract: String) -> Result<()> {
    use colored::*;

    let snapshot = load_snapshot(&input)?;
    let registry = snapshot.registry()?;
    let generator = smock::MockGenerator::new(&registry, &smock::core::JsonRenderer);

    match generator.generate_by_name(&contract)? {
        Some(mock) => {
            for rendered in mock.constructor.iter().chain(mock.members.iter()) {
                for line in rendered.lines() {
                    println!("{}", line);
                }
            }
        }
        None => {
            eprintln!(
                "{}",
                format!("  {} is not a mockable contract", contract).yellow()
            );
        }
    }

    Ok(())
}

fn cmd_selectors(input: PathBuf, contract: String) -> Result<()> {
    let snapshot = load_snapshot(&input)?;
    let registry = snapshot.registry()?;
    let definition = registry
        .get_contract_by_name(&contract)
        .ok_or_else(|| smock::SmockError::ContractNotFound(contract.clone()))?;

    let selectors = smock::SelectorResolver::new(&registry).resolve(definition)?;
    println!("{}", serde_json::to_string_pretty(&selectors.summaries())?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_file_path_mirrors_source_tree() {
        let path = mock_file_path(Path::new("out"), "src/tokens/Token.sol", "Mock");
        assert_eq!(path, Path::new("out/src/tokens/MockToken.sol"));
    }

    #[test]
    fn test_mock_file_path_stays_inside_output() {
        let path = mock_file_path(Path::new("out"), "/abs/../Vault.sol", "Fake");
        assert_eq!(path, Path::new("out/abs/FakeVault.sol"));
    }
}
