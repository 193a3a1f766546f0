//! Command parsing and output
//!
//! Usage:
//!   osu-query score <filters>          Score filters for a mode
//!   osu-query beatmap <filters>        Beatmap filters
//!   osu-query beatmapset <filters>     Beatmap set filters
//!   osu-query mods <modstring>         Mod filter (!HDDT, +HD-NF)
//!   osu-query sort <acronym>...        Sort mods into canonical order
//!   osu-query users <ids>              Restrict scores to users
//!
//! Options:
//!   --mode <mode>      osu, taiko, fruits, mania or 0-3
//!   --json             Output in JSON format
//!   --verbose          Debug logging on stderr

use osu_query_core::config::Config;
use osu_query_core::filter::{
    parse_beatmap_filters, parse_beatmapset_filters, parse_mod_filters, parse_score_filters,
    parse_user_filters, ModConstraint, ModFilterExpr, Predicate,
};
use osu_query_core::{resolve_mode, sort_mods, GameMode};

/// CLI command to execute
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Score { filters: String },
    Beatmap { filters: String },
    BeatmapSet { filters: String },
    Mods { modstring: String },
    Sort { acronyms: Vec<String> },
    Users { ids: Vec<i64> },
}

/// CLI options
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    pub mode: Option<String>,
    pub json: bool,
    pub verbose: bool,
}

/// Parse CLI arguments and return command + options
pub fn parse_args(args: &[String]) -> Result<(CliCommand, CliOptions), String> {
    let mut options = CliOptions::default();
    let mut command: Option<&str> = None;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "--json" => options.json = true,
            "--verbose" | "-v" => options.verbose = true,
            "--mode" => {
                i += 1;
                if i >= args.len() {
                    return Err("--mode requires a value".to_string());
                }
                options.mode = Some(args[i].clone());
            }
            "score" | "beatmap" | "beatmapset" | "mods" | "sort" | "users" if command.is_none() => {
                command = Some(arg.as_str());
            }
            _ => {
                // Mod filters start with '-', so anything after the command is an argument
                if command.is_none() {
                    return Err(format!("Unknown command: {}", arg));
                }
                positional.push(arg.clone());
            }
        }
        i += 1;
    }

    let command = match command {
        Some("score") => CliCommand::Score {
            filters: positional.join(" "),
        },
        Some("beatmap") => CliCommand::Beatmap {
            filters: positional.join(" "),
        },
        Some("beatmapset") => CliCommand::BeatmapSet {
            filters: positional.join(" "),
        },
        Some("mods") => CliCommand::Mods {
            modstring: positional.join(""),
        },
        Some("sort") => CliCommand::Sort {
            acronyms: positional
                .iter()
                .flat_map(|a| a.split(','))
                .filter(|a| !a.is_empty())
                .map(|a| a.to_uppercase())
                .collect(),
        },
        Some("users") => CliCommand::Users {
            ids: parse_user_ids(&positional.join(","))?,
        },
        _ => {
            return Err(
                "No command specified. Use: score, beatmap, beatmapset, mods, sort, or users"
                    .to_string(),
            )
        }
    };

    Ok((command, options))
}

fn parse_user_ids(s: &str) -> Result<Vec<i64>, String> {
    s.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| id.parse().map_err(|_| format!("Invalid user ID: {}", id)))
        .collect()
}

/// Run CLI command
pub fn run(command: CliCommand, options: CliOptions) -> anyhow::Result<()> {
    let config = Config::load();
    let mode = match options.mode.as_deref() {
        Some(mode) => resolve_mode(mode)?,
        None => config.default_mode,
    };
    let json = options.json || config.json;

    tracing::debug!(%mode, json, ?command, "running command");

    match command {
        CliCommand::Score { filters } => {
            print_predicates(&parse_score_filters(mode, Some(filters.as_str()))?, json)
        }
        CliCommand::Beatmap { filters } => {
            print_predicates(&parse_beatmap_filters(Some(filters.as_str()))?, json)
        }
        CliCommand::BeatmapSet { filters } => {
            print_predicates(&parse_beatmapset_filters(Some(filters.as_str()))?, json)
        }
        CliCommand::Users { ids } => print_predicates(&parse_user_filters(mode, &ids)?, json),
        CliCommand::Mods { modstring } => {
            print_mod_filter(&parse_mod_filters(mode, Some(modstring.as_str()))?, json)
        }
        CliCommand::Sort { acronyms } => print_sorted(mode, &sort_mods(mode, &acronyms)?, json),
    }
}

fn print_predicates(predicates: &[Predicate], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(predicates)?);
        return Ok(());
    }

    if predicates.is_empty() {
        println!("No filters");
    }
    for predicate in predicates {
        println!("{}", predicate);
    }
    Ok(())
}

fn print_mod_filter(expr: &ModFilterExpr, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(expr)?);
        return Ok(());
    }

    match expr {
        ModFilterExpr::Exact(_) => {
            println!(
                "enabled_mods = \"{}\"",
                expr.exact_string().unwrap_or_default()
            );
        }
        ModFilterExpr::Constraints(constraints) if constraints.is_empty() => {
            println!("No filters");
        }
        ModFilterExpr::Constraints(constraints) => {
            for constraint in constraints {
                match constraint {
                    ModConstraint::Include(acronym) => {
                        println!("enabled_mods contains {}", acronym)
                    }
                    ModConstraint::Exclude(acronym) => {
                        println!("enabled_mods does not contain {}", acronym)
                    }
                }
            }
        }
    }
    Ok(())
}

fn print_sorted(mode: GameMode, sorted: &[String], json: bool) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "mode": mode,
                "mods": sorted,
                "mod_string": sorted.join(" "),
            })
        );
    } else {
        println!("{}: {}", mode.display_name(), sorted.join(" "));
    }
    Ok(())
}

/// Print CLI help
pub fn print_help() {
    println!("osu-query v{}", env!("CARGO_PKG_VERSION"));
    println!("Turn osu! score and beatmap filter strings into predicates");
    println!();
    println!("USAGE:");
    println!("    osu-query <command> [options]");
    println!();
    println!("COMMANDS:");
    println!("    score <filters>             Score filters (pp>100 rank/XHSH)");
    println!("    beatmap <filters>           Beatmap filters (stars>5 ar<=9)");
    println!("    beatmapset <filters>        Beatmap set filters (tags/miku,vocaloid)");
    println!("    mods <modstring>            Mod filter (!HDDT or +HD-NF)");
    println!("    sort <acronym>...           Sort mods into canonical order");
    println!("    users <ids>                 Comma-separated user IDs");
    println!();
    println!("OPTIONS:");
    println!("    --mode <mode>               osu, taiko, fruits, mania or 0-3");
    println!("    --json                      Output in JSON format");
    println!("    --verbose, -v               Debug logging on stderr");
    println!("    --help                      Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    osu-query score \"date<2010-12-12 pp>100 replay=1\"");
    println!("    osu-query --mode mania score count_miss=0");
    println!("    osu-query mods +HD -NF --json");
    println!("    osu-query sort HD DT HR");
}
