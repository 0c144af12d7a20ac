// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::{
    config::{
        consts::EMPTY_TIER_TEXT,
        options::{self, SheetSource},
    },
    csv::Delim,
    file, loader,
    tiers::{self, export, Tier, TierMapping},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Delimited(Delim),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub sheet: Option<SheetSource>,  // --sheet / --file override
    pub query: String,               // --search
    pub tier: Option<Tier>,          // --tier
    pub format: OutputFormat,
    pub out: Option<PathBuf>,
    pub help: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            sheet: None,
            query: s!(),
            tier: None,
            format: OutputFormat::Text,
            out: None,
            help: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(env::args().skip(1))?;
    if params.help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }

    let source = options::resolve_source(params.sheet.clone());
    let text = loader::load(&source).map_err(|e| {
        loge!("Load: Error {}: {}", source.describe(), e);
        e.user_message()
    })?;
    let tiers = tiers::parse(&text);
    logf!("Parse: players={}", tiers.len());

    let output = render(&tiers, &params);
    match &params.out {
        Some(path) => {
            let written = file::write_text(path, &output)?;
            println!("Wrote {}", written.display());
        }
        None => print!("{output}"),
    }
    Ok(())
}

/// Apply search + tier selection, then format.
pub fn render(tiers: &TierMapping, params: &Params) -> String {
    let visible = tiers::filter(tiers, &params.query);
    let selected = match params.tier {
        Some(t) => visible.only(t),
        None => visible.into_owned(),
    };
    match params.format {
        OutputFormat::Text => render_text(&selected, params.tier),
        OutputFormat::Delimited(delim) => export::to_string(&selected, delim),
    }
}

/// "Tier N (count)" headings with indented names; `only` limits to one tier.
pub fn render_text(tiers: &TierMapping, only: Option<Tier>) -> String {
    let mut out = s!();
    for (tier, players) in tiers.iter() {
        if only.is_some_and(|t| t != tier) { continue; }
        if !out.is_empty() { out.push('\n'); }
        out.push_str(&format!("{} ({})\n", tier, players.len()));
        if players.is_empty() {
            out.push_str(&join!("  ", EMPTY_TIER_TEXT, "\n"));
        }
        for p in players {
            match p.region() {
                Some(r) => out.push_str(&format!("  {} ({})\n", p.name(), r)),
                None => out.push_str(&format!("  {}\n", p.name())),
            }
        }
    }
    out
}

pub fn parse_args<I>(args: I) -> Result<Params, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--sheet" => {
                let v = args.next().ok_or("Missing value for --sheet")?;
                params.sheet = Some(SheetSource::from_location(&v));
            }
            "--file" => {
                let v = args.next().ok_or("Missing value for --file")?;
                params.sheet = Some(SheetSource::Local(PathBuf::from(v)));
            }
            "-s" | "--search" => params.query = args.next().ok_or("Missing value for --search")?,
            "--tier" => {
                let v: u32 = args.next().ok_or("Missing value for --tier")?.trim().parse()?;
                params.tier = Some(Tier::new(v).ok_or("Tier out of range (1..5)")?);
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "text" => OutputFormat::Text,
                    "csv" => OutputFormat::Delimited(Delim::Csv),
                    "tsv" => OutputFormat::Delimited(Delim::Tsv),
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| s!(*a)).collect()
    }

    #[test]
    fn flags_parse() {
        let p = parse_args(args(&["--file", "t.csv", "-s", "ca", "--tier", "2", "--format", "TSV"])).unwrap();
        assert_eq!(p.sheet, Some(SheetSource::Local(PathBuf::from("t.csv"))));
        assert_eq!(p.query, "ca");
        assert_eq!(p.tier, Tier::new(2));
        assert_eq!(p.format, OutputFormat::Delimited(Delim::Tsv));
    }

    #[test]
    fn bad_flags_are_errors() {
        assert!(parse_args(args(&["--tier", "6"])).is_err());
        assert!(parse_args(args(&["--format", "json"])).is_err());
        assert!(parse_args(args(&["--sheet"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
    }
}
