use yunmu::check;
use yunmu::finals;

use std::fs;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, anyhow, bail};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "yunmu")]
#[command(version = "0.1.0")]
#[command(about = "Restores written pinyin finals to their phonemic form", long_about = None)]
struct Cli {
    /// Input file with whitespace-separated written finals, or - for stdin
    input_file: PathBuf,

    /// Output file, stdout if omitted
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Report finals containing unrecognized characters and fail if any are found
    #[arg(long)]
    check: bool,

    /// Write run statistics to this .json file
    #[arg(long)]
    stats: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
struct RunStats {
    #[serde(default)]
    num_lines: u32,
    #[serde(default)]
    num_finals: u32,
    #[serde(default)]
    num_rewritten: u32,
    #[serde(default)]
    num_check_errors: u32,
}

fn read_input(cli: &Cli) -> anyhow::Result<String> {
    if cli.input_file.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(&cli.input_file).context(format!(
            "Could not open input file {}",
            cli.input_file.display()
        ))
    }
}

fn restore_lines(text: &str, writer: &mut impl Write, stats: &mut RunStats) -> io::Result<()> {
    for line in text.lines() {
        stats.num_lines += 1;
        let restored: Vec<String> = line
            .split_whitespace()
            .map(|written| {
                stats.num_finals += 1;
                let restored = finals::restore_final(written);
                if restored != written {
                    stats.num_rewritten += 1;
                }
                restored
            })
            .collect();
        writeln!(writer, "{}", restored.join(" "))?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut status_ok = true;
    let mut stats = RunStats::default();

    let text = read_input(&cli)?;

    if cli.check {
        let errors = check::check_finals(text.lines());
        stats.num_check_errors = u32::try_from(errors.len()).unwrap_or(u32::MAX);
        if !errors.is_empty() {
            status_ok = false;
        }
        for err in &errors {
            eprintln!("{err}");
        }
    }

    if let Some(path_out) = &cli.out {
        if *path_out == cli.input_file {
            bail!("Input file and output file must be different");
        }
        let file_out = File::create(path_out).context(format!(
            "Could not create output file {}",
            path_out.display()
        ))?;
        let mut writer_out = BufWriter::new(file_out);
        restore_lines(&text, &mut writer_out, &mut stats)?;
    } else {
        let stdout = io::stdout();
        let mut writer_out = stdout.lock();
        restore_lines(&text, &mut writer_out, &mut stats)?;
    }

    if let Some(stats_path) = &cli.stats {
        let s = serde_json::to_string_pretty(&stats)?;
        fs::write(stats_path, s)?;
    }

    if status_ok {
        Ok(())
    } else {
        Err(anyhow!("Failure!"))
    }
}
