mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use config::Config;
use refmark_core::{Library, Style};
use refmark_processor::io::{load_library, save_library};
use refmark_processor::render::append_reference_list;
use refmark_processor::{parse_author_list, CitationParser, PlaceholderResolver, PlainDocument};
use std::fs;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_from_project()?;

    let library_path = cli
        .library
        .unwrap_or_else(|| PathBuf::from(&config.library));

    let mut library = load_or_create(&library_path)?;

    match cli.command {
        Command::Add { text } => {
            let parser = CitationParser::default();
            let id = library.add(parser.parse(&text));
            save(&library_path, &library)?;
            println!("Added record {}", id);
        }

        Command::New => {
            let id = library.add_empty();
            save(&library_path, &library)?;
            println!("Added empty record {}", id);
        }

        Command::List { format } => match format {
            OutputFormat::Json => {
                let records: Vec<_> = library.iter().collect();
                println!("{}", serde_json::to_string_pretty(&records)?);
            }
            OutputFormat::Table => {
                use tabled::{settings::Style as TableStyle, Table, Tabled};

                #[derive(Tabled)]
                struct RecordRow {
                    #[tabled(rename = "ID")]
                    id: String,
                    #[tabled(rename = "Authors")]
                    authors: String,
                    #[tabled(rename = "Title")]
                    title: String,
                    #[tabled(rename = "Year")]
                    year: String,
                    #[tabled(rename = "DOI")]
                    doi: String,
                }

                let rows: Vec<RecordRow> = library
                    .iter()
                    .map(|record| RecordRow {
                        id: record.id.clone(),
                        authors: truncate(&record.author_summary(), 30),
                        title: truncate(&record.title, 45),
                        year: record.year.clone(),
                        doi: record.doi.clone(),
                    })
                    .collect();

                let mut table = Table::new(rows);
                table.with(TableStyle::modern());
                println!("{}", table);
            }
        },

        Command::Show { id } => {
            let record = library
                .get(&id)
                .with_context(|| format!("no record with id {}", id))?;
            println!("{}", serde_json::to_string_pretty(record)?);
        }

        Command::Update {
            id,
            title,
            authors,
            journal,
            volume,
            issue,
            pages,
            year,
            doi,
            url,
            raw_text,
        } => {
            let record = library
                .get_mut(&id)
                .with_context(|| format!("no record with id {}", id))?;

            if let Some(value) = title {
                record.title = value;
            }
            if let Some(value) = authors {
                record.authors = parse_author_list(&value);
            }
            if let Some(value) = journal {
                record.journal = value;
            }
            if let Some(value) = volume {
                record.volume = value;
            }
            if let Some(value) = issue {
                record.issue = value;
            }
            if let Some(value) = pages {
                record.pages = value;
            }
            if let Some(value) = year {
                record.year = value;
                if !record.has_valid_year() {
                    eprintln!("Warning: {:?} is not a four-digit year", record.year);
                }
            }
            if let Some(value) = doi {
                record.doi = value;
            }
            if let Some(value) = url {
                record.url = value;
            }
            if let Some(value) = raw_text {
                record.raw_text = value;
            }

            save(&library_path, &library)?;
            println!("Updated record {}", id);
        }

        Command::Delete { id } => {
            library
                .remove(&id)
                .with_context(|| format!("no record with id {}", id))?;
            save(&library_path, &library)?;
            println!("Deleted record {}", id);
        }

        Command::Attach { id, paths } => {
            let count = paths.len();
            let record = library
                .get_mut(&id)
                .with_context(|| format!("no record with id {}", id))?;
            for path in paths {
                record.attachments.push(path.display().to_string());
            }
            save(&library_path, &library)?;
            println!("Attached {} file(s) to {}", count, id);
        }

        Command::Process {
            path,
            style,
            output,
        } => {
            let style = match style {
                Some(style) => style,
                None => Style::from_name(&config.style)
                    .with_context(|| format!("unknown style {:?} in config", config.style))?,
            };

            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read document: {:?}", path))?;
            let mut document = PlainDocument::parse(&content);

            let resolver = PlaceholderResolver::default();
            let placeholders = resolver.resolve(&mut document, &library, style);
            append_reference_list(&mut document, &library, style, &placeholders);

            let out_path = output.unwrap_or_else(|| default_output_path(&path, style));
            fs::write(&out_path, format!("{}\n", document))
                .with_context(|| format!("failed to write document: {:?}", out_path))?;
            println!(
                "Processed {} citation(s) into {}",
                placeholders.len(),
                out_path.display()
            );
        }
    }

    Ok(())
}

fn load_or_create(path: &Path) -> Result<Library> {
    if !path.exists() {
        return Ok(Library::new());
    }
    load_library(path).with_context(|| format!("failed to load library: {:?}", path))
}

fn save(path: &Path, library: &Library) -> Result<()> {
    save_library(path, library).with_context(|| format!("failed to write library: {:?}", path))
}

fn default_output_path(input: &Path, style: Style) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    match input.extension().and_then(|s| s.to_str()) {
        Some(ext) => input.with_file_name(format!("{}_output_{}.{}", stem, style, ext)),
        None => input.with_file_name(format!("{}_output_{}", stem, style)),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
