use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use legalyze_core::utils::{format_date, format_optional, preview};

use super::output::print_json;
use super::Context;

/// Width of the content preview column
const PREVIEW_WIDTH: usize = 60;

/// Where the text to analyze comes from
#[derive(Debug)]
pub enum Input {
    Text(String),
    File(PathBuf),
    Stdin,
}

impl Input {
    fn read(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display())),
            Input::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }
}

#[derive(Debug)]
pub struct UploadArgs {
    pub file: PathBuf,
    pub title: Option<String>,
}

pub async fn analyze(ctx: &Context, input: Input) -> Result<()> {
    let text = input.read()?;
    let analysis = ctx.client.analyze_text(&text).await?;
    if ctx.json {
        return print_json(&analysis);
    }
    println!("{}", analysis.result);
    Ok(())
}

pub async fn upload(ctx: &Context, args: UploadArgs) -> Result<()> {
    let document = ctx
        .client
        .upload_document(&args.file, args.title.as_deref())
        .await?;
    if ctx.json {
        return print_json(&document);
    }
    println!("Uploaded \"{}\" (id {})", document.title, document.id);
    Ok(())
}

pub async fn documents(ctx: &Context, id: Option<i64>) -> Result<()> {
    if let Some(id) = id {
        let document = ctx.client.document(id).await?;
        if ctx.json {
            return print_json(&document);
        }
        println!("{} ({})", document.title, document.status_display());
        println!();
        println!("{}", format_optional(document.content.as_deref(), "(no content)"));
        return Ok(());
    }

    let documents = ctx.client.documents().await?;
    if ctx.json {
        return print_json(&documents);
    }
    if documents.is_empty() {
        println!("No documents uploaded yet");
        return Ok(());
    }
    println!("{:>6}  {:<20}  {:<10}  TITLE", "ID", "UPLOADED", "STATUS");
    for document in &documents {
        println!(
            "{:>6}  {:<20}  {:<10}  {}",
            document.id,
            document.upload_date.as_deref().map(format_date).unwrap_or_default(),
            document.status_display(),
            preview(&document.title, PREVIEW_WIDTH)
        );
    }
    Ok(())
}

pub async fn history(ctx: &Context, limit: usize) -> Result<()> {
    let mut records = ctx.client.analysis_history().await?;
    records.truncate(limit);
    if ctx.json {
        return print_json(&records);
    }
    if records.is_empty() {
        println!("No analyses yet");
        return Ok(());
    }
    for record in &records {
        println!(
            "#{} {}",
            record.id,
            record.created_at.as_deref().map(format_date).unwrap_or_default()
        );
        println!("  text:   {}", preview(&record.content, PREVIEW_WIDTH));
        println!("  result: {}", preview(&record.analysis_result, PREVIEW_WIDTH));
    }
    Ok(())
}
