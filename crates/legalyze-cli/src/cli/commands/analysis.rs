use clap::{value_parser, Arg, Command};
use std::path::PathBuf;

#[must_use]
pub fn subcommands() -> Vec<Command> {
    vec![
        Command::new("analyze")
            .about("Analyze contract text (argument, --file or stdin)")
            .arg(Arg::new("text").help("Text to analyze").conflicts_with("file"))
            .arg(
                Arg::new("file")
                    .short('f')
                    .long("file")
                    .help("Read the text from a file")
                    .value_parser(value_parser!(PathBuf)),
            ),
        Command::new("upload")
            .about("Upload a document")
            .arg(
                Arg::new("file")
                    .required(true)
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("title")
                    .short('t')
                    .long("title")
                    .help("Document title (defaults to the file name)"),
            ),
        Command::new("documents")
            .about("List uploaded documents, or show one")
            .arg(
                Arg::new("id")
                    .help("Document to show")
                    .value_parser(value_parser!(i64)),
            ),
        Command::new("history")
            .about("Show past analyses")
            .arg(
                Arg::new("limit")
                    .short('n')
                    .long("limit")
                    .default_value("20")
                    .value_parser(value_parser!(usize)),
            ),
    ]
}
