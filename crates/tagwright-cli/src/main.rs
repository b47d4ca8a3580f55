use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tagwright::{Body, Document, DocumentType, Head, Html, Link, Meta, Script, Title, H1};

#[derive(Debug, Parser)]
#[command(name = "tagwright", version, about = "Generate an HTML page skeleton")]
struct Args {
    /// Page title
    #[arg(short, long, default_value = "Untitled")]
    title: String,
    /// Language code for the html element
    #[arg(short, long, default_value = "en")]
    lang: String,
    /// Stylesheet href to link (repeatable)
    #[arg(long = "css", value_name = "HREF")]
    stylesheets: Vec<String>,
    /// Script src to include at the end of the body (repeatable)
    #[arg(long = "script", value_name = "SRC")]
    scripts: Vec<String>,
    /// Doctype flavor
    #[arg(short, long, value_enum, default_value_t = DoctypeArg::Html5)]
    doctype: DoctypeArg,
    /// Heading text for the page body (defaults to the title)
    #[arg(long)]
    heading: Option<String>,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DoctypeArg {
    Html5,
    HtmlStrict,
    HtmlTransitional,
    HtmlFrameset,
    XhtmlStrict,
    XhtmlTransitional,
    XhtmlFrameset,
}

impl From<DoctypeArg> for DocumentType {
    fn from(value: DoctypeArg) -> Self {
        match value {
            DoctypeArg::Html5 => Self::Html5,
            DoctypeArg::HtmlStrict => Self::HtmlStrict,
            DoctypeArg::HtmlTransitional => Self::HtmlTransitional,
            DoctypeArg::HtmlFrameset => Self::HtmlFrameset,
            DoctypeArg::XhtmlStrict => Self::XhtmlStrict,
            DoctypeArg::XhtmlTransitional => Self::XhtmlTransitional,
            DoctypeArg::XhtmlFrameset => Self::XhtmlFrameset,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .without_time()
        .init();

    let args = Args::parse();
    let page = build_page(&args);
    info!(bytes = page.len(), "page rendered");

    write_output(&args.output, page.as_bytes())
}

fn build_page(args: &Args) -> String {
    let mut head = Head::new()
        .child(Meta::new().charset("utf-8"))
        .child(Title::new().text(args.title.as_str()));
    for href in &args.stylesheets {
        head.append(Link::new().rel("stylesheet").href(href.as_str()));
    }

    let heading = args.heading.as_deref().unwrap_or(&args.title);
    let mut body = Body::new().child(H1::new().text(heading));
    for src in &args.scripts {
        body.append(Script::new().src(src.as_str()));
    }

    let root = Html::new().lang(args.lang.as_str()).child(head).child(body);
    Document::with_doctype(args.doctype.into(), root).render()
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            stdout
                .write_all(b"\n")
                .context("failed to write stdout")?;
            Ok(())
        }
    }
}
