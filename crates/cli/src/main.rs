use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use pulldown_cmark::{CodeBlockKind, Event, Parser as MarkdownParser, Tag, TagEnd};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::fs;
use std::io::Read;
use std::ops::Range;
use std::path::PathBuf;
use treefence_core::{
    parse_tree_block, render, OutputFormat, ParseMode, ParseOptions, RenderOptions,
};

/// Companion stylesheet injected with `--css`, scoped to the default root class
const TREE_CSS: &str = r#"<style>
.markdown-tree, .markdown-tree ul {
  list-style: none;
  margin: 0;
  padding-left: 1.25em;
  font-family: ui-monospace, monospace;
}
.markdown-tree summary {
  cursor: pointer;
}
</style>"#;

#[derive(Parser)]
#[command(name = "treefence")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert fenced tree blocks in Markdown into HTML, Mermaid, or plain text")]
#[command(long_about = "Reads a Markdown document, finds fenced code blocks whose info string is \
    exactly `tree`, parses the ASCII-art directory tree inside each one, and replaces the fence \
    with the rendered result:\n\n\
    - html: a collapsible nested list (no script required)\n\
    - mermaid: a `graph TD` diagram, re-fenced as a mermaid block\n\
    - text: normalized two-space indentation, re-fenced\n\
    - json: the typed node tree, re-fenced\n\n\
    Box-drawing connectors and plain space indentation may be mixed freely inside a block.")]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Markdown file to convert ("-" for stdin)
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output format for converted blocks
    #[arg(short, long, value_enum, default_value_t = FormatArg::Html)]
    format: FormatArg,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Error-handling mode for malformed tree blocks
    #[arg(long, value_enum, default_value_t = ModeArg::Tolerant)]
    mode: ModeArg,

    /// Spaces per tab when normalizing indentation
    #[arg(long, default_value_t = 2)]
    tab_width: usize,

    /// Spaces per nesting level
    #[arg(long, default_value_t = 2)]
    indent_width: usize,

    /// CSS class for the root element of HTML output
    #[arg(long)]
    root_class: Option<String>,

    /// Inject the companion stylesheet before the first converted block (HTML only)
    #[arg(long)]
    css: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a file containing a single tree block (no Markdown involved)
    Render {
        /// Tree block file ("-" for stdin)
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,
    },

    /// Strict-parse every tree block in a Markdown file and report errors
    Check {
        /// Markdown file to check ("-" for stdin)
        file: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Html,
    Mermaid,
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Mermaid => OutputFormat::Mermaid,
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Strict,
    Tolerant,
}

impl From<ModeArg> for ParseMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Strict => ParseMode::Strict,
            ModeArg::Tolerant => ParseMode::Tolerant,
        }
    }
}

/// A fenced `tree` block located in a Markdown document
struct TreeFence {
    /// Byte range of the whole fence in the source document
    range: Range<usize>,
    /// Text between the fence delimiters
    source: String,
    /// 1-based line of the opening fence
    start_line: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    match &args.command {
        Some(Commands::Render { file, format }) => run_render(file, *format, &args),
        Some(Commands::Check { file }) => run_check(file, &args),
        None => run_convert(&args),
    }
}

fn run_convert(args: &Args) -> anyhow::Result<()> {
    let markdown = read_input(&args.input)?;
    let parse_options = parse_options(args);
    let render_options = RenderOptions {
        root_class: args
            .root_class
            .clone()
            .or_else(|| args.css.then(|| "markdown-tree".to_string())),
    };
    let inject_css = args.css && matches!(args.format, FormatArg::Html);

    let converted = convert_markdown(
        &markdown,
        args.format.into(),
        &parse_options,
        &render_options,
        inject_css,
    )?;
    write_output(args.output.as_deref(), &converted)
}

fn run_render(file: &PathBuf, format: FormatArg, args: &Args) -> anyhow::Result<()> {
    let source = read_input(file)?;
    let nodes = parse_tree_block(&source, &parse_options(args))?;
    let render_options = RenderOptions {
        root_class: args.root_class.clone(),
    };
    let rendered = render(&nodes, format.into(), &render_options)?;
    write_output(args.output.as_deref(), &rendered)
}

fn run_check(file: &PathBuf, args: &Args) -> anyhow::Result<()> {
    let markdown = read_input(file)?;
    let options = parse_options(args).with_mode(ParseMode::Strict);
    let fences = find_tree_fences(&markdown);
    if fences.is_empty() {
        log::warn!("no tree blocks found");
        return Ok(());
    }

    let mut failures = 0;
    for fence in &fences {
        match parse_tree_block(&fence.source, &options) {
            Ok(nodes) => {
                let count: usize = nodes.iter().map(|n| n.count()).sum();
                println!("ok: block at line {} ({} nodes)", fence.start_line, count);
            }
            Err(err) => {
                failures += 1;
                println!("error: block at line {}: {}", fence.start_line, err);
            }
        }
    }
    if failures > 0 {
        bail!(
            "{failures} of {} tree blocks failed strict parsing",
            fences.len()
        );
    }
    Ok(())
}

fn parse_options(args: &Args) -> ParseOptions {
    ParseOptions::new()
        .with_mode(args.mode.into())
        .with_tab_width(args.tab_width)
        .with_indent_width(args.indent_width)
}

/// Replace every fenced `tree` block with its rendering.
///
/// HTML replaces the fence with a raw HTML block; the other formats are
/// re-fenced with the matching info string so downstream Markdown tooling
/// still sees a code block.
fn convert_markdown(
    markdown: &str,
    format: OutputFormat,
    parse_options: &ParseOptions,
    render_options: &RenderOptions,
    inject_css: bool,
) -> anyhow::Result<String> {
    let fences = find_tree_fences(markdown);
    let mut out = String::with_capacity(markdown.len());
    let mut cursor = 0;
    let mut first = true;

    for fence in fences {
        let nodes = parse_tree_block(&fence.source, parse_options)
            .with_context(|| format!("tree block starting at line {}", fence.start_line))?;
        let rendered = render(&nodes, format, render_options)?;

        out.push_str(&markdown[cursor..fence.range.start]);
        if first && inject_css {
            out.push_str(TREE_CSS);
            out.push('\n');
        }
        first = false;
        out.push_str(wrap_replacement(&rendered, format).trim_end());
        if markdown[fence.range.clone()].ends_with('\n') {
            out.push('\n');
        }
        cursor = fence.range.end;
    }
    out.push_str(&markdown[cursor..]);
    Ok(out)
}

fn wrap_replacement(rendered: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Html => rendered.to_string(),
        OutputFormat::Mermaid | OutputFormat::Text | OutputFormat::Json => {
            format!("```{}\n{}\n```", format.as_str(), rendered.trim_end())
        }
    }
}

/// Locate fenced code blocks whose info string is exactly `tree`
fn find_tree_fences(markdown: &str) -> Vec<TreeFence> {
    let mut fences = Vec::new();
    let mut current: Option<TreeFence> = None;

    for (event, range) in MarkdownParser::new(markdown).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) if info.trim() == "tree" => {
                current = Some(TreeFence {
                    start_line: line_of_offset(markdown, range.start),
                    range,
                    source: String::new(),
                });
            }
            Event::Text(text) => {
                if let Some(fence) = current.as_mut() {
                    fence.source.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(fence) = current.take() {
                    fences.push(fence);
                }
            }
            _ => {}
        }
    }
    fences
}

fn line_of_offset(text: &str, offset: usize) -> usize {
    text[..offset].bytes().filter(|b| *b == b'\n').count() + 1
}

fn read_input(path: &PathBuf) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn write_output(path: Option<&std::path::Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?
        }
        None => println!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "# Layout\n\n```tree\nsrc/\n├─ app/\n│  └─ page.tsx\n```\n\n```rust\nfn main() {}\n```\n";

    #[test]
    fn test_find_tree_fences_ignores_other_languages() {
        let fences = find_tree_fences(DOC);
        assert_eq!(fences.len(), 1);
        assert_eq!(fences[0].start_line, 3);
        assert!(fences[0].source.contains("page.tsx"));
    }

    #[test]
    fn test_convert_replaces_only_tree_fence() {
        let converted = convert_markdown(
            DOC,
            OutputFormat::Html,
            &ParseOptions::default(),
            &RenderOptions::default(),
            false,
        )
        .unwrap();
        assert!(converted.contains("<summary>src</summary>"));
        assert!(!converted.contains("```tree"));
        assert!(converted.contains("```rust\nfn main() {}\n```"));
        assert!(converted.starts_with("# Layout"));
    }

    #[test]
    fn test_convert_refences_mermaid() {
        let converted = convert_markdown(
            DOC,
            OutputFormat::Mermaid,
            &ParseOptions::default(),
            &RenderOptions::default(),
            false,
        )
        .unwrap();
        assert!(converted.contains("```mermaid\ngraph TD"));
        assert!(converted.contains("n0 --> n1"));
    }

    #[test]
    fn test_css_injected_once_before_first_block() {
        let doc = "```tree\na/\n```\n\n```tree\nb/\n```\n";
        let converted = convert_markdown(
            doc,
            OutputFormat::Html,
            &ParseOptions::default(),
            &RenderOptions::default(),
            true,
        )
        .unwrap();
        assert_eq!(converted.matches("<style>").count(), 1);
        assert!(
            converted.find("<style>").unwrap() < converted.find("<summary>a</summary>").unwrap()
        );
    }

    #[test]
    fn test_strict_error_carries_block_position() {
        let doc = "intro\n\n```tree\nsrc/\n\t  app/\n```\n";
        let err = convert_markdown(
            doc,
            OutputFormat::Html,
            &ParseOptions::new().with_mode(ParseMode::Strict),
            &RenderOptions::default(),
            false,
        )
        .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("tree block starting at line 3"));
        assert!(message.contains("Line 2"));
    }

    #[test]
    fn test_no_fences_passes_document_through() {
        let doc = "just prose\n";
        let converted = convert_markdown(
            doc,
            OutputFormat::Html,
            &ParseOptions::default(),
            &RenderOptions::default(),
            false,
        )
        .unwrap();
        assert_eq!(converted, doc);
    }
}
