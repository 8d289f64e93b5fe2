//! CLI entrypoint.

use std::error::Error;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::process;

use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use syntaxgen_model::EntityNode;
use syntaxgen_render::{
	Language, LanguageOutput, ReferenceResolver, RenderFormat, Renderer, ShortNameResolver, Style,
	SyntaxBlock, SyntaxElement,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Parsed command-line options for the syntaxgen CLI.
struct Cli {
	/// Entity JSON file, or `-` to read standard input. Holds one entity or an array of them.
	#[arg(default_value = "-")]
	input: String,

	/// Comma-separated list of languages to render (csharp, vb, xaml, jscript). Defaults to all.
	#[arg(
		short = 'l',
		long = "lang",
		value_delimiter = ',',
		value_name = "LANG[,LANG...]",
		value_parser = parse_language
	)]
	languages: Vec<Language>,

	/// Column past which parameter and base lists wrap
	#[arg(short = 'w', long = "wrap", value_name = "COLUMN")]
	wrap_column: Option<usize>,

	/// Select the output format (`plain` or `markup`)
	#[arg(long = "format", value_enum, default_value = "plain")]
	format: OutputFormat,

	/// Colorize plain output
	#[arg(long = "color", value_enum, default_value = "auto")]
	color: ColorChoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
/// Output formats the CLI can emit.
enum OutputFormat {
	/// Declaration text (default).
	Plain,
	/// Documentation pipeline markup.
	Markup,
}

impl From<OutputFormat> for RenderFormat {
	fn from(format: OutputFormat) -> Self {
		match format {
			OutputFormat::Plain => RenderFormat::Plain,
			OutputFormat::Markup => RenderFormat::Markup,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
/// When plain output is colorized.
enum ColorChoice {
	/// Only when stdout is a terminal.
	Auto,
	/// Always.
	Always,
	/// Never.
	Never,
}

impl ColorChoice {
	fn enabled(self) -> bool {
		match self {
			Self::Auto => io::stdout().is_terminal(),
			Self::Always => true,
			Self::Never => false,
		}
	}
}

fn parse_language(value: &str) -> Result<Language, String> {
	value.parse().map_err(|e| format!("{e}"))
}

/// Install the stderr log subscriber. `SYNTAXGEN_LOG` wins over `RUST_LOG`.
fn init_logging() {
	let filter = EnvFilter::try_from_env("SYNTAXGEN_LOG")
		.or_else(|_| EnvFilter::try_from_default_env())
		.unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();
}

/// Read the input document and decode one entity or an array of them.
fn load_entities(input: &str) -> Result<Vec<EntityNode>, Box<dyn Error>> {
	let text = if input == "-" {
		let mut buffer = String::new();
		io::stdin().read_to_string(&mut buffer)?;
		buffer
	} else {
		fs::read_to_string(input).map_err(|e| format!("failed to read {input}: {e}"))?
	};

	parse_entities(&text)
}

/// One entity object, or an array of them.
fn parse_entities(text: &str) -> Result<Vec<EntityNode>, Box<dyn Error>> {
	let document: serde_json::Value = serde_json::from_str(text)?;
	let entities: Vec<EntityNode> = match document {
		serde_json::Value::Array(_) => serde_json::from_value(document)?,
		_ => vec![serde_json::from_value(document)?],
	};
	debug!(count = entities.len(), "loaded entities");
	Ok(entities)
}

/// Plain text with each run colored by its style.
fn colorize(block: &SyntaxBlock, resolver: &dyn ReferenceResolver) -> String {
	let mut output = String::new();
	colorize_elements(&block.elements, resolver, &mut output);
	output
}

fn colorize_elements(
	elements: &[SyntaxElement],
	resolver: &dyn ReferenceResolver,
	output: &mut String,
) {
	for element in elements {
		match element {
			SyntaxElement::Text { text, style } => {
				let colored = match style {
					Style::Plain => text.to_string(),
					Style::Keyword => text.blue().to_string(),
					Style::Parameter => text.italic().to_string(),
					Style::Identifier => text.bold().to_string(),
					Style::Literal => text.green().to_string(),
				};
				output.push_str(&colored);
			}
			SyntaxElement::LineBreak => output.push('\n'),
			SyntaxElement::Reference { target, text } => {
				let display = text.clone().unwrap_or_else(|| resolver.resolve(target));
				output.push_str(&display.cyan().to_string());
			}
			SyntaxElement::Message { key, params } => {
				let message = if params.is_empty() {
					key.clone()
				} else {
					format!("{key}({})", params.join(", "))
				};
				output.push_str(&message.yellow().to_string());
			}
			SyntaxElement::SubBlock { elements, .. } => {
				colorize_elements(elements, resolver, output)
			}
		}
	}
}

/// Print one entity's outputs. Returns whether any language failed.
fn print_outputs(entity: &EntityNode, outputs: &[LanguageOutput], cli: &Cli, color: bool) -> bool {
	let mut failed = false;
	for output in outputs {
		let block = match &output.result {
			Ok(block) => block,
			Err(e) => {
				let line = format!("{} {}: {e}", output.language, entity.id);
				if color {
					eprintln!("{}", line.red());
				} else {
					eprintln!("{line}");
				}
				failed = true;
				continue;
			}
		};
		if block.is_empty() {
			continue;
		}

		match cli.format {
			OutputFormat::Markup => println!("{}", block.to_markup()),
			OutputFormat::Plain if color => {
				println!("{}", output.language.dimmed());
				println!("{}\n", colorize(block, &ShortNameResolver));
			}
			OutputFormat::Plain => {
				println!("{}", output.language);
				println!("{}\n", block.to_plain_text(&ShortNameResolver));
			}
		}
	}
	failed
}

/// Render every entity in the input and stream it to stdout.
fn run_cmdline(cli: &Cli) -> Result<(), Box<dyn Error>> {
	let mut renderer = Renderer::new().with_format(cli.format.into());
	if !cli.languages.is_empty() {
		renderer = renderer.with_languages(cli.languages.iter().copied());
	}
	if let Some(wrap_column) = cli.wrap_column {
		renderer = renderer.with_wrap_column(wrap_column);
	}

	let entities = load_entities(&cli.input)?;
	if entities.is_empty() {
		println!("No entities found.");
		return Ok(());
	}

	let color = cli.format == OutputFormat::Plain && cli.color.enabled();
	let mut failures = 0;
	for entity in &entities {
		debug!(id = %entity.id, "rendering entity");
		let outputs = renderer.render(entity);
		if print_outputs(entity, &outputs, cli, color) {
			failures += 1;
		}
	}

	if failures > 0 {
		return Err(format!("{failures} of {} entities failed to render", entities.len()).into());
	}
	Ok(())
}

fn main() {
	let cli = Cli::parse();
	init_logging();

	if let Err(e) = run_cmdline(&cli) {
		eprintln!("{e}");
		process::exit(1);
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	const BUTTON: &str = r#"{ "id": "T:Widgets.Button", "kind": { "type": "class" }, "name": "Button" }"#;

	#[test]
	fn single_object_is_one_entity() {
		let entities = parse_entities(BUTTON).unwrap();
		assert_eq!(entities.len(), 1);
		assert_eq!(entities[0].name, "Button");
	}

	#[test]
	fn array_keeps_input_order() {
		let text = format!(
			r#"[{BUTTON}, {{ "id": "T:Widgets.Label", "kind": {{ "type": "class" }}, "name": "Label" }}]"#
		);
		let names: Vec<String> = parse_entities(&text)
			.unwrap()
			.into_iter()
			.map(|entity| entity.name)
			.collect();
		assert_eq!(names, vec!["Button", "Label"]);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(parse_entities("{ \"id\": ").is_err());
	}
}
