//! Stencil CLI
//!
//! Converts a markup file and a stylesheet file into a design scene,
//! printed as a tree, dumped as JSON, or rendered to a PNG preview.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::env;
use std::fs;
use std::path::Path;
use stencil_dom::NodeId;
use stencil_markup::{parse_markup, print_tree};
use stencil_scene::{NodeKind, VisualNode};
use stencil_studio::{RasterHost, Renderer, generate_design};

/// Preview viewport dimensions; the scene is centered within them.
const VIEWPORT_WIDTH: u32 = 800;
const VIEWPORT_HEIGHT: u32 = 600;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!(
            "Usage: stencil <markup-file> <stylesheet-file> [--json] [--elements] [--png <out.png>]"
        );
        std::process::exit(1);
    }

    let markup = fs::read_to_string(&args[1])?;
    let stylesheet = fs::read_to_string(&args[2])?;

    let mut json = false;
    let mut elements = false;
    let mut png: Option<String> = None;
    let mut rest = args[3..].iter();
    while let Some(flag) = rest.next() {
        match flag.as_str() {
            "--json" => json = true,
            "--elements" => elements = true,
            "--png" => {
                let Some(path) = rest.next() else {
                    eprintln!("Error: --png requires an output path");
                    std::process::exit(1);
                };
                png = Some(path.clone());
            }
            other => {
                eprintln!("Error: unknown flag '{other}'");
                std::process::exit(1);
            }
        }
    }

    if elements {
        let tree = parse_markup(&markup);
        println!("{}", "=== Element Tree ===".bold());
        print_tree(&tree, NodeId::ROOT, 0);
        println!();
    }

    let mut host = RasterHost::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
    let scene = generate_design(&markup, &stylesheet, &mut host)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&scene)?);
    } else {
        println!("{}", "=== Scene ===".bold());
        print_scene(&scene, 0);
    }

    if let Some(path) = png {
        let mut renderer = Renderer::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
        renderer.render(&scene);
        renderer.save(Path::new(&path))?;
        println!("Preview written to {path}");
    }

    Ok(())
}

/// Print a scene tree, one node per line, children indented.
fn print_scene(node: &VisualNode, indent: usize) {
    let pad = "  ".repeat(indent);
    let geometry = format!(
        "({}, {}) {}x{}",
        node.x, node.y, node.width, node.height
    );

    match &node.kind {
        NodeKind::Container { .. } => {
            println!("{pad}{} {}", node.name.cyan().bold(), geometry.dimmed());
        }
        NodeKind::TextLeaf {
            characters,
            font_size,
            bold,
        } => {
            let weight = if *bold { " bold" } else { "" };
            println!(
                "{pad}{} {} {}",
                format!("\"{characters}\"").green(),
                format!("{font_size}px{weight}").yellow(),
                geometry.dimmed()
            );
        }
        NodeKind::RectanglePlaceholder => {
            println!("{pad}{} {}", node.name.magenta(), geometry.dimmed());
        }
    }

    for child in node.children() {
        print_scene(child, indent + 1);
    }
}
