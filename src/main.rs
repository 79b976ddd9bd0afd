//! Command-line front-end: build a design request, call the
//! generation service, print the detail summary, and write the
//! diagram and export files.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use homedraft::export;
use homedraft::rendering::{render_plan, svg::diagram_to_svg};
use homedraft::request::{REQUIREMENT_TAGS, STYLES};
use homedraft::{ClientConfig, DesignDetails, DesignRequest, GenerateClient};

#[derive(Parser, Debug)]
#[command(name = "homedraft", about = "Generate and export a floor plan design", version)]
struct Args {
    /// Base URL of the generation service
    #[arg(long, default_value = "http://localhost:8000")]
    endpoint: String,

    #[arg(long, default_value_t = 2)]
    bedrooms: u32,

    #[arg(long, default_value_t = 2)]
    bathrooms: u32,

    #[arg(long, default_value_t = 1)]
    additional_rooms: u32,

    /// House size in square feet
    #[arg(long, default_value_t = 2000)]
    house_size: u32,

    /// Architectural style (e.g. Modern, Traditional, Contemporary, Mediterranean)
    #[arg(long, default_value = "Modern")]
    style: String,

    /// Requirement tag; repeat for several (e.g. "Open Floor Plan")
    #[arg(long = "requirement")]
    requirements: Vec<String>,

    /// Directory the diagram and export files are written into
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// List the known styles and requirement tags, then exit
    #[arg(long)]
    list_options: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_options {
        println!("Styles: {}", STYLES.join(", "));
        println!("Requirement tags: {}", REQUIREMENT_TAGS.join(", "));
        return Ok(());
    }

    let mut builder = DesignRequest::builder()
        .bedrooms(args.bedrooms)
        .bathrooms(args.bathrooms)
        .additional_rooms(args.additional_rooms)
        .house_size(args.house_size)
        .style(&args.style);
    if !args.requirements.is_empty() {
        builder = builder.requirements(args.requirements.clone());
    }
    let request = builder.build();

    let config = ClientConfig {
        endpoint: args.endpoint.clone(),
        ..Default::default()
    };
    let client = GenerateClient::new(config.clone())?;
    let plan = client.generate(&request)?;

    let details = DesignDetails::from_request(&plan.request);
    println!("Total Area:  {} sq ft", details.total_area);
    println!("Bedrooms:    {}", details.bedrooms);
    println!("Total Rooms: {}", details.total_rooms);

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {:?}", args.out))?;

    let diagram = render_plan(&plan.rooms, config.canvas);
    let svg_path = args.out.join("floor_plan.svg");
    std::fs::write(&svg_path, diagram_to_svg(&diagram))
        .with_context(|| format!("writing {:?}", svg_path))?;

    for file in [export::json_export(&plan)?, export::csv_export(&plan)?] {
        let path = args.out.join(&file.file_name);
        std::fs::write(&path, &file.data).with_context(|| format!("writing {:?}", path))?;
        println!("Wrote {}", path.display());
    }
    println!("Wrote {}", svg_path.display());

    Ok(())
}
