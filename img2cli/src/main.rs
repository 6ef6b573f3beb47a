use clap::{ArgGroup, Parser, ValueEnum};
use img2c::color::ColorTable;
use img2c::encode::save_png;
use img2c::error::Error;
use img2c::maps::{self, CharMap};
use img2c::pipeline::{AsciiPipeline, Conversion};
use img2c::image::Rgba;
use img2c::render::RenderStyle;
use img2c::sampler::CellSize;
use img2c::source::ImageSource;
use std::path::PathBuf;

/// Command line arguments structure.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["image_path", "image_url"])))]
struct Args {
    /// Path of the picture file
    #[arg(long)]
    image_path: Option<PathBuf>,
    /// Url of the picture file
    #[arg(long)]
    image_url: Option<String>,
    /// Chars used to draw the ascii art, brightest cells first
    #[arg(short, long, default_value = maps::DEFAULT, conflicts_with = "char_map")]
    characters: String,
    /// Use a built-in char table instead of --characters
    #[arg(long, value_enum)]
    char_map: Option<Preset>,
    /// Width in pixels of the area behind each char
    #[arg(long, default_value_t = 10)]
    sub_width: u32,
    /// Height in pixels of the area behind each char
    #[arg(long, default_value_t = 10)]
    sub_height: u32,
    /// Also draw the ascii art into a PNG file
    #[arg(long, default_value_t = false, requires = "image_out_path")]
    image_out: bool,
    /// Where to write the PNG when --image-out is set
    #[arg(long)]
    image_out_path: Option<PathBuf>,
    /// Background color of the PNG (black|gray|red|green|blue)
    #[arg(long, default_value = "black")]
    bg: String,
    /// Ink color of the PNG (black|gray|red|green|blue)
    #[arg(long, default_value = "gray")]
    color: String,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[clap(rename_all = "kebab-case")]
enum Preset {
    Default,
    Classic,
    Detailed,
    Gradient,
    BlackWhite,
}

impl From<Preset> for CharMap {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Default => CharMap::Default,
            Preset::Classic => CharMap::Classic,
            Preset::Detailed => CharMap::Detailed,
            Preset::Gradient => CharMap::Gradient,
            Preset::BlackWhite => CharMap::BlackWhite,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Error> {
    let colors = ColorTable::default();
    let pipeline = pipeline_from_args(&args, &colors);
    // bad settings must fail before anything is opened or fetched
    pipeline.validate()?;

    let source = match (&args.image_path, &args.image_url) {
        (Some(path), _) => ImageSource::Path(path.clone()),
        (None, Some(url)) => ImageSource::Url(url.clone()),
        (None, None) => {
            return Err(Error::Configuration(
                "one of --image-path or --image-url is required".to_string(),
            ));
        }
    };

    let Conversion { ascii, image } = pipeline.convert(source.open()?)?;
    if let (Some(img), Some(path)) = (image, &args.image_out_path) {
        save_png(&img, path)?;
        log::info!("wrote {}", path.display());
    }

    print!("{ascii}");
    Ok(())
}

fn pipeline_from_args(args: &Args, colors: &ColorTable) -> AsciiPipeline {
    let char_map = args
        .char_map
        .map_or_else(|| CharMap::custom(&args.characters), CharMap::from);
    let style = args.image_out.then(|| RenderStyle {
        background: resolve_color(colors, "--bg", &args.bg),
        ink: resolve_color(colors, "--color", &args.color),
    });
    AsciiPipeline::new(char_map, CellSize::new(args.sub_width, args.sub_height), style)
}

/// Unknown names still resolve (to transparent), but are worth a warning.
fn resolve_color(colors: &ColorTable, flag: &str, name: &str) -> Rgba<u8> {
    let names = colors.names();
    if !names.contains(&name) {
        log::warn!(
            "unknown {flag} color {name:?}, expected one of {}",
            names.join("|")
        );
    }
    colors.resolve(name)
}
