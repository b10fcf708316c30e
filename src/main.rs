use clap::{Parser, Subcommand, ValueEnum};
use plus_codes_rs::{
    CODE_PRECISION_NORMAL, CsvCodeConfig, GeometryFormat, PlusCode, csv_to_plus_code_csv, decode,
    is_full, is_padded, is_short, is_valid, recover_nearest, shorten,
};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "plus-codes")]
#[command(about = "Encode, decode, shorten and recover Open Location Codes")]
struct Args {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a latitude/longitude into a full code
    Encode {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
        /// Number of significant digits (2, 4, 6, 8, 10 or 11-15)
        #[arg(short, long, default_value_t = CODE_PRECISION_NORMAL)]
        length: usize,
    },
    /// Decode a full code into its bounding box
    Decode {
        code: String,
        /// Print the area as JSON
        #[arg(long)]
        json: bool,
    },
    /// Shorten a full code relative to a nearby reference location
    Shorten {
        code: String,
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
    /// Recover the nearest full code from a short code and a reference location
    Recover {
        code: String,
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
    /// Report whether a code is valid, short, full and padded
    Validate { code: String },
    /// Annotate a CSV file with a plus_code column
    Csv {
        input: PathBuf,
        output: PathBuf,
        /// Column holding WKT or GeoJSON geometry
        #[arg(long)]
        geometry_column: Option<String>,
        /// Column holding longitudes
        #[arg(long)]
        lng_column: Option<String>,
        /// Column holding latitudes
        #[arg(long)]
        lat_column: Option<String>,
        #[arg(short, long, default_value_t = CODE_PRECISION_NORMAL)]
        length: usize,
        /// Columns to drop from the output
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,
        /// Also write each code's rectangle in this format
        #[arg(long, value_enum)]
        geometry: Option<GeometryArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum GeometryArg {
    Wkt,
    Geojson,
}

impl From<GeometryArg> for GeometryFormat {
    fn from(arg: GeometryArg) -> Self {
        match arg {
            GeometryArg::Wkt => GeometryFormat::Wkt,
            GeometryArg::Geojson => GeometryFormat::GeoJson,
        }
    }
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("plus_codes_rs=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("plus_codes_rs=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(args.verbose);

    match args.command {
        Command::Encode {
            latitude,
            longitude,
            length,
        } => {
            let code = PlusCode::from_lat_lng(latitude, longitude, length)?;
            println!("{}", code);
        }
        Command::Decode { code, json } => {
            let area = decode(&code)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&area)?);
            } else {
                println!("length: {}", area.code_length);
                println!("south-west: ({}, {})", area.latitude_lo, area.longitude_lo);
                println!("north-east: ({}, {})", area.latitude_hi, area.longitude_hi);
                println!("center: ({}, {})", area.latitude_center(), area.longitude_center());
            }
        }
        Command::Shorten {
            code,
            latitude,
            longitude,
        } => {
            println!("{}", shorten(&code, latitude, longitude)?);
        }
        Command::Recover {
            code,
            latitude,
            longitude,
        } => {
            println!("{}", recover_nearest(&code, latitude, longitude)?);
        }
        Command::Validate { code } => {
            println!("valid: {}", is_valid(&code));
            println!("short: {}", is_short(&code));
            println!("full: {}", is_full(&code));
            println!("padded: {}", is_padded(&code));
        }
        Command::Csv {
            input,
            output,
            geometry_column,
            lng_column,
            lat_column,
            length,
            exclude,
            geometry,
        } => {
            let mut config = match (geometry_column, lng_column, lat_column) {
                (Some(column), None, None) => CsvCodeConfig::new(column, length),
                (None, Some(lng), Some(lat)) => CsvCodeConfig::from_coords(lng, lat, length),
                _ => {
                    return Err(
                        "specify either --geometry-column or both --lng-column and --lat-column"
                            .into(),
                    );
                }
            };
            config = config.exclude(exclude);
            if let Some(format) = geometry {
                config = config.with_code_geometry(format.into());
            }

            tracing::info!(input = %input.display(), output = %output.display(), "converting csv");
            csv_to_plus_code_csv(&input, &output, &config)?;
        }
    }

    Ok(())
}
