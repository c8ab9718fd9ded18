use clap::Parser;
use libshift::*;
use libshift::utils::configuration::print_config;
use tracing_subscriber::EnvFilter;

use crate::config::*;


mod config;


/// Move and resize the active window
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Command to execute
    #[clap(subcommand)]
    command: Command,

    /// X display to connect to (overrides the configuration file)
    #[clap(short, long)]
    display: Option<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::Args)]
pub struct Position {
    #[clap(allow_negative_numbers = true)]
    x: i32,
    #[clap(allow_negative_numbers = true)]
    y: i32,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::Args)]
pub struct Size { width: u32, height: u32 }

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::Args)]
pub struct Placement {
    #[clap(allow_negative_numbers = true)]
    x: i32,
    #[clap(allow_negative_numbers = true)]
    y: i32,
    width: u32,
    height: u32,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::Args)]
pub struct Code {
    #[clap(allow_negative_numbers = true)]
    code: i32,
}

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, clap::Subcommand)]
pub enum Command {
    /// Print the id of the active window
    Active,

    /// Describe an error code
    DescribeError(Code),

    /// Print the geometry of the active window including its decoration
    Geometry,

    /// Move the active window
    Move(Position),

    /// Move and resize the active window
    Place(Placement),

    /// Print the default configuration
    PrintDefaultConfig,

    /// Resize the active window including its decoration
    Resize(Size),

    /// Print the size of the screen
    Screen,
}


impl Command {
    fn execute(&self, config: &Configuration) -> Result<(), String> {
        return match self {
            Command::DescribeError(code) => {
                let error = ErrorCode::try_from(code.code)
                    .map_err(|code| format!("unknown error code {}", code))?;
                println!("{}", error.message());
                Ok(())
            },
            Command::PrintDefaultConfig => {
                print_config(&Configuration::default());
                Ok(())
            },
            _ => {
                let service = x11_service(config.display.as_deref())?;
                self.execute_on(&service).map_err(String::from)
            },
        };
    }

    fn execute_on(&self, service: &GeometryService<X11Connector>) -> Result<(), ErrorCode> {
        match self {
            Command::Active => {
                let window = service.get_active_window()?;
                println!("0x{:x}", window.window_id());
                release_window_handle(window);
            },
            Command::Geometry => {
                let window = service.get_active_window()?;
                let (x, y, w, h) = service.get_window_geometry(&window)?.as_tuple();
                println!("{} {} {} {}", x, y, w, h);
            },
            Command::Move(pos) => {
                let window = service.get_active_window()?;
                service.set_window_position(&window, pos.x, pos.y)?;
            },
            Command::Place(p) => {
                let window = service.get_active_window()?;
                service.set_window_geometry(&window, Geometry::new(p.x, p.y, p.width, p.height))?;
            },
            Command::Resize(size) => {
                let window = service.get_active_window()?;
                service.set_window_size(&window, size.width, size.height)?;
            },
            Command::Screen => {
                let (_, _, w, h) = service.get_screen_geometry()?.as_tuple();
                println!("{} {}", w, h);
            },
            Command::DescribeError(_) | Command::PrintDefaultConfig => (),
        }
        return Ok(());
    }
}

fn init_logging(config: &Configuration) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();

    let (mut config, config_error) = match read_config() {
        Ok(config) => (config, None),
        Err(msg) => (Configuration::default(), Some(msg)),
    };
    if args.display.is_some() {
        config.display = args.display.clone();
    }

    init_logging(&config);
    if let Some(msg) = config_error {
        tracing::info!("Unable to read configuration: {}", msg);
    }
    install_error_handler();

    if let Err(msg) = args.command.execute(&config) {
        eprintln!("Error: {}", msg);
        std::process::exit(1);
    }
}
