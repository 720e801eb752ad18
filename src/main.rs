use clap::{Args, Parser, Subcommand};
use enigma::cli::{
    generate_settings, show_info, translate_file, GenerateOptions, MachineSource,
    TranslateOptions,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Version info from build.rs
const VERSION: &str = env!("ENIGMA_VERSION");
const BUILD: &str = env!("ENIGMA_BUILD");
const PROFILE: &str = env!("ENIGMA_PROFILE");
const GIT_HASH: &str = env!("ENIGMA_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "enigma")]
#[command(author, about = "Two-rotor Enigma cipher machine", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Machine settings: a JSON settings file, or one file per component
#[derive(Args)]
struct SourceArgs {
    /// JSON settings file (from `enigma generate`)
    #[arg(long, conflicts_with_all = ["rotor_one", "rotor_two", "reflector"])]
    settings: Option<PathBuf>,

    /// Permutation file for the first rotor
    #[arg(long, requires_all = ["rotor_two", "reflector"])]
    rotor_one: Option<PathBuf>,

    /// Permutation file for the second rotor
    #[arg(long, requires_all = ["rotor_one", "reflector"])]
    rotor_two: Option<PathBuf>,

    /// Permutation file for the reflector
    #[arg(long, requires_all = ["rotor_one", "rotor_two"])]
    reflector: Option<PathBuf>,
}

impl SourceArgs {
    fn into_source(self) -> Result<MachineSource, String> {
        match (self.settings, self.rotor_one, self.rotor_two, self.reflector) {
            (Some(path), _, _, _) => Ok(MachineSource::Settings(path)),
            (None, Some(rotor_one), Some(rotor_two), Some(reflector)) => Ok(MachineSource::Files {
                rotor_one,
                rotor_two,
                reflector,
            }),
            _ => Err("provide --settings, or all of --rotor-one, --rotor-two and --reflector".into()),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt or decrypt a message file (the same operation)
    #[command(alias = "t", visible_aliases = ["encrypt", "decrypt"])]
    Translate {
        #[command(flatten)]
        source: SourceArgs,

        /// Message file to translate
        input: PathBuf,

        /// Output file (defaults to <INPUT>.out)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Reject messages containing anything but a-z, space and newline
        #[arg(long)]
        strict: bool,
    },

    /// Show the translation tables and fingerprint of a machine's settings
    #[command(alias = "i")]
    Info {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Write random valid settings to a JSON file
    #[command(alias = "g")]
    Generate {
        /// Output settings file
        output: PathBuf,

        /// Seed for reproducible settings
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn default_output(input: &std::path::Path) -> PathBuf {
    let mut os = input.as_os_str().to_os_string();
    os.push(".out");
    PathBuf::from(os)
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("enigma {}", get_version());
        return ExitCode::SUCCESS;
    }

    init_logging(&cli.log_level);

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Translate {
            source,
            input,
            output,
            strict,
        } => {
            let source = match source.into_source() {
                Ok(source) => source,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            let output = output.unwrap_or_else(|| default_output(&input));
            let options = TranslateOptions { strict };

            translate_file(&input, &output, &source, &options).map(|report| {
                println!(
                    "Translated {} letters ({} symbols) to {}",
                    report.letters,
                    report.symbols,
                    output.display()
                );
                println!("Translation successfully completed.");
            })
        }

        Commands::Info { source } => {
            let source = match source.into_source() {
                Ok(source) => source,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            show_info(&source).map(|info| print!("{}", info))
        }

        Commands::Generate { output, seed } => {
            let options = GenerateOptions { seed };
            generate_settings(&output, &options).map(|settings| {
                println!("Wrote settings to {}", output.display());
                println!("Fingerprint: {}", settings.fingerprint());
            })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
