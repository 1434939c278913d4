//! scmp - Structural compare CLI tool
//!
//! A command line tool for order-insensitive comparison of JSON/YAML files.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use structural_compare::{
    count_differences, diff_status, encode, parse_path, resolve, value, IgnoredKeys, Side, Value,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    eprintln!(
        r#"scmp {} - Structural compare CLI tool

USAGE:
    scmp [OPTIONS] <COMMAND>

OPTIONS:
    -i, --ignore <KEY>       Object key to ignore at every depth (repeatable)
    -o, --output <FILE>      Output location. Use '-' for stdout (default: -)
    -h, --help               Print help information
    -V, --version            Print version information

COMMANDS:
    status --lhs <FILE> [--rhs <FILE>] [--side left|right]
                             Classify the pair as same/different/missing/added.
                             Omitting --rhs means the other side is absent.
    distance --lhs <FILE> --rhs <FILE>
                             Count the differences between two files
    encode <FILE>            Print the canonical order-insensitive encoding
    get <FILE> <PATH>        Resolve a path like a.b[2].c against a file
"#,
        VERSION
    );
}

fn print_version() {
    println!("scmp {}", VERSION);
}

#[derive(Debug)]
struct Cli {
    ignore: Vec<String>,
    output: String,
    command: Command,
}

#[derive(Debug)]
enum Command {
    Status {
        lhs: PathBuf,
        rhs: Option<PathBuf>,
        side: Side,
    },
    Distance {
        lhs: PathBuf,
        rhs: PathBuf,
    },
    Encode {
        file: PathBuf,
    },
    Get {
        file: PathBuf,
        path: String,
    },
}

fn parse_args() -> Result<Cli, String> {
    let args: Vec<String> = env::args().collect();
    let mut i = 1;

    let mut ignore: Vec<String> = Vec::new();
    let mut output = "-".to_string();
    let mut command: Option<Command> = None;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-i" | "--ignore" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --ignore".to_string());
                }
                ignore.push(args[i].clone());
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --output".to_string());
                }
                output = args[i].clone();
            }
            "status" => {
                let mut lhs: Option<PathBuf> = None;
                let mut rhs: Option<PathBuf> = None;
                let mut side = Side::Left;
                i += 1;
                while i < args.len() {
                    match args[i].as_str() {
                        "--lhs" => {
                            i += 1;
                            if i >= args.len() {
                                return Err("Missing value for --lhs".to_string());
                            }
                            lhs = Some(PathBuf::from(&args[i]));
                        }
                        "--rhs" => {
                            i += 1;
                            if i >= args.len() {
                                return Err("Missing value for --rhs".to_string());
                            }
                            rhs = Some(PathBuf::from(&args[i]));
                        }
                        "--side" => {
                            i += 1;
                            if i >= args.len() {
                                return Err("Missing value for --side".to_string());
                            }
                            side = args[i].parse()?;
                        }
                        _ => {
                            i -= 1;
                            break;
                        }
                    }
                    i += 1;
                }
                match lhs {
                    Some(l) => {
                        command = Some(Command::Status { lhs: l, rhs, side });
                    }
                    None => {
                        return Err("status requires a --lhs argument".to_string());
                    }
                }
            }
            "distance" => {
                let mut lhs: Option<PathBuf> = None;
                let mut rhs: Option<PathBuf> = None;
                i += 1;
                while i < args.len() {
                    match args[i].as_str() {
                        "--lhs" => {
                            i += 1;
                            if i >= args.len() {
                                return Err("Missing value for --lhs".to_string());
                            }
                            lhs = Some(PathBuf::from(&args[i]));
                        }
                        "--rhs" => {
                            i += 1;
                            if i >= args.len() {
                                return Err("Missing value for --rhs".to_string());
                            }
                            rhs = Some(PathBuf::from(&args[i]));
                        }
                        _ => {
                            i -= 1;
                            break;
                        }
                    }
                    i += 1;
                }
                match (lhs, rhs) {
                    (Some(l), Some(r)) => {
                        command = Some(Command::Distance { lhs: l, rhs: r });
                    }
                    _ => {
                        return Err("distance requires --lhs and --rhs arguments".to_string());
                    }
                }
            }
            "encode" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing file argument for encode".to_string());
                }
                command = Some(Command::Encode {
                    file: PathBuf::from(&args[i]),
                });
            }
            "get" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing file argument for get".to_string());
                }
                let file = PathBuf::from(&args[i]);
                i += 1;
                if i >= args.len() {
                    return Err("Missing path argument for get".to_string());
                }
                command = Some(Command::Get {
                    file,
                    path: args[i].clone(),
                });
            }
            arg => {
                return Err(format!("Unknown argument: {}", arg));
            }
        }
        i += 1;
    }

    let command = command.ok_or_else(|| "Missing command".to_string())?;

    Ok(Cli {
        ignore,
        output,
        command,
    })
}

fn main() -> ExitCode {
    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_help();
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let ignored: IgnoredKeys = cli.ignore.iter().cloned().collect();

    // Open output
    let mut output: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(fs::File::create(&cli.output).map_err(|e| {
            format!("Failed to create output file {:?}: {}", cli.output, e)
        })?)
    };

    match cli.command {
        Command::Status { lhs, rhs, side } => {
            status(&lhs, rhs.as_deref(), side, &ignored, &mut output)?;
        }
        Command::Distance { lhs, rhs } => {
            distance(&lhs, &rhs, &ignored, &mut output)?;
        }
        Command::Encode { file } => {
            encode_file(&file, &ignored, &mut output)?;
        }
        Command::Get { file, path } => {
            get(&file, &path, &mut output)?;
        }
    }

    Ok(())
}

fn load(file: &std::path::Path) -> Result<Value, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(file)
        .map_err(|e| format!("Failed to read file {:?}: {}", file, e))?;
    // YAML is a superset of JSON, so this accepts both.
    let value = value::from_yaml(&content)
        .map_err(|e| format!("Failed to parse file {:?}: {}", file, e))?;
    Ok(value)
}

fn status(
    lhs: &std::path::Path,
    rhs: Option<&std::path::Path>,
    side: Side,
    ignored: &IgnoredKeys,
    output: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let lhs_value = load(lhs)?;
    let rhs_value = match rhs {
        Some(file) => Some(load(file)?),
        None => None,
    };

    let result = diff_status(Some(&lhs_value), rhs_value.as_ref(), side, ignored)?;
    writeln!(output, "{}", result)?;
    Ok(())
}

fn distance(
    lhs: &std::path::Path,
    rhs: &std::path::Path,
    ignored: &IgnoredKeys,
    output: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let lhs_value = load(lhs)?;
    let rhs_value = load(rhs)?;

    let count = count_differences(Some(&lhs_value), Some(&rhs_value), ignored)?;
    writeln!(output, "{}", count)?;
    Ok(())
}

fn encode_file(
    file: &std::path::Path,
    ignored: &IgnoredKeys,
    output: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = load(file)?;
    writeln!(output, "{}", encode(&value, ignored)?)?;
    Ok(())
}

fn get(
    file: &std::path::Path,
    path: &str,
    output: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = load(file)?;
    if parse_path(path).is_empty() && !path.is_empty() {
        eprintln!("Warning: path {:?} produced no tokens", path);
    }

    match resolve(&root, path) {
        Some(found) => {
            writeln!(output, "{}", value::to_json(found)?)?;
        }
        None => {
            writeln!(output, "undefined")?;
        }
    }
    Ok(())
}
